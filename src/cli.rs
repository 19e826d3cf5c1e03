//! The CLI.

use {
    crate::rewrite::rewrite_bytes,
    clap::{AppSettings, Parser},
    eyre::{Result, WrapErr},
    std::{
        env,
        io::{self, Read, Write},
    },
    tracing::{debug, instrument, trace},
};

/// Convert X'..' hex literals to regular strings.
///
/// Reads all of stdin, replaces every `X'<lowercase hex>'` with a
/// single-quoted string holding the UTF-8 text those bytes encode, and writes
/// the result to stdout. Nothing is written if any literal fails to decode.
#[derive(Parser, Debug, Clone)]
#[clap(
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    max_term_width = max_term_width(),
    setting = AppSettings::DeriveDisplayOrder,
)]
pub struct Args {
    /// Decrease log verbosity. May be used multiple times.
    #[clap(long, short = 'q', parse(from_occurrences))]
    pub quiet: i32,

    /// Increase log verbosity. May be used multiple times.
    #[clap(long, short = 'v', parse(from_occurrences))]
    pub verbose: i32,
}

/// Used to override the `max_term_width` of our derived [`Args`]
/// using the **build time** environment variable `MAX_TERM_WIDTH`.
fn max_term_width() -> usize {
    option_env!("MAX_TERM_WIDTH")
        .and_then(|width| width.parse().ok())
        .unwrap_or(100)
}

/// CLI entry point.
///
/// # Errors
///
/// If stdin can't be read, stdout can't be written, or the input contains a
/// hex literal that doesn't decode to text.
#[instrument(level = "debug", skip(args))]
pub fn main(args: Args) -> Result<()> {
    trace!("Running with: {:?}", args);

    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .wrap_err("failed to read stdin")?;
    debug!("Read {} bytes from stdin.", input.len());

    let output = rewrite_bytes(&input).wrap_err("failed to convert hex literals")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .wrap_err("failed to write stdout")?;
    stdout.flush().wrap_err("failed to flush stdout")?;
    debug!("Wrote {} bytes to stdout.", output.len());

    Ok(())
}

/// Initialize the typical global environment and parses the typical [Args] for
/// debin's [main] CLI entry point.
///
/// # Errors
///
/// If called multiple times, or if other code has already installed a global
/// error report handler.
///
/// # Panics
///
/// If other code has already installed a global tracing subscriber.
pub fn init() -> Result<Args> {
    color_eyre::install()?;

    let args = Args::parse();

    let default_verbosity = 2;

    let log_env = env::var("RUST_LOG").unwrap_or_default();

    let log_level = if args.verbose == 0 && args.quiet == 0 && !log_env.is_empty() {
        log_env
    } else {
        match default_verbosity + args.verbose - args.quiet {
            i32::MIN..=0 => "off".into(),
            1 => "error".into(),
            2 => "warn".into(),
            3 => "info".into(),
            4 => "debug".into(),
            5..=i32::MAX => "trace".into(),
        }
    };

    // stdout carries the converted text, so logs go to stderr.
    tracing_subscriber::util::SubscriberInitExt::init(tracing_subscriber::Layer::with_subscriber(
        tracing_error::ErrorLayer::default(),
        tracing_subscriber::fmt()
            .with_env_filter(::tracing_subscriber::EnvFilter::new(log_level))
            .with_writer(io::stderr)
            .with_target(false)
            .with_span_events(
                tracing_subscriber::fmt::format::FmtSpan::ENTER
                    | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
            )
            .compact()
            .finish(),
    ));

    trace!("Initialized from: {:#?}", args);

    Ok(args)
}

fn main() -> Result<(), ::eyre::Report> {
    let args = debin::cli::init()?;
    debin::cli::main(args)
}

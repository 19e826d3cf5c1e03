use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn debin(stdin: &[u8]) -> Output {
    debin_with(&[], stdin)
}

fn debin_with(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_debin"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn converts_stdin_to_stdout() {
    let output = debin(b"INSERT INTO t VALUES(X'68656c6c6f',X'');");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"INSERT INTO t VALUES('hello','');");
}

#[test]
fn every_verbosity_leaves_stdout_exact() {
    let runs: [&[&str]; 4] = [&[], &["-q"], &["-v"], &["-vvvv"]];
    for args in runs {
        let output = debin_with(args, b"a X'6869' b");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(0), "{args:?}: {stderr}");
        assert_eq!(output.stdout, b"a 'hi' b", "{args:?}: {stderr}");
    }
}

#[test]
fn logs_go_to_stderr() {
    let output = debin_with(&["-vvvv"], b"X'6869'");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"'hi'");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Rewrote 1 hex literal(s)"), "{stderr}");
}

#[test]
fn keeps_trailing_newline_as_is() {
    let output = debin(b"X'6869'\n\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"'hi'\n\n");

    let output = debin(b"");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_literal_fails_without_output() {
    let output = debin(b"fine X'6869'\nbroken X'abc'\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("odd number of digits"), "{stderr}");
}

#[test]
fn undecodable_payload_fails_without_output() {
    let output = debin(b"X'ff'");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not decode to valid UTF-8"), "{stderr}");
}

#[test]
fn undecodable_input_fails_without_output() {
    let output = debin(b"\xff X'6869'");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input is not valid UTF-8"), "{stderr}");
}

#[test]
fn version() {
    let output = Command::new(env!("CARGO_BIN_EXE_debin"))
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "{stdout}");
}

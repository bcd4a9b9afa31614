use std::{
    io::Write,
    process::{Command, Stdio},
};

pub fn run_rollql(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_rollql"))
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run rollql: {error}"))
}

pub fn run_rollql_with_stdin(args: &[&str], stdin_sql: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rollql"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|error| panic!("failed to run rollql with stdin: {error}"));

    let mut stdin = child
        .stdin
        .take()
        .unwrap_or_else(|| panic!("failed to capture child stdin"));
    // The child may exit before reading stdin (e.g. on an argument error);
    // a broken pipe then is expected, not a harness failure.
    if let Err(error) = stdin.write_all(stdin_sql.as_bytes()) {
        if error.kind() != std::io::ErrorKind::BrokenPipe {
            panic!("failed to write stdin payload: {error}");
        }
    }
    drop(stdin);

    child
        .wait_with_output()
        .unwrap_or_else(|error| panic!("failed to wait for rollql: {error}"))
}

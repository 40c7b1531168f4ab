use std::path::Path;
use std::process::Command;

use crate::suite::{Line, Suite};

const TOKEN_MARKER: &str = "ACCESS_TOKEN=";

pub fn run(program: &Path, suite: Suite) {
    println!("[RUN] {} {}", program.display(), suite.args.join(" "));
    let output = Command::new(program)
        .args(&suite.args)
        .output()
        .unwrap_or_else(|err| panic!("spawn '{}': {}", program.display(), err));

    let stdout = String::from_utf8(output.stdout).expect("stdout is not utf-8");
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        output.status.success(),
        suite.success,
        "unexpected exit status {:?}\nstdout:\n{}\nstderr:\n{}",
        output.status.code(),
        stdout,
        stderr,
    );

    if !suite.success {
        assert!(
            !lines.iter().any(|line| line.starts_with(TOKEN_MARKER)),
            "failed run printed a token:\n{}",
            stdout
        );
    }

    if let Some(fragment) = &suite.stderr_contains {
        assert!(
            stderr.contains(fragment.as_str()),
            "stderr does not contain '{}':\n{}",
            fragment,
            stderr
        );
    }

    assert_eq!(
        lines.len(),
        suite.stdout.len(),
        "expect {} lines, got:\n{}",
        suite.stdout.len(),
        stdout
    );
    for (idx, (expected, actual)) in suite.stdout.iter().zip(&lines).enumerate() {
        println!("[LINE {}] {}", idx, actual);
        check_line(expected, actual);
    }
}

fn check_line(expected: &Line, actual: &str) {
    match expected {
        Line::Text { text } => assert_eq!(actual, text),
        Line::Blank => assert!(actual.is_empty(), "expect blank line, got '{}'", actual),
        Line::Token {
            key,
            password,
            prefix,
        } => {
            let token = actual
                .strip_prefix(key.as_str())
                .and_then(|rest| rest.strip_prefix('='))
                .unwrap_or_else(|| panic!("expect '{}=<token>', got '{}'", key, actual));
            assert!(!token.is_empty(), "empty token");
            assert!(
                !token.chars().any(char::is_whitespace),
                "token contains whitespace: '{}'",
                token
            );
            assert_ne!(token, password, "token equals the password");
            if let Some(prefix) = prefix {
                assert!(
                    token.starts_with(prefix.as_str()),
                    "token '{}' does not start with '{}'",
                    token,
                    prefix
                );
            }
            assert!(
                passwd_util::verify_token(token, password),
                "token '{}' does not verify against '{}'",
                token,
                password
            );
        }
    }
}

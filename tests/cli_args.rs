use std::process::Command;

use tempfile::TempDir;

fn showcase() -> Command {
    Command::new(env!("CARGO_BIN_EXE_showcase"))
}

#[test]
fn help_lists_flags() {
    let output = showcase().arg("--help").output().expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--route", "--user", "--log-file"] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn unknown_route_exits_with_error() {
    let dir = TempDir::new().expect("temp dir");
    let output = showcase()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["--route", "/x"])
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Config validation failed: Route '/x' not found"),
        "{stderr}"
    );
}

#[test]
fn invalid_config_file_exits_with_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").expect("write config");
    let output = showcase()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms must be greater than zero"), "{stderr}");
}

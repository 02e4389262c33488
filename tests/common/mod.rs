// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_nette-lint-hooks"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn run_hook(subcommand: &str, stdin_input: &str) -> (String, String, i32) {
    run_hook_env(subcommand, stdin_input, &[], &[])
}

/// Runs the binary with the given stdin, extra args, and environment
/// overrides. The discovery-related variables are always cleared first so a
/// developer's real Composer installation cannot leak into a test.
/// Returns (stdout, stderr, exit_code).
pub fn run_hook_env(
    subcommand: &str,
    stdin_input: &str,
    extra_args: &[&str],
    env: &[(&str, &str)],
) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    cmd.arg(subcommand);
    for arg in extra_args {
        cmd.arg(arg);
    }
    for var in ["COMPOSER_HOME", "APPDATA", "XDG_CONFIG_HOME", "HOME"] {
        cmd.env_remove(var);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    let output = cmd
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn make_input_json(file_path: &str, cwd: &str) -> String {
    serde_json::json!({
        "session_id": "sess-e2e-test",
        "transcript_path": "/tmp/transcript.json",
        "cwd": cwd,
        "hook_event_name": "PostToolUse",
        "tool_name": "Edit",
        "tool_input": {"file_path": file_path},
        "tool_use_id": "toolu_e2e"
    })
    .to_string()
}

pub fn input_for(file_path: &Path, cwd: &Path) -> String {
    make_input_json(file_path.to_str().unwrap(), cwd.to_str().unwrap())
}

/// Writes an executable shell script at `dir/relative`, creating parent
/// directories as needed.
pub fn write_fake_helper(dir: &Path, relative: &str, body: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

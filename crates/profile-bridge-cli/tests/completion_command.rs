use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_profile_bridge_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("profile-bridge")
}

#[test]
fn test_completion_command_help() {
    let mut cmd = Command::new(get_profile_bridge_bin());
    cmd.arg("completion").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generate shell completion scripts"))
        .stdout(predicate::str::contains("bash"))
        .stdout(predicate::str::contains("zsh"));
}

#[test]
fn test_completion_bash_generates_script() {
    let mut cmd = Command::new(get_profile_bridge_bin());
    cmd.arg("completion").arg("--shell").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("complete -F"))
        .stdout(predicate::str::contains("profile-bridge"))
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn test_completion_zsh_generates_script() {
    let mut cmd = Command::new(get_profile_bridge_bin());
    cmd.arg("completion").arg("--shell").arg("zsh");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef profile-bridge"))
        .stdout(predicate::str::contains("replay"));
}

#[test]
fn test_completion_requires_shell() {
    let mut cmd = Command::new(get_profile_bridge_bin());
    cmd.arg("completion");

    cmd.assert().failure();
}

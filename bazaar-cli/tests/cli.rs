use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_subcommands() {
    Command::cargo_bin("bazaar-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("listings"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("create-user"));
}

#[test]
fn status_without_a_session_file_reports_nothing_saved() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    Command::cargo_bin("bazaar-cli")
        .unwrap()
        .args([
            "--session-file",
            session_file.to_str().unwrap(),
            "status",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No session found"));
}

#[test]
fn status_with_a_saved_session_prints_it() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");
    std::fs::write(
        &session_file,
        r#"{"user_id": "42", "email": "e@x.com", "password": "p"}"#,
    )
    .unwrap();

    Command::cargo_bin("bazaar-cli")
        .unwrap()
        .args([
            "--session-file",
            session_file.to_str().unwrap(),
            "status",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("User ID: 42"))
        .stdout(predicate::str::contains("e@x.com"));
}

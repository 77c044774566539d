use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("game-catalog")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_browse_unreachable_server_shows_empty_list() {
    Command::cargo_bin("game-catalog")
        .unwrap()
        .env("RUST_LOG", "off")
        .args(["browse", "--url", "http://127.0.0.1:1/api/games"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No games found."));
}

#[test]
fn test_browse_rejects_unknown_sort() {
    Command::cargo_bin("game-catalog")
        .unwrap()
        .args(["browse", "--sort", "name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_serve_fails_when_db_cannot_be_created() {
    let temp_dir = tempfile::tempdir().unwrap();
    // Parent of the db path is a regular file, so the collection cannot be created
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let db_path = blocker.join("db.json");

    Command::cargo_bin("game-catalog")
        .unwrap()
        .env("RUST_LOG", "off")
        .args(["serve", "--port", "0", "--db-file"])
        .arg(&db_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

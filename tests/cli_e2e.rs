//! End-to-end CLI tests for the literalura binary.
//!
//! None of these scenarios reach the network.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn literalura(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("literalura").unwrap();
    cmd.arg("--database").arg(temp_dir.path().join("catalog.db"));
    cmd
}

/// Test that option 0 prints the menu and the goodbye message.
#[test]
fn test_binary_exit_option_prints_goodbye() {
    let temp_dir = TempDir::new().unwrap();
    literalura(&temp_dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DESAFIO LITERALURA"))
        .stdout(predicate::str::contains("Encerrando a LiterAlura!"));
}

/// Test that the loop ends cleanly when stdin closes.
#[test]
fn test_binary_end_of_input_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    literalura(&temp_dir).write_stdin("").assert().success();
}

/// Test that a non-numeric choice is rejected without ending the loop.
#[test]
fn test_binary_invalid_choice_reprompts() {
    let temp_dir = TempDir::new().unwrap();
    literalura(&temp_dir)
        .write_stdin("abc\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Opção inválida! Por favor, digite um número.",
        ))
        .stdout(predicate::str::contains("Encerrando a LiterAlura!"));
}

/// Test that listing an empty catalog reports no books and creates the database file.
#[test]
fn test_binary_list_books_on_fresh_catalog() {
    let temp_dir = TempDir::new().unwrap();
    literalura(&temp_dir)
        .write_stdin("3\n8\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum livro registrado."))
        .stdout(predicate::str::contains("Nenhum autor registrado."));
    assert!(temp_dir.path().join("catalog.db").exists());
}

/// Test that --in-memory runs without touching the filesystem.
#[test]
fn test_binary_in_memory_flag_accepted() {
    let mut cmd = Command::cargo_bin("literalura").unwrap();
    cmd.arg("--in-memory")
        .write_stdin("9\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Não há livros cadastrados."));
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("literalura").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gutendex"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("literalura").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("literalura"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("literalura").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that a relative API base URL is rejected before the menu starts.
#[test]
fn test_binary_relative_api_base_url_rejected() {
    let temp_dir = TempDir::new().unwrap();
    literalura(&temp_dir)
        .args(["--api-base-url", "gutendex.com"])
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid API base URL"))
        .stdout(predicate::str::contains("DESAFIO").not());
}

/// Test that -v and -q are accepted and logs stay off stdout.
#[test]
fn test_binary_verbosity_flags_keep_stdout_clean() {
    let temp_dir = TempDir::new().unwrap();
    literalura(&temp_dir)
        .arg("-vv")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO").not());

    literalura(&temp_dir).arg("-q").write_stdin("0\n").assert().success();
}

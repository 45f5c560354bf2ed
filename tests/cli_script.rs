use account_ledger::config::{Config, ConfigManager, CONFIG_ENV_VAR};
use account_ledger::cli::SCRIPT_ENV_VAR;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_command(config_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("account_ledger_cli").unwrap();
    cmd.env(SCRIPT_ENV_VAR, "1")
        .env(CONFIG_ENV_VAR, config_path)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_prints_acceptance_statement() {
    let dir = tempdir().unwrap();
    let input = "date 10/01/2012\ndeposit 1000\ndate 13/01/2012\ndeposit 2000\n\
                 date 14/01/2012\nwithdraw 500\nstatement\nexit\n";

    script_command(&dir.path().join("missing.json"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            "Date || Amount || Balance\n\
             14/01/2012 || -500 || 2500\n\
             13/01/2012 || 2000 || 3000\n\
             10/01/2012 || 1000 || 1000\n",
        );
}

#[test]
fn overdraft_prints_nothing_and_unknown_command_suggests() {
    let dir = tempdir().unwrap();

    script_command(&dir.path().join("missing.json"))
        .write_stdin("withdraw 100\nstatment\nstatement\nbalance\n")
        .assert()
        .success()
        .stdout("Date || Amount || Balance\n0\n")
        .stderr(contains("unknown command `statment`"))
        .stderr(contains("did you mean `statement`?"));
}

#[test]
fn config_file_changes_date_input_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = Config {
        date_input_format: "%Y-%m-%d".into(),
        ..Config::default()
    };
    ConfigManager::with_path(&path).save(&config).unwrap();

    script_command(&path)
        .write_stdin("date 2020-02-29\ndeposit 42.5\nstatement\n")
        .assert()
        .success()
        .stdout("Date || Amount || Balance\n29/02/2020 || 42.5 || 42.5\n");
}

#[test]
fn invalid_config_fails_startup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    script_command(&path)
        .write_stdin("statement\n")
        .assert()
        .failure()
        .stderr(contains("Serialization error"));
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("hungermap").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("hungermap"));
}

// Code validation happens before any network call, so this stays offline.
#[test]
fn cli_rejects_malformed_country_code() {
    let mut cmd = Command::cargo_bin("hungermap").unwrap();
    cmd.args(["info", "--country", "ZZZZ"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid ISO3 country code"));
}

#[test]
fn cli_fcs_rejects_malformed_country_code() {
    let mut cmd = Command::cargo_bin("hungermap").unwrap();
    cmd.args(["fcs", "--country", "A1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid ISO3 country code"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_countries() {
    let mut cmd = Command::cargo_bin("hungermap").unwrap();
    cmd.arg("countries");
    cmd.assert().success();
}

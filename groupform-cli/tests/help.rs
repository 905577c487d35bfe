use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("groupform");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("groupform"))
        .stdout(contains("--defaults"));
}

#[test]
fn prints_the_validation_schema() {
    let mut cmd = cargo::cargo_bin_cmd!("groupform");
    cmd.arg("--print-schema")
        .assert()
        .success()
        .stdout(contains("\"groupName\""))
        .stdout(contains("\"required\""));
}

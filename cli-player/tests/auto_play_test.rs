use assert_cmd::prelude::*;
use predicates::prelude::predicate;
use std::process::Command;

#[test]
fn auto_play_test() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("yathplayer")?;

    cmd.args(["tests/data/forest.json", "-a"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("== clearing =="))
        .stdout(predicate::str::contains("?> "));

    Ok(())
}

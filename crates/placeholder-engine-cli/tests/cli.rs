use assert_cmd::Command;
use predicates::prelude::*;

fn phe() -> Command {
    Command::cargo_bin("phe").expect("binary builds")
}

#[test]
fn evaluates_time_diff_against_pinned_clock() {
    phe()
        .args(["--now", "2026-03-02T12:00:00", r#"diffDays.second."18:00:00".false"#])
        .assert()
        .success()
        .stdout(predicate::str::diff("21600\n"));
}

#[test]
fn reports_weekday_name() {
    // 2026-03-02 is a Monday.
    phe()
        .args(["--now", "2026-03-02T12:00:00", "getTheWeek"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Monday\n"));
}

#[test]
fn resolves_placeholders_from_the_environment() {
    phe()
        .env("EXPIRY", "1mo 6d")
        .arg(r#"luckPermsExpiryTime."{EXPIRY}""#)
        .assert()
        .success()
        .stdout(predicate::str::diff("36\n"));
}

#[test]
fn unknown_selector_prints_the_message() {
    phe()
        .arg("definitelyNotASelector")
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn detached_backends_answer_with_sentinels() {
    phe()
        .arg("authMe.registered")
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));
    phe()
        .arg("bukkit.itemInHand")
        .assert()
        .success()
        .stdout(predicate::str::diff("AIR\n"));
}

#[test]
fn json_output_wraps_the_result() {
    phe()
        .args(["--now", "2026-03-02T12:00:00", "--json", "getTheWeek"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""output":"Monday""#));
}

#[test]
fn malformed_now_is_an_error() {
    phe()
        .args(["--now", "yesterday", "getTheWeek"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse --now"));
}

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_strong_password_passes() {
    cargo_bin_cmd!("datxb")
        .args(["password", "Abcdef1!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Lowercase letter"))
        .stdout(predicate::str::contains("✓ 8+ characters"))
        .stdout(predicate::str::contains("Password meets all requirements"));
}

#[test]
fn test_lowercase_only_password_fails() {
    cargo_bin_cmd!("datxb")
        .args(["password", "abcdefgh"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓ 8+ characters"))
        .stdout(predicate::str::contains("✗ Uppercase letter"))
        .stdout(predicate::str::contains("✗ Special symbol"))
        .stderr(predicate::str::contains("Password must meet all requirements"));
}

#[test]
fn test_password_argument_is_required() {
    cargo_bin_cmd!("datxb")
        .arg("password")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PASSWORD"));
}

use num_bigint::BigInt;

use math::error::RationalError;
use recover_core::error::SolverError;
use recover_core::input::TestCase;
use recover_core::solver::find_secret;

const TEST1: &str = include_str!("data/test1.json");
const TEST2: &str = include_str!("data/test2.json");

fn solve(raw: &str) -> BigInt {
    let test_case = TestCase::from_json(raw).expect("fixture parses");
    find_secret(&test_case.points, test_case.k)
        .expect("fixture is consistent")
}

#[test]
fn recovers_the_mixed_base_fixture() {
    // Shares of f(x) = x^2 + 3, encoded in bases 10, 2, 10 and 4.
    assert_eq!(solve(TEST1), BigInt::from(3));
}

#[test]
fn recovers_a_secret_beyond_machine_width() {
    // First three shares lie on f(x) = 2^100 + x; the fourth share is
    // junk that the threshold of 3 never reaches.
    let expected = BigInt::from(2).pow(100);
    assert_eq!(
        expected.to_string(),
        "1267650600228229401496703205376"
    );
    assert_eq!(solve(TEST2), expected);
}

#[test]
fn any_threshold_window_of_consistent_shares_agrees() {
    let test_case = TestCase::from_json(TEST1).expect("fixture parses");
    let k = test_case.k;

    for start in 0..=(test_case.points.len() - k) {
        let window = &test_case.points[start..start + k];
        assert_eq!(
            find_secret(window, k).expect("window is consistent"),
            BigInt::from(3),
        );
    }
}

#[test]
fn share_order_in_the_document_is_load_bearing() {
    // Same shares, same k: the first document leads with three shares
    // of f(x) = x + 1, the second with three shares of f(x) = 2x.
    let forward = r#"{
        "keys": { "n": 4, "k": 2 },
        "1": { "base": "10", "value": "2" },
        "2": { "base": "10", "value": "3" },
        "4": { "base": "10", "value": "8" },
        "5": { "base": "10", "value": "10" }
    }"#;
    let reordered = r#"{
        "keys": { "n": 4, "k": 2 },
        "4": { "base": "10", "value": "8" },
        "5": { "base": "10", "value": "10" },
        "1": { "base": "10", "value": "2" },
        "2": { "base": "10", "value": "3" }
    }"#;

    assert_eq!(solve(forward), BigInt::from(1));
    assert_eq!(solve(reordered), BigInt::from(0));
}

#[test]
fn duplicate_x_in_a_document_fails_the_solve() {
    // "1" and "01" are distinct document keys for the same coordinate.
    let raw = r#"{
        "keys": { "n": 2, "k": 2 },
        "1": { "base": "10", "value": "5" },
        "01": { "base": "10", "value": "9" }
    }"#;
    let test_case = TestCase::from_json(raw).expect("document parses");
    assert!(matches!(
        find_secret(&test_case.points, test_case.k),
        Err(SolverError::Arithmetic(RationalError::DivisionByZero))
    ));
}

#[test]
fn inconsistent_shares_fail_loudly_instead_of_truncating() {
    let raw = r#"{
        "keys": { "n": 2, "k": 2 },
        "1": { "base": "10", "value": "1" },
        "3": { "base": "10", "value": "2" }
    }"#;
    let test_case = TestCase::from_json(raw).expect("document parses");
    assert!(matches!(
        find_secret(&test_case.points, test_case.k),
        Err(SolverError::Arithmetic(RationalError::NotAnInteger { .. }))
    ));
}

/// The whole pipeline behind one crate-level result, the way the
/// driver binary strings it together.
fn recover_from_file(
    path: &std::path::Path,
) -> recover_core::error::Result<BigInt> {
    let test_case = TestCase::from_path(path)?;
    Ok(find_secret(&test_case.points, test_case.k)?)
}

#[test]
fn round_trips_through_the_filesystem() {
    let path = std::env::temp_dir().join("recover-core-test1.json");
    std::fs::write(&path, TEST1).expect("temp file is writable");

    let test_case =
        TestCase::from_path(&path).expect("file parses like the string");
    assert_eq!(test_case, TestCase::from_json(TEST1).unwrap());
    assert_eq!(recover_from_file(&path).unwrap(), BigInt::from(3));

    std::fs::remove_file(&path).ok();
}

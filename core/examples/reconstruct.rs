use num_bigint::BigInt;
use recover_core::solver::{find_secret, Point};

/// Evaluate a polynomial given constant-term-first coefficients.
fn share_at(coefficients: &[i64], x: i64) -> Point {
    let y = coefficients
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, &c| acc * x + c);
    Point::new(x, y)
}

fn main() {
    // f(x) = 1234 + 17x + 9x^2; any three shares recover f(0).
    let coefficients = [1234, 17, 9];
    let shares: Vec<Point> =
        (1..=5).map(|x| share_at(&coefficients, x)).collect();

    let secret = find_secret(&shares, 3).expect("shares are consistent");
    println!("Recovered secret from {} shares: {secret}", shares.len());
}

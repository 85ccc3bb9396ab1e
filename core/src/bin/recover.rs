use std::env;
use std::process::ExitCode;

use recover_core::input::{TestCase, DEFAULT_INPUT_FILES};
use recover_core::solver::find_secret;

fn main() -> ExitCode {
    let mut files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        files.extend(DEFAULT_INPUT_FILES.iter().map(|f| f.to_string()));
    }

    for file in &files {
        let test_case = match TestCase::from_path(file) {
            Ok(test_case) => test_case,
            Err(err) => {
                eprintln!("{file}: {err}");
                return ExitCode::FAILURE;
            }
        };

        match find_secret(&test_case.points, test_case.k) {
            Ok(secret) => println!("Secret for {file}: {secret}"),
            Err(err) => {
                eprintln!("{file}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

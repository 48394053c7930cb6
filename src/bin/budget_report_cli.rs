use std::process::ExitCode;

use colored::Colorize;

fn main() -> ExitCode {
    budget_report::init();
    let args = std::env::args().skip(1);
    match budget_report::cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "ERROR:".red().bold());
            ExitCode::FAILURE
        }
    }
}

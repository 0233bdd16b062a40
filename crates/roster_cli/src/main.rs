//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Mount the roster screen once and print its text rendering.
//!
//! Usage: `roster_cli [BASE_URL]`; without an argument the base URL comes
//! from `ROSTER_API_BASE_URL` or the built-in default.

use roster_core::{ApiConfig, EmployeeScreen, HttpEmployeeApi};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let explicit = std::env::args().nth(1);
    let config = match ApiConfig::resolve(explicit.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("roster_cli: {err}");
            return ExitCode::from(2);
        }
    };
    let api = match HttpEmployeeApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("roster_cli: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("roster_core base_url={}", config.base_url);
    let mut screen = EmployeeScreen::new(api);
    screen.mount();
    print!("{}", screen.view().to_text());
    ExitCode::SUCCESS
}

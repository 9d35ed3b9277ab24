//! # Gradebook CLI
//!
//! The binary is intentionally thin: the interactive client lives in `cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! Exit status is 0 when the user picks Exit or input ends, and 1 when
//! reading from or writing to the terminal fails.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! # Resend CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and terminates the process with its status.
//! Business logic lives in the `resend` library (see `lib.rs`).

mod cli;

fn main() {
    std::process::exit(cli::run());
}

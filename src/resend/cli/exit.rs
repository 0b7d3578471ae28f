//! Exit status policy and error output.
//!
//! | outcome                         | status |
//! |---------------------------------|--------|
//! | success                         | 0      |
//! | any error, or an error message  | 1      |
//! | user cancelled (prompt, Ctrl-C) | 130    |
//!
//! Errors are one line on stderr (`Error: ...`), or a `{"error":{"message"}}`
//! envelope in `--json` mode. Cancellation prints `Cancelled.` either way.

use colored::Colorize;
use resend::error::ResendError;
use serde::Serialize;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
/// 128 + SIGINT.
pub const CANCELLED: i32 = 130;

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

pub fn error_json(message: &str) -> String {
    let envelope = ErrorEnvelope {
        error: ErrorBody { message },
    };
    serde_json::to_string(&envelope)
        .unwrap_or_else(|_| r#"{"error":{"message":"unknown error"}}"#.to_string())
}

/// Print `err` the way the current output mode wants it and return the
/// status the process should exit with.
pub fn report(err: &ResendError, json: bool) -> i32 {
    if err.is_cancelled() {
        eprintln!("{}", err);
        return CANCELLED;
    }
    tracing::debug!(error = ?err, "command failed");
    let message = err.to_string();
    if json {
        eprintln!("{}", error_json(&message));
    } else {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }
    FAILURE
}

/// Ctrl-C outside a raw-mode prompt read must not leave a hidden cursor or an
/// interrupt trace behind. Raw-mode reads see the keypress as an
/// `Interrupted` error instead (see `prompts::answered`).
#[cfg(unix)]
pub fn install_interrupt_handler() {
    use signal_hook::consts::SIGINT;
    use signal_hook::iterator::Signals;

    let mut signals = match Signals::new([SIGINT]) {
        Ok(signals) => signals,
        Err(e) => {
            tracing::debug!(error = %e, "could not install SIGINT handler");
            return;
        }
    };
    std::thread::spawn(move || {
        if signals.forever().next().is_some() {
            let _ = console::Term::stderr().show_cursor();
            eprintln!();
            eprintln!("Cancelled.");
            std::process::exit(CANCELLED);
        }
    });
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_envelope_shape() {
        let json = error_json("No saved key found with name 'x'.");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["error"]["message"],
            "No saved key found with name 'x'."
        );
    }

    #[test]
    fn cancellation_has_its_own_status() {
        assert_eq!(report(&ResendError::Cancelled, false), CANCELLED);
        assert_eq!(report(&ResendError::Cancelled, true), CANCELLED);
    }

    #[test]
    fn other_errors_are_failures() {
        assert_eq!(report(&ResendError::InvalidApiKey, false), FAILURE);
        assert_eq!(report(&ResendError::NotAuthenticated, true), FAILURE);
    }
}

//! Terminal implementation of [`Prompter`] on top of `dialoguer`.
//!
//! Cancellation arrives in two shapes: `interact_opt` returning `None` (Esc
//! or `q` on a select) and an `Interrupted` io error (Ctrl-C while the
//! terminal is in raw mode). Both become [`Prompted::Cancelled`].
//!
//! A raw-mode Ctrl-C never raises SIGINT, and dialoguer returns before it
//! shows the cursor again, so the interrupted arm restores it here.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use resend::commands::prompt::{Prompted, Prompter, Validator};
use resend::error::{ResendError, Result};
use std::io::{self, IsTerminal};

const NON_INTERACTIVE_HINT: &str =
    "Input required but stdin is not a terminal. Pass --key (and optionally --name) instead.";

pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn ensure_terminal(&self) -> Result<()> {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            Ok(())
        } else {
            Err(ResendError::NonInteractive(NON_INTERACTIVE_HINT.to_string()))
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn answered<T>(outcome: io::Result<T>, term: &Term) -> Result<Prompted<T>> {
    match outcome {
        Ok(value) => Ok(Prompted::Answered(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            restore_cursor(term);
            Ok(Prompted::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Show the cursor and move past the abandoned prompt line.
fn restore_cursor(term: &Term) {
    if let Err(e) = term.show_cursor().and_then(|_| term.write_line("")) {
        tracing::debug!(error = %e, "could not restore cursor");
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, message: &str, options: &[String]) -> Result<Prompted<usize>> {
        self.ensure_terminal()?;
        let outcome = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact_opt();
        Ok(match answered(outcome, &Term::stderr())? {
            Prompted::Answered(Some(index)) => Prompted::Answered(index),
            Prompted::Answered(None) | Prompted::Cancelled => Prompted::Cancelled,
        })
    }

    fn text(
        &mut self,
        message: &str,
        initial: Option<&str>,
        validate: Validator,
    ) -> Result<Prompted<String>> {
        self.ensure_terminal()?;
        let mut input = Input::<String>::with_theme(&self.theme);
        input
            .with_prompt(message)
            .validate_with(move |value: &String| validate(value));
        if let Some(initial) = initial {
            input.with_initial_text(initial);
        }
        answered(input.interact_text(), &Term::stderr())
    }
}

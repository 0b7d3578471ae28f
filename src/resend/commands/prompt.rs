//! Interactive input, abstracted so workflows never touch the terminal.
//!
//! Every prompt answers with [`Prompted`]: either a value or an explicit
//! cancellation. Callers branch on it; there is no "was this error really a
//! cancel?" guessing anywhere.

use crate::error::{ResendError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Answered(T),
    Cancelled,
}

impl<T> Prompted<T> {
    /// Turn a cancellation into [`ResendError::Cancelled`] so the whole
    /// workflow unwinds before anything is persisted.
    pub fn or_cancel(self) -> Result<T> {
        match self {
            Prompted::Answered(value) => Ok(value),
            Prompted::Cancelled => Err(ResendError::Cancelled),
        }
    }
}

/// Input check run on each answer; `Err` carries the message to show.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

pub trait Prompter {
    /// Pick one of `options`; answers with its index.
    fn select(&mut self, message: &str, options: &[String]) -> Result<Prompted<usize>>;

    /// Free text. `initial` pre-fills the input. Implementations must keep
    /// asking until `validate` accepts the answer.
    fn text(
        &mut self,
        message: &str,
        initial: Option<&str>,
        validate: Validator,
    ) -> Result<Prompted<String>>;
}

//! # CLI Behavior
//!
//! One UI client for the `resend` library. Owns terminal I/O, exit codes and
//! output formatting; see the crate-level docs for the layering.
//!
//! Run bare, `resend` prints a welcome banner and exits 0.
//!
//! ## Setup
//!
//! - `resend init [-k KEY] [--write-env]`: store a key as the selected
//!   `default` (and the legacy `apiKey`); `--write-env` also appends
//!   `RESEND_API_KEY` to `./.env` unless it is already there.
//!
//! ## Auth Commands
//!
//! - `resend auth login [-k KEY] [-n NAME]`: without `--key`, prompts. When
//!   keys are already saved it first asks whether to use, add or replace.
//! - `resend auth logout [-n NAME | --all]`: without flags, removes the
//!   active key and promotes the next one.
//! - `resend auth whoami`, `resend auth list`, `resend auth select NAME`.
//!
//! `RESEND_API_KEY` overrides every saved key for the process.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `setup`: Argument parsing via clap
//! - `render`: Messages, key table, JSON output
//! - `prompts`: dialoguer-backed `Prompter`
//! - `exit`: Exit statuses, error output, Ctrl-C
//! - `logging`: tracing subscriber setup

mod commands;
mod exit;
mod logging;
mod prompts;
mod render;
pub mod setup;

pub use commands::run;

//! # Resend CLI Architecture
//!
//! The `resend` binary is a thin client over a **UI-agnostic library**. The
//! part with actual rules in it is the local credential store: named API keys,
//! an active-key selection, and an environment variable that overrides both.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, dialoguer prompts, rendering, exit codes   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - `ResendApi`: the per-process context object              │
//! │  - Dispatches to commands, returns `Result<CmdResult>`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - login / logout / whoami / list / select / upgrade        │
//! │  - Prompts only through the `Prompter` trait                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Credentials (resolver.rs, keyring.rs)                      │
//! │  - Precedence: env > selected saved key > legacy field      │
//! │  - Named keys with a selection that never dangles           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `ConfigStore` over a `StorageBackend`                    │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit` and never reads the process environment directly
//! (see [`env`]). The one outbound call, the version lookup, sits behind the
//! [`version_check::VersionSource`] trait.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against `MemBackend` + `MapEnv` with
//!    a scripted `Prompter`.
//! 2. **API**: dispatch tests and short end-to-end flows in memory.
//! 3. **Binary** (`tests/`): `assert_cmd` runs with `RESEND_CLI_CONFIG_DIR`
//!    pointing at a temp dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The `ResendApi` facade and context object
//! - [`commands`]: Auth workflows and the upgrade check
//! - [`resolver`]: Effective API key and its source
//! - [`keyring`]: Named keys and the active selection
//! - [`store`]: Config document persistence
//! - [`model`]: Config document and shared types
//! - [`paths`]: Config directory resolution
//! - [`env`]: Environment variable access
//! - [`version_check`]: Registry lookup and the throttled update notice
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod env;
pub mod error;
pub mod keyring;
pub mod model;
pub mod paths;
pub mod resolver;
pub mod store;
pub mod version_check;

#[cfg(test)]
pub mod test_utils;

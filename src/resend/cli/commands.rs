//! # CLI Layer
//!
//! The only place that knows about terminal I/O, process exit codes and
//! argument parsing. Everything below it is reached through [`ResendApi`].
//!
//! ## Flow
//!
//! 1. Parse arguments, install logging and the Ctrl-C watcher. With no
//!    subcommand, print the welcome banner and stop.
//! 2. Build the [`ResendApi`] context from the real environment.
//! 3. Show the throttled update notice (unless disabled).
//! 4. Dispatch to a `handle_*` function, render the `CmdResult`.
//! 5. Map the outcome to an exit status (see [`super::exit`]).

use super::exit;
use super::logging::{self, LogSettings};
use super::prompts::DialoguerPrompter;
use super::render::{has_errors, print_result};
use super::setup::{
    AuthCommands, Cli, Commands, InitArgs, LoginArgs, LogoutArgs, UpgradeCommands,
};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use resend::api::ResendApi;
use resend::commands::init::InitOptions;
use resend::commands::login::LoginOptions;
use resend::commands::logout::LogoutTarget;
use resend::commands::CmdResult;
use resend::env::ProcessEnv;
use resend::error::Result;
use resend::store::fs_backend::FsBackend;
use resend::version_check::CratesIo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI and return the process exit status.
pub fn run() -> i32 {
    let mut cli = Cli::parse();
    logging::init(&LogSettings::from_env(&ProcessEnv, cli.verbose));
    exit::install_interrupt_handler();

    let Some(command) = cli.command.take() else {
        println!("{}", welcome_banner(VERSION));
        return exit::SUCCESS;
    };

    let json = cli.json;
    match execute(&cli, command) {
        Ok(result) => {
            print_result(&result, json);
            if has_errors(&result) {
                exit::FAILURE
            } else {
                exit::SUCCESS
            }
        }
        Err(e) => exit::report(&e, json),
    }
}

fn welcome_banner(version: &str) -> String {
    format!(
        "{} {}\n{}",
        "Resend CLI".bold(),
        format!("v{version}").dimmed(),
        "Run `resend --help` to see available commands, or `resend init` to get started."
    )
}

fn execute(cli: &Cli, command: Commands) -> Result<CmdResult> {
    let api = ResendApi::from_env()?;
    tracing::debug!(path = %api.config_location().display(), "config file");

    let wants_notice =
        !cli.json && !cli.no_check_version && !matches!(command, Commands::Upgrade(_));
    if wants_notice {
        show_update_notice(&api);
    }

    match command {
        Commands::Init(args) => handle_init(&api, args),
        Commands::Auth(AuthCommands::Login(args)) => handle_login(&api, args),
        Commands::Auth(AuthCommands::Logout(args)) => handle_logout(&api, args),
        Commands::Auth(AuthCommands::Whoami) => api.whoami(),
        Commands::Auth(AuthCommands::List) => api.list_keys(),
        Commands::Auth(AuthCommands::Select { name }) => api.select_key(&name),
        Commands::Upgrade(UpgradeCommands::Check) => {
            Ok(api.check_for_update(&CratesIo::new(), VERSION))
        }
    }
}

fn handle_init(api: &ResendApi<FsBackend>, args: InitArgs) -> Result<CmdResult> {
    let env_file = if args.write_env {
        Some(std::env::current_dir()?.join(".env"))
    } else {
        None
    };
    let mut prompter = DialoguerPrompter::new();
    api.init(
        &mut prompter,
        InitOptions {
            key: args.key,
            env_file,
        },
    )
}

fn handle_login(api: &ResendApi<FsBackend>, args: LoginArgs) -> Result<CmdResult> {
    let mut prompter = DialoguerPrompter::new();
    api.login(
        &mut prompter,
        LoginOptions {
            key: args.key,
            name: args.name,
        },
    )
}

fn handle_logout(api: &ResendApi<FsBackend>, args: LogoutArgs) -> Result<CmdResult> {
    api.logout(logout_target(args))
}

fn logout_target(args: LogoutArgs) -> LogoutTarget {
    if args.all {
        return LogoutTarget::All;
    }
    match args.name {
        Some(name) => LogoutTarget::Named(name),
        None => LogoutTarget::Active,
    }
}

/// Best effort: a broken registry or unwritable config never fails the
/// command the user actually asked for.
fn show_update_notice(api: &ResendApi<FsBackend>) {
    let now = Utc::now().timestamp_millis();
    match api.update_notice(&CratesIo::new(), VERSION, now) {
        Ok(Some(notice)) => eprintln!("{}", notice.dimmed()),
        Ok(None) => {}
        Err(e) => tracing::debug!(error = %e, "update check skipped"),
    }
}

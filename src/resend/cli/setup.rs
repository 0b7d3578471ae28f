use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "resend", bin_name = "resend", version)]
#[command(about = "Command-line client for the Resend email API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Skip the startup update check
    #[arg(long, global = true)]
    pub no_check_version: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up the CLI with an API key
    Init(InitArgs),

    /// Manage saved API keys
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Check for a newer release
    #[command(subcommand)]
    Upgrade(UpgradeCommands),
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Save an API key and make it active
    Login(LoginArgs),

    /// Remove saved key(s) from local CLI config
    Logout(LogoutArgs),

    /// Show current auth source and selected key
    Whoami,

    /// List saved API keys
    List,

    /// Select the active saved API key
    Select {
        /// Saved key name
        name: String,
    },
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// API key (starts with re_); prompts when omitted
    #[arg(short, long)]
    pub key: Option<String>,

    /// Write RESEND_API_KEY to .env in the current directory (if not present)
    #[arg(long)]
    pub write_env: bool,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// API key (starts with re_); prompts when omitted
    #[arg(short, long)]
    pub key: Option<String>,

    /// Name to save the key under
    #[arg(short, long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct LogoutArgs {
    /// Remove a specific saved key name
    #[arg(short, long, conflicts_with = "all")]
    pub name: Option<String>,

    /// Remove all saved keys
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum UpgradeCommands {
    /// Check for a new version and show upgrade instructions
    Check,
}

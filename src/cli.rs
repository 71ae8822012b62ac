use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "macrolink",
    version,
    about = "Macro relay and profile store for networked trigger devices"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "FILE", help = "Settings file to load")]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Profile document to read and write"
    )]
    pub profiles_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Manage stored profiles
    Profiles(ProfilesArgs),
    /// Send one macro to a device
    Trigger(TriggerArgs),
    /// Poll every configured device
    Status,
    /// Print the macro catalog
    Macros,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, value_name = "ADDR", help = "Address to listen on")]
    pub bind: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    pub command: ProfilesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfilesCommand {
    Ls(UserArgs),
    Show(ProfileArgs),
    Save(SaveArgs),
    Rm(ProfileArgs),
    Mv(RenameArgs),
    Dump,
}

#[derive(Debug, Args)]
pub struct UserArgs {
    #[arg(long, help = "User id")]
    pub user: String,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long, help = "User id")]
    pub user: String,
    #[arg(help = "Profile name")]
    pub profile: String,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[arg(long, help = "User id")]
    pub user: String,
    #[arg(help = "Profile name")]
    pub profile: String,
    #[arg(num_args = 0.., help = "Macro keys or icon names, in execution order")]
    pub macros: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    #[arg(long, help = "User id")]
    pub user: String,
    #[arg(help = "Current profile name")]
    pub from: String,
    #[arg(help = "New profile name")]
    pub to: String,
}

#[derive(Debug, Args)]
pub struct TriggerArgs {
    #[arg(help = "Macro identifier")]
    pub macro_key: String,
    #[arg(long, help = "Target selector")]
    pub user: String,
}

use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config,
        profiles_file,
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(config, profiles_file, json)?;

    match command {
        Command::Serve(args) => commands::serve::run(&ctx, args).await,
        Command::Profiles(args) => commands::profiles::run(&ctx, args.command),
        Command::Trigger(args) => commands::trigger::run(&ctx, args).await,
        Command::Status => commands::status::run(&ctx).await,
        Command::Macros => commands::macros::run(&ctx),
    }
}

use crate::cli::ServeArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::server;

pub async fn run(ctx: &AppContext, args: ServeArgs) -> AppResult<()> {
    let bind = args.bind.unwrap_or_else(|| ctx.settings.bind());

    tracing::info!(
        profiles = %ctx.store.path().display(),
        config_dir = %ctx.paths.config_dir().display(),
        data_dir = %ctx.paths.data_dir().display(),
        "starting macrolink"
    );

    server::serve(&bind, ctx.app_state()).await
}

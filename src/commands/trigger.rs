use serde_json::json;

use crate::cli::TriggerArgs;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext, args: TriggerArgs) -> AppResult<()> {
    ctx.relay.trigger(&args.macro_key, &args.user).await?;

    let text = format!("triggered {} on {}", args.macro_key, args.user);
    ctx.output
        .emit(&text, &json!({ "status": "success", "macro": args.macro_key }))
}

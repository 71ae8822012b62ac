use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let status = ctx.relay.dashboard().await;

    if ctx.output.mode() == OutputMode::Text {
        if status.is_empty() {
            println!("0 devices");
        }
        for (device, report) in &status {
            match report.get("error").and_then(|err| err.as_str()) {
                Some(err) => println!("{device}: unavailable ({err})"),
                None => println!("{device}: {report}"),
            }
        }
        return Ok(());
    }

    ctx.output.emit("", &status)
}

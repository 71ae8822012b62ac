use crate::catalog;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    if ctx.output.mode() == OutputMode::Text {
        for spec in catalog::MACROS {
            let style = format!("{:?}", spec.style).to_lowercase();
            println!("{:<26} {:<28} {style}", spec.key, spec.label);
        }
        return Ok(());
    }

    ctx.output.emit("", &catalog::MACROS)
}

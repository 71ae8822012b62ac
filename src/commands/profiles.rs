use serde_json::json;

use crate::catalog;
use crate::cli::ProfilesCommand;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

pub fn run(ctx: &AppContext, command: ProfilesCommand) -> AppResult<()> {
    let store = &ctx.store;

    match command {
        ProfilesCommand::Ls(args) => {
            let profiles = store.list_profile_names(&args.user)?;
            let text = if profiles.is_empty() {
                format!("no profiles for {}", args.user)
            } else {
                profiles.join("\n")
            };
            ctx.output.emit(&text, &json!({ "profiles": profiles }))
        }
        ProfilesCommand::Show(args) => {
            let macros = store.get_profile(&args.user, &args.profile)?;
            ctx.output
                .emit(&format_macros(&macros), &json!({ "macros": macros }))
        }
        ProfilesCommand::Save(args) => {
            let macros = resolve_macro_args(args.macros);
            let profile = store.set_profile(&args.user, &args.profile, macros)?;
            let text = format!("saved {profile} for {}", args.user);
            ctx.output.emit(
                &text,
                &json!({ "status": "saved", "user": args.user, "profile": profile }),
            )
        }
        ProfilesCommand::Rm(args) => {
            store.delete_profile(&args.user, &args.profile)?;
            let text = format!("deleted {} for {}", args.profile.trim(), args.user);
            ctx.output.emit(&text, &json!({ "status": "deleted" }))
        }
        ProfilesCommand::Mv(args) => {
            let (from, to) = store.rename_profile(&args.user, &args.from, &args.to)?;
            let text = format!("renamed {from} -> {to}");
            ctx.output
                .emit(&text, &json!({ "status": "renamed", "from": from, "to": to }))
        }
        ProfilesCommand::Dump => {
            let doc = store.list_all_profiles()?;
            if ctx.output.mode() == OutputMode::Text {
                for (user, profiles) in &doc {
                    println!("{user}");
                    for (name, macros) in profiles {
                        println!("  {name}: {}", macros.join(", "));
                    }
                }
                return Ok(());
            }
            ctx.output.emit("", &doc)
        }
    }
}

/// Accepts catalog icon stems (`redeploy`, `sos.webp`) in place of macro keys.
/// Anything else is stored verbatim.
fn resolve_macro_args(args: Vec<String>) -> Vec<String> {
    args.into_iter()
        .map(|arg| {
            if catalog::lookup(&arg).is_some() {
                return arg;
            }
            catalog::key_for_icon(&arg).map_or(arg, str::to_string)
        })
        .collect()
}

fn format_macros(macros: &[String]) -> String {
    if macros.is_empty() {
        return "(empty profile)".to_string();
    }

    macros
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let label = catalog::lookup(key).map_or(key.as_str(), |spec| spec.label);
            format!("{}. {label} [{}]", index + 1, catalog::icon_for(key))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

use clap::Parser;
use macrolink::cli::{Cli, Command, ProfilesCommand};

#[test]
fn parses_serve_with_bind() {
    let cli = Cli::try_parse_from(["macrolink", "serve", "--bind", "127.0.0.1:9000"])
        .expect("cli parse should work");
    match cli.command {
        Command::Serve(serve) => assert_eq!(serve.bind.as_deref(), Some("127.0.0.1:9000")),
        _ => panic!("expected serve command"),
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "macrolink",
        "status",
        "--json",
        "-vv",
        "--profiles-file",
        "/tmp/profiles.json",
    ])
    .expect("cli parse should work");

    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    assert_eq!(
        cli.profiles_file.as_deref(),
        Some(std::path::Path::new("/tmp/profiles.json"))
    );
    assert!(matches!(cli.command, Command::Status));
}

#[test]
fn parses_profile_save_with_ordered_macros() {
    let cli = Cli::try_parse_from([
        "macrolink",
        "profiles",
        "save",
        "--user",
        "user1",
        "Quick",
        "Reinforce",
        "Resupply",
        "SOS Beacon",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Profiles(profiles) => match profiles.command {
            ProfilesCommand::Save(save) => {
                assert_eq!(save.user, "user1");
                assert_eq!(save.profile, "Quick");
                assert_eq!(save.macros, ["Reinforce", "Resupply", "SOS Beacon"]);
            }
            _ => panic!("expected profiles save"),
        },
        _ => panic!("expected profiles command"),
    }
}

#[test]
fn parses_profile_rename() {
    let cli = Cli::try_parse_from(["macrolink", "profiles", "mv", "--user", "u1", "a", "b"])
        .expect("cli parse should work");
    match cli.command {
        Command::Profiles(profiles) => match profiles.command {
            ProfilesCommand::Mv(mv) => {
                assert_eq!((mv.from.as_str(), mv.to.as_str()), ("a", "b"));
            }
            _ => panic!("expected profiles mv"),
        },
        _ => panic!("expected profiles command"),
    }
}

#[test]
fn trigger_requires_user() {
    assert!(Cli::try_parse_from(["macrolink", "trigger", "Reinforce"]).is_err());

    let cli = Cli::try_parse_from(["macrolink", "trigger", "Reinforce", "--user", "user2"])
        .expect("cli parse should work");
    match cli.command {
        Command::Trigger(trigger) => {
            assert_eq!(trigger.macro_key, "Reinforce");
            assert_eq!(trigger.user, "user2");
        }
        _ => panic!("expected trigger command"),
    }
}

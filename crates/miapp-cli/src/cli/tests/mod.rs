//! CLI parse tests.

use clap::Parser;

use super::{Cli, CliCommand};
use crate::cli::commands::{PhotoSource, PrefsAction};

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_run() {
    match parse(&["miapp", "run"]) {
        CliCommand::Run { url } => assert!(url.is_none()),
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_with_launch_url() {
    match parse(&["miapp", "run", "--url", "miapp://producto/42"]) {
        CliCommand::Run { url } => assert_eq!(url.as_deref(), Some("miapp://producto/42")),
        _ => panic!("expected Run with --url"),
    }
}

#[test]
fn cli_parse_route() {
    match parse(&["miapp", "route", "https://miapp.com/promo/X?descuento=10"]) {
        CliCommand::Route { url } => {
            assert_eq!(url, "https://miapp.com/promo/X?descuento=10");
        }
        _ => panic!("expected Route"),
    }
}

#[test]
fn cli_parse_open() {
    match parse(&["miapp", "open", "https://example.com"]) {
        CliCommand::Open { url } => assert_eq!(url, "https://example.com"),
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_status() {
    match parse(&["miapp", "status"]) {
        CliCommand::Status => {}
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_config_with_custom_path() {
    let cli = Cli::try_parse_from(["miapp", "--config", "/tmp/app.config.json", "config"]).unwrap();
    assert_eq!(cli.config.to_str(), Some("/tmp/app.config.json"));
    match cli.command {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_config_defaults_to_cwd_file() {
    let cli = Cli::try_parse_from(["miapp", "status"]).unwrap();
    assert_eq!(cli.config.to_str(), Some("app.config.json"));
}

#[test]
fn cli_parse_photo_default_source() {
    match parse(&["miapp", "photo"]) {
        CliCommand::Photo { source } => assert_eq!(source, PhotoSource::Camera),
        _ => panic!("expected Photo"),
    }
}

#[test]
fn cli_parse_photo_from_gallery() {
    match parse(&["miapp", "photo", "--source", "photos"]) {
        CliCommand::Photo { source } => assert_eq!(source, PhotoSource::Photos),
        _ => panic!("expected Photo with --source"),
    }
}

#[test]
fn cli_parse_locate() {
    match parse(&["miapp", "locate"]) {
        CliCommand::Locate => {}
        _ => panic!("expected Locate"),
    }
}

#[test]
fn cli_parse_prefs_set() {
    match parse(&["miapp", "prefs", "set", "user", r#"{"name":"ana"}"#]) {
        CliCommand::Prefs {
            action: PrefsAction::Set { key, value },
        } => {
            assert_eq!(key, "user");
            assert_eq!(value, r#"{"name":"ana"}"#);
        }
        _ => panic!("expected Prefs set"),
    }
}

#[test]
fn cli_parse_prefs_get_and_remove() {
    match parse(&["miapp", "prefs", "get", "user"]) {
        CliCommand::Prefs {
            action: PrefsAction::Get { key },
        } => assert_eq!(key, "user"),
        _ => panic!("expected Prefs get"),
    }
    match parse(&["miapp", "prefs", "remove", "user"]) {
        CliCommand::Prefs {
            action: PrefsAction::Remove { key },
        } => assert_eq!(key, "user"),
        _ => panic!("expected Prefs remove"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["miapp", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash)
        }
        _ => panic!("expected Completions"),
    }
}

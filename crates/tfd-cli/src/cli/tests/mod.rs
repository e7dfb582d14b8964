//! CLI parse tests, one file per subcommand.

use super::{backend, Cli, CliCommand};
use clap::Parser;
use tfd_core::config::{FetchBackend, TfdConfig};

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}


#[test]
fn logging_defaults_on() {
    let cli = parse(&["tfd", "info", "Form W-2"]);
    assert!(cli.logging_enabled());
}

#[test]
fn no_logging_turns_it_off() {
    let cli = parse(&["tfd", "info", "Form W-2", "--no-logging"]);
    assert!(!cli.logging_enabled());
}

#[test]
fn later_logging_flag_wins() {
    let cli = parse(&["tfd", "info", "Form W-2", "--no-logging", "--logging"]);
    assert!(cli.logging_enabled());
    let cli = parse(&["tfd", "info", "Form W-2", "--logging", "--no-logging"]);
    assert!(!cli.logging_enabled());
}

#[test]
fn logging_flags_accepted_before_subcommand() {
    let cli = parse(&["tfd", "--no-logging", "download", "Form W-2", "2020", "2021"]);
    assert!(!cli.logging_enabled());
}

#[test]
fn backend_flag_beats_config() {
    let cfg = TfdConfig {
        fetch_backend: Some(FetchBackend::Sequential),
        ..TfdConfig::default()
    };
    assert_eq!(backend(&cfg, true), FetchBackend::Concurrent);
}

#[test]
fn backend_falls_back_to_config_then_sequential() {
    let cfg = TfdConfig {
        fetch_backend: Some(FetchBackend::Concurrent),
        ..TfdConfig::default()
    };
    assert_eq!(backend(&cfg, false), FetchBackend::Concurrent);
    assert_eq!(
        backend(&TfdConfig::default(), false),
        FetchBackend::Sequential
    );
}

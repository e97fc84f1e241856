#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["run", "list", "version"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for flag in ["--format", "--quiet", "--no-color", "--max-file-size", "--help"] {
        assert!(help.contains(flag), "root help should mention flag '{flag}'");
    }
}

/// `rulegold run --help` must mention `--fixture-root`, `--locale`, and the
/// MANIFEST argument.
#[test]
fn test_run_help_lists_arguments() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("run")
        .expect("run subcommand exists");
    let help = format!("{}", sub.render_help());

    for needle in ["MANIFEST", "--fixture-root", "--locale"] {
        assert!(help.contains(needle), "run help should mention '{needle}'");
    }
}

/// The stdin sentinel parses to `PathOrStdin::Stdin`; everything else is a
/// path.
#[test]
fn test_path_or_stdin_parsing() {
    let stdin: PathOrStdin = "-".parse().expect("infallible");
    assert!(matches!(stdin, PathOrStdin::Stdin));

    let path: PathOrStdin = "corpus.json".parse().expect("infallible");
    match path {
        PathOrStdin::Path(p) => assert_eq!(p, PathBuf::from("corpus.json")),
        PathOrStdin::Stdin => panic!("should parse as a path"),
    }
}

/// A full `run` invocation parses with defaults applied.
#[test]
fn test_run_invocation_parses_with_defaults() {
    let cli = Cli::try_parse_from(["rulegold", "run", "corpus.json"]).expect("parses");

    assert!(!cli.quiet);
    assert!(!cli.no_color);
    assert_eq!(cli.max_file_size, 10 * 1024 * 1024);
    match cli.command {
        Command::Run {
            manifest,
            fixture_root,
            locale,
        } => {
            assert!(matches!(manifest, PathOrStdin::Path(_)));
            assert_eq!(fixture_root, None);
            assert_eq!(locale, "en");
        }
        _ => panic!("should parse as run"),
    }
}

/// Flags may appear after the subcommand because they are global.
#[test]
fn test_global_flags_parse_after_the_subcommand() {
    let cli = Cli::try_parse_from([
        "rulegold",
        "run",
        "-",
        "--quiet",
        "--format",
        "json",
        "--fixture-root",
        "fixtures",
        "--locale",
        "de-AT",
    ])
    .expect("parses");

    assert!(cli.quiet);
    assert!(matches!(cli.format, OutputFormat::Json));
    match cli.command {
        Command::Run {
            fixture_root,
            locale,
            ..
        } => {
            assert_eq!(fixture_root, Some(PathBuf::from("fixtures")));
            assert_eq!(locale, "de-AT");
        }
        _ => panic!("should parse as run"),
    }
}

/// An unknown subcommand is rejected.
#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["rulegold", "frobnicate"]).is_err());
}

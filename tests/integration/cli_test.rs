use clap::Parser;
use docplan::cli::{Args, Command};
use docplan::config::{CliArgs, CliConfig, ConfigSource};
use docplan::OutputFormat;
use std::path::PathBuf;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(argv.iter().copied()).unwrap()
}

#[test]
fn defaults_leave_everything_unset() {
    let args = parse(&["docplan"]);
    let partial = CliConfig::from_args(&args).load().unwrap();

    assert!(partial.source_path.is_none());
    assert!(partial.output_dir.is_none());
    assert!(partial.exclude_patterns.is_none());
    assert!(partial.output_format.is_none());
    assert!(partial.separate_modules.is_none());
    assert!(partial.quiet.is_none());
    assert!(partial.use_colors.is_none());
}

#[test]
fn options_map_onto_partial_settings() {
    let args = parse(&[
        "docplan",
        "--path",
        "./src",
        "--output-dir",
        "./docs/api",
        "--exclude",
        "tests",
        "-e",
        "vendored",
        "--separate",
        "--implicit-namespaces",
        "--include-private",
        "--suffix",
        "md",
        "--tocfile",
        "index",
        "--max-depth",
        "2",
        "--output",
        "json",
        "--no-colors",
        "--dry-run",
    ]);
    let partial = CliConfig::from_args(&args).load().unwrap();

    assert_eq!(partial.source_path, Some(PathBuf::from("./src")));
    assert_eq!(partial.output_dir, Some(PathBuf::from("./docs/api")));
    assert_eq!(
        partial.exclude_patterns,
        Some(vec!["tests".to_string(), "vendored".to_string()])
    );
    assert_eq!(partial.separate_modules, Some(true));
    assert_eq!(partial.implicit_namespaces, Some(true));
    assert_eq!(partial.include_private, Some(true));
    assert_eq!(partial.artifact_suffix, Some("md".to_string()));
    assert_eq!(partial.toc_filename, Some("index".to_string()));
    assert_eq!(partial.max_depth, Some(2));
    assert_eq!(partial.output_format, Some(OutputFormat::Json));
    assert_eq!(partial.use_colors, Some(false));
    assert_eq!(partial.dry_run, Some(true));
}

#[test]
fn render_options_replace_the_default_set() {
    let args = parse(&[
        "docplan",
        "--render-option",
        "members",
        "--render-option",
        "special-members",
    ]);
    let partial = CliConfig::from_args(&args).load().unwrap();

    assert_eq!(
        partial.render_options,
        Some(vec!["members".to_string(), "special-members".to_string()])
    );
}

#[test]
fn init_flag_selects_the_init_command() {
    let args = parse(&["docplan", "--init"]);
    assert!(matches!(Command::from_args(args), Command::Init));

    let args = parse(&["docplan", "--path", "."]);
    assert!(matches!(Command::from_args(args), Command::Plan(_)));
}

#[test]
fn cli_args_round_trip_through_the_flat_structure() {
    let args = parse(&["docplan", "--config", "custom.toml", "--force"]);
    let cli_args = CliArgs::from_args(&args);

    assert_eq!(cli_args.config, Some(PathBuf::from("custom.toml")));
    assert!(cli_args.force);

    let config = CliConfig::new(cli_args);
    assert_eq!(config.config_path(), Some(&PathBuf::from("custom.toml")));
    let partial = config.load().unwrap();
    assert_eq!(partial.force, Some(true));
}

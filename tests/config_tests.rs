use std::path::PathBuf;

use costargraph::config::CommandLineConfig;

#[test]
fn test_defaults() {
    let config = CommandLineConfig::from_args_with_env(&["costargraph"], None).expect("config");
    assert_eq!(config.command, "interactive");
    assert_eq!(config.dataset, PathBuf::from("data/marvel.tsv"));
    assert_eq!(config.data_dir, PathBuf::from("data"));
    assert!(!config.verbose);
    assert!(!config.json);
    assert!(config.command_args.is_empty());
}

#[test]
fn test_env_dataset_is_overridden_by_flag() {
    let config =
        CommandLineConfig::from_args_with_env(&["costargraph"], Some("env.tsv".into()))
            .expect("config");
    assert_eq!(config.dataset, PathBuf::from("env.tsv"));
    let config = CommandLineConfig::from_args_with_env(
        &["costargraph", "--dataset", "flag.tsv"],
        Some("env.tsv".into()),
    )
    .expect("config");
    assert_eq!(config.dataset, PathBuf::from("flag.tsv"));
}

#[test]
fn test_positional_command_collects_arguments() {
    let config = CommandLineConfig::from_args_with_env(
        &["costargraph", "-v", "path", "A", "B", "--json"],
        None,
    )
    .expect("config");
    assert_eq!(config.command, "path");
    assert_eq!(config.command_args, vec!["A".to_string(), "B".to_string()]);
    assert!(config.verbose);
    assert!(config.json);
}

#[test]
fn test_command_flag() {
    let config = CommandLineConfig::from_args_with_env(
        &["costargraph", "--log-level", "trace", "--command", "script", "run.test"],
        None,
    )
    .expect("config");
    assert_eq!(config.command, "script");
    assert_eq!(config.command_args, vec!["run.test".to_string()]);
    assert_eq!(config.log_level.as_deref(), Some("trace"));
}

#[test]
fn test_missing_flag_value_is_an_error() {
    let err = CommandLineConfig::from_args_with_env(&["costargraph", "--dataset"], None)
        .expect_err("missing value");
    assert!(err.contains("--dataset"));
}

#[test]
fn test_unknown_flag_is_an_error() {
    let err = CommandLineConfig::from_args_with_env(&["costargraph", "--frob"], None)
        .expect_err("unknown flag");
    assert!(err.contains("--frob"));
}

//! Configuration tests reading the real process environment.
//!
//! Each test clears every `HOLMES_ADMIN_*` variable first and runs serially,
//! since the environment is shared by the whole test binary.

use holmes_admin::cli::{parse_args, CliCommand};
use holmes_admin::config::{
    AdminConfig, DEFAULT_SERVER_URL, ENV_LOCALE, ENV_LOG_DIR, ENV_MESSAGES_DIR, ENV_PREVIEW,
    ENV_PREVIEW_PORT, ENV_TEMPLATES_DIR, ENV_URL,
};
use holmes_admin::error::ConfigError;
use serial_test::serial;

const ALL_VARS: [&str; 7] = [
    ENV_URL,
    ENV_LOCALE,
    ENV_MESSAGES_DIR,
    ENV_TEMPLATES_DIR,
    ENV_PREVIEW,
    ENV_PREVIEW_PORT,
    ENV_LOG_DIR,
];

fn clear_env() {
    for name in ALL_VARS {
        std::env::remove_var(name);
    }
}

fn run_options(args: &[&str]) -> holmes_admin::cli::RunOptions {
    let argv = std::iter::once("holmes-admin".to_string()).chain(args.iter().map(|a| a.to_string()));
    match parse_args(argv).unwrap() {
        CliCommand::Run(options) => options,
        other => panic!("expected a run command, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AdminConfig::from_env().unwrap();

    assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    assert_eq!(config.locale, None);
    assert!(config.preview);
    assert_eq!(config.preview_port, 3031);
    assert!(!config.open_browser);
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    clear_env();
    let logs = tempfile::tempdir().unwrap();
    std::env::set_var(ENV_URL, "https://nas.local:8443/");
    std::env::set_var(ENV_LOCALE, "fr");
    std::env::set_var(ENV_PREVIEW, "off");
    std::env::set_var(ENV_PREVIEW_PORT, "4000");
    std::env::set_var(ENV_LOG_DIR, logs.path());

    let config = AdminConfig::from_env().unwrap();

    assert_eq!(config.server_url, "https://nas.local:8443");
    assert_eq!(config.locale.as_deref(), Some("fr"));
    assert!(!config.preview);
    assert_eq!(config.preview_port, 4000);
    assert_eq!(config.log_directory(), logs.path());
    clear_env();
}

#[test]
#[serial]
fn test_empty_variables_count_as_unset() {
    clear_env();
    std::env::set_var(ENV_URL, "");
    std::env::set_var(ENV_PREVIEW_PORT, "  ");

    let config = AdminConfig::from_env().unwrap();

    assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    assert_eq!(config.preview_port, 3031);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_rejected() {
    clear_env();
    std::env::set_var(ENV_URL, "ftp://nas.local");
    let err = AdminConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == ENV_URL));

    clear_env();
    std::env::set_var(ENV_PREVIEW_PORT, "99999");
    let err = AdminConfig::from_env().unwrap_err();
    assert_eq!(
        err.user_message(),
        "'99999' is not a valid value for HOLMES_ADMIN_PREVIEW_PORT."
    );
    clear_env();
}

#[test]
#[serial]
fn test_flags_override_environment() {
    clear_env();
    std::env::set_var(ENV_URL, "http://from-env:8085");
    std::env::set_var(ENV_PREVIEW_PORT, "4000");

    let options = run_options(&["--url", "http://from-flag:9000/", "--preview-port=5000", "--no-preview", "--open"]);
    let config = AdminConfig::from_env()
        .and_then(|config| config.with_overrides(&options))
        .unwrap();

    assert_eq!(config.server_url, "http://from-flag:9000");
    assert_eq!(config.preview_port, 5000);
    assert!(!config.preview);
    assert!(config.open_browser);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_locale_flag_is_rejected() {
    clear_env();
    let options = run_options(&["--locale", "../etc"]);

    let result = AdminConfig::from_env().and_then(|config| config.with_overrides(&options));

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

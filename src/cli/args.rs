//! Command-line argument parsing for the admin console.
//!
//! Flags override the environment; see [`crate::config::AdminConfig`].

use crate::error::ConfigError;

/// Options of a console run, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub url: Option<String>,
    pub locale: Option<String>,
    pub no_preview: bool,
    pub preview_port: Option<u16>,
    /// Open the preview page in a browser once the server is up.
    pub open: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the console (default)
    Run(RunOptions),
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: holmes-admin [OPTIONS]

Options:
  --url <URL>            Holmes server URL (default: http://localhost:8085)
  --locale <LOCALE>      Message locale, e.g. fr or fr_CA
  --no-preview           Do not start the preview server
  --preview-port <PORT>  Preview server port (default: 3031)
  --open                 Open the preview page in a browser
  -V, --version          Print version
  -h, --help             Print this help

Environment:
  HOLMES_ADMIN_URL, HOLMES_ADMIN_LOCALE, HOLMES_ADMIN_MESSAGES_DIR,
  HOLMES_ADMIN_TEMPLATES_DIR, HOLMES_ADMIN_PREVIEW, HOLMES_ADMIN_PREVIEW_PORT,
  HOLMES_ADMIN_LOG_DIR, RUST_LOG";

/// Parse command-line arguments and return the command to execute.
///
/// `--version` and `--help` win over everything else. Unknown arguments are
/// ignored. Value flags accept `--flag value` and `--flag=value`.
///
/// # Examples
///
/// ```
/// use holmes_admin::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["holmes-admin".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--no-preview" => options.no_preview = true,
            "--open" => options.open = true,
            "--url" | "--locale" | "--preview-port" => {
                let value = match inline_value {
                    Some(value) => value,
                    None => args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(flag.clone()))?,
                };
                match flag.as_str() {
                    "--url" => options.url = Some(value),
                    "--locale" => options.locale = Some(value),
                    _ => {
                        let port = value
                            .parse::<u16>()
                            .map_err(|e| ConfigError::invalid(&flag, &value, e))?;
                        options.preview_port = Some(port);
                    }
                }
            }
            _ => tracing::debug!(argument = %arg, "ignoring unknown argument"),
        }
    }

    Ok(CliCommand::Run(options))
}

//! CLI module for the admin console.
//!
//! The dispatcher is called early in main() to handle informational flags
//! before the console starts:
//!
//! ```ignore
//! use holmes_admin::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if let CliCommand::Run(options) = command {
//!     // start the console with `options`
//! } else {
//!     run_cli_command(command);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run an informational CLI command.
///
/// Returns the run options when the console should start; `Version` and
/// `Help` print and exit the process.
pub fn run_cli_command(command: CliCommand) -> Option<RunOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(options) => Some(options),
    }
}

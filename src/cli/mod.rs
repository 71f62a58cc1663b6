//! CLI module for lfgen
//!
//! ## Commands
//!
//! - `render <file>` - Render the declaration of a declaration document as C++
//! - `time <magnitude> <unit>` - Render a single C++ duration literal
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Render target-language initializers and types for reactor declarations
#[derive(Parser, Debug)]
#[command(name = "lfgen")]
#[command(version = VERSION)]
#[command(about = "Render target-language initializers and types for reactor declarations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the declaration of a JSON declaration document
    Render {
        /// Declaration document
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Which initializer form to render
        #[arg(long, value_enum, default_value_t = Form::Standalone)]
        form: Form,
        /// Where parameter references are rendered from
        #[arg(long, value_enum, default_value_t = Scope::Local)]
        scope: Scope,
        /// Handle to the enclosing instance (enclosing scope only)
        #[arg(long, value_name = "NAME")]
        accessor: Option<String>,
        /// Spelling of the `time` type
        #[arg(long, value_name = "TYPE")]
        duration_type: Option<String>,
        /// Also print the rendered type
        #[arg(long)]
        show_type: bool,
    },

    /// Render a duration literal
    Time {
        /// Magnitude of the duration
        #[arg(value_name = "MAGNITUDE", allow_negative_numbers = true)]
        magnitude: i64,
        /// Time unit (e.g. `msec`, `sec`, `weeks`)
        #[arg(value_name = "UNIT", default_value = "")]
        unit: String,
    },
}

/// Initializer form.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// The value of a standalone variable
    Standalone,
    /// A constructor's member-initializer list entry
    List,
}

/// Scope parameter references are rendered from.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Parameters are in scope by name
    Local,
    /// Parameters are reached through the enclosing instance
    Enclosing,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Render {
            file,
            form,
            scope,
            accessor,
            duration_type,
            show_type,
        } => {
            let options = commands::RenderOptions {
                form,
                scope,
                accessor,
                duration_type,
                show_type,
            };
            commands::render_file(&file, &options)
        }
        Command::Time { magnitude, unit } => commands::render_time(magnitude, &unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_defaults() {
        let cli = Cli::try_parse_from(["lfgen", "render", "decl.json"]).unwrap();
        match cli.command {
            Command::Render {
                file,
                form,
                scope,
                accessor,
                show_type,
                ..
            } => {
                assert_eq!(file, PathBuf::from("decl.json"));
                assert_eq!(form, Form::Standalone);
                assert_eq!(scope, Scope::Local);
                assert_eq!(accessor, None);
                assert!(!show_type);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "lfgen",
            "render",
            "decl.json",
            "--form",
            "list",
            "--scope",
            "enclosing",
            "--accessor",
            "outer",
            "--show-type",
        ])
        .unwrap();
        match cli.command {
            Command::Render {
                form,
                scope,
                accessor,
                show_type,
                ..
            } => {
                assert_eq!(form, Form::List);
                assert_eq!(scope, Scope::Enclosing);
                assert_eq!(accessor.as_deref(), Some("outer"));
                assert!(show_type);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_time() {
        let cli = Cli::try_parse_from(["lfgen", "time", "5", "weeks"]).unwrap();
        match cli.command {
            Command::Time { magnitude, unit } => {
                assert_eq!(magnitude, 5);
                assert_eq!(unit, "weeks");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_form() {
        assert!(Cli::try_parse_from(["lfgen", "render", "decl.json", "--form", "inline"]).is_err());
    }
}

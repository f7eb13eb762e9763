//! Command-line interface module.
//!
//! This module defines the CLI structure using Clap, including
//! all commands, arguments, and options.
//!
//! # Commands
//!
//! - `open`: Open the docs for the type or parameter at a file position
//! - `url`: Print the docs URL instead of opening it
//! - `init`: Create an example configuration file
//! - `validate`: Validate a configuration file
//!
//! # Example Usage
//!
//! ```bash
//! # Open docs for the type under line 12, column 14
//! tfdoc open main.tf --line 12 --column 14
//!
//! # Print the URL as JSON for an editor plugin
//! tfdoc url main.tf -l 12 -c 14 --format json
//!
//! # Initialize configuration
//! tfdoc init
//! ```

use crate::types::{OutputFormat, Position};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tfdoc - open Terraform Registry documentation from your editor.
#[derive(Parser, Debug)]
#[command(
    name = "tfdoc",
    author,
    version,
    about = "Open Terraform Registry docs for the resource, data source or parameter under the cursor",
    long_about = "tfdoc looks at a position in a Terraform file, works out which resource or \
                  data source type (or which of its parameters) sits there, and opens the \
                  matching Terraform Registry page in the default browser."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, env = "TFDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the docs for the type or parameter at a position
    #[command(visible_alias = "o")]
    Open(OpenArgs),

    /// Print the docs URL for the type or parameter at a position
    Url(UrlArgs),

    /// Create an example configuration file
    Init,

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// A cursor position in a file, as an editor reports it.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CursorArgs {
    /// Line of the cursor (1-based)
    #[arg(short, long, default_value = "1")]
    pub line: usize,

    /// Column of the cursor (1-based, in characters)
    #[arg(short, long, default_value = "1")]
    pub column: usize,
}

impl CursorArgs {
    /// The zero-based position for these arguments.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::from_one_based(self.line, self.column)
    }
}

/// Arguments for the open command.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Terraform file the cursor is in (no file means no active editor)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Cursor position
    #[command(flatten)]
    pub cursor: CursorArgs,
}

/// Arguments for the url command.
#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Terraform file the cursor is in
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cursor position
    #[command(flatten)]
    pub cursor: CursorArgs,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,
}

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(value_name = "FILE", default_value = "tfdoc.yaml")]
    pub config: PathBuf,
}

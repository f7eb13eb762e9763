//! Error types for tfdoc.
//!
//! Two families live here:
//!
//! - [`TfdocError`]: failures of the surrounding machinery (reading files,
//!   loading configuration). These propagate with `?` and carry the source
//!   location where they were raised.
//! - [`CommandFailure`]: the four terminal outcomes of a docs command that
//!   are shown to the user. Their `Display` output is the exact message.
//!
//! # Example
//!
//! ```rust
//! use tfdoc::error::{TfdocError, Result};
//!
//! fn read(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .map_err(|e| TfdocError::io(path, e, file!(), line!()))
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Macro to create errors with automatic source location tracking.
///
/// Usage:
/// ```ignore
/// return Err(err!(FileNotFound { path: path.to_path_buf() }));
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident { $($field:ident: $value:expr),* $(,)? }) => {
        $crate::error::TfdocError::$variant {
            $($field: $value,)*
            src_path: file!(),
            src_line: line!(),
        }
    };
}

/// A specialized Result type for tfdoc operations.
pub type Result<T> = std::result::Result<T, TfdocError>;

/// The main error type for tfdoc.
#[derive(Error, Debug)]
pub enum TfdocError {
    // =========================================================================
    // I/O and File System Errors
    // =========================================================================
    /// I/O error with path context.
    #[error("I/O error at '{path}' ({src_path}:{src_line}): {source}")]
    Io {
        /// The path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// File not found.
    #[error("File not found: {path} ({src_path}:{src_line})")]
    FileNotFound {
        /// The missing file path
        path: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration parsing error.
    #[error("Failed to parse configuration ({src_path}:{src_line}): {message}")]
    ConfigParse {
        /// Error message
        message: String,
        /// The underlying error (if any)
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}' ({src_path}:{src_line}): {message}")]
    ConfigValue {
        /// The configuration key
        key: String,
        /// Error message
        message: String,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },
}

impl TfdocError {
    /// Creates an `Io` error, or `FileNotFound` when the file is missing.
    #[must_use]
    pub fn io(
        path: impl Into<PathBuf>,
        source: std::io::Error,
        src_path: &'static str,
        src_line: u32,
    ) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound {
                path,
                src_path,
                src_line,
            };
        }
        Self::Io {
            path,
            source,
            src_path,
            src_line,
        }
    }

    /// Creates a `ConfigParse` error.
    #[must_use]
    pub fn config_parse(
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        src_path: &'static str,
        src_line: u32,
    ) -> Self {
        Self::ConfigParse {
            message,
            source,
            src_path,
            src_line,
        }
    }

    /// Returns the appropriate exit code for the error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied => 13,
            Self::FileNotFound { .. } => 14,
            Self::ConfigParse { .. } => 18,
            Self::ConfigValue { .. } => 19,
            _ => 1,
        }
    }
}

/// Extension trait for `Result` to add context to errors.
pub trait ResultExt<T> {
    /// Adds a file path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;

    /// Converts a general error into a `ConfigParse` error with context.
    fn to_config_parse_error(self, message: String) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| {
            let source = e
                .into()
                .downcast::<std::io::Error>()
                .map_or_else(|other| std::io::Error::other(other), |io| *io);
            TfdocError::io(path, source, file!(), line!())
        })
    }

    fn to_config_parse_error(self, message: String) -> Result<T> {
        self.map_err(|e| TfdocError::config_parse(message, Some(e.into()), file!(), line!()))
    }
}

/// Terminal outcomes of a docs command that the user gets to see.
///
/// None of these are exceptional: a cursor resting on something that is not
/// a type string is the common case. The `Display` text is what the host
/// shows in its error notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandFailure {
    /// The host has no active editor.
    #[error("No active editor.")]
    NoActiveEditor,

    /// Nothing under the cursor resolves to a resource, data source or parameter.
    #[error("Place the cursor on a Terraform resource/data source type string, e.g. \"aws_instance\".")]
    NoTarget,

    /// A target resolved but its type name cannot be mapped to a registry page.
    #[error("Could not derive Terraform Registry URL for \"{type_name}\".")]
    UnbuildableUrl {
        /// The type name echoed back to the user
        type_name: String,
    },

    /// The host could not open the URL.
    #[error("Failed to open {url}.")]
    OpenFailed {
        /// The URL that was attempted
        url: String,
    },
}

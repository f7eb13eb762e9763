//! Core data types used throughout tfdoc.
//!
//! This module defines the values that flow between the resolver, the
//! registry URL builder and the host:
//! - Terraform block kinds and resolved targets
//! - Cursor positions and word ranges inside a document
//! - Output formats for the CLI

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The kind of Terraform block a type name is declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// A managed `resource` block
    Resource,
    /// A read-only `data` block
    DataSource,
}

impl BlockKind {
    /// Map a block keyword (`resource` or `data`) to its kind.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "resource" => Some(Self::Resource),
            "data" => Some(Self::DataSource),
            _ => None,
        }
    }

    /// The registry docs path segment for this kind.
    #[must_use]
    pub const fn docs_segment(self) -> &'static str {
        match self {
            Self::Resource => "resources",
            Self::DataSource => "data-sources",
        }
    }
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resource => write!(f, "resource"),
            Self::DataSource => write!(f, "data-source"),
        }
    }
}

/// What the cursor points at: a resource or data source type, optionally
/// narrowed to one of its parameters.
///
/// # Example HCL
///
/// ```hcl
/// resource "aws_instance" "web" {
///   ami = "ami-123456"
/// }
/// ```
///
/// With the cursor on `aws_instance` the target is
/// `{ type_name: "aws_instance", kind: Resource, parameter: None }`; with
/// the cursor on `ami` it also carries `parameter: Some("ami")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerraformTarget {
    /// Full type name, e.g. `aws_instance`
    pub type_name: String,

    /// Whether the type is a resource or a data source
    pub kind: BlockKind,

    /// Parameter inside the block, if the cursor sits on an assignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl TerraformTarget {
    /// Create a target for a type name without a parameter.
    #[must_use]
    pub fn new(type_name: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
            parameter: None,
        }
    }

    /// Narrow the target to a parameter of the block.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }
}

/// A zero-based position in a document.
///
/// `character` counts Unicode scalar values from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line index
    pub line: usize,
    /// Character index within the line
    pub character: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Build a position from the one-based line and column an editor shows.
    ///
    /// Zero is treated like one.
    #[must_use]
    pub const fn from_one_based(line: usize, column: usize) -> Self {
        Self {
            line: line.saturating_sub(1),
            character: column.saturating_sub(1),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// The span of a word on a single line, in character indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordRange {
    /// Line index
    pub line: usize,
    /// First character of the word
    pub start: usize,
    /// One past the last character of the word
    pub end: usize,
}

impl WordRange {
    /// Whether `character` lies inside the word or touches either end.
    #[must_use]
    pub const fn touches(&self, character: usize) -> bool {
        self.start <= character && character <= self.end
    }
}

/// Output format for the `url` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare URL on a single line
    #[default]
    Text,
    /// The resolved target and URL as a JSON object
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// A resolved target together with its registry URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsLink {
    /// What the cursor pointed at
    pub target: TerraformTarget,
    /// The Terraform Registry page for it
    pub url: String,
}

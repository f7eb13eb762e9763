//! # tfdoc
//!
//! Open Terraform Registry documentation for whatever the cursor points at
//! in a Terraform file.
//!
//! tfdoc looks at the line under the cursor and decides whether it points at
//! a resource or data source type string, or at a parameter assigned inside
//! such a block. It then builds the matching registry URL and asks its host
//! (an editor, or the terminal) to open it.
//!
//! ## Features
//!
//! - **Target resolution**: quoted type strings after `resource`/`data`, and
//!   parameters inside the nearest enclosing block
//! - **Registry URLs**: namespaces for providers not published by HashiCorp,
//!   extendable from configuration
//! - **Host abstraction**: the command runs against any [`host::Host`]; the
//!   binary uses a terminal host that opens the system browser
//!
//! ## Example
//!
//! ```rust
//! use tfdoc::{Config, DocsCommand};
//! use tfdoc::host::{Editor, TextDocument};
//! use tfdoc::types::Position;
//!
//! let document = TextDocument::new(r#"resource "aws_instance" "web" {}"#);
//! let editor = Editor::new(document, Position::new(0, 12));
//!
//! let link = DocsCommand::new(&Config::default()).locate(&editor).unwrap();
//! assert_eq!(
//!     link.url,
//!     "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/instance"
//! );
//! ```

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export commonly used types at crate root
pub use command::{DocsCommand, COMMAND_ID};
pub use config::Config;
pub use error::{CommandFailure, Result, TfdocError};
pub use registry::build_docs_url;
pub use resolver::resolve_target;
pub use types::{BlockKind, DocsLink, Position, TerraformTarget};

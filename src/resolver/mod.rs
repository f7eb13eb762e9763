//! Target resolution for Terraform files.
//!
//! Given a document and a cursor, the resolver decides what the user is
//! pointing at. It looks at the cursor line and, for parameters, scans
//! upward for the nearest block header. No HCL is parsed.
//!
//! # Recognized Shapes
//!
//! - A quoted type string right after `resource` or `data`:
//!   `resource "aws_instance" "web" {`
//! - A parameter on the left of an assignment inside such a block:
//!   `  instance_type = "t2.micro"`
//!
//! # Example
//!
//! ```rust
//! use tfdoc::host::TextDocument;
//! use tfdoc::resolver::resolve_target;
//! use tfdoc::types::{BlockKind, Position};
//!
//! let document = TextDocument::new(r#"data "aws_ami" "ubuntu" {}"#);
//! let target = resolve_target(&document, Position::new(0, 8)).unwrap();
//! assert_eq!(target.type_name, "aws_ami");
//! assert_eq!(target.kind, BlockKind::DataSource);
//! ```

mod patterns;
mod target;

pub use patterns::{is_type_name, WORD_PATTERN};
pub use target::resolve_target;

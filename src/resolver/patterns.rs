//! Line patterns recognized by the resolver.
//!
//! Everything here works on a single line of text. Nothing tries to
//! understand HCL beyond what a regular expression can see on that line.

use crate::types::BlockKind;
use regex::Regex;
use std::sync::LazyLock;

/// A run of identifier characters. Used to pick the word under the cursor.
pub static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("Invalid regex"));

/// A type name with a provider prefix, e.g. `aws_instance`.
static TYPE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+_[A-Za-z0-9_]+$").expect("Invalid regex"));

/// Left-hand side of an assignment, e.g. `  instance_type = "t2.micro"`.
static ASSIGNMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z0-9_]+)\s*=").expect("Invalid regex"));

/// Opening line of a resource or data block, e.g. `resource "aws_instance" "web" {`.
static BLOCK_HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(resource|data)\s+"([A-Za-z0-9_]+)"\s+"[^"]*"\s*\{"#).expect("Invalid regex")
});

/// Block keyword directly in front of the quote that opens a type string.
static KEYWORD_BEFORE_QUOTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b(resource|data)\s*"$"#).expect("Invalid regex"));

/// A block header found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    /// `resource` or `data`
    pub kind: BlockKind,
    /// The quoted type name, not yet checked for a provider prefix
    pub type_name: String,
}

/// Whether `word` looks like a Terraform type name with a provider prefix.
#[must_use]
pub fn is_type_name(word: &str) -> bool {
    TYPE_NAME_PATTERN.is_match(word)
}

/// The identifier assigned to on this line, if the line is an assignment.
#[must_use]
pub fn assigned_identifier(line: &str) -> Option<&str> {
    ASSIGNMENT_PATTERN
        .captures(line.trim_start())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a `resource`/`data` block header.
#[must_use]
pub fn block_header(line: &str) -> Option<BlockHeader> {
    let caps = BLOCK_HEADER_PATTERN.captures(line)?;
    let kind = BlockKind::from_keyword(caps.get(1)?.as_str())?;
    Some(BlockHeader {
        kind,
        type_name: caps.get(2)?.as_str().to_string(),
    })
}

/// The block kind named by the keyword that ends `prefix`.
///
/// `prefix` is the line text up to and including the opening quote of a
/// type string. The keyword must sit right before that quote.
#[must_use]
pub fn keyword_before_quote(prefix: &str) -> Option<BlockKind> {
    KEYWORD_BEFORE_QUOTE_PATTERN
        .captures(prefix)
        .and_then(|caps| caps.get(1))
        .and_then(|m| BlockKind::from_keyword(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("aws_instance", true ; "simple type")]
    #[test_case("google_compute_instance", true ; "multi segment type")]
    #[test_case("aws", false ; "provider only")]
    #[test_case("_instance", false ; "empty provider")]
    #[test_case("aws_", false ; "empty resource path")]
    #[test_case("aws-instance", false ; "dash separator")]
    fn test_is_type_name(word: &str, expected: bool) {
        assert_eq!(is_type_name(word), expected);
    }

    #[test]
    fn test_assigned_identifier() {
        assert_eq!(assigned_identifier("  ami = \"ami-123\""), Some("ami"));
        assert_eq!(assigned_identifier("instance_type=\"t2.micro\""), Some("instance_type"));
        assert_eq!(assigned_identifier("tags {"), None);
        assert_eq!(assigned_identifier("resource \"aws_instance\" \"web\" {"), None);
    }

    #[test]
    fn test_block_header() {
        assert_eq!(
            block_header("resource \"aws_instance\" \"web\" {"),
            Some(BlockHeader {
                kind: BlockKind::Resource,
                type_name: "aws_instance".to_string(),
            })
        );
        assert_eq!(
            block_header("  data \"aws_ami\" \"ubuntu\"{"),
            Some(BlockHeader {
                kind: BlockKind::DataSource,
                type_name: "aws_ami".to_string(),
            })
        );
        assert_eq!(block_header("module \"vpc\" {"), None);
        assert_eq!(block_header("resource \"aws_instance\" \"web\""), None);
    }

    #[test]
    fn test_keyword_before_quote() {
        assert_eq!(keyword_before_quote("resource \""), Some(BlockKind::Resource));
        assert_eq!(keyword_before_quote("  data\""), Some(BlockKind::DataSource));
        assert_eq!(keyword_before_quote("resource \"aws_instance\" \""), None);
        assert_eq!(keyword_before_quote("myresource \""), None);
        assert_eq!(keyword_before_quote("source = \""), None);
    }
}

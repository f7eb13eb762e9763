//! Cursor-to-target resolution.

use super::patterns::{self, WORD_PATTERN};
use crate::host::Document;
use crate::types::{Position, TerraformTarget, WordRange};

const QUOTE: char = '"';

/// Work out what the cursor points at.
///
/// A parameter on the left of an assignment inside a resource or data block
/// wins over a quoted type string. Returns `None` when neither applies.
#[must_use]
pub fn resolve_target<D: Document + ?Sized>(
    document: &D,
    position: Position,
) -> Option<TerraformTarget> {
    let target = resolve_parameter(document, position).or_else(|| resolve_type(document, position));
    match &target {
        Some(target) => tracing::debug!(
            position = %position,
            type_name = %target.type_name,
            kind = %target.kind,
            parameter = ?target.parameter,
            "Resolved target"
        ),
        None => tracing::debug!(position = %position, "No target under cursor"),
    }
    target
}

/// A parameter name assigned on the cursor line, qualified by the nearest
/// block header above it.
fn resolve_parameter<D: Document + ?Sized>(
    document: &D,
    position: Position,
) -> Option<TerraformTarget> {
    let range = document.word_range_at(position, &WORD_PATTERN)?;
    let word = document.text_in(&range)?;
    let line = document.line_text(position.line)?;

    if patterns::assigned_identifier(line)? != word {
        return None;
    }

    // First header upwards is taken as the enclosing block; braces are not counted.
    let header = (0..=position.line)
        .rev()
        .filter_map(|index| document.line_text(index))
        .find_map(patterns::block_header)?;

    if !patterns::is_type_name(&header.type_name) {
        tracing::debug!(
            type_name = %header.type_name,
            "Enclosing block type has no provider prefix"
        );
        return None;
    }

    Some(TerraformTarget::new(header.type_name, header.kind).with_parameter(word))
}

/// A quoted type string directly after `resource` or `data`.
fn resolve_type<D: Document + ?Sized>(document: &D, position: Position) -> Option<TerraformTarget> {
    let range = document.word_range_at(position, &WORD_PATTERN)?;
    let word = document.text_in(&range)?;
    if !patterns::is_type_name(word) {
        return None;
    }

    let line = document.line_text(range.line)?;
    if !is_quoted(line, &range) {
        return None;
    }

    // Prefix up to and including the opening quote.
    let prefix: String = line.chars().take(range.start).collect();
    let kind = patterns::keyword_before_quote(&prefix)?;

    Some(TerraformTarget::new(word, kind))
}

/// Whether the characters right before and right after the word are quotes.
fn is_quoted(line: &str, range: &WordRange) -> bool {
    let before = range
        .start
        .checked_sub(1)
        .and_then(|index| line.chars().nth(index));
    let after = line.chars().nth(range.end);
    before == Some(QUOTE) && after == Some(QUOTE)
}

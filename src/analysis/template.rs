// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Placeholder substitution for report templates
//!
//! Templates use `{name}` placeholders where `name` is lowercase ASCII and
//! underscores. Any other brace sequence is copied through untouched, and
//! substituted values are never scanned again, so page text containing
//! braces cannot inject placeholders.

use super::types::SynthesisError;

/// Substitute every `{name}` in `template` with its value from `values`
///
/// # Arguments
/// * `label` - Template name used in error messages
/// * `template` - Template text
/// * `values` - Placeholder name / value pairs
pub fn render_template(
    label: &str,
    template: &str,
    values: &[(&str, String)],
) -> Result<String, SynthesisError> {
    let mut output = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            if is_placeholder_start(after_open) {
                return Err(SynthesisError::UnterminatedPlaceholder {
                    template: label.to_string(),
                });
            }
            output.push('{');
            rest = after_open;
            continue;
        };

        let name = &after_open[..close];
        if !is_placeholder_name(name) {
            output.push('{');
            rest = after_open;
            continue;
        }

        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| SynthesisError::UnresolvedPlaceholder {
                template: label.to_string(),
                name: name.to_string(),
            })?;
        output.push_str(value);
        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
    Ok(output)
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
}

fn is_placeholder_start(text: &str) -> bool {
    let name_len = text
        .bytes()
        .take_while(|b| b.is_ascii_lowercase() || *b == b'_')
        .count();
    name_len > 0 && name_len == text.len()
}

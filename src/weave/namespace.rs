//! Namespace path validation.

use crate::error::{Result, WeaveError};

/// Characters that may begin an identifier segment of a class name.
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Characters that may appear after the first character of a segment.
fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_numeric()
}

/// Validate a namespace path such as a package name.
///
/// Accepts dot- or slash-separated segments and returns the canonical
/// slash-separated form with any single trailing separator removed.
/// Blank input is not an error; it canonicalizes to the empty string
/// (the default namespace).
///
/// # Example
/// ```
/// use classweave::weave::validate_namespace;
///
/// assert_eq!(validate_namespace("com.example.util").unwrap(), "com/example/util");
/// assert_eq!(validate_namespace("  ").unwrap(), "");
/// ```
pub fn validate_namespace(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    // Each segment must open with an identifier-start character; a separator
    // re-arms that expectation. A doubled separator trips the start check,
    // since '.' and '/' are never identifier characters.
    let mut expect_start = true;
    for (position, character) in trimmed.chars().enumerate() {
        if expect_start {
            expect_start = false;
            if !is_identifier_start(character) {
                return Err(WeaveError::InvalidNamespace {
                    character,
                    position,
                    input: trimmed.to_string(),
                });
            }
            continue;
        }
        if character == '/' || character == '.' {
            expect_start = true;
            continue;
        }
        if !is_identifier_part(character) {
            return Err(WeaveError::InvalidNamespace {
                character,
                position,
                input: trimmed.to_string(),
            });
        }
    }

    let mut result = trimmed.replace('.', "/");
    if result.ends_with('/') {
        result.pop();
    }
    Ok(result)
}

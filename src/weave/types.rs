//! Type reference parsing.

use crate::error::{Result, WeaveError};
use crate::weave::loader::{ArtifactLoader, ClassRef};
use std::collections::HashSet;

/// Parse a comma-delimited list of type names, resolving each against the
/// given loader.
///
/// Names may be fully qualified or internal (slashes are legal). The result
/// preserves first-seen order and collapses duplicates. Resolution is
/// all-or-nothing: an unresolvable token fails the whole parse, and an empty
/// token between two commas is an error rather than being silently skipped.
pub fn parse_types(list: &str, loader: &ArtifactLoader) -> Result<Vec<ClassRef>> {
    if list.is_empty() {
        return Ok(Vec::new());
    }
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for token in list.split(',') {
        let trimmed = token.trim();
        let class = loader
            .resolve(&trimmed.replace('/', "."))
            .map_err(|source| WeaveError::UnresolvedType {
                token: trimmed.to_string(),
                source,
            })?;
        if seen.insert(class.clone()) {
            result.push(class);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loader_with(classes: &[&str]) -> (TempDir, ArtifactLoader) {
        let tmp = TempDir::new().unwrap();
        for internal_name in classes {
            let path = tmp.path().join(format!("{internal_name}.class"));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"\xCA\xFE\xBA\xBE").unwrap();
        }
        let loader = ArtifactLoader::new([tmp.path().to_path_buf()]);
        (tmp, loader)
    }

    #[test]
    fn parses_trimmed_tokens_in_order() {
        let (_tmp, loader) = loader_with(&["a/A", "b/B"]);

        let types = parse_types("a.A, b.B", &loader).unwrap();
        let names: Vec<_> = types.iter().map(ClassRef::name).collect();
        assert_eq!(names, vec!["a.A", "b.B"]);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let (_tmp, loader) = loader_with(&["a/A", "b/B"]);

        let types = parse_types("a.A, b.B ,a.A", &loader).unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].name(), "a.A");
        assert_eq!(types[1].name(), "b.B");
    }

    #[test]
    fn dotted_and_slashed_spellings_collapse() {
        let (_tmp, loader) = loader_with(&["a/A"]);

        let types = parse_types("a.A,a/A", &loader).unwrap();
        assert_eq!(types.len(), 1);
    }

    #[test]
    fn empty_token_fails_the_whole_parse() {
        let (_tmp, loader) = loader_with(&["a/A", "b/B"]);

        let err = parse_types("a.A,,b.B", &loader).unwrap_err();
        assert!(matches!(err, WeaveError::UnresolvedType { token, .. } if token.is_empty()));
    }

    #[test]
    fn unresolvable_token_fails_without_partial_result() {
        let (_tmp, loader) = loader_with(&["a/A"]);

        let err = parse_types("a.A,no.such.Type", &loader).unwrap_err();
        assert!(
            matches!(err, WeaveError::UnresolvedType { ref token, .. } if token == "no.such.Type")
        );
    }

    #[test]
    fn empty_list_yields_empty_set() {
        let (_tmp, loader) = loader_with(&[]);
        assert!(parse_types("", &loader).unwrap().is_empty());
    }
}

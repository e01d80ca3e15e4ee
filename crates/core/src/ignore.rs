//! Ignore pattern matching
//!
//! Patterns are shell globs compared against a file's base name, not its
//! full path, so `*.tmp` skips temp files anywhere in the tree.

use std::path::Path;

use glob::Pattern;

use crate::error::{Error, Result};

/// Check whether a file's base name matches any ignore pattern
///
/// Patterns are tried in order: the first match wins, and a malformed
/// pattern aborts the check before any later pattern is consulted.
pub fn is_ignored(patterns: &[String], path: &Path) -> Result<bool> {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return Ok(false),
    };

    for pattern in patterns {
        let compiled = Pattern::new(pattern).map_err(|e| Error::BadIgnorePattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        if compiled.matches(&name) {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_pattern_list_matches_nothing() {
        assert!(!is_ignored(&[], Path::new("junk.tmp")).unwrap());
    }

    #[test]
    fn test_matches_base_name_anywhere_in_tree() {
        let patterns = patterns(&["*.tmp"]);
        assert!(is_ignored(&patterns, Path::new("b.tmp")).unwrap());
        assert!(is_ignored(&patterns, Path::new("site/sub/b.tmp")).unwrap());
        assert!(!is_ignored(&patterns, Path::new("site/sub/c.txt")).unwrap());
    }

    #[test]
    fn test_directory_segments_never_match() {
        let patterns = patterns(&["cache"]);
        assert!(!is_ignored(&patterns, Path::new("cache/page.html")).unwrap());
        assert!(is_ignored(&patterns, Path::new("site/cache")).unwrap());
    }

    #[test]
    fn test_later_pattern_still_matches() {
        let patterns = patterns(&["*.css", "*.js"]);
        assert!(is_ignored(&patterns, Path::new("app.js")).unwrap());
        assert!(!is_ignored(&patterns, Path::new("index.html")).unwrap());
    }

    #[test]
    fn test_malformed_pattern_fails_before_later_match() {
        let patterns = patterns(&["[", "*.tmp"]);
        let err = is_ignored(&patterns, Path::new("junk.tmp")).unwrap_err();
        assert!(matches!(err, Error::BadIgnorePattern { .. }));
    }

    #[test]
    fn test_match_before_malformed_pattern_wins() {
        let patterns = patterns(&["*.tmp", "["]);
        assert!(is_ignored(&patterns, Path::new("junk.tmp")).unwrap());
    }

    #[test]
    fn test_question_mark_and_class_globs() {
        let patterns = patterns(&["page?.html", "[0-9]*.log"]);
        assert!(is_ignored(&patterns, Path::new("page1.html")).unwrap());
        assert!(is_ignored(&patterns, Path::new("404.log")).unwrap());
        assert!(!is_ignored(&patterns, Path::new("page10.html")).unwrap());
    }
}

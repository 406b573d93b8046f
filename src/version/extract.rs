//! Version extraction from a package metadata file.
//!
//! The file is read as plain text and searched for a
//! `__version__ = "..."` assignment. It is never executed or imported, so
//! extraction works before the package's own dependencies are installed.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use super::VersionString;
use crate::error::{RelgateError, Result};

static VERSION_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*__version__[ \t]*=[ \t]*(?:"([^"\r\n]*)"|'([^'\r\n]*)')"#).unwrap()
});

/// Extract the version from file content.
///
/// Returns `None` when no assignment line is present. If the file assigns
/// `__version__` more than once, the last assignment wins.
pub fn extract_version_from_str(content: &str) -> Option<String> {
    VERSION_ASSIGNMENT
        .captures_iter(content)
        .last()
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
}

/// Read a metadata file and extract its version.
///
/// # Errors
///
/// Returns `VersionNotFound` if the file cannot be read or has no
/// assignment line, and `InvalidVersion` if the assigned value is empty.
pub fn extract_version(path: &Path) -> Result<VersionString> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!("Cannot read {}: {}", path.display(), e);
        RelgateError::VersionNotFound {
            path: path.to_path_buf(),
        }
    })?;

    let raw = extract_version_from_str(&content).ok_or_else(|| RelgateError::VersionNotFound {
        path: path.to_path_buf(),
    })?;

    tracing::debug!("Extracted version {} from {}", raw, path.display());
    VersionString::new(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extracts_double_quoted_version() {
        assert_eq!(
            extract_version_from_str("__version__ = \"1.2.3\"\n"),
            Some("1.2.3".to_string())
        );
    }

    #[test]
    fn extracts_single_quoted_version() {
        assert_eq!(
            extract_version_from_str("__version__ = '1.2.3'\n"),
            Some("1.2.3".to_string())
        );
    }

    #[test]
    fn quote_style_does_not_change_result() {
        for v in ["0.4.10", "2.0.0rc1", "1.0.dev3", "10"] {
            let single = extract_version_from_str(&format!("__version__ = '{}'", v));
            let double = extract_version_from_str(&format!("__version__ = \"{}\"", v));
            assert_eq!(single.as_deref(), Some(v));
            assert_eq!(single, double);
        }
    }

    #[test]
    fn tolerates_whitespace_around_equals() {
        assert_eq!(
            extract_version_from_str("__version__='0.1'"),
            Some("0.1".to_string())
        );
        assert_eq!(
            extract_version_from_str("    __version__   =   \"0.2\""),
            Some("0.2".to_string())
        );
    }

    #[test]
    fn finds_assignment_among_other_lines() {
        let content = r#"# -*- coding: utf-8 -*-
"""Package metadata."""
__author__ = "someone"
__version__ = "0.4.10"
__license__ = "BSD"
"#;
        assert_eq!(extract_version_from_str(content), Some("0.4.10".into()));
    }

    #[test]
    fn last_assignment_wins() {
        let content = "__version__ = '0.1'\n__version__ = '0.2'\n";
        assert_eq!(extract_version_from_str(content), Some("0.2".into()));
    }

    #[test]
    fn ignores_commented_assignment() {
        assert_eq!(extract_version_from_str("# __version__ = '9.9'\n"), None);
    }

    #[test]
    fn ignores_mismatched_quotes() {
        assert_eq!(extract_version_from_str("__version__ = '1.0\"\n"), None);
    }

    #[test]
    fn no_assignment_returns_none() {
        assert_eq!(extract_version_from_str("VERSION = (1, 2, 3)\n"), None);
    }

    #[test]
    fn extract_version_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.py");
        std::fs::write(&path, "__version__ = \"3.1.4\"\n").unwrap();

        let version = extract_version(&path).unwrap();
        assert_eq!(version.as_str(), "3.1.4");
    }

    #[test]
    fn extract_version_without_match_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.py");
        std::fs::write(&path, "print('hello')\n").unwrap();

        let err = extract_version(&path).unwrap_err();
        assert!(matches!(err, RelgateError::VersionNotFound { .. }));
    }

    #[test]
    fn extract_version_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = extract_version(&temp.path().join("nope.py")).unwrap_err();
        assert!(matches!(err, RelgateError::VersionNotFound { .. }));
    }

    #[test]
    fn extract_version_empty_value_is_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.py");
        std::fs::write(&path, "__version__ = ''\n").unwrap();

        let err = extract_version(&path).unwrap_err();
        assert!(matches!(err, RelgateError::InvalidVersion { .. }));
    }
}

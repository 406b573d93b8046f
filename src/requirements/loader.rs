//! Requirements file loading.
//!
//! Reads pip-style requirements files:
//!
//! - one requirement per logical line, `\` continues a line
//! - blank lines and `#` comments (whole-line or trailing) are ignored
//! - `-r FILE` / `--requirement FILE` splices another file in place,
//!   resolved relative to the including file
//! - `-e SPEC` / `--editable SPEC` yields an editable requirement
//! - every other option line (`-c`, `--index-url`, `--pre`, ...) is skipped
//!
//! Declared order is preserved and duplicates are kept.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::parser::Requirement;
use crate::error::{RelgateError, Result};

/// Trailing comment: `#` at line start or preceded by whitespace.
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|\s+)#.*$").unwrap());

/// A classified logical line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Include(&'a str),
    Editable(&'a str),
    Option(&'a str),
    Requirement(&'a str),
}

/// Split an option line into flag and value, accepting `-rfile`,
/// `-r file`, `--requirement file` and `--requirement=file`.
fn option_value<'a>(line: &'a str, short: &str, long: &str) -> Option<&'a str> {
    if let Some(rest) = line.strip_prefix(long) {
        if let Some(value) = rest.strip_prefix('=') {
            return Some(value.trim());
        }
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some(rest.trim());
        }
        return None;
    }
    if !line.starts_with("--") {
        if let Some(rest) = line.strip_prefix(short) {
            return Some(rest.trim());
        }
    }
    None
}

fn classify(line: &str) -> Line<'_> {
    if !line.starts_with('-') {
        return Line::Requirement(line);
    }
    if let Some(value) = option_value(line, "-r", "--requirement") {
        return Line::Include(value);
    }
    if let Some(value) = option_value(line, "-e", "--editable") {
        return Line::Editable(value);
    }
    Line::Option(line)
}

/// Push `pending` minus its comment, if anything is left, and reset it.
fn flush(pending: &mut String, lines: &mut Vec<String>) {
    let line = COMMENT.replace(pending.as_str(), "");
    let line = line.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    pending.clear();
}

/// Join `\` continuations and strip comments, yielding non-empty lines.
///
/// A whole-line comment never continues, even when it ends in `\`, and it
/// ends any continuation in progress.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = String::new();

    for raw in content.lines() {
        if raw.trim_start().starts_with('#') {
            flush(&mut pending, &mut lines);
            continue;
        }
        if let Some(head) = raw.strip_suffix('\\') {
            pending.push_str(head);
            continue;
        }
        pending.push_str(raw);
        flush(&mut pending, &mut lines);
    }
    flush(&mut pending, &mut lines);

    lines
}

/// Loads requirements files and their includes.
#[derive(Debug, Default)]
pub struct RequirementsLoader {
    /// Files currently being read, for include-cycle detection.
    stack: Vec<PathBuf>,
}

impl RequirementsLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all requirements declared in `path`, following includes.
    ///
    /// # Errors
    ///
    /// Returns `RequirementsFile` if `path` or any included file does not
    /// exist, if includes form a cycle, or if a line cannot be parsed.
    pub fn load(&mut self, path: &Path) -> Result<Vec<Requirement>> {
        let file_error = |message: String| RelgateError::RequirementsFile {
            path: path.to_path_buf(),
            message,
        };

        if !path.is_file() {
            return Err(file_error("file does not exist".to_string()));
        }

        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if self.stack.contains(&key) {
            let cycle = self
                .stack
                .iter()
                .chain(std::iter::once(&key))
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(file_error(format!("include cycle: {}", cycle)));
        }

        let content = std::fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        self.stack.push(key);
        let result = self.parse_content(&content, base, path);
        self.stack.pop();
        result
    }

    fn parse_content(
        &mut self,
        content: &str,
        base: &Path,
        path: &Path,
    ) -> Result<Vec<Requirement>> {
        let mut requirements = Vec::new();

        for line in logical_lines(content) {
            match classify(&line) {
                Line::Include(target) => {
                    if target.is_empty() {
                        return Err(RelgateError::RequirementsFile {
                            path: path.to_path_buf(),
                            message: format!("include without a file name: {}", line),
                        });
                    }
                    if target.contains("://") {
                        return Err(RelgateError::RequirementsFile {
                            path: path.to_path_buf(),
                            message: format!("remote includes are not supported: {}", target),
                        });
                    }
                    let included = base.join(target);
                    tracing::debug!("Including requirements from {}", included.display());
                    requirements.extend(self.load(&included)?);
                }
                Line::Editable(spec) => requirements.push(Requirement::from_url(spec)),
                Line::Option(option) => {
                    tracing::debug!("Skipping option line in {}: {}", path.display(), option);
                }
                Line::Requirement(text) => {
                    let req = text.parse::<Requirement>().map_err(|message| {
                        RelgateError::RequirementsFile {
                            path: path.to_path_buf(),
                            message,
                        }
                    })?;
                    requirements.push(req);
                }
            }
        }

        Ok(requirements)
    }
}

/// Load requirements from the file identified by `segments` joined together.
///
/// # Example
///
/// ```no_run
/// use relgate::requirements::load_requirements;
///
/// let reqs = load_requirements(&["/project", "requirements-dev.txt"]).unwrap();
/// for req in &reqs {
///     println!("{}", req);
/// }
/// ```
pub fn load_requirements<P: AsRef<Path>>(segments: &[P]) -> Result<Vec<Requirement>> {
    let path: PathBuf = segments.iter().map(AsRef::as_ref).collect();
    RequirementsLoader::new().load(&path)
}

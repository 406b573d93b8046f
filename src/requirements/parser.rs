//! Requirement line parsing.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `name[extras] rest`, where `rest` is the version specifier and/or markers.
static REQUIREMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?:\[([^\]]*)\])?\s*(.*)$")
        .unwrap()
});

/// Start of per-requirement options such as `--hash=...`.
static TRAILING_OPTIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s--").unwrap());

static EGG_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#egg=([A-Za-z0-9._-]+)").unwrap());

/// A single declared dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Distribution name as written.
    pub name: String,
    /// Optional extras, e.g. `security` in `requests[security]`.
    pub extras: Vec<String>,
    /// Version specifier and/or environment marker, as written.
    pub specifier: Option<String>,
    /// Source URL or path for editable and direct-URL requirements.
    pub url: Option<String>,
}

impl Requirement {
    /// A requirement installed from a URL or local path (`-e ./pkg`,
    /// `git+https://...#egg=name`).
    ///
    /// Named by the `#egg=` fragment when present, else by the raw spec.
    pub fn from_url(spec: &str) -> Self {
        let spec = spec.trim();
        let name = EGG_FRAGMENT
            .captures(spec)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| spec.to_string());

        Self {
            name,
            extras: Vec::new(),
            specifier: None,
            url: Some(spec.to_string()),
        }
    }
}

impl FromStr for Requirement {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = match TRAILING_OPTIONS.find(line) {
            Some(m) => &line[..m.start()],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            return Err("empty requirement".to_string());
        }

        // Bare URLs and paths carry no parseable name.
        if line.contains("://") && !line.contains(" @ ") {
            return Ok(Self::from_url(line));
        }

        let caps = REQUIREMENT_LINE
            .captures(line)
            .ok_or_else(|| format!("invalid requirement: {}", line))?;

        let name = caps[1].to_string();
        let extras = caps
            .get(2)
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let specifier = caps
            .get(3)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(normalize_specifier);

        Ok(Self {
            name,
            extras,
            specifier,
            url: None,
        })
    }
}

/// Drop whitespace inside version clauses (`>= 2.0, < 3` becomes
/// `>=2.0,<3`). Markers after `;` and direct `@` references keep their text.
fn normalize_specifier(raw: &str) -> String {
    if raw.starts_with('@') {
        return raw.to_string();
    }

    let (versions, marker) = match raw.split_once(';') {
        Some((versions, marker)) => (versions, Some(marker.trim())),
        None => (raw, None),
    };
    let versions: String = versions.chars().filter(|c| !c.is_whitespace()).collect();

    match marker {
        Some(marker) => format!("{}; {}", versions, marker),
        None => versions,
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        if let Some(spec) = &self.specifier {
            if spec.starts_with('@') {
                f.write_str(" ")?;
            }
            f.write_str(spec)?;
        }
        Ok(())
    }
}

//! Tokenizer for CAD call-note lines.
//!
//! The vendor emits one status change per line, newest first:
//!
//! ```text
//! 12:35:00: E1, ON SCENE (Location: 12 MAIN ST)
//! 12:34:00: E1, ENROUTE
//! ```
//!
//! Lines that do not follow this shape are skipped, never treated as errors.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{2}:\d{2}:\d{2}):\s*([A-Z0-9]+)(?:,\s*|\s+)(.+)$")
        .expect("call-note line pattern is valid")
});

static LOCATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\(\s*Location:\s*([^)]*)\)").expect("location pattern is valid")
});

/// One parsed call-note line, borrowing from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// `HH:MM:SS`, copied verbatim.
    pub timestamp: &'a str,
    /// Unit token as written in the log.
    pub unit: &'a str,
    /// Everything after the unit token, including any location fragment.
    pub status_text: &'a str,
    pub location: Option<&'a str>,
}

impl<'a> LogLine<'a> {
    /// Parse a single line. Returns `None` for anything off-grammar.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = LINE_PATTERN.captures(line.trim())?;
        let timestamp = caps.get(1)?.as_str();
        let unit = caps.get(2)?.as_str();
        let status_text = caps.get(3)?.as_str().trim();

        let location = LOCATION_PATTERN
            .captures(status_text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty());

        Some(Self {
            timestamp,
            unit,
            status_text,
            location,
        })
    }

    /// Exact token comparison after ASCII case folding.
    pub fn is_unit(&self, unit_code: &str) -> bool {
        self.unit.eq_ignore_ascii_case(unit_code.trim())
    }

    /// Status text with the `(Location: ...)` fragment removed.
    pub fn keyword_text(&self) -> String {
        LOCATION_PATTERN
            .replace_all(self.status_text, " ")
            .trim()
            .to_string()
    }
}

/// Split raw call notes into non-empty lines.
///
/// Upstream sometimes delivers the field with literal `\n` escapes instead of
/// real line breaks, so both separators are honoured.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|chunk| chunk.split("\\n"))
        .map(|line| line.trim_end_matches('\r').trim())
        .filter(|line| !line.is_empty())
}

/// Iterate over every well-formed line, newest first.
pub fn parse_lines(text: &str) -> impl Iterator<Item = LogLine<'_>> {
    split_lines(text).filter_map(|line| {
        let parsed = LogLine::parse(line);
        if parsed.is_none() {
            log::trace!("skipping off-grammar call-note line: {line:?}");
        }
        parsed
    })
}

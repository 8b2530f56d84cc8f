//! Unit status resolution from CAD call notes.
//!
//! Call notes are a newest-first log of status changes for every unit on an
//! incident. For a given unit the first line naming it is its current state;
//! every older line for that unit is ignored. Nothing here fails: missing
//! notes or an unmentioned unit yield `None`, unknown phrasing yields the
//! rule table's fallback category.

pub mod line;
pub mod rules;
pub mod style;

use std::collections::BTreeMap;

use serde::Serialize;

pub use line::LogLine;
pub use rules::{RuleSpec, RuleTable, RuleTableSpec, StatusCategory, StatusRule};
pub use style::{StatusStyle, OWN_UNIT_BORDER};

/// Latest known state of a single unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitStatus {
    pub unit: String,
    pub status: StatusCategory,
    pub timestamp: String,
    pub location: Option<String>,
}

impl UnitStatus {
    fn from_line(line: &LogLine<'_>, rules: &RuleTable) -> Self {
        let status = if rules.strips_location() {
            rules.classify(&line.keyword_text())
        } else {
            rules.classify(line.status_text)
        };
        Self {
            unit: line.unit.to_ascii_uppercase(),
            status,
            timestamp: line.timestamp.to_string(),
            location: line.location.map(str::to_string),
        }
    }

    /// Attach the presentation tokens for this status.
    pub fn styled(&self, is_own_unit: bool) -> UnitStatusResult {
        let style = StatusStyle::of(self.status);
        UnitStatusResult {
            status: self.status,
            label: style.label,
            class_name: style.class_name,
            border_class: style.border_for(is_own_unit),
            timestamp: self.timestamp.clone(),
            location: self.location.clone(),
        }
    }
}

/// What a badge needs to render a unit's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitStatusResult {
    pub status: StatusCategory,
    pub label: &'static str,
    pub class_name: &'static str,
    pub border_class: &'static str,
    pub timestamp: String,
    pub location: Option<String>,
}

/// Resolve `unit_code`'s current status with the builtin rule table.
pub fn classify_unit_status(
    unit_code: &str,
    log_text: Option<&str>,
    is_own_unit: bool,
) -> Option<UnitStatusResult> {
    classify_unit_status_with(RuleTable::builtin(), unit_code, log_text, is_own_unit)
}

pub fn classify_unit_status_with(
    rules: &RuleTable,
    unit_code: &str,
    log_text: Option<&str>,
    is_own_unit: bool,
) -> Option<UnitStatusResult> {
    let text = log_text.filter(|t| !t.trim().is_empty())?;

    let found = line::parse_lines(text)
        .find(|line| line.is_unit(unit_code))
        .map(|line| UnitStatus::from_line(&line, rules));

    match &found {
        Some(status) => log::trace!(
            "unit {unit_code} resolved to {} at {}",
            status.status,
            status.timestamp
        ),
        None => log::trace!("unit {unit_code} not mentioned in call notes"),
    }

    found.map(|status| status.styled(is_own_unit))
}

/// Resolve the latest status of every unit in `unit_codes` in one pass.
///
/// Keys are uppercased unit codes. Units without a line are absent.
pub fn parse_dispatch_comments<S: AsRef<str>>(
    log_text: Option<&str>,
    unit_codes: &[S],
) -> BTreeMap<String, UnitStatus> {
    parse_dispatch_comments_with(RuleTable::builtin(), log_text, unit_codes)
}

pub fn parse_dispatch_comments_with<S: AsRef<str>>(
    rules: &RuleTable,
    log_text: Option<&str>,
    unit_codes: &[S],
) -> BTreeMap<String, UnitStatus> {
    let mut statuses = BTreeMap::new();
    let Some(text) = log_text else {
        return statuses;
    };

    let mut wanted: Vec<String> = unit_codes
        .iter()
        .map(|u| u.as_ref().trim().to_ascii_uppercase())
        .filter(|u| !u.is_empty())
        .collect();
    wanted.sort();
    wanted.dedup();

    for line in line::parse_lines(text) {
        let unit = line.unit.to_ascii_uppercase();
        if wanted.binary_search(&unit).is_err() || statuses.contains_key(&unit) {
            continue;
        }
        statuses.insert(unit, UnitStatus::from_line(&line, rules));
        if statuses.len() == wanted.len() {
            break;
        }
    }

    statuses
}

/// Case-insensitive lookup into the result of [`parse_dispatch_comments`].
pub fn latest_unit_status<'a>(
    unit: &str,
    statuses: &'a BTreeMap<String, UnitStatus>,
) -> Option<&'a UnitStatus> {
    statuses.get(&unit.trim().to_ascii_uppercase())
}

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{
    fmt::Write as _,
    io::Read,
    path::Path,
};

use crate::protocol::{
    dispatch::{elapsed_label, DispatchStore, Incident, IncidentKind, Roster, UnitBadge, UnitBoard},
    status::{self, RuleTable, UnitStatusResult},
};

/// Read call notes or incident JSON from a file, or from stdin when no
/// path (or `-`) is given.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(p) if p != "-" => std::fs::read_to_string(Path::new(p))
            .with_context(|| format!("failed to read {p}")),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Outcome of `firedash classify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub unit: String,
    pub own: bool,
    pub status: Option<UnitStatusResult>,
}

/// Classify one unit's status; ownership defaults to the roster.
pub fn classify(
    rules: &RuleTable,
    roster: &Roster,
    unit: &str,
    notes: &str,
    own_override: Option<bool>,
) -> Classification {
    let own = own_override.unwrap_or_else(|| roster.is_own_unit(unit));
    Classification {
        unit: unit.trim().to_ascii_uppercase(),
        own,
        status: status::classify_unit_status_with(rules, unit, Some(notes), own),
    }
}

pub fn render_classification(result: &Classification, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(result).context("failed to serialize status");
    }

    Ok(match &result.status {
        Some(status) => {
            let mut line = format!(
                "{}: {} ({}) at {}",
                result.unit, status.label, status.status, status.timestamp
            );
            if let Some(location) = &status.location {
                let _ = write!(line, " - {location}");
            }
            line
        }
        None => format!("{}: no status", result.unit),
    })
}

/// One incident as shown by `firedash board`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidentSummary {
    pub incident_id: u64,
    pub kind: IncidentKind,
    pub dispatch_type: String,
    pub address: String,
    pub open: bool,
    pub elapsed: Option<String>,
    pub involves_own_unit: bool,
    pub badges: Vec<UnitBadge>,
    pub on_scene: Vec<String>,
}

/// Decode an incident list and load it into a store. The upstream feed is
/// oldest first, so the last entry ends up at the top.
pub fn load_incidents(source: &str) -> Result<DispatchStore> {
    let incidents: Vec<Incident> =
        serde_json::from_str(source).context("failed to decode incident list")?;
    log::info!("loaded {} incidents", incidents.len());
    Ok(incidents.into_iter().collect())
}

pub fn summarize(
    store: &DispatchStore,
    roster: &Roster,
    rules: &RuleTable,
    now: DateTime<Utc>,
) -> Vec<IncidentSummary> {
    store
        .iter()
        .map(|incident| {
            let board = UnitBoard::for_incident(incident, roster, rules);
            let on_scene = board.on_scene().map(|b| b.unit.clone()).collect();
            let dispatch = &incident.dispatch;
            IncidentSummary {
                incident_id: board.incident_id,
                kind: board.kind,
                dispatch_type: dispatch.dispatch_type.clone(),
                address: dispatch.address.clone(),
                open: dispatch.is_open(),
                elapsed: elapsed_label(&dispatch.created_at, now),
                involves_own_unit: board.involves_own_unit,
                badges: board.badges,
                on_scene,
            }
        })
        .collect()
}

pub fn render_board(summaries: &[IncidentSummary], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(summaries).context("failed to serialize board");
    }

    let mut out = String::new();
    for s in summaries {
        let _ = write!(
            out,
            "#{} [{}] {} @ {}",
            s.incident_id, s.kind, s.dispatch_type, s.address
        );
        if let Some(elapsed) = &s.elapsed {
            let _ = write!(out, " ({elapsed})");
        }
        if !s.open {
            out.push_str(" closed");
        }
        if s.involves_own_unit {
            out.push_str(" *own*");
        }
        out.push('\n');

        for badge in &s.badges {
            let unit = if badge.own {
                format!("{}*", badge.unit)
            } else {
                badge.unit.clone()
            };
            match &badge.status {
                Some(status) => {
                    let _ = writeln!(out, "  {unit:<8} {:<11} {}", status.label, status.timestamp);
                }
                None => {
                    let _ = writeln!(out, "  {unit:<8} -");
                }
            }
        }
    }
    Ok(out)
}

pub fn render_rules(rules: &RuleTable, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(&rules.to_spec())
            .context("failed to serialize rule table");
    }

    let mut out = format!("rule table v{}\n", rules.version());
    for (idx, rule) in rules.rules().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<13} {}",
            idx + 1,
            rule.category(),
            rule.patterns().join(" | ")
        );
    }
    let _ = writeln!(out, "    fallback: {}", rules.fallback());
    Ok(out)
}

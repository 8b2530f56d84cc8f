use serde::Serialize;

use super::{kind::IncidentKind, roster::Roster, types::Incident};
use crate::status::{self, RuleTable, StatusCategory, UnitStatusResult};

/// One unit assigned to an incident, with its resolved status if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitBadge {
    pub unit: String,
    pub own: bool,
    pub status: Option<UnitStatusResult>,
}

impl UnitBadge {
    pub fn category(&self) -> Option<StatusCategory> {
        self.status.as_ref().map(|s| s.status)
    }
}

/// Per-incident view of every assigned unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitBoard {
    pub incident_id: u64,
    pub kind: IncidentKind,
    pub involves_own_unit: bool,
    pub badges: Vec<UnitBadge>,
}

impl UnitBoard {
    pub fn for_incident(incident: &Incident, roster: &Roster, rules: &RuleTable) -> Self {
        let notes = incident.call_notes();
        let unit_codes = &incident.dispatch.unit_codes;

        let badges = unit_codes
            .iter()
            .map(|unit| {
                let own = roster.is_own_unit(unit);
                UnitBadge {
                    unit: unit.clone(),
                    own,
                    status: status::classify_unit_status_with(rules, unit, notes, own),
                }
            })
            .collect();

        Self {
            incident_id: incident.id(),
            kind: incident.dispatch.kind(),
            involves_own_unit: roster.involves_own_unit(unit_codes),
            badges,
        }
    }

    /// Badges whose latest status puts them on scene.
    pub fn on_scene(&self) -> impl Iterator<Item = &UnitBadge> {
        self.badges
            .iter()
            .filter(|b| b.category() == Some(StatusCategory::OnScene))
    }
}

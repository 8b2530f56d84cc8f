use serde::{Deserialize, Serialize};

use super::kind::IncidentKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchState {
    #[default]
    Open,
    Closed,
}

/// A dispatch record as returned by the upstream `/dispatches` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub dispatch_type: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub cross_streets: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub unit_codes: Vec<String>,
    #[serde(default)]
    pub incident_type_code: String,
    #[serde(default)]
    pub status_code: DispatchState,
    #[serde(default)]
    pub xref_id: String,
    pub created_at: String,
    #[serde(default)]
    pub radio_channel: Option<String>,
    #[serde(default)]
    pub alarm_level: Option<String>,
    #[serde(default)]
    pub incident_number: Option<String>,
    #[serde(default)]
    pub fire_zone: Option<String>,
    #[serde(default)]
    pub fire_stations: Vec<String>,
}

impl Dispatch {
    pub fn is_open(&self) -> bool {
        self.status_code == DispatchState::Open
    }

    pub fn kind(&self) -> IncidentKind {
        IncidentKind::from_type_code(&self.incident_type_code)
    }
}

/// A status entry reported for one responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponderStatus {
    pub name: String,
    pub status_code: String,
    pub created_at: String,
}

/// A person responding to a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responder {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub statuses: Vec<ResponderStatus>,
}

impl Responder {
    /// Most recent entry; upstream appends, so that is the last one.
    pub fn latest_status(&self) -> Option<&ResponderStatus> {
        self.statuses.last()
    }
}

/// The per-dispatch unit record carrying the call notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDispatch {
    pub id: u64,
    #[serde(default)]
    pub unit_codes: Vec<String>,
    #[serde(default)]
    pub call_notes: Option<String>,
    #[serde(default)]
    pub units: Vec<Responder>,
}

/// Everything the dashboard knows about one incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub dispatch: Dispatch,
    #[serde(default)]
    pub unit_dispatch: Option<UnitDispatch>,
}

impl Incident {
    pub fn id(&self) -> u64 {
        self.dispatch.id
    }

    pub fn call_notes(&self) -> Option<&str> {
        self.unit_dispatch
            .as_ref()
            .and_then(|ud| ud.call_notes.as_deref())
    }
}

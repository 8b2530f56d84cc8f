use serde::{Deserialize, Serialize};

const STATION_16_UNITS: &[&str] = &[
    "ES16", "A16", "B16", "CAR16", "CMD16", "MCU16", "M16", "RE16", "RP16", "SERV16", "ST16",
    "K16", "UT16", "W16", "FS16",
];

/// The viewing agency and the unit codes it owns.
///
/// Ownership only changes how a badge is emphasised, never how a status is
/// classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub agency: String,
    pub own_units: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            agency: "Station 16".to_string(),
            own_units: STATION_16_UNITS.iter().map(|u| u.to_string()).collect(),
        }
    }
}

impl Roster {
    pub fn new(agency: impl Into<String>, own_units: Vec<String>) -> Self {
        Self {
            agency: agency.into(),
            own_units,
        }
    }

    pub fn is_own_unit(&self, unit_code: &str) -> bool {
        let unit_code = unit_code.trim();
        self.own_units
            .iter()
            .any(|own| own.trim().eq_ignore_ascii_case(unit_code))
    }

    pub fn involves_own_unit<S: AsRef<str>>(&self, unit_codes: &[S]) -> bool {
        unit_codes.iter().any(|u| self.is_own_unit(u.as_ref()))
    }
}

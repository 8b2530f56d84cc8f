use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Broad incident family derived from the CAD incident type code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    Fire,
    Medical,
    Trauma,
    MutualAid,
    Service,
}

// Checked in order; anything unlisted is a service call.
const KIND_CODES: &[(IncidentKind, &[&str])] = &[
    (IncidentKind::Fire, &["FHOU", "FVEH", "FCOM", "FWILD", "FALM"]),
    (
        IncidentKind::Medical,
        &[
            "SICK", "ABD", "CHEST", "DIFF", "FALLS", "UNCON", "SEIZURE", "BLEED", "HEAD",
        ],
    ),
    (IncidentKind::Trauma, &["ACOD", "ASLTI", "MVA", "TRAUMA"]),
    (IncidentKind::MutualAid, &["MAFF", "MAOE"]),
];

impl IncidentKind {
    pub fn from_type_code(code: &str) -> Self {
        let code = code.trim();
        KIND_CODES
            .iter()
            .find(|(_, codes)| codes.iter().any(|c| c.eq_ignore_ascii_case(code)))
            .map(|(kind, _)| *kind)
            .unwrap_or(IncidentKind::Service)
    }

    pub fn class_name(self) -> &'static str {
        match self {
            IncidentKind::Fire => {
                "bg-red-100 dark:bg-red-900/20 text-red-800 dark:text-red-200 border-red-500"
            }
            IncidentKind::Medical => {
                "bg-blue-100 dark:bg-blue-900/20 text-blue-800 dark:text-blue-200 border-blue-500"
            }
            IncidentKind::Trauma => {
                "bg-orange-100 dark:bg-orange-900/20 text-orange-800 dark:text-orange-200 border-orange-500"
            }
            IncidentKind::MutualAid => {
                "bg-purple-100 dark:bg-purple-900/20 text-purple-800 dark:text-purple-200 border-purple-500"
            }
            IncidentKind::Service => {
                "bg-gray-100 dark:bg-gray-700 text-gray-800 dark:text-gray-200 border-gray-500"
            }
        }
    }
}

/// "1h 5m ago" / "12m ago" relative to `now`.
///
/// Returns `None` when `created_at` is not RFC 3339.
pub fn elapsed_label(created_at: &str, now: DateTime<Utc>) -> Option<String> {
    let created = DateTime::parse_from_rfc3339(created_at.trim()).ok()?;
    let elapsed = now.signed_duration_since(created.with_timezone(&Utc));
    let total_minutes = elapsed.num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    Some(if hours > 0 {
        format!("{hours}h {minutes}m ago")
    } else {
        format!("{minutes}m ago")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!(IncidentKind::from_type_code("FHOU"), IncidentKind::Fire);
        assert_eq!(IncidentKind::from_type_code("seizure"), IncidentKind::Medical);
        assert_eq!(IncidentKind::from_type_code(" MVA "), IncidentKind::Trauma);
        assert_eq!(IncidentKind::from_type_code("MAOE"), IncidentKind::MutualAid);
        assert_eq!(IncidentKind::from_type_code("LIFTASSIST"), IncidentKind::Service);
        assert_eq!(IncidentKind::from_type_code(""), IncidentKind::Service);
    }

    #[test]
    fn test_kind_colors() {
        assert!(IncidentKind::Fire.class_name().contains("border-red-500"));
        assert!(IncidentKind::Service.class_name().contains("bg-gray-100"));
        assert_eq!(IncidentKind::MutualAid.to_string(), "mutual_aid");
    }

    #[test]
    fn test_elapsed_label() {
        let now = DateTime::parse_from_rfc3339("2026-10-16T13:35:30Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            elapsed_label("2026-10-16T12:30:00Z", now).as_deref(),
            Some("1h 5m ago")
        );
        assert_eq!(
            elapsed_label("2026-10-16T09:23:00-04:00", now).as_deref(),
            Some("12m ago")
        );
        assert_eq!(
            elapsed_label("2026-10-16T14:00:00Z", now).as_deref(),
            Some("0m ago")
        );
        assert_eq!(elapsed_label("yesterday", now), None);
    }
}

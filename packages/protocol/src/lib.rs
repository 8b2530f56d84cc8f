//! Core library for firedash.
//!
//! - [`status`]: resolves each unit's current state from CAD call notes
//! - [`dispatch`]: upstream record types, own-agency roster, incident store

pub mod dispatch;
pub mod status;

pub use status::{
    classify_unit_status, classify_unit_status_with, latest_unit_status,
    parse_dispatch_comments, parse_dispatch_comments_with, StatusCategory, UnitStatus,
    UnitStatusResult,
};

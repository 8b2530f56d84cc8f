//! Upstream dispatch records and the dashboard state built around them.

pub mod board;
pub mod kind;
pub mod roster;
pub mod store;
pub mod types;

pub use board::{UnitBadge, UnitBoard};
pub use kind::{elapsed_label, IncidentKind};
pub use roster::Roster;
pub use store::DispatchStore;
pub use types::{
    Dispatch, DispatchState, Incident, Responder, ResponderStatus, UnitDispatch,
};

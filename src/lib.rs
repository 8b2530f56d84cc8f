//! firedash — unit status board for volunteer fire-department dispatches
//!
//! The status logic lives in [`protocol`] (the `firedash_protocol` package):
//! it reads the newest-first CAD call notes attached to a dispatch and
//! resolves each responding unit's current state. This crate adds the
//! command-line front end, configuration loading and logger setup.

#[doc(hidden)]
pub mod boot;
pub mod cli;

pub use firedash_protocol as protocol;

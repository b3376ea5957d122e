//! `pollgrade-recon`: gradebook/poll-export reconciliation engine.
//!
//! Pure engine crate: receives CSV content as strings, returns scored rows
//! plus an advisory mismatch report. No CLI or file IO dependencies.

pub mod engagement;
pub mod error;
pub mod model;
pub mod netid;
pub mod reconcile;
pub mod roster;

pub use engagement::load_engagement;
pub use error::MergeError;
pub use model::{Engagement, EngagementEntry, MergeResult, MismatchReport, Roster, RosterEntry};
pub use reconcile::reconcile;
pub use roster::load_roster;

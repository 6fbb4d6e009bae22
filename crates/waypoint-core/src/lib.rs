//! waypoint-core
//!
//! Pure domain types, seed data, slot key conventions and the read-side
//! view derivations. No I/O: this is the shared vocabulary of Waypoint.

pub mod error;
pub mod models;
pub mod progress;
pub mod seed;
pub mod slot_keys;
pub mod state;
pub mod validate;

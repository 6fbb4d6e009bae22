//! waypoint-tracker
//!
//! The goal tracking store: sole owner and mutator of tracker state.
//! Every mutation is followed by a save through the injected slot.

pub mod error;
pub mod events;
pub mod store;

pub use error::TrackerError;
pub use store::GoalStore;

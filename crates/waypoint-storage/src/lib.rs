//! waypoint-storage
//!
//! The durable slot behind the tracker. A slot holds one opaque snapshot;
//! `state` layers JSON on top of it.

pub mod error;
pub mod file;
pub mod memory;
pub mod slot;
pub mod state;

pub use file::FileSlot;
pub use memory::MemorySlot;
pub use slot::StateSlot;

//! # Types
//!
//! Platform-agnostic value types used throughout the crate.
//!
//! These types are deliberately plain: the host supplies them per call as
//! read-only snapshots, and nothing in this crate holds on to them between
//! queries.

pub mod address;
pub mod region;

// Re-export all public types
pub use address::Address;
pub use region::{MemoryRegion, RegionSnapshot};

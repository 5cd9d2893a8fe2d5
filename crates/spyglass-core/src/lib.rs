//! # spyglass-core
//!
//! Host-independent introspection helpers for debugger front-ends.
//!
//! This crate provides the pieces of a debugger enhancement layer that do
//! not require a live debugger attached:
//! - Memory region classification (code / stack / heap)
//! - Bounded, fault-tolerant C-string extraction from an injected byte source
//! - `/proc/<pid>/maps` snapshot parsing
//! - De Bruijn cyclic pattern generation and search
//! - Architecture register descriptions (GPR order, flag bitmasks)
//! - Terminal text styling with explicit color configuration
//!
//! ## Host collaborators
//!
//! Everything debugger-specific — register enumeration, frame walking,
//! variable evaluation, live memory access — is supplied by whatever embeds
//! this crate, through narrow capability seams:
//!
//! - [`memory::ByteSource`]: reads raw bytes from a virtual address space
//! - [`types::RegionSnapshot`]: a point-in-time view of the process memory map
//!
//! Both are plain data / plain traits, so the classifier and string reader
//! are testable without a debugger attached.
//!
//! ## Failure policy
//!
//! Classification and string reading never return errors and never panic:
//! missing region data classifies as "not code, not stack, not heap", and a
//! failed read yields an empty string. An interactive debugging session must
//! survive a flaky host.

pub mod arch;
pub mod classify;
pub mod error;
pub mod maps;
pub mod memory;
pub mod pattern;
pub mod prelude;
pub mod style;
pub mod types;

// Re-export commonly used items
pub use classify::{classify, Classification};
pub use error::{SpyglassError, SpyglassResult};
pub use memory::{read_c_string, ByteSource};
pub use types::{Address, MemoryRegion, RegionSnapshot};

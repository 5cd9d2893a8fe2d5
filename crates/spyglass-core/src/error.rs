//! # Error Types
//!
//! General error handling for spyglass-core.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Note that the classifier and the string reader never surface errors at
//! all — their failure paths collapse to benign defaults. The variants here
//! cover the fallible edges: parsing region snapshots and resolving target
//! architectures.

use thiserror::Error;

/// Main error type for spyglass-core operations
///
/// ## Error Categories
///
/// 1. **Snapshot errors**: MapsParse
/// 2. **Architecture errors**: UnknownArchitecture
/// 3. **I/O errors**: Io (for file operations, etc.)
#[derive(Error, Debug)]
pub enum SpyglassError
{
    /// A `/proc/<pid>/maps` snapshot line could not be parsed
    ///
    /// Carries the 1-based line number and a short description of what was
    /// wrong with the entry, so a truncated or corrupted snapshot file can
    /// be located quickly.
    #[error("malformed maps entry at line {line}: {reason}")]
    MapsParse
    {
        /// 1-based line number within the snapshot text
        line: usize,
        /// Description of the malformation
        reason: String,
    },

    /// The target triple names an architecture this crate has no
    /// register description for
    ///
    /// Supported architectures: `x86_64`, `aarch64`, `powerpc`.
    #[error("unknown target architecture: {0}")]
    UnknownArchitecture(String),

    /// I/O error (for file operations, etc.)
    ///
    /// Used when loading snapshot or dump files from disk. This is a
    /// standard Rust `std::io::Error` converted to our error type.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, SpyglassError>`
///
/// ```rust
/// use spyglass_core::error::SpyglassResult;
/// fn foo() -> SpyglassResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type SpyglassResult<T> = std::result::Result<T, SpyglassError>;

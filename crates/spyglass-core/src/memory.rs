//! # Safe String Reader
//!
//! Bounded, fault-tolerant C-string extraction over an injected byte source.
//!
//! The host supplies memory access through the [`ByteSource`] trait; this
//! module never touches process memory itself. Read failures of any kind —
//! including panics escaping a misbehaving host binding — collapse to an
//! empty string. An interactive debugging session must never be taken down
//! by a speculative dereference.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;
use tracing::debug;

use crate::types::Address;

/// Default byte limit for [`read_c_string_default`]
pub const DEFAULT_C_STRING_LIMIT: usize = 256;

/// Error returned by a [`ByteSource`] read
///
/// The variants mirror how hosts typically report read failures; callers of
/// [`read_c_string`] never see them, since every failure collapses to an
/// empty result there.
#[derive(Error, Debug)]
pub enum ReadError
{
    /// The address is not mapped in the target address space
    #[error("address {0} is not mapped")]
    Unmapped(Address),

    /// The region is mapped but not readable
    #[error("access denied reading {0}")]
    AccessDenied(Address),

    /// The host failed for a reason of its own
    ///
    /// Hosts report internal failures in their own vocabulary; the message
    /// is carried verbatim for logging and otherwise treated as opaque.
    #[error("host read failure: {0}")]
    Host(String),
}

/// Capability for reading raw bytes from a virtual address space
///
/// Implemented by whatever embeds this crate: a live debugger binding, a
/// core-dump reader, or an in-memory buffer in tests. Reads are fallible
/// per the host's own error model and may return fewer than `max_len` bytes
/// when the readable range ends early.
///
/// Implementations should be safe for concurrent read-only use if callers
/// intend to share them across threads; this crate adds no locking of its
/// own.
pub trait ByteSource
{
    /// Read up to `max_len` bytes starting at `address`
    fn read_bytes(&self, address: Address, max_len: usize) -> Result<Vec<u8>, ReadError>;
}

/// Byte source backed by an in-memory buffer
///
/// Maps `data` at `base`, with everything outside that range unmapped.
/// Useful for tests and for running the string reader over file-backed
/// memory dumps.
#[derive(Debug, Clone)]
pub struct SliceSource<'a>
{
    base: Address,
    data: &'a [u8],
}

impl<'a> SliceSource<'a>
{
    /// Map `data` at `base`
    pub fn new(base: Address, data: &'a [u8]) -> Self
    {
        Self { base, data }
    }
}

impl ByteSource for SliceSource<'_>
{
    fn read_bytes(&self, address: Address, max_len: usize) -> Result<Vec<u8>, ReadError>
    {
        let offset = address
            .value()
            .checked_sub(self.base.value())
            .ok_or(ReadError::Unmapped(address))?;
        let offset = usize::try_from(offset).map_err(|_| ReadError::Unmapped(address))?;
        if offset >= self.data.len() {
            return Err(ReadError::Unmapped(address));
        }
        let end = offset.saturating_add(max_len).min(self.data.len());
        Ok(self.data[offset..end].to_vec())
    }
}

/// Attempt to read a nul-terminated string from `address`
///
/// Reads up to `max_length` bytes through `source`, stopping at the first
/// nul byte (the terminator is not included in the result) or at
/// `max_length`, whichever comes first. Bytes are decoded as UTF-8 with
/// replacement of invalid sequences.
///
/// ## Failure policy
///
/// Returns `""` when the read fails for any reason: unmapped address,
/// access fault, host-internal error, or a panic escaping the host binding.
/// Some hosts have a known defect class that surfaces as a low-level fault
/// during reads; it is caught at this boundary and treated like any other
/// failed read. As a consequence, "could not read" and "read an empty
/// string" are indistinguishable to the caller.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::memory::{read_c_string, SliceSource};
/// use spyglass_core::types::Address;
///
/// let source = SliceSource::new(Address::from(0x1000), b"hello\0world");
/// assert_eq!(read_c_string(&source, Address::from(0x1000), 256), "hello");
/// assert_eq!(read_c_string(&source, Address::from(0x9000), 256), "");
/// ```
pub fn read_c_string<S>(source: &S, address: Address, max_length: usize) -> String
where
    S: ByteSource + ?Sized,
{
    let outcome = catch_unwind(AssertUnwindSafe(|| source.read_bytes(address, max_length)));

    let mut bytes = match outcome {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(error)) => {
            debug!(%address, %error, "string read failed");
            return String::new();
        }
        Err(_) => {
            debug!(%address, "host byte source panicked during string read");
            return String::new();
        }
    };

    bytes.truncate(max_length);
    if let Some(nul) = bytes.iter().position(|&byte| byte == 0) {
        bytes.truncate(nul);
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

/// [`read_c_string`] with the default 256-byte limit
pub fn read_c_string_default<S>(source: &S, address: Address) -> String
where
    S: ByteSource + ?Sized,
{
    read_c_string(source, address, DEFAULT_C_STRING_LIMIT)
}

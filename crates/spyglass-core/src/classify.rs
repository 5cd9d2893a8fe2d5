//! # Memory Classifier
//!
//! Classifies an address as code, stack, or heap using a host-supplied
//! region snapshot.
//!
//! All queries are pure functions of their inputs: no side effects, no
//! caching, no errors. When no region information is available the answer
//! is "no information" — every query returns `false` — rather than a
//! failure, so callers can always render something.

use crate::types::{Address, RegionSnapshot};

/// Region label the host uses for the process call stack
///
/// Matched case-sensitively and exactly: `"[stack2]"` is not the stack.
pub const STACK_LABEL: &str = "[stack]";

/// Region label the host uses for the default heap
///
/// Real processes can have additional heap-like regions (malloc arenas,
/// thread-local heaps) that carry other labels; those are not detected.
pub const HEAP_LABEL: &str = "[heap]";

/// Classification of an address against a region snapshot
///
/// The three flags are independent answers to "does the containing region
/// look like code / the stack / the heap". An address outside every region
/// classifies as none of the three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification
{
    /// The containing region permits instruction fetch
    pub is_code: bool,
    /// The containing region is labeled as the process stack
    pub is_stack: bool,
    /// The containing region is labeled as the default heap
    pub is_heap: bool,
}

impl Classification
{
    /// The "no information" classification: all flags false
    pub const NONE: Self = Classification {
        is_code: false,
        is_stack: false,
        is_heap: false,
    };

    /// Whether any flag is set
    pub fn any(self) -> bool
    {
        self.is_code || self.is_stack || self.is_heap
    }
}

/// Classify `address` against a region snapshot
///
/// Finds the first region containing `address` (see
/// [`RegionSnapshot::find_containing`]) and derives all three flags from it.
/// Passing `None` — the host had no region information — or a snapshot that
/// contains no matching region yields [`Classification::NONE`].
///
/// ## Example
///
/// ```rust
/// use spyglass_core::classify::classify;
/// use spyglass_core::types::{Address, MemoryRegion, RegionSnapshot};
///
/// let snapshot = RegionSnapshot::from_regions(vec![MemoryRegion::new(
///     Address::from(0x1000),
///     Address::from(0x2000),
///     "r-x".to_string(),
///     None,
/// )]);
///
/// let classification = classify(Address::from(0x1800), Some(&snapshot));
/// assert!(classification.is_code);
/// assert!(!classification.is_stack);
/// ```
pub fn classify(address: Address, regions: Option<&RegionSnapshot>) -> Classification
{
    let Some(snapshot) = regions else {
        return Classification::NONE;
    };

    match snapshot.find_containing(address) {
        Some(region) => Classification {
            is_code: region.is_executable(),
            is_stack: region.name.as_deref() == Some(STACK_LABEL),
            is_heap: region.name.as_deref() == Some(HEAP_LABEL),
        },
        None => Classification::NONE,
    }
}

/// Whether `address` points into an executable region
pub fn is_code(address: Address, regions: Option<&RegionSnapshot>) -> bool
{
    classify(address, regions).is_code
}

/// Whether `address` points into the process stack region
pub fn is_stack(address: Address, regions: Option<&RegionSnapshot>) -> bool
{
    classify(address, regions).is_stack
}

/// Whether `address` points into the default heap region
pub fn is_heap(address: Address, regions: Option<&RegionSnapshot>) -> bool
{
    classify(address, regions).is_heap
}

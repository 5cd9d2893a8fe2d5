//! Memory region and region snapshot types.

use std::fmt;

use super::Address;

/// Memory region in a process
///
/// Represents a contiguous region of the target process's virtual address
/// space with uniform protection and label metadata, such as the stack, heap,
/// or a mapped executable segment.
///
/// Regions are read-only snapshots supplied by the host; this crate never
/// mutates them or caches them beyond a single query.
///
/// ## Examples
///
/// ```
/// use spyglass_core::types::{Address, MemoryRegion};
///
/// // A readable and executable code segment
/// let code_segment = MemoryRegion::new(
///     Address::from(0x1000),
///     Address::from(0x2000),
///     "r-x".to_string(),
///     Some("/usr/bin/example".to_string()),
/// );
///
/// // A readable and writable heap region
/// let heap = MemoryRegion::new(
///     Address::from(0x2000),
///     Address::from(0x3000),
///     "rw-".to_string(),
///     Some("[heap]".to_string()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion
{
    /// Start address of the memory region (inclusive)
    pub start: Address,

    /// End address of the memory region (EXCLUSIVE)
    ///
    /// The region covers addresses from `start` (inclusive) to `end`
    /// (exclusive); its size is `end - start`. A region where
    /// `end <= start` is degenerate: it has size 0 and contains nothing.
    pub end: Address,

    /// Memory permissions as a string
    ///
    /// Contains characters indicating allowed operations:
    /// - `r`: Read permission
    /// - `w`: Write permission
    /// - `x`: Execute permission
    ///
    /// Examples: `"rwx"`, `"r-x"`, `"rw-"`, `"r--"`.
    pub permissions: String,

    /// Optional name/label of the region
    ///
    /// On Linux this is the trailing field of a maps entry: `"[heap]"`,
    /// `"[stack]"`, or a file path like `"/usr/bin/example"`. Hosts that
    /// don't label regions supply `None`.
    pub name: Option<String>,
}

impl MemoryRegion
{
    /// Create a new memory region
    pub fn new(start: Address, end: Address, permissions: String, name: Option<String>) -> Self
    {
        Self {
            start,
            end,
            permissions,
            name,
        }
    }

    /// Size of the region in bytes
    ///
    /// Returns 0 for degenerate regions where `end <= start`.
    pub fn size(&self) -> u64
    {
        self.end.value().saturating_sub(self.start.value())
    }

    /// Whether `address` falls inside this region (half-open containment)
    pub fn contains(&self, address: Address) -> bool
    {
        self.start <= address && address < self.end
    }

    /// Whether the region permits reads
    pub fn is_readable(&self) -> bool
    {
        self.permissions.contains('r')
    }

    /// Whether the region permits writes
    pub fn is_writable(&self) -> bool
    {
        self.permissions.contains('w')
    }

    /// Whether the region permits instruction fetch
    pub fn is_executable(&self) -> bool
    {
        self.permissions.contains('x')
    }
}

impl fmt::Display for MemoryRegion
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}-{} {}", self.start, self.end, self.permissions)?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}

/// Ordered collection of memory regions, queried by address containment
///
/// A `RegionSnapshot` is a point-in-time view of a process memory map,
/// supplied by the host per query. No overlap invariant is enforced — the
/// host is trusted to supply non-overlapping regions.
///
/// ## Lookup policy
///
/// [`RegionSnapshot::find_containing`] returns the FIRST region in snapshot
/// order whose bounds contain the address. With well-formed (non-overlapping)
/// snapshots this is the unique containing region; with overlapping ones the
/// result is deterministic but order-dependent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSnapshot
{
    regions: Vec<MemoryRegion>,
}

impl RegionSnapshot
{
    /// Create an empty snapshot
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Create a snapshot from host-supplied regions, preserving their order
    pub fn from_regions(regions: Vec<MemoryRegion>) -> Self
    {
        Self { regions }
    }

    /// Number of regions in the snapshot
    pub fn len(&self) -> usize
    {
        self.regions.len()
    }

    /// Whether the snapshot holds no regions
    pub fn is_empty(&self) -> bool
    {
        self.regions.is_empty()
    }

    /// Iterate over the regions in snapshot order
    pub fn iter(&self) -> std::slice::Iter<'_, MemoryRegion>
    {
        self.regions.iter()
    }

    /// Find the first region containing `address`, if any
    ///
    /// Linear scan in snapshot order; returns `None` when no region
    /// contains the address.
    pub fn find_containing(&self, address: Address) -> Option<&MemoryRegion>
    {
        self.regions.iter().find(|region| region.contains(address))
    }
}

impl FromIterator<MemoryRegion> for RegionSnapshot
{
    fn from_iter<I: IntoIterator<Item = MemoryRegion>>(iter: I) -> Self
    {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RegionSnapshot
{
    type Item = &'a MemoryRegion;
    type IntoIter = std::slice::Iter<'a, MemoryRegion>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.regions.iter()
    }
}

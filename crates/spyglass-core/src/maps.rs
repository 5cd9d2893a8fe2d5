//! # Maps Snapshot Parser
//!
//! Parses Linux `/proc/<pid>/maps` text into a [`RegionSnapshot`].
//!
//! This is the one concrete region-enumeration binding shipped with the
//! crate; it lets the classifier run against a saved snapshot with no
//! debugger attached. Hosts with their own region APIs build
//! [`RegionSnapshot`] values directly instead.
//!
//! A maps entry looks like:
//!
//! ```text
//! 7ffd1a2b3000-7ffd1a2d4000 rw-p 00000000 00:00 0    [stack]
//! ```
//!
//! The first field is the half-open address range, the second the
//! permission flags (the trailing `p`/`s` sharing flag is dropped), and the
//! optional trailing field becomes the region name.

use tracing::trace;

use crate::error::{SpyglassError, SpyglassResult};
use crate::types::{Address, MemoryRegion, RegionSnapshot};

/// Parse `/proc/<pid>/maps` text into a region snapshot
///
/// Blank lines are skipped; any other malformed line fails the whole parse
/// with [`SpyglassError::MapsParse`] carrying its 1-based line number.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::maps::parse_maps;
///
/// let snapshot = parse_maps(
///     "00400000-00452000 r-xp 00000000 08:02 173521 /usr/bin/dbus-daemon\n\
///      035b1000-035d2000 rw-p 00000000 00:00 0      [heap]\n",
/// )?;
/// assert_eq!(snapshot.len(), 2);
/// # Ok::<(), spyglass_core::SpyglassError>(())
/// ```
pub fn parse_maps(text: &str) -> SpyglassResult<RegionSnapshot>
{
    let mut regions = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        regions.push(parse_line(line, line_number)?);
    }

    trace!(regions = regions.len(), "parsed maps snapshot");
    Ok(RegionSnapshot::from_regions(regions))
}

fn parse_line(line: &str, line_number: usize) -> SpyglassResult<MemoryRegion>
{
    let malformed = |reason: &str| SpyglassError::MapsParse {
        line: line_number,
        reason: reason.to_string(),
    };

    let mut fields = line.split_whitespace();

    let range = fields.next().ok_or_else(|| malformed("missing address range"))?;
    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| malformed("address range is not START-END"))?;
    let start = parse_hex(start).ok_or_else(|| malformed("invalid start address"))?;
    let end = parse_hex(end).ok_or_else(|| malformed("invalid end address"))?;
    if end < start {
        return Err(malformed("end address precedes start address"));
    }

    let perms = fields.next().ok_or_else(|| malformed("missing permissions"))?;
    if perms.len() < 3 {
        return Err(malformed("permissions field too short"));
    }
    // Keep the rwx columns, drop the private/shared flag
    let permissions: String = perms.chars().take(3).collect();

    // offset, device, inode
    for field in ["offset", "device", "inode"] {
        if fields.next().is_none() {
            return Err(SpyglassError::MapsParse {
                line: line_number,
                reason: format!("missing {field} field"),
            });
        }
    }

    // Anything left is the pathname/label, possibly containing spaces
    let name = {
        let rest: Vec<&str> = fields.collect();
        if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        }
    };

    Ok(MemoryRegion::new(Address::from(start), Address::from(end), permissions, name))
}

fn parse_hex(text: &str) -> Option<u64>
{
    u64::from_str_radix(text, 16).ok()
}

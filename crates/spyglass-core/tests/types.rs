//! Tests for platform-agnostic types

use spyglass_core::types::{Address, MemoryRegion, RegionSnapshot};

#[test]
fn test_address_from_u64()
{
    let addr = Address::from(0x1000);
    assert_eq!(addr.value(), 0x1000);
}

#[test]
fn test_address_display()
{
    let addr = Address::from(0x7fff_dead_beef);
    assert_eq!(format!("{addr}"), "0x00007fffdeadbeef");
}

#[test]
fn test_address_checked_arithmetic()
{
    let addr = Address::from(0x1000);
    assert_eq!(addr.checked_add(0x100), Some(Address::from(0x1100)));
    assert_eq!(addr.checked_add(u64::MAX), None);
    assert_eq!(addr.checked_sub(0x100), Some(Address::from(0xf00)));
    assert_eq!(addr.checked_sub(u64::MAX), None);
}

#[test]
fn test_memory_region_new()
{
    let region = MemoryRegion::new(
        Address::from(0x1000),
        Address::from(0x2000),
        "rwx".to_string(),
        Some("[heap]".to_string()),
    );

    assert_eq!(region.start, Address::from(0x1000));
    assert_eq!(region.end, Address::from(0x2000));
    assert_eq!(region.permissions, "rwx");
    assert_eq!(region.name, Some("[heap]".to_string()));
}

#[test]
fn test_memory_region_size()
{
    let region = MemoryRegion::new(Address::from(0x1000), Address::from(0x2000), "rwx".to_string(), None);
    assert_eq!(region.size(), 0x1000);
}

#[test]
fn test_memory_region_size_zero()
{
    // Degenerate region: end <= start has size 0
    let region = MemoryRegion::new(Address::from(0x2000), Address::from(0x1000), "rwx".to_string(), None);
    assert_eq!(region.size(), 0);

    let same_region = MemoryRegion::new(Address::from(0x1000), Address::from(0x1000), "rwx".to_string(), None);
    assert_eq!(same_region.size(), 0);
}

#[test]
fn test_memory_region_contains_half_open()
{
    let region = MemoryRegion::new(Address::from(0x1000), Address::from(0x2000), "r--".to_string(), None);

    assert!(region.contains(Address::from(0x1000))); // start inclusive
    assert!(region.contains(Address::from(0x1fff)));
    assert!(!region.contains(Address::from(0x2000))); // end exclusive
    assert!(!region.contains(Address::from(0xfff)));
}

#[test]
fn test_memory_region_degenerate_contains_nothing()
{
    let region = MemoryRegion::new(Address::from(0x2000), Address::from(0x1000), "rwx".to_string(), None);
    assert!(!region.contains(Address::from(0x1800)));
    assert!(!region.contains(Address::from(0x2000)));
}

#[test]
fn test_memory_region_permissions_combinations()
{
    let code = MemoryRegion::new(Address::from(0x1000), Address::from(0x2000), "r-x".to_string(), None);
    assert!(code.is_readable());
    assert!(!code.is_writable());
    assert!(code.is_executable());

    let data = MemoryRegion::new(Address::from(0x2000), Address::from(0x3000), "rw-".to_string(), None);
    assert!(data.is_readable());
    assert!(data.is_writable());
    assert!(!data.is_executable());

    let ro_data = MemoryRegion::new(Address::from(0x3000), Address::from(0x4000), "r--".to_string(), None);
    assert!(ro_data.is_readable());
    assert!(!ro_data.is_writable());
    assert!(!ro_data.is_executable());
}

#[test]
fn test_region_snapshot_find_containing()
{
    let snapshot = RegionSnapshot::from_regions(vec![
        MemoryRegion::new(Address::from(0x1000), Address::from(0x2000), "r-x".to_string(), None),
        MemoryRegion::new(
            Address::from(0x2000),
            Address::from(0x3000),
            "rw-".to_string(),
            Some("[heap]".to_string()),
        ),
    ]);

    let region = snapshot.find_containing(Address::from(0x2800)).unwrap();
    assert_eq!(region.name.as_deref(), Some("[heap]"));

    assert!(snapshot.find_containing(Address::from(0x4000)).is_none());
}

#[test]
fn test_region_snapshot_first_match_wins_on_overlap()
{
    // Overlapping regions are not rejected; lookup is deterministic
    // first-match in snapshot order
    let snapshot = RegionSnapshot::from_regions(vec![
        MemoryRegion::new(
            Address::from(0x1000),
            Address::from(0x3000),
            "r--".to_string(),
            Some("first".to_string()),
        ),
        MemoryRegion::new(
            Address::from(0x2000),
            Address::from(0x4000),
            "rwx".to_string(),
            Some("second".to_string()),
        ),
    ]);

    let region = snapshot.find_containing(Address::from(0x2800)).unwrap();
    assert_eq!(region.name.as_deref(), Some("first"));
}

#[test]
fn test_region_snapshot_empty()
{
    let snapshot = RegionSnapshot::new();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.len(), 0);
    assert!(snapshot.find_containing(Address::ZERO).is_none());
}

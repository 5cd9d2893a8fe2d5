//! Tests for the maps snapshot parser

use spyglass_core::classify::classify;
use spyglass_core::maps::parse_maps;
use spyglass_core::types::Address;
use spyglass_core::SpyglassError;

const SAMPLE: &str = "\
00400000-00452000 r-xp 00000000 08:02 173521 /usr/bin/dbus-daemon
00651000-00652000 rw-p 00051000 08:02 173521 /usr/bin/dbus-daemon
035b1000-035d2000 rw-p 00000000 00:00 0      [heap]
7ffd1a2b3000-7ffd1a2d4000 rw-p 00000000 00:00 0 [stack]
7ffd1a3c9000-7ffd1a3cb000 r-xp 00000000 00:00 0 [vdso]
ffffffffff600000-ffffffffff601000 --xp 00000000 00:00 0
";

#[test]
fn test_parse_sample_snapshot()
{
    let snapshot = parse_maps(SAMPLE).unwrap();
    assert_eq!(snapshot.len(), 6);

    let text = snapshot.iter().next().unwrap();
    assert_eq!(text.start, Address::from(0x0040_0000));
    assert_eq!(text.end, Address::from(0x0045_2000));
    assert_eq!(text.permissions, "r-x");
    assert_eq!(text.name.as_deref(), Some("/usr/bin/dbus-daemon"));
}

#[test]
fn test_parsed_snapshot_classifies()
{
    let snapshot = parse_maps(SAMPLE).unwrap();

    let code = classify(Address::from(0x0040_1234), Some(&snapshot));
    assert!(code.is_code);
    assert!(!code.is_heap);

    let heap = classify(Address::from(0x035b_2000), Some(&snapshot));
    assert!(heap.is_heap);
    assert!(!heap.is_code);

    let stack = classify(Address::from(0x7ffd_1a2b_4000), Some(&snapshot));
    assert!(stack.is_stack);
}

#[test]
fn test_parse_anonymous_mapping_has_no_name()
{
    let snapshot = parse_maps("ffffffffff600000-ffffffffff601000 --xp 00000000 00:00 0\n").unwrap();
    let region = snapshot.iter().next().unwrap();
    assert_eq!(region.name, None);
    assert!(region.is_executable());
    assert!(!region.is_readable());
}

#[test]
fn test_parse_name_with_spaces()
{
    let snapshot =
        parse_maps("00400000-00452000 r-xp 00000000 08:02 1 /opt/My App/bin/tool\n").unwrap();
    let region = snapshot.iter().next().unwrap();
    assert_eq!(region.name.as_deref(), Some("/opt/My App/bin/tool"));
}

#[test]
fn test_parse_skips_blank_lines()
{
    let snapshot = parse_maps("\n035b1000-035d2000 rw-p 00000000 00:00 0 [heap]\n\n").unwrap();
    assert_eq!(snapshot.len(), 1);
}

#[test]
fn test_parse_empty_input_is_empty_snapshot()
{
    let snapshot = parse_maps("").unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn test_parse_malformed_range_reports_line_number()
{
    let result = parse_maps(
        "00400000-00452000 r-xp 00000000 08:02 1 /usr/bin/tool\nnot-hex-zz r-xp 00000000 00:00 0\n",
    );

    match result {
        Err(SpyglassError::MapsParse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MapsParse error, got {other:?}"),
    }
}

#[test]
fn test_parse_missing_fields_is_error()
{
    assert!(parse_maps("00400000-00452000 r-xp\n").is_err());
    assert!(parse_maps("00400000-00452000\n").is_err());
}

#[test]
fn test_parse_backwards_range_is_error()
{
    let result = parse_maps("00452000-00400000 r-xp 00000000 08:02 1\n");
    assert!(matches!(result, Err(SpyglassError::MapsParse { line: 1, .. })));
}

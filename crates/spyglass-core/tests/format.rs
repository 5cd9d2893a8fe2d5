//! Tests for styling helpers and architecture descriptions

use spyglass_core::arch::Arch;
use spyglass_core::classify::Classification;
use spyglass_core::style::{
    classification_color, format_arguments, format_flags, format_message, paint, strip_ansi, trim_instruction,
    Color, ColorMode, MessageKind,
};
use spyglass_core::SpyglassError;

#[test]
fn test_paint_always_wraps_in_escapes()
{
    let painted = paint("0x1000", Color::Red, ColorMode::Always);
    assert!(painted.starts_with("\x1b[31m"));
    assert!(painted.ends_with("\x1b[0m"));
    assert!(painted.contains("0x1000"));
}

#[test]
fn test_paint_never_is_plain()
{
    assert_eq!(paint("0x1000", Color::Red, ColorMode::Never), "0x1000");
}

#[test]
fn test_strip_ansi_round_trip()
{
    for color in [
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Red,
        Color::Pink,
        Color::Cyan,
        Color::Grey,
    ] {
        let painted = paint("text", color, ColorMode::Always);
        assert_eq!(strip_ansi(&painted), "text");
    }
}

#[test]
fn test_strip_ansi_handles_cursor_sequences()
{
    assert_eq!(strip_ansi("\x1b[0;0Hhome\x1b[J"), "home");
    assert_eq!(strip_ansi("plain"), "plain");
}

#[test]
fn test_classification_color_mapping()
{
    let code = Classification {
        is_code: true,
        is_stack: false,
        is_heap: false,
    };
    assert_eq!(classification_color(code), Some(Color::Red));

    let stack = Classification {
        is_code: false,
        is_stack: true,
        is_heap: false,
    };
    assert_eq!(classification_color(stack), Some(Color::Pink));

    let heap = Classification {
        is_code: false,
        is_stack: false,
        is_heap: true,
    };
    assert_eq!(classification_color(heap), Some(Color::Green));

    assert_eq!(classification_color(Classification::NONE), None);
}

#[test]
fn test_classification_color_code_takes_precedence()
{
    let executable_stack = Classification {
        is_code: true,
        is_stack: true,
        is_heap: false,
    };
    assert_eq!(classification_color(executable_stack), Some(Color::Red));
}

#[test]
fn test_format_message_prefix()
{
    let message = format_message(MessageKind::Info, "attached", ColorMode::Never);
    assert_eq!(message, "[+] attached");

    let colored = format_message(MessageKind::Error, "failed", ColorMode::Always);
    assert!(colored.contains("\x1b[31m"));
    assert_eq!(strip_ansi(&colored), "[+] failed");
}

#[test]
fn test_trim_instruction()
{
    assert_eq!(
        trim_instruction("example`main: 0x100003f60 <+0>: push rbp"),
        "0x100003f60 <+0>: push rbp",
    );
    assert_eq!(trim_instruction("no address here"), "no address here");
    assert_eq!(trim_instruction(""), "");
}

#[test]
fn test_format_arguments()
{
    let rendered = format_arguments(
        &[("argc", Some(2)), ("argv", Some(0x7ffd_0000)), ("envp", None)],
        Color::Pink,
        ColorMode::Never,
    );
    assert_eq!(rendered, "(argc=0x2 argv=0x7ffd0000 envp=null)");
}

#[test]
fn test_format_arguments_empty()
{
    assert_eq!(format_arguments(&[], Color::Pink, ColorMode::Never), "()");
}

#[test]
fn test_arch_from_triple()
{
    assert_eq!(Arch::from_triple("x86_64-unknown-linux-gnu").unwrap(), Arch::X86_64);
    assert_eq!(Arch::from_triple("aarch64-apple-darwin").unwrap(), Arch::Aarch64);
    assert_eq!(Arch::from_triple("arm64").unwrap(), Arch::Aarch64);
    assert_eq!(Arch::from_triple("powerpc-unknown-linux-gnu").unwrap(), Arch::Ppc);

    match Arch::from_triple("riscv64gc-unknown-linux-gnu") {
        Err(SpyglassError::UnknownArchitecture(name)) => assert_eq!(name, "riscv64gc"),
        other => panic!("expected UnknownArchitecture, got {other:?}"),
    }
}

#[test]
fn test_arch_descriptions()
{
    assert_eq!(Arch::X86_64.bits(), 64);
    assert_eq!(Arch::Ppc.bits(), 32);
    assert_eq!(Arch::X86_64.pointer_width(), 8);
    assert_eq!(Arch::Ppc.pointer_width(), 4);

    assert!(Arch::X86_64.gpr_registers().contains(&"rip"));
    assert!(Arch::Aarch64.gpr_registers().contains(&"sp"));
    assert_eq!(Arch::Aarch64.gpr_key(), "general");
}

#[test]
fn test_x86_64_flag_decode()
{
    let rflags = Arch::X86_64.flag_registers()[0];
    assert_eq!(rflags.name, "rflags");

    // ZF and CF set, everything else clear
    let decoded = rflags.decode(0x41);
    let set: Vec<&str> = decoded.iter().filter(|(_, set)| *set).map(|&(name, _)| name).collect();
    assert_eq!(set, vec!["zero", "carry"]);
}

#[test]
fn test_aarch64_multi_bit_mask()
{
    let cpsr = Arch::Aarch64.flag_registers()[0];
    // Any bit inside the "ge" mask counts as set
    let decoded = cpsr.decode(0x1_0000);
    assert!(decoded.iter().any(|&(name, set)| name == "ge" && set));
}

#[test]
fn test_format_flags_case_rendering()
{
    let rflags = Arch::X86_64.flag_registers()[0];
    let rendered = format_flags(&rflags, 0x40);
    assert!(rendered.starts_with("rflags: ["));
    assert!(rendered.contains("ZERO"));
    assert!(rendered.contains("carry"));
    assert!(!rendered.contains("CARRY"));
}

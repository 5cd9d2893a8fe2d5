//! # Terminal Text Styling
//!
//! ANSI palette, glyphs, and line formatting for debugger output.
//!
//! Color use is controlled by an explicit [`ColorMode`] value threaded
//! through every call — there is no process-wide color flag. Hosts that
//! cannot render ANSI pass [`ColorMode::Never`] (or post-process with
//! [`strip_ansi`]) and get plain text.
//!
//! Full terminal control (cursor movement, screen clearing, width queries)
//! stays with the host; these helpers only build strings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::arch::FlagRegister;
use crate::classify::Classification;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Terminal colors used across debugger output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color
{
    Blue,
    Green,
    Yellow,
    Red,
    Pink,
    Cyan,
    Grey,
}

impl Color
{
    /// ANSI escape sequence for this color
    pub fn code(self) -> &'static str
    {
        match self {
            Color::Blue => "\x1b[34m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Red => "\x1b[31m",
            Color::Pink => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::Grey => "\x1b[1;38;5;240m",
        }
    }
}

/// Whether styling helpers emit ANSI color sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode
{
    /// Emit color sequences
    #[default]
    Always,
    /// Emit plain text
    Never,
}

/// Output glyphs
pub mod glyphs
{
    pub const LEFT_ARROW: &str = " ← ";
    pub const RIGHT_ARROW: &str = " → ";
    pub const DOWN_ARROW: &str = "↳";
    pub const HORIZONTAL_LINE: &str = "─";
    pub const VERTICAL_LINE: &str = "│";
    pub const CROSS: &str = "✘ ";
    pub const TICK: &str = "✓ ";
    pub const BREAKPOINT: &str = "●";
}

/// Message severity for [`format_message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind
{
    Info,
    Success,
    Error,
}

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("ANSI escape regex is valid"));

/// Remove all ANSI control sequences from `text`
///
/// ## Example
///
/// ```rust
/// use spyglass_core::style::{paint, strip_ansi, Color, ColorMode};
///
/// let colored = paint("0x1000", Color::Red, ColorMode::Always);
/// assert_eq!(strip_ansi(&colored), "0x1000");
/// ```
pub fn strip_ansi(text: &str) -> String
{
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Wrap `text` in color sequences, or pass it through per `mode`
pub fn paint(text: &str, color: Color, mode: ColorMode) -> String
{
    match mode {
        ColorMode::Always => format!("{}{text}{RESET}", color.code()),
        ColorMode::Never => text.to_string(),
    }
}

/// Color conventionally used for a classification
///
/// Code renders red, stack pink, heap green; an unclassified address gets
/// no color. When several flags are set, code takes precedence over stack,
/// stack over heap.
pub fn classification_color(classification: Classification) -> Option<Color>
{
    if classification.is_code {
        Some(Color::Red)
    } else if classification.is_stack {
        Some(Color::Pink)
    } else if classification.is_heap {
        Some(Color::Green)
    } else {
        None
    }
}

/// Format a `[+]`-prefixed status message
pub fn format_message(kind: MessageKind, message: &str, mode: ColorMode) -> String
{
    let color = match kind {
        MessageKind::Info => Color::Blue,
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
    };
    format!("{} {message}", paint("[+]", color, mode))
}

/// Trim a host disassembly line down to its address-first form
///
/// Hosts prefix disassembly with module/function decoration; everything
/// before the first `0x` is dropped. Lines without `0x` pass through
/// unchanged.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::style::trim_instruction;
///
/// assert_eq!(
///     trim_instruction("example`main: 0x100003f60 <+0>: push rbp"),
///     "0x100003f60 <+0>: push rbp",
/// );
/// ```
pub fn trim_instruction(line: &str) -> &str
{
    match line.find("0x") {
        Some(index) => &line[index..],
        None => line,
    }
}

/// Format frame-argument name/value pairs as `(name=value ...)`
///
/// Values are rendered in hex; an absent value renders as `null`. Argument
/// names take `name_color`.
pub fn format_arguments(arguments: &[(&str, Option<u64>)], name_color: Color, mode: ColorMode) -> String
{
    let rendered: Vec<String> = arguments
        .iter()
        .map(|&(name, value)| {
            let value = match value {
                Some(value) => format!("{value:#x}"),
                None => "null".to_string(),
            };
            format!("{}={value}", paint(name, name_color, mode))
        })
        .collect();
    format!("({})", rendered.join(" "))
}

/// Render a flag register's contents as `name: [z C ...]`
///
/// Set flags are uppercased, cleared flags stay lowercase, matching the
/// register pane convention.
pub fn format_flags(register: &FlagRegister, value: u64) -> String
{
    let flags: Vec<String> = register
        .decode(value)
        .into_iter()
        .map(|(name, set)| if set { name.to_uppercase() } else { name.to_string() })
        .collect();
    format!("{}: [{}]", register.name, flags.join(" "))
}

//! # Architecture Descriptions
//!
//! Static register descriptions for the architectures the presentation
//! layer knows how to render: display order of the general-purpose
//! registers, the host's register-class key, and flag registers with named
//! bitmasks.
//!
//! These are descriptions, not live state — reading register values stays
//! with the host.

use crate::error::{SpyglassError, SpyglassResult};

/// A flag register and its named bitmasks
///
/// A mask may cover more than one bit (e.g. aarch64 `ge`, `m`); the flag
/// counts as set when any covered bit is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagRegister
{
    /// Register name as the host reports it
    pub name: &'static str,
    /// `(flag name, bitmask)` pairs in display order
    pub bit_masks: &'static [(&'static str, u64)],
}

impl FlagRegister
{
    /// Decode a raw register value into `(flag name, set)` pairs
    pub fn decode(&self, value: u64) -> Vec<(&'static str, bool)>
    {
        self.bit_masks
            .iter()
            .map(|&(name, mask)| (name, value & mask != 0))
            .collect()
    }
}

// rflags and eflags bit masks are identical for the lower 32 bits; which
// name the host exposes varies by platform, so both are listed.
const X86_64_FLAG_MASKS: &[(&str, u64)] = &[
    ("zero", 0x40),
    ("carry", 0x1),
    ("parity", 0x4),
    ("adjust", 0x10),
    ("sign", 0x80),
    ("trap", 0x100),
    ("interrupt", 0x200),
    ("direction", 0x400),
    ("overflow", 0x800),
    ("resume", 0x10000),
    ("virtualx86", 0x20000),
    ("identification", 0x200000),
];

const AARCH64_CPSR_MASKS: &[(&str, u64)] = &[
    ("n", 0x8000_0000),
    ("z", 0x4000_0000),
    ("c", 0x2000_0000),
    ("v", 0x1000_0000),
    ("q", 0x800_0000),
    ("ssbs", 0x80_0000),
    ("pan", 0x40_0000),
    ("dit", 0x20_0000),
    ("ge", 0xf_0000),
    ("e", 0x200),
    ("a", 0x100),
    ("i", 0x80),
    ("f", 0x40),
    ("m", 0xf),
];

const PPC_CR_MASKS: &[(&str, u64)] = &[
    ("cr0_lt", 0x8000_0000),
    ("cr0_gt", 0x4000_0000),
    ("cr0_eq", 0x2000_0000),
    ("cr0_so", 0x1000_0000),
];

const PPC_XER_MASKS: &[(&str, u64)] = &[
    ("summary_overflow", 0x8000_0000),
    ("overflow", 0x4000_0000),
    ("carry", 0x2000_0000),
];

const X86_64_GPRS: &[&str] = &[
    "rax", "rbx", "rcx", "rdx", "rsp", "rbp", "rsi", "rdi", "rip", "r8", "r9", "r10", "r11", "r12", "r13", "r14",
    "r15",
];

const AARCH64_GPRS: &[&str] = &[
    "x0", "x1", "x2", "x3", "x4", "x5", "x6", "x7", "x8", "x9", "x10", "x11", "x12", "x13", "x14", "x15", "x16",
    "x17", "x18", "x19", "x20", "x21", "x22", "x23", "x24", "x25", "x26", "x27", "x28", "x29", "x30", "sp", "pc",
];

const PPC_GPRS: &[&str] = &[
    "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13", "pc", "msr", "lr",
    "ctr",
];

/// Architecture of a debug target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch
{
    /// 64-bit x86
    X86_64,
    /// 64-bit ARM
    Aarch64,
    /// 32-bit PowerPC
    Ppc,
}

impl Arch
{
    /// Resolve an architecture from a target triple
    ///
    /// Only the leading component of the triple is examined, e.g.
    /// `"x86_64-unknown-linux-gnu"` resolves to [`Arch::X86_64`].
    ///
    /// ## Errors
    ///
    /// Returns [`SpyglassError::UnknownArchitecture`] for triples naming an
    /// architecture without a register description here.
    pub fn from_triple(triple: &str) -> SpyglassResult<Self>
    {
        let arch = triple.split('-').next().unwrap_or(triple);
        match arch {
            "x86_64" => Ok(Arch::X86_64),
            "aarch64" | "arm64" => Ok(Arch::Aarch64),
            "powerpc" | "ppc" => Ok(Arch::Ppc),
            other => Err(SpyglassError::UnknownArchitecture(other.to_string())),
        }
    }

    /// Register bit width
    pub fn bits(self) -> u32
    {
        match self {
            Arch::X86_64 | Arch::Aarch64 => 64,
            Arch::Ppc => 32,
        }
    }

    /// Pointer width in bytes
    ///
    /// Also the natural cycle length for cyclic patterns on this target.
    pub fn pointer_width(self) -> usize
    {
        (self.bits() / 8) as usize
    }

    /// General-purpose registers in display order
    pub fn gpr_registers(self) -> &'static [&'static str]
    {
        match self {
            Arch::X86_64 => X86_64_GPRS,
            Arch::Aarch64 => AARCH64_GPRS,
            Arch::Ppc => PPC_GPRS,
        }
    }

    /// Key identifying the general-purpose register class in the host's
    /// register listing
    pub fn gpr_key(self) -> &'static str
    {
        match self {
            Arch::X86_64 | Arch::Ppc => "general purpose",
            Arch::Aarch64 => "general",
        }
    }

    /// Flag registers with their named bitmasks
    pub fn flag_registers(self) -> &'static [FlagRegister]
    {
        match self {
            Arch::X86_64 => &[
                FlagRegister {
                    name: "rflags",
                    bit_masks: X86_64_FLAG_MASKS,
                },
                FlagRegister {
                    name: "eflags",
                    bit_masks: X86_64_FLAG_MASKS,
                },
            ],
            Arch::Aarch64 => &[FlagRegister {
                name: "cpsr",
                bit_masks: AARCH64_CPSR_MASKS,
            }],
            Arch::Ppc => &[
                FlagRegister {
                    name: "cr",
                    bit_masks: PPC_CR_MASKS,
                },
                FlagRegister {
                    name: "xer",
                    bit_masks: PPC_XER_MASKS,
                },
            ],
        }
    }
}

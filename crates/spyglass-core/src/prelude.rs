//! Common module for library exports

pub use crate::arch::{Arch, FlagRegister};
pub use crate::classify::{classify, is_code, is_heap, is_stack, Classification};
pub use crate::error::{SpyglassError, SpyglassResult};
pub use crate::maps::parse_maps;
pub use crate::memory::{read_c_string, read_c_string_default, ByteSource, ReadError, SliceSource};
pub use crate::pattern::{cyclic_find, cyclic_pattern};
pub use crate::style::{Color, ColorMode};
pub use crate::types::{Address, MemoryRegion, RegionSnapshot};

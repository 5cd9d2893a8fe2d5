//! # Cyclic Patterns
//!
//! De Bruijn cyclic pattern generation and search, compatible with the
//! sequences produced by pwntools' `cyclic`.
//!
//! A cyclic pattern is a byte string in which every subsequence of the
//! cycle length appears exactly once. Writing one into a target buffer and
//! later finding a corrupted pointer value inside the pattern recovers the
//! exact overwrite offset.

use tracing::debug;

/// Charset used for generated patterns
pub const PATTERN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Default cycle (unique subsequence) length
///
/// Four bytes locates an offset through a clobbered 32-bit value and
/// matches the pwntools default.
pub const DEFAULT_CYCLE: usize = 4;

struct DeBruijn<'a>
{
    alphabet: &'a [u8],
    n: usize,
    limit: usize,
    a: Vec<usize>,
    out: Vec<u8>,
}

impl<'a> DeBruijn<'a>
{
    fn new(alphabet: &'a [u8], n: usize, limit: usize) -> Self
    {
        Self {
            alphabet,
            n,
            limit,
            a: vec![0; alphabet.len() * n.max(1)],
            out: Vec::with_capacity(limit.min(1 << 20)),
        }
    }

    // Standard recursive De Bruijn construction (same visit order as
    // pwnlib), stopping as soon as `limit` bytes have been emitted.
    fn generate(&mut self, t: usize, p: usize) -> bool
    {
        if self.out.len() >= self.limit {
            return true;
        }
        if t > self.n {
            if self.n % p == 0 {
                for j in 1..=p {
                    self.out.push(self.alphabet[self.a[j]]);
                    if self.out.len() >= self.limit {
                        return true;
                    }
                }
            }
            false
        } else {
            self.a[t] = self.a[t - p];
            if self.generate(t + 1, p) {
                return true;
            }
            for j in (self.a[t - p] + 1)..self.alphabet.len() {
                self.a[t] = j;
                if self.generate(t + 1, t) {
                    return true;
                }
            }
            false
        }
    }
}

/// Generate the first `length` bytes of the De Bruijn sequence over
/// `alphabet` with subsequence length `n`
///
/// Generation stops as soon as `length` bytes exist, so large `n` values
/// are cheap as long as `length` is reasonable. The full sequence has
/// `alphabet.len()^n` bytes; asking for more than that returns the full
/// sequence only.
pub fn de_bruijn(alphabet: &[u8], n: usize, length: usize) -> Vec<u8>
{
    if alphabet.is_empty() || n == 0 || length == 0 {
        return Vec::new();
    }
    let mut builder = DeBruijn::new(alphabet, n, length);
    builder.generate(1, 1);
    builder.out
}

/// Create a `length`-byte cyclic pattern with the given cycle length
///
/// ## Example
///
/// ```rust
/// use spyglass_core::pattern::cyclic_pattern;
///
/// assert_eq!(cyclic_pattern(20, 4), b"aaaabaaacaaadaaaeaaa");
/// ```
pub fn cyclic_pattern(length: usize, cycle: usize) -> Vec<u8>
{
    debug!(length, cycle, "generating cyclic pattern");
    de_bruijn(PATTERN_CHARSET, cycle, length)
}

/// Find the offset of `needle` inside a cyclic pattern
///
/// Searches the first `haystack_length` bytes of the pattern generated with
/// `cycle`. Returns `None` when the needle is empty or does not occur
/// within that prefix.
///
/// ## Example
///
/// ```rust
/// use spyglass_core::pattern::cyclic_find;
///
/// assert_eq!(cyclic_find(b"baaa", 0x1000, 4), Some(4));
/// assert_eq!(cyclic_find(b"zzzz", 0x1000, 4), None);
/// ```
pub fn cyclic_find(needle: &[u8], haystack_length: usize, cycle: usize) -> Option<usize>
{
    if needle.is_empty() || haystack_length < needle.len() {
        return None;
    }
    let haystack = cyclic_pattern(haystack_length, cycle);
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

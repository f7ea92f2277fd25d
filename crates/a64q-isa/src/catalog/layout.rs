//! Human-readable views of a pattern's bit layout.

use super::{EncodingPattern, is_fixed_tag};

/// A maximal run of adjacent bits sharing one tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitRun<'a> {
    /// Highest bit number of the run.
    pub hi: u8,
    /// Lowest bit number of the run.
    pub lo: u8,
    pub tag: &'a str,
}

impl BitRun<'_> {
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        is_fixed_tag(self.tag)
    }
}

impl EncodingPattern {
    /// Binary pattern, bit 31 first, with `X` for every variable bit.
    #[must_use]
    pub fn binary_pattern(&self) -> String {
        self.tags
            .iter()
            .map(|tag| if is_fixed_tag(tag) { tag.as_str() } else { "X" })
            .collect()
    }

    /// Fixed bits as hex; variable bits read as zero.
    #[must_use]
    pub fn hex_pattern(&self) -> String {
        if self.fixed_mask == u32::MAX {
            format!("0x{:08x}", self.fixed_bits)
        } else {
            format!("0x{:08x} (with X=don't care)", self.fixed_bits)
        }
    }

    /// Runs of identical tags, from bit 31 down to bit 0.
    #[must_use]
    pub fn bit_runs(&self) -> Vec<BitRun<'_>> {
        let mut runs: Vec<BitRun<'_>> = Vec::new();
        for (bit, tag) in (0..32u8).rev().zip(&self.tags) {
            match runs.last_mut() {
                Some(run) if run.tag == tag => run.lo = bit,
                _ => runs.push(BitRun {
                    hi: bit,
                    lo: bit,
                    tag,
                }),
            }
        }
        runs
    }
}

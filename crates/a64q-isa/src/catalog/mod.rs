//! Encoding catalog: immutable, ordered collection of encoding patterns.
//!
//! A pattern matches an opcode iff `(opcode & fixed_mask) == fixed_bits`.
//! Lookups scan the whole catalog in order and return every match, so
//! architecturally overlapping forms (aliases) all show up.

pub mod builtin;
mod layout;
mod text;

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::{CatalogError, PartialOpcode};

pub use layout::BitRun;

/// Number of bit tags per pattern (one per opcode bit).
pub const OPCODE_BITS: usize = 32;

/// How a named field participates in text synthesis.
///
/// Computed once per field name when a pattern is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// `Rd`
    Destination,
    /// `Rn`
    Base,
    /// `Rm`
    Secondary,
    /// `Rt`
    Transfer,
    /// `imm*`, folded into the canonical `imm` value.
    Immediate,
    /// `off*` or `simm`, folded into the canonical `offs` value.
    Offset,
    /// `sh`
    Shift,
    /// `CRm`, combined with `op2` into a hint immediate.
    HintCrm,
    /// `op2`
    HintOp2,
    /// Extracted but not rendered.
    Other,
}

impl FieldRole {
    /// Classify a field name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match name {
            "Rd" => Self::Destination,
            "Rn" => Self::Base,
            "Rm" => Self::Secondary,
            "Rt" => Self::Transfer,
            "sh" => Self::Shift,
            "CRm" => Self::HintCrm,
            "op2" => Self::HintOp2,
            "simm" => Self::Offset,
            _ if name.starts_with("imm") => Self::Immediate,
            _ if name.starts_with("off") => Self::Offset,
            _ => Self::Other,
        }
    }
}

/// One named field of a pattern: the bit positions sharing its tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    name: String,
    role: FieldRole,
    /// Bit numbers, most significant first.
    positions: Vec<u8>,
}

impl FieldLayout {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: FieldRole::classify(name),
            positions: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn role(&self) -> FieldRole {
        self.role
    }

    /// Bit numbers of this field, most significant first.
    #[must_use]
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    /// Field width in bits.
    #[must_use]
    pub fn width(&self) -> usize {
        self.positions.len()
    }

    /// Read the field from an opcode. The first position read becomes the
    /// most significant bit of the result.
    #[must_use]
    pub fn read(&self, opcode: u32) -> u32 {
        self.positions
            .iter()
            .fold(0, |acc, &bit| (acc << 1) | ((opcode >> bit) & 1))
    }
}

/// Static catalog record, as emitted by the catalog generator.
#[derive(Clone, Copy, Debug)]
pub struct RawEncoding {
    pub mnemonic: &'static str,
    pub encoding: &'static str,
    pub fixed_mask: u32,
    pub fixed_bits: u32,
    /// Bit tags, bit 31 first.
    pub bits: [&'static str; OPCODE_BITS],
    pub template: &'static str,
}

/// A catalog entry with its fields grouped and classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingPattern {
    mnemonic: String,
    encoding: String,
    fixed_mask: u32,
    fixed_bits: u32,
    tags: Vec<String>,
    fields: Vec<FieldLayout>,
    template: String,
}

/// True for the literal `"0"`/`"1"` tags.
#[must_use]
pub fn is_fixed_tag(tag: &str) -> bool {
    tag == "0" || tag == "1"
}

/// Check the tag/mask invariant of one record.
fn check_consistency(tags: &[String], fixed_mask: u32, fixed_bits: u32) -> Result<(), String> {
    if tags.len() != OPCODE_BITS {
        return Err(format!("expected {OPCODE_BITS} bit tags, found {}", tags.len()));
    }
    if fixed_bits & !fixed_mask != 0 {
        return Err(format!(
            "fixed_bits 0x{fixed_bits:08x} has bits outside fixed_mask 0x{fixed_mask:08x}"
        ));
    }
    for (bit, tag) in (0..32u32).rev().zip(tags) {
        let masked = (fixed_mask >> bit) & 1 == 1;
        let value = (fixed_bits >> bit) & 1;
        if tag.is_empty() {
            return Err(format!("empty tag at bit {bit}"));
        }
        if is_fixed_tag(tag) {
            if !masked {
                return Err(format!("bit {bit} is tagged {tag} but not in fixed_mask"));
            }
            let expected = if value == 1 { "1" } else { "0" };
            if tag != expected {
                return Err(format!("bit {bit} is tagged {tag} but fixed_bits has {value}"));
            }
        } else if masked {
            return Err(format!("bit {bit} belongs to field {tag} but is in fixed_mask"));
        }
    }
    Ok(())
}

/// Group variable bit positions by tag, in order of first appearance.
fn group_fields(tags: &[String]) -> Vec<FieldLayout> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut fields: Vec<FieldLayout> = Vec::new();
    for (bit, tag) in (0..32u8).rev().zip(tags) {
        if is_fixed_tag(tag) {
            continue;
        }
        let slot = *index.entry(tag.as_str()).or_insert_with(|| {
            fields.push(FieldLayout::new(tag));
            fields.len() - 1
        });
        fields[slot].positions.push(bit);
    }
    fields
}

impl EncodingPattern {
    /// Build a pattern, checking that tags agree with the mask.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when there are not exactly 32 tags
    /// or a fixed tag disagrees with `fixed_mask`/`fixed_bits`.
    pub fn new(
        mnemonic: impl Into<String>,
        encoding: impl Into<String>,
        fixed_mask: u32,
        fixed_bits: u32,
        tags: Vec<String>,
        template: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let encoding = encoding.into();
        if let Err(message) = check_consistency(&tags, fixed_mask, fixed_bits) {
            return Err(CatalogError::Malformed { encoding, message });
        }
        Ok(Self::build(
            mnemonic.into(),
            encoding,
            fixed_mask,
            fixed_bits,
            tags,
            template.into(),
        ))
    }

    /// Build a pattern from generator output without checking it.
    /// [`Catalog::from_partitions`] validates each record it builds.
    #[must_use]
    pub fn from_raw(raw: &RawEncoding) -> Self {
        Self::build(
            raw.mnemonic.to_string(),
            raw.encoding.to_string(),
            raw.fixed_mask,
            raw.fixed_bits,
            raw.bits.iter().map(|tag| (*tag).to_string()).collect(),
            raw.template.to_string(),
        )
    }

    fn build(
        mnemonic: String,
        encoding: String,
        fixed_mask: u32,
        fixed_bits: u32,
        tags: Vec<String>,
        template: String,
    ) -> Self {
        let fields = group_fields(&tags);
        Self {
            mnemonic,
            encoding,
            fixed_mask,
            fixed_bits,
            tags,
            fields,
            template,
        }
    }

    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    #[must_use]
    pub const fn fixed_mask(&self) -> u32 {
        self.fixed_mask
    }

    #[must_use]
    pub const fn fixed_bits(&self) -> u32 {
        self.fixed_bits
    }

    /// Bit tags, bit 31 first.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Named fields in order of first appearance (MSB to LSB).
    #[must_use]
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[inline]
    #[must_use]
    pub const fn matches(&self, opcode: u32) -> bool {
        opcode & self.fixed_mask == self.fixed_bits
    }

    /// Re-check the tag/mask invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] describing the first violation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_consistency(&self.tags, self.fixed_mask, self.fixed_bits).map_err(|message| {
            CatalogError::Malformed {
                encoding: self.encoding.clone(),
                message,
            }
        })
    }
}

/// Ordered, immutable set of encoding patterns.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    patterns: Vec<EncodingPattern>,
}

impl Catalog {
    #[must_use]
    pub const fn new(patterns: Vec<EncodingPattern>) -> Self {
        Self { patterns }
    }

    /// Union of raw partitions, in declared order, with every record checked.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] for the first inconsistent record.
    pub fn from_partitions(partitions: &[&[RawEncoding]]) -> Result<Self, CatalogError> {
        let patterns = partitions
            .iter()
            .flat_map(|partition| partition.iter())
            .map(|raw| {
                let pattern = EncodingPattern::from_raw(raw);
                pattern.validate().map(|()| pattern)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(patterns))
    }

    /// The catalog shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if a built-in record is
    /// inconsistent.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_partitions(builtin::PARTITIONS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EncodingPattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodingPattern> {
        self.patterns.iter()
    }

    /// Every pattern matching `opcode`, with its catalog index, in catalog
    /// order. No deduplication, no early exit.
    pub fn matches(&self, opcode: u32) -> impl Iterator<Item = (usize, &EncodingPattern)> {
        self.patterns
            .iter()
            .enumerate()
            .filter(move |(_, pattern)| pattern.matches(opcode))
    }

    /// Parallel form of [`Catalog::matches`]. Results come back in catalog
    /// order.
    #[must_use]
    pub fn par_matches(&self, opcode: u32) -> Vec<(usize, &EncodingPattern)> {
        self.patterns
            .par_iter()
            .enumerate()
            .filter(|(_, pattern)| pattern.matches(opcode))
            .collect()
    }

    /// Patterns whose fixed bits agree with every known bit of `partial`.
    pub fn matches_partial<'a>(
        &'a self,
        partial: &PartialOpcode,
    ) -> impl Iterator<Item = &'a EncodingPattern> + use<'a> {
        let partial = *partial;
        self.patterns
            .iter()
            .filter(move |pattern| partial.admits(pattern.fixed_mask, pattern.fixed_bits))
    }

    /// Patterns for a mnemonic (case-insensitive), ordered by encoding name.
    #[must_use]
    pub fn by_mnemonic(&self, mnemonic: &str) -> Vec<&EncodingPattern> {
        let mut found: Vec<&EncodingPattern> = self
            .patterns
            .iter()
            .filter(|pattern| pattern.mnemonic.eq_ignore_ascii_case(mnemonic))
            .collect();
        found.sort_by(|a, b| a.encoding.cmp(&b.encoding));
        found
    }

    /// Check every pattern's tag/mask invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError::Malformed`] found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.patterns.iter().try_for_each(EncodingPattern::validate)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EncodingPattern;
    type IntoIter = std::slice::Iter<'a, EncodingPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

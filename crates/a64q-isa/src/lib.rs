//! AArch64 opcode decoding against an encoding catalog.
//!
//! This crate provides opcode literal parsing, the encoding catalog (built-in
//! tables or a loadable interchange file), field extraction, and assembly
//! text synthesis. Decoding reports every catalog pattern an opcode matches,
//! so aliases appear alongside their canonical forms.

mod catalog;
mod decoder;
mod error;
mod fields;
mod opcode;
mod synth;

pub use catalog::{
    BitRun, Catalog, EncodingPattern, FieldLayout, FieldRole, OPCODE_BITS, RawEncoding, builtin,
    is_fixed_tag,
};
pub use decoder::{DecodeOptions, Decoded, DecodedLine, Decoder};
pub use error::{CatalogError, OpcodeError};
pub use fields::{FieldValues, extract};
pub use opcode::{HexWord, OverflowPolicy, PartialOpcode, group_nibbles, parse_opcode};
pub use synth::{PASSES, Pass, normalize_whitespace, render};

/// Decode an opcode against `catalog` with default options.
///
/// This is a convenience wrapper around `Decoder::new(catalog).decode()`.
#[must_use]
pub fn decode(catalog: &Catalog, opcode: u32) -> Decoded<'_> {
    Decoder::new(catalog).decode(opcode)
}

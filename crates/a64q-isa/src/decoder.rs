//! Decode driver: match, extract, render across the whole catalog.

use tracing::debug;

use crate::{
    Catalog, EncodingPattern, HexWord, OpcodeError, OverflowPolicy, PartialOpcode, extract,
    parse_opcode, render,
};

/// Decoding options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Handling of literals wider than 32 bits.
    pub overflow: OverflowPolicy,
    /// Scan the catalog with rayon.
    pub parallel: bool,
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// One rendered match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedLine<'a> {
    /// Position of the pattern in the catalog.
    pub index: usize,
    pub pattern: &'a EncodingPattern,
    /// Synthesized assembly text.
    pub text: String,
}

/// Every rendering of one opcode, in catalog order.
///
/// An empty result means no pattern matched; that is a normal outcome,
/// not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded<'a> {
    pub opcode: u32,
    lines: Vec<DecodedLine<'a>>,
}

impl<'a> Decoded<'a> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn lines(&self) -> &[DecodedLine<'a>] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecodedLine<'a>> {
        self.lines.iter()
    }

    /// Just the assembly text of each line.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }
}

/// Decoder over a borrowed catalog.
pub struct Decoder<'a> {
    catalog: &'a Catalog,
    options: DecodeOptions,
}

impl<'a> Decoder<'a> {
    /// Create a decoder with default options.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_options(catalog, DecodeOptions::default())
    }

    #[must_use]
    pub const fn with_options(catalog: &'a Catalog, options: DecodeOptions) -> Self {
        Self { catalog, options }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Parse an opcode literal under this decoder's overflow policy.
    ///
    /// # Errors
    ///
    /// Returns an [`OpcodeError`] for malformed or out-of-range literals.
    pub fn parse(&self, literal: &str) -> Result<u32, OpcodeError> {
        parse_opcode(literal, self.options.overflow)
    }

    /// Render `opcode` under every matching pattern.
    #[must_use]
    pub fn decode(&self, opcode: u32) -> Decoded<'a> {
        let catalog = self.catalog;
        let matches = if self.options.parallel {
            catalog.par_matches(opcode)
        } else {
            catalog.matches(opcode).collect()
        };

        let lines = matches
            .into_iter()
            .map(|(index, pattern)| {
                debug!(opcode = %HexWord(opcode), encoding = pattern.encoding(), "matched");
                let values = extract(pattern, opcode);
                DecodedLine {
                    index,
                    pattern,
                    text: render(pattern.template(), &values),
                }
            })
            .collect();

        Decoded { opcode, lines }
    }

    /// Parse `literal` and decode it.
    ///
    /// # Errors
    ///
    /// Returns an [`OpcodeError`] if the literal does not parse; nothing is
    /// looked up in that case.
    pub fn decode_literal(&self, literal: &str) -> Result<Decoded<'a>, OpcodeError> {
        self.parse(literal).map(|opcode| self.decode(opcode))
    }

    /// Patterns compatible with a partial opcode, in catalog order.
    #[must_use]
    pub fn hint(&self, partial: &PartialOpcode) -> Vec<&'a EncodingPattern> {
        self.catalog.matches_partial(partial).collect()
    }
}

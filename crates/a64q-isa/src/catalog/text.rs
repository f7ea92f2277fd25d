//! Catalog interchange file.
//!
//! One record per line, six tab-separated columns:
//!
//! ```text
//! mnemonic  encoding  fixed_mask  fixed_bits  tags  template
//! ```
//!
//! `fixed_mask`/`fixed_bits` are `0x` hex, `tags` is 32 space-separated bit
//! tags (bit 31 first). Blank lines and lines starting with `#` are skipped.

use std::path::Path;

use tracing::debug;

use super::{Catalog, EncodingPattern};
use crate::{CatalogError, OverflowPolicy, parse_opcode};

const COLUMNS: usize = 6;

impl Catalog {
    /// Parse catalog interchange text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] naming the first bad line.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut patterns = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            patterns.push(parse_record(idx + 1, line)?);
        }
        Ok(Self::new(patterns))
    }

    /// Load a catalog interchange file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise as
    /// [`Catalog::parse`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&text)?;
        debug!(path = %path.display(), patterns = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

fn parse_record(line: usize, text: &str) -> Result<EncodingPattern, CatalogError> {
    let parse_error = |message: String| CatalogError::Parse { line, message };

    let columns: Vec<&str> = text.split('\t').collect();
    let [mnemonic, encoding, mask, bits, tags, template] = columns.as_slice() else {
        return Err(parse_error(format!(
            "expected {COLUMNS} tab-separated columns, found {}",
            columns.len()
        )));
    };

    let fixed_mask = parse_opcode(mask.trim(), OverflowPolicy::Reject)
        .map_err(|e| parse_error(format!("fixed_mask: {e}")))?;
    let fixed_bits = parse_opcode(bits.trim(), OverflowPolicy::Reject)
        .map_err(|e| parse_error(format!("fixed_bits: {e}")))?;
    let tags: Vec<String> = tags.split_whitespace().map(str::to_string).collect();

    EncodingPattern::new(
        mnemonic.trim(),
        encoding.trim(),
        fixed_mask,
        fixed_bits,
        tags,
        *template,
    )
    .map_err(|e| parse_error(e.to_string()))
}

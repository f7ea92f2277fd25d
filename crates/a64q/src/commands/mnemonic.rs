//! Mnemonic lookup command (`--n`).

use a64q_isa::{Decoder, EncodingPattern, HexWord, group_nibbles};
use serde::Serialize;

use crate::cli::{EXIT_SUCCESS, OutputFormat};
use crate::commands::{fail, print_json_line};
use crate::terminal;

/// One encoding in `--format json` output.
#[derive(Serialize)]
struct EncodingRecord<'a> {
    mnemonic: &'a str,
    encoding: &'a str,
    template: &'a str,
    fixed_mask: String,
    fixed_bits: String,
}

impl<'a> From<&'a EncodingPattern> for EncodingRecord<'a> {
    fn from(pattern: &'a EncodingPattern) -> Self {
        Self {
            mnemonic: pattern.mnemonic(),
            encoding: pattern.encoding(),
            template: pattern.template(),
            fixed_mask: HexWord(pattern.fixed_mask()).to_string(),
            fixed_bits: HexWord(pattern.fixed_bits()).to_string(),
        }
    }
}

/// Handle `--n`: show every encoding of a mnemonic, ordered by encoding name.
pub fn cmd_mnemonic(decoder: &Decoder<'_>, name: &str, format: OutputFormat) -> i32 {
    let mnemonic = name.to_ascii_uppercase();
    let patterns = decoder.catalog().by_mnemonic(&mnemonic);
    if patterns.is_empty() {
        eprintln!("No instruction found with mnemonic: {mnemonic}");
        return EXIT_SUCCESS;
    }

    match format {
        OutputFormat::Text => print_text(&patterns),
        OutputFormat::Json => {
            let printed = patterns
                .into_iter()
                .try_for_each(|pattern| print_json_line(&EncodingRecord::from(pattern)));
            if let Err(e) = printed {
                return fail(&e);
            }
        }
    }
    EXIT_SUCCESS
}

fn print_text(patterns: &[&EncodingPattern]) {
    terminal::rule();
    if let Some(first) = patterns.first() {
        terminal::header(&format!("Mnemonic: {}", first.mnemonic()));
    }
    terminal::rule();
    println!();

    for (idx, pattern) in patterns.iter().enumerate() {
        println!("[{}] Encoding: {}", idx + 1, pattern.encoding());
        println!("    Assembly: {}", pattern.template());
        println!(
            "    Binary Pattern:  {}",
            group_nibbles(&pattern.binary_pattern())
        );
        println!("    Hex Pattern:     {}", pattern.hex_pattern());
        println!("    Bit Fields:");
        for run in pattern.bit_runs() {
            let kind = if run.is_fixed() { "fixed" } else { "variable" };
            println!("      [{}:{}] = {} ({kind})", run.hi, run.lo, run.tag);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a64q_isa::Catalog;

    #[test]
    fn test_encoding_record_json() {
        let catalog = Catalog::builtin().unwrap();
        let hint = catalog.by_mnemonic("hint")[0];
        assert_eq!(
            serde_json::to_string(&EncodingRecord::from(hint)).unwrap(),
            r##"{"mnemonic":"HINT","encoding":"HINT_HM_hints","template":"HINT  #<imm>","fixed_mask":"0xfffff01f","fixed_bits":"0xd503201f"}"##
        );
    }
}

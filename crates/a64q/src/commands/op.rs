//! Opcode decode command (`--op`).

use a64q_isa::{Decoded, Decoder, HexWord};
use serde::Serialize;
use tracing::info;

use crate::cli::{EXIT_SUCCESS, OutputFormat};
use crate::commands::{fail, print_json_line};
use crate::error::Result;

/// One decoded line in `--format json` output.
#[derive(Serialize)]
struct MatchRecord<'a> {
    opcode: String,
    mnemonic: &'a str,
    encoding: &'a str,
    asm: &'a str,
}

/// Handle `--op`: print one line per matching encoding.
///
/// No match is not a failure: the diagnostic goes to stderr and the exit
/// code is still success.
pub fn cmd_op(decoder: &Decoder<'_>, literal: &str, format: OutputFormat) -> i32 {
    let decoded = match decoder.decode_literal(literal) {
        Ok(decoded) => decoded,
        Err(e) => return fail(&e.into()),
    };
    info!(
        opcode = %HexWord(decoded.opcode),
        matches = decoded.len(),
        parallel = decoder.options().parallel,
        "decoded"
    );

    if decoded.is_empty() {
        eprintln!(
            "No matching instruction found for opcode: {}",
            HexWord(decoded.opcode)
        );
        return EXIT_SUCCESS;
    }

    match format {
        OutputFormat::Text => {
            for text in decoded.texts() {
                println!("{text}");
            }
        }
        OutputFormat::Json => {
            if let Err(e) = print_json(&decoded) {
                return fail(&e);
            }
        }
    }
    EXIT_SUCCESS
}

fn records<'a>(decoded: &'a Decoded<'_>) -> impl Iterator<Item = MatchRecord<'a>> {
    let opcode = HexWord(decoded.opcode).to_string();
    decoded.iter().map(move |line| MatchRecord {
        opcode: opcode.clone(),
        mnemonic: line.pattern.mnemonic(),
        encoding: line.pattern.encoding(),
        asm: &line.text,
    })
}

fn print_json(decoded: &Decoded<'_>) -> Result<()> {
    records(decoded).try_for_each(|record| print_json_line(&record))
}

//! Partial opcode command (`--hint`).

use a64q_isa::{Decoder, EncodingPattern, PartialOpcode, group_nibbles};
use serde::Serialize;
use tracing::info;

use crate::cli::{EXIT_SUCCESS, OutputFormat};
use crate::commands::{fail, print_json_line};

/// One compatible encoding in `--format json` output.
#[derive(Serialize)]
struct TemplateRecord<'a> {
    mnemonic: &'a str,
    encoding: &'a str,
    template: &'a str,
}

impl<'a> From<&'a EncodingPattern> for TemplateRecord<'a> {
    fn from(pattern: &'a EncodingPattern) -> Self {
        Self {
            mnemonic: pattern.mnemonic(),
            encoding: pattern.encoding(),
            template: pattern.template(),
        }
    }
}

/// Handle `--hint`: print the raw template of every compatible encoding.
pub fn cmd_hint(decoder: &Decoder<'_>, literal: &str, format: OutputFormat) -> i32 {
    let partial = match PartialOpcode::parse(literal) {
        Ok(partial) => partial,
        Err(e) => return fail(&e.into()),
    };
    let patterns = decoder.hint(&partial);
    info!(
        pattern = %partial.to_binary_string(),
        matches = patterns.len(),
        "partial lookup"
    );

    if patterns.is_empty() {
        eprintln!("No matching instruction found for partial opcode: {literal}");
        eprintln!("Binary: {}", group_nibbles(&partial.to_binary_string()));
        return EXIT_SUCCESS;
    }

    match format {
        OutputFormat::Text => {
            for pattern in patterns {
                println!("{}", pattern.template());
            }
        }
        OutputFormat::Json => {
            let printed = patterns
                .into_iter()
                .try_for_each(|pattern| print_json_line(&TemplateRecord::from(pattern)));
            if let Err(e) = printed {
                return fail(&e);
            }
        }
    }
    EXIT_SUCCESS
}

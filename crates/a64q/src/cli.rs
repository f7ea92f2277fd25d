//! CLI definitions and argument types.

use std::path::PathBuf;

use a64q_isa::{DecodeOptions, OverflowPolicy};
use clap::{ArgGroup, Parser, ValueEnum};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "a64q")]
#[command(about = "AArch64 opcode query tool - decodes opcodes against an encoding catalog")]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("query").required(true).args(["op", "mnemonic", "hint"])))]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Decode opcode to mnemonic + operands (0xHEX or 0bBINARY)
    #[arg(long, value_name = "OPCODE")]
    pub op: Option<String>,

    /// Show encoding pattern(s) for a mnemonic
    #[arg(long = "n", value_name = "MNEMONIC")]
    pub mnemonic: Option<String>,

    /// List templates compatible with a partial opcode (X/x = don't care)
    #[arg(long, value_name = "PARTIAL_OPCODE")]
    pub hint: Option<String>,

    /// Load an encoding catalog file instead of the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Keep the low 32 bits of over-wide opcodes instead of rejecting them
    #[arg(long)]
    pub truncate: bool,

    /// Scan the catalog in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}

impl Cli {
    /// Decoder options selected by the flags.
    pub const fn decode_options(&self) -> DecodeOptions {
        let overflow = if self.truncate {
            OverflowPolicy::Truncate
        } else {
            OverflowPolicy::Reject
        };
        DecodeOptions {
            overflow,
            parallel: self.parallel,
        }
    }

    /// Default tracing directive for the chosen verbosity.
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "a64q=debug"
        } else if self.silent {
            "a64q=error"
        } else {
            "a64q=warn"
        }
    }
}

/// Output format for query results.
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

const AFTER_HELP: &str = "\
Examples:
  a64q --n ADD
  a64q --op 0x91000000
  a64q --op 0x91_00_00_00                      # Separator supported ('_' or ':')
  a64q --op 0b10010001_00000000_00000000_00000000
  a64q --hint 0x1100XXXX                       # X in hex = 4 don't care bits
  a64q --hint 0x91_00_XX_XX                    # Separators work with don't care
  a64q --hint 0b1001xxxx_0000xxxx_xxxxxxxx_xxxxxxxx

Don't care notation:
  Hex format:    'X' or 'x' = 4 binary don't care bits
  Binary format: 'X' or 'x' = 1 binary don't care bit";

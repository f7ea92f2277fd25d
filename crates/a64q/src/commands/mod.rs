//! Command implementations.
//!
//! Each submodule handles one query mode.

mod hint;
mod mnemonic;
mod op;

use std::path::Path;

use a64q_isa::{Catalog, Decoder};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, EXIT_FAILURE};
use crate::error::{Error, Result};
use crate::terminal;

/// Dispatch the selected query to its handler.
pub fn run_command(cli: &Cli) -> i32 {
    let catalog = match load_catalog(cli.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => return fail(&e),
    };
    let decoder = Decoder::with_options(&catalog, cli.decode_options());

    if let Some(literal) = &cli.op {
        return op::cmd_op(&decoder, literal, cli.format);
    }
    if let Some(name) = &cli.mnemonic {
        return mnemonic::cmd_mnemonic(&decoder, name, cli.format);
    }
    let Some(partial) = &cli.hint else {
        unreachable!("clap requires one of --op, --n or --hint");
    };
    hint::cmd_hint(&decoder, partial, cli.format)
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin()?);
    };
    let catalog = Catalog::from_path(path)?;
    if catalog.is_empty() {
        terminal::warning(&format!("catalog {} has no encodings", path.display()));
    }
    Ok(catalog)
}

/// Write one record to stdout as a line of JSON.
fn print_json_line<T: Serialize>(record: &T) -> Result<()> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}

/// Report a user-facing failure and return the failure exit code.
fn fail(e: &Error) -> i32 {
    debug!(error = ?e, "query failed");
    terminal::error(&e.to_string());
    EXIT_FAILURE
}

//! # Hash CLI — CSP hash-source tokens for inline scripts.
//!
//! Prints the token that must appear in `script-src` for each input, so a
//! script body can be allow-listed before it ships.
//!
//! ```bash
//! # One token per file:
//! sitewright hash assets/consent.js assets/analytics-stub.js
//!
//! # Literal source text, machine-readable output:
//! sitewright hash --source "console.log('hi')" --json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use sitewright_core::{HashAlgorithm, ScriptHash};

use crate::parse_algorithm;

/// Hash subcommand arguments.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Script files to hash. Each file's exact bytes are the script body.
    #[arg(required_unless_present = "source")]
    pub files: Vec<PathBuf>,

    /// Hash literal source text instead of files.
    #[arg(long, conflicts_with = "files")]
    pub source: Option<String>,

    /// Hash algorithm for the token.
    #[arg(long, default_value = "sha256", value_parser = parse_algorithm)]
    pub algorithm: HashAlgorithm,

    /// Emit JSON objects instead of plain tokens.
    #[arg(long)]
    pub json: bool,
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let inputs = collect_inputs(args)?;
    for (label, source) in &inputs {
        let token = ScriptHash::compute(args.algorithm, source).token();
        if args.json {
            println!(
                "{}",
                serde_json::json!({"input": label, "token": token})
            );
        } else if inputs.len() > 1 {
            println!("{token}  {label}");
        } else {
            println!("{token}");
        }
    }
    Ok(0)
}

/// Gather (label, source text) pairs from the arguments.
fn collect_inputs(args: &HashArgs) -> Result<Vec<(String, String)>> {
    if let Some(source) = &args.source {
        return Ok(vec![("<source>".to_string(), source.clone())]);
    }
    args.files.iter().map(|path| read_script(path)).collect()
}

/// Read a script file as UTF-8 text. The hash covers the file's exact
/// contents; no trimming or newline normalization.
pub fn read_script(path: &Path) -> Result<(String, String)> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script file {}", path.display()))?;
    Ok((path.display().to_string(), source))
}

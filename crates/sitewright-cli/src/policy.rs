//! # Policy CLI — Assemble a full Content-Security-Policy header value.
//!
//! Builds the strict base policy and folds in a hash-source token for each
//! inline script file, printing the exact header value the server would
//! send. Useful for static hosting setups where the header is configured by
//! hand.
//!
//! ```bash
//! sitewright policy --script assets/consent.js --script assets/jsonld.json
//! ```

use anyhow::Result;
use clap::Args;
use sitewright_core::{CspPolicy, InlineScript};
use std::path::PathBuf;

use crate::hash::read_script;

/// Policy subcommand arguments.
#[derive(Args, Debug)]
pub struct PolicyArgs {
    /// Inline script files to allow-list in script-src.
    #[arg(long = "script")]
    pub scripts: Vec<PathBuf>,

    /// Additional script-src sources, e.g. a CDN origin. Quote keyword
    /// sources yourself ('unsafe-eval' is on you).
    #[arg(long = "extra-script-src")]
    pub extra_script_src: Vec<String>,
}

/// Execute the policy subcommand.
pub fn run_policy(args: &PolicyArgs) -> Result<u8> {
    println!("{}", build_policy(args)?.header_value());
    Ok(0)
}

fn build_policy(args: &PolicyArgs) -> Result<CspPolicy> {
    let mut policy = CspPolicy::strict_page();
    for path in &args.scripts {
        let (_, source) = read_script(path)?;
        let script = InlineScript::from_source(source);
        policy.allow_script(script.hash());
    }
    if !args.extra_script_src.is_empty() {
        policy = policy.directive("script-src", args.extra_script_src.iter().cloned());
    }
    Ok(policy)
}

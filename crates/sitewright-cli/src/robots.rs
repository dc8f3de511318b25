//! # Robots CLI — Render a robots.txt body from crawl rules.
//!
//! ```bash
//! sitewright robots --disallow /preview --disallow /drafts \
//!     --sitemap https://example.com/sitemap.xml
//! ```

use anyhow::Result;
use clap::Args;
use sitewright_core::{RobotsGroup, RobotsPolicy};

/// Robots subcommand arguments.
#[derive(Args, Debug)]
pub struct RobotsArgs {
    /// User-agent the rules apply to.
    #[arg(long, default_value = "*")]
    pub user_agent: String,

    /// Allow path prefixes. Defaults to `/` when no rules are given.
    #[arg(long = "allow")]
    pub allows: Vec<String>,

    /// Disallow path prefixes.
    #[arg(long = "disallow")]
    pub disallows: Vec<String>,

    /// Absolute sitemap URLs, appended after the rule groups.
    #[arg(long = "sitemap")]
    pub sitemaps: Vec<String>,
}

/// Execute the robots subcommand.
pub fn run_robots(args: &RobotsArgs) -> Result<u8> {
    print!("{}", build_policy(args).render());
    Ok(0)
}

fn build_policy(args: &RobotsArgs) -> RobotsPolicy {
    let mut group = RobotsGroup {
        user_agent: args.user_agent.clone(),
        allow: args.allows.clone(),
        disallow: args.disallows.clone(),
    };
    if group.allow.is_empty() && group.disallow.is_empty() {
        group = group.allow("/");
    }

    let mut policy = RobotsPolicy::default().group(group);
    for url in &args.sitemaps {
        policy = policy.sitemap(url);
    }
    policy
}

//! # robots.txt Rendering
//!
//! Deterministic robots.txt generation from a declarative crawl policy.
//! Group order, rule order, and sitemap order are preserved as configured so
//! the rendered body is stable across deploys.

/// One `User-agent` group of crawl rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsGroup {
    /// The user-agent the group applies to (`*` for all crawlers).
    pub user_agent: String,
    /// `Allow:` path prefixes, emitted before disallows.
    pub allow: Vec<String>,
    /// `Disallow:` path prefixes.
    pub disallow: Vec<String>,
}

impl RobotsGroup {
    /// A group applying to all crawlers with no rules yet.
    pub fn all() -> Self {
        Self {
            user_agent: "*".to_string(),
            allow: Vec::new(),
            disallow: Vec::new(),
        }
    }

    /// Add an `Allow` rule.
    pub fn allow(mut self, path: impl Into<String>) -> Self {
        self.allow.push(path.into());
        self
    }

    /// Add a `Disallow` rule.
    pub fn disallow(mut self, path: impl Into<String>) -> Self {
        self.disallow.push(path.into());
        self
    }
}

/// A complete robots.txt policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RobotsPolicy {
    /// User-agent groups, rendered in order.
    pub groups: Vec<RobotsGroup>,
    /// Absolute sitemap URLs, rendered after the groups.
    pub sitemaps: Vec<String>,
}

impl RobotsPolicy {
    /// Policy allowing all crawlers everywhere.
    pub fn allow_all() -> Self {
        Self {
            groups: vec![RobotsGroup::all().allow("/")],
            sitemaps: Vec::new(),
        }
    }

    /// Append a group.
    pub fn group(mut self, group: RobotsGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Append a sitemap URL. Must be absolute per the robots.txt spec;
    /// callers build it from the site base URL.
    pub fn sitemap(mut self, url: impl Into<String>) -> Self {
        self.sitemaps.push(url.into());
        self
    }

    /// Render the robots.txt body. Groups are separated by a blank line;
    /// sitemap lines follow the last group.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        for group in &self.groups {
            let mut lines = vec![format!("User-agent: {}", group.user_agent)];
            for path in &group.allow {
                lines.push(format!("Allow: {path}"));
            }
            for path in &group.disallow {
                lines.push(format!("Disallow: {path}"));
            }
            sections.push(lines.join("\n"));
        }

        if !self.sitemaps.is_empty() {
            let lines: Vec<String> = self
                .sitemaps
                .iter()
                .map(|url| format!("Sitemap: {url}"))
                .collect();
            sections.push(lines.join("\n"));
        }

        let mut body = sections.join("\n\n");
        body.push('\n');
        body
    }
}

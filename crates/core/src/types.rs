use serde::{Deserialize, Serialize};

/// How often a page's content is expected to change.
///
/// Serialized lowercase, the form the Sitemaps protocol uses. Search engines
/// treat this as a hint, not a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Protocol token as it appears inside `<changefreq>`
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// A single page of the site, as advertised to crawlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    /// Relative URL path; the empty string is the site root
    pub path: &'static str,
    pub changefreq: ChangeFreq,
    /// Relative importance among the site's own pages, 0.0 to 1.0
    pub priority: f32,
}

impl Page {
    /// Absolute URL for this page under `base_url`.
    ///
    /// The root page (empty path) yields the bare base URL, no trailing
    /// slash.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }

    /// Priority with one decimal place, the form used in `<priority>`
    pub fn priority_str(&self) -> String {
        format!("{:.1}", self.priority)
    }
}

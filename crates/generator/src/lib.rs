// Crawler-facing document generation: sitemap.xml and robots.txt.
// Both the HTTP server and the static build render through these functions
// so the served document and the built artifact cannot drift.

pub mod robots;
pub mod sitemap;

use chrono::NaiveDate;

/// Generated documents as (relative filename, contents) pairs
pub struct SiteOutput {
    pub files: Vec<(String, String)>,
}

/// Generate every crawler-facing document for the given generation date
pub fn generate(date: NaiveDate) -> SiteOutput {
    SiteOutput {
        files: vec![
            ("sitemap.xml".to_string(), sitemap::render(date)),
            ("robots.txt".to_string(), robots::render()),
        ],
    }
}

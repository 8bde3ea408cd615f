use chrono::NaiveDate;
use lumos_site_core::{BASE_URL, pages};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render the sitemap document for the compiled-in page table.
///
/// `date` becomes every entry's `<lastmod>`; callers pass the current UTC
/// date, so all entries in one document carry the same value. Output is
/// deterministic for a given date and preserves page-table order.
///
/// # Arguments
///
/// * `date` - Generation date, formatted `YYYY-MM-DD` in the output
pub fn render(date: NaiveDate) -> String {
    let lastmod = date.format("%Y-%m-%d").to_string();
    let mut xml = String::with_capacity(1024);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for page in pages() {
        xml.push_str("  <url>\n");
        xml.push_str("    <loc>");
        xml.push_str(&escape_xml(&page.url(BASE_URL)));
        xml.push_str("</loc>\n");
        xml.push_str("    <changefreq>");
        xml.push_str(page.changefreq.as_str());
        xml.push_str("</changefreq>\n");
        xml.push_str("    <priority>");
        xml.push_str(&page.priority_str());
        xml.push_str("</priority>\n");
        xml.push_str("    <lastmod>");
        xml.push_str(&lastmod);
        xml.push_str("</lastmod>\n");
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape a string for safe inclusion in XML text content
///
/// Escapes: & < > " '
fn escape_xml(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&apos;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_render_starts_with_xml_declaration() {
        let xml = render(fixed_date());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }

    #[test]
    fn test_render_wraps_entries_in_namespaced_urlset() {
        let xml = render(fixed_date());
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_render_emits_one_url_per_page() {
        let xml = render(fixed_date());
        assert_eq!(xml.matches("<url>").count(), 4);
        assert_eq!(xml.matches("</url>").count(), 4);
    }

    #[test]
    fn test_render_absolute_locs() {
        let xml = render(fixed_date());
        assert!(xml.contains("<loc>https://lumoslab.tech</loc>"));
        assert!(xml.contains("<loc>https://lumoslab.tech/about</loc>"));
        assert!(xml.contains("<loc>https://lumoslab.tech/blog</loc>"));
        assert!(xml.contains("<loc>https://lumoslab.tech/blog/new</loc>"));
    }

    #[test]
    fn test_render_preserves_page_table_order() {
        let xml = render(fixed_date());
        let root = xml.find("<loc>https://lumoslab.tech</loc>").unwrap();
        let about = xml.find("<loc>https://lumoslab.tech/about</loc>").unwrap();
        let blog = xml.find("<loc>https://lumoslab.tech/blog</loc>").unwrap();
        let blog_new = xml.find("<loc>https://lumoslab.tech/blog/new</loc>").unwrap();
        assert!(root < about && about < blog && blog < blog_new);
    }

    #[test]
    fn test_render_changefreq_and_priority_tokens() {
        let xml = render(fixed_date());
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 2);
        assert_eq!(xml.matches("<changefreq>monthly</changefreq>").count(), 2);
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.contains("<priority>0.7</priority>"));
    }

    #[test]
    fn test_render_same_lastmod_on_every_entry() {
        let xml = render(fixed_date());
        assert_eq!(xml.matches("<lastmod>2026-01-15</lastmod>").count(), 4);
        assert_eq!(xml.matches("<lastmod>").count(), 4);
    }

    #[test]
    fn test_render_lastmod_zero_pads_date() {
        let xml = render(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert!(xml.contains("<lastmod>2026-03-05</lastmod>"));
    }

    #[test]
    fn test_render_is_deterministic_for_a_date() {
        assert_eq!(render(fixed_date()), render(fixed_date()));
    }

    #[test]
    fn test_render_url_element_order() {
        // loc, changefreq, priority, lastmod within each entry
        let xml = render(fixed_date());
        let entry = &xml[xml.find("<url>").unwrap()..xml.find("</url>").unwrap()];
        let loc = entry.find("<loc>").unwrap();
        let changefreq = entry.find("<changefreq>").unwrap();
        let priority = entry.find("<priority>").unwrap();
        let lastmod = entry.find("<lastmod>").unwrap();
        assert!(loc < changefreq && changefreq < priority && priority < lastmod);
    }

    #[test]
    fn test_escape_xml_basic_characters() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_xml_combined_characters() {
        assert_eq!(
            escape_xml("/search?q=a&b=<c>"),
            "/search?q=a&amp;b=&lt;c&gt;"
        );
    }

    #[test]
    fn test_escape_xml_unicode_passes_through() {
        assert_eq!(escape_xml("café/über"), "café/über");
    }
}

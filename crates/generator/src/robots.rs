use lumos_site_core::BASE_URL;

/// Render robots.txt: allow all agents, advertise the sitemap location
pub fn render() -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        BASE_URL
    )
}

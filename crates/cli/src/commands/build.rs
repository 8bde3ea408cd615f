use anyhow::{Context, Result};
use chrono::Utc;
use lumos_site_generator::generate;
use std::fs;
use std::path::PathBuf;

/// Write the crawler-facing documents to a directory for static hosting.
///
/// Renders through the same generator the server uses, so a statically
/// deployed sitemap matches the served one byte for byte (for the same
/// generation date).
///
/// # Arguments
///
/// * `output` - Directory to write into (created if missing)
pub async fn run(output: PathBuf) -> Result<()> {
    println!("🔨 Building SEO documents...");
    println!("   Output: {}", output.display());
    println!();

    fs::create_dir_all(&output).context("Failed to create output directory")?;

    let site = generate(Utc::now().date_naive());

    for (name, contents) in &site.files {
        fs::write(output.join(name), contents)
            .with_context(|| format!("Failed to write {}", name))?;
        println!("   ✓ Wrote {}", name);
    }

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());

    Ok(())
}

use crate::driver::{DriverError, PageDriver};
use crate::results::{HarvestResults, InlineStyleRecord};
use regex::Regex;
use url::Url;

/// Selector for external stylesheet references
const STYLESHEET_LINKS: &str = "link[rel=\"stylesheet\"]";

/// Collect stylesheet URLs from the current page: `<link rel="stylesheet">`
/// hrefs plus `@import` targets found inside `<style>` blocks, resolved
/// against the site base URL and deduplicated by exact resolved string.
pub async fn extract_css_urls<D: PageDriver>(
    driver: &mut D,
    base: &Url,
    results: &mut HarvestResults,
) -> Result<(), DriverError> {
    for link in driver.query(STYLESHEET_LINKS).await? {
        if let Some(href) = driver.attribute(&link, "href").await? {
            add_resolved(base, &href, results);
        }
    }

    let import_re =
        Regex::new(r#"@import\s+url\(["']?([^"')]+)["']?\)"#).expect("static pattern is valid");
    for style in driver.query("style").await? {
        let content = driver.text_content(&style).await?;
        for capture in import_re.captures_iter(&content) {
            add_resolved(base, &capture[1], results);
        }
    }

    Ok(())
}

/// Record every non-empty `<style>` block on the current page, tagged with
/// the page URL. Append-only; repeated blocks are kept.
pub async fn extract_inline_styles<D: PageDriver>(
    driver: &mut D,
    results: &mut HarvestResults,
) -> Result<(), DriverError> {
    let page_url = driver.current_url().await?;
    for style in driver.query("style").await? {
        let content = driver.text_content(&style).await?;
        if !content.trim().is_empty() {
            results.add_inline_style(InlineStyleRecord {
                url: page_url.to_string(),
                content,
            });
        }
    }
    Ok(())
}

/// Resolve a possibly-relative stylesheet reference against the base and
/// record it
fn add_resolved(base: &Url, href: &str, results: &mut HarvestResults) {
    match base.join(href) {
        Ok(resolved) => results.add_css_url(resolved.to_string()),
        Err(e) => ::log::debug!("Skipping unresolvable stylesheet URL {}: {}", href, e),
    }
}

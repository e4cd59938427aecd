pub mod catalog;
pub mod palette;
pub mod sampler;
pub mod typography;

#[cfg(test)]
mod tests;

use crate::config::HarvestConfig;
use crate::driver::{DriverError, PageDriver};
use crate::registry::{self, PageCategory};
use crate::results::HarvestResults;
use url::Url;

/// Run the full collection pass for the current page: CSS catalog, inline
/// styles, then every component in the page's registry.
///
/// Component-level failures are absorbed here: a selector that fails to
/// evaluate leaves that component unsampled on this page and the pass
/// moves on. Catalog failures propagate to the visit boundary, where the
/// page is skipped; anything recorded before the failure point is kept.
pub async fn collect_page_styles<D: PageDriver>(
    driver: &mut D,
    page_name: &str,
    base: &Url,
    config: &HarvestConfig,
    results: &mut HarvestResults,
) -> Result<(), DriverError> {
    ::log::info!("Collecting styles from {}", page_name);

    catalog::extract_css_urls(driver, base, results).await?;
    catalog::extract_inline_styles(driver, results).await?;

    let category = PageCategory::from_name(page_name);
    for &(component, selector) in registry::selectors_for(category) {
        let key = format!("{}_{}", page_name, component);
        match sampler::sample(driver, &key, selector, config.sample_limit).await {
            Ok(snapshots) => {
                if snapshots.is_empty() {
                    continue;
                }
                for snapshot in &snapshots {
                    palette::extract_colors(snapshot, results);
                    typography::index(snapshot, results);
                }
                results.insert_component(key, snapshots);
            }
            Err(e) => {
                ::log::error!("Error extracting styles for {}: {}", key, e);
            }
        }
    }

    Ok(())
}

use crate::collect;
use crate::config::HarvestConfig;
use crate::driver::{DriverError, PageDriver};
use crate::results::HarvestResults;
use std::time::Duration;
use url::Url;

/// Link pattern followed from the job list page to reach one job posting
const JOB_DETAIL_LINK: &str = "a[href*=\"/recruit/jobinfo\"]";

/// Drive the configured visit schedule over one browser page.
///
/// Visits run strictly in order on a single page handle. Each visit is
/// isolated: a navigation or collection failure is logged and the next
/// scheduled page proceeds with the accumulator intact.
pub async fn run_schedule<D: PageDriver>(
    driver: &mut D,
    base: &Url,
    config: &HarvestConfig,
    results: &mut HarvestResults,
) {
    for entry in &config.pages {
        if let Err(e) = visit_page(driver, &entry.name, &entry.path, base, config, results).await {
            ::log::error!("Error visiting {}: {}", entry.name, e);
            continue;
        }

        // The schedule has no job posting path of its own; one is
        // discovered from the listing page when present
        if entry.name == "job_list" {
            follow_job_detail(driver, base, config, results).await;
        }
    }
}

/// Navigate to one scheduled page and collect its styles
async fn visit_page<D: PageDriver>(
    driver: &mut D,
    page_name: &str,
    path: &str,
    base: &Url,
    config: &HarvestConfig,
    results: &mut HarvestResults,
) -> Result<(), DriverError> {
    let url = base
        .join(path)
        .map_err(|e| DriverError::Command(format!("bad page path {}: {}", path, e)))?;
    ::log::info!("Visiting {}: {}", page_name, url);

    driver
        .navigate(&url, Duration::from_secs(config.nav_timeout_secs))
        .await?;
    settle(config).await;

    collect::collect_page_styles(driver, page_name, base, config, results).await
}

/// Pause for client-rendered content after the load event
async fn settle(config: &HarvestConfig) {
    tokio::time::sleep(Duration::from_millis(config.settle_delay_ms)).await;
}

/// After the job list page, try to reach one job posting and collect it as
/// the `job_detail` category. A missing link or a failed navigation skips
/// the pass without failing the run.
async fn follow_job_detail<D: PageDriver>(
    driver: &mut D,
    base: &Url,
    config: &HarvestConfig,
    results: &mut HarvestResults,
) {
    let href = match find_job_detail_link(driver).await {
        Some(href) => href,
        None => {
            ::log::info!("No job detail link found on job list page");
            return;
        }
    };

    let url = match base.join(&href) {
        Ok(url) => url,
        Err(e) => {
            ::log::warn!("Could not resolve job detail link {}: {}", href, e);
            return;
        }
    };

    ::log::info!("Visiting job detail: {}", url);
    let visit = async {
        driver
            .navigate(&url, Duration::from_secs(config.nav_timeout_secs))
            .await?;
        settle(config).await;
        collect::collect_page_styles(driver, "job_detail", base, config, results).await
    };
    if let Err(e) = visit.await {
        ::log::warn!("Could not visit job detail page: {}", e);
    }
}

/// First href matching the job-detail link pattern on the current page
async fn find_job_detail_link<D: PageDriver>(driver: &mut D) -> Option<String> {
    let links = match driver.query(JOB_DETAIL_LINK).await {
        Ok(links) => links,
        Err(e) => {
            ::log::warn!("Job detail link query failed: {}", e);
            return None;
        }
    };

    let first = links.first()?;
    match driver.attribute(first, "href").await {
        Ok(href) => href,
        Err(e) => {
            ::log::warn!("Could not read job detail link href: {}", e);
            None
        }
    }
}

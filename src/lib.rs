// Re-export modules
pub mod collect;
pub mod config;
pub mod crawl;
pub mod driver;
pub mod error;
pub mod registry;
pub mod results;
pub mod writer;

// Re-export commonly used types for convenience
pub use config::{HarvestConfig, PageEntry};
pub use error::HarvestError;
pub use results::{HarvestResults, RunSummary};

use crate::driver::webdriver::WebDriverPage;
use std::path::Path;
use url::Url;

/// Builder for configuring and running one style harvest
pub struct Harvest {
    config: HarvestConfig,
}

impl Harvest {
    /// Create a new Harvest with the given configuration
    pub fn new(config: HarvestConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a JSON file
    pub fn from_config_file(
        path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::new(HarvestConfig::from_file(path)?))
    }

    /// Override the target site
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: &str) -> Self {
        self.config.output_dir = dir.to_string();
        self
    }

    /// Override the per-page navigation timeout
    pub fn with_nav_timeout(mut self, seconds: u64) -> Self {
        self.config.nav_timeout_secs = seconds;
        self
    }

    /// Override the post-navigation settle delay
    pub fn with_settle_delay(mut self, millis: u64) -> Self {
        self.config.settle_delay_ms = millis;
        self
    }

    /// Run the full harvest: connect to the browser, visit the schedule,
    /// write the artifacts.
    ///
    /// The accumulator starts empty and the browser session is closed on
    /// every exit path. Per-page failures are absorbed during the crawl;
    /// the errors surfacing here are the fatal classes only.
    pub async fn run(self) -> Result<RunSummary, HarvestError> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        let base = Url::parse(&config.base_url).map_err(|e| HarvestError::Config {
            message: format!("invalid base URL {}: {}", config.base_url, e),
        })?;

        let mut driver = match WebDriverPage::connect(&config.webdriver_url).await {
            Some(driver) => driver,
            None => {
                return Err(HarvestError::Connect {
                    url: config.webdriver_url,
                });
            }
        };

        let mut results = HarvestResults::new();
        crawl::run_schedule(&mut driver, &base, &config, &mut results).await;
        driver.close().await;

        writer::write(&results, Path::new(&config.output_dir))?;
        Ok(results.summary())
    }
}

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One entry in the visit schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEntry {
    /// Logical page name, used to pick the component registry and to key results
    pub name: String,

    /// Path relative to the base URL
    pub path: String,
}

impl PageEntry {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

/// Configuration for a style harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Base URL of the target site; all relative URLs resolve against this
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Directory the output artifacts are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Ordered schedule of pages to visit
    #[serde(default = "default_pages")]
    pub pages: Vec<PageEntry>,

    /// Per-page navigation timeout in seconds
    #[serde(default = "default_nav_timeout_secs")]
    pub nav_timeout_secs: u64,

    /// Pause after navigation for client-rendered content, in milliseconds
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Maximum number of elements sampled per component selector
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,
}

impl HarvestConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            webdriver_url: default_webdriver_url(),
            output_dir: default_output_dir(),
            pages: default_pages(),
            nav_timeout_secs: default_nav_timeout_secs(),
            settle_delay_ms: default_settle_delay_ms(),
            sample_limit: default_sample_limit(),
        }
    }
}

/// Default target site
fn default_base_url() -> String {
    "https://www.jobkorea.co.kr".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default output directory
fn default_output_dir() -> String {
    "collected".to_string()
}

/// Default visit schedule. The `talent` page has no dedicated component
/// registry and exercises the generic fallback set.
fn default_pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new("main", "/"),
        PageEntry::new("job_list", "/recruit/joblist"),
        PageEntry::new("company", "/company/companylist"),
        PageEntry::new("talent", "/talent/talentlist"),
    ]
}

/// Default per-page navigation timeout
fn default_nav_timeout_secs() -> u64 {
    30
}

/// Default settle delay after navigation
fn default_settle_delay_ms() -> u64 {
    2000
}

/// Default element cap per component selector
fn default_sample_limit() -> usize {
    3
}

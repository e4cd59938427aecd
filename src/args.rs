use clap::Parser;
use style_harvest::HarvestConfig;

#[derive(Parser, Debug)]
#[command(name = "style-harvest")]
#[command(about = "Samples rendered component styles across a site into design datasets")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the site to sample
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Directory to write the collected artifacts into
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// WebDriver server URL
    #[arg(short, long)]
    pub webdriver_url: Option<String>,

    /// Per-page navigation timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Post-navigation settle delay in milliseconds
    #[arg(long)]
    pub settle: Option<u64>,
}

impl Args {
    /// Resolve the run configuration: config file (or defaults) first,
    /// then CLI flag overrides on top
    pub fn into_config(self) -> Result<HarvestConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => HarvestConfig::from_file(path)?,
            None => HarvestConfig::default(),
        };

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(webdriver_url) = self.webdriver_url {
            config.webdriver_url = webdriver_url;
        }
        if let Some(timeout) = self.timeout {
            config.nav_timeout_secs = timeout;
        }
        if let Some(settle) = self.settle {
            config.settle_delay_ms = settle;
        }

        Ok(config)
    }
}

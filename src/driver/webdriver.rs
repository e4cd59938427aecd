use super::{DriverError, PageDriver};
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// WebDriver endpoints tried when the configured one refuses a session
const FALLBACK_WEBDRIVER_URLS: &[&str] = &[
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// `PageDriver` backed by one WebDriver browser session, reused across all
/// page visits of a run
pub struct WebDriverPage {
    client: Client,
}

impl WebDriverPage {
    /// Connect to a WebDriver server, trying common fallback endpoints if
    /// the configured URL refuses the session
    pub async fn connect(webdriver_url: &str) -> Option<Self> {
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Some(Self { client });
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            }
        }

        for url in FALLBACK_WEBDRIVER_URLS {
            if *url == webdriver_url {
                continue; // Skip if it's the same as the one we already tried
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Some(Self { client });
            }
        }

        ::log::error!("Failed to connect to any WebDriver servers");
        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        None
    }

    /// Close the underlying session. Runs on every exit path so the
    /// browser-side process and handles are released.
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }
}

fn command_error(e: fantoccini::error::CmdError) -> DriverError {
    DriverError::Command(e.to_string())
}

#[async_trait]
impl PageDriver for WebDriverPage {
    type Handle = Element;

    async fn navigate(&mut self, url: &Url, nav_timeout: Duration) -> Result<(), DriverError> {
        match timeout(nav_timeout, self.client.goto(url.as_str())).await {
            Ok(result) => result.map_err(command_error),
            Err(_) => Err(DriverError::NavigationTimeout {
                url: url.to_string(),
                timeout_secs: nav_timeout.as_secs(),
            }),
        }
    }

    async fn query(&mut self, selector: &str) -> Result<Vec<Element>, DriverError> {
        self.client
            .find_all(Locator::Css(selector))
            .await
            .map_err(command_error)
    }

    async fn computed_styles(
        &mut self,
        handle: &Element,
        properties: &[&str],
    ) -> Result<Vec<(String, String)>, DriverError> {
        let mut styles = Vec::with_capacity(properties.len());
        for &prop in properties {
            let value = handle.css_value(prop).await.map_err(command_error)?;
            styles.push((prop.to_string(), value));
        }
        Ok(styles)
    }

    async fn attribute(
        &mut self,
        handle: &Element,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        handle.attr(name).await.map_err(command_error)
    }

    async fn text_content(&mut self, handle: &Element) -> Result<String, DriverError> {
        // WebDriver's rendered-text read returns nothing for <style>
        // elements; the textContent property sees the raw CSS
        let text = handle.prop("textContent").await.map_err(command_error)?;
        Ok(text.unwrap_or_default())
    }

    async fn current_url(&mut self) -> Result<Url, DriverError> {
        self.client.current_url().await.map_err(command_error)
    }
}

//! Scripted in-memory driver for exercising the harvest core without a
//! browser.

use super::{DriverError, PageDriver};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// One scripted element on a mock page
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    styles: HashMap<String, String>,
    attributes: HashMap<String, String>,
    text: String,
    fail_styles: bool,
}

impl MockElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(pairs: &[(&str, &str)]) -> Self {
        let mut element = Self::default();
        for (name, value) in pairs {
            element
                .styles
                .insert((*name).to_string(), (*value).to_string());
        }
        element
    }

    pub fn with_attribute(name: &str, value: &str) -> Self {
        let mut element = Self::default();
        element
            .attributes
            .insert(name.to_string(), value.to_string());
        element
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// Make any style evaluation against this element fail
    pub fn failing_styles() -> Self {
        Self {
            fail_styles: true,
            ..Self::default()
        }
    }
}

/// Scripted page content: elements keyed by the exact selector string the
/// core queries with
#[derive(Debug, Clone, Default)]
pub struct MockPage {
    elements: Vec<(String, Vec<MockElement>)>,
}

impl MockPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(mut self, selector: &str, element: MockElement) -> Self {
        if let Some(entry) = self.elements.iter_mut().find(|(s, _)| s == selector) {
            entry.1.push(element);
        } else {
            self.elements.push((selector.to_string(), vec![element]));
        }
        self
    }

    fn matching(&self, selector: &str) -> Vec<MockElement> {
        self.elements
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, elements)| elements.clone())
            .unwrap_or_default()
    }
}

/// In-memory `PageDriver`: pages are keyed by URL and navigation to an
/// unknown URL fails like an unreachable page would
#[derive(Debug, Default)]
pub struct MockDriver {
    pages: HashMap<String, MockPage>,
    current: Option<(Url, MockPage)>,

    /// Every URL a navigation was attempted for, in order
    pub navigations: Vec<String>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, page: MockPage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }
}

#[async_trait]
impl PageDriver for MockDriver {
    type Handle = MockElement;

    async fn navigate(&mut self, url: &Url, _timeout: Duration) -> Result<(), DriverError> {
        self.navigations.push(url.to_string());
        match self.pages.get(url.as_str()) {
            Some(page) => {
                self.current = Some((url.clone(), page.clone()));
                Ok(())
            }
            None => Err(DriverError::Command(format!("unreachable: {}", url))),
        }
    }

    async fn query(&mut self, selector: &str) -> Result<Vec<MockElement>, DriverError> {
        match &self.current {
            Some((_, page)) => Ok(page.matching(selector)),
            None => Err(DriverError::Command("no page loaded".to_string())),
        }
    }

    async fn computed_styles(
        &mut self,
        handle: &MockElement,
        properties: &[&str],
    ) -> Result<Vec<(String, String)>, DriverError> {
        if handle.fail_styles {
            return Err(DriverError::Command("element detached".to_string()));
        }
        Ok(properties
            .iter()
            .map(|prop| {
                let value = handle.styles.get(*prop).cloned().unwrap_or_default();
                ((*prop).to_string(), value)
            })
            .collect())
    }

    async fn attribute(
        &mut self,
        handle: &MockElement,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        Ok(handle.attributes.get(name).cloned())
    }

    async fn text_content(&mut self, handle: &MockElement) -> Result<String, DriverError> {
        Ok(handle.text.clone())
    }

    async fn current_url(&mut self) -> Result<Url, DriverError> {
        match &self.current {
            Some((url, _)) => Ok(url.clone()),
            None => Err(DriverError::Command("no page loaded".to_string())),
        }
    }
}

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Computed-style record for a single sampled element.
///
/// Properties are kept as an ordered pair list in capture order, and
/// serialize as a JSON object in that same order. Never mutated after
/// creation.
#[derive(Debug, Clone)]
pub struct StyleSnapshot {
    /// Component key this snapshot was sampled for
    component: String,

    properties: Vec<(String, String)>,
}

impl StyleSnapshot {
    pub fn new(component: &str, properties: Vec<(String, String)>) -> Self {
        Self {
            component: component.to_string(),
            properties,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Look up a captured property value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

impl Serialize for StyleSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// One non-empty `<style>` block and the page it was found on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineStyleRecord {
    /// URL of the page the block was encountered on
    pub url: String,

    /// Raw text of the style block
    pub content: String,
}

/// One typographic style, keyed in the aggregator by its
/// family/size/weight triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyRecord {
    #[serde(rename = "font-family")]
    pub font_family: String,

    #[serde(rename = "font-size")]
    pub font_size: String,

    #[serde(rename = "font-weight")]
    pub font_weight: String,

    #[serde(rename = "line-height")]
    pub line_height: String,
}

/// Process-wide accumulator for one harvest run.
///
/// Pure accumulation, no I/O. Each dataset has an explicit merge policy:
/// set union for URLs and colors, append for inline styles, key overwrite
/// for component styles and typography. Created empty at run start and
/// finalized once by the writer.
#[derive(Debug, Default)]
pub struct HarvestResults {
    css_urls: HashSet<String>,
    inline_styles: Vec<InlineStyleRecord>,
    component_styles: Vec<(String, Vec<StyleSnapshot>)>,
    colors: HashSet<String>,
    typography: Vec<(String, TypographyRecord)>,
}

/// Dataset counts for one completed run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSummary {
    pub css_urls: usize,
    pub inline_styles: usize,
    pub components: usize,
    pub colors: usize,
    pub typography: usize,
}

impl HarvestResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge policy: set union on the exact URL string
    pub fn add_css_url(&mut self, url: String) {
        self.css_urls.insert(url);
    }

    /// Merge policy: append, no deduplication
    pub fn add_inline_style(&mut self, record: InlineStyleRecord) {
        self.inline_styles.push(record);
    }

    /// Merge policy: overwrite. A re-inserted key replaces its snapshots
    /// and keeps the position of the first insertion.
    pub fn insert_component(&mut self, key: String, snapshots: Vec<StyleSnapshot>) {
        if let Some(entry) = self.component_styles.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = snapshots;
        } else {
            self.component_styles.push((key, snapshots));
        }
    }

    /// Merge policy: set union on the verbatim value string
    pub fn add_color(&mut self, color: String) {
        self.colors.insert(color);
    }

    /// Merge policy: overwrite, last write wins. Keeps the position of the
    /// first insertion.
    pub fn upsert_typography(&mut self, key: String, record: TypographyRecord) {
        if let Some(entry) = self.typography.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = record;
        } else {
            self.typography.push((key, record));
        }
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.contains(color)
    }

    /// Stylesheet URLs sorted for deterministic output
    pub fn sorted_css_urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = self.css_urls.iter().map(String::as_str).collect();
        urls.sort_unstable();
        urls
    }

    /// Palette values sorted for deterministic output
    pub fn sorted_colors(&self) -> Vec<&str> {
        let mut colors: Vec<&str> = self.colors.iter().map(String::as_str).collect();
        colors.sort_unstable();
        colors
    }

    pub fn inline_styles(&self) -> &[InlineStyleRecord] {
        &self.inline_styles
    }

    /// Component entries in insertion order
    pub fn component_styles(&self) -> &[(String, Vec<StyleSnapshot>)] {
        &self.component_styles
    }

    pub fn component_snapshots(&self, key: &str) -> Option<&[StyleSnapshot]> {
        self.component_styles
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, snapshots)| snapshots.as_slice())
    }

    /// Component keys sorted for the summary listing
    pub fn sorted_component_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .component_styles
            .iter()
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Typography entries in insertion order
    pub fn typography(&self) -> &[(String, TypographyRecord)] {
        &self.typography
    }

    pub fn typography_record(&self, key: &str) -> Option<&TypographyRecord> {
        self.typography
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, record)| record)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            css_urls: self.css_urls.len(),
            inline_styles: self.inline_styles.len(),
            components: self.component_styles.len(),
            colors: self.colors.len(),
            typography: self.typography.len(),
        }
    }
}

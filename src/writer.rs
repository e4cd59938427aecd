use crate::error::HarvestError;
use crate::results::HarvestResults;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fs;
use std::path::Path;

/// Serialize an insertion-ordered pair list as a JSON object, keeping the
/// order the run recorded the keys in
struct OrderedMap<'a, V: Serialize>(&'a [(String, V)]);

impl<V: Serialize> Serialize for OrderedMap<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Shape of color_palette.json: the sorted palette plus per-notation
/// partitions keyed off the value prefix
#[derive(Serialize)]
struct ColorPaletteReport<'a> {
    all_colors: Vec<&'a str>,
    rgb_colors: Vec<&'a str>,
    hex_colors: Vec<&'a str>,
    named_colors: Vec<&'a str>,
}

impl<'a> ColorPaletteReport<'a> {
    fn new(all_colors: Vec<&'a str>) -> Self {
        let rgb_colors = all_colors
            .iter()
            .copied()
            .filter(|c| c.starts_with("rgb"))
            .collect();
        let hex_colors = all_colors
            .iter()
            .copied()
            .filter(|c| c.starts_with('#'))
            .collect();
        let named_colors = all_colors
            .iter()
            .copied()
            .filter(|c| !c.starts_with('#') && !c.starts_with("rgb"))
            .collect();
        Self {
            all_colors,
            rgb_colors,
            hex_colors,
            named_colors,
        }
    }
}

/// Serialize the aggregator's final state into the six output artifacts.
///
/// Write failures are the run's one fatal class: without persisted output
/// the run has no observable result.
pub fn write(results: &HarvestResults, dir: &Path) -> Result<(), HarvestError> {
    fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;

    write_css_urls(results, &dir.join("css_urls.txt"))?;
    write_json("inline_styles.json", dir, results.inline_styles())?;
    write_json(
        "component_styles.json",
        dir,
        &OrderedMap(results.component_styles()),
    )?;
    write_json(
        "color_palette.json",
        dir,
        &ColorPaletteReport::new(results.sorted_colors()),
    )?;
    write_json("typography.json", dir, &OrderedMap(results.typography()))?;
    write_summary(results, &dir.join("summary.txt"))?;

    Ok(())
}

fn write_css_urls(results: &HarvestResults, path: &Path) -> Result<(), HarvestError> {
    let mut out = String::from("# Collected stylesheet URLs\n\n");
    for url in results.sorted_css_urls() {
        out.push_str(url);
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| write_error(path, e))
}

fn write_json<T: Serialize + ?Sized>(
    name: &'static str,
    dir: &Path,
    value: &T,
) -> Result<(), HarvestError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| HarvestError::Serialize {
        artifact: name,
        source: e,
    })?;
    let path = dir.join(name);
    fs::write(&path, json).map_err(|e| write_error(&path, e))
}

fn write_summary(results: &HarvestResults, path: &Path) -> Result<(), HarvestError> {
    let summary = results.summary();
    let mut out = String::new();
    out.push_str("Style Collection Summary\n");
    out.push_str("========================\n\n");
    out.push_str(&format!("Total CSS URLs found: {}\n", summary.css_urls));
    out.push_str(&format!("Inline style blocks: {}\n", summary.inline_styles));
    out.push_str(&format!("Components analyzed: {}\n", summary.components));
    out.push_str(&format!("Unique colors found: {}\n", summary.colors));
    out.push_str(&format!("Typography variations: {}\n", summary.typography));

    out.push_str("\n\nComponents analyzed:\n");
    for key in results.sorted_component_keys() {
        out.push_str(&format!("  - {}\n", key));
    }

    fs::write(path, out).map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, source: std::io::Error) -> HarvestError {
    HarvestError::Write {
        path: path.to_path_buf(),
        source,
    }
}

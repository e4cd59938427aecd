use crate::results::{HarvestResults, StyleSnapshot};

/// The color-bearing subset of snapshot properties
pub const COLOR_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
];

/// How browsers serialize "no color set"
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Fold the snapshot's color values into the shared palette.
///
/// Absent, empty and fully-transparent values are dropped. Everything else
/// is recorded verbatim: equivalent colors in different notations stay
/// distinct palette entries.
pub fn extract_colors(snapshot: &StyleSnapshot, results: &mut HarvestResults) {
    for prop in COLOR_PROPERTIES {
        match snapshot.get(prop) {
            Some(value) if !value.is_empty() && value != TRANSPARENT => {
                results.add_color(value.to_string());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> StyleSnapshot {
        StyleSnapshot::new(
            "main_header",
            pairs
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_transparent_and_empty_are_dropped() {
        let mut results = HarvestResults::new();
        let snap = snapshot(&[
            ("color", "rgb(0, 0, 0)"),
            ("background-color", "rgba(0, 0, 0, 0)"),
            ("border-top-color", ""),
        ]);
        extract_colors(&snap, &mut results);

        assert_eq!(results.sorted_colors(), vec!["rgb(0, 0, 0)"]);
        assert!(!results.has_color(TRANSPARENT));
    }

    #[test]
    fn test_notations_stay_distinct() {
        let mut results = HarvestResults::new();
        extract_colors(
            &snapshot(&[("color", "#fff"), ("background-color", "rgb(255, 255, 255)")]),
            &mut results,
        );
        assert_eq!(results.sorted_colors().len(), 2);
    }

    #[test]
    fn test_non_color_properties_are_ignored() {
        let mut results = HarvestResults::new();
        extract_colors(
            &snapshot(&[("font-size", "14px"), ("background-image", "url(x.png)")]),
            &mut results,
        );
        assert!(results.sorted_colors().is_empty());
    }

    #[test]
    fn test_duplicates_fold_to_one_entry() {
        let mut results = HarvestResults::new();
        let snap = snapshot(&[("color", "red"), ("background-color", "red")]);
        extract_colors(&snap, &mut results);
        extract_colors(&snap, &mut results);
        assert_eq!(results.sorted_colors(), vec!["red"]);
    }
}

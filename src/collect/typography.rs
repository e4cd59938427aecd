use crate::results::{HarvestResults, StyleSnapshot, TypographyRecord};

/// Upsert a typography record derived from the snapshot's font attributes.
///
/// The key joins font-family, font-size and font-weight; an identical
/// triple is the same typographic style no matter which component produced
/// it, so a key collision overwrites the stored record and line-height
/// variance under one key is lost (last write wins). Snapshots without a
/// font-family value are skipped; they may still contribute colors.
pub fn index(snapshot: &StyleSnapshot, results: &mut HarvestResults) {
    let family = match snapshot.get("font-family") {
        Some(family) if !family.is_empty() => family,
        _ => return,
    };
    let size = snapshot.get("font-size").unwrap_or_default();
    let weight = snapshot.get("font-weight").unwrap_or_default();

    let key = format!("{}_{}_{}", family, size, weight);
    let record = TypographyRecord {
        font_family: family.to_string(),
        font_size: size.to_string(),
        font_weight: weight.to_string(),
        line_height: snapshot.get("line-height").unwrap_or_default().to_string(),
    };
    results.upsert_typography(key, record);
}

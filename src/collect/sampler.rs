use crate::driver::{DriverError, PageDriver};
use crate::results::StyleSnapshot;

/// Fixed set of computed properties captured per sampled element. The
/// explicit list bounds snapshot size and keeps output stable across
/// browser versions.
pub const STYLE_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "background-image",
    "font-family",
    "font-size",
    "font-weight",
    "line-height",
    "padding",
    "margin",
    "border",
    "border-radius",
    "width",
    "height",
    "display",
    "position",
    "box-shadow",
    "text-align",
    "text-decoration",
];

/// Sample computed styles for one component on the current page.
///
/// Returns at most `limit` snapshots, in document order; later matches are
/// ignored. An empty result is expected when the component is absent from
/// the page. Evaluation errors surface as `Err` so the caller can treat
/// the component as unsampled; the DOM is never mutated.
pub async fn sample<D: PageDriver>(
    driver: &mut D,
    component: &str,
    selector: &str,
    limit: usize,
) -> Result<Vec<StyleSnapshot>, DriverError> {
    let elements = driver.query(selector).await?;
    if elements.is_empty() {
        ::log::debug!("No elements match {} for {}", selector, component);
        return Ok(Vec::new());
    }

    let mut snapshots = Vec::new();
    for element in elements.iter().take(limit) {
        let properties = driver.computed_styles(element, STYLE_PROPERTIES).await?;
        snapshots.push(StyleSnapshot::new(component, properties));
    }

    ::log::debug!(
        "Sampled {} of {} elements for {}",
        snapshots.len(),
        elements.len(),
        component
    );
    Ok(snapshots)
}

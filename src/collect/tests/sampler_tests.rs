use crate::collect::{self, sampler};
use crate::config::HarvestConfig;
use crate::driver::PageDriver;
use crate::driver::mock::{MockDriver, MockElement, MockPage};
use crate::results::HarvestResults;
use std::time::Duration;
use url::Url;

const HEADER: &str = "header, .header, #header";
const FOOTER: &str = "footer, .footer, #footer";

fn config() -> HarvestConfig {
    HarvestConfig {
        base_url: "https://site.test".to_string(),
        settle_delay_ms: 0,
        ..HarvestConfig::default()
    }
}

async fn driver_on(page: MockPage) -> MockDriver {
    let mut driver = MockDriver::new().page("https://site.test/", page);
    driver
        .navigate(&Url::parse("https://site.test/").unwrap(), Duration::ZERO)
        .await
        .unwrap();
    driver
}

#[tokio::test]
async fn test_sampling_caps_at_limit() {
    let mut page = MockPage::new();
    for i in 0..5 {
        let color = format!("rgb({}, 0, 0)", i);
        page = page.element(HEADER, MockElement::with_styles(&[("color", color.as_str())]));
    }
    let mut driver = driver_on(page).await;

    let snapshots = sampler::sample(&mut driver, "main_header", HEADER, 3)
        .await
        .unwrap();

    assert_eq!(snapshots.len(), 3);
    // Document order: the first three matches are kept
    assert_eq!(snapshots[0].get("color"), Some("rgb(0, 0, 0)"));
    assert_eq!(snapshots[2].get("color"), Some("rgb(2, 0, 0)"));
}

#[tokio::test]
async fn test_no_matches_is_not_an_error() {
    let mut driver = driver_on(MockPage::new()).await;
    let snapshots = sampler::sample(&mut driver, "main_header", HEADER, 3)
        .await
        .unwrap();
    assert!(snapshots.is_empty());
}

#[tokio::test]
async fn test_snapshot_captures_fixed_property_list() {
    let page = MockPage::new().element(
        HEADER,
        MockElement::with_styles(&[("color", "rgb(0, 0, 0)"), ("display", "flex")]),
    );
    let mut driver = driver_on(page).await;

    let snapshots = sampler::sample(&mut driver, "main_header", HEADER, 3)
        .await
        .unwrap();

    let snapshot = &snapshots[0];
    assert_eq!(snapshot.component(), "main_header");
    assert_eq!(snapshot.get("display"), Some("flex"));
    // Uncaptured properties come back empty, never missing
    assert_eq!(snapshot.get("box-shadow"), Some(""));
    // Properties outside the fixed list are not captured
    assert_eq!(snapshot.get("z-index"), None);
}

#[tokio::test]
async fn test_evaluation_error_leaves_component_unsampled() {
    let page = MockPage::new()
        .element(HEADER, MockElement::failing_styles())
        .element(FOOTER, MockElement::with_styles(&[("color", "rgb(1, 2, 3)")]));
    let mut driver = driver_on(page).await;

    let config = config();
    let base = Url::parse(&config.base_url).unwrap();
    let mut results = HarvestResults::new();
    collect::collect_page_styles(&mut driver, "main", &base, &config, &mut results)
        .await
        .unwrap();

    // The failing component is absent; the rest of the page still sampled
    assert!(results.component_snapshots("main_header").is_none());
    assert_eq!(results.component_snapshots("main_footer").unwrap().len(), 1);
    assert!(results.has_color("rgb(1, 2, 3)"));
}

#[tokio::test]
async fn test_unknown_page_uses_fallback_registry() {
    let page = MockPage::new().element(
        ".card, .box, .panel",
        MockElement::with_styles(&[("color", "rgb(9, 9, 9)")]),
    );
    let mut driver = driver_on(page).await;

    let config = config();
    let base = Url::parse(&config.base_url).unwrap();
    let mut results = HarvestResults::new();
    collect::collect_page_styles(&mut driver, "talent", &base, &config, &mut results)
        .await
        .unwrap();

    assert!(results.component_snapshots("talent_general_card").is_some());
}

#[tokio::test]
async fn test_snapshots_feed_palette_and_typography() {
    let page = MockPage::new().element(
        HEADER,
        MockElement::with_styles(&[
            ("color", "rgb(51, 51, 51)"),
            ("background-color", "rgba(0, 0, 0, 0)"),
            ("font-family", "Pretendard"),
            ("font-size", "16px"),
            ("font-weight", "600"),
            ("line-height", "24px"),
        ]),
    );
    let mut driver = driver_on(page).await;

    let config = config();
    let base = Url::parse(&config.base_url).unwrap();
    let mut results = HarvestResults::new();
    collect::collect_page_styles(&mut driver, "main", &base, &config, &mut results)
        .await
        .unwrap();

    assert_eq!(results.sorted_colors(), vec!["rgb(51, 51, 51)"]);
    let record = results
        .typography_record("Pretendard_16px_600")
        .expect("typography entry");
    assert_eq!(record.line_height, "24px");
}

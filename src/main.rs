use clap::Parser;
use style_harvest::Harvest;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    ::log::info!("Starting style harvest for: {}", config.base_url);

    println!("Note: Style harvesting requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let output_dir = config.output_dir.clone();
    let start_time = std::time::Instant::now();

    let summary = match Harvest::new(config).run().await {
        Ok(summary) => summary,
        Err(e) => {
            ::log::error!("Harvest failed: {}", e);
            std::process::exit(1);
        }
    };

    let duration = start_time.elapsed();
    ::log::info!(
        "Harvest complete - {} components, {} colors, {} typography variants in {:.2} seconds",
        summary.components,
        summary.colors,
        summary.typography,
        duration.as_secs_f64()
    );

    println!("Collection complete! Results saved to:");
    for artifact in [
        "css_urls.txt",
        "inline_styles.json",
        "component_styles.json",
        "color_palette.json",
        "typography.json",
        "summary.txt",
    ] {
        println!("  - {}/{}", output_dir, artifact);
    }
}

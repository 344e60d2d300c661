use crate::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;
use vitrine_browser::ScrapePipeline;
use vitrine_core::record::Catalog;

pub fn execute(
    url: &str,
    format: OutputFormat,
    chrome_path: Option<PathBuf>,
    timeout: u64,
    selectors: Option<PathBuf>,
    port: u16,
) -> Result<()> {
    let config = super::build_config(url, chrome_path, timeout, selectors, port)?;
    let storefront = config.url.clone();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let pipeline = ScrapePipeline::new(config);
        pipeline.collect_catalog().await
    });

    // Shut down promptly instead of hanging on lingering blocking tasks
    runtime.shutdown_timeout(std::time::Duration::from_millis(100));

    let catalog = result?;

    let output = match format {
        OutputFormat::Json => format_json(&storefront, &catalog)?,
        OutputFormat::Pretty => format_pretty(&storefront, &catalog),
    };
    print!("{}", output);

    Ok(())
}

fn format_json(storefront: &str, catalog: &Catalog) -> Result<String> {
    let envelope = serde_json::json!({
        "storefront": storefront,
        "scraped_at": chrono::Utc::now().to_rfc3339(),
        "count": catalog.len(),
        "products": catalog,
    });

    let mut output = serde_json::to_string_pretty(&envelope)?;
    output.push('\n');
    Ok(output)
}

fn format_pretty(storefront: &str, catalog: &Catalog) -> String {
    use console::style;

    let mut output = String::new();

    output.push_str(&format!(
        "\n{}\n\n",
        style(format!("Storefront catalog: {}", storefront))
            .bold()
            .cyan()
    ));

    if catalog.is_empty() {
        output.push_str("No products collected.\n");
        return output;
    }

    for (index, product) in catalog.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", index + 1, style(&product.name).bold()));
        output.push_str(&format!("     Price: {}\n", product.price));
        output.push_str(&format!("     Stock: {}\n", product.stock));
    }

    output.push_str(&format!("\n{} product(s) collected\n", catalog.len()));

    output
}

use anyhow::Result;
use std::path::PathBuf;
use vitrine_browser::ScrapePipeline;

pub fn execute(
    url: &str,
    chrome_path: Option<PathBuf>,
    timeout: u64,
    selectors: Option<PathBuf>,
    port: u16,
) -> Result<()> {
    let config = super::build_config(url, chrome_path, timeout, selectors, port)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let pipeline = ScrapePipeline::new(config);
        pipeline.collect_report().await
    });

    runtime.shutdown_timeout(std::time::Duration::from_millis(100));

    let report = result?;

    // The report text is a fixed surface; print it verbatim
    print!("{}", report);
    if !report.ends_with('\n') {
        println!();
    }

    Ok(())
}

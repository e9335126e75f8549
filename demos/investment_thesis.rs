use anyhow::Result;
use dotenv::dotenv;
use financial_report_scraper::{
    load_reports, resolve_download_path, EquityAnalyst, GeminiClient,
};

/// Expects the report file produced by the `annual_report` example and a
/// `GEMINI_API_KEY` in the environment (or a .env file).
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

    let reports_path = resolve_download_path("msft_reports.json")?;
    let aggregated = load_reports(&reports_path)?;
    println!(
        "📂 Loaded {} fiscal years from {}",
        aggregated.len(),
        reports_path.display()
    );

    println!("🤖 Generating investment thesis with Gemini...");
    let analyst = EquityAnalyst::new(GeminiClient::new(api_key));
    let thesis = analyst.generate_thesis(&aggregated).await?;

    println!("\n{thesis}");

    Ok(())
}

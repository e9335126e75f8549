use anyhow::Result;
use financial_report_scraper::{
    build_aggregated_reports, build_records, known_filings, resolve_download_path, save_reports,
    ChartDataset, IrClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 Scraping Microsoft income statements (FY2014-FY2025)...");

    let client = IrClient::new();
    let aggregated = build_aggregated_reports(&client, &known_filings()).await?;

    let good_years = aggregated.values().filter(|o| o.data().is_some()).count();
    println!(
        "📊 Extracted {} of {} fiscal years",
        good_years,
        aggregated.len()
    );

    let reports_path = resolve_download_path("msft_reports.json")?;
    save_reports(&reports_path, &aggregated)?;
    println!("💾 Aggregated reports saved to {}", reports_path.display());

    let records = build_records(&aggregated);
    let dataset = ChartDataset::from_records(&records);

    let csv_path = resolve_download_path("msft_records.csv")?;
    std::fs::write(&csv_path, dataset.to_csv())?;
    println!("📈 Chart records written to {}", csv_path.display());

    for record in &records {
        println!(
            "  FY{}: total revenue {:>10.0}  net income {:>10.0}",
            record.year, record.total_revenue, record.net_income
        );
    }

    Ok(())
}

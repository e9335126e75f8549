use crate::client::IrClient;
use crate::error::Result;
use crate::extractor::extract_income_statement;
use crate::schema::{AggregatedReports, Extraction, Report};
use log::{debug, info};

/// Fetches every filing in order and extracts its income statement.
///
/// A page without a recognizable table becomes a per-year error outcome and
/// never aborts the remaining years; a transport failure (non-success HTTP
/// status, connection error) aborts the whole collection.
pub async fn collect_reports(client: &IrClient, reports: &[Report]) -> Result<Vec<Extraction>> {
    let mut extractions = Vec::with_capacity(reports.len());

    for report in reports {
        info!("Fetching FY{} filing from {}", report.year, report.url);
        let page = client.get_url_content(&report.url).await?;

        let extraction = extract_income_statement(&page, report.year);
        if extraction.outcome.is_error() {
            debug!("FY{}: no income statement table on page", report.year);
        }
        extractions.push(extraction);
    }

    Ok(extractions)
}

/// Merges per-year extractions into the year-keyed report map.
///
/// Duplicate years overwrite: the input list is ordered oldest scrape first,
/// so the last entry for a year is the most recent one.
pub fn aggregate_extractions(extractions: &[Extraction]) -> AggregatedReports {
    let mut aggregated = AggregatedReports::new();

    for extraction in extractions {
        aggregated.insert(extraction.year, extraction.outcome.clone());
    }

    aggregated
}

/// One-shot pipeline: fetch, extract, and aggregate all known filings.
pub async fn build_aggregated_reports(
    client: &IrClient,
    reports: &[Report],
) -> Result<AggregatedReports> {
    let extractions = collect_reports(client, reports).await?;
    Ok(aggregate_extractions(&extractions))
}

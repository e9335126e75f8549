use crate::error::Result;
use crate::schema::Report;
use reqwest::Client;

/// Microsoft publishes one earnings press release per fiscal year; the Q4
/// release carries the full-year income statement.
const IR_BASE_URL: &str = "https://www.microsoft.com/en-us/Investor/earnings";

const FIRST_FISCAL_YEAR: i32 = 2014;
const LAST_FISCAL_YEAR: i32 = 2025;

/// The known filing locations, oldest first.
pub fn known_filings() -> Vec<Report> {
    (FIRST_FISCAL_YEAR..=LAST_FISCAL_YEAR)
        .map(|year| {
            Report::new(
                year,
                format!("{IR_BASE_URL}/FY-{year}-Q4/press-release-webcast"),
            )
        })
        .collect()
}

/// Thin wrapper over a shared HTTP session for investor-relations pages.
#[derive(Clone, Default)]
pub struct IrClient {
    client: Client,
}

impl IrClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch a page and return its body text. Any non-success HTTP status is
    /// propagated to the caller unmodified.
    pub async fn get_url_content(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

use crate::error::Result;
use crate::llm::client::GeminiClient;
use crate::llm::prompts::{investment_thesis_prompt, ANALYST_SYSTEM_INSTRUCTION};
use crate::schema::AggregatedReports;
use log::info;

/// Default model for thesis generation.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";

/// Turns aggregated yearly financials into a narrative investment thesis.
pub struct EquityAnalyst {
    client: GeminiClient,
    model: String,
}

impl EquityAnalyst {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generates the investor outlook note for the aggregated reports.
    /// The call is one-shot: upstream failures surface as errors, not retries.
    pub async fn generate_thesis(&self, reports: &AggregatedReports) -> Result<String> {
        let prompt = investment_thesis_prompt(reports)?;

        info!(
            "Requesting investment thesis from {} for {} fiscal years",
            self.model,
            reports.len()
        );

        self.client
            .generate_content(&self.model, ANALYST_SYSTEM_INSTRUCTION, &prompt)
            .await
    }
}

use crate::error::{ReportError, Result};
use crate::llm::types::*;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The API key comes from the `GEMINI_API_KEY` environment variable by
/// convention; callers read it and pass it in.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (used by HTTP-level tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends one prompt and returns the model's text.
    ///
    /// The call fails, without retrying, when the prompt was rejected
    /// (feedback present), the response carries no candidates, or the
    /// completion did not finish normally.
    pub async fn generate_content(
        &self,
        model: &str,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            system_instruction: Some(Content::system(system_instruction)),
        };

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(ReportError::GeminiError(format!(
                "Gemini API Error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        if let Some(feedback) = body.prompt_feedback {
            return Err(ReportError::GeminiError(format!(
                "Gemini AI reported an issue with the prompt: {}.",
                feedback
            )));
        }

        let candidates = body.candidates.unwrap_or_default();
        let Some(candidate) = candidates.first() else {
            return Err(ReportError::GeminiError(
                "La respuesta de Gemini vino vacía (sin candidatos).".to_string(),
            ));
        };

        if candidate.finish_reason.as_deref() != Some("STOP") {
            return Err(ReportError::GeminiError(format!(
                "Gemini no terminó correctamente. Razón: {}",
                candidate.finish_reason.as_deref().unwrap_or("desconocida")
            )));
        }

        let text = candidate
            .content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(text)
    }
}

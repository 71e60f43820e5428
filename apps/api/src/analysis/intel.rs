//! The intelligence seam — pluggable, trait-based provider for the three
//! remote operations the lifecycle depends on.
//!
//! `AppState` holds an `Arc<dyn CareerIntel>`, so the orchestrator and the
//! speech player can be driven by mocks in tests without touching handlers.

use async_trait::async_trait;

use crate::analysis::models::AnalysisResult;
use crate::analysis::trends::{parse_trends, TrendsOutcome};
use crate::llm_client::{prompts, LlmClient, LlmError};

/// The remote intelligence provider.
#[async_trait]
pub trait CareerIntel: Send + Sync {
    /// Primary fit analysis. Hard-fails on missing/empty response text.
    async fn analyze_fit(
        &self,
        experience: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, LlmError>;

    /// Grounded market-trend lookup. Transport/API failures are errors;
    /// malformed payloads degrade to the sentinel outcome instead.
    async fn market_trends(&self, role_hint: &str) -> Result<TrendsOutcome, LlmError>;

    /// Synthesizes narration audio, returning base64-encoded PCM.
    async fn synthesize_advice(&self, narration: &str) -> Result<String, LlmError>;
}

/// Production provider backed by the Gemini client.
pub struct GeminiIntel {
    llm: LlmClient,
}

impl GeminiIntel {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CareerIntel for GeminiIntel {
    async fn analyze_fit(
        &self,
        experience: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, LlmError> {
        let prompt = prompts::analysis_prompt(experience, job_description);
        self.llm.generate_analysis::<AnalysisResult>(&prompt).await
    }

    async fn market_trends(&self, role_hint: &str) -> Result<TrendsOutcome, LlmError> {
        let prompt = prompts::trends_prompt(role_hint);
        let text = self.llm.generate_grounded(&prompt).await?;
        Ok(parse_trends(&text))
    }

    async fn synthesize_advice(&self, narration: &str) -> Result<String, LlmError> {
        self.llm.synthesize_speech(narration).await
    }
}

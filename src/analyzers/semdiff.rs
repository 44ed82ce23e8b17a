mod client;
mod types;

pub use client::SemdiffClient;
pub use types::{ClientSettings, DEFAULT_ENDPOINT};

use async_trait::async_trait;

use super::{AnalysisResponse, AnalyzeConfig, Analyzer, AnalyzerError, PlanFile};
use crate::error::SemdiffError;

pub struct SemdiffAnalyzer {
    client: SemdiffClient,
}

impl SemdiffAnalyzer {
    pub fn new(settings: ClientSettings) -> Result<Self, SemdiffError> {
        Ok(Self {
            client: SemdiffClient::with_settings(settings)?,
        })
    }
}

#[async_trait]
impl Analyzer for SemdiffAnalyzer {
    fn name(&self) -> &str {
        "semdiff"
    }

    async fn analyze(
        &self,
        plan: &PlanFile,
        config: &AnalyzeConfig,
    ) -> Result<AnalysisResponse, AnalyzerError> {
        Ok(self.client.analyze(plan, config).await?)
    }
}

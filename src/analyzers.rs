pub mod semdiff;

use async_trait::async_trait;
use thiserror::Error;

use crate::diff::{AnalysisResponse, AnalyzeConfig};
use crate::error::SemdiffError;
use crate::terraform::PlanFile;

pub use semdiff::ClientSettings;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("unknown analyzer: {0}")]
    UnknownAnalyzer(String),
    #[error(transparent)]
    Semdiff(#[from] SemdiffError),
}

/// A backend that turns a Terraform plan into a permission diff.
#[async_trait]
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;
    async fn analyze(
        &self,
        plan: &PlanFile,
        config: &AnalyzeConfig,
    ) -> Result<AnalysisResponse, AnalyzerError>;
}

pub fn get_analyzer(
    name: &str,
    settings: ClientSettings,
) -> Result<Box<dyn Analyzer>, AnalyzerError> {
    match name {
        "semdiff" => Ok(Box::new(semdiff::SemdiffAnalyzer::new(settings)?)),
        other => Err(AnalyzerError::UnknownAnalyzer(other.to_string())),
    }
}

use std::path::{Path, PathBuf};

use crate::error::SemdiffError;

const FALLBACK_FILE_NAME: &str = "plan.json";

/// A Terraform plan as produced by `terraform show -json`.
///
/// The bytes are uploaded untouched; the service decides what it accepts.
#[derive(Debug, Clone)]
pub struct PlanFile {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl PlanFile {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SemdiffError> {
        let path = path.as_ref().to_path_buf();
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| SemdiffError::PlanRead {
                path: path.clone(),
                source,
            })?;

        Self::from_bytes(path, bytes)
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self, SemdiffError> {
        let path = path.into();
        if bytes.is_empty() {
            return Err(SemdiffError::EmptyPlan { path });
        }

        let plan = Self { path, bytes };
        if !plan.looks_like_json_plan() {
            tracing::warn!(
                plan = %plan.path.display(),
                "plan does not look like JSON output; generate it with \"terraform show -json\""
            );
        }

        Ok(plan)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(FALLBACK_FILE_NAME)
    }

    // NOTE: Binary plans from `terraform plan -out` fail this check
    pub fn looks_like_json_plan(&self) -> bool {
        serde_json::from_slice::<serde_json::Value>(&self.bytes)
            .map(|value| value.get("format_version").is_some())
            .unwrap_or(false)
    }
}

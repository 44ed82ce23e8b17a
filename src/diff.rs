use serde::{Deserialize, Serialize};

use crate::error::SemdiffError;

/// One unit of access gained or lost, as reported by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PermissionChangeItem {
    pub principal: String,
    pub resource_arn: String,
    pub action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResponse {
    pub granted: Vec<PermissionChangeItem>,
    pub revoked: Vec<PermissionChangeItem>,
}

impl DiffResponse {
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty() && self.revoked.is_empty()
    }
}

/// A validated analysis result.
///
/// Keeps the body exactly as received (key order included) next to the typed
/// view, so JSON output can echo the service while text output works on
/// checked fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    raw: serde_json::Value,
    diff: DiffResponse,
}

impl AnalysisResponse {
    pub fn from_value(raw: serde_json::Value) -> Result<Self, SemdiffError> {
        let diff = DiffResponse::deserialize(&raw)
            .map_err(|e| SemdiffError::MalformedResponse(e.to_string()))?;
        Ok(Self { raw, diff })
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, SemdiffError> {
        let raw: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| SemdiffError::MalformedResponse(format!("body is not JSON: {}", e)))?;
        Self::from_value(raw)
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    pub fn diff(&self) -> &DiffResponse {
        &self.diff
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub account_id: Option<String>,
    pub region: Option<String>,
}

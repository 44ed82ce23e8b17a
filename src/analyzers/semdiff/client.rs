use reqwest::multipart::{Form, Part};
use reqwest::{StatusCode, Url};

use super::types::{
    ACCOUNT_ID_FIELD, ClientSettings, DEFAULT_ENDPOINT, PLAN_FIELD, REGION_FIELD, parse_endpoint,
};
use crate::diff::{AnalysisResponse, AnalyzeConfig};
use crate::error::SemdiffError;
use crate::terraform::PlanFile;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SemdiffClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl SemdiffClient {
    pub fn new() -> Result<Self, SemdiffError> {
        Self::with_settings(ClientSettings::default())
    }

    /// NOTE: Primarily used for testing with mock servers.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, SemdiffError> {
        Self::with_settings(ClientSettings {
            endpoint: Some(endpoint.to_string()),
            ..ClientSettings::default()
        })
    }

    pub fn with_settings(settings: ClientSettings) -> Result<Self, SemdiffError> {
        let endpoint = parse_endpoint(settings.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SemdiffError::Network)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Uploads the plan and returns the validated permission diff.
    ///
    /// Anything but a 200 is terminal; there are no retries.
    pub async fn analyze(
        &self,
        plan: &PlanFile,
        config: &AnalyzeConfig,
    ) -> Result<AnalysisResponse, SemdiffError> {
        tracing::info!(
            endpoint = %self.endpoint,
            plan = %plan.path().display(),
            bytes = plan.bytes().len(),
            "uploading plan for analysis"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(build_form(plan, config))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SemdiffError::Status {
                host: self.host().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "analysis response received");

        let analysis = AnalysisResponse::from_slice(&body)?;
        tracing::info!(
            granted = analysis.diff().granted.len(),
            revoked = analysis.diff().revoked.len(),
            "analysis complete"
        );

        Ok(analysis)
    }

    fn host(&self) -> &str {
        self.endpoint.host_str().unwrap_or_default()
    }
}

fn build_form(plan: &PlanFile, config: &AnalyzeConfig) -> Form {
    let plan_part = Part::bytes(plan.bytes().to_vec()).file_name(plan.file_name().to_string());
    let mut form = Form::new().part(PLAN_FIELD, plan_part);

    if let Some(account_id) = &config.account_id {
        form = form.text(ACCOUNT_ID_FIELD, account_id.clone());
    }
    if let Some(region) = &config.region {
        form = form.text(REGION_FIELD, region.clone());
    }

    form
}

use std::time::Duration;

use reqwest::Url;

use crate::error::SemdiffError;

pub const DEFAULT_ENDPOINT: &str = "https://api.semdiff.io/analyze/perms/direct";

pub const PLAN_FIELD: &str = "plan";
pub const ACCOUNT_ID_FIELD: &str = "account_id";
pub const REGION_FIELD: &str = "region";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSettings {
    /// Falls back to [`DEFAULT_ENDPOINT`] when unset.
    pub endpoint: Option<String>,
    pub timeout: Option<Duration>,
}

pub fn parse_endpoint(endpoint: &str) -> Result<Url, SemdiffError> {
    let url = Url::parse(endpoint).map_err(|e| SemdiffError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(SemdiffError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                message: format!("unsupported scheme '{}'", other),
            });
        }
    }

    if url.host_str().is_none() {
        return Err(SemdiffError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            message: "missing host".to_string(),
        });
    }

    Ok(url)
}

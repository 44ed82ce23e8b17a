use crate::error::SemdiffError;

/// Pretty-prints the service response verbatim, key order included.
pub fn render_json(raw: &serde_json::Value) -> Result<String, SemdiffError> {
    Ok(serde_json::to_string_pretty(raw)?)
}

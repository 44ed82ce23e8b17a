//! semdiff - Terraform plan permission diff
//!
//! A library for uploading Terraform plans to a permission analysis service and
//! rendering which IAM permissions a change grants or revokes.

pub mod analyzers;
pub mod diff;
pub mod error;
pub mod output;
pub mod terraform;

pub use analyzers::semdiff::{DEFAULT_ENDPOINT, SemdiffClient};
pub use analyzers::{Analyzer, AnalyzerError, ClientSettings, get_analyzer};
pub use diff::{AnalysisResponse, AnalyzeConfig, DiffResponse, PermissionChangeItem};
pub use error::SemdiffError;
pub use output::{OutputFormat, render};
pub use terraform::PlanFile;

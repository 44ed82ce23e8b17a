use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use semdiff::analyzers::ClientSettings;
use semdiff::diff::AnalyzeConfig;
use semdiff::output::OutputFormat;

/// Show which IAM permissions a Terraform plan grants or revokes.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// AWS account id (e.g. 123456789012). Used to generate ARNs if they are missing from the plan file
    #[arg(short, long = "account_id", env = "AWS_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// AWS region (e.g. eu-west-2). Used to generate ARNs if they are missing from the plan file
    #[arg(short, long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Analysis endpoint
    #[arg(long, env = "SEMDIFF_API_URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SEMDIFF_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// The terraform plan file in json format. Can be generated with "terraform show -json"
    pub filename: PathBuf,
}

impl Cli {
    pub fn analyze_config(&self) -> AnalyzeConfig {
        AnalyzeConfig {
            account_id: self.account_id.clone(),
            region: self.region.clone(),
        }
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: [&str; 4] = [
        "AWS_ACCOUNT_ID",
        "AWS_REGION",
        "SEMDIFF_API_URL",
        "SEMDIFF_TIMEOUT",
    ];

    fn parse_clean(args: &[&str]) -> Cli {
        let backup: Vec<(&str, Option<String>)> = ENV_VARS
            .iter()
            .map(|name| (*name, std::env::var(name).ok()))
            .collect();
        unsafe {
            for name in ENV_VARS {
                std::env::remove_var(name);
            }
        }

        let cli = Cli::parse_from(args.iter().copied());

        unsafe {
            for (name, value) in backup {
                if let Some(value) = value {
                    std::env::set_var(name, value);
                }
            }
        }
        cli
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let cli = parse_clean(&["semdiff", "plan.json"]);

        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.account_id.is_none());
        assert!(cli.region.is_none());
        assert!(cli.endpoint.is_none());
        assert!(cli.timeout.is_none());
        assert_eq!(cli.filename, PathBuf::from("plan.json"));
        assert_eq!(cli.client_settings(), ClientSettings::default());
    }

    #[test]
    #[serial]
    fn test_json_format_short_flag() {
        let cli = parse_clean(&["semdiff", "-f", "json", "plan.json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    #[serial]
    fn test_unknown_format_rejected() {
        let result = Cli::try_parse_from(["semdiff", "--format", "yaml", "plan.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filename_required() {
        let result = Cli::try_parse_from(["semdiff", "--format", "text"]);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_account_id_and_region_flags() {
        let cli = parse_clean(&[
            "semdiff",
            "--account_id",
            "123456789012",
            "--region",
            "eu-west-2",
            "plan.json",
        ]);

        let config = cli.analyze_config();
        assert_eq!(config.account_id, Some("123456789012".to_string()));
        assert_eq!(config.region, Some("eu-west-2".to_string()));
    }

    #[test]
    #[serial]
    fn test_short_flags() {
        let cli = parse_clean(&["semdiff", "-a", "123456789012", "-r", "us-east-1", "plan.json"]);
        assert_eq!(cli.account_id, Some("123456789012".to_string()));
        assert_eq!(cli.region, Some("us-east-1".to_string()));
    }

    #[test]
    #[serial]
    fn test_timeout_and_endpoint() {
        let cli = parse_clean(&[
            "semdiff",
            "--endpoint",
            "http://localhost:8080/analyze",
            "--timeout",
            "15",
            "plan.json",
        ]);

        let settings = cli.client_settings();
        assert_eq!(
            settings.endpoint,
            Some("http://localhost:8080/analyze".to_string())
        );
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    #[serial]
    fn test_region_from_env_var_fallback() {
        let region_backup = std::env::var("AWS_REGION").ok();

        unsafe {
            std::env::set_var("AWS_REGION", "ap-southeast-1");
        }

        let cli = Cli::parse_from(["semdiff", "plan.json"]);

        unsafe {
            match region_backup {
                Some(region) => std::env::set_var("AWS_REGION", region),
                None => std::env::remove_var("AWS_REGION"),
            }
        }

        assert_eq!(cli.region, Some("ap-southeast-1".to_string()));
    }

    #[test]
    #[serial]
    fn test_endpoint_flag_takes_precedence_over_env() {
        let endpoint_backup = std::env::var("SEMDIFF_API_URL").ok();

        unsafe {
            std::env::set_var("SEMDIFF_API_URL", "http://env.example/analyze");
        }

        let cli = Cli::parse_from([
            "semdiff",
            "--endpoint=http://cli.example/analyze",
            "plan.json",
        ]);

        unsafe {
            match endpoint_backup {
                Some(endpoint) => std::env::set_var("SEMDIFF_API_URL", endpoint),
                None => std::env::remove_var("SEMDIFF_API_URL"),
            }
        }

        assert_eq!(
            cli.endpoint,
            Some("http://cli.example/analyze".to_string())
        );
    }
}

//! Command-line arguments.
//!
//! Every flag defaults to the value the tool has always used, so a bare
//! invocation samples 40 variables of subject P3183.

use std::path::PathBuf;
use std::time::Duration;

use bdl_client::{BdlClientConfig, DEFAULT_BASE_URL};
use clap::Parser;

use crate::config::{DEFAULT_OUTPUT, DEFAULT_SUBJECT_ID, ExportConfig};

/// Draw a random sample of BDL statistical variables into a CSV file.
#[derive(Parser, Debug)]
#[command(name = "bdl-random-vars")]
#[command(about = "Save a random sample of BDL variables of one subject to CSV")]
#[command(version)]
pub struct Cli {
    /// Subject whose variables are listed
    #[arg(long, env = "BDL_SUBJECT_ID", default_value = DEFAULT_SUBJECT_ID)]
    pub subject_id: String,

    /// Number of variables to draw
    #[arg(
        long,
        default_value_t = crate::config::DEFAULT_SAMPLE_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub sample_size: usize,

    /// Records requested per API page
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,

    /// Pause after every API request, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Registered client key, sent as X-ClientId
    #[arg(long, env = "BDL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the BDL API
    #[arg(long, env = "BDL_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Seed the sampler for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Turn parsed arguments into pipeline settings.
    pub fn into_config(self) -> ExportConfig {
        let client = BdlClientConfig::new()
            .with_base_url(self.base_url)
            .with_optional_api_key(self.api_key)
            .with_page_size(self.page_size)
            .with_page_delay(Duration::from_millis(self.delay_ms))
            .with_timeout(Duration::from_secs(self.timeout_secs));

        ExportConfig {
            subject_id: self.subject_id,
            sample_size: self.sample_size,
            output_path: self.output,
            seed: self.seed,
            client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["bdl-random-vars"]).unwrap();
        assert_eq!(cli.sample_size, 40);
        assert_eq!(cli.page_size, 10);
        assert_eq!(cli.delay_ms, 500);
        assert_eq!(cli.output, PathBuf::from("random_zmienne.csv"));
        assert!(!cli.verbose);

        let config = cli.into_config();
        assert_eq!(config.client.page_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "bdl-random-vars",
            "--subject-id",
            "K3",
            "--sample-size",
            "5",
            "--page-size",
            "100",
            "--delay-ms",
            "0",
            "-o",
            "/tmp/out.csv",
            "--seed",
            "9",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);

        let config = cli.into_config();
        assert_eq!(config.subject_id, "K3");
        assert_eq!(config.sample_size, 5);
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.csv"));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.client.page_size(), 100);
        assert_eq!(config.client.page_delay(), Duration::ZERO);
    }

    #[test]
    fn test_rejects_zero_sizes() {
        assert!(Cli::try_parse_from(["bdl-random-vars", "--sample-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["bdl-random-vars", "--page-size", "0"]).is_err());
    }
}

//! Resolved settings for one export run.

use std::path::PathBuf;

use bdl_client::BdlClientConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Subject listed when none is given.
pub const DEFAULT_SUBJECT_ID: &str = "P3183";

/// Number of variables drawn when none is given.
pub const DEFAULT_SAMPLE_SIZE: usize = 40;

/// Output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "random_zmienne.csv";

/// Everything the export pipeline needs to know.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Subject whose variables are listed
    pub subject_id: String,
    /// Number of variables to draw
    pub sample_size: usize,
    /// Where the CSV is written
    pub output_path: PathBuf,
    /// Fixed seed for reproducible samples
    pub seed: Option<u64>,
    /// HTTP client settings
    pub client: BdlClientConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            subject_id: DEFAULT_SUBJECT_ID.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            client: BdlClientConfig::default(),
        }
    }
}

impl ExportConfig {
    /// Random generator for sampling: seeded when a seed is set, fresh otherwise.
    pub fn rng(&self) -> StdRng {
        self.seed.map_or_else(
            || StdRng::from_rng(&mut rand::rng()),
            StdRng::seed_from_u64,
        )
    }
}

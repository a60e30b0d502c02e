//! Fetch, sample, write.

use std::path::PathBuf;

use bdl_client::VariableSource;
use rand::Rng;
use tracing::debug;

use crate::config::ExportConfig;
use crate::csv_export::write_variables_csv;
use crate::error::ExportError;
use crate::sampling::sample_variables;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Variables listed by the source
    pub fetched: usize,
    /// Rows written, header excluded
    pub written: usize,
    /// File that was written
    pub output_path: PathBuf,
}

/// Progress line for one fetched page, printed to stdout.
///
/// Hand to `BdlClient::with_page_observer` so pages are reported as they arrive.
pub fn print_page_progress(page: u32, count: usize) {
    println!("{}", page_progress_line(page, count));
}

fn page_progress_line(page: u32, count: usize) -> String {
    format!("Fetched page {page}: {count} variables")
}

/// Run one export: list every variable of the subject, draw the sample,
/// write it out.
///
/// The output file is only touched once the sample has been drawn, so a
/// failed fetch or a too-small population leaves any existing file as it was.
pub async fn run_export<R: Rng + ?Sized>(
    source: &dyn VariableSource,
    config: &ExportConfig,
    rng: &mut R,
) -> Result<ExportSummary, ExportError> {
    println!("Fetching all variables for subject-id={}...", config.subject_id);
    let variables = source.fetch_all(&config.subject_id).await?;
    println!("Fetched {} variables in total", variables.len());

    let sample = sample_variables(&variables, config.sample_size, rng)?;
    debug!(
        sample_size = sample.len(),
        population = variables.len(),
        "Drew random sample"
    );

    write_variables_csv(&config.output_path, &sample)?;
    println!(
        "Saved {} random variables to {}",
        sample.len(),
        config.output_path.display()
    );

    Ok(ExportSummary {
        fetched: variables.len(),
        written: sample.len(),
        output_path: config.output_path.clone(),
    })
}

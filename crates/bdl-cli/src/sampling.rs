//! Uniform random sampling without replacement.

use bdl_client::Variable;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::ExportError;

/// Draw `k` distinct records from `records`, uniformly and without replacement.
///
/// The result is in no particular order. Fails with
/// [`ExportError::InsufficientPopulation`] when fewer than `k` records exist.
pub fn sample_variables<R: Rng + ?Sized>(
    records: &[Variable],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Variable>, ExportError> {
    if records.len() < k {
        return Err(ExportError::InsufficientPopulation {
            available: records.len(),
            required: k,
        });
    }

    Ok(records.choose_multiple(rng, k).cloned().collect())
}

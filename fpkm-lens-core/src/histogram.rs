use fpkm_lens_common::{FpkmLensError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: u64,
}

/// Equal-width bins over `[min, max]`, last bin closed.
///
/// Always returns `bins` entries: a constant column is spread over
/// `[v - 0.5, v + 0.5]` (wider when `v` is too large for 0.5 to move it)
/// and an empty one over `[0, 1]`.
pub fn build_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }
    let (min, max) = if values.is_empty() {
        (0.0, 1.0)
    } else {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if max <= min {
            let pad = 0.5f64.max(min.abs() * 1e-6);
            (min - pad, max + pad)
        } else {
            (min, max)
        }
    };
    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &v in values {
        let idx = ((v - min) / width) as usize;
        let idx = idx.min(bins - 1);
        counts[idx] += 1;
    }
    debug!(bins, min, max, values = values.len(), "built histogram");
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| HistogramBin {
            range_start: min + i as f64 * width,
            range_end: if i + 1 == bins { max } else { min + (i + 1) as f64 * width },
            count: c,
        })
        .collect()
}

pub fn total_count(bins: &[HistogramBin]) -> u64 {
    bins.iter().map(|b| b.count).sum()
}

pub fn histogram_to_json(output_path: &Path, bins: &[HistogramBin]) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(file, bins).map_err(|e| FpkmLensError::Other(e.to_string()))?;
    Ok(())
}

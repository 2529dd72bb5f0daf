// src/data_analysis/box_stats.rs

use ndarray::{Array1, Axis};
use ndarray_stats::interpolate::Linear;
use ndarray_stats::QuantileExt;
use noisy_float::types::n64;

use crate::constants::WHISKER_IQR_FACTOR;

/// Summary of one site's error distribution, as drawn by a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub whisker_low: f64,  // Smallest sample not below q1 - 1.5 * IQR.
    pub whisker_high: f64, // Largest sample not above q3 + 1.5 * IQR.
    pub fliers: Vec<f64>,  // Samples beyond the whiskers.
    pub min: f64,
    pub max: f64,
}

impl BoxStats {
    /// Returns `None` when there are no finite samples to summarize.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.len() < samples.len() {
            log::warn!(
                "Ignoring {} non-finite sample(s) in box statistics",
                samples.len() - finite.len()
            );
        }
        if finite.is_empty() {
            return None;
        }

        let mut array = Array1::from(finite);
        let q1 = quantile(&mut array, 0.25)?;
        let median = quantile(&mut array, 0.5)?;
        let q3 = quantile(&mut array, 0.75)?;

        let iqr = q3 - q1;
        let lower_fence = q1 - WHISKER_IQR_FACTOR * iqr;
        let upper_fence = q3 + WHISKER_IQR_FACTOR * iqr;

        let mut whisker_low = f64::INFINITY;
        let mut whisker_high = f64::NEG_INFINITY;
        let mut fliers = Vec::new();
        for &value in &array {
            if value < lower_fence || value > upper_fence {
                fliers.push(value);
            } else {
                whisker_low = whisker_low.min(value);
                whisker_high = whisker_high.max(value);
            }
        }
        // A whisker never ends inside the box.
        whisker_low = whisker_low.min(q1);
        whisker_high = whisker_high.max(q3);

        let mean = array.mean()?;
        let min = *array.min().ok()?;
        let max = *array.max().ok()?;

        Some(Self {
            count: array.len(),
            mean,
            median,
            q1,
            q3,
            whisker_low,
            whisker_high,
            fliers,
            min,
            max,
        })
    }

    /// Lowest and highest value the box plot draws, fliers included.
    pub fn value_range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Quantile `q` with linear interpolation between order statistics.
///
/// Reorders `array` in place; every sample must already be finite.
fn quantile(array: &mut Array1<f64>, q: f64) -> Option<f64> {
    array
        .quantile_axis_skipnan_mut(Axis(0), n64(q), &Linear)
        .ok()
        .map(|value| value[()])
}


// src/data_analysis/box_stats.rs

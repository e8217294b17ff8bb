//! Summary Statistics Computation

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// The five summary statistics over a numeric series, in dataset order.
///
/// Computed once here and reused for the per-feature aggregates and for both
/// stages of the two-stage input/output value reduction, so the arithmetic
/// cannot diverge between call sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sum of all values
    pub sum: f64,
    /// Maximum value
    pub max: f64,
    /// Minimum value
    pub min: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (divisor N, not N-1)
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute the five statistics over a series.
    ///
    /// `what` names the series for error reporting. An empty series is an
    /// error: the aggregates are undefined over zero elements.
    pub fn compute(what: &'static str, values: &[f64]) -> Result<Self, FeatureError> {
        if values.is_empty() {
            return Err(FeatureError::EmptyAggregation { what });
        }

        let n = values.len() as f64;
        let sum = values.iter().sum::<f64>();
        let max = values.iter().cloned().fold(f64::MIN, f64::max);
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let mean = sum / n;

        let mut m2 = 0.0;
        for &v in values {
            let d = v - mean;
            m2 += d * d;
        }
        let std_dev = (m2 / n).sqrt();

        Ok(Self {
            sum,
            max,
            min,
            mean,
            std_dev,
        })
    }

    /// The statistics in fixed dataset order: sum, max, min, mean, std-dev.
    pub fn as_array(&self) -> [f64; 5] {
        [self.sum, self.max, self.min, self.mean, self.std_dev]
    }
}

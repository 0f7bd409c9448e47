// crates/domain/src/analytics/statistics.rs
//! Descriptive statistics over a numeric sample.
//!
//! The reported variance uses the sample denominator (`n - 1`) while the
//! standard deviation is the square root of the population variance (`n`).
//! Both are kept as-is; neither is derived from the other.

use line_tools_shared_kernel::{DomainError, DomainResult};

use super::sort::insertion_sort;
use crate::model::{Mode, NumericRecord};

/// Refinement steps of [`newton_sqrt`].
pub const NEWTON_ITERATIONS: usize = 30;

/// Everything the statistics report prints, minus timing.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub std_dev: f64,
    pub variance: f64,
}

/// Compute the full summary for `records`.
///
/// # Errors
/// Returns [`DomainError::EmptyInput`] when `records` is empty.
pub fn summarize(records: &[NumericRecord]) -> DomainResult<Summary> {
    if records.is_empty() {
        return Err(DomainError::EmptyInput { what: "numeric values" });
    }

    let values: Vec<f64> = records.iter().map(|r| r.value()).collect();
    let sorted = insertion_sort(&values);

    let mean = mean(&values);
    let squared = sum_squared_deviations(&values, mean);
    #[allow(clippy::cast_precision_loss)]
    let population_variance = squared / values.len() as f64;

    let summary = Summary {
        count: values.len(),
        mean,
        median: median(&sorted),
        mode: mode(&sorted),
        std_dev: newton_sqrt(population_variance),
        variance: sample_variance(&values, mean),
    };
    log::debug!("summarized {} values: {summary:?}", summary.count);
    Ok(summary)
}

/// Arithmetic mean as a plain running sum over the count.
///
/// `values` must be non-empty.
pub fn mean(values: &[f64]) -> f64 {
    let mut total = 0.0;
    for v in values {
        total += v;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    total / n
}

/// Median of an ascending, non-empty slice.
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let middle = n / 2;

    if n % 2 == 1 {
        sorted[middle]
    } else {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    }
}

/// Value of the longest run in an ascending slice, ties going to the larger value.
pub fn mode(sorted: &[f64]) -> Mode {
    let Some((&first, rest)) = sorted.split_first() else {
        return Mode::NotApplicable;
    };

    let mut best_value = first;
    let mut best_len = 1usize;
    let mut run_value = first;
    let mut run_len = 1usize;

    let beats = |len: usize, value: f64, best_len: usize, best_value: f64| {
        len > best_len || (len == best_len && value > best_value)
    };

    for &value in rest {
        if value == run_value {
            run_len += 1;
            continue;
        }
        if beats(run_len, run_value, best_len, best_value) {
            best_value = run_value;
            best_len = run_len;
        }
        run_value = value;
        run_len = 1;
    }

    if beats(run_len, run_value, best_len, best_value) {
        best_value = run_value;
        best_len = run_len;
    }

    if best_len == 1 {
        Mode::NotApplicable
    } else {
        Mode::Value(best_value)
    }
}

fn sum_squared_deviations(values: &[f64], mean: f64) -> f64 {
    let mut total = 0.0;
    for v in values {
        let diff = v - mean;
        total += diff * diff;
    }
    total
}

/// Sample variance with the `n - 1` denominator; `0.0` for fewer than two values.
pub fn sample_variance(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denominator = (values.len() - 1) as f64;
    sum_squared_deviations(values, mean) / denominator
}

/// Square root by Newton's method: start at `value`, refine exactly
/// [`NEWTON_ITERATIONS`] times. Zero short-circuits to zero.
pub fn newton_sqrt(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }

    let mut guess = value;
    for _ in 0..NEWTON_ITERATIONS {
        guess = (guess + value / guess) / 2.0;
    }
    guess
}

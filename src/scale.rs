//! Scale functions for value-to-grid mappings.
//!
//! A [`GridScale`] quantizes a continuous domain onto `size` integer buckets.
//! The mapping is deliberately unclamped: values outside the domain produce
//! indices outside `0..size`, and callers drop them at placement time.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Map `value` in `[min, max]` to a bucket index in `[0, size - 1]`.
///
/// A degenerate domain (`min == max`) collapses everything into bucket 0.
/// Otherwise the index is `floor((value - min) / (max - min) * (size - 1))`
/// with no clamping. A NaN result maps to `-1` so it never lands on the grid.
///
/// # Example
///
/// ```
/// use tplot::scale::grid_index;
///
/// assert_eq!(grid_index(5.0, 0.0, 10.0, 11), 5);
/// assert_eq!(grid_index(7.0, 3.0, 3.0, 13), 0);
/// assert_eq!(grid_index(-1.0, 0.0, 10.0, 11), -1);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn grid_index(value: f64, min: f64, max: f64, size: usize) -> i64 {
    if min == max {
        return 0;
    }
    let t = ((value - min) / (max - min) * (size as f64 - 1.0)).floor();
    if t.is_nan() {
        return -1;
    }
    // Float-to-int casts saturate, so infinities stay out of band.
    t as i64
}

/// Validate a value range: both ends finite, `min < max`, finite span.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] otherwise.
pub fn check_range(min: f64, max: f64) -> Result<(f64, f64)> {
    if min.is_finite() && max.is_finite() && min < max && (max - min).is_finite() {
        Ok((min, max))
    } else {
        Err(Error::InvalidRange { min, max })
    }
}

/// Linear quantizing scale from a continuous domain onto `size` buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScale {
    min: f64,
    max: f64,
    size: usize,
}

impl GridScale {
    /// Create a scale over `domain` with `size` buckets.
    #[must_use]
    pub const fn new(domain: (f64, f64), size: usize) -> Self {
        Self { min: domain.0, max: domain.1, size }
    }

    /// Number of buckets.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Bucket for `value`, or `None` when it falls outside `0..size`.
    #[must_use]
    pub fn bucket(&self, value: f64) -> Option<usize> {
        let idx = self.scale(value);
        if idx >= 0 && (idx as usize) < self.size {
            Some(idx as usize)
        } else {
            None
        }
    }
}

impl Scale<f64, i64> for GridScale {
    fn scale(&self, value: f64) -> i64 {
        grid_index(value, self.min, self.max, self.size)
    }

    fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn range(&self) -> (i64, i64) {
        (0, self.size as i64 - 1)
    }
}

/// `num` evenly spaced samples from `start` to `stop`, both inclusive.
///
/// Returns an empty vector for `num == 0` and `[start]` for `num == 1`.
/// The last sample is exactly `stop`.
#[must_use]
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut samples: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            samples[num - 1] = stop;
            samples
        }
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

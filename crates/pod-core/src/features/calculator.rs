//! The three scalar histogram features.

use super::extremum::{find_maxima, find_minimum, IndexRange};
use super::histogram::{GrayHistogram, HIST_WIDTH};
use crate::domain::{FeatureError, FeatureVector};

/// Bins above this value count toward [`pct_05pc`].
const OCCUPIED_BIN: f64 = 0.5;

/// Percentage of bins holding more than 0.5.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn pct_05pc(histogram: &GrayHistogram) -> f64 {
    let occupied = histogram
        .bins()
        .iter()
        .filter(|&&bin| bin > OCCUPIED_BIN)
        .count();
    occupied as f64 * 100.0 / HIST_WIDTH as f64
}

/// Histogram mass inside the basins of the two dominant peaks.
///
/// The first basin runs from the valley left of the global maximum to the
/// valley right of it, inclusive. The second peak is searched outside that
/// basin and its basin is summed half-open on the right. Peaks are not
/// deduplicated: a histogram with a single mode may report its second peak
/// at a boundary with an empty basin.
///
/// # Errors
///
/// Returns [`FeatureError::InvalidRange`] when the second basin would extend
/// left of bin 0: the first basin starts at 0 and the walk back from the
/// second peak finds no valley. This is the case for a histogram with all of
/// its mass in bin 0.
pub fn pct_2pk(histogram: &GrayHistogram) -> Result<f64, FeatureError> {
    let maxima1 = find_maxima(histogram, &[IndexRange::FULL])?;
    let lminima1 = find_minimum(histogram, maxima1, 0)?;
    let rminima1 = find_minimum(histogram, maxima1, HIST_WIDTH)?;
    let mut pct2pk = mass(histogram, lminima1, rminima1 + 1);

    // Excludes one bin either side of the first basin
    let left_end = lminima1.saturating_sub(1);
    let maxima2 = find_maxima(
        histogram,
        &[
            IndexRange::new(0, left_end),
            IndexRange::new(rminima1 + 1, HIST_WIDTH),
        ],
    )?;

    let (lminima2, rminima2) = if maxima2 > maxima1 {
        (
            find_minimum(histogram, maxima2, rminima1 + 1)?,
            find_minimum(histogram, maxima2, HIST_WIDTH)?,
        )
    } else {
        let rminima2 = find_minimum(histogram, maxima2, left_end)?;
        if lminima1 == 0 && rminima2 == maxima2 {
            return Err(FeatureError::InvalidRange {
                start: maxima2,
                end: 0,
            });
        }
        (find_minimum(histogram, maxima2, 0)?, rminima2)
    };
    pct2pk += mass(histogram, lminima2, rminima2);

    Ok(pct2pk)
}

/// Mean absolute step between adjacent bins that differ.
///
/// # Errors
///
/// Returns [`FeatureError::DegenerateInput`] if all bins are equal.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn abs_diff(histogram: &GrayHistogram) -> Result<f64, FeatureError> {
    let (total, steps) = histogram
        .bins()
        .windows(2)
        .filter(|pair| pair[0] != pair[1])
        .fold((0.0, 0usize), |(total, steps), pair| {
            (total + (pair[1] - pair[0]).abs(), steps + 1)
        });
    if steps == 0 {
        return Err(FeatureError::DegenerateInput("histogram is flat"));
    }
    Ok(total / steps as f64)
}

/// Computes `(pct05pc, pct2pk, absdiff)` for a histogram.
///
/// # Errors
///
/// Returns [`FeatureError::DegenerateInput`] for a flat histogram.
pub fn feature_vector(histogram: &GrayHistogram) -> Result<FeatureVector, FeatureError> {
    Ok(FeatureVector::new(
        pct_05pc(histogram),
        pct_2pk(histogram)?,
        abs_diff(histogram)?,
    ))
}

/// Sum of bins in `start..end`; empty when `start >= end`.
fn mass(histogram: &GrayHistogram, start: usize, end: usize) -> f64 {
    histogram.bins().get(start..end).map_or(0.0, |bins| bins.iter().sum())
}

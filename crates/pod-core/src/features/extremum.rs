//! Peak and valley search over a grayscale histogram.

use std::ops::Range;

use super::histogram::{GrayHistogram, HIST_WIDTH};
use crate::domain::FeatureError;

/// Minimum walk distance before a valley may be reported (5% of the histogram
/// width). Keeps shallow dips next to a peak from ending the search.
pub const HIST_5_PCT: usize = 10;

/// Half-open index interval `[start, end)` over histogram bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    /// First index in the range.
    pub start: usize,
    /// One past the last index.
    pub end: usize,
}

impl IndexRange {
    /// Every bin of the histogram.
    pub const FULL: Self = Self::new(0, HIST_WIDTH);

    /// Creates a range.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn checked(self) -> Result<Range<usize>, FeatureError> {
        if self.start > self.end || self.end > HIST_WIDTH {
            return Err(FeatureError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(self.start..self.end)
    }
}

/// Index of the largest bin across `ranges`.
///
/// Ranges are scanned in the order given and a bin must be strictly greater
/// than the best so far to replace it, so ties keep the first index seen.
/// Returns `0` when no bin in range is positive.
///
/// # Errors
///
/// Returns [`FeatureError::InvalidRange`] for an inverted range or one that
/// extends past the last bin.
pub fn find_maxima(histogram: &GrayHistogram, ranges: &[IndexRange]) -> Result<usize, FeatureError> {
    let mut maxima = 0;
    let mut max_y = 0.0;
    for range in ranges {
        for level in range.checked()? {
            if histogram[level] > max_y {
                max_y = histogram[level];
                maxima = level;
            }
        }
    }
    Ok(maxima)
}

/// Walks from `from` toward `toward` and returns the first valley.
///
/// A valley is a position where the first difference changes sign, at least
/// [`HIST_5_PCT`] steps from `from`. Every step replaces the previous
/// difference, so a flat step clears it and a descent, plateau, ascent shape
/// is walked over. Forward walks stop before `toward`; backward walks include
/// it. Returns `from` when no valley is found.
///
/// # Errors
///
/// Returns [`FeatureError::InvalidRange`] if `from` is not a bin index or
/// `toward` is past the end of the histogram.
pub fn find_minimum(
    histogram: &GrayHistogram,
    from: usize,
    toward: usize,
) -> Result<usize, FeatureError> {
    if from >= HIST_WIDTH || toward > HIST_WIDTH {
        return Err(FeatureError::InvalidRange {
            start: from,
            end: toward,
        });
    }
    if from == toward {
        return Ok(from);
    }

    let forward = toward > from;
    let steps = if forward {
        toward - from - 1
    } else {
        from - toward
    };
    let position = |distance: usize| {
        if forward {
            from + distance
        } else {
            from - distance
        }
    };

    let mut prev_y = histogram[from];
    let mut prev_dy = 0.0;
    for distance in 1..=steps {
        let pos = position(distance);
        let dy = histogram[pos] - prev_y;
        if distance >= HIST_5_PCT && sign_flipped(dy, prev_dy) {
            return Ok(pos);
        }
        prev_y = histogram[pos];
        prev_dy = dy;
    }
    Ok(from)
}

fn sign_flipped(dy: f64, prev_dy: f64) -> bool {
    (dy < 0.0 && prev_dy > 0.0) || (dy > 0.0 && prev_dy < 0.0)
}

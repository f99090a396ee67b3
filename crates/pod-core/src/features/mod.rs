//! Histogram feature extraction.
//!
//! A normalized grayscale histogram is built from the image, then three
//! scalar features are computed from it. Peak and valley search over the
//! histogram lives in [`extremum`].

mod calculator;
pub mod extremum;
mod histogram;

pub use calculator::{abs_diff, feature_vector, pct_05pc, pct_2pk};
pub use extremum::{find_maxima, find_minimum, IndexRange, HIST_5_PCT};
pub use histogram::{gray_level, GrayHistogram, HIST_HEIGHT, HIST_WIDTH};

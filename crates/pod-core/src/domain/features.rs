//! Feature vectors and the labels derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three histogram features, in the attribute order classifiers expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Percentage of histogram bins above 0.5.
    pub pct05pc: f64,
    /// Histogram mass held by the two dominant peaks.
    pub pct2pk: f64,
    /// Mean absolute difference between adjacent, differing bins.
    pub absdiff: f64,
}

impl FeatureVector {
    /// Creates a feature vector from its three components.
    #[must_use]
    pub const fn new(pct05pc: f64, pct2pk: f64, absdiff: f64) -> Self {
        Self {
            pct05pc,
            pct2pk,
            absdiff,
        }
    }

    /// Returns the features as `[pct05pc, pct2pk, absdiff]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.pct05pc, self.pct2pk, self.absdiff]
    }
}

/// Image class.
///
/// The discriminant is the class index used by classifier distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Continuous-tone photograph.
    Photo = 0,
    /// Line art or other high-contrast drawing.
    Drawing = 1,
}

impl Label {
    /// All labels in class-index order.
    pub const ALL: [Self; 2] = [Self::Photo, Self::Drawing];

    /// Picks the label for a two-class distribution at equal priors.
    ///
    /// `Photo` wins only when its probability is strictly greater; ties and
    /// NaN comparisons fall to `Drawing`.
    #[must_use]
    pub fn from_distribution(distribution: &[f64; 2]) -> Self {
        if distribution[Self::Photo.index()] > distribution[Self::Drawing.index()] {
            Self::Photo
        } else {
            Self::Drawing
        }
    }

    /// Class index of this label.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in output and training tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Drawing => "drawing",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "photo" => Ok(Self::Photo),
            "drawing" => Ok(Self::Drawing),
            _ => Err(format!("'{s}' is not a label (expected photo or drawing)")),
        }
    }
}

/// Outcome of querying a classifier with a feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Chosen label.
    pub label: Label,
    /// Probability assigned to `photo`.
    pub photo_probability: f64,
    /// Probability assigned to `drawing`.
    pub drawing_probability: f64,
}

impl Classification {
    /// Builds a classification from a `[photo, drawing]` distribution.
    #[must_use]
    pub fn from_distribution(distribution: [f64; 2]) -> Self {
        Self {
            label: Label::from_distribution(&distribution),
            photo_probability: distribution[Label::Photo.index()],
            drawing_probability: distribution[Label::Drawing.index()],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_needs_strictly_greater_mass() {
        assert_eq!(Label::from_distribution(&[0.6, 0.4]), Label::Photo);
        assert_eq!(Label::from_distribution(&[0.4, 0.6]), Label::Drawing);
        assert_eq!(Label::from_distribution(&[0.5, 0.5]), Label::Drawing);
    }

    #[test]
    fn test_nan_distribution_is_drawing() {
        assert_eq!(Label::from_distribution(&[f64::NAN, 0.1]), Label::Drawing);
    }

    #[test]
    fn test_label_indices_follow_class_order() {
        assert_eq!(Label::Photo.index(), 0);
        assert_eq!(Label::Drawing.index(), 1);
        assert_eq!(Label::ALL, [Label::Photo, Label::Drawing]);
    }

    #[test]
    fn test_label_parse_and_display() {
        assert_eq!("photo".parse::<Label>().unwrap(), Label::Photo);
        assert_eq!("Drawing".parse::<Label>().unwrap(), Label::Drawing);
        assert!("sketch".parse::<Label>().is_err());
        assert_eq!(Label::Drawing.to_string(), "drawing");
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&Label::Photo).unwrap();
        assert_eq!(json, "\"photo\"");
    }

    #[test]
    fn test_classification_keeps_distribution() {
        let classification = Classification::from_distribution([0.25, 0.75]);
        assert_eq!(classification.label, Label::Drawing);
        assert!((classification.photo_probability - 0.25).abs() < f64::EPSILON);
        assert!((classification.drawing_probability - 0.75).abs() < f64::EPSILON);
    }
}

//! Threshold classification of role scores into colour-coded categories.

use crate::error::{AnalysisError, Result};
use crate::scoring::RoleScore;

/// Qualitative band of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Excellent,
    Good,
    Average,
    Poor,
    /// Below every cutoff
    Unrated,
    /// The score was undefined
    InsufficientData,
}

impl Category {
    /// CSS class used for cell colouring
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
            Self::Unrated => "unrated",
            Self::InsufficientData => "insufficient",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
            Self::Unrated => "Unrated",
            Self::InsufficientData => "Insufficient data",
        }
    }
}

/// Ordered (cutoff, category) pairs, strictly descending.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    bands: Vec<(f64, Category)>,
}

impl Thresholds {
    /// Build from explicit bands. Cutoffs must be finite and strictly
    /// descending.
    pub fn new(bands: Vec<(f64, Category)>) -> Result<Self> {
        if bands.is_empty() {
            return Err(AnalysisError::config("at least one threshold is required"));
        }
        for (cutoff, category) in &bands {
            if !cutoff.is_finite() {
                return Err(AnalysisError::config(format!(
                    "threshold for {} is not a number",
                    category.label()
                )));
            }
        }
        for pair in bands.windows(2) {
            if pair[0].0 <= pair[1].0 {
                return Err(AnalysisError::config(format!(
                    "thresholds must be strictly descending: {} ({}) <= {} ({})",
                    pair[0].1.label(),
                    pair[0].0,
                    pair[1].1.label(),
                    pair[1].0
                )));
            }
        }
        Ok(Self { bands })
    }

    /// The usual four cutoffs.
    pub fn standard(excellent: f64, good: f64, average: f64, poor: f64) -> Result<Self> {
        Self::new(vec![
            (excellent, Category::Excellent),
            (good, Category::Good),
            (average, Category::Average),
            (poor, Category::Poor),
        ])
    }

    pub fn bands(&self) -> &[(f64, Category)] {
        &self.bands
    }

    /// Cutoff for a category, if it has one
    pub fn cutoff(&self, category: Category) -> Option<f64> {
        self.bands
            .iter()
            .find(|(_, c)| *c == category)
            .map(|(v, _)| *v)
    }

    /// Band for a defined value. Cutoffs are inclusive lower bounds.
    pub fn classify_value(&self, value: f64) -> Category {
        self.bands
            .iter()
            .find(|(cutoff, _)| value >= *cutoff)
            .map(|(_, c)| *c)
            .unwrap_or(Category::Unrated)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bands: vec![
                (15.0, Category::Excellent),
                (12.0, Category::Good),
                (8.0, Category::Average),
                (5.0, Category::Poor),
            ],
        }
    }
}

/// Classify a score.
pub fn classify(score: RoleScore, thresholds: &Thresholds) -> Category {
    match score {
        RoleScore::Scored(v) => thresholds.classify_value(v),
        RoleScore::Undefined => Category::InsufficientData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_goes_to_higher_band() {
        let t = Thresholds::standard(16.0, 12.0, 8.0, 5.0).unwrap();
        assert_eq!(classify(RoleScore::Scored(16.0), &t), Category::Excellent);
        assert_eq!(classify(RoleScore::Scored(15.99), &t), Category::Good);
        assert_eq!(classify(RoleScore::Scored(12.0), &t), Category::Good);
        assert_eq!(classify(RoleScore::Scored(8.0), &t), Category::Average);
        assert_eq!(classify(RoleScore::Scored(5.0), &t), Category::Poor);
    }

    #[test]
    fn test_below_all_and_undefined() {
        let t = Thresholds::default();
        assert_eq!(classify(RoleScore::Scored(4.9), &t), Category::Unrated);
        assert_eq!(classify(RoleScore::Undefined, &t), Category::InsufficientData);
        assert_eq!(classify(RoleScore::Scored(20.0), &t), Category::Excellent);
    }

    #[test]
    fn test_rejects_non_descending() {
        assert!(Thresholds::standard(12.0, 12.0, 8.0, 5.0).is_err());
        assert!(Thresholds::standard(10.0, 12.0, 8.0, 5.0).is_err());
        assert!(Thresholds::standard(f64::NAN, 12.0, 8.0, 5.0).is_err());
        assert!(Thresholds::new(vec![]).is_err());
    }

    #[test]
    fn test_default_matches_standard() {
        let t = Thresholds::standard(15.0, 12.0, 8.0, 5.0).unwrap();
        assert_eq!(t, Thresholds::default());
        assert_eq!(t.cutoff(Category::Good), Some(12.0));
        assert_eq!(t.cutoff(Category::Unrated), None);
    }
}

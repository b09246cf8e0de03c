//! Core types for grid processing.

use serde::{Deserialize, Serialize};

/// Interpolation method for resampling onto a target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    /// Nearest neighbor (preserves exact values).
    Nearest,
    /// Linear in each dimension (bilinear on the grid).
    #[default]
    #[serde(alias = "bilinear")]
    Linear,
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

/// Equal-width histogram of finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Values of one latitude row, as drawn in a zonal profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Latitude of the selected row.
    pub lat: f64,
    pub lons: Vec<f64>,
    pub values: Vec<f32>,
}

impl Profile {
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_nan()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_method_display() {
        assert_eq!(InterpolationMethod::Nearest.to_string(), "nearest");
        assert_eq!(InterpolationMethod::default().to_string(), "linear");
    }

    #[test]
    fn test_histogram_totals() {
        let hist = Histogram {
            edges: vec![0.0, 1.0, 2.0],
            counts: vec![3, 5],
        };
        assert_eq!(hist.bins(), 2);
        assert_eq!(hist.total(), 8);
        assert_eq!(hist.max_count(), 5);
    }
}

//! Physical valid ranges for SST products.

use serde::{Deserialize, Serialize};

/// Inclusive range of physically valid values for a product.
///
/// Serialized as a two-element sequence `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct ValidRange {
    pub min: f32,
    pub max: f32,
}

impl ValidRange {
    /// GMI SST: -3.0 to 34.5 deg Celsius.
    pub const GMI_SST: ValidRange = ValidRange::new(-3.0, 34.5);

    /// MODIS L3m SST: -2.0 to 45.0 deg Celsius.
    pub const MODIS_SST: ValidRange = ValidRange::new(-2.0, 45.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range. NaN is never contained.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// A range is usable when both ends are finite and `min < max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    pub fn width(&self) -> f32 {
        self.max - self.min
    }
}

impl From<[f32; 2]> for ValidRange {
    fn from([min, max]: [f32; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<ValidRange> for [f32; 2] {
    fn from(range: ValidRange) -> Self {
        [range.min, range.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = ValidRange::GMI_SST;
        assert!(range.contains(-3.0));
        assert!(range.contains(34.5));
        assert!(!range.contains(34.51));
        assert!(!range.contains(-999.0));
        assert!(!range.contains(f32::NAN));
    }

    #[test]
    fn test_is_valid() {
        assert!(ValidRange::MODIS_SST.is_valid());
        assert!(!ValidRange::new(5.0, 5.0).is_valid());
        assert!(!ValidRange::new(8.0, -3.0).is_valid());
        assert!(!ValidRange::new(f32::NAN, 1.0).is_valid());
    }
}

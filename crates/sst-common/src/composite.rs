//! Multi-layer stacks of grids sharing one lat/lon grid.

use crate::error::{SstError, SstResult};
use crate::field::{AxisOrder, FieldMetadata};

/// A `(layer, lat, lon)` stack, e.g. the orbit passes of a daily composite or
/// a day/night pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RawComposite {
    data: Vec<f32>,
    layers: usize,
    lats: Vec<f64>,
    lons: Vec<f64>,
    pub metadata: FieldMetadata,
}

impl RawComposite {
    pub fn new(
        data: Vec<f32>,
        layers: usize,
        lats: Vec<f64>,
        lons: Vec<f64>,
        metadata: FieldMetadata,
    ) -> SstResult<Self> {
        if layers == 0 {
            return Err(SstError::EmptyAxis("layer".to_string()));
        }
        if AxisOrder::of(&lats).is_none() {
            return Err(SstError::NonMonotonicAxis("lat".to_string()));
        }
        if AxisOrder::of(&lons).is_none() {
            return Err(SstError::NonMonotonicAxis("lon".to_string()));
        }
        let expected = layers * lats.len() * lons.len();
        if data.len() != expected {
            return Err(SstError::shape_mismatch("composite data", expected, data.len()));
        }
        Ok(Self {
            data,
            layers,
            lats,
            lons,
            metadata,
        })
    }

    /// Stack equally-shaped planes along a new leading axis.
    pub fn stack(
        planes: &[&[f32]],
        lats: Vec<f64>,
        lons: Vec<f64>,
        metadata: FieldMetadata,
    ) -> SstResult<Self> {
        let plane_len = lats.len() * lons.len();
        let mut data = Vec::with_capacity(planes.len() * plane_len);
        for (idx, plane) in planes.iter().enumerate() {
            if plane.len() != plane_len {
                return Err(SstError::shape_mismatch(
                    format!("stacked plane {idx}"),
                    plane_len,
                    plane.len(),
                ));
            }
            data.extend_from_slice(plane);
        }
        Self::new(data, planes.len(), lats, lons, metadata)
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Cells per layer.
    pub fn plane_len(&self) -> usize {
        self.lats.len() * self.lons.len()
    }

    pub fn layer(&self, idx: usize) -> Option<&[f32]> {
        if idx >= self.layers {
            return None;
        }
        let start = idx * self.plane_len();
        Some(&self.data[start..start + self.plane_len()])
    }

    pub fn into_parts(self) -> (Vec<f32>, usize, Vec<f64>, Vec<f64>, FieldMetadata) {
        (self.data, self.layers, self.lats, self.lons, self.metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_and_layer() {
        let day = [1.0f32, 2.0];
        let night = [3.0f32, 4.0];
        let stack = RawComposite::stack(
            &[&day, &night],
            vec![0.0],
            vec![0.0, 1.0],
            FieldMetadata::default(),
        )
        .unwrap();
        assert_eq!(stack.layers(), 2);
        assert_eq!(stack.layer(1), Some(&night[..]));
        assert_eq!(stack.layer(2), None);
    }

    #[test]
    fn test_stack_rejects_mismatched_plane() {
        let err = RawComposite::stack(
            &[&[1.0, 2.0], &[3.0]],
            vec![0.0],
            vec![0.0, 1.0],
            FieldMetadata::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SstError::ShapeMismatch { expected: 2, actual: 1, .. }));
    }
}

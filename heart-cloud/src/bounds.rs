use bevy::math::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{HeartCloudError, Result};

/// Axis-aligned region that rejection-sampling candidates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: max.y,
            min_z: min.z,
            max_z: max.z,
        }
    }

    /// Cube centred on the origin.
    pub fn cube(half_extent: f32) -> Self {
        Self::new(Vec3::splat(-half_extent), Vec3::splat(half_extent))
    }

    pub fn min(&self) -> Vec3 {
        Vec3::new(self.min_x, self.min_y, self.min_z)
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.max_x + self.min_x) * 0.5,
            (self.max_y + self.min_y) * 0.5,
            (self.max_z + self.min_z) * 0.5,
        )
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }

    pub fn volume(&self) -> f32 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Rejects boxes that are flat, inverted or not finite on any axis.
    pub fn validate(&self) -> Result<()> {
        let size = self.size();
        if !self.min().is_finite() || !size.is_finite() {
            return Err(HeartCloudError::invalid(format!(
                "bounding box has non-finite extents: {self:?}"
            )));
        }
        if size.min_element() <= 0.0 {
            return Err(HeartCloudError::invalid(format!(
                "bounding box has zero volume: size ({:.3}, {:.3}, {:.3})",
                size.x, size.y, size.z
            )));
        }
        Ok(())
    }

    /// Uniform point inside the box. Draws x, then y, then z.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let size = self.size();
        let x = self.min_x + rng.gen_range(0.0..1.0_f32) * size.x;
        let y = self.min_y + rng.gen_range(0.0..1.0_f32) * size.y;
        let z = self.min_z + rng.gen_range(0.0..1.0_f32) * size.z;
        Vec3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn cube_dimensions() {
        let cube = BoundingBox::cube(1.5);
        assert_eq!(cube.center(), Vec3::ZERO);
        assert_eq!(cube.size(), Vec3::splat(3.0));
        assert!((cube.volume() - 27.0).abs() < 1e-5);
        assert!(cube.validate().is_ok());
    }

    #[test]
    fn flat_and_inverted_boxes_are_rejected() {
        let flat = BoundingBox::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert!(matches!(
            flat.validate(),
            Err(HeartCloudError::InvalidConfiguration(_))
        ));

        let inverted = BoundingBox::new(Vec3::splat(1.0), Vec3::splat(-1.0));
        assert!(inverted.validate().is_err());

        let unbounded = BoundingBox::new(Vec3::splat(-1.0), Vec3::new(f32::INFINITY, 1.0, 1.0));
        assert!(unbounded.validate().is_err());
    }

    #[test]
    fn samples_stay_inside() {
        let bounds = BoundingBox::new(Vec3::new(-2.0, 0.0, 1.0), Vec3::new(-1.0, 4.0, 1.5));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = bounds.sample(&mut rng);
            assert!(p.x >= -2.0 && p.x <= -1.0);
            assert!(p.y >= 0.0 && p.y <= 4.0);
            assert!(p.z >= 1.0 && p.z <= 1.5);
        }
    }
}

use bevy::math::{Mat3, Vec3};

/// Field space to scene space: -90° about X, so field +Z (the heart's up axis)
/// becomes scene +Y and field +Y points away from the camera.
///
/// Columns are the images of the field X, Y and Z axes.
pub const FIELD_TO_SCENE: Mat3 = Mat3::from_cols(
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(0.0, 1.0, 0.0),
);

/// `(x, y, z)` in field space becomes `(x, z, -y)` in scene space.
pub fn field_to_scene(point: Vec3) -> Vec3 {
    FIELD_TO_SCENE * point
}

/// Inverse of [`field_to_scene`].
pub fn scene_to_field(point: Vec3) -> Vec3 {
    FIELD_TO_SCENE.transpose() * point
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_up_becomes_scene_up() {
        assert_eq!(field_to_scene(Vec3::Z), Vec3::Y);
        assert_eq!(field_to_scene(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn round_trip_is_exact_for_axis_swaps() {
        let p = Vec3::new(0.25, -1.5, 0.75);
        assert_eq!(scene_to_field(field_to_scene(p)), p);
    }
}

use std::f32::consts::TAU;

use bevy::math::Vec3;
use constants::coordinate_system::field_to_scene;
use constants::heart::{FIELD_BAND_MAX, FIELD_BAND_MIN};
use rand::Rng;

use crate::bounds::BoundingBox;

/// One sampling attempt against a target shape.
///
/// Returns `None` when the candidate is rejected; the generator retries until it
/// has enough particles or its attempt budget runs out.
pub trait ShapeSampler {
    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec3>;
}

/// Classic heart outline in the XY plane, spanning roughly x ∈ [-16, 16], y ∈ [-17, 12].
pub fn heart_curve(t: f32) -> (f32, f32) {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    (x, y)
}

/// Heart-shaped solid: negative inside, zero on the surface. Z is "up".
pub fn heart_field(p: Vec3) -> f32 {
    let (x2, y2) = (p.x * p.x, p.y * p.y);
    let z3 = p.z * p.z * p.z;
    let a = x2 + 2.25 * y2 + p.z * p.z - 1.0;
    a * a * a - x2 * z3 - (9.0 / 80.0) * y2 * z3
}

/// True when `value` lies in the accepted shell band `(FIELD_BAND_MIN, FIELD_BAND_MAX]`.
pub fn in_field_band(value: f32) -> bool {
    value > FIELD_BAND_MIN && value <= FIELD_BAND_MAX
}

/// Symmetric uniform offset in `[-width / 2, width / 2)`.
fn centred<R: Rng + ?Sized>(rng: &mut R, width: f32) -> f32 {
    (rng.gen_range(0.0..1.0_f32) - 0.5) * width
}

/// Samples the heart outline with a random depth and per-axis jitter.
/// Never rejects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricHeart {
    pub scale: f32,
    pub depth_range: f32,
    pub jitter: f32,
}

impl ShapeSampler for ParametricHeart {
    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec3> {
        let t = rng.gen_range(0.0..TAU);
        let (x, y) = heart_curve(t);

        let depth = centred(rng, self.depth_range);
        let jx = centred(rng, self.jitter);
        let jy = centred(rng, self.jitter);
        let jz = centred(rng, self.jitter);

        Some(Vec3::new(
            x * self.scale + jx,
            y * self.scale + jy,
            depth + jz,
        ))
    }
}

/// Rejection sampler for the shell `heart_field ∈ (-0.5, 0]`.
///
/// Accepted points are fuzzed, then rotated from field space (Z up) into scene
/// space (Y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplicitHeart {
    pub bounding_box: BoundingBox,
    pub fuzz: f32,
}

impl ImplicitHeart {
    /// Draw a candidate and return it in field space if it lies in the shell.
    pub fn accept_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec3> {
        let candidate = self.bounding_box.sample(rng);
        in_field_band(heart_field(candidate)).then_some(candidate)
    }
}

impl ShapeSampler for ImplicitHeart {
    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec3> {
        let p = self.accept_candidate(rng)?;

        let fuzzed = Vec3::new(
            p.x + centred(rng, self.fuzz),
            p.y + centred(rng, self.fuzz),
            p.z + centred(rng, self.fuzz),
        );
        Some(field_to_scene(fuzzed))
    }
}

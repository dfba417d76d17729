use bevy::log::{debug, info};
use constants::heart::ATTEMPT_BUDGET_FACTOR;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GeneratorConfig, ShapeKind};
use crate::error::{HeartCloudError, Result};
use crate::particle_set::ParticleSet;
use crate::sampler::{ImplicitHeart, ParametricHeart, ShapeSampler};

/// Seeded when a seed is given, otherwise seeded from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Build a particle set of exactly `config.particle_count` particles.
///
/// Pure apart from the random source: the same seeded `rng` state always yields
/// the same set.
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<ParticleSet> {
    config.validate()?;

    let particles = match config.shape {
        ShapeKind::Parametric { scale, depth_range } => {
            let sampler = ParametricHeart {
                scale,
                depth_range,
                jitter: config.jitter,
            };
            fill(config, &sampler, rng)?
        }
        ShapeKind::Implicit { bounding_box } => {
            let sampler = ImplicitHeart {
                bounding_box,
                fuzz: config.jitter,
            };
            fill(config, &sampler, rng)?
        }
    };

    info!(
        "Generated heart point cloud: {} particles ({})",
        particles.len(),
        match config.shape {
            ShapeKind::Parametric { .. } => "parametric",
            ShapeKind::Implicit { .. } => "implicit",
        }
    );

    Ok(particles)
}

fn fill<S: ShapeSampler, R: Rng + ?Sized>(
    config: &GeneratorConfig,
    sampler: &S,
    rng: &mut R,
) -> Result<ParticleSet> {
    let target = config.particle_count;
    let budget = target.saturating_mul(ATTEMPT_BUDGET_FACTOR);
    let mut particles = ParticleSet::with_capacity(target)?;
    let mut attempts = 0;

    while particles.len() < target {
        if attempts >= budget {
            return Err(HeartCloudError::GenerationBudgetExceeded {
                target,
                accepted: particles.len(),
                attempts,
            });
        }
        attempts += 1;

        if let Some(position) = sampler.attempt(rng) {
            let mix = rng.gen_range(0.0..1.0_f32);
            particles.push(position, config.colour_a.lerp(&config.colour_b, mix));
        }
    }

    debug!(
        "Accepted {} of {} attempts ({:.1}%)",
        target,
        attempts,
        target as f64 / attempts as f64 * 100.0
    );

    Ok(particles)
}

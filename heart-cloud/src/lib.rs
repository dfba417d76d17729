//! Procedural heart point clouds.
//!
//! Generates a fixed-size [`ParticleSet`] from a [`GeneratorConfig`] and animates it
//! with a stateless per-frame display transform. Everything here is independent of
//! the ECS; the render engine wraps these types in resources.

pub mod bounds;
pub mod colour;
pub mod config;
pub mod display_transform;
pub mod error;
pub mod generator;
pub mod overlay;
pub mod particle_set;
pub mod sampler;
pub mod scheduler;
pub mod viewport;

pub use bounds::BoundingBox;
pub use colour::ParticleColour;
pub use config::{GeneratorConfig, ShapeKind};
pub use display_transform::{GroupPose, HeartAnimation, HeartbeatParams, PulseParams, SwayParams};
pub use error::{HeartCloudError, Result};
pub use generator::{generate, rng_from_seed};
pub use overlay::{Overlay, OverlayCue, OverlayKind, OverlayPhase};
pub use particle_set::{Particle, ParticleSet};
pub use sampler::{ImplicitHeart, ParametricHeart, ShapeSampler};
pub use scheduler::{FrameScheduler, FrameTick};

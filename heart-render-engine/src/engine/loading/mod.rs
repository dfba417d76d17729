//! Manifest loading and heart creation.
//!
//! Loads the JSON manifest, generates the particle set and spawns the scene
//! once the configuration is available.

/// Heart manifest loading with preset fallback on failure.
pub mod manifest_loader;

/// Particle generation and entity spawning after the manifest is available.
pub mod heart_creator;

/// Loading progress tracking resource for state transitions.
pub mod progress;

//! Heart manifest asset describing one complete heart scene.
//!
//! Bundles generator configuration, animation, sprite appearance and camera
//! placement in a single JSON file.

/// Manifest structure, presets and conversions into engine settings.
pub mod heart_manifest;

//! Shared constants for the heart point cloud workspace.

pub mod animation;
pub mod coordinate_system;
pub mod heart;
pub mod render_settings;

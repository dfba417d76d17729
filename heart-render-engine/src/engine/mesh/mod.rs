//! Mesh generation for point sprite rendering.
//!
//! Each particle becomes a four-vertex quad; the vertex shader expands the quad
//! around the particle centre so it always faces the camera.

/// Sprite quad mesh creation and in-place position updates.
pub mod sprite_mesh;

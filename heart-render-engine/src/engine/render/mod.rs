//! Point sprite material.
//!
//! Custom material binding sprite size, opacity, alpha cutoff and fog to the
//! sprite WGSL shader, with additive or alpha blending.
pub mod sprite_material;

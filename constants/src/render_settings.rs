use bevy::prelude::*;

/// Sprite appearance handed to the point sprite material.
#[derive(Clone, Copy, Debug)]
pub struct SpriteSettings {
    pub size: f32,
    pub opacity: f32,
    pub alpha_cutoff: f32,
    pub additive: bool,
}

pub const SPARKLE_SPRITES: SpriteSettings = SpriteSettings {
    size: 0.16,
    opacity: 0.9,
    alpha_cutoff: 0.0,
    additive: true,
};

pub const SOLID_SPRITES: SpriteSettings = SpriteSettings {
    size: 0.07,
    opacity: 0.9,
    alpha_cutoff: 0.1,
    additive: false,
};

/// Exponential-squared fog densities.
pub const SPARKLE_FOG_DENSITY: f32 = 0.09;
pub const SOLID_FOG_DENSITY: f32 = 0.002;

pub const SPARKLE_CAMERA_FOV_DEGREES: f32 = 45.0;
pub const SPARKLE_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 18.0);

pub const SOLID_CAMERA_FOV_DEGREES: f32 = 75.0;
pub const SOLID_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 4.0);
pub const SOLID_CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, 0.3, 0.0);
pub const SOLID_HEART_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.0);

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// High-DPI displays are rendered at no more than this pixel ratio.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Fallback clear colour used before a manifest is available.
pub const DEFAULT_CLEAR_COLOUR: Color = Color::srgb(0.0196, 0.0196, 0.0627);

/// Page backgrounds; the fog fades particles towards the same colour.
pub const SPARKLE_BACKGROUND: &str = "#050510";
pub const SOLID_BACKGROUND: &str = "#ffeff5";

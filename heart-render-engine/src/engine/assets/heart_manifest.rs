use bevy::prelude::*;
use constants::render_settings::{
    SOLID_BACKGROUND, SOLID_CAMERA_FOV_DEGREES, SOLID_CAMERA_LOOK_AT, SOLID_CAMERA_POSITION,
    SOLID_FOG_DENSITY, SOLID_HEART_OFFSET, SOLID_SPRITES, SPARKLE_BACKGROUND,
    SPARKLE_CAMERA_FOV_DEGREES, SPARKLE_CAMERA_POSITION, SPARKLE_FOG_DENSITY, SPARKLE_SPRITES,
    SpriteSettings,
};
use heart_cloud::{GeneratorConfig, HeartAnimation, ParticleColour};
use serde::{Deserialize, Serialize};

/// Point sprite appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteManifest {
    pub size: f32,
    pub opacity: f32,
    /// Fragments with alpha below this are discarded.
    #[serde(default)]
    pub alpha_cutoff: f32,
    /// Additive blending instead of alpha blending.
    #[serde(default)]
    pub additive: bool,
}

impl From<SpriteSettings> for SpriteManifest {
    fn from(settings: SpriteSettings) -> Self {
        Self {
            size: settings.size,
            opacity: settings.opacity,
            alpha_cutoff: settings.alpha_cutoff,
            additive: settings.additive,
        }
    }
}

/// Exponential-squared fog towards `colour`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogManifest {
    pub colour: ParticleColour,
    pub density: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraManifest {
    pub fov_degrees: f32,
    pub position: [f32; 3],
    #[serde(default)]
    pub look_at: [f32; 3],
}

impl CameraManifest {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.position))
            .looking_at(Vec3::from_array(self.look_at), Vec3::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    pub background: ParticleColour,
    #[serde(default)]
    pub fog: Option<FogManifest>,
    pub camera: CameraManifest,
    /// Translation of the whole heart.
    #[serde(default)]
    pub offset: [f32; 3],
}

impl SceneSettings {
    pub fn clear_colour(&self) -> Color {
        Color::srgb(self.background.r, self.background.g, self.background.b)
    }
}

/// Complete heart scene as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartManifest {
    pub name: String,
    pub generator: GeneratorConfig,
    /// Fixed seed for a reproducible cloud; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub animation: HeartAnimation,
    pub sprites: SpriteManifest,
    pub scene: SceneSettings,
}

impl HeartManifest {
    /// Jittered outline heart that beats, sparkles and sways.
    pub fn sparkling() -> Self {
        let background = preset_colour(SPARKLE_BACKGROUND);
        Self {
            name: "sparkling".to_string(),
            generator: GeneratorConfig::sparkling(),
            seed: None,
            animation: HeartAnimation::sparkling(),
            sprites: SPARKLE_SPRITES.into(),
            scene: SceneSettings {
                background,
                fog: Some(FogManifest {
                    colour: background,
                    density: SPARKLE_FOG_DENSITY,
                }),
                camera: CameraManifest {
                    fov_degrees: SPARKLE_CAMERA_FOV_DEGREES,
                    position: SPARKLE_CAMERA_POSITION.to_array(),
                    look_at: [0.0; 3],
                },
                offset: [0.0; 3],
            },
        }
    }

    /// Dense surface heart with a whole-body pulse.
    pub fn solid() -> Self {
        let background = preset_colour(SOLID_BACKGROUND);
        Self {
            name: "solid".to_string(),
            generator: GeneratorConfig::solid(),
            seed: None,
            animation: HeartAnimation::pulsing(),
            sprites: SOLID_SPRITES.into(),
            scene: SceneSettings {
                background,
                fog: Some(FogManifest {
                    colour: background,
                    density: SOLID_FOG_DENSITY,
                }),
                camera: CameraManifest {
                    fov_degrees: SOLID_CAMERA_FOV_DEGREES,
                    position: SOLID_CAMERA_POSITION.to_array(),
                    look_at: SOLID_CAMERA_LOOK_AT.to_array(),
                },
                offset: SOLID_HEART_OFFSET.to_array(),
            },
        }
    }

    pub fn heart_offset(&self) -> Vec3 {
        Vec3::from_array(self.scene.offset)
    }
}

fn preset_colour(hex: &str) -> ParticleColour {
    ParticleColour::from_hex(hex).unwrap_or(ParticleColour::WHITE)
}

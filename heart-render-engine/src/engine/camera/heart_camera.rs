use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;
use constants::render_settings::{CAMERA_FAR, CAMERA_NEAR};

use crate::engine::assets::heart_manifest::CameraManifest;

#[derive(Component)]
pub struct HeartCamera;

pub fn perspective_for(camera: &CameraManifest, aspect_ratio: f32) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: camera.fov_degrees.to_radians(),
        aspect_ratio,
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
    }
}

/// Spawn the fixed camera. Tonemapping is off so sprite colours reach the
/// screen as authored.
pub fn spawn_heart_camera(commands: &mut Commands, camera: &CameraManifest, aspect_ratio: f32) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective_for(camera, aspect_ratio)),
        Tonemapping::None,
        camera.transform(),
        HeartCamera,
    ));

    println!(
        "Camera placed at {:?} with {:.0}° field of view",
        camera.position, camera.fov_degrees
    );
}

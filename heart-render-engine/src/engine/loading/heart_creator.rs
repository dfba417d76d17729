use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use bevy::window::PrimaryWindow;
use heart_cloud::{ParticleSet, generate, rng_from_seed};

use crate::engine::assets::heart_manifest::HeartManifest;
use crate::engine::camera::heart_camera::spawn_heart_camera;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::sprite_mesh::{HeartSprites, create_sprite_mesh};
use crate::engine::render::sprite_material::HeartSpriteMaterial;
use crate::engine::systems::animation::HeartCloud;
use crate::engine::systems::viewport::ViewportState;
use crate::rpc::web_rpc::WebRpcInterface;

/// Generate the manifest's particle set, falling back to the sparkling preset
/// when the manifest's configuration is rejected.
pub fn generate_particles(manifest: &HeartManifest) -> (HeartManifest, ParticleSet) {
    let mut rng = rng_from_seed(manifest.seed);
    match generate(&manifest.generator, &mut rng) {
        Ok(particles) => (manifest.clone(), particles),
        Err(generation_error) => {
            error!(
                "Heart '{}' could not be generated: {}; using the sparkling preset",
                manifest.name, generation_error
            );
            let fallback = HeartManifest {
                seed: manifest.seed,
                ..HeartManifest::sparkling()
            };
            let particles = generate(&fallback.generator, &mut rng).unwrap_or_else(|preset_error| {
                error!("Sparkling preset failed to generate: {}", preset_error);
                ParticleSet::default()
            });
            (fallback, particles)
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_heart_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest: Option<Res<HeartManifest>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<HeartSpriteMaterial>>,
    mut viewport: ResMut<ViewportState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if loading_progress.heart_created || !loading_progress.manifest_loaded {
        return;
    }

    let Some(manifest) = manifest else {
        return;
    };

    if let Ok(window) = windows.single() {
        if let Err(error) = viewport.sync_with_window(window) {
            debug!("Window not sized yet: {}", error);
        }
    }

    let (manifest, particles) = generate_particles(&manifest);
    let particle_count = particles.len();

    commands.insert_resource(ClearColor(manifest.scene.clear_colour()));
    spawn_heart_camera(&mut commands, &manifest.scene.camera, viewport.aspect_ratio);

    let mesh = meshes.add(create_sprite_mesh(&particles));
    let heart = HeartCloud::new(
        particles,
        manifest.animation,
        mesh.clone(),
        manifest.heart_offset(),
    );

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(materials.add(HeartSpriteMaterial::from_manifest(&manifest))),
        heart.transform_at(0.0),
        HeartSprites,
        NotShadowCaster,
        // Sprites extend past the centre-only bounding box.
        NoFrustumCulling,
    ));

    commands.insert_resource(heart);
    commands.insert_resource(manifest.clone());

    loading_progress.heart_created = true;
    rpc_interface.send_notification(
        "heart_ready",
        serde_json::json!({
            "name": manifest.name,
            "particles": particle_count,
            "fallback": loading_progress.used_fallback,
        }),
    );
    println!(
        "✓ Heart '{}' spawned with {} particles",
        manifest.name, particle_count
    );
}

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::path::RELATIVE_MANIFEST_PATH;
#[cfg(not(target_arch = "wasm32"))]
use crate::constants::path::MANIFEST_ENV_VAR;
use crate::engine::assets::heart_manifest::HeartManifest;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<HeartManifest>>,
}

/// Manifest path relative to the asset root. Native builds honour `HEART_MANIFEST`.
pub fn manifest_path() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(path) = std::env::var(MANIFEST_ENV_VAR) {
            if !path.trim().is_empty() {
                return path;
            }
        }
    }

    RELATIVE_MANIFEST_PATH.to_string()
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = manifest_path();
    info!("Loading heart manifest from: {}", manifest_path);
    manifest_loader.handle = Some(asset_server.load(manifest_path));
}

// Insert the manifest as a resource once loaded, or the preset if loading failed
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<HeartManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        println!("✓ Heart manifest '{}' loaded", manifest.name);
        commands.insert_resource(manifest.clone());
        loading_progress.manifest_loaded = true;
        return;
    }

    if let Some(LoadState::Failed(load_error)) = asset_server.get_load_state(handle) {
        warn!(
            "Heart manifest failed to load ({}); using the sparkling preset",
            load_error
        );
        commands.insert_resource(HeartManifest::sparkling());
        loading_progress.manifest_loaded = true;
        loading_progress.used_fallback = true;
    }
}

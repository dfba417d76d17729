use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    /// Set when the manifest could not be read and the sparkling preset is used instead.
    pub used_fallback: bool,
    pub heart_created: bool,
}

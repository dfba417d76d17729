/// Heart manifest loaded at startup, relative to the asset root.
pub const RELATIVE_MANIFEST_PATH: &str = "heart/manifest.json";

/// Native builds read an alternative manifest path from this variable,
/// e.g. `HEART_MANIFEST=heart/solid.json`.
pub const MANIFEST_ENV_VAR: &str = "HEART_MANIFEST";

/// Point sprite shader, relative to the asset root.
pub const SPRITE_SHADER_PATH: &str = "shaders/heart_sprite.wgsl";

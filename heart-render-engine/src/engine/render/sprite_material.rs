use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};

use crate::constants::path::SPRITE_SHADER_PATH;
use crate::engine::assets::heart_manifest::{HeartManifest, SpriteManifest};

/// Camera-facing point sprites with a soft circular mask and exp² fog.
///
/// `params[0]`: size, opacity, alpha cutoff, additive flag.
/// `params[1]`: fog colour (rgb) and density; zero density disables fog.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct HeartSpriteMaterial {
    #[uniform(0)]
    pub params: [Vec4; 2],
    pub alpha_mode: AlphaMode,
}

impl HeartSpriteMaterial {
    pub fn from_manifest(manifest: &HeartManifest) -> Self {
        let sprites = manifest.sprites;
        let fog = manifest
            .scene
            .fog
            .map(|fog| Vec4::new(fog.colour.r, fog.colour.g, fog.colour.b, fog.density))
            .unwrap_or(Vec4::ZERO);

        Self {
            params: [sprite_params(&sprites), fog],
            alpha_mode: sprite_alpha_mode(&sprites),
        }
    }

    pub fn is_additive(&self) -> bool {
        self.params[0].w > 0.5
    }
}

fn sprite_params(sprites: &SpriteManifest) -> Vec4 {
    Vec4::new(
        sprites.size,
        sprites.opacity.clamp(0.0, 1.0),
        sprites.alpha_cutoff.clamp(0.0, 1.0),
        if sprites.additive { 1.0 } else { 0.0 },
    )
}

fn sprite_alpha_mode(sprites: &SpriteManifest) -> AlphaMode {
    if sprites.additive {
        AlphaMode::Add
    } else {
        AlphaMode::Blend
    }
}

impl Material for HeartSpriteMaterial {
    fn vertex_shader() -> ShaderRef {
        SPRITE_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SPRITE_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Position, quad corner and colour only; locations match the WGSL vertex input.
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(2),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(5),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkle_preset_is_additive_with_fog() {
        let material = HeartSpriteMaterial::from_manifest(&HeartManifest::sparkling());
        assert!(material.is_additive());
        assert_eq!(material.alpha_mode, AlphaMode::Add);
        assert_eq!(material.params[0].x, 0.16);
        assert_eq!(material.params[1].w, 0.09);
    }

    #[test]
    fn solid_preset_blends_with_cutoff() {
        let material = HeartSpriteMaterial::from_manifest(&HeartManifest::solid());
        assert!(!material.is_additive());
        assert_eq!(material.alpha_mode, AlphaMode::Blend);
        assert_eq!(material.params[0].z, 0.1);
    }

    #[test]
    fn missing_fog_disables_it() {
        let mut manifest = HeartManifest::solid();
        manifest.scene.fog = None;
        let material = HeartSpriteMaterial::from_manifest(&manifest);
        assert_eq!(material.params[1], Vec4::ZERO);
    }
}

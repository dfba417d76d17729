use bevy::prelude::*;
use heart_cloud::{HeartAnimation, ParticleSet};

use crate::engine::mesh::sprite_mesh::{HeartSprites, write_sprite_positions};
use crate::engine::systems::frame_loop::HeartFrameLoop;

/// The generated base set and how it moves. The base set is never modified;
/// display positions are recomputed into `display` every frame.
#[derive(Resource)]
pub struct HeartCloud {
    pub particles: ParticleSet,
    pub animation: HeartAnimation,
    pub mesh: Handle<Mesh>,
    /// Translation of the whole heart in the scene.
    pub offset: Vec3,
    display: Vec<Vec3>,
}

impl HeartCloud {
    pub fn new(
        particles: ParticleSet,
        animation: HeartAnimation,
        mesh: Handle<Mesh>,
        offset: Vec3,
    ) -> Self {
        Self {
            display: Vec::with_capacity(particles.len()),
            particles,
            animation,
            mesh,
            offset,
        }
    }

    /// Heart transform at `elapsed_secs` of running animation time.
    pub fn transform_at(&self, elapsed_secs: f32) -> Transform {
        let pose = self
            .animation
            .group_pose(self.animation.animation_time(elapsed_secs));
        Transform {
            translation: self.offset,
            rotation: pose.rotation,
            scale: Vec3::splat(pose.scale),
        }
    }
}

pub fn animate_heart(
    frame_loop: Res<HeartFrameLoop>,
    heart: Option<ResMut<HeartCloud>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut sprites: Query<&mut Transform, With<HeartSprites>>,
) {
    let (Some(tick), Some(mut heart)) = (frame_loop.last_tick(), heart) else {
        return;
    };

    for mut transform in &mut sprites {
        *transform = heart.transform_at(tick.elapsed_secs);
    }

    if !heart.animation.moves_particles() {
        return;
    }

    let time = heart.animation.animation_time(tick.elapsed_secs);
    let heart = &mut *heart;
    heart
        .animation
        .write_display_positions(&heart.particles, time, &mut heart.display);

    if let Some(mesh) = meshes.get_mut(&heart.mesh) {
        if !write_sprite_positions(mesh, &heart.display) {
            warn!("Heart mesh layout no longer matches the particle set");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heart_cloud::{GeneratorConfig, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cloud(animation: HeartAnimation, offset: Vec3) -> HeartCloud {
        let config = GeneratorConfig::sparkling().with_particle_count(8);
        let particles = generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        HeartCloud::new(particles, animation, Handle::default(), offset)
    }

    #[test]
    fn still_heart_sits_at_its_offset() {
        let heart = cloud(HeartAnimation::pulsing(), Vec3::new(0.0, 0.6, 0.0));
        let transform = heart.transform_at(0.0);
        assert_eq!(transform.translation, Vec3::new(0.0, 0.6, 0.0));
        assert_eq!(transform.rotation, Quat::IDENTITY);
        assert!((transform.scale.x - 1.0).abs() < 1e-3);
    }

    #[test]
    fn pulse_scales_uniformly() {
        let heart = cloud(HeartAnimation::pulsing(), Vec3::ZERO);
        let transform = heart.transform_at(0.35);
        assert!(transform.scale.x >= 1.0);
        assert_eq!(transform.scale.x, transform.scale.y);
        assert_eq!(transform.scale.y, transform.scale.z);
    }
}

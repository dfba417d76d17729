use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;
use heart_cloud::ParticleSet;

/// Vertices emitted per particle; the vertex shader offsets each corner by its UV.
pub const VERTICES_PER_SPRITE: usize = 4;

/// Quad corners in the order the index buffer winds them.
const CORNER_UVS: [[f32; 2]; VERTICES_PER_SPRITE] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Marker for the entity holding the heart sprite mesh.
#[derive(Component)]
pub struct HeartSprites;

/// Build the sprite mesh for `particles`: one camera-facing quad per particle,
/// every corner carrying the particle centre, a UV corner and the particle colour.
///
/// The mesh keeps a main-world copy so positions can be rewritten each frame.
pub fn create_sprite_mesh(particles: &ParticleSet) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());

    let centres: Vec<Vec3> = particles.base_positions().collect();
    let uvs: Vec<[f32; 2]> = (0..particles.len()).flat_map(|_| CORNER_UVS).collect();
    let colours: Vec<[f32; 4]> = particles
        .colours()
        .chunks_exact(3)
        .flat_map(|rgb| [[rgb[0], rgb[1], rgb[2], 1.0]; VERTICES_PER_SPRITE])
        .collect();

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, expand_positions(&centres));
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh.insert_indices(Indices::U32(quad_indices(particles.len())));
    mesh
}

/// Repeat every centre once per quad corner.
pub fn expand_positions(centres: &[Vec3]) -> Vec<[f32; 3]> {
    centres
        .iter()
        .flat_map(|centre| [centre.to_array(); VERTICES_PER_SPRITE])
        .collect()
}

/// Two triangles per quad: (0, 1, 2) and (0, 2, 3).
pub fn quad_indices(sprite_count: usize) -> Vec<u32> {
    (0..sprite_count as u32)
        .flat_map(|sprite| {
            let base = sprite * VERTICES_PER_SPRITE as u32;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect()
}

/// Overwrite the quad centres in place. Returns false if the mesh layout does
/// not match `centres`.
pub fn write_sprite_positions(mesh: &mut Mesh, centres: &[Vec3]) -> bool {
    let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    else {
        return false;
    };

    if positions.len() != centres.len() * VERTICES_PER_SPRITE {
        return false;
    }

    for (corners, centre) in positions
        .chunks_exact_mut(VERTICES_PER_SPRITE)
        .zip(centres)
    {
        corners.fill(centre.to_array());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use heart_cloud::{GeneratorConfig, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_set() -> ParticleSet {
        let config = GeneratorConfig::sparkling().with_particle_count(12);
        generate(&config, &mut StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn mesh_has_four_vertices_per_particle() {
        let particles = small_set();
        let mesh = create_sprite_mesh(&particles);

        assert_eq!(mesh.count_vertices(), 12 * VERTICES_PER_SPRITE);
        assert_eq!(mesh.indices().map(|indices| indices.len()), Some(12 * 6));

        let Some(VertexAttributeValues::Float32x4(colours)) = mesh.attribute(Mesh::ATTRIBUTE_COLOR)
        else {
            panic!("colour attribute missing");
        };
        let first = particles.colour(0).unwrap();
        assert_eq!(colours[3], [first.r, first.g, first.b, 1.0]);
    }

    #[test]
    fn indices_stay_inside_their_quad() {
        let indices = quad_indices(3);
        assert_eq!(&indices[6..12], &[4, 5, 6, 4, 6, 7]);
        assert!(indices.iter().all(|&i| i < 12));
    }

    #[test]
    fn positions_are_rewritten_in_place() {
        let particles = small_set();
        let mut mesh = create_sprite_mesh(&particles);
        let moved: Vec<Vec3> = particles.base_positions().map(|p| p * 2.0).collect();

        assert!(write_sprite_positions(&mut mesh, &moved));
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("position attribute missing");
        };
        assert_eq!(positions[5], moved[1].to_array());
        assert_eq!(positions[7], moved[1].to_array());
    }

    #[test]
    fn mismatched_lengths_are_refused() {
        let particles = small_set();
        let mut mesh = create_sprite_mesh(&particles);
        assert!(!write_sprite_positions(&mut mesh, &[Vec3::ZERO]));
    }
}

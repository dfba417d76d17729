use bevy::math::Vec3;
use constants::coordinate_system::scene_to_field;
use heart_cloud::sampler::{ImplicitHeart, ShapeSampler, heart_field, in_field_band};
use heart_cloud::{
    BoundingBox, GeneratorConfig, HeartAnimation, HeartCloudError, HeartbeatParams,
    ParticleColour, ShapeKind, generate,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn channel() -> impl Strategy<Value = f32> {
    0.0f32..=1.0
}

fn colour() -> impl Strategy<Value = ParticleColour> {
    (channel(), channel(), channel()).prop_map(|(r, g, b)| ParticleColour::rgb(r, g, b))
}

fn shape() -> impl Strategy<Value = ShapeKind> {
    prop_oneof![
        (0.01f32..1.0, 0.0f32..3.0)
            .prop_map(|(scale, depth_range)| ShapeKind::Parametric { scale, depth_range }),
        Just(ShapeKind::Implicit {
            bounding_box: BoundingBox::cube(1.5)
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn count_and_array_lengths_match(
        count in 1usize..400,
        shape in shape(),
        colour_a in colour(),
        colour_b in colour(),
        jitter in 0.0f32..0.5,
        seed in any::<u64>(),
    ) {
        let config = GeneratorConfig { particle_count: count, shape, colour_a, colour_b, jitter };
        let set = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(set.len(), count);
        prop_assert_eq!(set.positions().len(), 3 * count);
        prop_assert_eq!(set.colours().len(), 3 * count);
        prop_assert!(set.colours().iter().all(|c| (0.0..=1.0).contains(c)));
        prop_assert!(set.positions().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn same_seed_same_cloud(seed in any::<u64>(), count in 1usize..200) {
        let config = GeneratorConfig::solid().with_particle_count(count);
        let a = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn accepted_candidates_lie_in_shell(seed in any::<u64>()) {
        let sampler = ImplicitHeart { bounding_box: BoundingBox::cube(1.5), fuzz: 0.05 };
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..500 {
            if let Some(candidate) = sampler.accept_candidate(&mut rng) {
                prop_assert!(in_field_band(heart_field(candidate)));
            }
        }
    }

    #[test]
    fn still_transform_is_identity_at_time_zero(
        x in -2.0f32..2.0, y in -2.0f32..2.0, z in -2.0f32..2.0, index in 0usize..20_000,
    ) {
        let still = HeartbeatParams { amplitude: 0.0, sparkle_amplitude: 0.0, ..HeartbeatParams::SPARKLING };
        let base = Vec3::new(x, y, z);
        prop_assert_eq!(still.display_position(base, index, 0.0), base);
    }
}

#[test]
fn sampler_output_is_the_rotated_shell() {
    let sampler = ImplicitHeart {
        bounding_box: BoundingBox::cube(1.5),
        fuzz: 0.0,
    };
    let mut rng = StdRng::seed_from_u64(2024);
    let accepted: Vec<Vec3> = (0..5000).filter_map(|_| sampler.attempt(&mut rng)).collect();

    assert!(!accepted.is_empty());
    for scene in accepted {
        assert!(in_field_band(heart_field(scene_to_field(scene))));
    }
}

#[test]
fn degenerate_inputs_are_configuration_errors() {
    let mut rng = StdRng::seed_from_u64(0);

    let empty = GeneratorConfig::sparkling().with_particle_count(0);
    assert!(matches!(
        generate(&empty, &mut rng),
        Err(HeartCloudError::InvalidConfiguration(_))
    ));

    let mut flat = GeneratorConfig::solid();
    flat.shape = ShapeKind::Implicit {
        bounding_box: BoundingBox::new(Vec3::new(-1.0, -1.0, 0.5), Vec3::new(1.0, 1.0, 0.5)),
    };
    assert!(matches!(
        generate(&flat, &mut rng),
        Err(HeartCloudError::InvalidConfiguration(_))
    ));
}

#[test]
fn hundred_red_to_white_particles() {
    let config = GeneratorConfig::sparkling()
        .with_particle_count(100)
        .with_colours(ParticleColour::rgb(1.0, 0.0, 0.0), ParticleColour::rgb(1.0, 1.0, 1.0));
    let set = generate(&config, &mut StdRng::seed_from_u64(100)).unwrap();

    assert_eq!(set.len(), 100);
    for particle in set.iter() {
        assert_eq!(particle.colour.r, 1.0);
        assert!((0.0..=1.0).contains(&particle.colour.g));
        assert!((0.0..=1.0).contains(&particle.colour.b));
    }
}

#[test]
fn animation_leaves_base_set_untouched() {
    let config = GeneratorConfig::sparkling().with_particle_count(256);
    let set = generate(&config, &mut StdRng::seed_from_u64(8)).unwrap();
    let snapshot = set.clone();

    let animation = HeartAnimation::sparkling();
    let mut display = Vec::new();
    for frame in 0..120 {
        let t = animation.animation_time(frame as f32 / 60.0);
        animation.write_display_positions(&set, t, &mut display);
        assert_eq!(display.len(), set.len());
    }

    assert_eq!(set, snapshot);
}

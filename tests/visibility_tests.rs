mod common;

use approx::assert_relative_eq;
use glam::Vec2;
use lightcast::{Light, LightEngine, Obstacle, Shape, NO_OCCLUDER};

#[test]
fn test_single_box_end_to_end() {
    let scene = common::load_fixture("single_box.json").unwrap();
    let strip = common::strip_for(&scene, 0, 8);

    // bucket 4 looks along angle 0, straight at the box's near face at x = 7.5
    assert_relative_eq!(strip[4], 7.5, epsilon = 1e-4);
    for (bucket, &distance) in strip.iter().enumerate() {
        if bucket != 4 {
            assert_eq!(distance, NO_OCCLUDER, "bucket {} should be open", bucket);
        }
    }
}

#[test]
fn test_circle_shadow_width_at_high_resolution() {
    // circle r=2 at (5,0): silhouette spans +/- asin(2/5) ~ 23.6 degrees
    let light = Light::point(1.0, [1.0; 3]);
    let obstacles = [Obstacle::new(
        0,
        Vec2::new(5.0, 0.0),
        Shape::Circle { radius: 2.0 },
    )];
    let engine = LightEngine::new(256).unwrap();
    let mut strip = vec![0.0; 256];
    engine
        .compute_into(Vec2::ZERO, &light, &obstacles, &mut strip)
        .unwrap();

    // straight ahead the chord between the tangent points sits at x = 4.2
    assert_relative_eq!(strip[128], 4.2, epsilon = 1e-3);
    // 19.7 degrees is still inside the silhouette
    assert!(strip[142] < NO_OCCLUDER);
    assert!(strip[142] > 4.2);
    // 29.5 degrees is already clear of it
    assert_eq!(strip[149], NO_OCCLUDER);
    // and the opposite direction is open
    assert_eq!(strip[0], NO_OCCLUDER);
}

#[test]
fn test_wall_behind_cone_light_stays_dark() {
    // the wall sits behind the cone's window: those buckets read 0.0
    // (dark), not the wall distance
    let light = Light::cone(1.0, [1.0; 3], 0.0, std::f32::consts::PI / 2.0);
    let obstacles = [Obstacle::new(
        0,
        Vec2::new(-8.0, 0.0),
        Shape::Rectangle {
            width: 2.0,
            height: 6.0,
        },
    )];
    let engine = LightEngine::new(16).unwrap();
    let mut strip = vec![0.0; 16];
    engine
        .compute_into(Vec2::ZERO, &light, &obstacles, &mut strip)
        .unwrap();

    // bucket 0 faces -PI, straight at the wall, but outside the window
    assert_eq!(strip[0], 0.0);
    // the forward bucket is inside the window with nothing to hit
    assert_eq!(strip[8], NO_OCCLUDER);
}

#[test]
fn test_identical_inputs_produce_identical_strips() {
    let scene = common::load_fixture("ring_of_pillars.json").unwrap();
    let first = common::strip_for(&scene, 0, 128);
    let second = common::strip_for(&scene, 0, 128);
    assert_eq!(first, second);

    // a separate engine instance agrees bit for bit
    let engine = LightEngine::new(128).unwrap();
    let placed = &scene.lights[0];
    let mut third = vec![0.0; 128];
    engine
        .compute_into(placed.position, &placed.light, &scene.obstacles, &mut third)
        .unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_mirrored_scene_produces_mirrored_strips() {
    let scene = common::load_fixture("ring_of_pillars.json").unwrap();
    let mirrored = common::mirror_scene(&scene);
    let resolution = 64;

    for light_index in 0..scene.lights.len() {
        let strip = common::strip_for(&scene, light_index, resolution);
        let twin_strip = common::strip_for(&mirrored, light_index, resolution);
        for bucket in 0..resolution {
            let twin = common::mirror_bucket(bucket, resolution);
            let here = strip[bucket];
            let there = twin_strip[twin];
            if here == 0.0 || here >= NO_OCCLUDER {
                assert_eq!(
                    here, there,
                    "light {} bucket {} disagrees with mirror bucket {}",
                    light_index, bucket, twin
                );
            } else {
                assert_relative_eq!(here, there, epsilon = 1e-3);
            }
        }
    }
}

#[test]
fn test_unsupported_kind_skipped_but_scene_still_works() {
    let scene = common::load_fixture("mixed_kinds.json").unwrap();

    // the triangle was dropped at the snapshot boundary
    assert_eq!(scene.obstacles.len(), 2);
    let ids: Vec<u32> = scene.obstacles.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![0, 2]);

    let strip = common::strip_for(&scene, 0, 64);
    // the two supported shapes still cast shadows
    let blocked = strip
        .iter()
        .filter(|&&d| d > 0.0 && d < NO_OCCLUDER)
        .count();
    assert!(blocked > 0);
    // straight up, where the triangle would have been, nothing blocks
    assert_eq!(strip[48], NO_OCCLUDER);
}

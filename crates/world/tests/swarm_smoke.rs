//! End-to-end run over a small arena: a packed swarm, a block, a player, and
//! several hundred ticks.
use swarm_physics::{circle_circle_test, Aabb, Collides, V2};
use swarm_world::{Body, Enemy, Player, WeaponKind, WeaponLoot, World, WorldConfig};

/// Count unordered enemy pairs currently overlapping, brute force.
fn overlap_count(world: &World) -> usize {
    let enemies: Vec<(V2, f64)> = world
        .bodies()
        .iter()
        .filter_map(|b| match b {
            Body::Enemy(e) => Some((e.position(), e.body_radius())),
            _ => None,
        })
        .collect();

    let mut count = 0;
    for i in 0..enemies.len() {
        for j in 0..i {
            let (p1, r1) = enemies[i];
            let (p2, r2) = enemies[j];
            if circle_circle_test(&p1, r1, &p2, r2) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn packed_swarm_spreads_out_over_a_few_seconds() {
    swarm_logging::log_to_stderr();

    let mut world = World::new(WorldConfig::default()).expect("Should succeed");
    let player_speed = world.config().player_speed;
    assert_eq!(world.grid().cols(), world.config().grid_cols);
    world.add_block(
        Aabb::from_center_and_dims(V2::new(600.0, 300.0), 120.0, 40.0).expect("Should succeed"),
    );

    world.spawn(Player::new(V2::new(600.0, 600.0), 20.0, 100));
    world.spawn(WeaponLoot::new(WeaponKind::Shotgun, V2::new(200.0, 200.0), 0.0));

    // A tight clump of enemies stacked around one point.
    for i in 0..40 {
        let angle = i as f64 * 0.37;
        let pos = V2::new(500.0 + angle.cos() * 5.0, 500.0 + angle.sin() * 5.0);
        world.spawn(Enemy::new(pos, 100.0, 10.0, 10.0));
    }

    let initial_overlaps = overlap_count(&world);
    assert!(initial_overlaps > 100, "clump not packed: {}", initial_overlaps);

    let blocks: Vec<Aabb> = world.blocks().to_vec();
    // Eleven simulated seconds, enough for the loot timeout to pass.
    let dt = 1.0 / 60.0;
    let mut now = 0.0;
    for _ in 0..660 {
        now += dt;

        // The player drifts toward the block to keep the swarm moving.
        if let Some(Body::Player(p)) = world.bodies_mut().first_mut() {
            p.walk(V2::new(0.0, -1.0), dt, player_speed, &blocks, 1200.0, 1200.0);
        }

        world.advance(dt, now);
    }

    for body in world.bodies() {
        let pos = body.position();
        assert!(pos.is_finite(), "non-finite position {:?}", pos);
    }

    let final_overlaps = overlap_count(&world);
    assert!(
        final_overlaps < initial_overlaps,
        "swarm never spread: {} -> {}",
        initial_overlaps,
        final_overlaps
    );

    // Forty enemies on a 100 hp player: contact damage has floored them.
    let player_hp = world
        .bodies()
        .iter()
        .find_map(|b| match b {
            Body::Player(p) => Some(p.hp()),
            _ => None,
        })
        .expect("Should have a player");
    assert_eq!(player_hp, 0);

    // The shotgun on the floor timed out along the way.
    assert!(world
        .bodies()
        .iter()
        .all(|b| !matches!(b, Body::WeaponLoot(_))));
}

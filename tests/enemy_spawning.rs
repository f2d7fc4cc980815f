mod common;

use atom_collector::core::components::Enemy;
use atom_collector::core::events::SpawnEnemy;
use atom_collector::core::scheduler::TaskScheduler;
use atom_collector::gameplay::PlaySession;
use atom_collector::physics::arena::Arena;
use bevy::prelude::*;
use bevy_rapier2d::prelude::{GravityScale, Restitution, RigidBody, Velocity};
use std::time::Duration;

use common::{enter_play, entities_with, headless_app, seeded_config, timed_app};

#[test]
fn an_enemy_appears_every_three_seconds() {
    let mut app = timed_app(seeded_config(), Duration::from_millis(100));
    enter_play(&mut app);

    for _ in 0..20 {
        app.update();
    }
    assert!(entities_with::<Enemy>(&mut app).is_empty());

    // about 3.9s into play
    for _ in 0..18 {
        app.update();
    }
    assert_eq!(entities_with::<Enemy>(&mut app).len(), 1);

    // about 6.9s into play
    for _ in 0..30 {
        app.update();
    }
    assert_eq!(entities_with::<Enemy>(&mut app).len(), 2);
}

#[test]
fn enemies_spawn_inside_the_configured_box() {
    let mut app = headless_app(seeded_config());
    enter_play(&mut app);
    for _ in 0..16 {
        app.world_mut().send_event(SpawnEnemy);
    }
    app.update();

    let arena = *app.world().resource::<Arena>();
    let enemies = entities_with::<Enemy>(&mut app);
    assert_eq!(enemies.len(), 16);
    for enemy in enemies {
        let world = app.world().get::<Transform>(enemy).unwrap().translation.truncate();
        let screen = arena.to_screen(world);
        assert!((100.0..=800.0).contains(&screen.x), "x {}", screen.x);
        assert!((100.0..=300.0).contains(&screen.y), "y {}", screen.y);
        let velocity = app.world().get::<Velocity>(enemy).unwrap().linvel;
        assert!(velocity.x.abs() <= 150.0 && velocity.y.abs() <= 150.0);
        // enemies drift without gravity and bounce without losing speed
        assert_eq!(app.world().get::<GravityScale>(enemy).unwrap().0, 0.0);
        assert_eq!(app.world().get::<Restitution>(enemy).unwrap().coefficient, 1.0);
        assert_eq!(app.world().get::<RigidBody>(enemy), Some(&RigidBody::Dynamic));
    }
}

#[test]
fn population_cap_skips_spawns() {
    let mut cfg = seeded_config();
    cfg.enemies.max_alive = 2;
    let mut app = headless_app(cfg);
    enter_play(&mut app);

    for _ in 0..5 {
        app.world_mut().send_event(SpawnEnemy);
    }
    app.update();
    assert_eq!(entities_with::<Enemy>(&mut app).len(), 2);

    app.world_mut().send_event(SpawnEnemy);
    app.update();
    assert_eq!(entities_with::<Enemy>(&mut app).len(), 2);
}

#[test]
fn cancelled_spawner_stops_enemies() {
    let mut app = timed_app(seeded_config(), Duration::from_millis(100));
    enter_play(&mut app);

    let handle = app
        .world()
        .resource::<PlaySession>()
        .enemy_spawner
        .unwrap();
    assert!(app.world_mut().resource_mut::<TaskScheduler>().cancel(handle));
    for _ in 0..40 {
        app.update();
    }
    assert!(entities_with::<Enemy>(&mut app).is_empty());
}

fn seeded_enemy_positions() -> Vec<(i32, i32)> {
    let mut app = headless_app(seeded_config());
    enter_play(&mut app);
    for _ in 0..4 {
        app.world_mut().send_event(SpawnEnemy);
    }
    app.update();
    let mut q = app.world_mut().query_filtered::<&Transform, With<Enemy>>();
    let mut all: Vec<(i32, i32)> = q
        .iter(app.world())
        .map(|t| (t.translation.x as i32, t.translation.y as i32))
        .collect();
    all.sort_unstable();
    all
}

#[test]
fn same_seed_places_enemies_identically() {
    assert_eq!(seeded_enemy_positions(), seeded_enemy_positions());
}

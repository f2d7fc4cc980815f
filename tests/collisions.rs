mod common;

use atom_collector::core::components::{Atom, Collected, Enemy, Particle, PickupSensor, Player};
use atom_collector::core::config::{AtomConfig, GameConfig, SpawnRange};
use atom_collector::core::events::SpawnEnemy;
use atom_collector::gameplay::MoleculeLedger;
use atom_collector::HudState;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use common::{enter_play, entities_with, headless_app, seeded_config, single};

fn contact(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

fn spawn_enemy(app: &mut App) -> Entity {
    let before = entities_with::<Enemy>(app);
    app.world_mut().send_event(SpawnEnemy);
    app.update();
    let after = entities_with::<Enemy>(app);
    after
        .into_iter()
        .find(|e| !before.contains(e))
        .expect("a new enemy")
}

fn live_atoms(app: &mut App) -> Vec<Entity> {
    let mut q = app
        .world_mut()
        .query_filtered::<Entity, (With<Atom>, Without<Collected>)>();
    q.iter(app.world()).collect()
}

fn defeat(app: &mut App, enemy: Entity) {
    let player = single::<Player>(app);
    contact(app, player, enemy);
    app.update();
}

#[test]
fn touching_an_enemy_destroys_it_and_releases_atoms() {
    let mut app = headless_app(seeded_config());
    enter_play(&mut app);
    let enemy = spawn_enemy(&mut app);
    let enemy_at = app
        .world()
        .get::<Transform>(enemy)
        .unwrap()
        .translation
        .truncate();

    // contact order is not guaranteed either way
    let player = single::<Player>(&mut app);
    contact(&mut app, enemy, player);
    app.update();

    assert!(app.world().get_entity(enemy).is_err());
    let atoms = live_atoms(&mut app);
    assert!((2..=4).contains(&atoms.len()), "burst of {}", atoms.len());
    for atom in atoms {
        // atoms fall under world gravity and bounce softly
        assert!(app
            .world()
            .get::<GravityScale>(atom)
            .is_none_or(|scale| scale.0 == 1.0));
        assert_eq!(app.world().get::<Restitution>(atom).unwrap().coefficient, 0.5);
        assert_eq!(app.world().get::<RigidBody>(atom), Some(&RigidBody::Dynamic));
        let transform = app.world().get::<Transform>(atom).unwrap();
        assert_eq!(transform.translation.truncate(), enemy_at);
        // screen-space upward launch is world-space positive y
        let velocity = app.world().get::<Velocity>(atom).unwrap();
        assert!(velocity.linvel.y >= 50.0 && velocity.linvel.y <= 200.0);
        assert!(velocity.linvel.x.abs() <= 100.0);
    }
}

#[test]
fn duplicate_contacts_defeat_an_enemy_once() {
    let mut app = headless_app(GameConfig {
        atoms: AtomConfig {
            burst: SpawnRange::new(2, 2),
            ..Default::default()
        },
        ..seeded_config()
    });
    enter_play(&mut app);
    let enemy = spawn_enemy(&mut app);
    let player = single::<Player>(&mut app);

    contact(&mut app, player, enemy);
    contact(&mut app, enemy, player);
    app.update();

    assert_eq!(live_atoms(&mut app).len(), 2);
}

#[test]
fn pickup_sensor_collects_an_atom_once() {
    let mut app = headless_app(seeded_config());
    enter_play(&mut app);
    let enemy = spawn_enemy(&mut app);
    defeat(&mut app, enemy);

    let sensor = single::<PickupSensor>(&mut app);
    let atom = live_atoms(&mut app)[0];
    contact(&mut app, sensor, atom);
    contact(&mut app, atom, sensor);
    app.update();

    assert!(app.world().get::<Collected>(atom).is_some());
    assert!(app.world().get::<RigidBodyDisabled>(atom).is_some());
    assert_eq!(
        app.world().get::<Visibility>(atom),
        Some(&Visibility::Hidden)
    );
    assert_eq!(app.world().resource::<MoleculeLedger>().atoms_collected(), 1);

    // a collected atom no longer counts, even if the contact is reported again
    contact(&mut app, sensor, atom);
    app.update();
    assert_eq!(app.world().resource::<MoleculeLedger>().atoms_collected(), 1);

    let hud = app.world().resource::<HudState>();
    assert_eq!(hud.atom_count, 1);
    assert_eq!(hud.message, "Atom collected! Atoms: 1");
    assert!(hud.message_visible);
}

#[test]
fn player_body_does_not_collect_atoms() {
    let mut app = headless_app(seeded_config());
    enter_play(&mut app);
    let enemy = spawn_enemy(&mut app);
    defeat(&mut app, enemy);

    let player = single::<Player>(&mut app);
    let atom = live_atoms(&mut app)[0];
    contact(&mut app, player, atom);
    app.update();

    assert!(app.world().get::<Collected>(atom).is_none());
    assert_eq!(app.world().resource::<MoleculeLedger>().atoms_collected(), 0);
}

#[test]
fn enemies_destroy_particles_and_survive() {
    let mut app = headless_app(seeded_config());
    enter_play(&mut app);
    let enemy = spawn_enemy(&mut app);
    let particle = app
        .world_mut()
        .spawn((Particle, Transform::default()))
        .id();

    contact(&mut app, particle, enemy);
    app.update();

    assert!(app.world().get_entity(particle).is_err());
    assert!(app.world().get_entity(enemy).is_ok());
}

#[test]
fn collected_atoms_are_reused_before_the_oldest_is_recycled() {
    let mut cfg = seeded_config();
    cfg.atoms.burst = SpawnRange::new(1, 1);
    cfg.atoms.max_alive = 1;
    let mut app = headless_app(cfg);
    enter_play(&mut app);
    let sensor = single::<PickupSensor>(&mut app);

    let first_enemy = spawn_enemy(&mut app);
    defeat(&mut app, first_enemy);
    let atom = single::<Atom>(&mut app);
    contact(&mut app, sensor, atom);
    app.update();
    assert!(app.world().get::<Collected>(atom).is_some());

    // the pooled atom comes back instead of a new entity
    let second_enemy = spawn_enemy(&mut app);
    defeat(&mut app, second_enemy);
    assert_eq!(entities_with::<Atom>(&mut app), vec![atom]);
    assert!(app.world().get::<Collected>(atom).is_none());
    assert!(app.world().get::<RigidBodyDisabled>(atom).is_none());
    assert_eq!(
        app.world().get::<Visibility>(atom),
        Some(&Visibility::Inherited)
    );

    // at the cap the live atom is moved to the new burst
    let third_enemy = spawn_enemy(&mut app);
    let third_at = app
        .world()
        .get::<Transform>(third_enemy)
        .unwrap()
        .translation
        .truncate();
    defeat(&mut app, third_enemy);
    assert_eq!(entities_with::<Atom>(&mut app), vec![atom]);
    assert_eq!(
        app.world().get::<Transform>(atom).unwrap().translation.truncate(),
        third_at
    );
}

#[test]
fn pickup_during_a_capped_burst_still_releases_a_live_atom() {
    let mut cfg = seeded_config();
    cfg.atoms.burst = SpawnRange::new(1, 1);
    cfg.atoms.max_alive = 1;
    let mut app = headless_app(cfg);
    enter_play(&mut app);
    let sensor = single::<PickupSensor>(&mut app);
    let player = single::<Player>(&mut app);

    let first_enemy = spawn_enemy(&mut app);
    defeat(&mut app, first_enemy);
    let atom = single::<Atom>(&mut app);
    let second_enemy = spawn_enemy(&mut app);

    // the only live atom is picked up in the frame the next burst is thrown
    contact(&mut app, sensor, atom);
    contact(&mut app, player, second_enemy);
    app.update();

    assert_eq!(app.world().resource::<MoleculeLedger>().atoms_collected(), 1);
    let live = live_atoms(&mut app);
    assert_eq!(live.len(), 1, "burst of 1 must leave one live atom");
    let released = live[0];
    assert!(app.world().get::<RigidBodyDisabled>(released).is_none());
    assert!(app.world().get::<ColliderDisabled>(released).is_none());
    assert_eq!(
        app.world().get::<Visibility>(released),
        Some(&Visibility::Inherited)
    );
    assert!(entities_with::<Atom>(&mut app).len() <= 1);
}

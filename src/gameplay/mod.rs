//! Play scene: enemy timer, collision rules, atom ledger, player movement.

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::events::{
    AtomTouched, CreateMoleculeRequested, EnemyDefeated, ParticleHit, SpawnEnemy,
};
use crate::core::scheduler::TaskScheduler;
use crate::core::system::system_order::PlaySet;
use crate::hud::HudState;
use crate::physics::arena::{spawn_arena_walls, Arena};

pub mod collisions;
pub mod molecule;
pub mod movement;
pub mod session;
pub mod spawning;

pub use molecule::{MoleculeLedger, MoleculeOutcome};
pub use session::PlaySession;
pub use spawning::GameRng;

/// All play-scene rules. Needs a `GameConfig` resource; physics and
/// presentation plugins are optional, which keeps it usable headless.
pub struct PlayScenePlugin;

impl Plugin for PlayScenePlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world_mut()
            .get_resource_or_insert_with::<GameConfig>(GameConfig::default)
            .clone();

        if !app.world().contains_resource::<GameRng>() {
            app.insert_resource(GameRng::new(cfg.seed));
        }
        if !app.world().contains_resource::<Arena>() {
            app.insert_resource(Arena::from_config(&cfg));
        }
        // Rapier registers this too; registering again is a no-op.
        app.add_event::<CollisionEvent>();

        app.add_event::<SpawnEnemy>()
            .add_event::<EnemyDefeated>()
            .add_event::<AtomTouched>()
            .add_event::<ParticleHit>()
            .add_event::<CreateMoleculeRequested>()
            .init_resource::<TaskScheduler>()
            .init_resource::<HudState>()
            .init_resource::<MoleculeLedger>()
            .init_resource::<PlaySession>()
            .init_resource::<spawning::SpawnCounter>()
            .configure_sets(
                Update,
                (
                    PlaySet::Input,
                    PlaySet::Tasks,
                    PlaySet::Collisions,
                    PlaySet::Rules,
                )
                    .chain()
                    .run_if(in_state(AppState::Play)),
            )
            .add_systems(
                OnEnter(AppState::Play),
                (session::setup_play_scene, spawn_arena_walls),
            )
            .add_systems(
                Update,
                (
                    (movement::drive_player, molecule::request_molecule_from_keys)
                        .in_set(PlaySet::Input),
                    session::dispatch_scheduled_tasks.in_set(PlaySet::Tasks),
                    collisions::route_collisions.in_set(PlaySet::Collisions),
                    (
                        spawning::spawn_enemies,
                        collisions::defeat_enemies,
                        // pickups land in the pool before a burst looks for free atoms
                        spawning::release_atoms.after(collisions::collect_atoms),
                        collisions::collect_atoms,
                        collisions::destroy_particles,
                        molecule::handle_molecule_requests.after(collisions::collect_atoms),
                    )
                        .in_set(PlaySet::Rules),
                ),
            );
    }
}

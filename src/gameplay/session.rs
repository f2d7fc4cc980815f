use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::time::Duration;

use crate::boot::{SpriteTextures, TextureKey};
use crate::core::components::{PickupSensor, Player};
use crate::core::config::GameConfig;
use crate::core::events::SpawnEnemy;
use crate::core::scheduler::{ScheduledTask, TaskHandle, TaskScheduler};
use crate::gameplay::molecule::MoleculeLedger;
use crate::hud::{Hud, HudState};
use crate::physics::{groups, Arena};

const LOG_TARGET: &str = "play";

/// Handles owned by the running play scene.
#[derive(Resource, Debug, Default)]
pub struct PlaySession {
    pub enemy_spawner: Option<TaskHandle>,
}

/// Play scene entry: counters, player, spawn timer, initial HUD.
pub fn setup_play_scene(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    arena: Res<Arena>,
    textures: Res<SpriteTextures>,
    mut session: ResMut<PlaySession>,
    mut hud: Hud,
) {
    let ledger = MoleculeLedger::from_config(&cfg.molecule);
    ledger.reset_hud(&mut hud);
    commands.insert_resource(ledger);

    spawn_player(&mut commands, &cfg, &arena, &textures);

    let period = Duration::from_secs_f32(cfg.enemies.interval_secs.max(0.0));
    let handle = hud.scheduler_mut().repeating(period, ScheduledTask::SpawnEnemy);
    if let Some(previous) = session.enemy_spawner.replace(handle) {
        hud.scheduler_mut().cancel(previous);
    }
    info!(
        target: LOG_TARGET,
        "play scene ready: enemy every {:.1}s, {} atoms per molecule",
        cfg.enemies.interval_secs,
        cfg.molecule.atoms_needed
    );
}

fn spawn_player(commands: &mut Commands, cfg: &GameConfig, arena: &Arena, textures: &SpriteTextures) {
    let (x, y) = cfg.player.start;
    let position = arena.to_world(Vec2::new(x, y));
    let half = cfg.player.size * 0.5;
    commands
        .spawn((
            Name::new("Player"),
            Player,
            Sprite::from_image(textures.get(TextureKey::Player)),
            Transform::from_translation(position.extend(2.0)),
            RigidBody::Dynamic,
            Collider::cuboid(half, half),
            groups::player_body(),
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            Friction::coefficient(0.0),
            Velocity::zero(),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .with_children(|player| {
            player.spawn((
                Name::new("PickupSensor"),
                PickupSensor,
                Collider::cuboid(half, half),
                Sensor,
                groups::pickup_sensor(),
                ActiveEvents::COLLISION_EVENTS,
                Transform::default(),
            ));
        });
}

/// Runs whatever the scheduler says is due this frame.
pub fn dispatch_scheduled_tasks(
    time: Res<Time>,
    mut scheduler: ResMut<TaskScheduler>,
    mut hud: ResMut<HudState>,
    mut spawns: EventWriter<SpawnEnemy>,
) {
    for (handle, task) in scheduler.tick(time.delta()) {
        match task {
            ScheduledTask::SpawnEnemy => {
                spawns.write(SpawnEnemy);
            }
            // an outdated hide was cancelled when its message got replaced
            ScheduledTask::HideMessage => {
                if hud.hide_task() == Some(handle) {
                    hud.hide_message();
                }
            }
        }
    }
}

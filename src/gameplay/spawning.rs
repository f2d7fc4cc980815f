use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::boot::{SpriteTextures, TextureKey};
use crate::core::components::{Atom, AtomKind, Collected, Enemy, SpawnSerial};
use crate::core::config::{AtomConfig, EnemyConfig, GameConfig, SpawnRange};
use crate::core::events::{EnemyDefeated, SpawnEnemy};
use crate::physics::{groups, Arena};

const LOG_TARGET: &str = "spawning";

/// Every random roll in the game goes through this generator.
#[derive(Resource, Debug)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(None)
    }
}

#[derive(Resource, Debug, Default)]
pub struct SpawnCounter(u64);

impl SpawnCounter {
    pub fn next(&mut self) -> SpawnSerial {
        self.0 += 1;
        SpawnSerial(self.0)
    }
}

/// Uniform pick from an inclusive range; a collapsed or inverted range yields `min`.
pub fn roll_inclusive<T>(rng: &mut impl Rng, range: SpawnRange<T>) -> T
where
    T: SampleUniform + PartialOrd + Copy,
{
    if range.min >= range.max {
        range.min
    } else {
        rng.gen_range(range.min..=range.max)
    }
}

/// Screen-space spawn parameters for one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl EnemySpawn {
    pub fn roll(rng: &mut impl Rng, cfg: &EnemyConfig) -> Self {
        Self {
            position: Vec2::new(
                roll_inclusive(rng, cfg.x_range) as f32,
                roll_inclusive(rng, cfg.y_range) as f32,
            ),
            velocity: Vec2::new(
                roll_inclusive(rng, cfg.vel_x_range) as f32,
                roll_inclusive(rng, cfg.vel_y_range) as f32,
            ),
        }
    }
}

/// One atom thrown out of a defeated enemy; `velocity` is screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomLaunch {
    pub kind: AtomKind,
    pub velocity: Vec2,
}

pub fn roll_atom_burst(rng: &mut impl Rng, cfg: &AtomConfig) -> SmallVec<[AtomLaunch; 4]> {
    let count = roll_inclusive(rng, cfg.burst);
    (0..count)
        .map(|_| AtomLaunch {
            kind: AtomKind::ALL[rng.gen_range(0..AtomKind::ALL.len())],
            velocity: Vec2::new(
                roll_inclusive(rng, cfg.vel_x_range) as f32,
                roll_inclusive(rng, cfg.vel_y_range) as f32,
            ),
        })
        .collect()
}

/// Spawns one enemy per [`SpawnEnemy`] while the population is below `enemies.max_alive`.
pub fn spawn_enemies(
    mut commands: Commands,
    mut requests: EventReader<SpawnEnemy>,
    mut rng: ResMut<GameRng>,
    cfg: Res<GameConfig>,
    arena: Res<Arena>,
    textures: Res<SpriteTextures>,
    enemies: Query<(), With<Enemy>>,
) {
    let mut alive = enemies.iter().count();
    for _ in requests.read() {
        if alive >= cfg.enemies.max_alive {
            debug!(target: LOG_TARGET, "enemy cap {} reached, skipping spawn", cfg.enemies.max_alive);
            continue;
        }
        let spawn = EnemySpawn::roll(&mut rng.0, &cfg.enemies);
        let position = arena.to_world(spawn.position);
        let half = cfg.enemies.size * 0.5;
        commands.spawn((
            Name::new("Enemy"),
            Enemy,
            Sprite::from_image(textures.get(TextureKey::Enemy)),
            Transform::from_translation(position.extend(1.0)),
            RigidBody::Dynamic,
            Collider::cuboid(half, half),
            groups::enemy(),
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            Restitution {
                coefficient: cfg.enemies.bounce,
                combine_rule: CoefficientCombineRule::Max,
            },
            Friction::coefficient(0.0),
            Velocity::linear(Arena::velocity_to_world(spawn.velocity)),
            ActiveEvents::COLLISION_EVENTS,
        ));
        alive += 1;
        debug!(target: LOG_TARGET, "enemy spawned at {:?} ({alive} alive)", spawn.position);
    }
}

/// Throws a burst of atoms out of every defeated enemy.
///
/// Live atoms are capped at `atoms.max_alive`. Collected atoms are pooled and
/// revived first; at the cap the oldest live atom is moved instead of spawning.
#[allow(clippy::too_many_arguments)]
pub fn release_atoms(
    mut commands: Commands,
    mut defeated: EventReader<EnemyDefeated>,
    mut rng: ResMut<GameRng>,
    mut counter: ResMut<SpawnCounter>,
    cfg: Res<GameConfig>,
    textures: Res<SpriteTextures>,
    pooled: Query<Entity, (With<Atom>, With<Collected>)>,
    live: Query<(Entity, &SpawnSerial), (With<Atom>, Without<Collected>)>,
) {
    if defeated.is_empty() {
        return;
    }
    let mut idle: Vec<Entity> = pooled.iter().collect();
    let mut oldest_first: Vec<(SpawnSerial, Entity)> = live.iter().map(|(e, s)| (*s, e)).collect();
    oldest_first.sort_unstable();
    let mut live_queue: VecDeque<Entity> = oldest_first.into_iter().map(|(_, e)| e).collect();
    let max_alive = cfg.atoms.max_alive;

    for ev in defeated.read() {
        let burst = roll_atom_burst(&mut rng.0, &cfg.atoms);
        for launch in burst {
            let entity = if live_queue.len() < max_alive {
                match idle.pop() {
                    Some(entity) => {
                        commands
                            .entity(entity)
                            .remove::<(Collected, RigidBodyDisabled, ColliderDisabled)>();
                        entity
                    }
                    None => commands.spawn(atom_body(&cfg.atoms)).id(),
                }
            } else if let Some(oldest) = live_queue.pop_front() {
                debug!(target: LOG_TARGET, "atom cap {max_alive} reached, recycling {oldest:?}");
                oldest
            } else {
                continue;
            };
            commands.entity(entity).insert((
                Atom { kind: launch.kind },
                counter.next(),
                Sprite::from_image(textures.get(TextureKey::for_atom(launch.kind))),
                Transform::from_translation(ev.position.extend(0.5)),
                Velocity::linear(Arena::velocity_to_world(launch.velocity)),
                Visibility::Inherited,
            ));
            live_queue.push_back(entity);
            debug!(target: LOG_TARGET, "released {:?} atom {entity:?}", launch.kind);
        }
    }
}

fn atom_body(cfg: &AtomConfig) -> impl Bundle {
    (
        Name::new("Atom"),
        RigidBody::Dynamic,
        Collider::ball(cfg.radius),
        groups::atom(),
        LockedAxes::ROTATION_LOCKED,
        Restitution {
            coefficient: cfg.bounce,
            combine_rule: CoefficientCombineRule::Max,
        },
        Friction::coefficient(0.0),
        ActiveEvents::COLLISION_EVENTS,
    )
}

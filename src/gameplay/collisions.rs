//! Turns raw Rapier contact events into gameplay events and applies them.
//!
//! Rules:
//! * pickup sensor ↔ atom   -> [`AtomTouched`]   -> atom disabled, counter up
//! * player ↔ enemy         -> [`EnemyDefeated`] -> enemy despawned, atoms released
//! * enemy ↔ particle       -> [`ParticleHit`]   -> particle despawned

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashSet;

use crate::core::components::{Atom, Collected, Enemy, Particle, PickupSensor, Player};
use crate::core::events::{AtomTouched, EnemyDefeated, ParticleHit};
use crate::gameplay::molecule::MoleculeLedger;
use crate::hud::Hud;

const LOG_TARGET: &str = "collisions";

/// Which side of a contact pair an entity plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Player,
    Pickup,
    Enemy,
    Atom,
    Particle,
}

#[allow(clippy::type_complexity)]
pub fn route_collisions(
    mut collisions: EventReader<CollisionEvent>,
    players: Query<(), With<Player>>,
    sensors: Query<(), With<PickupSensor>>,
    enemies: Query<&Transform, With<Enemy>>,
    atoms: Query<(), (With<Atom>, Without<Collected>)>,
    particles: Query<(), With<Particle>>,
    mut defeated: EventWriter<EnemyDefeated>,
    mut touched: EventWriter<AtomTouched>,
    mut hit: EventWriter<ParticleHit>,
) {
    let role = |e: Entity| -> Option<Role> {
        if players.contains(e) {
            Some(Role::Player)
        } else if sensors.contains(e) {
            Some(Role::Pickup)
        } else if enemies.contains(e) {
            Some(Role::Enemy)
        } else if atoms.contains(e) {
            Some(Role::Atom)
        } else if particles.contains(e) {
            Some(Role::Particle)
        } else {
            None
        }
    };

    // one outcome per entity per frame, however many contacts it reports
    let mut handled: HashSet<Entity> = HashSet::new();

    for ev in collisions.read() {
        let &CollisionEvent::Started(a, b, _) = ev else {
            continue;
        };
        let (Some(ra), Some(rb)) = (role(a), role(b)) else {
            continue;
        };
        let ((first, r1), (second, r2)) = if (ra as u8) <= (rb as u8) {
            ((a, ra), (b, rb))
        } else {
            ((b, rb), (a, ra))
        };
        match (r1, r2) {
            (Role::Player, Role::Enemy) => {
                if handled.insert(second) {
                    let position = enemies
                        .get(second)
                        .map(|t| t.translation.truncate())
                        .unwrap_or_default();
                    defeated.write(EnemyDefeated {
                        enemy: second,
                        position,
                    });
                }
            }
            (Role::Pickup, Role::Atom) => {
                if handled.insert(second) {
                    touched.write(AtomTouched { atom: second });
                }
            }
            (Role::Enemy, Role::Particle) => {
                if handled.insert(second) {
                    hit.write(ParticleHit { particle: second });
                }
            }
            _ => trace!(target: LOG_TARGET, "ignored contact {first:?} <-> {second:?}"),
        }
    }
}

/// No damage model: touching an enemy always destroys it.
pub fn defeat_enemies(mut commands: Commands, mut defeated: EventReader<EnemyDefeated>) {
    for ev in defeated.read() {
        info!(target: LOG_TARGET, "enemy {:?} defeated at {:?}", ev.enemy, ev.position);
        commands.entity(ev.enemy).try_despawn();
    }
}

/// Disables and hides the atom (it stays pooled) and credits the ledger.
pub fn collect_atoms(
    mut commands: Commands,
    mut touched: EventReader<AtomTouched>,
    mut ledger: ResMut<MoleculeLedger>,
    mut hud: Hud,
) {
    for ev in touched.read() {
        commands.entity(ev.atom).try_insert((
            Collected,
            RigidBodyDisabled,
            ColliderDisabled,
            Visibility::Hidden,
        ));
        let total = ledger.collect_atom(&mut hud);
        info!(target: LOG_TARGET, "atom collected, {total} held");
    }
}

pub fn destroy_particles(mut commands: Commands, mut hits: EventReader<ParticleHit>) {
    for ev in hits.read() {
        commands.entity(ev.particle).try_despawn();
    }
}

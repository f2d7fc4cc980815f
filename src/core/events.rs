use bevy::prelude::*;

/// Emitted when the repeating spawn task fires.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct SpawnEnemy;

/// The player ran into an enemy; `position` is the enemy's last world position.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyDefeated {
    pub enemy: Entity,
    pub position: Vec2,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct AtomTouched {
    pub atom: Entity,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ParticleHit {
    pub particle: Entity,
}

/// User asked to turn collected atoms into a molecule (button, DOM click or key).
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct CreateMoleculeRequested;

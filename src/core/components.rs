use bevy::prelude::*;

/// The player-controlled body. Exactly one exists during play.
#[derive(Component, Debug)]
pub struct Player;

/// Sensor collider parented to the player; overlaps with atoms collect them.
#[derive(Component, Debug)]
pub struct PickupSensor;

#[derive(Component, Debug)]
pub struct Enemy;

/// Cosmetic atom flavour. Both kinds count the same toward a molecule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AtomKind {
    Oxygen,
    Hydrogen,
}

impl AtomKind {
    pub const ALL: [AtomKind; 2] = [AtomKind::Oxygen, AtomKind::Hydrogen];
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Atom {
    pub kind: AtomKind,
}

/// Atom that was picked up: physics disabled, hidden, kept around for reuse.
#[derive(Component, Debug)]
pub struct Collected;

/// Reserved: enemies destroy particles they touch, but nothing spawns them yet.
#[derive(Component, Debug)]
pub struct Particle;

/// Monotonic spawn order, used to find the oldest atom when the pool is full.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnSerial(pub u64);

/// Static collider on one edge of the play area.
#[derive(Component, Debug)]
pub struct ArenaWall;

//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. Input (movement intent, molecule requests)
//! 2. Tasks (scheduled timers fire)
//! 3. Collisions (Rapier contact events -> gameplay events)
//! 4. Rules (spawn, defeat, collect, create)
//! 5. Physics and rendering (handled by plugins in PostUpdate)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum PlaySet {
    Input,
    Tasks,
    Collisions,
    Rules,
}

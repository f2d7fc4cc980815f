use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::core::components::Player;
use crate::core::config::GameConfig;

/// Per-axis direction from held keys: -1, 0 or 1 (world space, y up).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub x: i8,
    pub y: i8,
}

impl MoveIntent {
    /// Arrows and WASD both count. Left wins over right and up wins over down
    /// when both are held.
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Self {
        let x = if keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
            -1
        } else if keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
            1
        } else {
            0
        };
        let y = if keys.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
            1
        } else if keys.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
            -1
        } else {
            0
        };
        Self { x, y }
    }

    /// Not normalized: diagonals move at `speed` on both axes.
    pub fn velocity(self, speed: f32) -> Vec2 {
        Vec2::new(f32::from(self.x), f32::from(self.y)) * speed
    }
}

/// Overwrites the player's velocity every frame from the held keys.
pub fn drive_player(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut players: Query<&mut Velocity, With<Player>>,
) {
    let linvel = MoveIntent::from_keys(&keys).velocity(cfg.player.speed);
    for mut velocity in &mut players {
        velocity.linvel = linvel;
        velocity.angvel = 0.0;
    }
}

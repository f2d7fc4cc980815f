use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::ArenaWall;
use crate::core::config::GameConfig;
use crate::physics::groups;

const WALL_NAME: [&str; 4] = ["WallBottom", "WallTop", "WallLeft", "WallRight"];
const WALL_THICKNESS: f32 = 10.0;

/// Play area centered on the world origin.
///
/// Gameplay tuning is written in screen space (origin top-left, y down, like
/// the host page); Bevy's world is y-up with the origin in the middle, so
/// every configured position and velocity goes through this mapping.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
        }
    }
}

impl Arena {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            width: cfg.window.width,
            height: cfg.window.height,
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.width * 0.5, self.height * 0.5 - screen.y)
    }

    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.width * 0.5, self.height * 0.5 - world.y)
    }

    pub fn velocity_to_world(screen_velocity: Vec2) -> Vec2 {
        Vec2::new(screen_velocity.x, -screen_velocity.y)
    }
}

/// Four fixed colliders just outside the visible area act as world bounds.
pub fn spawn_arena_walls(mut commands: Commands, arena: Res<Arena>) {
    let half = arena.half_extents();
    let t = WALL_THICKNESS;

    let positions = [
        Vec3::new(0.0, -half.y - t, 0.0),
        Vec3::new(0.0, half.y + t, 0.0),
        Vec3::new(-half.x - t, 0.0, 0.0),
        Vec3::new(half.x + t, 0.0, 0.0),
    ];

    for (index, position) in positions.iter().enumerate() {
        let half_extents = if index < 2 {
            Vec2::new(half.x + 2.0 * t, t)
        } else {
            Vec2::new(t, half.y + 2.0 * t)
        };

        commands.spawn((
            Name::new(WALL_NAME[index]),
            ArenaWall,
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            groups::wall(),
            Friction::coefficient(0.0),
            Transform::from_translation(*position),
        ));
    }
}

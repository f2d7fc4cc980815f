use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

pub mod arena;

pub use arena::Arena;

/// Our wrapper to configure Rapier, world gravity and optional collider outlines.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let debug_render = cfg!(feature = "debug")
            || app
                .world()
                .get_resource::<GameConfig>()
                .is_some_and(|cfg| cfg.physics.debug_render);

        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Update, configure_gravity);

        if debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// Applies the configured gravity to every Rapier context as soon as it exists.
fn configure_gravity(
    mut rapier_cfg: Query<&mut RapierConfiguration, Added<RapierConfiguration>>,
    game_cfg: Res<GameConfig>,
) {
    for mut cfg in &mut rapier_cfg {
        cfg.gravity = Vect::new(0.0, -game_cfg.physics.gravity_y);
        info!("Rapier gravity set to {:?}", cfg.gravity);
    }
}

/// Who touches whom. Pairs outside these filters never generate contacts.
pub mod groups {
    use bevy_rapier2d::prelude::{CollisionGroups, Group};

    pub const WALL: Group = Group::GROUP_1;
    pub const PLAYER: Group = Group::GROUP_2;
    pub const ENEMY: Group = Group::GROUP_3;
    pub const ATOM: Group = Group::GROUP_4;
    pub const PICKUP: Group = Group::GROUP_5;
    pub const PARTICLE: Group = Group::GROUP_6;

    pub fn wall() -> CollisionGroups {
        CollisionGroups::new(WALL, Group::ALL)
    }

    pub fn player_body() -> CollisionGroups {
        CollisionGroups::new(PLAYER, WALL | ENEMY)
    }

    /// Atoms pass through the player's body and are only seen by the sensor.
    pub fn pickup_sensor() -> CollisionGroups {
        CollisionGroups::new(PICKUP, ATOM)
    }

    /// Enemies pass through each other.
    pub fn enemy() -> CollisionGroups {
        CollisionGroups::new(ENEMY, WALL | PLAYER | PARTICLE)
    }

    pub fn atom() -> CollisionGroups {
        CollisionGroups::new(ATOM, WALL | PICKUP)
    }

    pub fn particle() -> CollisionGroups {
        CollisionGroups::new(PARTICLE, WALL | ENEMY)
    }

}

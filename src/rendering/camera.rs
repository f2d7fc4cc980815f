use bevy::prelude::*;

/// Page background behind the play area (#282c34).
pub const BACKGROUND: Color = Color::srgb(0.157, 0.173, 0.204);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Name::new("MainCamera"), Camera2d));
}

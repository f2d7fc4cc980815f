//! Boot scene: builds the placeholder textures in memory and hands over to play.

use bevy::prelude::*;

use crate::app::state::AppState;

pub mod textures;

pub use textures::{Placeholder, PlaceholderShape, SpriteTextures, TextureKey};

const LOG_TARGET: &str = "boot";

pub struct BootScenePlugin;

impl Plugin for BootScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteTextures>()
            .add_systems(OnEnter(AppState::Boot), generate_placeholder_textures);
    }
}

/// Rasterizes every [`TextureKey`] into `Assets<Image>` and requests the play scene.
pub fn generate_placeholder_textures(
    mut images: ResMut<Assets<Image>>,
    mut textures: ResMut<SpriteTextures>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for key in TextureKey::ALL {
        let placeholder = key.placeholder();
        let handle = images.add(placeholder.to_image());
        debug!(
            target: LOG_TARGET,
            "generated '{}' texture {}x{}",
            key.name(),
            placeholder.size,
            placeholder.size
        );
        textures.insert(key, handle);
    }
    info!(target: LOG_TARGET, "{} placeholder textures ready, starting play", textures.len());
    next_state.set(AppState::Play);
}

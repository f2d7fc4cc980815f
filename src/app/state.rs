use bevy::prelude::*;

/// Scene handoff: Boot builds textures once, then hands control to Play.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Procedural placeholder textures are generated here.
    #[default]
    Boot,
    /// Active gameplay for the rest of the session.
    Play,
}

pub mod app;
pub mod boot;
pub mod core;
pub mod gameplay;
pub mod hud;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{GameCorePlugin, GamePlugin};
pub use app::state::AppState;
pub use crate::core::config::{GameConfig, WindowConfig};
pub use hud::{HudSink, HudState};

use bevy::prelude::*;
use bevy::time::common_conditions::once_after_delay;
use std::time::Duration;

use crate::core::config::GameConfig;

/// Quits after `window.autoClose` seconds. Zero or negative keeps the game running.
/// Reads `GameConfig` at build time, so the config must be inserted first.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        let secs = app
            .world()
            .get_resource::<GameConfig>()
            .map_or(0.0, |cfg| cfg.window.auto_close);
        if secs <= 0.0 {
            return;
        }
        info!(seconds = secs, "auto close armed");
        app.add_systems(
            Update,
            request_exit.run_if(once_after_delay(Duration::from_secs_f32(secs))),
        );
    }
}

fn request_exit(mut exit: EventWriter<AppExit>) {
    info!("auto close: requesting exit");
    exit.write(AppExit::Success);
}

// This file is part of Atom Collector.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::auto_close::AutoClosePlugin;
use crate::app::state::AppState;
use crate::boot::BootScenePlugin;
use crate::gameplay::PlayScenePlugin;
use crate::physics::PhysicsSetupPlugin;
use crate::rendering::CameraPlugin;

#[cfg(target_arch = "wasm32")]
use crate::hud::dom::DomHudPlugin as HudPresentationPlugin;
#[cfg(not(target_arch = "wasm32"))]
use crate::hud::ui::UiHudPlugin as HudPresentationPlugin;

/// Scene flow and rules only: no window, camera, physics step or HUD view.
/// Requires `StatesPlugin` and `Assets<Image>` to be present.
pub struct GameCorePlugin;

impl Plugin for GameCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_plugins((BootScenePlugin, PlayScenePlugin, AutoClosePlugin));
    }
}

/// Everything the playable game needs on top of `DefaultPlugins`.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            GameCorePlugin,
            HudPresentationPlugin,
        ));
    }
}

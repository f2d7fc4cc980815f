#![allow(dead_code)]

use atom_collector::core::config::GameConfig;
use atom_collector::{AppState, GameCorePlugin};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

/// Headless app with scene flow and rules but no window, renderer or physics step.
pub fn headless_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(Assets::<Image>::default())
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(cfg)
        .add_plugins(GameCorePlugin);
    app
}

/// Same as [`headless_app`] with every frame advancing the clock by `step`.
pub fn timed_app(cfg: GameConfig, step: Duration) -> App {
    let mut app = headless_app(cfg);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app
}

pub fn seeded_config() -> GameConfig {
    GameConfig {
        seed: Some(1234),
        ..Default::default()
    }
}

/// Runs frames until the boot scene has handed over to play.
pub fn enter_play(app: &mut App) {
    for _ in 0..5 {
        app.update();
        if *app.world().resource::<State<AppState>>().get() == AppState::Play {
            // one more frame so OnEnter commands are applied
            app.update();
            return;
        }
    }
    panic!("boot scene never reached play");
}

pub fn entities_with<C: Component>(app: &mut App) -> Vec<Entity> {
    let mut q = app.world_mut().query_filtered::<Entity, With<C>>();
    q.iter(app.world()).collect()
}

pub fn single<C: Component>(app: &mut App) -> Entity {
    let all = entities_with::<C>(app);
    assert_eq!(all.len(), 1, "expected exactly one entity");
    all[0]
}

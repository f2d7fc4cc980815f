// This file is part of Atom Collector.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::window::WindowResolution;

use atom_collector::core::config::GameConfig;
use atom_collector::GamePlugin;

/// Outcome of config loading, logged once the log plugin is up.
#[derive(Resource, Debug, Default)]
struct ConfigReport {
    source: String,
    error: Option<String>,
    warnings: Vec<String>,
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use atom_collector::core::config::DEFAULT_CONFIG_PATH;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(name = "atom_collector", version, about = "Collect atoms, build molecules")]
    pub struct Cli {
        /// RON configuration file.
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        pub config: PathBuf,
        /// Seed for every random roll (enemy placement, atom bursts).
        #[arg(long)]
        pub seed: Option<u64>,
        /// Quit after this many seconds (0 disables).
        #[arg(long)]
        pub auto_close: Option<f32>,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> (GameConfig, ConfigReport) {
    use clap::Parser;

    let args = cli::Cli::parse();
    let (mut cfg, error) = GameConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    let report = ConfigReport {
        source: args.config.display().to_string(),
        error: error.map(|e| format!("{e:#}")),
        warnings: cfg.validate(),
    };
    (cfg, report)
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> (GameConfig, ConfigReport) {
    console_error_panic_hook::set_once();
    // No filesystem in the browser: the config ships inside the binary.
    let (mut cfg, error) = match ron::from_str::<GameConfig>(include_str!("../assets/config/game.ron")) {
        Ok(cfg) => (cfg, None),
        Err(e) => (GameConfig::default(), Some(format!("embedded config: {e}"))),
    };
    // web/index.html provides this canvas next to the HUD elements
    cfg.window.canvas.get_or_insert_with(|| "#game-canvas".into());
    let warnings = cfg.validate();
    (
        cfg,
        ConfigReport {
            source: "embedded game.ron".into(),
            error,
            warnings,
        },
    )
}

fn report_config(report: Res<ConfigReport>) {
    match &report.error {
        Some(e) => warn!("config {}: {e}; using defaults", report.source),
        None => info!("config loaded from {}", report.source),
    }
    for w in &report.warnings {
        warn!("config: {w}");
    }
}

fn main() {
    let (cfg, report) = load_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: WindowResolution::new(cfg.window.width, cfg.window.height),
                resizable: false,
                canvas: cfg.window.canvas.clone(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .insert_resource(report)
        .add_systems(Startup, report_config)
        .add_plugins(GamePlugin)
        .run();
}

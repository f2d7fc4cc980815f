use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Default location of the game configuration, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.ron";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
    /// CSS selector of an existing canvas to render into (wasm only).
    pub canvas: Option<String>,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            title: "Atom Collector".into(),
            auto_close: 0.0,
            canvas: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in pixels per second squared.
    pub gravity_y: f32,
    pub debug_render: bool,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: 300.0,
            debug_render: false,
        }
    }
}

/// Inclusive range; spawn rolls pick uniformly from `min..=max`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

impl<T> SpawnRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Screen-space start position (origin top-left, y down).
    pub start: (f32, f32),
    pub speed: f32,
    pub size: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: (450.0, 500.0),
            speed: 200.0,
            size: 32.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnemyConfig {
    pub interval_secs: f32,
    pub x_range: SpawnRange<i32>,
    pub y_range: SpawnRange<i32>,
    pub vel_x_range: SpawnRange<i32>,
    pub vel_y_range: SpawnRange<i32>,
    pub bounce: f32,
    pub size: f32,
    pub max_alive: usize,
}
impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3.0,
            x_range: SpawnRange::new(100, 800),
            y_range: SpawnRange::new(100, 300),
            vel_x_range: SpawnRange::new(-150, 150),
            vel_y_range: SpawnRange::new(-150, 150),
            bounce: 1.0,
            size: 64.0,
            max_alive: 32,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AtomConfig {
    /// Number of atoms released by a defeated enemy.
    pub burst: SpawnRange<u32>,
    pub vel_x_range: SpawnRange<i32>,
    /// Screen-space (y down), so negative values launch atoms upward.
    pub vel_y_range: SpawnRange<i32>,
    pub bounce: f32,
    pub radius: f32,
    pub max_alive: usize,
}
impl Default for AtomConfig {
    fn default() -> Self {
        Self {
            burst: SpawnRange::new(2, 4),
            vel_x_range: SpawnRange::new(-100, 100),
            vel_y_range: SpawnRange::new(-200, -50),
            bounce: 0.5,
            radius: 16.0,
            max_alive: 64,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MoleculeConfig {
    pub atoms_needed: u32,
    pub collected_message_secs: f32,
    pub created_message_secs: f32,
    pub missing_message_secs: f32,
}
impl Default for MoleculeConfig {
    fn default() -> Self {
        Self {
            atoms_needed: 3,
            collected_message_secs: 1.5,
            created_message_secs: 3.0,
            missing_message_secs: 1.5,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub enemies: EnemyConfig,
    pub atoms: AtomConfig,
    pub molecule: MoleculeConfig,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON in {}", path.display()))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<anyhow::Error>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.physics.gravity_y <= 0.0 {
            w.push(format!(
                "physics.gravity_y is {}; released atoms will not fall",
                self.physics.gravity_y
            ));
        }
        if self.player.speed <= 0.0 {
            w.push("player.speed must be > 0".into());
        }
        let (sx, sy) = self.player.start;
        if sx < 0.0 || sy < 0.0 || sx > self.window.width || sy > self.window.height {
            w.push(format!("player.start ({sx}, {sy}) lies outside the window"));
        }
        if self.enemies.interval_secs <= 0.0 {
            w.push("enemies.interval_secs must be > 0".into());
        }
        if self.enemies.max_alive == 0 {
            w.push("enemies.max_alive is 0; no enemy will ever spawn".into());
        }
        if self.atoms.max_alive == 0 {
            w.push("atoms.max_alive is 0; defeated enemies release nothing".into());
        }
        fn check_range<T: PartialOrd + std::fmt::Display>(
            w: &mut Vec<String>,
            label: &str,
            r: &SpawnRange<T>,
        ) {
            if r.min > r.max {
                w.push(format!("{label} min ({}) greater than max ({})", r.min, r.max));
            }
        }
        check_range(&mut w, "enemies.x_range", &self.enemies.x_range);
        check_range(&mut w, "enemies.y_range", &self.enemies.y_range);
        check_range(&mut w, "enemies.vel_x_range", &self.enemies.vel_x_range);
        check_range(&mut w, "enemies.vel_y_range", &self.enemies.vel_y_range);
        check_range(&mut w, "atoms.burst", &self.atoms.burst);
        check_range(&mut w, "atoms.vel_x_range", &self.atoms.vel_x_range);
        check_range(&mut w, "atoms.vel_y_range", &self.atoms.vel_y_range);
        if self.atoms.burst.min == 0 {
            w.push("atoms.burst.min is 0; some enemies may release nothing".into());
        }
        if !(0.0..=1.0).contains(&self.enemies.bounce) || !(0.0..=1.0).contains(&self.atoms.bounce)
        {
            w.push("bounce outside 0..1 -> bodies gain energy on contact".into());
        }
        if self.molecule.atoms_needed == 0 {
            w.push("molecule.atoms_needed is 0; molecules are free".into());
        }
        w
    }
}

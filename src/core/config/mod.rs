pub mod config;

pub use config::{
    AtomConfig, EnemyConfig, GameConfig, MoleculeConfig, PhysicsConfig, PlayerConfig,
    SpawnRange, WindowConfig, DEFAULT_CONFIG_PATH,
};

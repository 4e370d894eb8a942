use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Errors surfaced while loading a configuration file.
///
/// The simulation itself has no fatal error class; only configuration
/// parsing can fail, and the caller decides whether to fall back to
/// defaults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    /// Half-extent of the continuous surface plane, centered on the origin.
    pub surface_extent: f32,
    /// Seed for the simulation RNG. `None` seeds with 0.
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PheromoneConfig {
    pub home_decay: f32,
    pub food_decay: f32,
    pub danger_decay: f32,
    /// Markers at or below this strength are culled.
    pub cull_threshold: f32,
    /// Euclidean radius used by directional queries.
    pub query_radius: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BroodConfig {
    pub egg_lay_interval: f32,
    pub egg_hatch_time: f32,
    pub larva_pupation_time: f32,
    pub pupa_hatch_time: f32,
    /// A larva pupates only once it has been fed this much.
    pub larva_fed_threshold: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorkerConfig {
    pub dig_speed: f32,
    pub feed_speed: f32,
    /// Food units moved per completed feeding.
    pub feed_transfer: f32,
    /// Most food a worker will carry at once.
    pub carry_capacity: f32,
    /// Chance per tick to start feeding when carrying food.
    pub feed_start_chance: f64,
    /// Chance to drop a Home marker once the cooldown has elapsed.
    pub pheromone_drop_chance: f64,
    pub pheromone_cooldown_min: f32,
    pub pheromone_cooldown_max: f32,
    pub dig_marker_strength: f32,
    /// Per-second rate of attempting to start a dig while idle.
    pub dig_rate: f32,
    pub home_follow_chance: f64,
    pub danger_avoid_chance: f64,
    /// Chance per tick of a random cardinal step when nothing else fires.
    pub wander_chance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FoodConfig {
    /// Seconds per growth stage.
    pub growth_time: f32,
    pub max_stage: u8,
    pub spawn_interval: f32,
    pub max_sources: usize,
    pub base_amount: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PredatorConfig {
    pub max_predators: usize,
    pub spawn_interval: f32,
    pub action_timer_min: f32,
    pub action_timer_max: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub pheromone: PheromoneConfig,
    pub brood: BroodConfig,
    pub worker: WorkerConfig,
    pub food: FoodConfig,
    pub predator: PredatorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                width: 20,
                height: 10,
                surface_extent: 25.0,
                seed: None,
            },
            pheromone: PheromoneConfig {
                home_decay: 0.05,
                food_decay: 0.05,
                danger_decay: 0.08,
                cull_threshold: 0.1,
                query_radius: 1.5,
            },
            brood: BroodConfig {
                egg_lay_interval: 5.0,
                egg_hatch_time: 10.0,
                larva_pupation_time: 8.0,
                pupa_hatch_time: 6.0,
                larva_fed_threshold: 10.0,
            },
            worker: WorkerConfig {
                dig_speed: 0.5,
                feed_speed: 1.0,
                feed_transfer: 5.0,
                carry_capacity: 5.0,
                feed_start_chance: 0.5,
                pheromone_drop_chance: 0.15,
                pheromone_cooldown_min: 1.0,
                pheromone_cooldown_max: 1.5,
                dig_marker_strength: 0.8,
                dig_rate: 0.25,
                home_follow_chance: 0.3,
                danger_avoid_chance: 0.8,
                wander_chance: 0.2,
            },
            food: FoodConfig {
                growth_time: 4.0,
                max_stage: 3,
                spawn_interval: 12.0,
                max_sources: 10,
                base_amount: 20.0,
            },
            predator: PredatorConfig {
                max_predators: 3,
                spawn_interval: 20.0,
                action_timer_min: 1.0,
                action_timer_max: 4.0,
            },
        }
    }
}

impl AppConfig {
    /// Load a config file, falling back to defaults when it is missing.
    /// A malformed file is an error rather than a silent fallback.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

//! The simulation aggregate. Owns every collection; nothing is global.

use crate::model::config::AppConfig;
use crate::model::history::ColonyStats;
use crate::model::state::brood::{BroodUnit, Queen};
use crate::model::state::food::FoodField;
use crate::model::state::grid::WorldGrid;
use crate::model::state::pheromone::{PheromoneField, PheromoneKind};
use crate::model::state::predator::{PredatorField, PredatorKind};
use crate::model::state::worker::Worker;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod update;

/// Which half of the world the presentation collaborator is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Surface,
    Underground,
}

/// Cardinal movement for queen commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid delta; y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Discrete inputs from the input/presentation collaborator. Queued
/// commands are applied at the start of the next tick; invalid ones
/// degrade to logged no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    PlaceQueen { x: f32, y: f32 },
    SwitchView { view: ViewMode },
    MoveQueen { direction: Direction },
    PlacePheromone { kind: PheromoneKind },
    CommandNearbyWorkersToDig { radius: f32 },
    SpawnFood { x: f32, y: f32 },
    SpawnPredator { x: f32, y: f32, kind: Option<PredatorKind> },
    HarvestFood { source: Uuid, amount: f32 },
}

fn default_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0)
}

#[derive(Serialize, Deserialize)]
pub struct World {
    pub config: AppConfig,
    pub tick: u64,
    pub view: ViewMode,
    pub grid: WorldGrid,
    pub pheromones: PheromoneField,
    pub food: FoodField,
    pub predators: PredatorField,
    pub queen: Queen,
    pub brood: Vec<BroodUnit>,
    pub workers: Vec<Worker>,
    pub colony_food: f32,
    pub stats: ColonyStats,
    #[serde(skip, default = "default_rng")]
    pub rng: ChaCha8Rng,
    #[serde(skip)]
    pending_commands: Vec<Command>,
    food_spawn_timer: f32,
    predator_spawn_timer: f32,
}

impl World {
    pub fn new(config: AppConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.world.seed.unwrap_or(0));
        let grid = WorldGrid::new(config.world.width, config.world.height);
        Self {
            config,
            tick: 0,
            view: ViewMode::Surface,
            grid,
            pheromones: PheromoneField::new(),
            food: FoodField::new(),
            predators: PredatorField::new(),
            queen: Queen::default(),
            brood: Vec::new(),
            workers: Vec::new(),
            colony_food: 0.0,
            stats: ColonyStats::default(),
            rng,
            pending_commands: Vec::new(),
            food_spawn_timer: 0.0,
            predator_spawn_timer: 0.0,
        }
    }

    /// Queue a command for the start of the next tick.
    pub fn queue_command(&mut self, command: Command) {
        self.pending_commands.push(command);
    }
}

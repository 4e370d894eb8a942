//! Read-only snapshots handed to the presentation collaborator.
//!
//! Everything here is an owned value: the renderer keys its own handle
//! tables on the embedded ids and never aliases live simulation state.

use crate::model::history::ColonyStats;
use crate::model::state::brood::{BroodUnit, Queen};
use crate::model::state::food::FoodSource;
use crate::model::state::grid::CellState;
use crate::model::state::pheromone::PheromoneMarker;
use crate::model::state::predator::Predator;
use crate::model::state::worker::Worker;
use crate::model::world::ViewMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub view: ViewMode,
    pub width: u16,
    pub height: u16,
    /// Row-major occupancy of the underground grid.
    pub cells: Vec<CellState>,
    pub queen: Queen,
    pub brood: Vec<BroodUnit>,
    pub workers: Vec<Worker>,
    pub pheromones: Vec<PheromoneMarker>,
    pub food: Vec<FoodSource>,
    pub predators: Vec<Predator>,
    pub colony_food: f32,
    pub stats: ColonyStats,
}

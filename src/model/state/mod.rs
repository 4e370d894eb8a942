pub mod brood;
pub mod food;
pub mod grid;
pub mod pheromone;
pub mod predator;
pub mod snapshot;
pub mod worker;

pub use brood::{BroodStage, BroodUnit, Queen};
pub use food::{FoodField, FoodKind, FoodSource};
pub use grid::{CellState, WorldGrid};
pub use pheromone::{PheromoneField, PheromoneKind, PheromoneMarker};
pub use predator::{Predator, PredatorField, PredatorKind};
pub use snapshot::WorldSnapshot;
pub use worker::{Worker, WorkerState};

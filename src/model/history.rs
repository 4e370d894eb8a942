//! Per-tick event log and aggregate colony statistics.

use crate::model::state::food::FoodKind;
use crate::model::state::pheromone::PheromoneKind;
use crate::model::state::predator::PredatorKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Things that happened during a tick, in occurrence order. Observers
/// narrate from these instead of diffing snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiveEvent {
    QueenPlaced { x: f32, y: f32 },
    ViewSwitched { underground: bool },
    EggLaid { id: Uuid, x: i32, y: i32 },
    EggHatched { id: Uuid },
    LarvaPupated { id: Uuid },
    WorkerEmerged { worker_id: Uuid, x: i32, y: i32 },
    DigCompleted { worker_id: Uuid, x: i32, y: i32 },
    PheromonePlaced { kind: PheromoneKind, x: i32, y: i32 },
    FoodSpawned { id: Uuid, kind: FoodKind },
    FoodHarvested { id: Uuid, amount: f32 },
    FoodDepleted { id: Uuid },
    PredatorSpawned { id: Uuid, kind: PredatorKind },
}

/// Colony-wide counters refreshed at the end of every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColonyStats {
    pub eggs: usize,
    pub larvae: usize,
    pub pupae: usize,
    pub workers: usize,
    pub markers: usize,
    pub food_sources: usize,
    pub predators: usize,
    pub cells_dug: usize,
    pub colony_food: f32,
}

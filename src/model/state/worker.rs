//! Adult worker ants.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a worker is currently doing. Digging and feeding carry their
/// target and completion progress so a tick can resume mid-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerState {
    Idle,
    Digging { target: (i32, i32), progress: f32 },
    Feeding { target_larva: Uuid, progress: f32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: Uuid,
    pub x: i32,
    pub y: i32,
    pub state: WorkerState,
    pub food_carried: f32,
    pub time_since_pheromone: f32,
    /// Randomized per worker at emergence.
    pub pheromone_cooldown: f32,
}

impl Worker {
    pub fn new(x: i32, y: i32, pheromone_cooldown: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            state: WorkerState::Idle,
            food_carried: 0.0,
            time_since_pheromone: 0.0,
            pheromone_cooldown,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == WorkerState::Idle
    }
}

//! The queen and the pre-adult brood stages.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stage payloads for a single brood unit. A unit is always in exactly one
/// stage; transitioning replaces the payload in place until the pupa
/// hatches, at which point the unit is removed and a worker is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BroodStage {
    Egg {
        hatch_timer: f32,
    },
    Larva {
        fed_amount: f32,
        pupation_timer: f32,
        needs_food: bool,
    },
    Pupa {
        hatch_timer: f32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroodUnit {
    pub id: Uuid,
    pub x: i32,
    pub y: i32,
    pub stage: BroodStage,
}

impl BroodUnit {
    pub fn egg(x: i32, y: i32, hatch_timer: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            stage: BroodStage::Egg { hatch_timer },
        }
    }

    pub fn is_hungry_larva(&self) -> bool {
        matches!(self.stage, BroodStage::Larva { needs_food: true, .. })
    }
}

/// The colony's singleton queen. She starts unplaced, is placed once on
/// the surface, and gains an underground cell on the first transition to
/// the underground view. She is never destroyed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Queen {
    pub surface_pos: Option<(f32, f32)>,
    pub grid_pos: Option<(i32, i32)>,
    pub egg_timer: f32,
}

impl Queen {
    pub fn is_placed(&self) -> bool {
        self.surface_pos.is_some()
    }

    pub fn is_underground(&self) -> bool {
        self.grid_pos.is_some()
    }
}

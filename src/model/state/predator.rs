//! Surface predators. They roam; they do not yet hunt.

use crate::model::config::{PredatorConfig, WorldConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredatorKind {
    Spider,
    Beetle,
    Bird,
}

impl PredatorKind {
    pub fn speed(&self) -> f32 {
        match self {
            PredatorKind::Spider => 1.5,
            PredatorKind::Beetle => 0.8,
            PredatorKind::Bird => 3.0,
        }
    }

    pub fn health(&self) -> f32 {
        match self {
            PredatorKind::Spider => 20.0,
            PredatorKind::Beetle => 35.0,
            PredatorKind::Bird => 15.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predator {
    pub id: Uuid,
    pub x: f32,
    pub y: f32,
    pub kind: PredatorKind,
    pub health: f32,
    pub speed: f32,
    pub active: bool,
    pub action_timer: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredatorField {
    predators: Vec<Predator>,
}

impl PredatorField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.predators.iter().filter(|p| p.active).count()
    }

    /// Spawn a predator unless the active-count cap is reached. A missing
    /// kind is drawn uniformly.
    pub fn spawn<R: Rng>(
        &mut self,
        x: f32,
        y: f32,
        kind: Option<PredatorKind>,
        config: &PredatorConfig,
        rng: &mut R,
    ) -> Option<Uuid> {
        if self.active_count() >= config.max_predators {
            tracing::debug!("predator spawn rejected: cap reached");
            return None;
        }
        let kind = kind.unwrap_or_else(|| {
            match rng.gen_range(0..3) {
                0 => PredatorKind::Spider,
                1 => PredatorKind::Beetle,
                _ => PredatorKind::Bird,
            }
        });
        let id = Uuid::new_v4();
        self.predators.push(Predator {
            id,
            x,
            y,
            kind,
            health: kind.health(),
            speed: kind.speed(),
            active: true,
            action_timer: rng.gen_range(config.action_timer_min..config.action_timer_max),
        });
        Some(id)
    }

    /// Count each predator's action timer down; on expiry apply a random
    /// displacement scaled by its speed, clamped to the surface extent,
    /// and re-randomize the timer.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        config: &PredatorConfig,
        world: &WorldConfig,
        rng: &mut R,
    ) {
        let extent = world.surface_extent;
        for predator in self.predators.iter_mut().rev() {
            if !predator.active {
                continue;
            }
            predator.action_timer -= dt;
            if predator.action_timer > 0.0 {
                continue;
            }
            predator.x =
                (predator.x + rng.gen_range(-1.0..1.0) * predator.speed).clamp(-extent, extent);
            predator.y =
                (predator.y + rng.gen_range(-1.0..1.0) * predator.speed).clamp(-extent, extent);
            predator.action_timer = rng.gen_range(config.action_timer_min..config.action_timer_max);
        }
    }

    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }
}

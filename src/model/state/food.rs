//! Surface food sources with staged growth.

use crate::model::config::FoodConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Seedling,
    Leaf,
    Seed,
    DecayedLeaf,
    Insect,
}

impl FoodKind {
    /// Relative spawn weights for unspecified spawns.
    const WEIGHTED: [(FoodKind, u32); 5] = [
        (FoodKind::Seedling, 30),
        (FoodKind::Leaf, 25),
        (FoodKind::Seed, 20),
        (FoodKind::DecayedLeaf, 15),
        (FoodKind::Insect, 10),
    ];

    pub fn weighted_random<R: Rng>(rng: &mut R) -> Self {
        let total: u32 = Self::WEIGHTED.iter().map(|(_, w)| w).sum();
        let mut roll = rng.gen_range(0..total);
        for (kind, weight) in Self::WEIGHTED {
            if roll < weight {
                return kind;
            }
            roll -= weight;
        }
        FoodKind::Seedling
    }

    /// Scales the harvestable amount of a fresh source.
    pub fn amount_modifier(&self) -> f32 {
        match self {
            FoodKind::Seedling => 1.0,
            FoodKind::Leaf => 0.8,
            FoodKind::Seed => 0.5,
            FoodKind::DecayedLeaf => 0.4,
            FoodKind::Insect => 1.5,
        }
    }
}

/// A food source on the continuous surface plane. Only a fully grown
/// source is harvestable; a drained source is removed from the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSource {
    pub id: Uuid,
    pub x: f32,
    pub y: f32,
    pub kind: FoodKind,
    pub growth_stage: u8,
    pub growth_progress: f32,
    pub amount: f32,
    pub active: bool,
}

impl FoodSource {
    pub fn is_fully_grown(&self, config: &FoodConfig) -> bool {
        self.growth_stage >= config.max_stage
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodField {
    sources: Vec<FoodSource>,
}

impl FoodField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a source at a surface point. A missing kind is drawn from the
    /// weighted kind table.
    pub fn spawn<R: Rng>(
        &mut self,
        x: f32,
        y: f32,
        kind: Option<FoodKind>,
        config: &FoodConfig,
        rng: &mut R,
    ) -> Uuid {
        let kind = kind.unwrap_or_else(|| FoodKind::weighted_random(rng));
        let id = Uuid::new_v4();
        self.sources.push(FoodSource {
            id,
            x,
            y,
            kind,
            growth_stage: 0,
            growth_progress: 0.0,
            amount: config.base_amount * kind.amount_modifier(),
            active: true,
        });
        id
    }

    /// Advance growth staging on every active, not-fully-grown source.
    pub fn update(&mut self, dt: f32, config: &FoodConfig) {
        for source in &mut self.sources {
            if !source.active || source.is_fully_grown(config) {
                continue;
            }
            source.growth_progress += dt / config.growth_time;
            if source.growth_progress >= 1.0 {
                source.growth_stage = (source.growth_stage + 1).min(config.max_stage);
                source.growth_progress = 0.0;
            }
        }
    }

    /// Take up to `amount` from a fully grown source; returns the amount
    /// actually harvested. Immature or unknown sources yield 0 and are
    /// left untouched. A drained source is deactivated and removed.
    pub fn harvest(&mut self, id: Uuid, amount: f32, config: &FoodConfig) -> f32 {
        let Some(idx) = self.sources.iter().position(|s| s.id == id) else {
            tracing::debug!(%id, "harvest rejected: unknown source");
            return 0.0;
        };
        let source = &mut self.sources[idx];
        if !source.active || !source.is_fully_grown(config) {
            tracing::debug!(%id, stage = source.growth_stage, "harvest rejected: not grown");
            return 0.0;
        }
        let taken = amount.min(source.amount).max(0.0);
        source.amount = (source.amount - taken).max(0.0);
        if source.amount <= 0.0 {
            source.active = false;
            self.sources.remove(idx);
        }
        taken
    }

    pub fn sources(&self) -> &[FoodSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

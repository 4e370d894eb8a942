//! Decaying scent markers for stigmergic coordination between workers.

use crate::model::config::PheromoneConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of markers workers read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PheromoneKind {
    Home,
    Food,
    Danger,
}

/// A single scent marker at a grid cell. Markers are never merged; several
/// of the same kind may coexist at one cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PheromoneMarker {
    pub id: Uuid,
    pub kind: PheromoneKind,
    pub x: i32,
    pub y: i32,
    pub strength: f32,
    pub decay_rate: f32,
}

/// Append-only collection of markers with linear decay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PheromoneField {
    markers: Vec<PheromoneMarker>,
}

impl PheromoneField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-kind decay rate. Danger fades fastest so stale alarm signals do
    /// not pin workers in place.
    fn decay_rate(kind: PheromoneKind, config: &PheromoneConfig) -> f32 {
        match kind {
            PheromoneKind::Home => config.home_decay,
            PheromoneKind::Food => config.food_decay,
            PheromoneKind::Danger => config.danger_decay,
        }
    }

    pub fn deposit(
        &mut self,
        x: i32,
        y: i32,
        kind: PheromoneKind,
        strength: f32,
        config: &PheromoneConfig,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.markers.push(PheromoneMarker {
            id,
            kind,
            x,
            y,
            strength,
            decay_rate: Self::decay_rate(kind, config),
        });
        id
    }

    /// Weaken every marker and cull the ones at or below the threshold.
    /// Deposit order is preserved; it is observable through the stable
    /// tie-break in [`query_direction`](Self::query_direction).
    pub fn decay_step(&mut self, dt: f32, config: &PheromoneConfig) {
        let threshold = config.cull_threshold;
        self.markers.retain_mut(|m| {
            m.strength -= m.decay_rate * dt;
            m.strength > threshold
        });
    }

    /// Unit step toward the best-scoring marker of `kind` within
    /// `query_radius`, scoring `strength / max(distance, 0.1)`. The first
    /// marker encountered with the maximal score wins. `None` when no
    /// marker qualifies.
    pub fn query_direction(
        &self,
        x: i32,
        y: i32,
        kind: PheromoneKind,
        config: &PheromoneConfig,
    ) -> Option<(i32, i32)> {
        let radius = config.query_radius;
        let mut best: Option<(f32, i32, i32)> = None;
        for m in self.markers.iter().filter(|m| m.kind == kind) {
            let dx = (m.x - x) as f32;
            let dy = (m.y - y) as f32;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius {
                continue;
            }
            let score = m.strength / dist.max(0.1);
            if best.map_or(true, |(s, _, _)| score > s) {
                best = Some((score, m.x - x, m.y - y));
            }
        }
        best.map(|(_, dx, dy)| (dx.signum(), dy.signum()))
    }

    pub fn markers(&self) -> &[PheromoneMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

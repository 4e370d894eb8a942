//! Queen egg-laying and brood stage transitions.

use crate::model::config::{BroodConfig, WorkerConfig};
use crate::model::history::LiveEvent;
use crate::model::state::brood::{BroodStage, BroodUnit, Queen};
use crate::model::state::worker::Worker;
use crate::model::world::ViewMode;
use rand::Rng;

/// Accumulate the queen's lay timer while she is underground and the
/// underground view is active; lay an egg at her cell on each interval.
pub fn queen_system(
    queen: &mut Queen,
    view: ViewMode,
    dt: f32,
    config: &BroodConfig,
    brood: &mut Vec<BroodUnit>,
    events: &mut Vec<LiveEvent>,
) {
    let Some((qx, qy)) = queen.grid_pos else {
        return;
    };
    if view != ViewMode::Underground {
        return;
    }
    queen.egg_timer += dt;
    if queen.egg_timer >= config.egg_lay_interval {
        queen.egg_timer = 0.0;
        let egg = BroodUnit::egg(qx, qy, config.egg_hatch_time);
        events.push(LiveEvent::EggLaid {
            id: egg.id,
            x: qx,
            y: qy,
        });
        tracing::info!(x = qx, y = qy, total = brood.len() + 1, "egg laid");
        brood.push(egg);
    }
}

/// Age every brood unit by `dt` and apply due stage transitions. The
/// vector is traversed tail-to-head so hatching pupae can be removed
/// without skipping the units behind them.
pub fn brood_system<R: Rng>(
    brood: &mut Vec<BroodUnit>,
    workers: &mut Vec<Worker>,
    dt: f32,
    config: &BroodConfig,
    worker_config: &WorkerConfig,
    rng: &mut R,
    events: &mut Vec<LiveEvent>,
) {
    for i in (0..brood.len()).rev() {
        let unit = &mut brood[i];
        let mut hatched = false;
        match &mut unit.stage {
            BroodStage::Egg { hatch_timer } => {
                *hatch_timer -= dt;
                if *hatch_timer <= 0.0 {
                    unit.stage = BroodStage::Larva {
                        fed_amount: 0.0,
                        pupation_timer: config.larva_pupation_time,
                        needs_food: true,
                    };
                    events.push(LiveEvent::EggHatched { id: unit.id });
                }
            }
            BroodStage::Larva {
                fed_amount,
                pupation_timer,
                needs_food,
            } => {
                // The pupation clock only runs on a fully fed larva.
                if *needs_food || *fed_amount < config.larva_fed_threshold {
                    continue;
                }
                *pupation_timer -= dt;
                if *pupation_timer <= 0.0 {
                    unit.stage = BroodStage::Pupa {
                        hatch_timer: config.pupa_hatch_time,
                    };
                    events.push(LiveEvent::LarvaPupated { id: unit.id });
                }
            }
            BroodStage::Pupa { hatch_timer } => {
                *hatch_timer -= dt;
                hatched = *hatch_timer <= 0.0;
            }
        }
        if hatched {
            let unit = brood.remove(i);
            let cooldown = rng.gen_range(
                worker_config.pheromone_cooldown_min..worker_config.pheromone_cooldown_max,
            );
            let worker = Worker::new(unit.x, unit.y, cooldown);
            events.push(LiveEvent::WorkerEmerged {
                worker_id: worker.id,
                x: worker.x,
                y: worker.y,
            });
            tracing::info!(x = worker.x, y = worker.y, "pupa hatched into worker");
            workers.push(worker);
        }
    }
}

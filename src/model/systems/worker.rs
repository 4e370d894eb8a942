//! Per-worker decision policy.
//!
//! Evaluated once per worker per tick in a fixed priority order: finish an
//! in-progress dig or feeding, then try the idle branches (feed a hungry
//! larva, drop a Home marker, start a dig, move). Each idle branch is a
//! probabilistic gate; a failed gate falls through to the next branch.

use crate::model::config::AppConfig;
use crate::model::history::LiveEvent;
use crate::model::state::brood::{BroodStage, BroodUnit};
use crate::model::state::grid::WorldGrid;
use crate::model::state::pheromone::{PheromoneField, PheromoneKind};
use crate::model::state::worker::{Worker, WorkerState};
use rand::Rng;

/// Everything a worker may read or mutate during its turn. The worker
/// vector itself stays outside so the caller can iterate it mutably.
pub struct WorkerContext<'a> {
    pub grid: &'a mut WorldGrid,
    pub pheromones: &'a mut PheromoneField,
    pub brood: &'a mut Vec<BroodUnit>,
    pub colony_food: &'a mut f32,
    pub config: &'a AppConfig,
    pub events: &'a mut Vec<LiveEvent>,
}

pub fn worker_system<R: Rng>(worker: &mut Worker, dt: f32, ctx: &mut WorkerContext, rng: &mut R) {
    worker.time_since_pheromone += dt;

    match worker.state.clone() {
        WorkerState::Digging { target, progress } => {
            let progress = progress + ctx.config.worker.dig_speed * dt;
            if progress >= 1.0 {
                complete_digging(worker, target, ctx);
            } else {
                worker.state = WorkerState::Digging { target, progress };
            }
        }
        WorkerState::Feeding {
            target_larva,
            progress,
        } => {
            let progress = progress + ctx.config.worker.feed_speed * dt;
            if progress >= 1.0 {
                complete_feeding(worker, target_larva, ctx);
            } else {
                worker.state = WorkerState::Feeding {
                    target_larva,
                    progress,
                };
            }
        }
        WorkerState::Idle => idle_turn(worker, dt, ctx, rng),
    }
}

/// Re-check the target at completion time: another worker may have dug it
/// first, in which case this worker aborts with zero effect.
fn complete_digging(worker: &mut Worker, target: (i32, i32), ctx: &mut WorkerContext) {
    worker.state = WorkerState::Idle;
    let (tx, ty) = target;
    if !ctx.grid.dig(tx, ty) {
        tracing::debug!(x = tx, y = ty, "dig target stale, aborting");
        return;
    }
    ctx.pheromones.deposit(
        tx,
        ty,
        PheromoneKind::Home,
        ctx.config.worker.dig_marker_strength,
        &ctx.config.pheromone,
    );
    ctx.events.push(LiveEvent::DigCompleted {
        worker_id: worker.id,
        x: tx,
        y: ty,
    });
}

/// Move food from the worker into the target larva, clamped so the larva
/// never holds more than the pupation threshold. A target that pupated or
/// hatched away in the meantime aborts the feeding.
fn complete_feeding(worker: &mut Worker, target_larva: uuid::Uuid, ctx: &mut WorkerContext) {
    worker.state = WorkerState::Idle;
    let threshold = ctx.config.brood.larva_fed_threshold;
    let Some(unit) = ctx.brood.iter_mut().find(|b| b.id == target_larva) else {
        tracing::debug!(%target_larva, "feeding target gone, aborting");
        return;
    };
    let BroodStage::Larva {
        fed_amount,
        needs_food,
        ..
    } = &mut unit.stage
    else {
        tracing::debug!(%target_larva, "feeding target no longer a larva, aborting");
        return;
    };
    let transferred = ctx
        .config
        .worker
        .feed_transfer
        .min(worker.food_carried)
        .min(threshold - *fed_amount)
        .max(0.0);
    *fed_amount = (*fed_amount + transferred).min(threshold);
    worker.food_carried = (worker.food_carried - transferred).max(0.0);
    if *fed_amount >= threshold {
        *needs_food = false;
    }
}

fn idle_turn<R: Rng>(worker: &mut Worker, dt: f32, ctx: &mut WorkerContext, rng: &mut R) {
    let cfg = &ctx.config.worker;

    // a. A hungry larva takes priority: feed it, or fetch a ration from
    //    the colony reserve first when empty-handed.
    if let Some(larva_id) = ctx.brood.iter().find(|b| b.is_hungry_larva()).map(|b| b.id) {
        if worker.food_carried > 0.0 {
            if rng.gen_bool(cfg.feed_start_chance) {
                worker.state = WorkerState::Feeding {
                    target_larva: larva_id,
                    progress: 0.0,
                };
                return;
            }
        } else if *ctx.colony_food > 0.0 {
            let ration = cfg.carry_capacity.min(*ctx.colony_food);
            worker.food_carried += ration;
            *ctx.colony_food -= ration;
            return;
        }
    }

    // b. Occasionally refresh the home trail once the cooldown elapses.
    if worker.time_since_pheromone >= worker.pheromone_cooldown
        && rng.gen_bool(cfg.pheromone_drop_chance)
    {
        let strength = rng.gen_range(0.7..1.0);
        ctx.pheromones.deposit(
            worker.x,
            worker.y,
            PheromoneKind::Home,
            strength,
            &ctx.config.pheromone,
        );
        worker.time_since_pheromone = 0.0;
        return;
    }

    // c. Time-scaled chance to start digging an adjacent soil cell.
    if rng.gen_bool(f64::from((cfg.dig_rate * dt).clamp(0.0, 1.0))) {
        let neighbors = ctx.grid.neighbors4(worker.x, worker.y, rng);
        if let Some(&target) = neighbors.iter().find(|&&(nx, ny)| ctx.grid.is_soil(nx, ny)) {
            worker.state = WorkerState::Digging {
                target,
                progress: 0.0,
            };
            return;
        }
    }

    // d. Stigmergic movement. The gate order and probabilities are part of
    //    the observable behavior; later branches can be starved by earlier
    //    draws.
    let step = choose_step(worker, ctx, rng);
    if let Some((dx, dy)) = step {
        let (nx, ny) = (worker.x + dx, worker.y + dy);
        if ctx.grid.is_passable(nx, ny) {
            worker.x = nx;
            worker.y = ny;
        } else {
            tracing::debug!(x = nx, y = ny, "move blocked");
        }
    }
}

fn choose_step<R: Rng>(
    worker: &Worker,
    ctx: &WorkerContext,
    rng: &mut R,
) -> Option<(i32, i32)> {
    let cfg = &ctx.config.worker;
    let pher_cfg = &ctx.config.pheromone;
    let (x, y) = (worker.x, worker.y);

    if let Some(dir) = ctx
        .pheromones
        .query_direction(x, y, PheromoneKind::Food, pher_cfg)
    {
        return Some(dir);
    }
    if rng.gen_bool(cfg.home_follow_chance) {
        if let Some(dir) = ctx
            .pheromones
            .query_direction(x, y, PheromoneKind::Home, pher_cfg)
        {
            return Some(dir);
        }
    }
    if rng.gen_bool(cfg.danger_avoid_chance) {
        if let Some((dx, dy)) = ctx
            .pheromones
            .query_direction(x, y, PheromoneKind::Danger, pher_cfg)
        {
            return Some((-dx, -dy));
        }
    }
    if rng.gen_bool(cfg.wander_chance) {
        let dirs = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        return Some(dirs[rng.gen_range(0..4)]);
    }
    None
}

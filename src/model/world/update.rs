//! Tick orchestration.
//!
//! Within one tick the order is fixed: queued commands, brood, workers,
//! pheromone decay, food, predators, stats. The whole tick is the atomic
//! unit of mutation; nothing outside observes intermediate state.

use crate::model::history::{ColonyStats, LiveEvent};
use crate::model::state::brood::BroodStage;
use crate::model::state::pheromone::PheromoneKind;
use crate::model::state::snapshot::WorldSnapshot;
use crate::model::state::worker::WorkerState;
use crate::model::systems::brood::{brood_system, queen_system};
use crate::model::systems::worker::{worker_system, WorkerContext};
use crate::model::world::{Command, ViewMode, World};
use rand::Rng;

impl World {
    /// Advance the simulation by `dt` seconds. Returns the tick's events
    /// in occurrence order.
    pub fn update(&mut self, dt: f32) -> Vec<LiveEvent> {
        let mut events = Vec::new();

        self.apply_commands(&mut events);

        queen_system(
            &mut self.queen,
            self.view,
            dt,
            &self.config.brood,
            &mut self.brood,
            &mut events,
        );
        brood_system(
            &mut self.brood,
            &mut self.workers,
            dt,
            &self.config.brood,
            &self.config.worker,
            &mut self.rng,
            &mut events,
        );

        {
            let World {
                grid,
                pheromones,
                brood,
                workers,
                colony_food,
                config,
                rng,
                ..
            } = self;
            let mut ctx = WorkerContext {
                grid,
                pheromones,
                brood,
                colony_food,
                config,
                events: &mut events,
            };
            for worker in workers.iter_mut() {
                worker_system(worker, dt, &mut ctx, rng);
            }
        }

        self.pheromones.decay_step(dt, &self.config.pheromone);
        self.food.update(dt, &self.config.food);
        self.spawn_surface_food(dt, &mut events);
        self.predators
            .update(dt, &self.config.predator, &self.config.world, &mut self.rng);
        self.spawn_surface_predators(dt, &mut events);

        self.tick += 1;
        self.refresh_stats();
        events
    }

    fn apply_commands(&mut self, events: &mut Vec<LiveEvent>) {
        for command in std::mem::take(&mut self.pending_commands) {
            self.apply_command(command, events);
        }
    }

    fn apply_command(&mut self, command: Command, events: &mut Vec<LiveEvent>) {
        match command {
            Command::PlaceQueen { x, y } => {
                if self.queen.is_placed() {
                    tracing::debug!("place queen rejected: already placed");
                    return;
                }
                self.queen.surface_pos = Some((x, y));
                tracing::info!(x, y, "queen placed");
                events.push(LiveEvent::QueenPlaced { x, y });
            }
            Command::SwitchView { view } => {
                if self.view == view {
                    return;
                }
                self.view = view;
                if view == ViewMode::Underground {
                    let entry = self.grid.carve_entry();
                    if self.queen.is_placed() && !self.queen.is_underground() {
                        self.queen.grid_pos = Some(entry);
                    }
                }
                events.push(LiveEvent::ViewSwitched {
                    underground: view == ViewMode::Underground,
                });
            }
            Command::MoveQueen { direction } => {
                let Some((qx, qy)) = self.queen.grid_pos else {
                    tracing::debug!("move queen rejected: not underground");
                    return;
                };
                let (dx, dy) = direction.delta();
                let (tx, ty) = (qx + dx, qy + dy);
                if !self.grid.in_bounds(tx, ty) {
                    tracing::debug!(x = tx, y = ty, "queen move blocked: boundary");
                    return;
                }
                if !self.grid.is_passable(tx, ty) {
                    tracing::debug!(x = tx, y = ty, "queen move blocked: soil");
                    return;
                }
                self.queen.grid_pos = Some((tx, ty));
            }
            Command::PlacePheromone { kind } => {
                let Some((qx, qy)) = self.queen.grid_pos else {
                    tracing::debug!("place pheromone rejected: queen not underground");
                    return;
                };
                self.pheromones
                    .deposit(qx, qy, kind, 1.0, &self.config.pheromone);
                events.push(LiveEvent::PheromonePlaced { kind, x: qx, y: qy });
            }
            Command::CommandNearbyWorkersToDig { radius } => {
                let Some((qx, qy)) = self.queen.grid_pos else {
                    tracing::debug!("dig command rejected: queen not underground");
                    return;
                };
                for worker in self.workers.iter_mut() {
                    if worker.state != WorkerState::Idle {
                        continue;
                    }
                    let dx = (worker.x - qx) as f32;
                    let dy = (worker.y - qy) as f32;
                    if (dx * dx + dy * dy).sqrt() > radius {
                        continue;
                    }
                    let neighbors = self.grid.neighbors4(worker.x, worker.y, &mut self.rng);
                    if let Some(&target) =
                        neighbors.iter().find(|&&(nx, ny)| self.grid.is_soil(nx, ny))
                    {
                        worker.state = WorkerState::Digging {
                            target,
                            progress: 0.0,
                        };
                    }
                }
            }
            Command::SpawnFood { x, y } => {
                let id = self
                    .food
                    .spawn(x, y, None, &self.config.food, &mut self.rng);
                if let Some(source) = self.food.sources().iter().find(|s| s.id == id) {
                    events.push(LiveEvent::FoodSpawned {
                        id,
                        kind: source.kind,
                    });
                }
            }
            Command::SpawnPredator { x, y, kind } => {
                if let Some(id) = self
                    .predators
                    .spawn(x, y, kind, &self.config.predator, &mut self.rng)
                {
                    if let Some(p) = self.predators.predators().iter().find(|p| p.id == id) {
                        events.push(LiveEvent::PredatorSpawned { id, kind: p.kind });
                    }
                }
            }
            Command::HarvestFood { source, amount } => {
                let harvested = self.food.harvest(source, amount, &self.config.food);
                if harvested > 0.0 {
                    self.colony_food += harvested;
                    events.push(LiveEvent::FoodHarvested {
                        id: source,
                        amount: harvested,
                    });
                    if !self.food.sources().iter().any(|s| s.id == source) {
                        events.push(LiveEvent::FoodDepleted { id: source });
                    }
                }
            }
        }
    }

    /// Keep the surface stocked up to the configured source cap.
    fn spawn_surface_food(&mut self, dt: f32, events: &mut Vec<LiveEvent>) {
        self.food_spawn_timer += dt;
        if self.food_spawn_timer < self.config.food.spawn_interval {
            return;
        }
        self.food_spawn_timer = 0.0;
        if self.food.len() >= self.config.food.max_sources {
            return;
        }
        let extent = self.config.world.surface_extent;
        let x = self.rng.gen_range(-extent..extent);
        let y = self.rng.gen_range(-extent..extent);
        let id = self
            .food
            .spawn(x, y, None, &self.config.food, &mut self.rng);
        if let Some(source) = self.food.sources().iter().find(|s| s.id == id) {
            events.push(LiveEvent::FoodSpawned {
                id,
                kind: source.kind,
            });
        }
    }

    fn spawn_surface_predators(&mut self, dt: f32, events: &mut Vec<LiveEvent>) {
        self.predator_spawn_timer += dt;
        if self.predator_spawn_timer < self.config.predator.spawn_interval {
            return;
        }
        self.predator_spawn_timer = 0.0;
        let extent = self.config.world.surface_extent;
        let x = self.rng.gen_range(-extent..extent);
        let y = self.rng.gen_range(-extent..extent);
        if let Some(id) = self
            .predators
            .spawn(x, y, None, &self.config.predator, &mut self.rng)
        {
            if let Some(p) = self.predators.predators().iter().find(|p| p.id == id) {
                events.push(LiveEvent::PredatorSpawned { id, kind: p.kind });
            }
        }
    }

    fn refresh_stats(&mut self) {
        let mut stats = ColonyStats {
            workers: self.workers.len(),
            markers: self.pheromones.len(),
            food_sources: self.food.len(),
            predators: self.predators.active_count(),
            cells_dug: self.grid.count_empty(),
            colony_food: self.colony_food,
            ..ColonyStats::default()
        };
        for unit in &self.brood {
            match unit.stage {
                BroodStage::Egg { .. } => stats.eggs += 1,
                BroodStage::Larva { .. } => stats.larvae += 1,
                BroodStage::Pupa { .. } => stats.pupae += 1,
            }
        }
        self.stats = stats;
    }

    /// Owned snapshot for the presentation collaborator.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            view: self.view,
            width: self.grid.width,
            height: self.grid.height,
            cells: self.grid.occupancy(),
            queen: self.queen.clone(),
            brood: self.brood.clone(),
            workers: self.workers.clone(),
            pheromones: self.pheromones.markers().to_vec(),
            food: self.food.sources().to_vec(),
            predators: self.predators.predators().to_vec(),
            colony_food: self.colony_food,
            stats: self.stats.clone(),
        }
    }

    /// Manual marker placement at the queen's cell, used by debug tooling.
    pub fn place_pheromone_at_queen(&mut self, kind: PheromoneKind) {
        self.queue_command(Command::PlacePheromone { kind });
    }
}

//! End-to-end scenarios driven purely through the external interface:
//! queued commands in, events and snapshots out.

use formicarium_lib::model::config::AppConfig;
use formicarium_lib::model::history::LiveEvent;
use formicarium_lib::model::state::brood::BroodStage;
use formicarium_lib::model::state::pheromone::PheromoneKind;
use formicarium_lib::model::state::worker::{Worker, WorkerState};
use formicarium_lib::model::world::{Command, ViewMode, World};

const DT: f32 = 0.1;

fn underground_world(seed: u64) -> World {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    let mut world = World::new(config);
    world.queue_command(Command::PlaceQueen { x: 0.0, y: 0.0 });
    world.queue_command(Command::SwitchView {
        view: ViewMode::Underground,
    });
    world.update(0.0);
    world
}

#[test]
fn scenario_a_first_underground_switch_carves_entry_and_seats_queen() {
    let world = underground_world(42);
    assert!(
        world.grid.is_passable(10, 0),
        "entry cell (width/2, 0) must be carved"
    );
    assert_eq!(world.grid.count_empty(), 1, "only the entry cell is dug");
    assert_eq!(world.queen.grid_pos, Some((10, 0)));
}

#[test]
fn scenario_b_first_egg_after_five_seconds_at_queen_cell() {
    let mut world = underground_world(42);
    let mut laid_at_tick = None;
    for tick in 1..=50u64 {
        let events = world.update(DT);
        if events
            .iter()
            .any(|e| matches!(e, LiveEvent::EggLaid { .. }))
        {
            laid_at_tick = Some(tick);
        }
    }
    assert_eq!(laid_at_tick, Some(50), "one egg, at 5.0 simulated seconds");
    assert_eq!(world.brood.len(), 1);

    let egg = &world.brood[0];
    assert_eq!((egg.x, egg.y), (10, 0), "egg sits at the queen's cell");
    match egg.stage {
        BroodStage::Egg { hatch_timer } => {
            // The egg ages by the dt of the tick it was laid in.
            let expected = world.config.brood.egg_hatch_time - DT;
            assert!(
                (hatch_timer - expected).abs() < 1e-4,
                "hatch timer initialized to EGG_HATCH_TIME, got {hatch_timer}"
            );
        }
        _ => panic!("first brood unit must still be an egg"),
    }
}

#[test]
fn scenario_c_contested_dig_target_digs_once() {
    let mut world = underground_world(42);
    let mut first = Worker::new(5, 4, 1.0);
    first.state = WorkerState::Digging {
        target: (5, 5),
        progress: 0.99,
    };
    let mut second = Worker::new(5, 6, 1.0);
    second.state = WorkerState::Digging {
        target: (5, 5),
        progress: 0.99,
    };
    world.workers.push(first);
    world.workers.push(second);

    let dug_before = world.grid.count_empty();
    let events = world.update(DT);

    assert_eq!(
        world.grid.count_empty(),
        dug_before + 1,
        "the contested cell is dug exactly once"
    );
    let digs: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, LiveEvent::DigCompleted { x: 5, y: 5, .. }))
        .collect();
    assert_eq!(digs.len(), 1, "only the winner reports a completed dig");
    let home_markers = world
        .pheromones
        .markers()
        .iter()
        .filter(|m| m.kind == PheromoneKind::Home && (m.x, m.y) == (5, 5))
        .count();
    assert_eq!(home_markers, 1, "the loser deposits no marker");
    assert!(world.workers.iter().all(|w| w.state == WorkerState::Idle));
}

#[test]
fn scenario_d_immature_food_source_yields_nothing() {
    let mut world = underground_world(42);
    world.queue_command(Command::SpawnFood { x: 1.0, y: 1.0 });
    world.update(DT);
    let source = &world.food.sources()[0];
    let (id, amount_before) = (source.id, source.amount);
    assert!(source.growth_stage < world.config.food.max_stage);

    world.queue_command(Command::HarvestFood {
        source: id,
        amount: 5.0,
    });
    let events = world.update(DT);

    assert!(!events
        .iter()
        .any(|e| matches!(e, LiveEvent::FoodHarvested { .. })));
    assert_eq!(world.colony_food, 0.0);
    assert_eq!(world.food.sources()[0].amount, amount_before);
}

#[test]
fn queen_cannot_walk_into_soil_or_off_grid() {
    use formicarium_lib::model::world::Direction;
    let mut world = underground_world(42);
    for direction in [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ] {
        world.queue_command(Command::MoveQueen { direction });
    }
    world.update(DT);
    assert_eq!(
        world.queen.grid_pos,
        Some((10, 0)),
        "every neighbor is soil or out of bounds"
    );
}

#[test]
fn dig_command_mobilizes_only_nearby_idle_workers() {
    let mut world = underground_world(42);
    // Disable self-started digs so only the command can mobilize anyone.
    world.config.worker.dig_rate = 0.0;
    world.workers.push(Worker::new(10, 0, 1.0)); // at the queen
    world.workers.push(Worker::new(19, 9, 1.0)); // far corner

    world.queue_command(Command::CommandNearbyWorkersToDig { radius: 3.0 });
    world.update(DT);

    assert!(
        matches!(world.workers[0].state, WorkerState::Digging { .. }),
        "worker beside the queen starts digging"
    );
    assert_eq!(
        world.workers[1].state,
        WorkerState::Idle,
        "worker outside the radius is not mobilized"
    );
}

#[test]
fn predator_cap_holds_under_repeated_spawn_commands() {
    let mut world = underground_world(42);
    for i in 0..10 {
        world.queue_command(Command::SpawnPredator {
            x: i as f32,
            y: 0.0,
            kind: None,
        });
    }
    world.update(DT);
    assert_eq!(
        world.predators.active_count(),
        world.config.predator.max_predators
    );
}

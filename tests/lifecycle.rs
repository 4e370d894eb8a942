//! Full brood lifecycle, end to end: the queen lays, the egg hatches, a
//! provisioned worker feeds the larva, and the pupa hatches into a new
//! worker.

use formicarium_lib::model::config::AppConfig;
use formicarium_lib::model::history::LiveEvent;
use formicarium_lib::model::state::worker::Worker;
use formicarium_lib::model::world::{Command, ViewMode, World};

#[test]
fn test_colony_raises_a_new_worker() {
    let mut config = AppConfig::default();
    config.world.seed = Some(7);
    let mut world = World::new(config);

    world.queue_command(Command::PlaceQueen { x: 0.0, y: 0.0 });
    world.queue_command(Command::SwitchView {
        view: ViewMode::Underground,
    });
    world.update(0.0);

    // Bootstrap: one founding worker and a stocked reserve, standing in
    // for an earlier foraging season.
    world.workers.push(Worker::new(10, 0, 1.2));
    world.colony_food = 50.0;

    let mut hatched = 0;
    let mut pupated = 0;
    let mut emerged = 0;
    // 60 simulated seconds: lay at 5s, hatch at 15s, feed, pupate ~8s
    // after feeding, hatch 6s later.
    for _ in 0..600 {
        for event in world.update(0.1) {
            match event {
                LiveEvent::EggHatched { .. } => hatched += 1,
                LiveEvent::LarvaPupated { .. } => pupated += 1,
                LiveEvent::WorkerEmerged { .. } => emerged += 1,
                _ => {}
            }
        }
    }

    assert!(hatched >= 1, "at least one egg must hatch");
    assert!(pupated >= 1, "a fed larva must pupate");
    assert!(emerged >= 1, "a pupa must hatch into a worker");
    assert!(
        world.workers.len() >= 2,
        "colony should have raised a worker beyond the founder"
    );
    assert!(
        world.colony_food < 50.0,
        "raising brood must consume the reserve"
    );
}

#[test]
fn test_starved_colony_raises_no_workers() {
    let mut config = AppConfig::default();
    config.world.seed = Some(7);
    let mut world = World::new(config);

    world.queue_command(Command::PlaceQueen { x: 0.0, y: 0.0 });
    world.queue_command(Command::SwitchView {
        view: ViewMode::Underground,
    });
    world.update(0.0);
    world.workers.push(Worker::new(10, 0, 1.2));
    // No colony food: larvae stay hungry forever.

    for _ in 0..600 {
        world.update(0.1);
    }

    assert!(world.stats.larvae >= 1, "hatched larvae accumulate");
    assert_eq!(world.stats.pupae, 0, "unfed larvae never pupate");
    assert_eq!(world.workers.len(), 1, "only the founder remains");
}

#[test]
fn test_workers_extend_tunnels_over_time() {
    let mut config = AppConfig::default();
    config.world.seed = Some(11);
    let mut world = World::new(config);

    world.queue_command(Command::PlaceQueen { x: 0.0, y: 0.0 });
    world.queue_command(Command::SwitchView {
        view: ViewMode::Underground,
    });
    world.update(0.0);
    for _ in 0..4 {
        world.workers.push(Worker::new(10, 0, 1.2));
    }

    for _ in 0..600 {
        world.update(0.1);
    }

    assert!(
        world.stats.cells_dug > 1,
        "idle workers should have dug beyond the entry, got {}",
        world.stats.cells_dug
    );
}

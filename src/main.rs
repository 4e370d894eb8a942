use anyhow::Result;
use clap::Parser;
use formicarium_lib::model::config::AppConfig;
use formicarium_lib::model::world::{Command, ViewMode, World};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of simulation ticks to run
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// RNG seed override
    #[arg(short, long)]
    seed: Option<u64>,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Write the final world snapshot as JSON to this path
    #[arg(long)]
    snapshot_out: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let mut world = World::new(config);

    // The canonical session: place the queen at the nest hole and go
    // underground, then let the colony run.
    world.queue_command(Command::PlaceQueen { x: 0.0, y: 0.0 });
    world.queue_command(Command::SwitchView {
        view: ViewMode::Underground,
    });

    for tick in 0..args.ticks {
        let events = world.update(args.dt);
        for event in &events {
            tracing::debug!(?event, tick, "event");
        }
        if tick % 100 == 0 {
            let s = &world.stats;
            tracing::info!(
                tick,
                eggs = s.eggs,
                larvae = s.larvae,
                pupae = s.pupae,
                workers = s.workers,
                markers = s.markers,
                dug = s.cells_dug,
                food = s.colony_food,
                "colony"
            );
        }
    }

    if let Some(path) = args.snapshot_out {
        let snapshot = world.snapshot();
        std::fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
        tracing::info!(path = %path, "snapshot written");
    }

    Ok(())
}

use anyhow::Result;
use autopilot_sim::simulation::{SimConfig, SimWorld, LANES};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "autopilot_sim")]
#[command(about = "Highway traffic simulation with a rule-based autopilot")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "600")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value_t = 1.0 / 30.0)]
    delta: f32,

    /// Seed for reproducible traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Number of lanes on the road
    #[arg(long, default_value_t = LANES)]
    lanes: usize,

    /// Start with the autopilot disengaged
    #[arg(long)]
    manual: bool,

    /// Ticks between console summaries
    #[arg(long, default_value = "30")]
    report_every: u32,

    /// Print the road view with every summary
    #[arg(long)]
    map: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = SimConfig {
        lanes: cli.lanes,
        seed: cli.seed,
        autopilot: !cli.manual,
        ..SimConfig::default()
    };

    run_headless(config, cli.ticks, cli.delta, cli.report_every.max(1), cli.map)
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(
    config: SimConfig,
    ticks: u32,
    delta: f32,
    report_every: u32,
    map: bool,
) -> Result<()> {
    println!("Running autopilot simulation in headless mode...");
    println!("Ticks: {}, Delta: {:.4}s, Lanes: {}", ticks, delta, config.lanes);
    println!();

    let mut world = SimWorld::with_config(config)?;

    println!("Initial state:");
    world.print_summary();
    if map {
        world.draw_road();
    }
    println!();

    for tick in 1..=ticks {
        world.tick(delta, &[]);

        if tick % report_every == 0 && tick < ticks {
            println!(
                "--- After tick {} ({:.1}s simulated time) ---",
                tick,
                world.score().time
            );
            world.print_summary();
            if map {
                world.draw_road();
            }
            println!();
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    if map {
        world.draw_road();
    }

    let score = world.score();
    info!("=== SIMULATION COMPLETE ===");
    info!("Ticks: {}", score.frames);
    info!("Simulated time: {:.2}s", score.time);
    info!("Total traffic spawned: {}", score.traffic_spawned);
    info!("Active traffic: {}", world.traffic().len());
    info!("Autopilot lane changes: {}", score.autopilot_lane_changes);
    info!("Collisions: {}", score.collisions);
    info!("Collisions per minute: {:.2}", score.collision_rate());

    Ok(())
}

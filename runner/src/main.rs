mod game_loop;
mod steering;
mod trace_renderer;

use clap::Parser;
use snake_engine::config::SettingsFile;
use snake_engine::snake::SnakeSettings;
use snake_engine::{log, logger, SessionRng};

use game_loop::{GameLoop, LoopOptions};

#[derive(Parser)]
#[command(name = "snake_runner", about = "Headless host loop for the snake engine")]
struct Args {
    /// YAML settings file; defaults are used when it does not exist
    #[arg(long, default_value = "snake_settings.yaml")]
    config: String,

    /// Stop after this many ticks even if the snake is still alive
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    #[arg(long)]
    seed: Option<u64>,

    /// Reverse the snake after every N eaten targets
    #[arg(long)]
    reverse_every: Option<u32>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.debug);

    let settings_file = SettingsFile::yaml(&args.config);
    log!("Loading settings from {}", settings_file.path().display());
    let settings: SnakeSettings = settings_file.load()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting run: arena {}x{}, segment {}, length {}, seed {}",
        settings.arena_width,
        settings.arena_height,
        settings.segment_size,
        settings.initial_length,
        rng.seed()
    );

    let options = LoopOptions {
        max_ticks: args.ticks,
        reverse_every: args.reverse_every.filter(|n| *n > 0),
    };
    let summary = GameLoop::new(settings, rng, options).run().await;

    log!(
        "Run finished after {} ticks: {} targets eaten, final length {}, end reason: {}",
        summary.ticks,
        summary.targets_eaten,
        summary.final_length,
        summary.end_reason
    );

    Ok(())
}

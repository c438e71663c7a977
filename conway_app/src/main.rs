// main.rs - Conway's Game of Life desktop simulator
//
// Run with: `cargo run -p conway_app -- --windowed`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};

use conway::{Config, patterns};

mod headless;
mod ui;

/// Config files tried, in order, when no `--config` is given.
const CONFIG_CANDIDATES: [&str; 2] = ["conway.yaml", "config.yaml"];

#[derive(Parser, Debug)]
#[command(version, about = "Conway's Game of Life")]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<f32>,

    /// Generations per second while running (1-60)
    #[arg(short, long)]
    speed: Option<u32>,

    /// Open a window instead of going fullscreen
    #[arg(long)]
    windowed: bool,

    /// Start from a random soup
    #[arg(long)]
    random: bool,

    /// Run without a window and print the final board
    #[arg(long)]
    headless: bool,

    /// Board width in headless mode
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Board height in headless mode
    #[arg(long, default_value_t = 32)]
    height: usize,

    /// Preset to load in headless mode
    #[arg(long)]
    preset: Option<String>,

    /// Generations to run in headless mode
    #[arg(long, default_value_t = 100)]
    steps: u64,

    /// Print the preset names and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list_presets {
        for name in patterns::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    config.validate().context("invalid settings")?;

    if args.headless {
        let run = headless::HeadlessRun {
            width: args.width,
            height: args.height,
            preset: args.preset.as_deref(),
            steps: args.steps,
        };
        headless::run(&config, &run, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    info!("Starting Conway's Game of Life");
    ui::run_gui(config).map_err(|e| anyhow!("window failed: {e}"))
}

/// Load configuration from `--config`, then the usual file names, then defaults
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let config = Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?;
        info!("Loaded config from: {}", path.display());
        return Ok(config);
    }

    for path in CONFIG_CANDIDATES {
        if !Path::new(path).exists() {
            continue;
        }
        match Config::from_file(path) {
            Ok(config) => {
                info!("Loaded config from: {}", path);
                return Ok(config);
            }
            Err(e) => warn!("Ignoring {}: {}", path, e),
        }
    }

    info!("Using default configuration");
    Ok(Config::default())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(cell_size) = args.cell_size {
        config.display.cell_size = cell_size;
    }
    if let Some(speed) = args.speed {
        config.simulation.initial_speed = speed;
    }
    if args.windowed {
        config.display.fullscreen = false;
    }
    if args.random {
        config.simulation.randomize_on_start = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from([
            "conway_app", "--headless", "--preset", "Glider", "--steps", "8", "-s", "30",
        ])
        .unwrap();
        assert!(args.headless);
        assert_eq!(args.preset.as_deref(), Some("Glider"));
        assert_eq!(args.steps, 8);
        assert_eq!(args.speed, Some(30));
        assert_eq!((args.width, args.height), (64, 32));
    }

    #[test]
    fn overrides_win_over_config() {
        let args = Args::try_parse_from([
            "conway_app", "--cell-size", "8", "--windowed", "--random", "--speed", "42",
        ])
        .unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.display.cell_size, 8.0);
        assert!(!config.display.fullscreen);
        assert!(config.simulation.randomize_on_start);
        assert_eq!(config.simulation.initial_speed, 42);
    }

    #[test]
    fn no_overrides_keep_config() {
        let args = Args::try_parse_from(["conway_app"]).unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        assert!(load_config(Some(Path::new("/no/such/conway.yaml"))).is_err());
    }
}

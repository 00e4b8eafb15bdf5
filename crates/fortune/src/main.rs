use anyhow::Context;
use clap::Parser;
use fortune::config;
use fortune::gui::app::{AppInit, AppModel};
use fortune::sys::runtime;
use fortune_core::Wheel;
use fortune_core::color::SliceColors;
use rand::SeedableRng;
use rand::rngs::StdRng;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for shuffling and slice colors, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default configuration file and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if args.write_default_config {
        let path = config::write_default_config(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    let (wheel_rng, color_rng) = match args.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };
    let wheel = Wheel::new(config.names.clone(), config.spin, wheel_rng);
    let colors = SliceColors::new(config.colors, color_rng);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config_path.clone());

    let app = RelmApp::new("org.fortune.wheel");

    app.run::<AppModel>(AppInit {
        wheel,
        colors,
        config,
        config_path,
        events: rx,
    });
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use video_player::model::VideoCatalog;
use video_player::{PlayerConfig, Shell, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video catalog player", long_about = None)]
struct Args {
    /// Path to a video catalog (videos.txt format); defaults to the bundled catalog
    #[arg(short = 'c', long)]
    catalog: Option<String>,

    /// Seed for PLAY_RANDOM, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stays quiet by default so stderr does not interleave with the session
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new();

    if let Some(catalog) = &args.catalog {
        // Expand ~ in paths
        let path = shellexpand::tilde(catalog);
        config = config.with_catalog_path(PathBuf::from(path.as_ref()));
    }
    if let Some(seed) = args.seed {
        log::info!("PLAY_RANDOM seed: {}", seed);
        config = config.with_seed(seed);
    }

    let player = VideoPlayer::from_config(&config)?;
    log::info!("Catalog loaded: {} videos", player.catalog().videos().len());

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut shell = Shell::new(player, stdin.lock(), io::stdout().lock());
    if interactive {
        shell = shell.with_prompt("> ");
    }

    shell.run()
}

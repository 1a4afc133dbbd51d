//! Battle Layout - command line entry point
//!
//! Builds a battle into an in-memory scene and prints the result.

use std::path::PathBuf;
use std::process::ExitCode;

use battle_layout::battle::{BattleLoader, DEFAULT_BATTLE_DIR};
use battle_layout::core::error::Result;
use battle_layout::core::LayoutConfig;
use battle_layout::scene::{build_battle, SceneRecorder};
use clap::{Parser, ValueEnum};
use serde::Serialize;

/// Build a battlefield layout and print the resulting scene
#[derive(Parser, Debug)]
#[command(name = "battle-layout")]
#[command(about = "Build a battle description into a scene and print it")]
struct Args {
    /// Battle JSON file
    #[arg(long, conflicts_with = "name")]
    battle: Option<PathBuf>,

    /// Battle name, resolved as <battle-dir>/<name>.json
    #[arg(long, default_value = "example")]
    name: String,

    /// Directory for named battles
    #[arg(long, default_value = DEFAULT_BATTLE_DIR)]
    battle_dir: PathBuf,

    /// Layout config TOML (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config's scaling factor
    #[arg(long)]
    scaling_factor: Option<f32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct SceneDump<'a> {
    report: battle_layout::scene::BuildReport,
    nodes: Vec<&'a battle_layout::scene::SceneNode>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("battle_layout=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let battle = match &args.battle {
        Some(path) => BattleLoader::load_from_file(path)?,
        None => BattleLoader::new(&args.battle_dir).load_named(&args.name)?,
    };

    let mut config = match &args.config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(scaling_factor) = args.scaling_factor {
        config.scaling_factor = scaling_factor;
    }

    let (mut scene, roots) = SceneRecorder::with_roots();
    let build = build_battle(&battle, &config, roots, &mut scene)?;

    match args.format {
        Format::Text => {
            print!("{}", scene.outline());
            println!(
                "{} structures, {} players, {} sectors skipped, {} unconfigured",
                build.report.structures_spawned,
                build.report.players_spawned,
                build.report.sectors_skipped,
                build.report.components_missing
            );
        }
        Format::Json => {
            let dump = SceneDump {
                report: build.report,
                nodes: scene.nodes(),
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }

    Ok(())
}

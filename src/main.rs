//! Pente desktop game
//!
//! Play against the minimax AI or another person on the same machine.

use clap::{Parser, ValueEnum};

use pente::ui::{GameMode, PenteApp};
use pente::{AiConfig, Stone};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Color {
    White,
    Black,
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Stone::White,
            Color::Black => Stone::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pente")]
#[command(version, about = "Pente with a minimax AI opponent", long_about = None)]
struct Cli {
    /// Search depth in plies
    #[arg(long, default_value_t = 2)]
    depth: u32,

    /// Per-move thinking time in seconds
    #[arg(long, default_value_t = 2.0)]
    time_limit: f64,

    /// Two players on one board, no AI
    #[arg(long)]
    pvp: bool,

    /// Your color against the AI (White moves first)
    #[arg(long, value_enum, default_value_t = Color::White)]
    human_color: Color,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let ai_config = AiConfig::new(cli.depth, cli.time_limit)?;
    let mode = if cli.pvp {
        GameMode::PvP
    } else {
        GameMode::PvE {
            human_color: cli.human_color.into(),
        }
    };
    log::info!("starting {:?} with {:?}", mode, ai_config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Pente"),
        ..Default::default()
    };

    eframe::run_native(
        "Pente",
        options,
        Box::new(move |cc| Ok(Box::new(PenteApp::new(cc, mode, ai_config)))),
    )?;
    Ok(())
}

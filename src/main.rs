use anyhow::Result;
use clap::Parser;
use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake-tui")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 40)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 30)]
    height: usize,

    /// Milliseconds per simulation tick
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Seed for food placement; a random seed is used if omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_ms: cli.tick_ms,
        ..Default::default()
    };

    HumanMode::new(config, cli.seed)?.run().await
}

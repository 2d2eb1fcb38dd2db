use anyhow::Result;
use clap::Parser;

use grid_snake::app::App;
use grid_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "grid-snake")]
#[command(version, about = "Tick-driven grid snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: i32,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Food proximity radius in cells (1 = exact cell match)
    #[arg(long, default_value = "1")]
    tolerance: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        tick_interval_ms: cli.tick_ms,
        food_tolerance: cli.tolerance,
        ..GameConfig::new(cli.width, cli.height)
    };
    config.validate()?;

    App::new(config).run().await
}

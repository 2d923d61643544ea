use std::io;

use broadside::console::launch;
use broadside::init_logging;
use broadside::prelude::*;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Sink the hidden fleet from the console", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for a reproducible fleet layout (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let policy: Box<dyn PlacementPolicy> = match cli.seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            Box::new(RandomPlacement::from_seed(s))
        }
        None => Box::new(RandomPlacement::from_entropy()),
    };
    launch(&mut console, policy)
}

//! Plays a seeded game with random attacks and prints a JSON report.

use std::sync::Arc;

use broadside::{
    init_logging, AttackResult, Coord, GameBoard, MessageLog, RandomPlacement, DEFAULT_COLUMNS,
    DEFAULT_ROWS,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Autoplay one game and report the result", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

#[derive(Serialize)]
struct SimReport {
    seed: u64,
    rows: usize,
    columns: usize,
    attacks: usize,
    hits: usize,
    sunk: Vec<&'static str>,
    shots: Vec<(Coord, AttackResult)>,
    messages: Vec<String>,
    game_over: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut board = GameBoard::new(
        DEFAULT_ROWS,
        DEFAULT_COLUMNS,
        Box::new(RandomPlacement::from_seed(args.seed)),
    )?;
    let log = Arc::new(MessageLog::new());
    board.initialize();
    board.register(log.clone());
    board.place_ships()?;

    let mut targets: Vec<Coord> = (0..board.rows())
        .flat_map(|r| (0..board.columns()).map(move |c| Coord::new(r, c)))
        .collect();
    let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1));
    targets.shuffle(&mut rng);

    let mut hits = 0;
    let mut sunk = Vec::new();
    let mut shots = Vec::new();
    for at in targets {
        if board.is_game_over() {
            break;
        }
        let result = board.attack(at)?;
        shots.push((at, result));
        match result {
            AttackResult::Hit => hits += 1,
            AttackResult::Sink(name) => {
                hits += 1;
                sunk.push(name);
            }
            AttackResult::Miss | AttackResult::Repeat => {}
        }
    }

    let report = SimReport {
        seed: args.seed,
        rows: board.rows(),
        columns: board.columns(),
        attacks: board.attack_count(),
        hits,
        sunk,
        shots,
        messages: log.messages(),
        game_over: board.is_game_over(),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

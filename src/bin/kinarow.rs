//! kinarow CLI - console play and search benchmarking
//!
//! This binary provides:
//! - `play`: a console game with human, random, or search players per side
//! - `bench`: one-move node-count comparison across optimization modes
//! - `series`: search vs random win/draw/loss rates across board sizes

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use kinarow::{
    choose_move, play_match, Agent, Board, Coord, GameOutcome, Player, RandomAgent, SearchAgent,
    SearchConfig,
};

#[derive(Parser)]
#[command(name = "kinarow")]
#[command(version, about = "Generalized n-in-a-row game engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the console
    Play(PlayArgs),
    /// Compare nodes visited across pruning/ordering modes
    Bench(BenchArgs),
    /// Run search vs random series and report outcome rates
    Series(SeriesArgs),
}

#[derive(clap::Args)]
struct PlayArgs {
    /// Board size (n for an nxn board, n in a row wins)
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Who plays X
    #[arg(long, value_enum, default_value = "human")]
    x: AgentKind,

    /// Who plays O
    #[arg(long, value_enum, default_value = "search")]
    o: AgentKind,

    /// Search depth limit (default: matched to the board size)
    #[arg(long)]
    depth: Option<u32>,

    /// Search time budget in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AgentKind {
    Human,
    Random,
    Search,
}

#[derive(clap::Args)]
struct BenchArgs {
    /// Board sizes to benchmark
    #[arg(long, value_delimiter = ',', default_values_t = vec![3, 4, 5])]
    sizes: Vec<usize>,

    /// Depth limit applied to sizes above 3
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Soft time budget per move in milliseconds
    #[arg(long, default_value_t = 1000)]
    time_ms: u64,

    /// Runs per position and mode
    #[arg(long, default_value_t = 3)]
    repeats: usize,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct SeriesArgs {
    /// Board sizes to play
    #[arg(long, value_delimiter = ',', default_values_t = vec![3, 4, 5])]
    sizes: Vec<usize>,

    /// Games per size and role
    #[arg(long, default_value_t = 20)]
    games: u64,

    /// Search depth limit (default: matched to the board size)
    #[arg(long)]
    depth: Option<u32>,

    /// Search time budget in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => run_play(args),
        Commands::Bench(args) => run_bench(args),
        Commands::Series(args) => run_series(args),
    }
}

fn search_config(size: usize, depth: Option<u32>, time_ms: Option<u64>) -> SearchConfig {
    let mut config = SearchConfig::tuned_for(size);
    if let Some(depth) = depth {
        config = config.with_max_depth(depth);
    }
    if let Some(ms) = time_ms {
        config = config.with_time_budget(Duration::from_millis(ms));
    }
    config
}

fn make_agent(kind: AgentKind, args: &PlayArgs) -> Option<Box<dyn Agent>> {
    match kind {
        AgentKind::Human => None,
        AgentKind::Random => Some(Box::new(match args.seed {
            Some(seed) => RandomAgent::seeded(seed),
            None => RandomAgent::new(),
        })),
        AgentKind::Search => Some(Box::new(SearchAgent::new(search_config(
            args.size,
            args.depth,
            args.time_ms,
        )))),
    }
}

fn run_play(args: PlayArgs) -> Result<()> {
    let mut board = Board::new(args.size)?;
    let mut x_agent = make_agent(args.x, &args);
    let mut o_agent = make_agent(args.o, &args);

    println!(
        "{n}x{n} board. {n} in a row wins. X moves first.",
        n = args.size
    );

    let mut to_move = Player::X;
    loop {
        println!("\n{board}");
        let agent = match to_move {
            Player::X => x_agent.as_mut(),
            Player::O => o_agent.as_mut(),
        };

        let mv = match agent {
            Some(agent) => {
                let mv = agent.choose(&mut board, to_move)?;
                println!("{to_move} plays {mv}");
                mv
            }
            None => prompt_move(&board, to_move)?,
        };
        board.place(mv, to_move)?;

        if let Some(winner) = board.check_win(mv) {
            println!("\n{board}\n{winner} wins!");
            break;
        }
        if board.is_full() {
            println!("\n{board}\nIt's a draw.");
            break;
        }
        to_move = to_move.opponent();
    }

    Ok(())
}

fn prompt_move(board: &Board, player: Player) -> Result<Coord> {
    let max = board.size() - 1;
    loop {
        print!("{player}'s move (row col, each 0-{max}): ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("failed to read move")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }

        let mut parts = line.split_whitespace().map(str::parse::<usize>);
        let (Some(Ok(row)), Some(Ok(col)), None) = (parts.next(), parts.next(), parts.next())
        else {
            println!("Enter two numbers separated by a space.");
            continue;
        };

        let mv = Coord::new(row, col);
        if board.legal_moves().any(|legal| legal == mv) {
            return Ok(mv);
        }
        println!("Invalid square. Try again.");
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum BenchMode {
    Full,
    OrderingOff,
    PruningOff,
}

impl BenchMode {
    fn label(self) -> &'static str {
        match self {
            BenchMode::Full => "full",
            BenchMode::OrderingOff => "ordering-off",
            BenchMode::PruningOff => "pruning-off",
        }
    }

    fn apply(self, config: SearchConfig) -> SearchConfig {
        match self {
            BenchMode::Full => config,
            BenchMode::OrderingOff => config.with_move_ordering(false),
            BenchMode::PruningOff => config.with_pruning(false),
        }
    }
}

#[derive(Serialize)]
struct BenchRow {
    size: usize,
    mode: &'static str,
    avg_nodes: u64,
    avg_ms: f64,
    nodes_per_sec: f64,
}

/// Midgame starting positions so the modes face identical, non-trivial
/// decisions (a fresh board would hide most of the ordering effect).
fn preset_positions(size: usize) -> Vec<Vec<(Coord, Player)>> {
    let max = size - 1;
    if size % 2 == 1 {
        let m = size / 2;
        vec![
            vec![(Coord::new(m, m), Player::O)],
            vec![(Coord::new(m, m), Player::X)],
            vec![(Coord::new(m, m), Player::O), (Coord::new(0, 0), Player::X)],
            vec![(Coord::new(m, m), Player::X), (Coord::new(0, max), Player::O)],
            vec![
                (Coord::new(0, 0), Player::X),
                (Coord::new(max, max), Player::O),
            ],
        ]
    } else {
        let a = size / 2 - 1;
        let b = size / 2;
        vec![
            vec![(Coord::new(a, a), Player::O)],
            vec![(Coord::new(a, b), Player::X)],
            vec![(Coord::new(a, a), Player::X), (Coord::new(b, b), Player::O)],
            vec![(Coord::new(0, 0), Player::X), (Coord::new(b, a), Player::O)],
            vec![
                (Coord::new(0, 0), Player::X),
                (Coord::new(max, max), Player::O),
            ],
        ]
    }
}

fn run_bench(args: BenchArgs) -> Result<()> {
    let modes = [BenchMode::Full, BenchMode::OrderingOff, BenchMode::PruningOff];
    let mut rows = Vec::new();

    for &size in &args.sizes {
        let positions = preset_positions(size);
        let total = (modes.len() * positions.len() * args.repeats) as u64;
        let pb = progress_bar(total, &format!("bench {size}x{size}"));

        for mode in modes {
            let mut total_nodes = 0u64;
            let mut total_time = Duration::ZERO;
            let mut runs = 0u64;

            for position in &positions {
                for _ in 0..args.repeats {
                    let mut board = Board::new(size)?;
                    for &(coord, player) in position {
                        board.place(coord, player)?;
                    }

                    let config = mode.apply(search_config(
                        size,
                        (size > 3).then_some(args.depth),
                        Some(args.time_ms),
                    ));
                    let start = Instant::now();
                    let result = choose_move(&mut board, Player::X, &config)?;
                    total_time += start.elapsed();
                    total_nodes += result.nodes;
                    runs += 1;
                    pb.inc(1);
                }
            }

            let avg_nodes = total_nodes / runs.max(1);
            let avg_ms = total_time.as_secs_f64() * 1000.0 / runs.max(1) as f64;
            let nodes_per_sec = if avg_ms > 0.0 {
                avg_nodes as f64 / (avg_ms / 1000.0)
            } else {
                0.0
            };
            rows.push(BenchRow {
                size,
                mode: mode.label(),
                avg_nodes,
                avg_ms,
                nodes_per_sec,
            });
        }
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!(
            "{:<6} {:<14} {:>12} {:>10} {:>12}",
            "board", "mode", "avg_nodes", "avg_ms", "nodes/sec"
        );
        for row in &rows {
            println!(
                "{:<6} {:<14} {:>12} {:>10.2} {:>12.0}",
                format!("{0}x{0}", row.size),
                row.mode,
                row.avg_nodes,
                row.avg_ms,
                row.nodes_per_sec
            );
        }
    }

    Ok(())
}

fn run_series(args: SeriesArgs) -> Result<()> {
    println!(
        "{:<6} {:<10} {:>6} {:>7} {:>7} {:>8}",
        "board", "search as", "wins", "draws", "losses", "win rate"
    );

    for &size in &args.sizes {
        for search_as in [Player::X, Player::O] {
            let pb = progress_bar(args.games, &format!("series {size}x{size} as {search_as}"));
            let mut wins = 0u64;
            let mut draws = 0u64;
            let mut losses = 0u64;

            for game_index in 0..args.games {
                let mut board = Board::new(size)?;
                let mut search = SearchAgent::new(search_config(size, args.depth, args.time_ms));
                let mut random = RandomAgent::seeded(args.seed + game_index);

                let game = match search_as {
                    Player::X => play_match(&mut board, &mut search, &mut random)?,
                    Player::O => play_match(&mut board, &mut random, &mut search)?,
                };

                match game.outcome.and_then(GameOutcome::winner) {
                    Some(winner) if winner == search_as => wins += 1,
                    Some(_) => losses += 1,
                    None => draws += 1,
                }
                pb.inc(1);
            }
            pb.finish_and_clear();

            let rate = wins as f64 / args.games.max(1) as f64 * 100.0;
            println!(
                "{:<6} {:<10} {:>6} {:>7} {:>7} {:>7.1}%",
                format!("{0}x{0}", size),
                search_as.to_string(),
                wins,
                draws,
                losses,
                rate
            );
        }
    }

    Ok(())
}

fn progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb.set_message(message.to_string());
    pb
}

//! Othello-Canvas: play automated Othello matches and render the frames.
//!
//! ## Usage
//!
//! - `othello-canvas` - Play one random-vs-random match
//! - `othello-canvas play --seed 7 --svg-dir frames` - Play and write SVG frames
//! - `othello-canvas demo` - Show the rules engine on the starting board

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};

use othello_canvas::board::{Board, Color};
use othello_canvas::constants::DEFAULT_PITCH;
use othello_canvas::executor::apply;
use othello_canvas::game::{Match, Narrator};
use othello_canvas::player::{parse_script, Player, RandomPlayer, ScriptedPlayer};
use othello_canvas::render::{render_frames, Renderer, SvgRenderer, TextRenderer};
use othello_canvas::rules::legal_moves;

/// Othello-Canvas: automated Othello on a 6x6 board
#[derive(Parser)]
#[command(name = "othello-canvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every frame count and declined move
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings (forfeits)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match between two players
    Play(PlayArgs),
    /// Show legal moves and flip frames on the starting board
    Demo,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Seed for the random players (Black uses SEED, White uses SEED+1)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting board as a text grid file (`.`, `X`, `O` per cell)
    #[arg(long, value_name = "FILE")]
    board: Option<PathBuf>,

    /// Scripted moves for Black instead of random, e.g. "3,1 4,2"
    #[arg(long, value_name = "MOVES")]
    black_script: Option<String>,

    /// Scripted moves for White instead of random
    #[arg(long, value_name = "MOVES")]
    white_script: Option<String>,

    /// Write one SVG per frame into this directory
    #[arg(long, value_name = "DIR")]
    svg_dir: Option<PathBuf>,

    /// Cell size in pixels for rendering
    #[arg(long, default_value_t = DEFAULT_PITCH)]
    pitch: u32,

    /// Print every frame to stdout as a text grid
    #[arg(long)]
    text: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Play(args)) => run_play(args),
        Some(Commands::Demo) => run_demo(),
        None => run_play(PlayArgs {
            pitch: DEFAULT_PITCH,
            ..PlayArgs::default()
        }),
    }
}

fn make_player(script: Option<&str>, seed: Option<u64>) -> Result<Box<dyn Player>> {
    let player: Box<dyn Player> = match (script, seed) {
        (Some(script), _) => {
            let moves = parse_script(script).map_err(anyhow::Error::msg)?;
            Box::new(ScriptedPlayer::new(moves))
        }
        (None, Some(seed)) => Box::new(RandomPlayer::with_seed(seed)),
        (None, None) => Box::new(RandomPlayer::new()),
    };
    Ok(player)
}

fn run_play(args: PlayArgs) -> Result<()> {
    let board = match &args.board {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read board file {}", path.display()))?;
            text.parse::<Board>()
                .with_context(|| format!("invalid board in {}", path.display()))?
        }
        None => Board::starting(),
    };

    let black = make_player(args.black_script.as_deref(), args.seed)
        .context("invalid --black-script")?;
    let white = make_player(args.white_script.as_deref(), args.seed.map(|s| s.wrapping_add(1)))
        .context("invalid --white-script")?;

    let mut game = Match::new(board, black, white).observe(Narrator);
    let outcome = game.run().context("rules engine failure")?;
    let frames = game.into_frames();
    info!("{} frames recorded, outcome: {outcome}", frames.len());

    if let Some(dir) = &args.svg_dir {
        let mut svg = SvgRenderer::with_dir(dir)?;
        render_frames(&mut svg, &frames, args.pitch)?;
        info!("wrote {} SVG frames to {}", svg.frames().len(), dir.display());
    }
    if args.text {
        let mut text = TextRenderer::new(io::stdout().lock());
        render_frames(&mut text, &frames, args.pitch)?;
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Othello-Canvas: 6x6 rules engine demo\n");

    let mut board = Board::starting();
    println!("=== Starting board ===");
    println!("{board}");
    println!("Black legal moves: {:?}", legal_moves(&board, Color::Black));
    println!("White legal moves: {:?}\n", legal_moves(&board, Color::White));

    println!("=== Black plays (3, 1) ===");
    let frames = apply(&mut board, Color::Black, 3, 1)?;
    {
        let mut text = TextRenderer::new(io::stdout().lock());
        for frame in &frames {
            text.draw(frame, DEFAULT_PITCH)?;
        }
    }
    println!(
        "Black: {}, White: {}",
        board.count_of(Color::Black),
        board.count_of(Color::White)
    );
    Ok(())
}

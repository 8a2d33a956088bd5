//! Terminal Tetris runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer. Gravity
//! is fed by a real-time tick driver polled once per frame.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, LevelFilter};

use classic_tetris::core::{
    drive, GameConfig, GameState, HighScoreStore, MemoryHighScores, RealTimeDriver,
};
use classic_tetris::input::{map_key, should_quit};
use classic_tetris::logging;
use classic_tetris::scores::{self, JsonFileStore};
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use classic_tetris::types::{Phase, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_PLAYER_NAME, FRAME_MS};

/// Classic falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "classic-tetris",
    version,
    about = "Classic falling-block puzzle in the terminal",
    long_about = "Classic falling-block puzzle in the terminal.\n\n\
        CONTROLS:\n  Left/Right  Move    Up     Rotate    Down   Soft drop\n  \
        Space       Hard drop   P  Pause   Enter  Start   R  Restart   Q / Esc  Quit"
)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH, value_name = "COLS")]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT, value_name = "ROWS")]
    height: usize,

    /// Seed for the piece sequence (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Name recorded with high scores [env: TETRIS_PLAYER]
    #[arg(long, value_name = "NAME")]
    player: Option<String>,

    /// High-score file [env: TETRIS_SCORES_FILE]
    #[arg(long, value_name = "FILE")]
    scores_file: Option<PathBuf>,

    /// Keep high scores in memory only
    #[arg(long)]
    no_scores: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log level for --log-file
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    log_level: LevelFilter,

    /// Render and input poll interval
    #[arg(long, default_value_t = FRAME_MS as u64, value_name = "MS")]
    frame_ms: u64,
}

/// Non-empty, trimmed value of an environment variable
fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn open_store(args: &Args) -> Box<dyn HighScoreStore> {
    if args.no_scores {
        return Box::new(MemoryHighScores::new());
    }
    let path = args
        .scores_file
        .clone()
        .or_else(|| env_value("TETRIS_SCORES_FILE").map(PathBuf::from))
        .unwrap_or_else(scores::default_path);
    info!("high scores at {}", path.display());
    Box::new(JsonFileStore::open(path))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        logging::init(path, args.log_level)?;
    }

    let player = args
        .player
        .clone()
        .or_else(|| env_value("TETRIS_PLAYER"))
        .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string());
    let config = GameConfig::new(args.width, args.height).with_player_name(player);
    if !config.is_valid() {
        bail!(
            "unsupported board size {}x{} (each side must be 4..=64)",
            config.cols,
            config.rows
        );
    }

    let seed = args.seed.unwrap_or_else(default_seed);
    info!(
        "session start: {}x{} board, seed {}, player {}",
        config.cols, config.rows, seed, config.player_name
    );
    let game = GameState::new(config, seed).with_high_scores(open_store(&args));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, Duration::from_millis(args.frame_ms.max(1)));

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("session end");
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, frame: Duration) -> Result<()> {
    let view = GameView::default();
    let mut driver = RealTimeDriver::new();
    let mut fb = FrameBuffer::new(0, 0);
    // The store reads from disk, so the list is refreshed on phase changes only.
    let mut phase = game.phase();
    let mut high_scores = game.high_scores();

    loop {
        if game.phase() != phase {
            phase = game.phase();
            if matches!(phase, Phase::NotStarted | Phase::Over) {
                high_scores = game.high_scores();
            }
        }

        let viewport = term.viewport().unwrap_or(Viewport::new(80, 24));
        view.render_into(&game.snapshot(), &high_scores, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key, game.phase()).action {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        drive(&mut game, &mut driver);

        if let Some(lock) = game.take_last_event() {
            if lock.game_over {
                info!(
                    "game over: score {}, level {}, lines {}",
                    game.score(),
                    game.level(),
                    game.lines()
                );
            }
        }
    }
}

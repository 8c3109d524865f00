//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for keyboard and mouse input and a custom
//! framebuffer-based renderer (no ratatui widgets/layout).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::{info, warn};

use tui_2048::core::Game;
use tui_2048::input::{handle_key_event, should_quit, PointerGesture, SwipeDetector};
use tui_2048::store::{JsonFileStore, KeyValueStore, MemoryStore, Persistence};
use tui_2048::term::{FrameBuffer, GameView, SoundPlayer, TerminalRenderer, Viewport};
use tui_2048::types::{Theme, DEFAULT_SWIPE_THRESHOLD};
use tui_2048::App;

const POLL_MS: u64 = 250;
const STORE_FILE: &str = ".tui-2048.json";

#[derive(Debug, Parser)]
#[command(author, version, about = "2048 in the terminal, with undo and tile swaps", long_about = None)]
struct Cli {
    /// Seed for tile spawning (default: derived from the clock)
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// JSON file holding best score, statistics and settings
    #[arg(long, value_name = "FILE", conflicts_with = "no_save")]
    store: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long)]
    no_save: bool,

    /// Minimum drag distance for a mouse swipe, in approximate pixels
    #[arg(long, default_value_t = DEFAULT_SWIPE_THRESHOLD, value_name = "N")]
    swipe_threshold: u16,

    /// Theme for this session (light or dark), overriding the saved one
    #[arg(long, value_parser = parse_theme, value_name = "THEME")]
    theme: Option<Theme>,

    /// Disable sound cues for this session
    #[arg(long)]
    mute: bool,

    /// Leave mouse reporting off (keyboard only, native text selection)
    #[arg(long)]
    no_mouse: bool,

    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn parse_theme(s: &str) -> std::result::Result<Theme, String> {
    Theme::from_str(s).ok_or_else(|| format!("unknown theme '{}' (expected light or dark)", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let seed = cli.seed.unwrap_or_else(seed_from_clock);
    info!("starting with seed {}", seed);

    if cli.no_save {
        play(Persistence::new(MemoryStore::new()), seed, &cli)
    } else {
        let path = cli.store.clone().unwrap_or_else(default_store_path);
        info!("using store {}", path.display());
        play(Persistence::new(JsonFileStore::open(path)), seed, &cli)
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn default_store_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(STORE_FILE)
}

fn play<S: KeyValueStore>(persistence: Persistence<S>, seed: u32, cli: &Cli) -> Result<()> {
    let mut app = App::new(Game::new(seed), persistence);
    app.override_settings(cli.theme, cli.mute);

    let mut term = TerminalRenderer::new().with_mouse_capture(!cli.no_mouse);
    term.enter()?;

    let result = run(&mut term, &mut app, cli.swipe_threshold);

    // Always try to restore terminal state.
    let _ = term.exit();

    let stats = app.stats();
    info!(
        "session over: score {}, best {}, {} games recorded",
        app.game().score(),
        app.best_score(),
        stats.total_games
    );
    result
}

fn run<S: KeyValueStore>(term: &mut TerminalRenderer, app: &mut App<S>, swipe_threshold: u16) -> Result<()> {
    let view = GameView::default();
    let mut swipe = SwipeDetector::new(swipe_threshold);
    let mut sound = SoundPlayer::stdout(app.settings().sound_enabled);
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        if dirty {
            view.render_into(&app.view(), &app.session_view(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.handle(action);
                    dirty = true;
                }
            }
            Event::Mouse(mouse) => match swipe.handle_mouse_event(mouse) {
                Some(PointerGesture::Swipe(direction)) => {
                    app.swipe(direction);
                    dirty = true;
                }
                Some(PointerGesture::Click { column, row }) => {
                    if let Some((r, c)) = view.hit_test(viewport, column, row) {
                        dirty |= app.click(r, c);
                    }
                }
                None => {}
            },
            Event::Resize(..) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }

        sound.set_enabled(app.settings().sound_enabled);
        if let Some(cue) = app.take_cue() {
            if let Err(e) = sound.play(cue) {
                warn!("sound cue failed: {}", e);
            }
        }
    }
}

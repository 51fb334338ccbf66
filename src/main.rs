mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use battlefield::input::{InputEvent, KeyTranslator, DEFAULT_HOLD_FRAMES};
use battlefield::{FighterHitPolicy, GameConfig, GameError, GameWorld};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Battlefield - shoot the launchers off the falling barriers
#[derive(Parser)]
#[command(name = "battlefield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Playfield width in world units
    #[arg(long, default_value_t = GameConfig::default().screen_width)]
    width: f32,

    /// Playfield height in world units
    #[arg(long, default_value_t = GameConfig::default().screen_height)]
    height: f32,

    /// Simulation ticks per second
    #[arg(long, default_value_t = GameConfig::default().tick_rate)]
    tick_rate: f32,

    /// Seconds between enemy volleys
    #[arg(long, default_value_t = GameConfig::default().fire_period)]
    fire_period: f32,

    /// Missile hits needed to destroy a launcher
    #[arg(long, default_value_t = GameConfig::default().hit_threshold)]
    hit_threshold: u32,

    /// End the game when an enemy bullet touches the fighter
    #[arg(long)]
    lethal_bullets: bool,

    /// Minimum ticks between shots (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    missile_cooldown: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file (the terminal is owned by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            screen_width: self.width,
            screen_height: self.height,
            tick_rate: self.tick_rate,
            fire_period: self.fire_period,
            hit_threshold: self.hit_threshold,
            fighter_hit: if self.lethal_bullets {
                FighterHitPolicy::EndGame
            } else {
                FighterHitPolicy::Ignore
            },
            missile_cooldown_ticks: self.missile_cooldown,
            ..GameConfig::default()
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), GameError> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| GameError::Logging(e.to_string()))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. Input is drained without blocking each
/// frame; the world is advanced by real elapsed time so the simulation keeps
/// its own tick rate regardless of how fast frames are drawn.
fn game_loop<W: Write>(
    out: &mut W,
    world: &mut GameWorld,
    keys: &mut KeyTranslator,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut frame: u64 = 0;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match keys.translate(key, frame) {
                Some(InputEvent::Quit) => return Ok(()),
                Some(event) => world.apply(event),
                None => {}
            }
        }
        if let Some(event) = keys.expire(frame) {
            world.apply(event);
        }

        let now = Instant::now();
        world.advance(now - last);
        last = now;

        display::render(out, &world.scene(), world.config())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    // Bad flags are reported before the terminal is taken over.
    let mut world = GameWorld::new(cli.config())?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Terminals speaking the kitty keyboard protocol report key releases;
    // the rest fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    let mut keys = KeyTranslator::new(DEFAULT_HOLD_FRAMES).with_release_events(keyboard_enhanced);

    // Blocking event reads live on their own thread so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut world, &mut keys, &rx);

    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(score = world.score().value(), ticks = world.ticks(), "session ended");
    result?;
    Ok(())
}

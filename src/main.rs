use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use arcade_shooter::audio::{CueSink, TerminalBell};
use arcade_shooter::display::{self, View};
use arcade_shooter::{GameConfig, GameEvent, GameStatus, Intents, Session};

/// Upper bound on simulation frames run to catch up after a stall.
const MAX_SUBSTEPS: u32 = 5;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// at 60 FPS a window of 8 frames (≈133 ms) is refreshed by OS key-repeat
/// before it expires.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Collapse the held-key map into this frame's intents.  Fire is only set
/// on frames where Space was pressed or auto-repeated.
fn intents_for(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Intents {
    use KeyCode::{Char, Down, Left, Right, Up};
    Intents {
        move_left: any_held(key_frame, &[Left, Char('a'), Char('A')], frame),
        move_right: any_held(key_frame, &[Right, Char('d'), Char('D')], frame),
        move_up: any_held(key_frame, &[Up, Char('w'), Char('W')], frame),
        move_down: any_held(key_frame, &[Down, Char('s'), Char('S')], frame),
        fire: key_frame.get(&Char(' ')) == Some(&frame),
    }
}

enum Command {
    Quit,
    Start,
    ToggleMute,
}

fn command_for(code: KeyCode, modifiers: KeyModifiers, status: GameStatus) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleMute),
        KeyCode::Enter | KeyCode::Char(' ') if status == GameStatus::Idle => Some(Command::Start),
        KeyCode::Char('r') | KeyCode::Char('R') if status == GameStatus::GameOver => {
            Some(Command::Start)
        }
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we keep a
/// `key_frame` map with the frame number of the last press/repeat event for
/// every key, and derive `Intents` from the keys that are still fresh.  On
/// keyboard-enhancement terminals keys are dropped on release; elsewhere
/// they expire after `HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut cues = TerminalBell::new(std::io::stdout());
    let frame_len = Duration::from_secs_f64(session.config().frame_ms() / 1000.0);

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut best_score: u32 = 0;
    let mut accumulator = Duration::ZERO;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match command_for(code, modifiers, session.status()) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::ToggleMute) => {
                            cues.toggle_mute();
                        }
                        Some(Command::Start) => {
                            key_frame.clear();
                            session.restart();
                            accumulator = Duration::ZERO;
                        }
                        None => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Fixed-timestep simulation ─────────────────────────────────────────
        let now = Instant::now();
        accumulator += now - last;
        last = now;

        let mut intents = intents_for(&key_frame, frame);
        let mut substeps = 0;
        while accumulator >= frame_len && substeps < MAX_SUBSTEPS {
            for ev in session.tick(intents, &mut rng) {
                if let GameEvent::GameOver(report) = ev {
                    best_score = best_score.max(report.final_score);
                }
                if let Some(cue) = ev.cue() {
                    cues.play(cue);
                }
            }
            intents.fire = false;
            accumulator -= frame_len;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            accumulator = Duration::ZERO;
        }

        let (width, height) = terminal::size()?;
        let snapshot = session.snapshot();
        let view = View {
            snapshot: &snapshot,
            config: session.config(),
            report: session.report(),
            best_score,
            muted: cues.is_muted(),
            width,
            height,
        };
        display::render(out, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Logging is off unless RUST_LOG asks for it; redirect stderr to keep
    // it off the game screen.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let mut session = match GameConfig::load(config_path.as_deref()).and_then(Session::new) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut session, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

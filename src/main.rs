use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::{thread_rng, Rng};

use maze_chase::compute::{init_state, restart, tick, turn_player};
use maze_chase::config::{self, GameConfig};
use maze_chase::display;
use maze_chase::entities::{GameState, Phase};
use maze_chase::input::{command_for, triggers_restart, Command, DirectionSlot};
use maze_chase::map;

enum Flow {
    Continue,
    Quit,
}

/// React to one non-directional key event. Directions never get here as
/// actions: the reader thread already stored them in the slot.
fn handle_key(
    key: &KeyEvent,
    state: &mut GameState,
    slot: &DirectionSlot,
    releases_reported: bool,
    rng: &mut impl Rng,
) -> Flow {
    if command_for(key) == Command::Quit {
        if key.kind != KeyEventKind::Release {
            return Flow::Quit;
        }
        return Flow::Continue;
    }
    if state.session.phase == Phase::GameOver && triggers_restart(key.kind, releases_reported) {
        // Whatever was pressed while the game sat finished is stale.
        slot.take();
        *state = restart(state, rng);
    }
    Flow::Continue
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Tick source. While running: apply the pending direction, step, draw,
/// sleep out the period. Once the game is over ticking stops and the loop
/// blocks on input until a restart or quit.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    slot: &DirectionSlot,
    releases_reported: bool,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    display::render(out, state)?;

    loop {
        match state.session.phase {
            Phase::Running => {
                let frame_start = Instant::now();

                while let Ok(event) = rx.try_recv() {
                    if let Event::Key(key) = event {
                        if let Flow::Quit = handle_key(&key, state, slot, releases_reported, &mut rng) {
                            return Ok(());
                        }
                    }
                }

                if let Some(direction) = slot.take() {
                    *state = turn_player(state, direction);
                }
                *state = tick(state, &mut rng);
                display::render(out, state)?;

                let elapsed = frame_start.elapsed();
                if elapsed < state.config.tick {
                    thread::sleep(state.config.tick - elapsed);
                }
            }
            Phase::GameOver => {
                let Ok(event) = rx.recv() else {
                    return Ok(()); // reader thread gone
                };
                if let Event::Key(key) = event {
                    if let Flow::Quit = handle_key(&key, state, slot, releases_reported, &mut rng) {
                        return Ok(());
                    }
                    if state.session.phase == Phase::Running {
                        display::render(out, state)?;
                    }
                }
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init_logging()?;

    // Layout problems are reported before the terminal changes mode.
    let mut state = init_state(map::LAYOUT, GameConfig::default(), &mut thread_rng())?;
    log::info!(
        "board is {}x{} px",
        state.maze.width,
        state.maze.height
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key-release events make restart fire on key-up. Terminals without the
    // kitty protocol fall back to restarting on press.
    let releases_reported = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread. Direction presses go straight
    // into the slot; every event is also forwarded for quit/restart handling.
    let slot = Arc::new(DirectionSlot::new());
    let (tx, rx) = mpsc::channel::<Event>();
    let reader_slot = Arc::clone(&slot);
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if let Event::Key(key) = &ev {
                    if key.kind != KeyEventKind::Release {
                        if let Command::Turn(direction) = command_for(key) {
                            reader_slot.set(direction);
                        }
                    }
                }
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                log::warn!("input reader stopped: {e}");
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut state, &rx, &slot, releases_reported);

    // Always restore the terminal
    if releases_reported {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("exit with score {}", state.session.score);
    result?;
    Ok(())
}

//! Pure game-logic functions.
//!
//! The state transitions (`init_state`, `turn_player`, `tick`, `restart`)
//! take an immutable reference to the current `GameState` (and, where
//! needed, an RNG handle) and return a brand-new `GameState`. The
//! entity-level helpers below them work on borrowed entities in place.
//! Side effects are limited to the injected RNG.

use log::{info, trace};
use rand::Rng;

use crate::collision::{hits_wall, overlaps};
use crate::config::GameConfig;
use crate::entities::{Actor, Direction, GameState, Maze, Phase, Session};
use crate::error::Result;
use crate::map;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Load `layout` and start a fresh session with every ghost already moving.
pub fn init_state(layout: &[&str], config: GameConfig, rng: &mut impl Rng) -> Result<GameState> {
    let pristine = map::load(layout, config.tile_size)?;
    let mut maze = pristine.clone();
    for ghost in &mut maze.ghosts {
        assign_random_direction(&mut ghost.body, rng);
    }
    info!(
        "new game: {} pellets, {} ghosts, {} lives",
        maze.foods.len(),
        maze.ghosts.len(),
        config.starting_lives
    );

    Ok(GameState {
        maze,
        pristine,
        session: Session::new(config.starting_lives),
        config,
    })
}

// ── Entity helpers (in place) ────────────────────────────────────────────────

/// Point `actor` in one of the four directions, uniformly at random.
pub fn assign_random_direction(actor: &mut Actor, rng: &mut impl Rng) {
    let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
    actor.set_direction(direction);
}

/// Player back to its spawn and stopped (still facing the same way); every
/// ghost back to its spawn with a fresh random direction.
pub fn reset_positions(maze: &mut Maze, rng: &mut impl Rng) {
    maze.player.reset();
    maze.player.stop();
    for ghost in &mut maze.ghosts {
        ghost.body.reset();
        assign_random_direction(&mut ghost.body, rng);
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Face the player `direction`, effective immediately. Ignored once the
/// game is over.
pub fn turn_player(state: &GameState, direction: Direction) -> GameState {
    let mut next = state.clone();
    if next.session.phase == Phase::Running {
        next.maze.player.set_direction(direction);
    }
    next
}

/// Start over from the original board with a fresh session. Only leaves
/// `GameOver`; a running game is returned unchanged.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.session.phase == Phase::Running {
        return state.clone();
    }
    let mut maze = state.pristine.clone();
    reset_positions(&mut maze, rng);
    info!("restart after final score {}", state.session.score);

    GameState {
        maze,
        session: Session::new(state.config.starting_lives),
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick. All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
/// A finished game is returned unchanged.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    if next.session.phase == Phase::Running {
        step(&mut next, rng);
    }
    next
}

fn step(state: &mut GameState, rng: &mut impl Rng) {
    let maze = &mut state.maze;
    let session = &mut state.session;

    // ── 1. Move the player, undoing the move if it runs into a wall ──────────
    maze.player.advance();
    if hits_wall(&maze.walls, &maze.player.rect) {
        maze.player.retreat();
    }

    // ── 2. Ghosts: contact with the player, then wander ──────────────────────
    for i in 0..maze.ghosts.len() {
        if overlaps(&maze.ghosts[i].body.rect, &maze.player.rect) {
            session.lives = session.lives.saturating_sub(1);
            if session.lives == 0 {
                session.phase = Phase::GameOver;
                info!("caught by {:?} ghost, game over at {}", maze.ghosts[i].color, session.score);
                return;
            }
            info!("caught by {:?} ghost, {} lives left", maze.ghosts[i].color, session.lives);
            reset_positions(maze, rng);
        }

        let board_width = maze.width;
        let ghost = &mut maze.ghosts[i];
        ghost.body.advance();

        // Only the left and right board edges bound a ghost.
        let rect = ghost.body.rect;
        if hits_wall(&maze.walls, &rect) || rect.x <= 0 || rect.x + rect.width >= board_width {
            ghost.body.retreat();
            assign_random_direction(&mut ghost.body, rng);
            trace!("{:?} ghost turned {:?}", ghost.color, ghost.body.direction);
        }
    }

    // ── 3. Pellet pickup (at most one per tick) ──────────────────────────────
    if let Some(idx) = maze
        .foods
        .iter()
        .position(|food| overlaps(&maze.player.rect, &food.rect))
    {
        maze.foods.swap_remove(idx);
        session.score += state.config.food_reward;
    }

    // ── 4. Board cleared: fresh pellets, everyone home ───────────────────────
    if maze.foods.is_empty() {
        info!("board cleared with score {}", session.score);
        *maze = state.pristine.clone();
        reset_positions(maze, rng);
    }
}

// ── Status ───────────────────────────────────────────────────────────────────

/// The one-line HUD text.
pub fn status_line(state: &GameState) -> String {
    match state.session.phase {
        Phase::Running => format!("x{} Score: {}", state.session.lives, state.session.score),
        Phase::GameOver => format!("Game Over: {}", state.session.score),
    }
}

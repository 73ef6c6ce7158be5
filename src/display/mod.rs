//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.
//!
//! One maze tile is one terminal row by two columns. Pixel positions are
//! floored to the tile holding their top-left corner.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::compute::status_line;
use crate::entities::{Direction, GameState, GhostColor, Phase};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WALL: Color = Color::DarkBlue;
const C_FOOD: Color = Color::White;
const C_PLAYER: Color = Color::Yellow;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// First terminal row of the maze; row 0 is the HUD.
const BOARD_TOP: u16 = 1;

fn ghost_color(color: GhostColor) -> Color {
    match color {
        GhostColor::Blue => Color::Cyan,
        GhostColor::Orange => Color::DarkYellow,
        GhostColor::Pink => Color::Magenta,
        GhostColor::Red => Color::Red,
    }
}

/// The mouth opens toward the direction of travel.
fn player_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "v",
        Direction::Down => "^",
        Direction::Left => ">",
        Direction::Right => "<",
    }
}

/// Terminal cell for a board pixel.
pub fn cell_at(tile_size: i32, x: i32, y: i32) -> (u16, u16) {
    let col = x.div_euclid(tile_size).max(0) * 2;
    let row = y.div_euclid(tile_size).max(0);
    (col as u16, row as u16 + BOARD_TOP)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state)?;
    draw_walls(out, state)?;
    draw_foods(out, state)?;
    draw_ghosts(out, state)?;
    draw_player(out, state)?;
    draw_controls_hint(out, state)?;

    if state.session.phase == Phase::GameOver {
        draw_game_over(out, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, board_rows(state) + BOARD_TOP + 1))?;
    out.flush()?;
    Ok(())
}

fn board_rows(state: &GameState) -> u16 {
    (state.maze.height / state.maze.tile_size) as u16
}

fn board_cols(state: &GameState) -> u16 {
    (state.maze.width / state.maze.tile_size) as u16 * 2
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(status_line(state)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_walls<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let tile = state.maze.tile_size;
    out.queue(style::SetForegroundColor(C_WALL))?;
    for wall in &state.maze.walls {
        let (col, row) = cell_at(tile, wall.rect.x, wall.rect.y);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("██"))?;
    }
    Ok(())
}

fn draw_foods<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let tile = state.maze.tile_size;
    out.queue(style::SetForegroundColor(C_FOOD))?;
    for food in &state.maze.foods {
        let (col, row) = cell_at(tile, food.rect.x, food.rect.y);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("▪"))?;
    }
    Ok(())
}

fn draw_ghosts<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let tile = state.maze.tile_size;
    for ghost in &state.maze.ghosts {
        let (col, row) = cell_at(tile, ghost.body.rect.x, ghost.body.rect.y);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(ghost_color(ghost.color)))?;
        out.queue(Print("ᗣ"))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let p = &state.maze.player;
    let (col, row) = cell_at(state.maze.tile_size, p.rect.x, p.rect.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print(player_glyph(p.direction)))?;
    Ok(())
}

// ── Controls hint (under the maze) ────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, board_rows(state) + BOARD_TOP))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ ← → / W A S D : Move   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.session.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("Any key - Play Again  Q - Quit", Color::White),
    ];

    let cx = board_cols(state) / 2;
    let start_row = (board_rows(state) / 2 + BOARD_TOP).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

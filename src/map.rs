//! Layout parsing — turns rows of legend characters into a `Maze`.

use log::debug;

use crate::entities::{Actor, Food, Ghost, GhostColor, Maze, Rect, Wall};
use crate::error::{MapError, Result};

/// The reference board: 19 columns × 21 rows.
pub const LAYOUT: &[&str] = &[
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

// ── Legend ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Ghost(GhostColor),
    Player,
    Food,
    /// Track with nothing on it.
    Empty,
}

impl Tile {
    pub fn from_char(ch: char) -> Option<Tile> {
        let tile = match ch {
            'X' => Tile::Wall,
            'b' => Tile::Ghost(GhostColor::Blue),
            'o' => Tile::Ghost(GhostColor::Orange),
            'p' => Tile::Ghost(GhostColor::Pink),
            'r' => Tile::Ghost(GhostColor::Red),
            'P' => Tile::Player,
            ' ' => Tile::Food,
            'O' => Tile::Empty,
            _ => return None,
        };
        Some(tile)
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Build a maze from `layout`, one character per tile.
///
/// Validates everything up front: row widths, legend characters, tile size,
/// and that there is exactly one player spawn. Ghosts come out stationary;
/// giving them a direction is the caller's job.
pub fn load(layout: &[&str], tile_size: i32) -> Result<Maze> {
    if tile_size <= 0 || tile_size % 16 != 0 {
        return Err(MapError::InvalidTileSize { tile_size });
    }
    let columns = match layout.first() {
        Some(row) if !row.is_empty() => row.chars().count(),
        _ => return Err(MapError::EmptyLayout),
    };

    let speed = tile_size / 4;
    let food_size = tile_size / 8;
    let food_offset = tile_size * 7 / 16;

    let mut walls = Vec::new();
    let mut foods = Vec::new();
    let mut ghosts = Vec::new();
    let mut players = Vec::new();

    for (r, row) in layout.iter().enumerate() {
        let found = row.chars().count();
        if found != columns {
            return Err(MapError::RaggedRow {
                row: r,
                expected: columns,
                found,
            });
        }

        for (c, ch) in row.chars().enumerate() {
            let tile = Tile::from_char(ch).ok_or(MapError::UnknownTile { row: r, col: c, ch })?;
            let x = c as i32 * tile_size;
            let y = r as i32 * tile_size;

            match tile {
                Tile::Wall => walls.push(Wall {
                    rect: Rect::new(x, y, tile_size, tile_size),
                }),
                Tile::Ghost(color) => ghosts.push(Ghost {
                    body: Actor::new(x, y, tile_size, speed),
                    color,
                }),
                Tile::Player => players.push(Actor::new(x, y, tile_size, speed)),
                Tile::Food => foods.push(Food {
                    rect: Rect::new(x + food_offset, y + food_offset, food_size, food_size),
                }),
                Tile::Empty => {}
            }
        }
    }

    let player = match players.len() {
        0 => return Err(MapError::MissingPlayer),
        1 => players.remove(0),
        count => return Err(MapError::MultiplePlayers { count }),
    };

    debug!(
        "loaded {}x{} map: {} walls, {} pellets, {} ghosts",
        columns,
        layout.len(),
        walls.len(),
        foods.len(),
        ghosts.len()
    );

    Ok(Maze {
        walls,
        foods,
        ghosts,
        player,
        tile_size,
        width: columns as i32 * tile_size,
        height: layout.len() as i32 * tile_size,
    })
}

//! Errors raised while turning a character layout into a maze.
//!
//! Everything that can go wrong once play has started (walls, ghosts,
//! running out of pellets) is ordinary game flow and never surfaces here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("layout has no rows")]
    EmptyLayout,

    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, ch: char },

    #[error("layout has no player spawn")]
    MissingPlayer,

    #[error("layout has {count} player spawns, expected exactly one")]
    MultiplePlayers { count: usize },

    #[error("tile size {tile_size} must be a positive multiple of 16")]
    InvalidTileSize { tile_size: i32 },
}

pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MapError::RaggedRow { row: 4, expected: 19, found: 18 };
        assert_eq!(err.to_string(), "row 4 is 18 tiles wide, expected 19");
    }

    #[test]
    fn test_unknown_tile_display_quotes_char() {
        let err = MapError::UnknownTile { row: 0, col: 2, ch: '#' };
        assert!(err.to_string().contains("'#'"));
    }
}

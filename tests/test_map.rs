use maze_chase::entities::*;
use maze_chase::error::MapError;
use maze_chase::map::*;

fn tally(layout: &[&str], wanted: &[char]) -> usize {
    layout
        .iter()
        .flat_map(|row| row.chars())
        .filter(|ch| wanted.contains(ch))
        .count()
}

// ── Reference layout ──────────────────────────────────────────────────────────

#[test]
fn reference_counts_match_character_tally() {
    let maze = load(LAYOUT, 32).unwrap();
    assert_eq!(maze.walls.len(), tally(LAYOUT, &['X']));
    assert_eq!(maze.foods.len(), tally(LAYOUT, &[' ']));
    assert_eq!(maze.ghosts.len(), tally(LAYOUT, &['b', 'o', 'p', 'r']));
}

#[test]
fn reference_counts() {
    let maze = load(LAYOUT, 32).unwrap();
    assert_eq!(maze.walls.len(), 196);
    assert_eq!(maze.foods.len(), 184);
    assert_eq!(maze.ghosts.len(), 4);
}

#[test]
fn reference_board_size() {
    let maze = load(LAYOUT, 32).unwrap();
    assert_eq!(maze.width, 19 * 32);
    assert_eq!(maze.height, 21 * 32);
    assert_eq!(maze.tile_size, 32);
}

#[test]
fn reference_has_one_ghost_per_colour() {
    let maze = load(LAYOUT, 32).unwrap();
    for color in [GhostColor::Blue, GhostColor::Orange, GhostColor::Pink, GhostColor::Red] {
        assert_eq!(maze.ghosts.iter().filter(|g| g.color == color).count(), 1);
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[test]
fn entities_placed_on_their_tiles() {
    let maze = load(&["XOO", "OPb", "O O"], 32).unwrap();

    assert_eq!(maze.walls, vec![Wall { rect: Rect::new(0, 0, 32, 32) }]);

    assert_eq!(maze.player.rect, Rect::new(32, 32, 32, 32));
    assert_eq!(maze.player.start(), (32, 32));
    assert_eq!(maze.player.direction, Direction::Up);
    assert_eq!(maze.player.speed(), 8);

    assert_eq!(maze.ghosts.len(), 1);
    assert_eq!(maze.ghosts[0].color, GhostColor::Blue);
    assert_eq!(maze.ghosts[0].body.rect, Rect::new(64, 32, 32, 32));
    assert_eq!((maze.ghosts[0].body.vx, maze.ghosts[0].body.vy), (0, 0));
}

#[test]
fn food_is_centred_in_its_tile() {
    let maze = load(&["OOO", "OPO", "O O"], 32).unwrap();
    assert_eq!(maze.foods, vec![Food { rect: Rect::new(32 + 14, 64 + 14, 4, 4) }]);
}

#[test]
fn food_scales_with_tile_size() {
    let maze = load(&["P "], 64).unwrap();
    assert_eq!(maze.foods[0].rect, Rect::new(64 + 28, 28, 8, 8));
    assert_eq!(maze.player.speed(), 16);
}

#[test]
fn track_tiles_are_empty() {
    let maze = load(&["OOOP"], 16).unwrap();
    assert!(maze.walls.is_empty());
    assert!(maze.foods.is_empty());
    assert!(maze.ghosts.is_empty());
}

#[test]
fn legend_is_exhaustive_over_known_chars() {
    assert_eq!(Tile::from_char('X'), Some(Tile::Wall));
    assert_eq!(Tile::from_char('o'), Some(Tile::Ghost(GhostColor::Orange)));
    assert_eq!(Tile::from_char('p'), Some(Tile::Ghost(GhostColor::Pink)));
    assert_eq!(Tile::from_char('r'), Some(Tile::Ghost(GhostColor::Red)));
    assert_eq!(Tile::from_char('P'), Some(Tile::Player));
    assert_eq!(Tile::from_char(' '), Some(Tile::Food));
    assert_eq!(Tile::from_char('O'), Some(Tile::Empty));
    assert_eq!(Tile::from_char('.'), None);
}

// ── Validation ────────────────────────────────────────────────────────────────

#[test]
fn rejects_empty_layout() {
    assert_eq!(load(&[], 32), Err(MapError::EmptyLayout));
    assert_eq!(load(&[""], 32), Err(MapError::EmptyLayout));
}

#[test]
fn rejects_ragged_rows() {
    let err = load(&["XXXX", "XPX", "XXXX"], 32).unwrap_err();
    assert_eq!(err, MapError::RaggedRow { row: 1, expected: 4, found: 3 });
}

#[test]
fn rejects_unknown_tile() {
    let err = load(&["XXX", "XP#", "XXX"], 32).unwrap_err();
    assert_eq!(err, MapError::UnknownTile { row: 1, col: 2, ch: '#' });
}

#[test]
fn rejects_missing_player() {
    assert_eq!(load(&["X X"], 32), Err(MapError::MissingPlayer));
}

#[test]
fn rejects_multiple_players() {
    let err = load(&["PXP", "OPO"], 32).unwrap_err();
    assert_eq!(err, MapError::MultiplePlayers { count: 3 });
}

#[test]
fn rejects_bad_tile_size() {
    for tile_size in [0, -32, 20] {
        assert_eq!(load(LAYOUT, tile_size), Err(MapError::InvalidTileSize { tile_size }));
    }
}

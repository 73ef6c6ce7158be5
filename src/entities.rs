//! All game entity types — plain data plus the few invariants that belong
//! to the data itself (start positions, direction-derived velocity).

use crate::config::GameConfig;

// ── Direction ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order ghosts draw from.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step per direction, indexed by discriminant.
    const UNIT: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

    pub fn unit(self) -> (i32, i32) {
        Self::UNIT[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GhostColor {
    Blue,
    Orange,
    Pink,
    Red,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in board pixels, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }
}

// ── Static blocks ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub rect: Rect,
}

/// A pellet. Static: no direction, no velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Food {
    pub rect: Rect,
}

// ── Movers ────────────────────────────────────────────────────────────────────

/// Anything that walks the maze: the player and every ghost.
///
/// The start position is fixed at construction; `reset` returns here.
/// Velocity is always `direction.unit() * speed` or zero (a stopped actor).
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub rect: Rect,
    pub direction: Direction,
    pub vx: i32,
    pub vy: i32,
    start_x: i32,
    start_y: i32,
    speed: i32,
}

impl Actor {
    /// A stationary actor facing up.
    pub fn new(x: i32, y: i32, size: i32, speed: i32) -> Self {
        Actor {
            rect: Rect::new(x, y, size, size),
            direction: Direction::Up,
            vx: 0,
            vy: 0,
            start_x: x,
            start_y: y,
            speed,
        }
    }

    pub fn start(&self) -> (i32, i32) {
        (self.start_x, self.start_y)
    }

    /// Pixels travelled per tick while moving.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn set_direction(&mut self, direction: Direction) {
        let (ux, uy) = direction.unit();
        self.direction = direction;
        self.vx = ux * self.speed;
        self.vy = uy * self.speed;
    }

    /// Back to the start position. Direction and velocity are untouched.
    pub fn reset(&mut self) {
        self.rect.x = self.start_x;
        self.rect.y = self.start_y;
    }

    pub fn stop(&mut self) {
        self.vx = 0;
        self.vy = 0;
    }

    pub fn advance(&mut self) {
        self.rect.x += self.vx;
        self.rect.y += self.vy;
    }

    pub fn retreat(&mut self) {
        self.rect.x -= self.vx;
        self.rect.y -= self.vy;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ghost {
    pub body: Actor,
    /// Spawn tag from the layout; picks the ghost's colour.
    pub color: GhostColor,
}

// ── Maze ──────────────────────────────────────────────────────────────────────

/// Every entity on the board. Built whole by `map::load` and never partially
/// rebuilt; iteration order of the collections carries no meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    pub walls: Vec<Wall>,
    pub foods: Vec<Food>,
    pub ghosts: Vec<Ghost>,
    pub player: Actor,
    pub tile_size: i32,
    /// Board size in pixels.
    pub width: i32,
    pub height: i32,
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
    pub phase: Phase,
}

impl Session {
    pub fn new(lives: u32) -> Self {
        Session {
            score: 0,
            lives,
            phase: Phase::Running,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so the pure transitions in `compute`
/// can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The live board.
    pub maze: Maze,
    /// The board exactly as first loaded, before any ghost was given a
    /// direction. Reloads copy from here.
    pub pristine: Maze,
    pub session: Session,
    pub config: GameConfig,
}

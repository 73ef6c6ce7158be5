//! Game tunables and logging setup.

use std::fs::OpenOptions;
use std::io;
use std::time::Duration;

use env_logger::{Env, Target};

/// Edge length of one maze tile, in pixels.
pub const TILE_SIZE: i32 = 32;

/// Fixed period of the simulation tick.
pub const TICK: Duration = Duration::from_millis(50);

pub const STARTING_LIVES: u32 = 3;

/// Points per pellet.
pub const FOOD_REWARD: u32 = 10;

/// Names the file log output is appended to. Unset means no logging: the
/// terminal is in raw mode, so stderr is not an option.
pub const LOG_FILE_ENV: &str = "MAZE_CHASE_LOG";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub tile_size: i32,
    pub tick: Duration,
    pub starting_lives: u32,
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tile_size: TILE_SIZE,
            tick: TICK,
            starting_lives: STARTING_LIVES,
            food_reward: FOOD_REWARD,
        }
    }
}

impl GameConfig {
    /// Movers travel a quarter tile per tick.
    pub fn speed(&self) -> i32 {
        self.tile_size / 4
    }
}

/// Route `log` output to the file named by `MAZE_CHASE_LOG`, filtered by
/// `RUST_LOG` (default `info`). Returns whether a logger was installed.
pub fn init_logging() -> io::Result<bool> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(false);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(true)
}

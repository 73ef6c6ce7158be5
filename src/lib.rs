//! Maze Chase — a single-screen maze game for the terminal.
//!
//! - `map`: the fixed board layout and its loader
//! - `entities`: plain game data
//! - `collision`: box overlap shared by every interaction
//! - `compute`: the simulation tick and session transitions
//! - `input` / `display`: keyboard and terminal adapters

pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod map;

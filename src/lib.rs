//! Procedural maze generation with single-width corridors, a compact maze
//! file format, and a fog-of-war explorer.

pub mod carve;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod grid;
pub mod play;
pub mod render;
pub mod rules;

pub use error::{GenerationError, LoadError, Phase};
pub use format::{read_maze, write_maze};
pub use generate::{generate, generate_from, write_generated, Maze};
pub use grid::{draw_border, Cell, Dir, Grid, Pos};
pub use rules::{legal_directions, Moves};

//! Whole-maze generation: border, start, critical path, dead ends.

use std::io::Write;

use rand::Rng;

use crate::carve::{carve_critical_path, fill_dead_ends};
use crate::error::GenerationError;
use crate::format::write_maze;
use crate::grid::{draw_border, Cell, Grid, Pos};

/// Largest width or height a maze file header can hold.
pub const MAX_DIMENSION: usize = u8::MAX as usize;

/// A finished maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Pos,
    pub end: Pos,
}

impl Maze {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

/// Checks that a maze of this size fits the file header and leaves room for
/// distinct Start and End cells.
pub fn check_dimensions(width: usize, height: usize) -> Result<(), GenerationError> {
    let fits = (3..=MAX_DIMENSION).contains(&width) && (3..=MAX_DIMENSION).contains(&height);
    if !fits || (width - 2) * (height - 2) < 2 {
        return Err(GenerationError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Generates a maze with a uniformly random interior start.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Maze, GenerationError> {
    check_dimensions(width, height)?;
    let y = rng.gen_range(1..height - 1);
    let x = rng.gen_range(1..width - 1);
    generate_from(width, height, Pos { x, y }, rng)
}

/// Generates a maze whose walk begins at `start`, which must be interior.
pub fn generate_from<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    start: Pos,
    rng: &mut R,
) -> Result<Maze, GenerationError> {
    check_dimensions(width, height)?;
    if start.x == 0 || start.y == 0 || start.x >= width - 1 || start.y >= height - 1 {
        return Err(GenerationError::InvalidDimensions { width, height });
    }
    log::info!("generating {width}x{height} maze from {start:?}");

    let mut grid = Grid::new(width, height);
    draw_border(&mut grid);
    grid.set(start, Cell::Start);

    let walked = carve_critical_path(&mut grid, start, rng);
    let end = walked.last().copied().unwrap_or(start);
    fill_dead_ends(&mut grid, rng);

    Ok(Maze { grid, start, end })
}

/// Generates a maze and writes it to `sink` as a maze file.
pub fn write_generated<R: Rng + ?Sized, W: Write>(
    width: usize,
    height: usize,
    rng: &mut R,
    sink: &mut W,
) -> Result<Maze, GenerationError> {
    let maze = generate(width, height, rng)?;
    write_maze(sink, &maze)?;
    Ok(maze)
}

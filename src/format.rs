//! Maze file codec.
//!
//! A maze file is a four byte header (width, height, start column, start
//! row) followed by `width * height` cell bytes in row-major order. Cells
//! are written exactly as they are held in memory, Border included.

use std::io::{Read, Write};

use crate::error::{GenerationError, LoadError, Phase};
use crate::generate::Maze;
use crate::grid::{Cell, Grid, Pos};

pub const HEADER_SIZE: usize = 4;

pub fn encode_header(maze: &Maze) -> Result<[u8; HEADER_SIZE], GenerationError> {
    let invalid = || GenerationError::InvalidDimensions {
        width: maze.width(),
        height: maze.height(),
    };
    let byte = |v: usize| u8::try_from(v).map_err(|_| invalid());
    Ok([
        byte(maze.width())?,
        byte(maze.height())?,
        byte(maze.start.x)?,
        byte(maze.start.y)?,
    ])
}

/// Writes `maze` to `sink`, reporting header and body failures separately.
pub fn write_maze<W: Write>(sink: &mut W, maze: &Maze) -> Result<(), GenerationError> {
    let header = encode_header(maze)?;
    sink.write_all(&header).map_err(|source| GenerationError::WriteFailure {
        phase: Phase::Header,
        source,
    })?;

    let body = |source| GenerationError::WriteFailure {
        phase: Phase::Body,
        source,
    };
    for row in maze.grid.rows() {
        let bytes: Vec<u8> = row.iter().map(|c| c.byte()).collect();
        sink.write_all(&bytes).map_err(body)?;
    }
    sink.flush().map_err(body)?;
    log::info!(
        "wrote {}x{} maze ({} bytes)",
        maze.width(),
        maze.height(),
        HEADER_SIZE + maze.width() * maze.height()
    );
    Ok(())
}

/// Reads a maze file from `source`.
pub fn read_maze<R: Read>(source: &mut R) -> Result<Maze, LoadError> {
    let mut header = [0u8; HEADER_SIZE];
    source
        .read_exact(&mut header)
        .map_err(|source| LoadError::ReadFailure {
            phase: Phase::Header,
            source,
        })?;
    let [w, h, sx, sy] = header;
    if w < 3 || h < 3 {
        return Err(LoadError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    let (width, height) = (w as usize, h as usize);

    let mut body = vec![0u8; width * height];
    source
        .read_exact(&mut body)
        .map_err(|source| LoadError::ReadFailure {
            phase: Phase::Body,
            source,
        })?;
    let grid = Grid::from_bytes(width, height, &body).map_err(|idx| LoadError::InvalidCell {
        byte: body[idx],
        x: idx % width,
        y: idx / width,
    })?;

    let start = Pos::new(sx as usize, sy as usize);
    match grid.get(start) {
        None => return Err(LoadError::StartOutOfBounds { x: sx, y: sy }),
        Some(Cell::Start) => {}
        Some(_) => return Err(LoadError::StartNotMarked { x: sx, y: sy }),
    }
    let end = grid.find(Cell::End).ok_or(LoadError::MissingEnd)?;
    log::debug!("loaded {width}x{height} maze, start {start:?}, end {end:?}");
    Ok(Maze { grid, start, end })
}

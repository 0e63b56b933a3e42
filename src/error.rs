//! Error types for maze generation and maze files.

use std::fmt;
use std::io;

/// Which part of a maze file an I/O failure hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Header,
    Body,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Body => write!(f, "grid body"),
        }
    }
}

/// Errors arising from generating a maze and writing it out.
#[derive(Debug)]
pub enum GenerationError {
    /// Width or height do not fit a header byte, or leave fewer than two
    /// interior cells.
    InvalidDimensions { width: usize, height: usize },
    /// The byte sink rejected a write.
    WriteFailure { phase: Phase, source: io::Error },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {width}x{height}")
            }
            Self::WriteFailure { phase, source } => {
                write!(f, "failed to write maze {phase}: {source}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WriteFailure { source, .. } => Some(source),
            Self::InvalidDimensions { .. } => None,
        }
    }
}

/// Errors arising from reading a maze file.
#[derive(Debug)]
pub enum LoadError {
    /// The source ended early or failed.
    ReadFailure { phase: Phase, source: io::Error },
    /// The header names a grid with no interior.
    InvalidDimensions { width: u8, height: u8 },
    /// A body byte is not a known cell.
    InvalidCell { byte: u8, x: usize, y: usize },
    /// The header's start lies outside the grid.
    StartOutOfBounds { x: u8, y: u8 },
    /// The header's start does not point at a Start cell.
    StartNotMarked { x: u8, y: u8 },
    /// No cell is marked End.
    MissingEnd,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailure { phase, source } => {
                write!(f, "failed to read maze {phase}: {source}")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze file has invalid dimensions {width}x{height}")
            }
            Self::InvalidCell { byte, x, y } => {
                write!(f, "unknown cell byte 0x{byte:02x} at ({x}, {y})")
            }
            Self::StartOutOfBounds { x, y } => {
                write!(f, "start ({x}, {y}) lies outside the maze")
            }
            Self::StartNotMarked { x, y } => {
                write!(f, "start ({x}, {y}) is not a start cell")
            }
            Self::MissingEnd => write!(f, "maze has no exit"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

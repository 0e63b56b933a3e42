//! Command-line arguments and the interactive prompts behind them.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{MAX_HEIGHT, MAX_NAME_LEN, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use crate::play::read_line;

/// Generate mazes and explore them one step at a time
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Generate a new maze, save it, then play it
    New {
        /// Maze name; `.txt` is appended
        #[arg(long)]
        name: Option<String>,

        /// Maze width in cells (10 - 150)
        #[arg(long, value_parser = clap::value_parser!(u16).range(MIN_WIDTH as i64..=MAX_WIDTH as i64))]
        width: Option<u16>,

        /// Maze height in cells (10 - 50)
        #[arg(long, value_parser = clap::value_parser!(u16).range(MIN_HEIGHT as i64..=MAX_HEIGHT as i64))]
        height: Option<u16>,

        /// Random seed; defaults to FOGMAZE_SEED, then the clock
        #[arg(long)]
        seed: Option<u64>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
    /// Play a saved maze file
    Play {
        path: PathBuf,
    },
}

/// Accepts names of at most `MAX_NAME_LEN` characters with no whitespace.
pub fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && !name.chars().any(char::is_whitespace)
}

pub fn maze_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.txt"))
}

/// Asks for a maze name until a valid one is given. `None` at end of input.
pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    loop {
        writeln!(
            out,
            "Desired filename ({MAX_NAME_LEN} characters maximum, no spaces):"
        )?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let name = line.trim();
        if valid_name(name) {
            return Ok(Some(name.to_string()));
        }
    }
}

/// Asks `label` until the answer parses and lies in `range`.
pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    range: RangeInclusive<usize>,
) -> io::Result<Option<usize>> {
    loop {
        write!(out, "{label} ({} - {}): ", range.start(), range.end())?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(n) if range.contains(&n) => return Ok(Some(n)),
            _ => continue,
        }
    }
}

/// Asks a y/n question until answered. End of input counts as no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<bool> {
    writeln!(out, "{question} (y/n)")?;
    out.flush()?;
    loop {
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match line.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => continue,
        }
    }
}

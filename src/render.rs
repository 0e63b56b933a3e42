use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::generate::Maze;
use crate::grid::{Cell, Pos};
use crate::play::FogMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Player,
    Wall,
    Floor,
    Start,
    End,
    Unknown,
}

impl Glyph {
    fn color(self) -> Color {
        match self {
            Glyph::Player => Color::Yellow,
            Glyph::Wall => Color::Blue,
            Glyph::Floor | Glyph::Unknown => Color::Reset,
            Glyph::Start => Color::Green,
            Glyph::End => Color::Red,
        }
    }
}

/// Glyph set and cell width used when drawing maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    ascii: bool,
    cell_w: usize,
}

impl Glyphs {
    /// Wide glyphs need two columns; narrower cells fall back to ASCII.
    pub fn new(ascii: bool, cell_w: usize) -> Self {
        let cell_w = cell_w.max(1);
        Self {
            ascii: ascii || cell_w < 2,
            cell_w,
        }
    }

    /// `text` for `glyph`, padded to the cell width.
    pub fn text(&self, glyph: Glyph) -> String {
        let raw = if self.ascii {
            match glyph {
                Glyph::Player => "*",
                Glyph::Wall => "1",
                Glyph::Start => "S",
                Glyph::End => "E",
                Glyph::Floor | Glyph::Unknown => " ",
            }
        } else {
            match glyph {
                Glyph::Player => "😃",
                Glyph::Wall => "██",
                Glyph::Start => "S",
                Glyph::End => "E",
                Glyph::Floor => " ",
                Glyph::Unknown => "░░",
            }
        };
        let mut text = raw.to_string();
        let w = UnicodeWidthStr::width(raw);
        if w < self.cell_w {
            text.extend(std::iter::repeat(' ').take(self.cell_w - w));
        }
        text
    }

    fn legend(&self) -> String {
        format!(
            "Key:\n'{}' = player | '{}' = wall | '{}' = starting point | '{}' = exit\n",
            self.text(Glyph::Player).trim_end(),
            self.text(Glyph::Wall).trim_end(),
            self.text(Glyph::Start).trim_end(),
            self.text(Glyph::End).trim_end(),
        )
    }
}

pub fn glyph_for(cell: Option<Cell>) -> Glyph {
    match cell {
        None => Glyph::Unknown,
        Some(Cell::Wall | Cell::Border) => Glyph::Wall,
        Some(Cell::Floor) => Glyph::Floor,
        Some(Cell::Start) => Glyph::Start,
        Some(Cell::End) => Glyph::End,
    }
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    out.queue(Clear(ClearType::Purge))?;
    out.queue(MoveTo(0, 0))?;
    out.flush()
}

pub fn message<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.queue(Print(text))?;
    out.queue(Print("\n"))?;
    out.flush()
}

fn draw_glyph<W: Write>(out: &mut W, glyphs: &Glyphs, glyph: Glyph) -> io::Result<()> {
    out.queue(SetForegroundColor(glyph.color()))?;
    out.queue(Print(glyphs.text(glyph)))?;
    out.queue(ResetColor)?;
    Ok(())
}

/// Draws the player's partially revealed map and the legend.
pub fn draw_map<W: Write>(out: &mut W, map: &FogMap, player: Pos, glyphs: &Glyphs) -> io::Result<()> {
    out.queue(Print("Current map:\n"))?;
    for y in 0..map.height() {
        for x in 0..map.width() {
            let pos = Pos { x, y };
            let glyph = if pos == player {
                Glyph::Player
            } else {
                glyph_for(map.get(pos))
            };
            draw_glyph(out, glyphs, glyph)?;
        }
        out.queue(Print("\n"))?;
    }
    out.queue(Print("\n"))?;
    out.queue(Print(glyphs.legend()))?;
    out.queue(Print("\n"))?;
    out.flush()
}

/// Draws every cell of `maze`, fog lifted.
pub fn draw_full_map<W: Write>(out: &mut W, maze: &Maze, glyphs: &Glyphs) -> io::Result<()> {
    out.queue(Print("Complete map:\n"))?;
    for row in maze.grid.rows() {
        for &cell in row {
            draw_glyph(out, glyphs, glyph_for(Some(cell)))?;
        }
        out.queue(Print("\n"))?;
    }
    out.flush()
}

pub fn draw_help<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Print(
        "----Valid Commands----\n\
         Function commands:\n\
         \tHelp: prints this listing\n\
         \tRestart: erases the map and places player back at start\n\
         \tQuit: terminates the program\n\
         Movement commands:\n\
         \tUp or W: moves the player up one space\n\
         \tDown or S: moves the player down one space\n\
         \tLeft or A: moves the player left one space\n\
         \tRight or D: moves the player right one space\n\
         \nCommands are not case-sensitive.\n",
    ))?;
    out.flush()
}

pub fn draw_win_banner<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(SetForegroundColor(Color::Yellow))?;
    out.queue(Print(
        "+------------------------------+\n\
         |                              |\n\
         |       Y O U   W I N  !       |\n\
         |                              |\n\
         +------------------------------+\n",
    ))?;
    out.queue(ResetColor)?;
    out.flush()
}

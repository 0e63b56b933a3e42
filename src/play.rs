//! Turn-based exploration of a generated maze under fog of war.

use std::io::{self, BufRead, Write};

use crossterm::style::Print;
use crossterm::QueueableCommand;

use crate::generate::Maze;
use crate::grid::{Cell, Dir, Grid, Pos};
use crate::render::{self, Glyphs};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Dir),
    Help,
    Restart,
    Quit,
    Unrecognized,
}

/// Parses one line of player input. Case and surrounding whitespace are
/// ignored.
pub fn parse_command(input: &str) -> Command {
    match input.trim().to_ascii_lowercase().as_str() {
        "up" | "w" => Command::Move(Dir::Up),
        "down" | "s" => Command::Move(Dir::Down),
        "left" | "a" => Command::Move(Dir::Left),
        "right" | "d" => Command::Move(Dir::Right),
        "help" => Command::Help,
        "restart" => Command::Restart,
        "quit" => Command::Quit,
        _ => Command::Unrecognized,
    }
}

/// What the player has seen so far. The border is known from the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FogMap {
    width: usize,
    height: usize,
    seen: Vec<Vec<Option<Cell>>>,
}

impl FogMap {
    pub fn new(grid: &Grid) -> Self {
        let seen = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&c| (c == Cell::Border).then_some(c))
                    .collect()
            })
            .collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            seen,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.seen.get(pos.y).and_then(|row| row.get(pos.x)).copied().flatten()
    }

    /// Lifts the fog on `pos` and its four cardinal neighbors.
    pub fn reveal(&mut self, grid: &Grid, pos: Pos) {
        let around = Dir::ALL.into_iter().filter_map(|d| grid.neighbor(pos, d, 1));
        for p in std::iter::once(pos).chain(around) {
            if let Some(cell) = grid.get(p) {
                self.seen[p.y][p.x] = Some(cell);
            }
        }
    }

    pub fn revealed(&self) -> usize {
        self.seen.iter().flatten().filter(|c| c.is_some()).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved,
    Won,
    Blocked,
    Restarted,
    Help,
    Quit,
    Unrecognized,
}

impl Outcome {
    /// Whether the screen should be redrawn before the next prompt.
    pub fn ends_turn(self) -> bool {
        matches!(self, Outcome::Moved | Outcome::Restarted | Outcome::Won)
    }
}

pub struct Game {
    maze: Maze,
    player: Pos,
    map: FogMap,
    won: bool,
}

impl Game {
    pub fn new(maze: Maze) -> Self {
        let map = FogMap::new(&maze.grid);
        Self {
            player: maze.start,
            maze,
            map,
            won: false,
        }
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn map(&self) -> &FogMap {
        &self.map
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn reveal(&mut self) {
        self.map.reveal(&self.maze.grid, self.player);
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Move(dir) => self.step(dir),
            Command::Restart => {
                self.map = FogMap::new(&self.maze.grid);
                self.player = self.maze.start;
                Outcome::Restarted
            }
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
            Command::Unrecognized => Outcome::Unrecognized,
        }
    }

    fn step(&mut self, dir: Dir) -> Outcome {
        let target = self.maze.grid.neighbor(self.player, dir, 1);
        match target.and_then(|p| self.maze.grid.get(p).map(|c| (p, c))) {
            Some((p, cell)) if cell.is_walkable() => {
                self.player = p;
                Outcome::Moved
            }
            Some((_, Cell::End)) => {
                self.won = true;
                Outcome::Won
            }
            _ => Outcome::Blocked,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Quit,
}

/// Reads one line, `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    out.queue(Print(text))?;
    out.flush()?;
    read_line(input)
}

/// Runs the explore loop until the player wins, quits, or input ends.
pub fn run_session<R: BufRead, W: Write>(
    maze: Maze,
    input: &mut R,
    out: &mut W,
    glyphs: &Glyphs,
) -> io::Result<SessionEnd> {
    let mut game = Game::new(maze);
    let mut turns = 0usize;
    loop {
        game.reveal();
        render::clear_screen(out)?;
        render::draw_map(out, game.map(), game.player(), glyphs)?;

        let outcome = loop {
            let Some(line) = prompt(input, out, "Type command ('help' for help): ")? else {
                log::debug!("input closed after {turns} turns");
                return Ok(SessionEnd::Quit);
            };
            let outcome = game.apply(parse_command(&line));
            match outcome {
                Outcome::Blocked => render::message(out, "Cannot move into wall.")?,
                Outcome::Help => render::draw_help(out)?,
                Outcome::Unrecognized => {
                    render::message(out, "Unrecognized command. Type 'help' for help.")?
                }
                Outcome::Quit => {
                    render::clear_screen(out)?;
                    return Ok(SessionEnd::Quit);
                }
                Outcome::Moved | Outcome::Restarted | Outcome::Won => {}
            }
            if outcome.ends_turn() {
                break outcome;
            }
        };
        turns += 1;

        if outcome == Outcome::Won {
            log::info!("maze solved in {turns} turns");
            finish(&game, input, out, glyphs)?;
            return Ok(SessionEnd::Won);
        }
    }
}

fn finish<R: BufRead, W: Write>(game: &Game, input: &mut R, out: &mut W, glyphs: &Glyphs) -> io::Result<()> {
    const PRESS_ENTER: &str = "\n\n----press ENTER----\n";
    render::clear_screen(out)?;
    render::draw_win_banner(out)?;
    prompt(input, out, PRESS_ENTER)?;

    render::clear_screen(out)?;
    render::draw_full_map(out, game.maze(), glyphs)?;
    prompt(input, out, PRESS_ENTER)?;
    render::clear_screen(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_from;
    use rand::rngs::mock::StepRng;
    use std::io::Cursor;

    // Fixture maze from the all-zero source; see generate.rs.
    fn fixture() -> Maze {
        generate_from(10, 10, Pos::new(1, 1), &mut StepRng::new(0, 0)).unwrap()
    }

    #[test]
    fn commands_ignore_case_and_whitespace() {
        assert_eq!(parse_command("UP\n"), Command::Move(Dir::Up));
        assert_eq!(parse_command("  a "), Command::Move(Dir::Left));
        assert_eq!(parse_command("Right"), Command::Move(Dir::Right));
        assert_eq!(parse_command("s"), Command::Move(Dir::Down));
        assert_eq!(parse_command("ReStArT"), Command::Restart);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("jump"), Command::Unrecognized);
        assert_eq!(parse_command(""), Command::Unrecognized);
    }

    #[test]
    fn fog_starts_with_border_only() {
        let maze = fixture();
        let map = FogMap::new(&maze.grid);
        assert_eq!(map.revealed(), 36);
        assert_eq!(map.get(Pos::new(0, 0)), Some(Cell::Border));
        assert_eq!(map.get(Pos::new(1, 1)), None);
    }

    #[test]
    fn reveal_lifts_cross_around_player() {
        let maze = fixture();
        let mut game = Game::new(maze);
        game.reveal();
        let map = game.map();
        assert_eq!(map.get(Pos::new(1, 1)), Some(Cell::Start));
        assert_eq!(map.get(Pos::new(2, 1)), Some(Cell::Wall));
        assert_eq!(map.get(Pos::new(1, 2)), Some(Cell::Floor));
        assert_eq!(map.get(Pos::new(2, 2)), None);
        assert_eq!(map.revealed(), 36 + 3);
    }

    #[test]
    fn walls_block_and_floor_moves() {
        let mut game = Game::new(fixture());
        assert_eq!(game.apply(Command::Move(Dir::Right)), Outcome::Blocked);
        assert_eq!(game.apply(Command::Move(Dir::Up)), Outcome::Blocked);
        assert_eq!(game.apply(Command::Move(Dir::Down)), Outcome::Moved);
        assert_eq!(game.player(), Pos::new(1, 2));
        assert_eq!(game.apply(Command::Move(Dir::Up)), Outcome::Moved);
        assert_eq!(game.player(), Pos::new(1, 1));
    }

    #[test]
    fn restart_returns_to_start_and_refogs() {
        let mut game = Game::new(fixture());
        game.reveal();
        game.apply(Command::Move(Dir::Down));
        game.reveal();
        assert_eq!(game.apply(Command::Restart), Outcome::Restarted);
        assert_eq!(game.player(), Pos::new(1, 1));
        assert_eq!(game.map().revealed(), 36);
    }

    #[test]
    fn stepping_onto_end_wins() {
        let mut game = Game::new(fixture());
        // The exit at (8,1) hangs off the corridor at column 7.
        game.player = Pos::new(7, 1);
        assert_eq!(game.apply(Command::Move(Dir::Right)), Outcome::Won);
        assert!(game.is_won());
        assert_eq!(game.player(), Pos::new(7, 1));
    }

    /// Commands walking the fixture from Start to End along its only route.
    fn solution() -> String {
        let mut moves = Vec::new();
        moves.extend(["s"; 7]); // down column 1
        moves.extend(["d"; 2]); // along row 8
        moves.extend(["w"; 7]); // up column 3
        moves.extend(["d"; 2]); // along row 1
        moves.extend(["s"; 7]); // down column 5
        moves.extend(["d"; 2]); // along row 8
        moves.extend(["w"; 7]); // up column 7
        moves.push("d"); // exit
        let mut text = moves.join("\n");
        text.push_str("\n\n\n");
        text
    }

    #[test]
    fn session_plays_to_victory() {
        let mut input = Cursor::new(solution());
        let mut out = Vec::new();
        let end = run_session(fixture(), &mut input, &mut out, &Glyphs::new(true, 1)).unwrap();
        assert_eq!(end, SessionEnd::Won);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Y O U   W I N"));
        assert!(text.contains("Complete map:"));
    }

    #[test]
    fn session_reports_walls_and_unknown_commands() {
        let mut input = Cursor::new("right\ndance\nhelp\nquit\n");
        let mut out = Vec::new();
        let end = run_session(fixture(), &mut input, &mut out, &Glyphs::new(true, 1)).unwrap();
        assert_eq!(end, SessionEnd::Quit);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Cannot move into wall."));
        assert!(text.contains("Unrecognized command. Type 'help' for help."));
        assert!(text.contains("----Valid Commands----"));
        assert!(!text.contains("Complete map:"));
    }

    #[test]
    fn closed_input_quits() {
        let mut input = Cursor::new("d\n");
        let mut out = Vec::new();
        let end = run_session(fixture(), &mut input, &mut out, &Glyphs::new(true, 1)).unwrap();
        assert_eq!(end, SessionEnd::Quit);
    }
}

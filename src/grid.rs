//! Cell storage for a maze: the grid itself, positions and directions.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Border,
    Start,
    End,
}

impl Cell {
    /// Byte used for this cell both in memory dumps and in maze files.
    pub const fn byte(self) -> u8 {
        match self {
            Cell::Wall => b'1',
            Cell::Floor => b'0',
            Cell::Border => b'B',
            Cell::Start => b'S',
            Cell::End => b'E',
        }
    }

    pub const fn from_byte(byte: u8) -> Option<Cell> {
        match byte {
            b'1' => Some(Cell::Wall),
            b'0' => Some(Cell::Floor),
            b'B' => Some(Cell::Border),
            b'S' => Some(Cell::Start),
            b'E' => Some(Cell::End),
            _ => None,
        }
    }

    /// Floor, Start and End: the cells a corridor is made of.
    pub fn is_path(self) -> bool {
        matches!(self, Cell::Floor | Cell::Start | Cell::End)
    }

    /// Cells the player may stand on (End is entered only to win).
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Floor | Cell::Start)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Position `dir` steps away, or `None` if it would go below zero.
    pub fn offset(self, dir: Dir, steps: usize) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let steps = steps as isize;
        let nx = self.x as isize + dx * steps;
        let ny = self.y as isize + dy * steps;
        if nx < 0 || ny < 0 {
            return None;
        }
        Some(Pos {
            x: nx as usize,
            y: ny as usize,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub fn perpendicular(self) -> [Dir; 2] {
        match self {
            Dir::Up | Dir::Down => [Dir::Left, Dir::Right],
            Dir::Left | Dir::Right => [Dir::Up, Dir::Down],
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Dir::Up => 0,
            Dir::Down => 1,
            Dir::Left => 2,
            Dir::Right => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// A `width` x `height` grid with every cell set to Wall.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::Wall; width]; height],
        }
    }

    /// Rebuilds a grid from row-major cell bytes. Returns the offending
    /// index on an unknown byte.
    pub fn from_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, usize> {
        debug_assert_eq!(bytes.len(), width * height);
        let mut grid = Grid::new(width, height);
        for (idx, &b) in bytes.iter().enumerate() {
            let cell = Cell::from_byte(b).ok_or(idx)?;
            grid.cells[idx / width][idx % width] = cell;
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    /// Panics if `pos` is off the grid.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.y][pos.x] = cell;
    }

    /// The in-bounds position `steps` cells away in `dir`.
    pub fn neighbor(&self, pos: Pos, dir: Dir, steps: usize) -> Option<Pos> {
        pos.offset(dir, steps).filter(|p| self.contains(*p))
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.y == 0 || pos.y + 1 == self.height || pos.x == 0 || pos.x + 1 == self.width
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Pos { x, y }))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn find(&self, cell: Cell) -> Option<Pos> {
        self.positions().find(|&p| self.cells[p.y][p.x] == cell)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flat_map(|row| row.iter().map(|c| c.byte()))
            .collect()
    }
}

/// Sets every cell of the outer ring to Border.
pub fn draw_border(grid: &mut Grid) {
    for y in 0..grid.height {
        for x in 0..grid.width {
            if y == 0 || y == grid.height - 1 || x == 0 || x == grid.width - 1 {
                grid.cells[y][x] = Cell::Border;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_covers_ring_only() {
        let mut grid = Grid::new(7, 5);
        draw_border(&mut grid);
        for pos in grid.positions() {
            let cell = grid.get(pos).unwrap();
            if grid.is_border(pos) {
                assert_eq!(cell, Cell::Border, "{pos:?}");
            } else {
                assert_eq!(cell, Cell::Wall, "{pos:?}");
            }
        }
        assert_eq!(grid.count(Cell::Border), 2 * 7 + 2 * 3);
    }

    #[test]
    fn neighbor_stays_on_grid() {
        let grid = Grid::new(4, 4);
        let corner = Pos::new(0, 0);
        assert_eq!(grid.neighbor(corner, Dir::Up, 1), None);
        assert_eq!(grid.neighbor(corner, Dir::Left, 1), None);
        assert_eq!(grid.neighbor(corner, Dir::Right, 2), Some(Pos::new(2, 0)));
        assert_eq!(grid.neighbor(corner, Dir::Down, 4), None);
    }

    #[test]
    fn bytes_map_to_cells() {
        for cell in [Cell::Wall, Cell::Floor, Cell::Border, Cell::Start, Cell::End] {
            assert_eq!(Cell::from_byte(cell.byte()), Some(cell));
        }
        assert_eq!(Cell::from_byte(b'x'), None);
    }

    #[test]
    fn from_bytes_reports_bad_index() {
        let bytes = b"BBBB1x";
        assert_eq!(Grid::from_bytes(3, 2, bytes), Err(5));
    }

    #[test]
    fn perpendiculars() {
        assert_eq!(Dir::Up.perpendicular(), [Dir::Left, Dir::Right]);
        assert_eq!(Dir::Right.perpendicular(), [Dir::Up, Dir::Down]);
    }
}

//! Which directions may be carved from a cell without widening a corridor.

use rand::Rng;

use crate::grid::{Cell, Dir, Grid, Pos};

/// The set of legal carve directions at one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Moves {
    legal: [bool; 4],
}

impl Moves {
    pub fn contains(&self, dir: Dir) -> bool {
        self.legal[dir.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.legal.iter().any(|&l| l)
    }

    pub fn len(&self) -> usize {
        self.legal.iter().filter(|&&l| l).count()
    }

    /// Legal directions in Up, Down, Left, Right order.
    pub fn iter(&self) -> impl Iterator<Item = Dir> + '_ {
        Dir::ALL.into_iter().filter(|d| self.contains(*d))
    }

    /// Uniform pick among the legal directions.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Dir> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        self.iter().nth(rng.gen_range(0..n))
    }

    fn insert(&mut self, dir: Dir) {
        self.legal[dir.index()] = true;
    }
}

/// Directions from `pos` whose neighbor is Wall and whose look-ahead cells
/// (one further on, and either side of the neighbor) hold no path cell.
pub fn legal_directions(grid: &Grid, pos: Pos) -> Moves {
    let mut moves = Moves::default();
    for dir in Dir::ALL {
        if can_carve(grid, pos, dir) {
            moves.insert(dir);
        }
    }
    moves
}

fn can_carve(grid: &Grid, pos: Pos, dir: Dir) -> bool {
    let Some(next) = grid.neighbor(pos, dir, 1) else {
        return false;
    };
    if grid.get(next) != Some(Cell::Wall) {
        return false;
    }
    let [side_a, side_b] = dir.perpendicular();
    let ahead = [
        grid.neighbor(next, dir, 1),
        grid.neighbor(next, side_a, 1),
        grid.neighbor(next, side_b, 1),
    ];
    !ahead
        .into_iter()
        .flatten()
        .any(|p| grid.get(p).is_some_and(Cell::is_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::draw_border;

    fn bordered(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        draw_border(&mut grid);
        grid
    }

    #[test]
    fn open_interior_allows_every_wall_direction() {
        let mut grid = bordered(7, 7);
        let center = Pos::new(3, 3);
        grid.set(center, Cell::Floor);
        let moves = legal_directions(&grid, center);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn border_and_path_neighbors_are_not_candidates() {
        let mut grid = bordered(6, 6);
        let pos = Pos::new(1, 1);
        grid.set(pos, Cell::Start);
        grid.set(Pos::new(2, 1), Cell::Floor);
        let moves = legal_directions(&grid, pos);
        assert!(!moves.contains(Dir::Up));
        assert!(!moves.contains(Dir::Left));
        assert!(!moves.contains(Dir::Right));
        assert!(moves.contains(Dir::Down));
    }

    #[test]
    fn look_ahead_blocks_corridor_widening() {
        let mut grid = bordered(7, 7);
        let pos = Pos::new(2, 2);
        grid.set(pos, Cell::Floor);
        let moves = legal_directions(&grid, pos);
        // Right target (3,2): ahead (4,2) wall, sides (3,1),(3,3) wall.
        assert!(moves.contains(Dir::Right));
        // Down target (2,3): ahead (2,4) wall, sides (1,3),(3,3) wall.
        assert!(moves.contains(Dir::Down));

        // A diagonal corridor cell would make a 2x2 block either way.
        grid.set(Pos::new(3, 3), Cell::Floor);
        let moves = legal_directions(&grid, pos);
        assert!(!moves.contains(Dir::Right), "side cell (3,3) is path");
        assert!(!moves.contains(Dir::Down), "side cell (3,3) is path");
        assert!(moves.contains(Dir::Up));
        assert!(moves.contains(Dir::Left));
    }

    #[test]
    fn end_marker_disqualifies_like_floor() {
        let mut grid = bordered(6, 6);
        let pos = Pos::new(2, 2);
        grid.set(pos, Cell::Floor);
        grid.set(Pos::new(2, 4), Cell::End);
        assert!(!legal_directions(&grid, pos).contains(Dir::Down));
    }

    #[test]
    fn boxed_in_cell_has_no_moves() {
        let mut grid = bordered(3, 3);
        let pos = Pos::new(1, 1);
        grid.set(pos, Cell::Start);
        let moves = legal_directions(&grid, pos);
        assert!(moves.is_empty());
        assert_eq!(moves.choose(&mut rand::rngs::mock::StepRng::new(0, 0)), None);
    }

    #[test]
    fn choose_with_zero_source_takes_first_in_order() {
        let mut grid = bordered(7, 7);
        let pos = Pos::new(3, 3);
        grid.set(pos, Cell::Floor);
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        assert_eq!(legal_directions(&grid, pos).choose(&mut rng), Some(Dir::Up));
    }
}

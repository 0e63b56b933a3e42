//! The two carving phases: the critical path walk and dead-end filling.

use rand::Rng;

use crate::grid::{Cell, Grid, Pos};
use crate::rules::legal_directions;

/// Walks from `start`, carving Floor in a random legal direction each step
/// until no direction is legal, then marks the final cell End.
///
/// Returns every position visited, `start` first and the End cell last. If
/// `start` is boxed in, End is stamped over it and the walk has length one.
pub fn carve_critical_path<R: Rng + ?Sized>(grid: &mut Grid, start: Pos, rng: &mut R) -> Vec<Pos> {
    let mut pos = start;
    let mut walked = vec![start];
    while let Some(dir) = legal_directions(grid, pos).choose(rng) {
        let Some(next) = grid.neighbor(pos, dir, 1) else {
            break;
        };
        grid.set(next, Cell::Floor);
        pos = next;
        walked.push(pos);
    }
    grid.set(pos, Cell::End);
    log::debug!("critical path: {} cells, end at {:?}", walked.len(), pos);
    walked
}

/// Grows branches off every Floor cell until a full scan finds no cell with
/// a legal direction. Returns the number of scans.
///
/// A cell with a legal direction counts as progress even when the coin
/// flip declines to carve; that only costs extra scans.
pub fn fill_dead_ends<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut scans = 0;
    loop {
        scans += 1;
        let mut moved = false;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = Pos { x, y };
                if grid.get(pos) != Some(Cell::Floor) {
                    continue;
                }
                let Some(dir) = legal_directions(grid, pos).choose(rng) else {
                    continue;
                };
                moved = true;
                if rng.gen_bool(0.5) {
                    if let Some(next) = grid.neighbor(pos, dir, 1) {
                        grid.set(next, Cell::Floor);
                    }
                }
            }
        }
        if !moved {
            break;
        }
    }
    log::debug!("dead-end fill settled after {scans} scans");
    scans
}

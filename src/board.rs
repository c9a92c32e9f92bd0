use std::fmt;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::union_find::UnionFind;

/// Playing field wrapped in a one-cell frame of walls.
///
/// Coordinates passed to [`Board::get`] are frame coordinates: the interior spans
/// `1..=interior_width()` by `1..=interior_height()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid<Cell>,
}

impl Board {
    pub fn from_interior(interior: &Grid<Cell>) -> Self {
        let width = interior.width();
        let height = interior.height();

        let cells = Grid::new(width + 2, height + 2, &mut |x, y| {
            if x == 0 || y == 0 || x > width || y > height {
                Cell::Wall
            } else {
                interior.get(x - 1, y - 1).copied().unwrap_or(Cell::Wall)
            }
        });

        Self { cells }
    }

    /// Wraps an already framed grid. Frame cells are forced back to walls.
    pub(crate) fn from_framed(mut cells: Grid<Cell>) -> Self {
        let (width, height) = (cells.width(), cells.height());

        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                    let _ = cells.set(x, y, Cell::Wall);
                }
            }
        }

        Self { cells }
    }

    pub fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn interior_width(&self) -> usize {
        self.cells.width().saturating_sub(2)
    }

    pub fn interior_height(&self) -> usize {
        self.cells.height().saturating_sub(2)
    }

    /// Cell at frame coordinates. Anything outside the board reads as a wall.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells.get(x, y).copied().unwrap_or(Cell::Wall)
    }

    pub fn interior(&self) -> Grid<Cell> {
        Grid::new(self.interior_width(), self.interior_height(), &mut |x, y| {
            self.get(x + 1, y + 1)
        })
    }

    pub fn blob_count(&self) -> usize {
        self.cells.iter().filter(|(_, _, cell)| cell.is_blob()).count()
    }

    /// True when every blob-like cell belongs to one 4-connected group.
    /// A board without blobs counts as solved.
    pub fn is_solved(&self) -> bool {
        let width = self.interior_width();
        let height = self.interior_height();
        let id = |x: usize, y: usize| x * height + y;

        let mut sets = UnionFind::new(width * height);
        let mut last_blob = None;

        for x in 0..width {
            for y in 0..height {
                if !self.get(x + 1, y + 1).is_blob() {
                    continue;
                }

                last_blob = Some(id(x, y));

                // the frame is never a blob, so the neighbour ids stay in range
                if self.get(x + 2, y + 1).is_blob() {
                    sets.union(id(x, y), id(x + 1, y));
                }
                if self.get(x + 1, y + 2).is_blob() {
                    sets.union(id(x, y), id(x, y + 1));
                }
            }
        }

        let reference = match last_blob {
            None => return true,
            Some(index) => sets.find(index),
        };

        for x in 0..width {
            for y in 0..height {
                if self.get(x + 1, y + 1).is_blob() && sets.find(id(x, y)) != reference {
                    return false;
                }
            }
        }

        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", self.get(x, y))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

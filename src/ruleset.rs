use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::grid::Grid;

/// How cells decide whether they slide during a move.
///
/// Both rules advance eligible cells by exactly one rank per move. `Fixed` and `Wall`
/// cells never move and stop everything behind them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    /// A player steps into open space and drags the unbroken run of blobs trailing it.
    /// Free blobs never start moving on their own.
    #[default]
    PlayerDrag,
    /// Every free blob and player slides into open space, trains of them advancing together.
    FreeSlide,
}

/// Result of a single resolution pass on a front-oriented grid.
#[derive(Debug, Clone)]
pub(crate) struct Shift {
    pub cells: Grid<Cell>,
    /// Destination cells whose content arrived from behind.
    pub arrived: Grid<bool>,
}

impl Ruleset {
    fn slides(self, cell: Cell, front: Cell, front_slides: bool) -> bool {
        let open = front_slides || front == Cell::Empty;

        match (self, cell) {
            (_, Cell::Player) => open,
            (Ruleset::FreeSlide, Cell::Free) => open,
            (Ruleset::PlayerDrag, Cell::Free) => front_slides,
            _ => false,
        }
    }

    /// Resolves one move toward the top edge (`y - 1`) of a framed grid.
    ///
    /// Each column is scanned from the top so a cell knows whether the cell in front of it
    /// slides before deciding itself. Returns `None` when nothing can move.
    pub(crate) fn shift_front(self, grid: &Grid<Cell>) -> Option<Shift> {
        let width = grid.width();
        let height = grid.height();
        let cell = |x: usize, y: usize| grid.get(x, y).copied().unwrap_or(Cell::Wall);

        let mut slides = Grid::new(width, height, &mut |_, _| false);
        let mut any = false;

        for x in 1..width.saturating_sub(1) {
            let mut front_slides = false;

            for y in 1..height.saturating_sub(1) {
                let moving = self.slides(cell(x, y), cell(x, y - 1), front_slides);

                if moving {
                    let _ = slides.set(x, y, true);
                    any = true;
                }

                front_slides = moving;
            }
        }

        if !any {
            return None;
        }

        let sliding = |x: usize, y: usize| slides.get(x, y).copied().unwrap_or(false);
        let mut cells = grid.clone();
        let mut arrived = Grid::new(width, height, &mut |_, _| false);

        for x in 1..width.saturating_sub(1) {
            for y in 1..height.saturating_sub(1) {
                if sliding(x, y + 1) {
                    let _ = cells.set(x, y, cell(x, y + 1));
                    let _ = arrived.set(x, y, true);
                } else if sliding(x, y) {
                    let _ = cells.set(x, y, Cell::Empty);
                }
            }
        }

        Some(Shift { cells, arrived })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::cell::Cell::{Empty, Fixed, Free, Player, Wall};

    /// A framed single column, listed from the top (leading) edge down.
    fn column(cells: &[Cell]) -> Grid<Cell> {
        let interior = Grid::new(1, cells.len(), &mut |_, y| cells[y]);

        Board::from_interior(&interior).cells().clone()
    }

    fn interior<T: Copy>(grid: &Grid<T>) -> Vec<T> {
        (1..grid.height() - 1).map(|y| *grid.get(1, y).unwrap()).collect()
    }

    #[test]
    fn test_player_drags_trailing_run() {
        let grid = column(&[Empty, Player, Free, Free, Empty, Free]);
        let shift = Ruleset::PlayerDrag.shift_front(&grid).unwrap();

        assert_eq!(interior(&shift.cells), vec![Player, Free, Free, Empty, Empty, Free]);
        assert_eq!(
            interior(&shift.arrived),
            vec![true, true, true, false, false, false]
        );
    }

    #[test]
    fn test_player_does_not_push() {
        let grid = column(&[Empty, Free, Player]);
        let shift = Ruleset::PlayerDrag.shift_front(&grid);

        assert!(shift.is_none());
    }

    #[test]
    fn test_lone_free_stays_under_player_drag() {
        let grid = column(&[Empty, Free, Empty, Fixed]);

        assert!(Ruleset::PlayerDrag.shift_front(&grid).is_none());
    }

    #[test]
    fn test_free_slide_moves_one_rank() {
        let grid = column(&[Empty, Empty, Free, Free, Wall, Free]);
        let shift = Ruleset::FreeSlide.shift_front(&grid).unwrap();

        assert_eq!(interior(&shift.cells), vec![Empty, Free, Free, Empty, Wall, Free]);
    }

    #[test]
    fn test_fixed_blocks_everything_behind() {
        let grid = column(&[Empty, Fixed, Free, Player]);

        assert!(Ruleset::FreeSlide.shift_front(&grid).is_none());
        assert!(Ruleset::PlayerDrag.shift_front(&grid).is_none());
    }

    #[test]
    fn test_ruleset_names() {
        let rules: Vec<Ruleset> = serde_json::from_str(r#"["player_drag", "free_slide"]"#).unwrap();

        assert_eq!(rules, vec![Ruleset::PlayerDrag, Ruleset::FreeSlide]);
    }
}

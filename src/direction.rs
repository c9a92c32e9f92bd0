use enum_map::{enum_map, Enum, EnumMap};

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Enum)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

/// Quarter turns that bring a direction's leading edge to the top of the board and back.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Turns {
    pub to_front: usize,
    pub back: usize,
}

impl Direction {
    pub const MOVES: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn invert(self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Unit step in `(x, y)` screen space, `y` growing downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn turn_table() -> EnumMap<Direction, Turns> {
        enum_map! {
            Direction::None => Turns { to_front: 0, back: 0 },
            Direction::Up => Turns { to_front: 0, back: 0 },
            Direction::Right => Turns { to_front: 1, back: 3 },
            Direction::Down => Turns { to_front: 2, back: 2 },
            Direction::Left => Turns { to_front: 3, back: 1 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_turns_cancel_out() {
        for (_, turns) in Direction::turn_table() {
            assert_eq!((turns.to_front + turns.back) % 4, 0);
        }
    }

    #[test]
    fn test_turns_bring_leading_edge_to_top() {
        // marks the cell on each edge of a 3x3 grid with the direction facing it
        let grid = Grid::new(3, 3, &mut |x, y| match (x, y) {
            (1, 0) => Direction::Up,
            (1, 2) => Direction::Down,
            (0, 1) => Direction::Left,
            (2, 1) => Direction::Right,
            _ => Direction::None,
        });
        let table = Direction::turn_table();

        for direction in Direction::MOVES {
            let rotated = grid.rotate(table[direction].to_front);

            assert_eq!(rotated.get(1, 0), Some(&direction));
        }
    }

    #[test]
    fn test_invert() {
        for direction in Direction::MOVES {
            assert_ne!(direction.invert(), direction);
            assert_eq!(direction.invert().invert(), direction);
        }
        assert_eq!(Direction::None.invert(), Direction::None);
    }
}

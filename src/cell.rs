use std::fmt;

use crate::error::LevelError;

/// Content of a single board position. The discriminant is the digit used in level data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty = 0,
    Wall = 1,
    Free = 2,
    Fixed = 3,
    Player = 4,
}

impl Cell {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Wall),
            2 => Some(Cell::Free),
            3 => Some(Cell::Fixed),
            4 => Some(Cell::Player),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Blob-like cells take part in the connectivity check.
    pub fn is_blob(self) -> bool {
        matches!(self, Cell::Free | Cell::Fixed | Cell::Player)
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '#',
            Cell::Free => 'o',
            Cell::Fixed => '@',
            Cell::Player => 'P',
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = LevelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Cell::from_code(code).ok_or(LevelError::UnknownCell { code })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

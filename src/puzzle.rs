use std::time::Instant;

use enum_map::EnumMap;
use log::{debug, info, trace};

use crate::animation::{AnimationConfig, AnimationQueue, MoveRecord};
use crate::board::Board;
use crate::cell::Cell;
use crate::direction::{Direction, Turns};
use crate::grid::Grid;
use crate::ruleset::Ruleset;

pub const DEFAULT_CELL_SIZE: u32 = 80;

/// Puzzle engine for one level.
///
/// Owns the board, the undo history and the animation queue. Every method that changes
/// the board takes `&mut self`, so moves, undos and resets can never overlap.
#[derive(Debug, Clone)]
pub struct Puzzle {
    initial: Grid<Cell>,
    board: Board,
    history: Vec<Board>,
    moves_since_init: usize,
    animation: AnimationQueue,
    ruleset: Ruleset,
    turns: EnumMap<Direction, Turns>,
    cell_size: u32,
}

impl Puzzle {
    pub fn new(level: Grid<Cell>) -> Self {
        Self::with_ruleset(level, Ruleset::default(), AnimationConfig::default())
    }

    pub fn with_ruleset(level: Grid<Cell>, ruleset: Ruleset, animation: AnimationConfig) -> Self {
        let board = Board::from_interior(&level);
        let animation = AnimationQueue::new(MoveRecord::still(board.clone()), animation, Instant::now());

        trace!("new puzzle\n{}", board);

        Self {
            initial: level,
            board,
            history: Vec::new(),
            moves_since_init: 0,
            animation,
            ruleset,
            turns: Direction::turn_table(),
            cell_size: DEFAULT_CELL_SIZE,
        }
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn initial(&self) -> &Grid<Cell> {
        &self.initial
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    pub fn width(&self) -> usize {
        self.initial.width()
    }

    pub fn height(&self) -> usize {
        self.initial.height()
    }

    /// Layout hint for renderers, in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn moves_since_init(&self) -> usize {
        self.moves_since_init
    }

    pub fn animation(&self) -> &AnimationQueue {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut AnimationQueue {
        &mut self.animation
    }

    /// Restores the starting layout. The replaced board goes onto the history, so a
    /// reset can be undone, and the animation queue restarts from the fresh board.
    pub fn init(&mut self) {
        let board = Board::from_interior(&self.initial);
        let previous = std::mem::replace(&mut self.board, board);

        self.history.push(previous);
        self.moves_since_init = 0;
        self.animation.reset(MoveRecord::still(self.board.clone()), Instant::now());

        info!("puzzle reset");
        trace!("\n{}", self.board);
    }

    /// Slides blobs one rank toward `direction`. Returns false, leaving the board and
    /// history untouched, when no cell can move.
    pub fn move_to(&mut self, direction: Direction) -> bool {
        debug!("move {:?}", direction);

        if direction == Direction::None {
            debug!("no direction given");
            return false;
        }

        let turns = self.turns[direction];
        let front = self.board.cells().rotate(turns.to_front);

        let shift = match self.ruleset.shift_front(&front) {
            Some(shift) => shift,
            None => {
                debug!("can't move {:?}", direction);
                return false;
            }
        };

        let cells = shift.cells.rotate(turns.back);
        let arrivals = shift
            .arrived
            .rotate(turns.back)
            .map(|&arrived| if arrived { direction } else { Direction::None });

        let previous = std::mem::replace(&mut self.board, Board::from_framed(cells));

        self.history.push(previous);
        self.moves_since_init += 1;
        self.animation
            .push(MoveRecord::moved(self.board.clone(), arrivals, direction));

        trace!("\n{}", self.board);

        true
    }

    /// Restores the board from before the last move or reset. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        debug!("undo");

        let previous = match self.history.pop() {
            Some(board) => board,
            None => {
                debug!("can't undo, history is empty");
                return false;
            }
        };

        self.board = previous;
        self.moves_since_init = self.moves_since_init.saturating_sub(1);
        self.animation.push(MoveRecord::still(self.board.clone()));

        trace!("\n{}", self.board);

        true
    }

    /// Whether all blob-like cells of the current board form a single group.
    pub fn check(&self) -> bool {
        self.board.is_solved()
    }
}

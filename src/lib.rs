//! Sliding-blob connection puzzle.
//!
//! Blobs sit on a grid framed by walls. Every move shifts them one rank in a direction
//! and the level is solved once all blobs form one 4-connected group. [`Puzzle`] owns
//! the board, the undo history and the animation records renderers play back.

pub mod animation;
pub mod board;
pub mod cell;
pub mod direction;
pub mod easing;
pub mod error;
pub mod grid;
pub mod input;
pub mod level;
pub mod progress;
pub mod puzzle;
pub mod ruleset;
pub mod union_find;

pub use animation::{AnimationConfig, AnimationQueue, MoveRecord};
pub use board::Board;
pub use cell::Cell;
pub use direction::Direction;
pub use error::{AppError, LevelError};
pub use grid::{Grid, Size};
pub use input::Command;
pub use level::{Level, LevelPack};
pub use progress::Progress;
pub use puzzle::Puzzle;
pub use ruleset::Ruleset;

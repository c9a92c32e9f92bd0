use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::board::Board;
use crate::direction::Direction;
use crate::easing::elastic;
use crate::grid::Grid;

/// Timing used to play back move records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Duration of a move across a single-rank board.
    pub base: Duration,
    /// Extra duration for every further rank along the move axis.
    pub per_rank: Duration,
    /// Start delay of a cell for each rank it sits away from the leading edge.
    pub rank_delay: Duration,
    pub elastic_period_ms: f64,
    pub elastic_decay: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(200),
            per_rank: Duration::from_millis(50),
            rank_delay: Duration::from_millis(20),
            elastic_period_ms: crate::easing::ELASTIC_PERIOD_MS,
            elastic_decay: crate::easing::ELASTIC_DECAY,
        }
    }
}

/// Snapshot produced by every mutating puzzle operation.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    board: Board,
    arrivals: Grid<Direction>,
    delays: Grid<u32>,
    direction: Direction,
}

impl MoveRecord {
    /// A record in which nothing moves, used for init and undo.
    pub fn still(board: Board) -> Self {
        let arrivals = board.cells().map(|_| Direction::None);
        let delays = board.cells().map(|_| 0);

        Self {
            board,
            arrivals,
            delays,
            direction: Direction::None,
        }
    }

    pub fn moved(board: Board, arrivals: Grid<Direction>, direction: Direction) -> Self {
        let width = board.interior_width();
        let height = board.interior_height();

        let delays = Grid::new(board.width(), board.height(), &mut |x, y| {
            if x == 0 || y == 0 || x > width || y > height {
                return 0;
            }

            let rank = match direction {
                Direction::None => 0,
                Direction::Left => x - 1,
                Direction::Right => width - x,
                Direction::Up => y - 1,
                Direction::Down => height - y,
            };

            rank as u32
        });

        Self {
            board,
            arrivals,
            delays,
            direction,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn arrivals(&self) -> &Grid<Direction> {
        &self.arrivals
    }

    pub fn arrival(&self, x: usize, y: usize) -> Direction {
        self.arrivals.get(x, y).copied().unwrap_or_default()
    }

    pub fn delay(&self, x: usize, y: usize) -> u32 {
        self.delays.get(x, y).copied().unwrap_or(0)
    }

    pub fn duration(&self, config: &AnimationConfig) -> Duration {
        let ranks = if self.direction.is_horizontal() {
            self.board.interior_width()
        } else if self.direction.is_vertical() {
            self.board.interior_height()
        } else {
            return Duration::ZERO;
        };

        config.base + config.per_rank * ranks.saturating_sub(1) as u32
    }

    /// Displacement of the content of `(x, y)` from its resting place, in cells,
    /// `elapsed` after the record started playing.
    pub fn offset(&self, x: usize, y: usize, elapsed: Duration, config: &AnimationConfig) -> (f64, f64) {
        let (dx, dy) = self.arrival(x, y).offset();

        if (dx, dy) == (0, 0) {
            return (0.0, 0.0);
        }

        let delay = config.rank_delay * self.delay(x, y);
        let ms = elapsed.as_secs_f64() * 1000.0 - delay.as_secs_f64() * 1000.0;
        let ease = |start: f64| elastic(start, 0.0, ms, config.elastic_period_ms, config.elastic_decay);

        // content arriving while moving right started one cell to the left
        (ease(-dx as f64), ease(-dy as f64))
    }
}

/// Records waiting to be played, front first. Never empty.
#[derive(Debug, Clone)]
pub struct AnimationQueue {
    records: VecDeque<MoveRecord>,
    started_at: Instant,
    config: AnimationConfig,
}

impl AnimationQueue {
    pub fn new(first: MoveRecord, config: AnimationConfig, now: Instant) -> Self {
        Self {
            records: VecDeque::from([first]),
            started_at: now,
            config,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Record currently playing.
    pub fn front(&self) -> Option<&MoveRecord> {
        self.records.front()
    }

    pub fn back(&self) -> Option<&MoveRecord> {
        self.records.back()
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push_back(record);
    }

    pub(crate) fn reset(&mut self, record: MoveRecord, now: Instant) {
        self.records.clear();
        self.records.push_back(record);
        self.started_at = now;
    }

    /// Drops every finished record while a later one is waiting.
    ///
    /// Each dropped record hands its end time to the next one as start time, so a late
    /// frame catches up on several records at once. Returns how many were dropped.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut dropped = 0;

        while self.records.len() > 1 {
            let duration = match self.records.front() {
                Some(record) => record.duration(&self.config),
                None => break,
            };

            if self.started_at + duration > now {
                break;
            }

            self.records.pop_front();
            self.started_at += duration;
            dropped += 1;
        }

        dropped
    }

    /// Discards everything but the latest record and restarts it at `now`.
    pub fn skip_to_latest(&mut self, now: Instant) -> usize {
        let dropped = self.records.len().saturating_sub(1);

        self.records.drain(..dropped);
        self.started_at = now;

        dropped
    }
}

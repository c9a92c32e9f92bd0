use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::cell::Cell;
use crate::error::LevelError;
use crate::grid::{make_grid, Grid, Size};
use crate::puzzle::Puzzle;
use crate::ruleset::Ruleset;

/// Parses the text level format: one row of digits per line.
///
/// Blank lines and surrounding whitespace are ignored. Short rows are padded with walls
/// up to the longest row.
pub fn parse_board(text: &str) -> Result<Grid<Cell>, LevelError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let row = line
            .chars()
            .map(|symbol| {
                symbol
                    .to_digit(10)
                    .and_then(|code| Cell::from_code(code as u8))
                    .ok_or(LevelError::InvalidSymbol {
                        symbol,
                        line: line_index + 1,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(row);
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    if width == 0 {
        return Err(LevelError::Empty);
    }

    debug!("parsed {}x{} board", width, rows.len());

    Ok(Grid::new(width, rows.len(), &mut |x, y| {
        rows[y].get(x).copied().unwrap_or(Cell::Wall)
    }))
}

/// Builds a board from column vectors of cell codes, `columns[x][y]`.
pub fn board_from_columns(columns: &[Vec<u8>]) -> Result<Grid<Cell>, LevelError> {
    let height = columns.first().map(Vec::len).unwrap_or(0);

    if height == 0 {
        return Err(LevelError::Empty);
    }

    let mut cells = Vec::with_capacity(columns.len());

    for (column, codes) in columns.iter().enumerate() {
        if codes.len() != height {
            return Err(LevelError::Ragged {
                column,
                expected: height,
                found: codes.len(),
            });
        }

        let column = codes
            .iter()
            .map(|&code| Cell::try_from(code))
            .collect::<Result<Vec<_>, _>>()?;

        cells.push(column);
    }

    Ok(Grid::new(cells.len(), height, &mut |x, y| cells[x][y]))
}

/// Serialized form of a level inside a pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Rows of the text level format.
    pub board: Vec<String>,
    #[serde(default)]
    pub ruleset: Ruleset,
}

impl LevelConfig {
    fn new(title: &str, description: &str, board: &[&str], ruleset: Ruleset) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            board: board.iter().map(|row| row.to_string()).collect(),
            ruleset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub title: String,
    pub description: String,
    pub board: Grid<Cell>,
    pub ruleset: Ruleset,
}

impl Level {
    pub fn from_config(config: &LevelConfig) -> Result<Self, LevelError> {
        Ok(Self {
            title: config.title.clone(),
            description: config.description.clone(),
            board: parse_board(&config.board.join("\n"))?,
            ruleset: config.ruleset,
        })
    }

    /// A board of the given size where every cell is drawn uniformly from empty, wall,
    /// free and fixed. The same seed always yields the same board.
    pub fn random(size: Size, seed: u64) -> Self {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let codes = make_grid(size.area(), |_| rng.gen_range(0..4u8));

        let board = Grid::new(size.width, size.height, &mut |x, y| {
            Cell::from_code(codes[x + y * size.width]).unwrap_or(Cell::Empty)
        });

        Self {
            title: format!("random {}x{} #{}", size.width, size.height, seed),
            description: String::new(),
            board,
            ruleset: Ruleset::FreeSlide,
        }
    }

    pub fn puzzle(&self) -> Puzzle {
        self.puzzle_with(AnimationConfig::default())
    }

    pub fn puzzle_with(&self, animation: AnimationConfig) -> Puzzle {
        Puzzle::with_ruleset(self.board.clone(), self.ruleset, animation)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPack {
    pub levels: Vec<LevelConfig>,
}

impl LevelPack {
    /// Levels shipped with the game.
    pub fn builtin() -> Self {
        Self {
            levels: vec![
                LevelConfig::new("Title", "Slide the blob onto its partner.", &["203"], Ruleset::FreeSlide),
                LevelConfig::new(
                    "01. AAA",
                    "Gather every blob into one.",
                    &["1202", "0010", "2030", "3100"],
                    Ruleset::FreeSlide,
                ),
                LevelConfig::new("02. BBB", "Walls do not move.", &["1203"], Ruleset::FreeSlide),
                LevelConfig::new(
                    "03. Drag",
                    "Only the player moves, pulling its tail along.",
                    &["3004220"],
                    Ruleset::PlayerDrag,
                ),
            ],
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LevelError> {
        let file = File::open(path.as_ref())?;
        let pack = Self::from_reader(BufReader::new(file))?;

        info!("loaded {} levels from {}", pack.len(), path.as_ref().display());

        Ok(pack)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LevelError> {
        let pack: Self = serde_json::from_reader(reader)?;

        // fail on broken boards now rather than when the level is opened
        for config in &pack.levels {
            parse_board(&config.board.join("\n"))?;
        }

        Ok(pack)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> Result<Level, LevelError> {
        let config = self.levels.get(index).ok_or(LevelError::UnknownLevel {
            index,
            count: self.levels.len(),
        })?;

        Level::from_config(config)
    }
}

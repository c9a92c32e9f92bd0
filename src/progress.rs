use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which levels have been solved, by level index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    solved: Vec<bool>,
}

impl Progress {
    pub fn new(levels: usize) -> Self {
        Self {
            solved: vec![false; levels],
        }
    }

    /// Reads progress from a JSON array of booleans. A missing file means nothing is solved.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let file = match File::open(path.as_ref()) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no progress at {}", path.as_ref().display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);

        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        info!("saved progress to {}", path.as_ref().display());

        Ok(())
    }

    pub fn is_solved(&self, index: usize) -> bool {
        self.solved.get(index).copied().unwrap_or(false)
    }

    pub fn mark_solved(&mut self, index: usize) {
        if self.solved.len() <= index {
            self.solved.resize(index + 1, false);
        }

        self.solved[index] = true;
    }

    pub fn solved_count(&self) -> usize {
        self.solved.iter().filter(|&&solved| solved).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.solved
    }
}

use crate::cli::{AppConfig, LevelSource};
use blob_slide::error::AppError;
use blob_slide::input::Command;
use blob_slide::level::Level;
use blob_slide::progress::Progress;
use blob_slide::puzzle::Puzzle;
use log::{info, warn};
use std::io::{self, BufRead};
use std::time::Instant;

pub struct PuzzleApp {
    config: AppConfig,
}

impl PuzzleApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Plays the configured level. Returns whether it ended up solved.
    pub fn run(&self) -> Result<bool, AppError> {
        let (index, level) = self.load_level()?;

        info!("Playing {} ({:?})", level.title.replace('\n', " "), level.ruleset);
        if !level.description.is_empty() {
            println!("{}", level.description);
        }

        let mut puzzle = level.puzzle();
        println!("{}", puzzle.board());

        let solved = match &self.config.commands {
            Some(commands) => self.play(&mut puzzle, commands.iter().copied()),
            None => {
                let stdin = io::stdin();
                let commands = stdin
                    .lock()
                    .lines()
                    .map_while(Result::ok)
                    .filter(|line| !line.trim().is_empty())
                    .filter_map(|line| match line.parse::<Command>() {
                        Ok(command) => Some(command),
                        Err(e) => {
                            warn!("{}", e);
                            None
                        }
                    });

                self.play(&mut puzzle, commands)
            }
        };

        if solved {
            info!("Solved in {} moves", puzzle.moves_since_init());
            println!("solved");

            if let (Some(path), Some(index)) = (&self.config.progress_path, index) {
                let mut progress = Progress::load(path)?;
                progress.mark_solved(index);
                progress.save(path)?;
            }
        } else {
            println!("not solved");
        }

        Ok(solved)
    }

    fn load_level(&self) -> Result<(Option<usize>, Level), AppError> {
        match &self.config.source {
            LevelSource::Pack { pack, index } => Ok((Some(*index), pack.level(*index)?)),
            LevelSource::Random { size, seed } => {
                info!("Using seed: {}", seed);
                Ok((None, Level::random(*size, *seed)))
            }
        }
    }

    fn play<I: Iterator<Item = Command>>(&self, puzzle: &mut Puzzle, commands: I) -> bool {
        if puzzle.check() {
            return true;
        }

        for command in commands {
            let changed = match command {
                Command::Move(direction) => puzzle.move_to(direction),
                Command::Undo => puzzle.undo(),
                Command::Reset => {
                    puzzle.init();
                    true
                }
                Command::Quit => break,
            };

            // a terminal has nothing to animate, always show the latest record
            puzzle.animation_mut().skip_to_latest(Instant::now());

            if changed {
                if let Some(record) = puzzle.animation().front() {
                    println!("{}", record.board());
                }
            } else {
                println!("(no change)");
            }

            if puzzle.check() {
                return true;
            }
        }

        puzzle.check()
    }
}

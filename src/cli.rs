use blob_slide::error::{AppError, LevelError};
use blob_slide::grid::Size;
use blob_slide::input::{Command, Script};
use blob_slide::level::LevelPack;
use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

fn load_pack(s: &str) -> Result<LevelPack, LevelError> {
    LevelPack::load(PathBuf::from(s))
}

#[derive(Debug)]
pub enum LevelSource {
    Pack { pack: LevelPack, index: usize },
    Random { size: Size, seed: u64 },
}

#[derive(Debug)]
pub struct AppConfig {
    pub source: LevelSource,
    /// Scripted commands; `None` reads commands from stdin.
    pub commands: Option<Vec<Command>>,
    pub progress_path: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "blob-slide",
    about = "Slide the blobs until they all touch"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(parse(try_from_str = load_pack), short, long, help = "Level pack (JSON), defaults to the built-in levels")]
    pack: Option<LevelPack>,

    #[structopt(short, long, default_value = "0", help = "Index of the level to play")]
    level: usize,

    #[structopt(
        parse(try_from_str),
        long,
        conflicts_with = "pack",
        help = "Play a random board of the given size, e.g. 6x6"
    )]
    random: Option<Size>,

    #[structopt(long, requires = "random", help = "Seed for the random board")]
    seed: Option<u64>,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        help = "Moves to play instead of reading stdin, e.g. \"LLdu z\""
    )]
    moves: Option<Script>,

    #[structopt(parse(from_os_str), long, help = "File recording solved levels")]
    progress: Option<PathBuf>,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, AppError> {
        let source = match self.random {
            Some(size) => {
                if size.area() == 0 {
                    return Err(AppError::invalid_argument("random board must not be empty"));
                }

                LevelSource::Random {
                    size,
                    seed: self.seed.unwrap_or_else(rand::random),
                }
            }
            None => LevelSource::Pack {
                pack: self.pack.unwrap_or_else(LevelPack::builtin),
                index: self.level,
            },
        };

        Ok(AppConfig {
            source,
            commands: self.moves.map(|script| script.0),
            progress_path: self.progress,
        })
    }
}

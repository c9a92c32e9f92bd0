use core::str::FromStr;

use crate::direction::Direction;

/// What a single key press asks the puzzle to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
    Reset,
    Quit,
}

impl Command {
    /// Decodes browser style key codes (`ArrowLeft`, `KeyZ`, ...) and a few short aliases.
    pub fn from_key_code(code: &str) -> Option<Self> {
        let command = match code {
            "ArrowLeft" | "left" | "h" => Command::Move(Direction::Left),
            "ArrowRight" | "right" | "l" => Command::Move(Direction::Right),
            "ArrowUp" | "up" | "k" => Command::Move(Direction::Up),
            "ArrowDown" | "down" | "j" => Command::Move(Direction::Down),
            "KeyZ" | "undo" | "z" => Command::Undo,
            "KeyR" | "reset" | "r" => Command::Reset,
            "Escape" | "quit" | "q" => Command::Quit,
            _ => return None,
        };

        Some(command)
    }

    /// Parses a compact move script such as `"LLdu z"`.
    ///
    /// `L R U D` move (any case), `Z` undoes, `!` resets; whitespace is skipped.
    pub fn parse_script(script: &str) -> Result<Vec<Self>, String> {
        script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'L' => Ok(Command::Move(Direction::Left)),
                'R' => Ok(Command::Move(Direction::Right)),
                'U' => Ok(Command::Move(Direction::Up)),
                'D' => Ok(Command::Move(Direction::Down)),
                'Z' => Ok(Command::Undo),
                '!' => Ok(Command::Reset),
                _ => Err(format!("invalid move: {}", c)),
            })
            .collect()
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::from_key_code(s.trim()).ok_or(format!("unknown command: {}", s.trim()))
    }
}

/// A parsed move script, usable directly as a command line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script(pub Vec<Command>);

impl FromStr for Script {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse_script(s).map(Script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Command::from_key_code("ArrowLeft"), Some(Command::Move(Direction::Left)));
        assert_eq!(Command::from_key_code("ArrowDown"), Some(Command::Move(Direction::Down)));
        assert_eq!(Command::from_key_code("KeyZ"), Some(Command::Undo));
        assert_eq!(Command::from_key_code("KeyR"), Some(Command::Reset));
        assert_eq!(Command::from_key_code("KeyQ"), None);
    }

    #[test]
    fn test_from_str_trims() {
        assert_eq!(" up \n".parse::<Command>(), Ok(Command::Move(Direction::Up)));
        assert!("sideways".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_script() {
        let script: Script = "Ll u Z!".parse().unwrap();

        assert_eq!(
            script.0,
            vec![
                Command::Move(Direction::Left),
                Command::Move(Direction::Left),
                Command::Move(Direction::Up),
                Command::Undo,
                Command::Reset,
            ]
        );
        assert!(Command::parse_script("LX").is_err());
    }
}

use std::io::Write;

use blob_slide::{
    cell::Cell,
    error::LevelError,
    grid::Size,
    level::{board_from_columns, parse_board, Level, LevelPack},
    progress::Progress,
    ruleset::Ruleset,
};

#[test]
fn test_parse_board_transposes_rows() {
    let board = parse_board("120\n034\n").unwrap();

    assert_eq!((board.width(), board.height()), (3, 2));
    assert_eq!(board.get(0, 0), Some(&Cell::Wall));
    assert_eq!(board.get(1, 0), Some(&Cell::Free));
    assert_eq!(board.get(1, 1), Some(&Cell::Fixed));
    assert_eq!(board.get(2, 1), Some(&Cell::Player));
}

#[test]
fn test_parse_board_pads_short_rows_with_walls() {
    let board = parse_board("  22\n\n2\n").unwrap();

    assert_eq!((board.width(), board.height()), (2, 2));
    assert_eq!(board.get(1, 1), Some(&Cell::Wall));
}

#[test]
fn test_parse_board_rejects_bad_input() {
    assert!(matches!(parse_board(""), Err(LevelError::Empty)));
    assert!(matches!(parse_board("\n \n"), Err(LevelError::Empty)));
    assert!(matches!(
        parse_board("00\n0x"),
        Err(LevelError::InvalidSymbol { symbol: 'x', line: 2 })
    ));
    assert!(matches!(
        parse_board("05"),
        Err(LevelError::InvalidSymbol { symbol: '5', line: 1 })
    ));
}

#[test]
fn test_board_from_columns() {
    let board = board_from_columns(&[vec![1, 0, 2, 3], vec![2, 0, 0, 1]]).unwrap();

    assert_eq!((board.width(), board.height()), (2, 4));
    assert_eq!(board.get(0, 3), Some(&Cell::Fixed));
    assert_eq!(board.get(1, 0), Some(&Cell::Free));
}

#[test]
fn test_board_from_columns_validates_shape() {
    assert!(matches!(board_from_columns(&[]), Err(LevelError::Empty)));
    assert!(matches!(
        board_from_columns(&[vec![0, 0], vec![0]]),
        Err(LevelError::Ragged { column: 1, expected: 2, found: 1 })
    ));
    assert!(matches!(
        board_from_columns(&[vec![0, 9]]),
        Err(LevelError::UnknownCell { code: 9 })
    ));
}

#[test]
fn test_builtin_levels_parse() {
    let pack = LevelPack::builtin();

    assert!(!pack.is_empty());
    for index in 0..pack.len() {
        let level = pack.level(index).unwrap();
        assert!(!level.puzzle().check(), "{} starts solved", level.title);
    }
}

#[test]
fn test_builtin_title_level_is_solvable() {
    let mut puzzle = LevelPack::builtin().level(0).unwrap().puzzle();

    assert!(puzzle.move_to(blob_slide::Direction::Right));
    assert!(puzzle.check());
}

#[test]
fn test_unknown_level() {
    let pack = LevelPack::builtin();
    let count = pack.len();

    assert!(matches!(
        pack.level(count),
        Err(LevelError::UnknownLevel { index, count: c }) if index == count && c == count
    ));
}

#[test]
fn test_load_pack_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"levels": [
            {{"title": "one", "board": ["2003"]}},
            {{"title": "two", "description": "drag", "board": ["40", "23"], "ruleset": "player_drag"}},
            {{"title": "three", "board": ["203"], "ruleset": "free_slide"}}
        ]}}"#
    )
    .unwrap();

    let pack = LevelPack::load(file.path()).unwrap();
    assert_eq!(pack.len(), 3);

    let one = pack.level(0).unwrap();
    assert_eq!(one.ruleset, Ruleset::PlayerDrag);
    assert_eq!(one.description, "");

    let two = pack.level(1).unwrap();
    assert_eq!(two.description, "drag");
    assert_eq!((two.board.width(), two.board.height()), (2, 2));

    assert_eq!(pack.level(2).unwrap().ruleset, Ruleset::FreeSlide);
}

#[test]
fn test_load_pack_rejects_broken_board() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"levels": [{{"title": "bad", "board": ["2a"]}}]}}"#).unwrap();

    assert!(matches!(
        LevelPack::load(file.path()),
        Err(LevelError::InvalidSymbol { .. })
    ));
}

#[test]
fn test_load_pack_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        LevelPack::load(dir.path().join("missing.json")),
        Err(LevelError::Io(_))
    ));
}

#[test]
fn test_random_level_is_seeded() {
    let size = Size::new(6, 6);
    let a = Level::random(size, 42);
    let b = Level::random(size, 42);

    assert_eq!(a.board, b.board);
    assert_eq!((a.board.width(), a.board.height()), (6, 6));
    assert!(a.board.iter().all(|(_, _, cell)| *cell != Cell::Player));
    assert_eq!(a.ruleset, Ruleset::FreeSlide);
}

#[test]
fn test_progress_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");

    let mut progress = Progress::load(&path).unwrap();
    assert_eq!(progress.solved_count(), 0);

    progress.mark_solved(2);
    progress.save(&path).unwrap();

    let loaded = Progress::load(&path).unwrap();
    assert_eq!(loaded.as_slice(), &[false, false, true]);
    assert!(loaded.is_solved(2));
    assert!(!loaded.is_solved(0));
    assert!(!loaded.is_solved(10));

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "[false,false,true]");
}

#[test]
fn test_progress_new_sizes_array() {
    let mut progress = Progress::new(3);

    assert_eq!(progress.as_slice(), &[false; 3]);
    progress.mark_solved(0);
    progress.mark_solved(0);
    assert_eq!(progress.solved_count(), 1);
}

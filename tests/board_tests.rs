use std::sync::Arc;

use broadside::{
    column_label, AttackResult, BoardError, CellState, Coord, FixedPlacement, GameBoard,
    GameStatus, MessageLog, Orientation, Placement, RandomPlacement, ShipType, DEFAULT_COLUMNS,
    DEFAULT_ROWS, MAX_COLUMNS, NUM_SHIPS,
};

fn destroyer_board() -> GameBoard {
    let fleet = [ShipType::new("Destroyer", 2)];
    let policy = FixedPlacement::new(vec![Placement::new(0, 0, Orientation::Horizontal)]);
    GameBoard::with_fleet(DEFAULT_ROWS, DEFAULT_COLUMNS, &fleet, Box::new(policy)).unwrap()
}

#[test]
fn test_input_validation() {
    let board = GameBoard::new(7, 7, Box::new(RandomPlacement::from_seed(1))).unwrap();
    assert!(board.validate_input("A1"));
    assert_eq!(board.parse_input("A1"), Some(Coord::new(0, 0)));
    assert_eq!(board.parse_input("G7"), Some(Coord::new(6, 6)));
    assert!(!board.validate_input("H1"));
    assert!(!board.validate_input("A8"));
    assert!(!board.validate_input("A0"));
    assert!(!board.validate_input("1A"));
    assert!(!board.validate_input(""));
    assert!(!board.validate_input("A"));
    assert!(!board.validate_input("A100"));
    assert!(!board.validate_input("A+1"));
    assert!(!board.validate_input("A 1"));
    assert_eq!(board.parse_input("a1"), Some(Coord::new(0, 0)));
    // validation never needs a grid
    assert!(!board.is_initialized());
}

#[test]
fn test_two_digit_rows_on_larger_board() {
    let board = GameBoard::new(12, 12, Box::new(RandomPlacement::from_seed(1))).unwrap();
    assert_eq!(board.parse_input("L12"), Some(Coord::new(11, 11)));
    assert_eq!(board.parse_input("B10"), Some(Coord::new(9, 1)));
    assert!(!board.validate_input("B13"));
}

#[test]
fn test_sink_single_ship_end_to_end() {
    let mut board = destroyer_board();
    let log = Arc::new(MessageLog::new());
    board.initialize();
    board.register(log.clone());
    board.place_ships().unwrap();
    assert_eq!(board.status(), GameStatus::InProgress);

    assert_eq!(board.attack_input("A1").unwrap(), AttackResult::Hit);
    assert_eq!(board.fleet()[0].remaining(), 1);
    assert!(!board.fleet()[0].is_sunk());
    assert_eq!(board.ships_sunk(), 0);
    assert!(log.messages().is_empty());
    assert!(!board.is_game_over());

    assert_eq!(board.attack_input("B1").unwrap(), AttackResult::Sink("Destroyer"));
    assert_eq!(board.fleet()[0].remaining(), 0);
    assert!(board.fleet()[0].is_sunk());
    assert_eq!(board.ships_sunk(), 1);
    assert_eq!(log.messages(), vec!["You sank the Destroyer!".to_string()]);
    assert!(board.is_game_over());
    assert_eq!(board.status(), GameStatus::Over);
}

#[test]
fn test_repeat_attack_changes_nothing() {
    let mut board = destroyer_board();
    board.initialize();
    board.place_ships().unwrap();

    assert_eq!(board.attack(Coord::new(0, 0)).unwrap(), AttackResult::Hit);
    assert_eq!(board.attack(Coord::new(0, 0)).unwrap(), AttackResult::Repeat);
    assert!(!AttackResult::Repeat.is_hit());
    assert_eq!(board.fleet()[0].remaining(), 1);
    assert_eq!(board.attack_count(), 1);

    assert_eq!(board.attack(Coord::new(3, 3)).unwrap(), AttackResult::Miss);
    assert_eq!(board.attack(Coord::new(3, 3)).unwrap(), AttackResult::Repeat);
    assert_eq!(board.attack_count(), 2);
}

#[test]
fn test_miss_marks_cell() {
    let mut board = destroyer_board();
    board.initialize();
    board.place_ships().unwrap();
    let at = Coord::new(4, 2);
    assert_eq!(board.cell(at).unwrap().state(), CellState::Unknown);
    assert_eq!(board.attack(at).unwrap(), AttackResult::Miss);
    assert_eq!(board.cell(at).unwrap().state(), CellState::HitEmpty);
    assert_eq!(board.cell(Coord::new(0, 1)).unwrap().state(), CellState::Unknown);
}

#[test]
fn test_render_markers() {
    let mut board = destroyer_board();
    board.initialize();
    board.place_ships().unwrap();
    board.attack_input("A1").unwrap();
    board.attack_input("C1").unwrap();

    let expected = "    A B C D E F G\n 1  X - O - - - -\n 2  - - - - - - -\n 3  - - - - - - -\n 4  - - - - - - -\n 5  - - - - - - -\n 6  - - - - - - -\n 7  - - - - - - -\n";
    assert_eq!(board.render(), expected);
    assert_eq!(board.to_string(), expected);
}

#[test]
fn test_render_hides_unhit_ships() {
    let mut board = destroyer_board();
    board.initialize();
    board.place_ships().unwrap();
    assert!(board.render().lines().skip(1).all(|line| !line.contains('X')));
}

#[test]
fn test_operations_require_initialize() {
    let mut board = destroyer_board();
    assert_eq!(board.status(), GameStatus::Setup);
    assert_eq!(board.place_ships().unwrap_err(), BoardError::NotInitialized);
    assert_eq!(
        board.attack(Coord::new(0, 0)).unwrap_err(),
        BoardError::NotInitialized
    );
}

#[test]
fn test_attack_before_placement_rejected() {
    let mut board = destroyer_board();
    board.initialize();
    assert_eq!(board.status(), GameStatus::Setup);
    assert_eq!(
        board.attack(Coord::new(0, 0)).unwrap_err(),
        BoardError::ShipsNotPlaced
    );
    assert_eq!(board.attack_input("B1").unwrap_err(), BoardError::ShipsNotPlaced);
    // the rejected attacks left no trace on the grid
    assert_eq!(board.attack_count(), 0);
    assert_eq!(board.cell(Coord::new(0, 0)).unwrap().state(), CellState::Unknown);

    board.place_ships().unwrap();
    assert_eq!(board.attack_input("B1").unwrap(), AttackResult::Hit);
    assert_eq!(board.attack_input("A1").unwrap(), AttackResult::Sink("Destroyer"));
    assert!(board.is_game_over());
    assert_eq!(board.attack_count(), 2);
}

#[test]
fn test_column_limit() {
    assert_eq!(MAX_COLUMNS, 26);
    assert_eq!(column_label(0), 'A');
    assert_eq!(column_label(MAX_COLUMNS - 1), 'Z');

    let mut widest = GameBoard::new(7, 26, Box::new(RandomPlacement::from_seed(1))).unwrap();
    assert_eq!(widest.parse_input("Z7"), Some(Coord::new(6, 25)));
    widest.initialize();
    let rendered = widest.render();
    let header = rendered.lines().next().unwrap();
    assert!(header.ends_with(" Y Z"));
    assert!(!header.contains('?'));

    let err = GameBoard::new(7, 27, Box::new(RandomPlacement::from_seed(1))).unwrap_err();
    assert_eq!(err, BoardError::TooManyColumns { rows: 7, columns: 27 });

    let fleet = [ShipType::new("Destroyer", 2)];
    let err = GameBoard::with_fleet(7, 27, &fleet, Box::new(FixedPlacement::default())).unwrap_err();
    assert_eq!(err, BoardError::TooManyColumns { rows: 7, columns: 27 });
}

#[test]
fn test_attack_input_rejects_bad_text() {
    let mut board = destroyer_board();
    board.initialize();
    board.place_ships().unwrap();
    assert_eq!(board.attack_input("Z9").unwrap_err(), BoardError::InvalidCoordinate);
    assert_eq!(
        board.attack(Coord::new(7, 0)).unwrap_err(),
        BoardError::InvalidCoordinate
    );
    assert_eq!(board.attack_count(), 0);
}

#[test]
fn test_place_twice_rejected() {
    let mut board = GameBoard::new(7, 7, Box::new(RandomPlacement::from_seed(3))).unwrap();
    board.initialize();
    board.place_ships().unwrap();
    assert_eq!(board.place_ships().unwrap_err(), BoardError::ShipsAlreadyPlaced);
}

#[test]
fn test_reinitialize_keeps_fleet() {
    let mut board = destroyer_board();
    board.initialize();
    board.place_ships().unwrap();
    board.attack_input("A1").unwrap();
    board.attack_input("B1").unwrap();
    assert_eq!(board.ships_sunk(), 1);

    board.initialize();
    assert_eq!(board.status(), GameStatus::Setup);
    assert_eq!(board.cell(Coord::new(0, 0)).unwrap().state(), CellState::Unknown);
    // the fleet and sunk count carry over to the new grid
    assert_eq!(board.ships_sunk(), 1);
    assert!(board.fleet()[0].is_sunk());
    board.place_ships().unwrap();
    assert!(board.is_game_over());
}

#[test]
fn test_fixed_placement_errors() {
    let fleet = [ShipType::new("Cruiser", 3), ShipType::new("Destroyer", 2)];

    let overlap = FixedPlacement::new(vec![
        Placement::new(1, 1, Orientation::Horizontal),
        Placement::new(0, 2, Orientation::Vertical),
    ]);
    let mut board = GameBoard::with_fleet(7, 7, &fleet, Box::new(overlap)).unwrap();
    board.initialize();
    assert_eq!(
        board.place_ships().unwrap_err(),
        BoardError::ShipOverlaps { row: 1, col: 2 }
    );
    // nothing of the failed layout is left behind
    assert!(board
        .grid()
        .unwrap()
        .iter()
        .all(|(_, cell)| cell.occupant().is_none()));

    let off_edge = FixedPlacement::new(vec![
        Placement::new(0, 5, Orientation::Horizontal),
        Placement::new(3, 3, Orientation::Vertical),
    ]);
    let mut board = GameBoard::with_fleet(7, 7, &fleet, Box::new(off_edge)).unwrap();
    board.initialize();
    assert_eq!(
        board.place_ships().unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 5 }
    );

    let short = FixedPlacement::new(vec![Placement::new(0, 0, Orientation::Vertical)]);
    let mut board = GameBoard::with_fleet(7, 7, &fleet, Box::new(short)).unwrap();
    board.initialize();
    assert_eq!(
        board.place_ships().unwrap_err(),
        BoardError::MissingPlacement("Destroyer")
    );
}

#[test]
fn test_adjacent_ships_allowed() {
    let fleet = [ShipType::new("Cruiser", 3), ShipType::new("Destroyer", 2)];
    let policy = FixedPlacement::new(vec![
        Placement::new(0, 0, Orientation::Horizontal),
        Placement::new(1, 0, Orientation::Horizontal),
    ]);
    let mut board = GameBoard::with_fleet(7, 7, &fleet, Box::new(policy)).unwrap();
    board.initialize();
    board.place_ships().unwrap();
    assert_eq!(board.ships_remaining(), 2);
}

#[test]
fn test_zero_length_ship_rejected() {
    let fleet = [ShipType::new("Ghost", 0)];
    let err = GameBoard::with_fleet(7, 7, &fleet, Box::new(FixedPlacement::default())).unwrap_err();
    assert_eq!(err, BoardError::InvalidShipLength("Ghost"));
}

#[test]
fn test_standard_game_can_be_finished() {
    let mut board = GameBoard::new(7, 7, Box::new(RandomPlacement::from_seed(42))).unwrap();
    board.initialize();
    board.place_ships().unwrap();
    assert_eq!(board.fleet().len(), NUM_SHIPS);

    let mut sinks = 0;
    for r in 0..7 {
        for c in 0..7 {
            if let AttackResult::Sink(_) = board.attack(Coord::new(r, c)).unwrap() {
                sinks += 1;
            }
        }
    }
    assert_eq!(sinks, NUM_SHIPS);
    assert!(board.is_game_over());
    assert_eq!(board.ships_remaining(), 0);
    assert_eq!(board.attack_count(), 49);
}

#[test]
fn test_error_display() {
    assert_eq!(BoardError::InvalidCoordinate.to_string(), "Invalid coordinate");
    assert_eq!(
        BoardError::AlreadyConfigured { rows: 7, columns: 7 }.to_string(),
        "Board already exists with size 7x7"
    );
    assert_eq!(
        BoardError::ShipsNotPlaced.to_string(),
        "Ships have not been placed yet"
    );
}

use trellis_console::{BoardError, Cell, Direction, Fleet, ShotOutcome, NUM_SHIPS, SHIPS};

fn fixed_fleet() -> Fleet {
    let mut fleet = Fleet::new();
    fleet.place(0, Cell::new(1, 1), Direction::Right).unwrap(); // Carrier 1..=5,1
    fleet.place(1, Cell::new(10, 1), Direction::Down).unwrap(); // Battleship 10,1..=4
    fleet.place(2, Cell::new(1, 10), Direction::Up).unwrap(); // Cruiser 1,8..=10
    fleet.place(3, Cell::new(5, 5), Direction::Left).unwrap(); // Submarine 3..=5,5
    fleet.place(4, Cell::new(8, 8), Direction::Down).unwrap(); // Destroyer 8,8..=9
    fleet
}

#[test]
fn test_place_errors() {
    let mut fleet = Fleet::new();
    assert_eq!(
        fleet.place(NUM_SHIPS, Cell::new(1, 1), Direction::Right),
        Err(BoardError::InvalidIndex)
    );
    assert_eq!(
        fleet.place(0, Cell::new(7, 1), Direction::Right),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        fleet.place(4, Cell::new(0, 5), Direction::Right),
        Err(BoardError::ShipOutOfBounds)
    );
    fleet.place(0, Cell::new(1, 1), Direction::Right).unwrap();
    assert_eq!(
        fleet.place(0, Cell::new(1, 3), Direction::Right),
        Err(BoardError::ShipAlreadyPlaced)
    );
    assert_eq!(
        fleet.place(1, Cell::new(3, 1), Direction::Down),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(fleet.occupied_cells(), SHIPS[0].length());
}

#[test]
fn test_ship_cells_follow_direction() {
    let fleet = fixed_fleet();
    let cruiser: Vec<_> = fleet.ship(2).unwrap().cells().collect();
    assert_eq!(
        cruiser,
        vec![Cell::new(1, 10), Cell::new(1, 9), Cell::new(1, 8)]
    );
    let sub: Vec<_> = fleet.ship(3).unwrap().cells().collect();
    assert_eq!(sub, vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]);
    assert_eq!(fleet.occupied_cells(), 17);
}

#[test]
fn test_take_shot_outcomes() {
    let mut fleet = fixed_fleet();
    assert_eq!(fleet.take_shot(Cell::new(6, 6)), ShotOutcome::Miss);
    assert_eq!(fleet.take_shot(Cell::new(8, 8)), ShotOutcome::Hit);
    assert_eq!(fleet.ships_remaining(), 5);
    assert_eq!(
        fleet.take_shot(Cell::new(8, 9)),
        ShotOutcome::Sunk("Destroyer")
    );
    assert_eq!(fleet.ships_remaining(), 4);
    assert!(!fleet.all_sunk());
}

#[test]
fn test_sink_whole_fleet() {
    let mut fleet = fixed_fleet();
    let cells: Vec<Cell> = fleet.ships().flat_map(|s| s.cells()).collect();
    let mut sunk = Vec::new();
    for cell in cells {
        if let ShotOutcome::Sunk(name) = fleet.take_shot(cell) {
            sunk.push(name);
        }
    }
    assert_eq!(
        sunk,
        vec!["Carrier", "Battleship", "Cruiser", "Submarine", "Destroyer"]
    );
    assert!(fleet.all_sunk());
    assert_eq!(fleet.ships_remaining(), 0);
}

#[test]
fn test_is_free_tracks_occupancy() {
    let mut fleet = Fleet::new();
    fleet.place(0, Cell::new(1, 10), Direction::Right).unwrap();
    fleet.place(1, Cell::new(6, 10), Direction::Right).unwrap();
    assert!(fleet.is_free(Cell::new(10, 10)));
    assert!(!fleet.is_free(Cell::new(0, 0)));
    assert!(!fleet.is_free(Cell::new(3, 10)));
}

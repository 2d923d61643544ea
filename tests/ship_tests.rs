use broadside::{Ship, ShipType, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn test_new_ship_is_intact() {
    let ship = Ship::new(ShipType::new("Test", 3));
    assert_eq!(ship.name(), "Test");
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.remaining(), 3);
    assert!(!ship.is_sunk());
}

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    assert!(!ship.register_hit());
    assert_eq!(ship.remaining(), 1);
    assert!(!ship.is_sunk());
    assert!(ship.register_hit());
    assert_eq!(ship.remaining(), 0);
    assert!(ship.is_sunk());
    // further hits never go below zero or sink twice
    assert!(!ship.register_hit());
    assert_eq!(ship.remaining(), 0);
    assert!(ship.is_sunk());
}

#[test]
fn test_standard_fleet() {
    assert_eq!(FLEET.len(), NUM_SHIPS);
    let cells: usize = FLEET.iter().map(|def| def.length()).sum();
    assert_eq!(cells, TOTAL_SHIP_CELLS);
    assert!(FLEET.iter().all(|def| def.length() > 0));
}

//! ## Test Matrix for Attack & Assailable Fields
//!
//! | Test ID | Scenario | Input | Expected |
//! |---------|----------|-------|----------|
//! | AT1.1   | Attack exclude | budget-5 diamond, range [1,2] | annulus at distance 6–7, 51 tiles |
//! | AT1.2   | Attack exclude | list mode | disjoint from movement field |
//! | AT1.3   | Attack include | same inputs | contains the movement field |
//! | AT2.1   | Attack, tiny field | radius-1 field, range [5,6] | include == exclude == annulus 4–7 |
//! | AT2.2   | Attack, tiny field | radius-1 field, range [1,6] | full diamond 7; exclude drops field tiles |
//! | AT3.1   | Assailable | cut diamond, target (13,6), range [1,2] | single spot (11,6) at ring 2 |
//! | AT3.2   | Assailable | range [1,3] | four spots, ring distances stored |
//! | AT4.1   | Invalid range | lo > hi | empty map |

use tactics_tools::attack::{ attack_field, assail_field, MoveTile, ATTACK_BLOCKED, ATTACK_IN_RANGE };
use tactics_tools::coordinates::Distance;
use tactics_tools::coordinates::square::Point;
use tactics_tools::flood::movement_field;
use tactics_tools::grid::{ Grid2D, OutputMode };

use super::fixtures::{ self, ROWS, COLS };

const ORIGIN: Point = Point::new(10, 6);

fn diamond_field(budget: i32) -> Grid2D<i32> {
    movement_field(&fixtures::open_costmap(), ORIGIN, budget, OutputMode::Matrix)
        .into_matrix()
        .unwrap()
}

/// Movement field shaped like a radius-1 diamond around the origin.
fn tiny_field() -> Grid2D<i32> {
    diamond_field(1)
}

fn origin_distance(col: usize, row: usize) -> i32 {
    ORIGIN.distance(&Point::new(col as i32, row as i32)) as i32
}

/// Test AT1.1: exclude mode marks exactly the 6–7 annulus
#[test]
fn test_attack_exclude_is_the_outer_annulus() {
    let field = attack_field(&diamond_field(5), 1..=2, OutputMode::Matrix, MoveTile::Exclude)
        .into_matrix()
        .unwrap();
    for row in 0..ROWS {
        for col in 0..COLS {
            let distance = origin_distance(col, row);
            let expected = if (6..=7).contains(&distance) { ATTACK_IN_RANGE } else { ATTACK_BLOCKED };
            assert_eq!(field[(row, col)], expected, "at ({}, {})", col, row);
        }
    }
}

/// Test AT1.2: the exclude list never overlaps the movement field
#[test]
fn test_attack_exclude_list_is_disjoint_from_field() {
    let movement = diamond_field(5);
    let list = attack_field(&movement, 1..=2, OutputMode::List, MoveTile::Exclude)
        .into_list()
        .unwrap();
    assert_eq!(list.len(), 51);
    for tile in list {
        assert_eq!(movement[tile], 0);
    }
}

/// Test AT1.3: include mode covers every movement tile
#[test]
fn test_attack_include_contains_the_field() {
    let movement = diamond_field(5);
    let field = attack_field(&movement, 1..=2, OutputMode::Matrix, MoveTile::Include)
        .into_matrix()
        .unwrap();
    for row in 0..ROWS {
        for col in 0..COLS {
            if movement[(row, col)] > 0 {
                assert_eq!(field[(row, col)], ATTACK_IN_RANGE);
            }
        }
    }
}

/// Test AT2.1: with a far interval, include and exclude coincide on the annulus
#[test]
fn test_far_interval_attack_annulus() {
    let movement = tiny_field();
    let include = attack_field(&movement, 5..=6, OutputMode::Matrix, MoveTile::Include)
        .into_matrix()
        .unwrap();
    let exclude = attack_field(&movement, 5..=6, OutputMode::Matrix, MoveTile::Exclude)
        .into_matrix()
        .unwrap();
    assert_eq!(include, exclude);
    for row in 0..ROWS {
        for col in 0..COLS {
            let distance = origin_distance(col, row);
            let expected = if (4..=7).contains(&distance) { ATTACK_IN_RANGE } else { ATTACK_BLOCKED };
            assert_eq!(include[(row, col)], expected, "at ({}, {})", col, row);
        }
    }
}

/// Test AT2.2: a wide interval floods the whole diamond; exclude punches out the field
#[test]
fn test_wide_interval_attack_diamond() {
    let movement = tiny_field();
    let include = attack_field(&movement, 1..=6, OutputMode::Matrix, MoveTile::Include)
        .into_matrix()
        .unwrap();
    let exclude = attack_field(&movement, 1..=6, OutputMode::Matrix, MoveTile::Exclude)
        .into_matrix()
        .unwrap();
    for row in 0..ROWS {
        for col in 0..COLS {
            let distance = origin_distance(col, row);
            let in_diamond = distance <= 7;
            let in_field = movement[(row, col)] > 0;
            assert_eq!(include[(row, col)] == ATTACK_IN_RANGE, in_diamond);
            assert_eq!(exclude[(row, col)] == ATTACK_IN_RANGE, in_diamond && !in_field);
        }
    }
}

/// Cut diamond: the budget-5 field with everything at column 12 and
/// beyond removed, leaving a target at (13, 6) behind the cut.
fn cut_field() -> Grid2D<i32> {
    let mut movement = diamond_field(5);
    for row in 0..ROWS {
        for col in 12..COLS {
            movement[(row, col)] = 0;
        }
    }
    movement
}

/// Test AT3.1: only (11, 6) can assail the target at range [1, 2]
#[test]
fn test_assail_narrow_range() {
    let field = assail_field(&cut_field(), Point::new(13, 6), 1..=2, OutputMode::Matrix)
        .into_matrix()
        .unwrap();
    for row in 0..ROWS {
        for col in 0..COLS {
            let expected = if (col, row) == (11, 6) { 2 } else { 0 };
            assert_eq!(field[(row, col)], expected, "at ({}, {})", col, row);
        }
    }
}

/// Test AT3.2: widening the range adds the ring-3 spots
#[test]
fn test_assail_wide_range() {
    let movement = cut_field();
    let target = Point::new(13, 6);
    let field = assail_field(&movement, target, 1..=3, OutputMode::Matrix)
        .into_matrix()
        .unwrap();
    assert_eq!(field[Point::new(11, 6)], 2);
    assert_eq!(field[Point::new(10, 6)], 3);
    assert_eq!(field[Point::new(11, 5)], 3);
    assert_eq!(field[Point::new(11, 7)], 3);
    let list = assail_field(&movement, target, 1..=3, OutputMode::List)
        .into_list()
        .unwrap();
    assert_eq!(list.len(), 4);
    for spot in list {
        assert!(field[spot] > 0);
    }
}

/// Test AT4.1: inverted intervals produce empty maps
#[test]
fn test_inverted_interval_is_empty() {
    let movement = diamond_field(5);
    let attack = attack_field(&movement, 3..=1, OutputMode::Matrix, MoveTile::Include)
        .into_matrix()
        .unwrap();
    assert!(attack.iter().all(|&cell| cell == ATTACK_BLOCKED));
    let assail = assail_field(&movement, ORIGIN, 3..=1, OutputMode::List)
        .into_list()
        .unwrap();
    assert!(assail.is_empty());
}

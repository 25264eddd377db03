//! ## Test Matrix for Push/Pull Mechanics
//!
//! | Test ID | Operation | Input | Expected |
//! |---------|-----------|-------|----------|
//! | PP1.1   | Block probe | open cross | edge distances per direction |
//! | PP1.2   | Block probe | holes at distance 2 | all four = 2 |
//! | PP1.3   | Block probe | asymmetric holes | per-direction distances |
//! | PP2.1   | Pushable  | adjacent spots on three sides | mirrored flags |
//! | PP2.2   | Pushable  | ring-2 spots | flags via the rays only |
//! | PP3.1   | Pullable  | spots out of range | all false |
//! | PP3.2   | Pullable  | ring-2 cardinal spots | flags toward the spots |
//! | PP3.3   | Pullable  | border spot | rejected |
//! | PP4.1   | Projector | all directions allowed | distances short of each blocker |
//! | PP4.2   | Projector | one direction masked | its arm stays blocked |
//! | PP4.3   | Projector | list mode | direction-then-distance order |

use tactics_tools::coordinates::square::Point;
use tactics_tools::grid::{ Grid2D, OutputMode };
use tactics_tools::pushpull::{
    block_distances, pullable_directions, pushable_directions, pushpull_field,
    Cardinals, PUSHPULL_BLOCKED,
};

use super::fixtures::{ ROWS, COLS };

const START: Point = Point::new(10, 6);

/// A sliding map that is open along the row and column through `START`
/// and blocked everywhere else, with extra holes punched where asked.
fn cross_map(holes: &[(i32, i32)]) -> Grid2D<i32> {
    let mut map = Grid2D::filled(ROWS, COLS, 0);
    for col in 0..COLS {
        map[(6, col)] = 1;
    }
    for row in 0..ROWS {
        map[(row, 10)] = 1;
    }
    for &(x, y) in holes {
        map[Point::new(x, y)] = 0;
    }
    map
}

/// Test PP1.1: an unblocked walk stops at the grid edge
#[test]
fn test_block_probe_reaches_the_edges() {
    let block = block_distances(&cross_map(&[]), START);
    assert_eq!(block.left, START.x);
    assert_eq!(block.top, START.y);
    assert_eq!(block.right, COLS as i32 - START.x - 1);
    assert_eq!(block.bottom, ROWS as i32 - START.y - 1);
}

/// Test PP1.2: symmetric holes at distance two
#[test]
fn test_block_probe_symmetric_holes() {
    let map = cross_map(&[(8, 6), (12, 6), (10, 4), (10, 8)]);
    let block = block_distances(&map, START);
    assert_eq!(block, Cardinals { right: 2, top: 2, left: 2, bottom: 2 });
}

/// Test PP1.3: each direction reports its own first blocker
#[test]
fn test_block_probe_asymmetric_holes() {
    let map = cross_map(&[(6, 6), (12, 6), (10, 5), (10, 9)]);
    let block = block_distances(&map, START);
    assert_eq!(block, Cardinals { right: 2, top: 1, left: 4, bottom: 3 });
}

/// Spots marked on an otherwise empty assailable field.
fn assailable_with(spots: &[(i32, i32, i32)]) -> Grid2D<i32> {
    let mut field = Grid2D::filled(ROWS, COLS, 0);
    for &(x, y, ring) in spots {
        field[Point::new(x, y)] = ring;
    }
    field
}

/// Test PP2.1: attack spots above, left of, and below the target
#[test]
fn test_pushable_mirrors_adjacent_spots() {
    let field = assailable_with(&[(10, 5, 1), (9, 6, 1), (10, 7, 1)]);
    let pushable = pushable_directions(&field, START, 1..=2);
    assert!(pushable.top); // struck from below, shoved upward
    assert!(pushable.bottom); // struck from above
    assert!(pushable.right); // struck from the left
    assert!(!pushable.left);
}

/// Test PP2.2: ring-2 spots reach the classifier through the rays only
#[test]
fn test_pushable_sees_only_the_cardinal_rays() {
    // Diagonal ring-2 spots are invisible to the rays; (12, 6) is not.
    let field = assailable_with(&[(9, 5, 2), (11, 5, 2), (12, 6, 2), (8, 6, 2), (10, 4, 2)]);
    let pushable = pushable_directions(&field, START, 1..=2);
    assert!(pushable.left); // spot at (12, 6)
    assert!(pushable.right); // spot at (8, 6)
    assert!(pushable.bottom); // spot at (10, 4)
    assert!(!pushable.top); // nothing on the ray below
}

/// Test PP3.1: adjacent spots cannot pull at range two and beyond
#[test]
fn test_pullable_out_of_range() {
    let field = assailable_with(&[(10, 5, 1), (9, 6, 1), (10, 7, 1)]);
    let pullable = pullable_directions(&field, START, 2..=3);
    assert_eq!(pullable, Cardinals::default());
}

/// Test PP3.2: ring-2 cardinal spots pull toward themselves
#[test]
fn test_pullable_follows_the_spot_direction() {
    let field = assailable_with(&[(10, 4, 2), (8, 6, 2), (10, 8, 2)]);
    let pullable = pullable_directions(&field, START, 2..=3);
    assert!(pullable.top);
    assert!(pullable.left);
    assert!(pullable.bottom);
    assert!(!pullable.right);
}

/// Test PP3.3: a spot on the border has no room to pull into
#[test]
fn test_pullable_rejects_border_spots() {
    let field = assailable_with(&[(10, 0, 2)]);
    let pullable = pullable_directions(&field, Point::new(10, 2), 2..=2);
    assert_eq!(pullable, Cardinals::default());
}

/// Test PP4.1: the projector marks each arm short of its blocker
#[test]
fn test_projector_marks_sliding_arms() {
    let block = Cardinals { right: 2, top: 3, left: 4, bottom: 5 };
    let allowed = Cardinals { right: true, top: true, left: true, bottom: true };
    let field = pushpull_field(&block, &allowed, ROWS, COLS, START, OutputMode::Matrix)
        .into_matrix()
        .unwrap();

    let mut expected = Grid2D::filled(ROWS, COLS, PUSHPULL_BLOCKED);
    expected[START] = 0;
    expected[Point::new(11, 6)] = 1;
    expected[Point::new(10, 5)] = 1;
    expected[Point::new(10, 4)] = 2;
    expected[Point::new(9, 6)] = 1;
    expected[Point::new(8, 6)] = 2;
    expected[Point::new(7, 6)] = 3;
    expected[Point::new(10, 7)] = 1;
    expected[Point::new(10, 8)] = 2;
    expected[Point::new(10, 9)] = 3;
    expected[Point::new(10, 10)] = 4;
    assert_eq!(field, expected);
}

/// Test PP4.2: masking a direction leaves its arm blocked
#[test]
fn test_projector_respects_direction_mask() {
    let block = Cardinals { right: 2, top: 3, left: 4, bottom: 5 };
    let allowed = Cardinals { right: false, top: false, left: true, bottom: true };
    let field = pushpull_field(&block, &allowed, ROWS, COLS, START, OutputMode::Matrix)
        .into_matrix()
        .unwrap();
    assert_eq!(field[Point::new(11, 6)], PUSHPULL_BLOCKED);
    assert_eq!(field[Point::new(10, 5)], PUSHPULL_BLOCKED);
    assert_eq!(field[Point::new(9, 6)], 1);
    assert_eq!(field[Point::new(10, 7)], 1);
}

/// Test PP4.3: list mode walks direction-then-distance
#[test]
fn test_projector_list_order() {
    let block = Cardinals { right: 3, top: 2, left: 1, bottom: 3 };
    let allowed = Cardinals { right: true, top: true, left: true, bottom: true };
    let list = pushpull_field(&block, &allowed, ROWS, COLS, START, OutputMode::List)
        .into_list()
        .unwrap();
    assert_eq!(
        list,
        vec![
            Point::new(11, 6), // right, distance 1
            Point::new(12, 6), // right, distance 2
            Point::new(10, 5), // top, distance 1
            Point::new(10, 7), // bottom, distance 1
            Point::new(10, 8), // bottom, distance 2
        ]
    );
}

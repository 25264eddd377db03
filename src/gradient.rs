//! Multi-source gradient fields.
//!
//! A gradient field is the integration map of many units at once: every
//! walkable tile holds the minimum step distance to the nearest seed
//! unit, computed in a single merged flood instead of one flood per
//! unit. Typical consumers let AI units descend the gradient toward
//! whichever target happens to be closest.

use crate::coordinates::clamp;
use crate::coordinates::square::{ Point, CARDINAL_CYCLE };
use crate::flood::{ Node, reopen_in_closed, COST_WALKABLE_MIN };
use crate::grid::Grid2D;

/// Gradient-field value of an unwalkable tile.
pub const GRADIENT_BLOCKED : i32 = -1;

/// Gradient-field value of a seed unit's own tile.
pub const GRADIENT_SEED : i32 = 0;

/// Builds the gradient field of `seeds` over a cost grid.
///
/// Unwalkable cells hold [`GRADIENT_BLOCKED`]; walkable cells start at
/// the `rows + cols` upper bound and relax down to the minimum step
/// distance from any seed; seed tiles themselves hold
/// [`GRADIENT_SEED`]. Walkable cells no seed can reach keep the upper
/// bound, which also saturates any detour longer than `rows + cols`.
/// Out-of-bounds seeds are ignored.
pub fn gradient_field( cost : &Grid2D< i32 >, seeds : &[ Point ] ) -> Grid2D< i32 >
{
  log::trace!( "gradient_field seeds={}", seeds.len() );
  let rows = cost.rows() as i32;
  let cols = cost.cols() as i32;
  let unreached = rows + cols;
  let mut gradient = Grid2D::from_fn( cost.rows(), cost.cols(), | ( row, col ) |
  {
    if cost[ ( row, col ) ] < COST_WALKABLE_MIN { GRADIENT_BLOCKED } else { unreached }
  });

  let mut open : Vec< Node< Point > > = Vec::new();
  let mut closed : Vec< Node< Point > > = Vec::new();
  for &seed in seeds
  {
    if !cost.contains( seed )
    {
      continue;
    }
    gradient[ seed ] = GRADIENT_SEED;
    open.push( Node { at : seed, distance : 1 } );
  }

  while let Some( current ) = open.pop()
  {
    closed.push( current );
    for &( dx, dy ) in CARDINAL_CYCLE.iter()
    {
      let neighbor = Point::new
      (
        clamp( current.at.x + dx, 0, cols - 1 ),
        clamp( current.at.y + dy, 0, rows - 1 ),
      );
      if cost[ neighbor ] < COST_WALKABLE_MIN
      {
        continue;
      }
      let distance = gradient[ current.at ] + 1;
      if distance < gradient[ neighbor ]
      {
        gradient[ neighbor ] = distance;
      }
      let node = Node { at : neighbor, distance };
      if reopen_in_closed( &mut closed, &node )
      {
        open.push( node );
      }
    }
  }
  gradient
}

#[ cfg( test ) ]
mod tests
{
  use super::*;

  #[ test ]
  fn single_seed_gradient_is_manhattan_distance()
  {
    let cost = Grid2D::filled( 5, 5, 1 );
    let gradient = gradient_field( &cost, &[ Point::new( 2, 2 ) ] );
    assert_eq!( gradient[ Point::new( 2, 2 ) ], GRADIENT_SEED );
    assert_eq!( gradient[ Point::new( 0, 0 ) ], 4 );
    assert_eq!( gradient[ Point::new( 4, 3 ) ], 3 );
  }

  #[ test ]
  fn blocked_cells_hold_the_sentinel()
  {
    let mut cost = Grid2D::filled( 4, 4, 1 );
    cost[ Point::new( 1, 1 ) ] = 0;
    let gradient = gradient_field( &cost, &[ Point::new( 0, 0 ) ] );
    assert_eq!( gradient[ Point::new( 1, 1 ) ], GRADIENT_BLOCKED );
    // The flood routes around the blocker.
    assert_eq!( gradient[ Point::new( 2, 2 ) ], 4 );
  }

  #[ test ]
  fn no_seeds_leaves_walkable_cells_at_the_upper_bound()
  {
    let cost = Grid2D::filled( 3, 4, 1 );
    let gradient = gradient_field( &cost, &[] );
    assert!( gradient.iter().all( | &cell | cell == 7 ) );
  }
}

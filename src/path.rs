//! Path reconstruction over movement fields, and conversions between
//! the two path representations.
//!
//! A path is recovered by gradient descent: starting at the destination,
//! repeatedly step to the cardinal neighbour with the smallest movement
//! value until the origin is reached. The walk reports a typed failure
//! instead of looping when the field offers no way down.

use thiserror::Error;
use crate::coordinates::clamp;
use crate::coordinates::square::{ Point, CARDINAL_CYCLE };
use crate::flood::MOVE_REACHABLE_MIN;
use crate::grid::Grid2D;

/// Emission shape of a reconstructed path.
#[ derive( Debug, Clone, Copy, PartialEq, Eq ) ]
pub enum PathMode
{
  /// Absolute positions, ordered from the end back toward the start.
  Absolute,
  /// Unit step deltas, ordered from the start toward the end.
  Steps,
}

/// Why a path could not be reconstructed.
#[ derive( Debug, Error, Clone, Copy, PartialEq, Eq ) ]
pub enum PathError
{
  /// No reachable tile to step to: the endpoints are off the field or
  /// out of bounds.
  #[ error( "no reachable tile adjacent to ({x}, {y})" ) ]
  Unreachable
  {
    /// Column of the tile the walk was at.
    x : i32,
    /// Row of the tile the walk was at.
    y : i32,
  },

  /// No neighbour improves on the current tile's cost; descending
  /// further would loop.
  #[ error( "descent stalled at ({x}, {y})" ) ]
  Stalled
  {
    /// Column of the tile the walk stalled at.
    x : i32,
    /// Row of the tile the walk stalled at.
    y : i32,
  },
}

/// Reconstructs a path across a movement field from `start` to `end`.
///
/// At each tile the walk moves to the reachable cardinal neighbour with
/// the minimum field value; ties go to the first neighbour in cycle
/// order. The raw walk runs end → start, which is exactly what
/// [`PathMode::Absolute`] emits; [`PathMode::Steps`] emits the
/// equivalent start → end delta sequence instead.
pub fn reconstruct_path( movement : &Grid2D< i32 >, start : Point, end : Point, mode : PathMode ) -> Result< Vec< Point >, PathError >
{
  log::trace!( "reconstruct_path start=({},{}) end=({},{})", start.x, start.y, end.x, end.y );
  let rows = movement.rows() as i32;
  let cols = movement.cols() as i32;
  if !movement.contains( start ) || !movement.contains( end )
  {
    return Err( PathError::Unreachable { x : end.x, y : end.y } );
  }
  if movement[ start ] < MOVE_REACHABLE_MIN && movement[ end ] < MOVE_REACHABLE_MIN
  {
    return Err( PathError::Unreachable { x : end.x, y : end.y } );
  }

  let mut raw = Vec::new();
  let mut current = end;
  while current != start
  {
    raw.push( current );
    let mut best : Option< ( Point, i32 ) > = None;
    for &( dx, dy ) in CARDINAL_CYCLE.iter()
    {
      let neighbor = Point::new
      (
        clamp( current.x + dx, 0, cols - 1 ),
        clamp( current.y + dy, 0, rows - 1 ),
      );
      let value = movement[ neighbor ];
      if value < MOVE_REACHABLE_MIN
      {
        continue;
      }
      if best.map_or( true, | ( _, best_value ) | value < best_value )
      {
        best = Some( ( neighbor, value ) );
      }
    }
    let Some( ( next, next_value ) ) = best else
    {
      return Err( PathError::Unreachable { x : current.x, y : current.y } );
    };
    let here = movement[ current ];
    if here >= MOVE_REACHABLE_MIN && next_value >= here
    {
      return Err( PathError::Stalled { x : current.x, y : current.y } );
    }
    current = next;
  }
  raw.push( start );

  match mode
  {
    PathMode::Absolute => Ok( raw ),
    PathMode::Steps =>
    {
      let mut steps = Vec::with_capacity( raw.len() - 1 );
      for i in ( 1 .. raw.len() ).rev()
      {
        steps.push( raw[ i - 1 ] - raw[ i ] );
      }
      Ok( steps )
    }
  }
}

/// Expands a step-delta sequence into absolute positions, starting at
/// `start`.
pub fn steps_to_positions( start : Point, steps : &[ Point ] ) -> Vec< Point >
{
  let mut positions = Vec::with_capacity( steps.len() + 1 );
  positions.push( start );
  for ( i, &step ) in steps.iter().enumerate()
  {
    let previous = positions[ i ];
    positions.push( previous + step );
  }
  positions
}

/// Collapses an absolute position sequence into its step deltas.
/// Inverse of [`steps_to_positions`].
pub fn positions_to_steps( positions : &[ Point ] ) -> Vec< Point >
{
  positions
    .windows( 2 )
    .map( | pair | pair[ 1 ] - pair[ 0 ] )
    .collect()
}

#[ cfg( test ) ]
mod tests
{
  use super::*;

  #[ test ]
  fn degenerate_path_is_the_start_alone()
  {
    let mut movement = Grid2D::filled( 3, 3, 0 );
    movement[ Point::new( 1, 1 ) ] = 1;
    let path = reconstruct_path( &movement, Point::new( 1, 1 ), Point::new( 1, 1 ), PathMode::Absolute ).unwrap();
    assert_eq!( path, vec![ Point::new( 1, 1 ) ] );
    let steps = reconstruct_path( &movement, Point::new( 1, 1 ), Point::new( 1, 1 ), PathMode::Steps ).unwrap();
    assert!( steps.is_empty() );
  }

  #[ test ]
  fn isolated_end_reports_unreachable()
  {
    let mut movement = Grid2D::filled( 5, 5, 0 );
    movement[ Point::new( 0, 0 ) ] = 1;
    movement[ Point::new( 1, 0 ) ] = 2;
    let result = reconstruct_path( &movement, Point::new( 0, 0 ), Point::new( 4, 4 ), PathMode::Absolute );
    assert_eq!( result, Err( PathError::Unreachable { x : 4, y : 4 } ) );
  }

  #[ test ]
  fn descent_into_a_foreign_basin_reports_a_stall()
  {
    // A field whose origin is not the requested start: the walk bottoms
    // out at the field origin and must not loop.
    let mut movement = Grid2D::filled( 1, 5, 0 );
    movement[ Point::new( 0, 0 ) ] = 1;
    movement[ Point::new( 1, 0 ) ] = 2;
    movement[ Point::new( 2, 0 ) ] = 3;
    let result = reconstruct_path( &movement, Point::new( 4, 0 ), Point::new( 2, 0 ), PathMode::Absolute );
    assert_eq!( result, Err( PathError::Stalled { x : 0, y : 0 } ) );
  }

  #[ test ]
  fn representation_conversions_are_inverse()
  {
    let steps = vec![ Point::new( 1, 0 ), Point::new( 0, 1 ), Point::new( 1, 0 ) ];
    let positions = steps_to_positions( Point::new( 2, 2 ), &steps );
    assert_eq!
    (
      positions,
      vec![ Point::new( 2, 2 ), Point::new( 3, 2 ), Point::new( 3, 3 ), Point::new( 4, 3 ) ]
    );
    assert_eq!( positions_to_steps( &positions ), steps );
  }
}

//! Push and pull mechanics: which cardinal directions a target can be
//! shoved in, how far a unit can slide before hitting a blocker, and the
//! projected sliding destinations.
//!
//! All three operations share one direction convention: [`Cardinal`]
//! iterates right, top, left, bottom, where `Top` decreases `y` (rows
//! grow downward). A [`Cardinals`] record carries one value per
//! direction in that order, both for block distances and for permission
//! flags.

use std::ops::RangeInclusive;
use crate::coordinates::clamp;
use crate::coordinates::square::Point;
use crate::grid::{ Grid2D, GridOutput, OutputMode };

/// Push/pull-field value of a tile that cannot be slid onto.
pub const PUSHPULL_BLOCKED : i32 = -1;

/// Assailable-field cells at or above this value count as attack spots.
pub const ASSAIL_IN_RANGE_MIN : i32 = 1;

/// The four cardinal directions in iteration order.
#[ derive( Debug, Clone, Copy, PartialEq, Eq ) ]
pub enum Cardinal
{
  /// Toward increasing `x`.
  Right,
  /// Toward decreasing `y`.
  Top,
  /// Toward decreasing `x`.
  Left,
  /// Toward increasing `y`.
  Bottom,
}

impl Cardinal
{
  /// All directions in iteration order.
  pub const ALL : [ Self; 4 ] = [ Self::Right, Self::Top, Self::Left, Self::Bottom ];

  /// The unit offset of the direction.
  pub const fn offset( self ) -> ( i32, i32 )
  {
    match self
    {
      Self::Right => ( 1, 0 ),
      Self::Top => ( 0, -1 ),
      Self::Left => ( -1, 0 ),
      Self::Bottom => ( 0, 1 ),
    }
  }
}

/// One value per cardinal direction.
#[ derive( Debug, Clone, Copy, PartialEq, Eq, Default ) ]
pub struct Cardinals< T >
{
  /// Value for [`Cardinal::Right`].
  pub right : T,
  /// Value for [`Cardinal::Top`].
  pub top : T,
  /// Value for [`Cardinal::Left`].
  pub left : T,
  /// Value for [`Cardinal::Bottom`].
  pub bottom : T,
}

impl< T > Cardinals< T >
{
  /// Returns the value for a direction.
  pub fn get( &self, direction : Cardinal ) -> &T
  {
    match direction
    {
      Cardinal::Right => &self.right,
      Cardinal::Top => &self.top,
      Cardinal::Left => &self.left,
      Cardinal::Bottom => &self.bottom,
    }
  }

  /// Sets the value for a direction.
  pub fn set( &mut self, direction : Cardinal, value : T )
  {
    match direction
    {
      Cardinal::Right => self.right = value,
      Cardinal::Top => self.top = value,
      Cardinal::Left => self.left = value,
      Cardinal::Bottom => self.bottom = value,
    }
  }
}

/// Classifies the cardinal directions `target` can be pushed in, given
/// an assailable field and the strike range interval.
///
/// The four cardinal rays around the target are probed at every distance
/// in range; an attack spot on a ray permits a push *away* from it, so
/// the flag set is the mirror of the spot's direction (a spot below the
/// target sets `top`, and so on).
pub fn pushable_directions( assailable : &Grid2D< i32 >, target : Point, range : RangeInclusive< i32 > ) -> Cardinals< bool >
{
  log::trace!( "pushable_directions target=({},{}) range={:?}", target.x, target.y, range );
  let rows = assailable.rows() as i32;
  let cols = assailable.cols() as i32;
  let mut pushable = Cardinals::default();
  if !assailable.contains( target )
  {
    return pushable;
  }

  for distance in range
  {
    for direction in Cardinal::ALL
    {
      let ( dx, dy ) = direction.offset();
      let spot = Point::new
      (
        clamp( target.x + distance * dx, 0, cols - 1 ),
        clamp( target.y + distance * dy, 0, rows - 1 ),
      );
      if assailable[ spot ] < ASSAIL_IN_RANGE_MIN
      {
        continue;
      }
      if spot.x > target.x
      {
        pushable.left = true;
      }
      else if spot.y > target.y
      {
        pushable.top = true;
      }
      else if spot.x < target.x
      {
        pushable.right = true;
      }
      else if spot.y < target.y
      {
        pushable.bottom = true;
      }
    }
  }
  pushable
}

/// Classifies the cardinal directions `target` can be pulled toward,
/// given an assailable field and the strike range interval.
///
/// A ray spot permits a pull toward its own direction. Spots on the grid
/// border are rejected; there is no room behind them to pull into.
pub fn pullable_directions( assailable : &Grid2D< i32 >, target : Point, range : RangeInclusive< i32 > ) -> Cardinals< bool >
{
  log::trace!( "pullable_directions target=({},{}) range={:?}", target.x, target.y, range );
  let rows = assailable.rows() as i32;
  let cols = assailable.cols() as i32;
  let mut pullable = Cardinals::default();
  if !assailable.contains( target )
  {
    return pullable;
  }

  for distance in range
  {
    for direction in Cardinal::ALL
    {
      let ( dx, dy ) = direction.offset();
      let spot = Point::new
      (
        clamp( target.x + distance * dx, 0, cols - 1 ),
        clamp( target.y + distance * dy, 0, rows - 1 ),
      );
      let on_border = spot.x == 0 || spot.x == cols - 1 || spot.y == 0 || spot.y == rows - 1;
      if assailable[ spot ] >= ASSAIL_IN_RANGE_MIN && !on_border
      {
        pullable.set( direction, true );
      }
    }
  }
  pullable
}

/// Probes the distance to the first sliding blocker in each cardinal
/// direction from `start` on a push/pull cost grid (`0` blocks).
///
/// The first step landing on a blocked cell records that step index;
/// a walk that leaves the grid first records the distance from `start`
/// to the edge instead.
pub fn block_distances( pushpull_cost : &Grid2D< i32 >, start : Point ) -> Cardinals< i32 >
{
  log::trace!( "block_distances start=({},{})", start.x, start.y );
  let mut block = Cardinals::default();
  for direction in Cardinal::ALL
  {
    let ( dx, dy ) = direction.offset();
    let mut distance = 0;
    let first_block = loop
    {
      distance += 1;
      let probe = Point::new( start.x + dx * distance, start.y + dy * distance );
      if !pushpull_cost.contains( probe )
      {
        break distance - 1;
      }
      if pushpull_cost[ probe ] == 0
      {
        break distance;
      }
    };
    block.set( direction, first_block );
  }
  block
}

/// Projects the sliding destinations of a unit at `start`.
///
/// For each direction whose `allowed` flag is set, every cell at
/// distance `1 ..= block[ direction ] - 1` is marked with its sliding
/// distance. Matrix mode initialises to [`PUSHPULL_BLOCKED`] and leaves
/// the origin at `0`; list mode emits the cells in direction-then-
/// distance order, without the origin.
pub fn pushpull_field( block : &Cardinals< i32 >, allowed : &Cardinals< bool >, rows : usize, cols : usize, start : Point, mode : OutputMode ) -> GridOutput
{
  log::trace!( "pushpull_field start=({},{})", start.x, start.y );
  let mut field = Grid2D::filled( rows, cols, PUSHPULL_BLOCKED );
  let mut list : Vec< Point > = Vec::new();
  let in_bounds = start.x >= 0 && ( start.x as usize ) < cols && start.y >= 0 && ( start.y as usize ) < rows;

  if in_bounds
  {
    field[ start ] = 0;
    for direction in Cardinal::ALL
    {
      if !*allowed.get( direction )
      {
        continue;
      }
      let ( dx, dy ) = direction.offset();
      for distance in 1 .. *block.get( direction )
      {
        let tile = Point::new
        (
          clamp( start.x + dx * distance, 0, cols as i32 - 1 ),
          clamp( start.y + dy * distance, 0, rows as i32 - 1 ),
        );
        match mode
        {
          OutputMode::Matrix => field[ tile ] = distance,
          OutputMode::List => list.push( tile ),
        }
      }
    }
  }

  match mode
  {
    OutputMode::Matrix => GridOutput::Matrix( field ),
    OutputMode::List => GridOutput::List( list ),
  }
}

#[ cfg( test ) ]
mod tests
{
  use super::*;

  #[ test ]
  fn cardinal_order_matches_offsets()
  {
    let offsets : Vec< _ > = Cardinal::ALL.iter().map( | direction | direction.offset() ).collect();
    assert_eq!( offsets, vec![ ( 1, 0 ), ( 0, -1 ), ( -1, 0 ), ( 0, 1 ) ] );
  }

  #[ test ]
  fn block_distance_falls_back_to_the_grid_edge()
  {
    let open = Grid2D::filled( 7, 9, 1 );
    let block = block_distances( &open, Point::new( 3, 2 ) );
    assert_eq!( block.left, 3 );
    assert_eq!( block.top, 2 );
    assert_eq!( block.right, 5 );
    assert_eq!( block.bottom, 4 );
  }

  #[ test ]
  fn pull_spot_on_the_border_is_rejected()
  {
    let mut assailable = Grid2D::filled( 5, 5, 0 );
    assailable[ Point::new( 2, 0 ) ] = 1; // on the top border
    let pullable = pullable_directions( &assailable, Point::new( 2, 2 ), 2 ..= 2 );
    assert!( !pullable.top );
    assert!( !pullable.bottom && !pullable.left && !pullable.right );
  }
}

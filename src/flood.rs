//! Reachability floods over weighted cost grids.
//!
//! The flood is a uniform-cost search with a LIFO open set and an
//! explicit closed set that readmits nodes when a cheaper route to an
//! already-closed position is found. For non-negative costs under a
//! bounded budget this is equivalent to Dijkstra: every reopening
//! strictly lowers a recorded distance, which is bounded below by zero,
//! so the flood terminates with minimal cumulative entry costs.
//!
//! # Examples
//!
//! ```rust
//! use tactics_tools::grid::{ Grid2D, OutputMode };
//! use tactics_tools::coordinates::square::Point;
//! use tactics_tools::flood::movement_field;
//!
//! let cost = Grid2D::filled( 5, 5, 1 );
//! let field = movement_field( &cost, Point::new( 2, 2 ), 2, OutputMode::Matrix )
//!     .into_matrix()
//!     .unwrap();
//! assert_eq!( field[ Point::new( 2, 2 ) ], 1 );
//! assert_eq!( field[ Point::new( 4, 2 ) ], 3 );
//! assert_eq!( field[ Point::new( 0, 4 ) ], 0 ); // over budget
//! ```

use rustc_hash::FxHashSet;
use crate::coordinates::clamp;
use crate::coordinates::square::{ Point, CARDINAL_CYCLE };
use crate::coordinates::hexagonal::{ Cube, HEX_CYCLE };
use crate::grid::{ Grid2D, GridOutput, HexGridOutput, OutputMode };

/// Cost-grid cells below this value cannot be entered.
pub const COST_WALKABLE_MIN : i32 = 1;

/// Movement-field value of an unreachable tile.
pub const MOVE_UNREACHABLE : i32 = 0;

/// Minimum movement-field value of a reachable tile; the origin holds
/// exactly this value.
pub const MOVE_REACHABLE_MIN : i32 = 1;

/// A frontier entry: a position with its accumulated entry cost.
#[ derive( Debug, Clone, Copy, PartialEq, Eq ) ]
pub( crate ) struct Node< C >
{
  pub at : C,
  pub distance : i32,
}

/// Closed-set relaxation shared by every flood in the crate.
///
/// Returns `true` when `node` should enter the open set: its position was
/// never closed, or the closed entry is strictly worse and gets evicted
/// for reprocessing.
pub( crate ) fn reopen_in_closed< C >( closed : &mut Vec< Node< C > >, node : &Node< C > ) -> bool
where
  C : PartialEq,
{
  for k in 0 .. closed.len()
  {
    if closed[ k ].at == node.at
    {
      if node.distance < closed[ k ].distance
      {
        closed.remove( k );
        return true;
      }
      return false;
    }
  }
  true
}

/// Builds the movement field reachable from `start` within `budget`
/// movement points on a square grid.
///
/// Each cost cell is the price of *entering* that tile; `0` blocks.
/// In the result, `0` means unreachable, and a reachable tile holds its
/// minimum cumulative entry cost plus one (so the origin holds `1`).
/// An out-of-bounds origin yields an empty field.
pub fn movement_field( cost : &Grid2D< i32 >, start : Point, budget : i32, mode : OutputMode ) -> GridOutput
{
  log::trace!( "movement_field start=({},{}) budget={}", start.x, start.y, budget );
  let rows = cost.rows();
  let cols = cost.cols();
  let mut field = Grid2D::filled( rows, cols, MOVE_UNREACHABLE );
  let mut list : Vec< Point > = Vec::new();
  let mut emitted : FxHashSet< ( i32, i32 ) > = FxHashSet::default();

  if cost.contains( start )
  {
    let mut open : Vec< Node< Point > > = Vec::new();
    let mut closed : Vec< Node< Point > > = Vec::new();
    open.push( Node { at : start, distance : 0 } );

    while let Some( current ) = open.pop()
    {
      closed.push( current );
      match mode
      {
        OutputMode::Matrix =>
        {
          let cell = &mut field[ current.at ];
          if *cell == MOVE_UNREACHABLE || *cell > current.distance + 1
          {
            *cell = current.distance + 1;
          }
        }
        OutputMode::List =>
        {
          if emitted.insert( ( current.at.x, current.at.y ) )
          {
            list.push( current.at );
          }
        }
      }
      for &( dx, dy ) in CARDINAL_CYCLE.iter()
      {
        let neighbor = Point::new
        (
          clamp( current.at.x + dx, 0, cols as i32 - 1 ),
          clamp( current.at.y + dy, 0, rows as i32 - 1 ),
        );
        let step_cost = cost[ neighbor ];
        let node = Node { at : neighbor, distance : current.distance + step_cost };
        if node.distance > budget || step_cost < COST_WALKABLE_MIN
        {
          continue;
        }
        if reopen_in_closed( &mut closed, &node )
        {
          open.push( node );
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

/// Hexagonal variant of [`movement_field`], on cube coordinates over the
/// `( z, x )` storage plane.
pub fn movement_field_hex( cost : &Grid2D< i32 >, start : Cube, budget : i32, mode : OutputMode ) -> HexGridOutput
{
  log::trace!( "movement_field_hex start=({},{},{}) budget={}", start.x, start.y, start.z, budget );
  let rows = cost.rows();
  let cols = cost.cols();
  let mut field = Grid2D::filled( rows, cols, MOVE_UNREACHABLE );
  let mut list : Vec< Cube > = Vec::new();
  let mut emitted : FxHashSet< ( i32, i32 ) > = FxHashSet::default();

  if cost.contains_hex( start )
  {
    let mut open : Vec< Node< Cube > > = Vec::new();
    let mut closed : Vec< Node< Cube > > = Vec::new();
    open.push( Node { at : start, distance : 0 } );

    while let Some( current ) = open.pop()
    {
      closed.push( current );
      match mode
      {
        OutputMode::Matrix =>
        {
          let cell = &mut field[ current.at ];
          if *cell == MOVE_UNREACHABLE || *cell > current.distance + 1
          {
            *cell = current.distance + 1;
          }
        }
        OutputMode::List =>
        {
          if emitted.insert( ( current.at.x, current.at.z ) )
          {
            list.push( current.at );
          }
        }
      }
      for &( dx, dz ) in HEX_CYCLE.iter()
      {
        let neighbor = Cube::new
        (
          clamp( current.at.x + dx, 0, cols as i32 - 1 ),
          clamp( current.at.z + dz, 0, rows as i32 - 1 ),
        );
        let step_cost = cost[ neighbor ];
        let node = Node { at : neighbor, distance : current.distance + step_cost };
        if node.distance > budget || step_cost < COST_WALKABLE_MIN
        {
          continue;
        }
        if reopen_in_closed( &mut closed, &node )
        {
          open.push( node );
        }
      }
    }
  }

  match mode
  {
    OutputMode::Matrix => HexGridOutput::Matrix( field ),
    OutputMode::List => HexGridOutput::List( list ),
  }
}

/// Bounds-checked reachability test on a movement field.
pub fn is_reachable( field : &Grid2D< i32 >, point : Point ) -> bool
{
  field.contains( point ) && field[ point ] >= MOVE_REACHABLE_MIN
}

#[ cfg( test ) ]
mod tests
{
  use super::*;

  #[ test ]
  fn reopening_evicts_strictly_worse_entries_only()
  {
    let mut closed = vec!
    [
      Node { at : Point::new( 1, 1 ), distance : 5 },
      Node { at : Point::new( 2, 1 ), distance : 2 },
    ];
    // Equal distance stays closed.
    assert!( !reopen_in_closed( &mut closed, &Node { at : Point::new( 2, 1 ), distance : 2 } ) );
    // Strictly better evicts and reopens.
    assert!( reopen_in_closed( &mut closed, &Node { at : Point::new( 1, 1 ), distance : 3 } ) );
    assert_eq!( closed.len(), 1 );
    // Unknown position opens.
    assert!( reopen_in_closed( &mut closed, &Node { at : Point::new( 0, 0 ), distance : 9 } ) );
  }

  #[ test ]
  fn origin_is_marked_even_when_fully_walled_in()
  {
    let mut cost = Grid2D::filled( 3, 3, 0 );
    cost[ Point::new( 1, 1 ) ] = 1;
    let field = movement_field( &cost, Point::new( 1, 1 ), 5, OutputMode::Matrix )
      .into_matrix()
      .unwrap();
    assert_eq!( field[ Point::new( 1, 1 ) ], 1 );
    assert_eq!( field.iter().sum::< i32 >(), 1 );
  }

  #[ test ]
  fn out_of_bounds_origin_yields_empty_field()
  {
    let cost = Grid2D::filled( 3, 3, 1 );
    let field = movement_field( &cost, Point::new( -1, 0 ), 5, OutputMode::Matrix )
      .into_matrix()
      .unwrap();
    assert!( field.iter().all( | &cell | cell == MOVE_UNREACHABLE ) );
    let list = movement_field( &cost, Point::new( 3, 0 ), 5, OutputMode::List )
      .into_list()
      .unwrap();
    assert!( list.is_empty() );
  }
}

//! Attack ranges over movement fields.
//!
//! [`attack_field`] answers "which tiles can this unit strike after
//! moving anywhere in its movement field", [`assail_field`] the reverse
//! question "from which reachable tiles can this particular target be
//! struck". Both take a closed range interval of Manhattan strike
//! distances; an empty interval (`lo > hi`) yields an empty map.

use std::ops::RangeInclusive;
use rustc_hash::FxHashSet;
use crate::coordinates::clamp;
use crate::coordinates::square::{ self, Point, CORNER_CYCLE };
use crate::flood::{ MOVE_REACHABLE_MIN, MOVE_UNREACHABLE };
use crate::grid::{ Grid2D, GridOutput, OutputMode };

/// Attack/assailable-field value of a tile out of scope.
pub const ATTACK_BLOCKED : i32 = 0;

/// Attack-field value of a strikeable tile.
pub const ATTACK_IN_RANGE : i32 = 1;

/// Whether attack-from-move keeps or drops the movement tiles themselves.
#[ derive( Debug, Clone, Copy, PartialEq, Eq ) ]
pub enum MoveTile
{
  /// Movement tiles may appear in the attack field.
  Include,
  /// Only tiles outside the movement field are in scope.
  Exclude,
}

/// Builds the set of tiles strikeable at a Manhattan distance in `range`
/// from any tile of the movement field.
///
/// Every occupied field tile is expanded by each `( Δx, Δy )`
/// decomposition of the range interval, mirrored into all four sign
/// quadrants and clamped to bounds. In [`MoveTile::Exclude`] mode only
/// tiles the movement field cannot reach stay in scope.
pub fn attack_field( movement : &Grid2D< i32 >, range : RangeInclusive< i32 >, mode : OutputMode, move_tile : MoveTile ) -> GridOutput
{
  log::trace!( "attack_field range={:?} move_tile={:?}", range, move_tile );
  let rows = movement.rows() as i32;
  let cols = movement.cols() as i32;
  let ( lo, hi ) = ( *range.start(), *range.end() );
  let mut field = Grid2D::filled( movement.rows(), movement.cols(), ATTACK_BLOCKED );
  let mut list : Vec< Point > = Vec::new();
  let mut emitted : FxHashSet< ( i32, i32 ) > = FxHashSet::default();

  if !range.is_empty()
  {
    for position in movement.occupied()
    {
      for range_x in 0 ..= hi
      {
        let sub_lo = if range_x > lo { 0 } else { lo - range_x };
        let sub_hi = hi - range_x;
        for range_y in sub_lo ..= sub_hi
        {
          for &( sign_x, sign_y ) in CORNER_CYCLE.iter()
          {
            let tile = Point::new
            (
              clamp( position.x + sign_x * range_x, 0, cols - 1 ),
              clamp( position.y + sign_y * range_y, 0, rows - 1 ),
            );
            if move_tile == MoveTile::Exclude && movement[ tile ] != MOVE_UNREACHABLE
            {
              continue;
            }
            match mode
            {
              OutputMode::Matrix => field[ tile ] = ATTACK_IN_RANGE,
              OutputMode::List =>
              {
                if emitted.insert( ( tile.x, tile.y ) )
                {
                  list.push( tile );
                }
              }
            }
          }
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

/// Builds the subset of a movement field from which `target` can be
/// struck at a Manhattan distance in `range`.
///
/// Sweeps the shell perimeter around the target for each distance in the
/// interval; a perimeter tile is in scope iff the movement field reaches
/// it. Matrix mode stores the ring distance the tile was last swept at.
/// An out-of-bounds target yields an empty map.
pub fn assail_field( movement : &Grid2D< i32 >, target : Point, range : RangeInclusive< i32 >, mode : OutputMode ) -> GridOutput
{
  log::trace!( "assail_field target=({},{}) range={:?}", target.x, target.y, range );
  let rows = movement.rows() as i32;
  let cols = movement.cols() as i32;
  let mut field = Grid2D::filled( movement.rows(), movement.cols(), ATTACK_BLOCKED );
  let mut list : Vec< Point > = Vec::new();
  let mut emitted : FxHashSet< ( i32, i32 ) > = FxHashSet::default();

  if movement.contains( target )
  {
    for distance in range
    {
      for k in 0 .. distance * 4
      {
        let ( dx, dy ) = square::shell_offset( distance, k );
        let delta = Point::new
        (
          clamp( dx, -target.x, cols - 1 - target.x ),
          clamp( dy, -target.y, rows - 1 - target.y ),
        );
        let tile = target + delta;
        if movement[ tile ] < MOVE_REACHABLE_MIN
        {
          continue;
        }
        match mode
        {
          OutputMode::Matrix => field[ tile ] = distance,
          OutputMode::List =>
          {
            if emitted.insert( ( tile.x, tile.y ) )
            {
              list.push( tile );
            }
          }
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
  fn empty_range_yields_empty_map()
  {
    let mut movement = Grid2D::filled( 5, 5, 0 );
    movement[ Point::new( 2, 2 ) ] = 1;
    let field = attack_field( &movement, 2 ..= 1, OutputMode::Matrix, MoveTile::Include )
      .into_matrix()
      .unwrap();
    assert!( field.iter().all( | &cell | cell == ATTACK_BLOCKED ) );
    let list = assail_field( &movement, Point::new( 2, 2 ), 2 ..= 1, OutputMode::List )
      .into_list()
      .unwrap();
    assert!( list.is_empty() );
  }

  #[ test ]
  fn single_tile_range_one_strikes_its_four_neighbours()
  {
    let mut movement = Grid2D::filled( 5, 5, 0 );
    movement[ Point::new( 2, 2 ) ] = 1;
    let list = attack_field( &movement, 1 ..= 1, OutputMode::List, MoveTile::Exclude )
      .into_list()
      .unwrap();
    assert_eq!( list.len(), 4 );
    for tile in list
    {
      assert_eq!( ( tile.x - 2 ).abs() + ( tile.y - 2 ).abs(), 1 );
    }
  }

  #[ test ]
  fn matrix_mode_stores_the_ring_distance()
  {
    let mut movement = Grid2D::filled( 7, 7, 0 );
    movement[ Point::new( 1, 3 ) ] = 3;
    let field = assail_field( &movement, Point::new( 3, 3 ), 1 ..= 3, OutputMode::Matrix )
      .into_matrix()
      .unwrap();
    assert_eq!( field[ Point::new( 1, 3 ) ], 2 );
  }
}

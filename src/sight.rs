//! Line-of-sight fields over opacity grids.
//!
//! The sweep is shell-by-shell raycasting: for each ring of tiles at
//! distance `d` from the observer, a straight segment toward every
//! perimeter tile is sampled at the `d - 1` interior step counts, each
//! sample rounded to the nearest tile. A tile with an unobstructed
//! segment becomes `visible`, or `wall` when the tile itself is opaque;
//! everything else stays `blocked`. Ring tiles are enumerated by
//! composing the cardinal and corner cycles, so every in-range tile is
//! visited exactly once.

use rustc_hash::FxHashSet;
use crate::coordinates::clamp;
use crate::coordinates::square::{ self, Point };
use crate::coordinates::hexagonal::{ self, Cube };
use crate::grid::{ Grid2D, GridOutput, HexGridOutput, OutputMode };

/// Block-grid cells at or above this value occlude sight.
pub const BLOCK_OPAQUE_MIN : i32 = 1;

/// Sight-field value of a tile with no line of sight to the observer.
pub const SIGHT_BLOCKED : i32 = 0;

/// Sight-field value of a visible, transparent tile.
pub const SIGHT_VISIBLE : i32 = 1;

/// Sight-field value of the observer's own tile.
pub const SIGHT_OBSERVER : i32 = 2;

/// Sight-field value of an opaque tile that is itself in line of sight.
pub const SIGHT_WALL : i32 = 3;

/// Builds the sight field of an observer at `start` with the given sight
/// radius over a square block grid.
///
/// Matrix mode marks the observer tile, visible tiles, and in-sight
/// walls; untouched cells stay [`SIGHT_BLOCKED`]. List mode emits every
/// marked perimeter tile (visible or wall) in sweep order, without the
/// observer tile. An out-of-bounds observer yields an empty field.
pub fn sight_field( block : &Grid2D< i32 >, start : Point, sight : i32, mode : OutputMode ) -> GridOutput
{
  log::trace!( "sight_field start=({},{}) sight={}", start.x, start.y, sight );
  let rows = block.rows() as i32;
  let cols = block.cols() as i32;
  let mut field = Grid2D::filled( block.rows(), block.cols(), SIGHT_BLOCKED );
  let mut list : Vec< Point > = Vec::new();
  let mut emitted : FxHashSet< ( i32, i32 ) > = FxHashSet::default();

  if block.contains( start )
  {
    field[ start ] = SIGHT_OBSERVER;
    for distance in 1 ..= sight
    {
      for k in 0 .. distance * 4
      {
        let ( dx, dy ) = square::shell_offset( distance, k );
        let delta = Point::new
        (
          clamp( dx, -start.x, cols - 1 - start.x ),
          clamp( dy, -start.y, rows - 1 - start.y ),
        );
        let tile = start + delta;
        if tile == start
        {
          continue;
        }
        let mut visible = true;
        for step in 1 .. distance
        {
          let interpolated = Point::new
          (
            start.x + interpolate( step, delta.x, distance ),
            start.y + interpolate( step, delta.y, distance ),
          );
          if interpolated != start && block[ interpolated ] >= BLOCK_OPAQUE_MIN
          {
            visible = false;
            break;
          }
        }
        if !visible
        {
          continue;
        }
        let mark = if block[ tile ] >= BLOCK_OPAQUE_MIN { SIGHT_WALL } else { SIGHT_VISIBLE };
        match mode
        {
          OutputMode::Matrix => field[ tile ] = mark,
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

/// Hexagonal variant of [`sight_field`], sweeping the six-per-ring
/// perimeter on the `( z, x )` storage plane.
pub fn sight_field_hex( block : &Grid2D< i32 >, start : Cube, sight : i32, mode : OutputMode ) -> HexGridOutput
{
  log::trace!( "sight_field_hex start=({},{},{}) sight={}", start.x, start.y, start.z, sight );
  let rows = block.rows() as i32;
  let cols = block.cols() as i32;
  let mut field = Grid2D::filled( block.rows(), block.cols(), SIGHT_BLOCKED );
  let mut list : Vec< Cube > = Vec::new();
  let mut emitted : FxHashSet< ( i32, i32 ) > = FxHashSet::default();

  if block.contains_hex( start )
  {
    field[ start ] = SIGHT_OBSERVER;
    for distance in 1 ..= sight
    {
      for k in 0 .. distance * 6
      {
        let ( dx, dz ) = hexagonal::shell_offset( distance, k );
        let delta_x = clamp( dx, -start.x, cols - 1 - start.x );
        let delta_z = clamp( dz, -start.z, rows - 1 - start.z );
        let tile = Cube::new( start.x + delta_x, start.z + delta_z );
        if tile == start
        {
          continue;
        }
        let mut visible = true;
        for step in 1 .. distance
        {
          let interpolated = Cube::new
          (
            start.x + interpolate( step, delta_x, distance ),
            start.z + interpolate( step, delta_z, distance ),
          );
          if interpolated != start && block[ interpolated ] >= BLOCK_OPAQUE_MIN
          {
            visible = false;
            break;
          }
        }
        if !visible
        {
          continue;
        }
        let mark = if block[ tile ] >= BLOCK_OPAQUE_MIN { SIGHT_WALL } else { SIGHT_VISIBLE };
        match mode
        {
          OutputMode::Matrix => field[ tile ] = mark,
          OutputMode::List =>
          {
            if emitted.insert( ( tile.x, tile.z ) )
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
    OutputMode::Matrix => HexGridOutput::Matrix( field ),
    OutputMode::List => HexGridOutput::List( list ),
  }
}

/// Nearest-tile sample of a ray component at `step` of `distance` total
/// steps, rounding halves away from zero.
fn interpolate( step : i32, delta : i32, distance : i32 ) -> i32
{
  if delta == 0
  {
    return 0;
  }
  ( ( step * delta ) as f32 / distance as f32 ).round() as i32
}

#[ cfg( test ) ]
mod tests
{
  use super::*;

  #[ test ]
  fn interpolation_rounds_halves_away_from_zero()
  {
    assert_eq!( interpolate( 3, 3, 6 ), 2 ); // 1.5 -> 2
    assert_eq!( interpolate( 3, -3, 6 ), -2 ); // -1.5 -> -2
    assert_eq!( interpolate( 1, 2, 6 ), 0 ); // 0.33 -> 0
    assert_eq!( interpolate( 5, 0, 6 ), 0 );
  }

  #[ test ]
  fn open_ground_is_fully_visible()
  {
    let block = Grid2D::filled( 9, 9, 0 );
    let start = Point::new( 4, 4 );
    let field = sight_field( &block, start, 3, OutputMode::Matrix )
      .into_matrix()
      .unwrap();
    assert_eq!( field[ start ], SIGHT_OBSERVER );
    for distance in 1 ..= 3
    {
      for k in 0 .. distance * 4
      {
        let ( dx, dy ) = square::shell_offset( distance, k );
        assert_eq!( field[ Point::new( 4 + dx, 4 + dy ) ], SIGHT_VISIBLE );
      }
    }
    assert_eq!( field[ Point::new( 0, 4 ) ], SIGHT_BLOCKED ); // out of radius
  }

  #[ test ]
  fn single_wall_casts_a_shadow()
  {
    let mut block = Grid2D::filled( 9, 9, 0 );
    block[ Point::new( 6, 4 ) ] = 1;
    let field = sight_field( &block, Point::new( 4, 4 ), 4, OutputMode::Matrix )
      .into_matrix()
      .unwrap();
    assert_eq!( field[ Point::new( 6, 4 ) ], SIGHT_WALL );
    assert_eq!( field[ Point::new( 7, 4 ) ], SIGHT_BLOCKED );
    assert_eq!( field[ Point::new( 8, 4 ) ], SIGHT_BLOCKED );
  }
}

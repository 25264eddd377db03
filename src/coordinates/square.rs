//! Square grid coordinate system with four-connected movement.
//!
//! Positions use Cartesian `( x, y )` where `x` indexes columns and `y`
//! indexes rows; row-major storage means `y` grows downward, so the
//! "top" neighbour of a tile is the one at `y - 1`. Movement is
//! orthogonal only, and distance is the Manhattan metric.
//!
//! # Examples
//!
//! ```rust
//! use tactics_tools::coordinates::square::Point;
//! use tactics_tools::coordinates::{ Distance, Neighbors };
//!
//! let point = Point::new( 2, 3 );
//! let other = Point::new( 5, 7 );
//! assert_eq!( point.distance( &other ), 7 ); // |5-2| + |7-3|
//! assert_eq!( point.neighbors().len(), 4 );
//! ```

use crate::coordinates::{ Distance, Neighbors };
use serde::{ Deserialize, Serialize };

/// A position on a square grid.
#[ derive( Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default ) ]
pub struct Point
{
  /// The x-coordinate (column).
  pub x : i32,
  /// The y-coordinate (row).
  pub y : i32,
}

impl Point
{
  /// Creates a new square-grid point.
  pub const fn new( x : i32, y : i32 ) -> Self
  {
    Self { x, y }
  }
}

impl From< ( i32, i32 ) > for Point
{
  fn from( ( x, y ) : ( i32, i32 ) ) -> Self
  {
    Self::new( x, y )
  }
}

impl From< [ i32; 2 ] > for Point
{
  fn from( [ x, y ] : [ i32; 2 ] ) -> Self
  {
    Self::new( x, y )
  }
}

impl From< Point > for ( i32, i32 )
{
  fn from( point : Point ) -> Self
  {
    ( point.x, point.y )
  }
}

impl std::ops::Add for Point
{
  type Output = Self;

  /// Adds two points (vector addition).
  fn add( self, rhs : Self ) -> Self::Output
  {
    Self::new( self.x + rhs.x, self.y + rhs.y )
  }
}

impl std::ops::Sub for Point
{
  type Output = Self;

  /// Subtracts two points (vector subtraction).
  fn sub( self, rhs : Self ) -> Self::Output
  {
    Self::new( self.x - rhs.x, self.y - rhs.y )
  }
}

impl std::ops::Mul< i32 > for Point
{
  type Output = Self;

  /// Scales a point by an integer factor.
  fn mul( self, rhs : i32 ) -> Self::Output
  {
    Self::new( self.x * rhs, self.y * rhs )
  }
}

impl Distance for Point
{
  /// Manhattan distance: the number of orthogonal steps between two tiles.
  fn distance( &self, other : &Self ) -> u32
  {
    ( ( self.x - other.x ).abs() + ( self.y - other.y ).abs() ) as u32
  }
}

impl Neighbors for Point
{
  /// Returns the four orthogonal neighbours in cycle order:
  /// left, top, right, bottom.
  fn neighbors( &self ) -> Vec< Self >
  {
    CARDINAL_CYCLE
      .iter()
      .map( | &( dx, dy ) | Self::new( self.x + dx, self.y + dy ) )
      .collect()
  }
}

/// The four cardinal unit offsets in the fixed rotational order used by
/// floods and path descent: left, top, right, bottom.
pub const CARDINAL_CYCLE : [ ( i32, i32 ); 4 ] =
[
  ( -1, 0 ),
  ( 0, -1 ),
  ( 1, 0 ),
  ( 0, 1 ),
];

/// The four diagonal-corner unit offsets, indexed to pair with
/// [`CARDINAL_CYCLE`] when sweeping a shell perimeter. Entry `i` walks
/// along the shell edge whose outer vertex `CARDINAL_CYCLE[ i ]` points at.
pub const CORNER_CYCLE : [ ( i32, i32 ); 4 ] =
[
  ( 1, 1 ),
  ( -1, 1 ),
  ( -1, -1 ),
  ( 1, -1 ),
];

/// Offset of the `k`-th tile on the Manhattan shell of radius `distance`.
///
/// `k` ranges over `0 .. 4 * distance`; each of the `4 * distance` shell
/// tiles is produced exactly once, arm by arm: tile `k` starts at vertex
/// `distance * CARDINAL_CYCLE[ k % 4 ]` and slides `k / 4` steps along
/// `CORNER_CYCLE[ k % 4 ]`.
pub fn shell_offset( distance : i32, k : i32 ) -> ( i32, i32 )
{
  let side = ( k % 4 ) as usize;
  let step = k / 4;
  let ( cx, cy ) = CARDINAL_CYCLE[ side ];
  let ( kx, ky ) = CORNER_CYCLE[ side ];
  ( distance * cx + step * kx, distance * cy + step * ky )
}

#[ cfg( test ) ]
mod tests
{
  use super::*;
  use std::collections::HashSet;

  #[ test ]
  fn cardinal_offsets_are_unit_orthogonal()
  {
    for ( dx, dy ) in CARDINAL_CYCLE
    {
      assert_eq!( dx.abs() + dy.abs(), 1 );
    }
    for ( dx, dy ) in CORNER_CYCLE
    {
      assert_eq!( ( dx.abs(), dy.abs() ), ( 1, 1 ) );
    }
  }

  #[ test ]
  fn shell_enumerates_each_ring_tile_once()
  {
    for distance in 1 ..= 6
    {
      let tiles : HashSet< _ > = ( 0 .. 4 * distance )
        .map( | k | shell_offset( distance, k ) )
        .collect();
      assert_eq!( tiles.len(), ( 4 * distance ) as usize );
      for ( dx, dy ) in tiles
      {
        assert_eq!( dx.abs() + dy.abs(), distance );
      }
    }
  }
}

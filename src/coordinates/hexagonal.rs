//! Hexagonal grid coordinate system in cube coordinates.
//!
//! A hex position is `( x, y, z )` with the cube invariant
//! `x + y + z = 0`. Row-major storage uses the `( z, x )` plane: `z` is
//! the row and `x` the column, so only those two components appear in
//! grid indexing; `y` is derived.

use crate::coordinates::{ Distance, Neighbors };
use serde::{ Deserialize, Serialize };

/// A hexagonal grid position in cube coordinates.
#[ derive( Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default ) ]
pub struct Cube
{
  /// The x-coordinate (column on the storage plane).
  pub x : i32,
  /// The derived coordinate, `-x - z`.
  pub y : i32,
  /// The z-coordinate (row on the storage plane).
  pub z : i32,
}

impl Cube
{
  /// Creates a cube coordinate from its storage-plane components,
  /// deriving `y` from the cube invariant.
  pub const fn new( x : i32, z : i32 ) -> Self
  {
    Self { x, y : -x - z, z }
  }
}

impl From< ( i32, i32 ) > for Cube
{
  /// Creates a cube coordinate from a storage-plane `( x, z )` pair.
  fn from( ( x, z ) : ( i32, i32 ) ) -> Self
  {
    Self::new( x, z )
  }
}

impl std::ops::Add for Cube
{
  type Output = Self;

  fn add( self, rhs : Self ) -> Self::Output
  {
    Self::new( self.x + rhs.x, self.z + rhs.z )
  }
}

impl std::ops::Sub for Cube
{
  type Output = Self;

  fn sub( self, rhs : Self ) -> Self::Output
  {
    Self::new( self.x - rhs.x, self.z - rhs.z )
  }
}

impl Distance for Cube
{
  /// Hexagonal grid distance: half the cube-component L1 norm.
  fn distance( &self, other : &Self ) -> u32
  {
    let dx = ( self.x - other.x ).abs();
    let dy = ( self.y - other.y ).abs();
    let dz = ( self.z - other.z ).abs();
    ( ( dx + dy + dz ) / 2 ) as u32
  }
}

impl Neighbors for Cube
{
  /// Returns the six neighbours in cycle order.
  fn neighbors( &self ) -> Vec< Self >
  {
    HEX_CYCLE
      .iter()
      .map( | &( dx, dz ) | Self::new( self.x + dx, self.z + dz ) )
      .collect()
  }
}

/// The six neighbour unit offsets `( dx, dz )` in the fixed rotational
/// order used by the hex flood and sight sweep. Each entry moves exactly
/// two cube components in opposite directions.
pub const HEX_CYCLE : [ ( i32, i32 ); 6 ] =
[
  ( -1, 1 ),
  ( 1, -1 ),
  ( 1, 0 ),
  ( -1, 0 ),
  ( 0, -1 ),
  ( 0, 1 ),
];

/// Offset of the `k`-th tile on the hex shell of radius `distance`.
///
/// `k` ranges over `0 .. 6 * distance`; tile `k` starts at vertex
/// `distance * HEX_CYCLE[ k % 6 ]` and slides `k / 6` steps along the
/// cycle entry two positions ahead, producing each of the `6 * distance`
/// ring tiles exactly once.
pub fn shell_offset( distance : i32, k : i32 ) -> ( i32, i32 )
{
  let side = ( k % 6 ) as usize;
  let step = k / 6;
  let ( cx, cz ) = HEX_CYCLE[ side ];
  let ( kx, kz ) = HEX_CYCLE[ ( side + 2 ) % 6 ];
  ( distance * cx + step * kx, distance * cz + step * kz )
}

#[ cfg( test ) ]
mod tests
{
  use super::*;
  use std::collections::HashSet;

  #[ test ]
  fn cube_invariant_holds()
  {
    let cube = Cube::new( 10, 6 );
    assert_eq!( cube.x + cube.y + cube.z, 0 );
    for neighbor in cube.neighbors()
    {
      assert_eq!( neighbor.x + neighbor.y + neighbor.z, 0 );
      assert_eq!( cube.distance( &neighbor ), 1 );
    }
  }

  #[ test ]
  fn shell_enumerates_each_ring_tile_once()
  {
    let center = Cube::new( 0, 0 );
    for distance in 1 ..= 6
    {
      let tiles : HashSet< _ > = ( 0 .. 6 * distance )
        .map( | k | shell_offset( distance, k ) )
        .collect();
      assert_eq!( tiles.len(), ( 6 * distance ) as usize );
      for ( dx, dz ) in tiles
      {
        assert_eq!( center.distance( &Cube::new( dx, dz ) ), distance as u32 );
      }
    }
  }
}

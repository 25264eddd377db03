//! Dense row-major grid storage shared by every field operation, plus
//! the output-shape types map-producing operations return.

use std::ops::{ Index, IndexMut };
use ndarray_cg::Array2;
use crate::coordinates::square::Point;
use crate::coordinates::hexagonal::Cube;

/// A dense `rows × cols` grid of cells.
///
/// Storage is row-major: `cell( row, col ) = row * cols + col`. The grid
/// is indexable three ways:
/// - by square [`Point`], reading `( x, y )` as `( col, row )`;
/// - by hex [`Cube`], reading the `( z, x )` storage plane as
///   `( row, col )`;
/// - by a raw `( row, col )` pair.
#[ derive( Debug, Clone, PartialEq, Eq ) ]
pub struct Grid2D< T >
{
  data : Array2< T >,
}

impl< T > Grid2D< T >
{
  /// Creates a grid with every cell set to `value`.
  pub fn filled( rows : usize, cols : usize, value : T ) -> Self
  where
    T : Clone,
  {
    Self { data : Array2::from_elem( ( rows, cols ), value ) }
  }

  /// Creates a grid by calling `f( row, col )` for every cell.
  pub fn from_fn< F >( rows : usize, cols : usize, f : F ) -> Self
  where
    F : FnMut( ( usize, usize ) ) -> T,
  {
    Self { data : Array2::from_shape_fn( ( rows, cols ), f ) }
  }

  /// Creates a grid from a flat row-major cell vector.
  ///
  /// # Panics
  ///
  /// Panics if `cells.len() != rows * cols`.
  pub fn from_flat( rows : usize, cols : usize, cells : Vec< T > ) -> Self
  {
    Self { data : Array2::from_shape_vec( ( rows, cols ), cells ).unwrap() }
  }

  /// The number of rows.
  pub fn rows( &self ) -> usize
  {
    self.data.nrows()
  }

  /// The number of columns.
  pub fn cols( &self ) -> usize
  {
    self.data.ncols()
  }

  /// Whether a square point lies inside the grid.
  pub fn contains( &self, point : Point ) -> bool
  {
    point.x >= 0 && ( point.x as usize ) < self.cols()
      && point.y >= 0 && ( point.y as usize ) < self.rows()
  }

  /// Whether a hex point lies inside the grid's storage plane.
  pub fn contains_hex( &self, cube : Cube ) -> bool
  {
    cube.x >= 0 && ( cube.x as usize ) < self.cols()
      && cube.z >= 0 && ( cube.z as usize ) < self.rows()
  }

  /// Returns a reference to the cell at a square point, if in bounds.
  pub fn get( &self, point : Point ) -> Option< &T >
  {
    if !self.contains( point )
    {
      return None;
    }
    self.data.get( ( point.y as usize, point.x as usize ) )
  }

  /// Iterates over all cells in row-major order.
  pub fn iter( &self ) -> impl Iterator< Item = &T >
  {
    self.data.iter()
  }
}

impl Grid2D< i32 >
{
  /// Extracts the positive cells as a packed point list.
  ///
  /// The scan is column-major (column outer, row inner), matching the
  /// order field consumers iterate occupied tiles in.
  pub fn occupied( &self ) -> Vec< Point >
  {
    let mut list = Vec::new();
    for col in 0 .. self.cols()
    {
      for row in 0 .. self.rows()
      {
        if self.data[ ( row, col ) ] > 0
        {
          list.push( Point::new( col as i32, row as i32 ) );
        }
      }
    }
    list
  }
}

impl< T > Index< Point > for Grid2D< T >
{
  type Output = T;

  fn index( &self, point : Point ) -> &Self::Output
  {
    &self.data[ ( point.y as usize, point.x as usize ) ]
  }
}

impl< T > IndexMut< Point > for Grid2D< T >
{
  fn index_mut( &mut self, point : Point ) -> &mut Self::Output
  {
    &mut self.data[ ( point.y as usize, point.x as usize ) ]
  }
}

impl< T > Index< Cube > for Grid2D< T >
{
  type Output = T;

  fn index( &self, cube : Cube ) -> &Self::Output
  {
    &self.data[ ( cube.z as usize, cube.x as usize ) ]
  }
}

impl< T > IndexMut< Cube > for Grid2D< T >
{
  fn index_mut( &mut self, cube : Cube ) -> &mut Self::Output
  {
    &mut self.data[ ( cube.z as usize, cube.x as usize ) ]
  }
}

impl< T > Index< ( usize, usize ) > for Grid2D< T >
{
  type Output = T;

  fn index( &self, index : ( usize, usize ) ) -> &Self::Output
  {
    &self.data[ index ]
  }
}

impl< T > IndexMut< ( usize, usize ) > for Grid2D< T >
{
  fn index_mut( &mut self, index : ( usize, usize ) ) -> &mut Self::Output
  {
    &mut self.data[ index ]
  }
}

/// Selects the shape a map-producing operation returns.
#[ derive( Debug, Clone, Copy, PartialEq, Eq ) ]
pub enum OutputMode
{
  /// Dense grid sized like the input.
  Matrix,
  /// Packed sequence of in-scope tiles in discovery order.
  List,
}

/// Output of a square-grid field operation.
#[ derive( Debug, Clone, PartialEq, Eq ) ]
pub enum GridOutput
{
  /// Dense `rows × cols` field.
  Matrix( Grid2D< i32 > ),
  /// In-scope tiles in discovery order.
  List( Vec< Point > ),
}

impl GridOutput
{
  /// Unwraps the matrix form.
  pub fn into_matrix( self ) -> Option< Grid2D< i32 > >
  {
    match self
    {
      Self::Matrix( field ) => Some( field ),
      Self::List( _ ) => None,
    }
  }

  /// Unwraps the list form.
  pub fn into_list( self ) -> Option< Vec< Point > >
  {
    match self
    {
      Self::Matrix( _ ) => None,
      Self::List( list ) => Some( list ),
    }
  }
}

/// Output of a hex-grid field operation.
#[ derive( Debug, Clone, PartialEq, Eq ) ]
pub enum HexGridOutput
{
  /// Dense `rows × cols` field on the `( z, x )` plane.
  Matrix( Grid2D< i32 > ),
  /// In-scope tiles in discovery order.
  List( Vec< Cube > ),
}

impl HexGridOutput
{
  /// Unwraps the matrix form.
  pub fn into_matrix( self ) -> Option< Grid2D< i32 > >
  {
    match self
    {
      Self::Matrix( field ) => Some( field ),
      Self::List( _ ) => None,
    }
  }

  /// Unwraps the list form.
  pub fn into_list( self ) -> Option< Vec< Cube > >
  {
    match self
    {
      Self::Matrix( _ ) => None,
      Self::List( list ) => Some( list ),
    }
  }
}

#[ cfg( test ) ]
mod tests
{
  use super::*;

  #[ test ]
  fn point_and_raw_indexing_agree()
  {
    let mut grid = Grid2D::filled( 3, 4, 0 );
    grid[ Point::new( 2, 1 ) ] = 7;
    assert_eq!( grid[ ( 1, 2 ) ], 7 );
    assert_eq!( grid.rows(), 3 );
    assert_eq!( grid.cols(), 4 );
  }

  #[ test ]
  fn cube_indexing_uses_the_zx_plane()
  {
    let mut grid = Grid2D::filled( 3, 4, 0 );
    grid[ Cube::new( 3, 2 ) ] = 9; // column 3, row 2
    assert_eq!( grid[ ( 2, 3 ) ], 9 );
  }

  #[ test ]
  fn occupied_scans_column_major()
  {
    let mut grid = Grid2D::filled( 3, 3, 0 );
    grid[ Point::new( 0, 2 ) ] = 1;
    grid[ Point::new( 1, 0 ) ] = 1;
    grid[ Point::new( 1, 1 ) ] = 1;
    assert_eq!
    (
      grid.occupied(),
      vec![ Point::new( 0, 2 ), Point::new( 1, 0 ), Point::new( 1, 1 ) ]
    );
  }
}

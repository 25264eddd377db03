//! # ⚔️ Tactics Tools

#![ allow( clippy::implicit_return ) ]
#![ allow( clippy::missing_inline_in_public_items ) ]
#![ allow( clippy::default_numeric_fallback ) ]
#![ allow( clippy::wildcard_imports ) ]
#![ allow( clippy::arithmetic_side_effects ) ]
#![ allow( clippy::indexing_slicing ) ]
#![ allow( clippy::std_instead_of_core ) ]
#![ allow( clippy::needless_return ) ]
#![ allow( clippy::return_self_not_must_use ) ]
#![ allow( clippy::missing_docs_in_private_items ) ]
#![ allow( clippy::module_name_repetitions ) ]
#![ allow( clippy::too_many_lines ) ]
#![ allow( clippy::missing_errors_doc ) ]
#![ allow( clippy::else_if_without_else ) ]
#![ allow( clippy::must_use_candidate ) ]
#![ allow( clippy::min_ident_chars ) ]
#![ allow( clippy::exhaustive_structs ) ]
#![ allow( clippy::exhaustive_enums ) ]
#![ allow( clippy::cast_possible_truncation ) ]
#![ allow( clippy::cast_precision_loss ) ]
#![ allow( clippy::cast_sign_loss ) ]
#![ allow( clippy::cast_possible_wrap ) ]
#![ allow( clippy::many_single_char_names ) ]
#![ allow( clippy::needless_range_loop ) ]
#![ allow( clippy::uninlined_format_args ) ]

//! # ⚔️ Tactics Tools
//!
//! **Grid Pathfinding & Visibility Toolkit for Tactical Games**
//!
//! A library of grid-based pathfinding, visibility, and reachability
//! algorithms for tile-based tactical games. Given a two-dimensional tile
//! grid annotated with per-tile movement costs or obstacles, it computes,
//! from any origin, movement fields under a budget, line-of-sight fields,
//! attack and assailable ranges, push/pull mechanics, multi-source gradient
//! fields, and shortest paths over previously computed fields.
//!
//! ## ✨ Core Features
//!
//! - **🗺️ Two Topologies**: four-neighbour square grids and six-neighbour
//!   hexagonal grids (cube coordinates on the `( z, x )` storage plane)
//! - **🏃 Movement Fields**: Dijkstra-style flood over weighted cost grids,
//!   bounded by a movement budget
//! - **👁️ Sight Fields**: shell-by-shell raycasting with interpolated
//!   line-of-sight and wall detection
//! - **⚔️ Attack & Assail Ranges**: which tiles a unit can strike after
//!   moving, and which tiles a given target can be struck from
//! - **🥊 Push/Pull Mechanics**: direction classification, block-distance
//!   probing, and sliding-destination projection
//! - **🌊 Unit Gradients**: minimum distance to the nearest of many units,
//!   in one merged flood
//! - **🧭 Path Reconstruction**: gradient-descent walk over a movement
//!   field, as absolute positions or step deltas
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use tactics_tools::grid::{ Grid2D, OutputMode };
//! use tactics_tools::coordinates::square::Point;
//! use tactics_tools::flood::movement_field;
//! use tactics_tools::path::{ reconstruct_path, PathMode };
//!
//! // A 10×10 map where every tile costs 1 to enter.
//! let cost = Grid2D::filled( 10, 10, 1 );
//!
//! // Everything reachable from (4, 4) with 3 movement points.
//! let field = movement_field( &cost, Point::new( 4, 4 ), 3, OutputMode::Matrix )
//!     .into_matrix()
//!     .unwrap();
//! assert_eq!( field[ Point::new( 4, 4 ) ], 1 ); // origin holds cost 0 + 1
//! assert_eq!( field[ Point::new( 4, 7 ) ], 4 ); // three tiles away
//!
//! // Walk back from a destination to the origin.
//! let path = reconstruct_path( &field, Point::new( 4, 4 ), Point::new( 6, 5 ), PathMode::Absolute );
//! assert!( path.is_ok() );
//! ```
//!
//! ## 🎯 Grid-Map Conventions
//!
//! Every operation reads or writes dense row-major [`grid::Grid2D`] fields
//! that share a small set of cell conventions:
//!
//! | Field | Convention |
//! |-------|------------|
//! | cost grid | `0` = blocked, `≥ 1` = cost of entering the tile |
//! | movement field | `0` = unreachable, `1` = origin, `n + 1` = `n` accumulated cost |
//! | block grid | `0` = transparent, `≥ 1` = opaque |
//! | sight field | `0` blocked, `1` visible, `2` observer, `3` wall |
//! | attack / assailable field | `0` = out of scope, positive = in scope |
//! | push/pull & gradient fields | `-1` = blocked, `0` = origin/seed, positive = distance |
//!
//! Map-producing operations accept an [`grid::OutputMode`]: a dense matrix
//! sized like the input, or a packed list of in-scope tiles in discovery
//! order.
//!
//! ## 🏗️ Architecture
//!
//! The neighbour cycles in [`coordinates`] are the load-bearing primitive:
//! every flood, perimeter sweep, and descent walks tiles in the fixed
//! rotational order they define, so equal inputs always produce identical
//! outputs. All operations are pure functions of their inputs: no global
//! state, no interior mutability, single-threaded.

#![ cfg_attr( not( feature = "enabled" ), allow( unused ) ) ]

#[ cfg( feature = "enabled" ) ]
pub mod coordinates;

#[ cfg( feature = "enabled" ) ]
pub mod grid;

#[ cfg( feature = "enabled" ) ]
pub mod flood;

#[ cfg( feature = "enabled" ) ]
pub mod sight;

#[ cfg( feature = "enabled" ) ]
pub mod attack;

#[ cfg( feature = "enabled" ) ]
pub mod pushpull;

#[ cfg( feature = "enabled" ) ]
pub mod gradient;

#[ cfg( feature = "enabled" ) ]
pub mod path;

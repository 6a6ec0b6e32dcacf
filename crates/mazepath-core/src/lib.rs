//! **mazepath-core** — grid and coordinate types for maze pathfinding.
//!
//! This crate provides the foundational types shared by the *mazepath*
//! search engine: the [`Coord`] cell address and the immutable blocked-cell
//! [`Grid`].

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Coord;
pub use grid::Grid;

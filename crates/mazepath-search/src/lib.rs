//! Entry-to-target path search on blocked-cell grids.
//!
//! This crate finds a path between two cells of a [`Grid`](mazepath_core::Grid)
//! and reports it as a sequence of [`Move`]s:
//!
//! - **A\*** best-first search with a Euclidean or Manhattan [`Heuristic`]
//!   ([`Strategy::AStar`])
//! - **IDA\*** iterative deepening with a Manhattan cost bound
//!   ([`Strategy::IdaStar`])
//!
//! Both run through [`Search`], which owns the grid and the exploration
//! state, times the run, and counts settled cells.
//!
//! ```
//! use mazepath_core::{Coord, Grid};
//! use mazepath_search::{Heuristic, Search, Strategy};
//!
//! let grid = Grid::open(3, 3);
//! let mut search = Search::new(
//!     grid,
//!     Coord::new(0, 0),
//!     Coord::new(2, 2),
//!     Strategy::AStar(Heuristic::Manhattan),
//! )?;
//! search.run();
//! assert_eq!(search.reconstruct_path()?.len(), 4);
//! # Ok::<(), mazepath_search::SearchError>(())
//! ```
//!
//! | Strategy | Frontier | Score | Memory |
//! |---|---|---|---|
//! | A\* | min-heap on `cost + h` | `f64` | every generated node |
//! | IDA\* | FIFO queue, one pass at a time | `i32` | nodes of the current pass |

mod astar;
mod config;
mod distance;
mod error;
mod heuristic;
mod idastar;
mod moves;
mod node;
mod search;

pub use config::{SearchConfig, StrategyKind};
pub use distance::{euclidean, manhattan};
pub use error::{InvalidReason, Result, SearchError};
pub use heuristic::Heuristic;
pub use moves::{Move, Path};
pub use node::{NodeId, Score, SearchNode};
pub use search::{Outcome, Search, SearchReport, Strategy};

//! Fixed-depth game tree search for chess.
//!
//! A heuristic [`evaluators::heuristic::HeuristicEvaluator`] scores positions
//! and [`algos::search`] runs minimax with alpha-beta pruning over any
//! [`core::position::GamePosition`]. [`games::chess::ChessBoard`] plugs the
//! shakmaty rules engine in, and [`engine::Engine`] ties everything to a
//! configuration for drivers.

pub mod algos;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod evaluators;
pub mod games;

pub use algos::search;
pub use error::{Error, Result};

pub mod heuristic;

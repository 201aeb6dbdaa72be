pub mod alphabeta;
pub mod minimax;
pub mod stats;

use crate::core::evaluator::PositionEvaluator;
use crate::core::position::GamePosition;
use crate::core::result::SearchResult;

/// Chooses a move for the side to move, searching `depth` plies ahead.
///
/// This is the entry point drivers should use; it runs [`alphabeta::alphabeta`]
/// with the full `(-inf, +inf)` window.
pub fn search<Position, Evaluator>(
    position: &mut Position,
    depth: usize,
    maximizing: bool,
    evaluator: &Evaluator,
) -> SearchResult<Position::Move>
where
    Position: GamePosition,
    Evaluator: PositionEvaluator<Position>,
{
    alphabeta::alphabeta(position, depth, maximizing, evaluator)
}

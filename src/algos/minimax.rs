use super::stats::SearchStats;
use crate::core::evaluator::PositionEvaluator;
use crate::core::guard::Applied;
use crate::core::position::GamePosition;
use crate::core::result::SearchResult;
use crate::core::value::INFINITY;

/// Plain minimax over the full tree, no pruning.
///
/// Visits every node up to `depth`, which makes it the reference the pruned
/// search is checked against.
pub fn minimax<Position, Evaluator>(
    position: &mut Position,
    depth: usize,
    maximizing: bool,
    evaluator: &Evaluator,
) -> SearchResult<Position::Move>
where
    Position: GamePosition,
    Evaluator: PositionEvaluator<Position>,
{
    minimax_with_stats(
        position,
        depth,
        maximizing,
        evaluator,
        &mut SearchStats::default(),
    )
}

pub fn minimax_with_stats<Position, Evaluator>(
    position: &mut Position,
    depth: usize,
    maximizing: bool,
    evaluator: &Evaluator,
    stats: &mut SearchStats,
) -> SearchResult<Position::Move>
where
    Position: GamePosition,
    Evaluator: PositionEvaluator<Position>,
{
    stats.nodes += 1;

    if depth == 0 || position.is_terminal() {
        stats.evaluations += 1;
        return SearchResult::leaf(evaluator.eval(position));
    }

    let mut best = SearchResult::leaf(if maximizing { -INFINITY } else { INFINITY });

    for mv in position.legal_moves() {
        let score = {
            let mut child = Applied::new(position, &mv);
            minimax_with_stats(&mut *child, depth - 1, !maximizing, evaluator, stats).score
        };

        best.offer(score, &mv, maximizing);
    }

    best
}

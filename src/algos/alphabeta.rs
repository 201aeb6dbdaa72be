use super::stats::SearchStats;
use crate::core::evaluator::PositionEvaluator;
use crate::core::guard::Applied;
use crate::core::position::GamePosition;
use crate::core::result::SearchResult;
use crate::core::value::{Score, INFINITY};

fn alphabeta_impl<Position, Evaluator>(
    position: &mut Position,
    depth: usize,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    evaluator: &Evaluator,
    stats: &mut SearchStats,
) -> SearchResult<Position::Move>
where
    Position: GamePosition,
    Evaluator: PositionEvaluator<Position>,
{
    stats.nodes += 1;

    // terminal positions are scored, never expanded, whatever the depth left
    if depth == 0 || position.is_terminal() {
        stats.evaluations += 1;
        return SearchResult::leaf(evaluator.eval(position));
    }

    let mut best = SearchResult::leaf(if maximizing { -INFINITY } else { INFINITY });

    for mv in position.legal_moves() {
        let score = {
            let mut child = Applied::new(position, &mv);
            alphabeta_impl(
                &mut *child,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                evaluator,
                stats,
            )
            .score
        };

        best.offer(score, &mv, maximizing);

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }

        // cutoff
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// `maximizing` tells whether the side to move is the evaluator's
/// perspective side. The position is borrowed mutably for the whole search
/// and is restored before returning.
pub fn alphabeta<Position, Evaluator>(
    position: &mut Position,
    depth: usize,
    maximizing: bool,
    evaluator: &Evaluator,
) -> SearchResult<Position::Move>
where
    Position: GamePosition,
    Evaluator: PositionEvaluator<Position>,
{
    alphabeta_with_stats(
        position,
        depth,
        maximizing,
        evaluator,
        &mut SearchStats::default(),
    )
}

/// Same as [`alphabeta`], also counting the work done into `stats`
pub fn alphabeta_with_stats<Position, Evaluator>(
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
    alphabeta_impl(
        position, depth, -INFINITY, INFINITY, maximizing, evaluator, stats,
    )
}

/// Alpha-beta search with an explicit starting window.
///
/// Scores outside `(alpha, beta)` are only bounds: a result `<= alpha` is an
/// upper bound and a result `>= beta` a lower bound of the true minimax value.
pub fn alphabeta_window<Position, Evaluator>(
    position: &mut Position,
    depth: usize,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    evaluator: &Evaluator,
) -> SearchResult<Position::Move>
where
    Position: GamePosition,
    Evaluator: PositionEvaluator<Position>,
{
    alphabeta_impl(
        position,
        depth,
        alpha,
        beta,
        maximizing,
        evaluator,
        &mut SearchStats::default(),
    )
}

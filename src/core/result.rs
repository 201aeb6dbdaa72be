use super::value::Score;

/// The result of a search: a score and the move that achieves it
///
/// `best_move` is `None` only at leaves, that is when the depth was exhausted
/// or the position was already terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<Move> {
    pub score: Score,
    pub best_move: Option<Move>,
}

impl<Move> SearchResult<Move> {
    /// Result of evaluating a leaf, no move is recommended from here
    pub fn leaf(score: Score) -> Self {
        SearchResult {
            score,
            best_move: None,
        }
    }

    /// Replaces the current best if `score` is strictly better.
    /// Ties keep the move found first.
    pub(crate) fn offer(&mut self, score: Score, mv: &Move, maximizing: bool)
    where
        Move: Clone,
    {
        let better = if maximizing {
            score > self.score
        } else {
            score < self.score
        };

        if better {
            self.score = score;
            self.best_move = Some(mv.clone());
        }
    }

    /// Splits into the `(score, move)` pair
    pub fn into_parts(self) -> (Score, Option<Move>) {
        (self.score, self.best_move)
    }
}

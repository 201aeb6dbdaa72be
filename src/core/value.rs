/// Engine's score units
///
/// Positive scores favour the evaluator's perspective side.
pub type Score = f64;

/// Score of a checkmate, from the point of view of the side that delivered it
///
/// Must stay out of reach of any sum of material and positional terms,
/// see [`crate::config::EvalWeights::max_magnitude`].
pub const MATE_SCORE: Score = 9999.0;

/// Score of a stalemate
pub const DRAW_SCORE: Score = 0.0;

/// Infinity for a Score, used as the initial alpha-beta window
pub const INFINITY: Score = f64::INFINITY;

/// Shallowest search the engine accepts, depth 0 never picks a move
pub const MIN_DEPTH: usize = 1;

/// Deepest search the engine accepts, in plies
pub const MAX_DEPTH: usize = 8;

/// Returns true if the score can only come from a checkmate
pub fn is_mate_score(score: Score) -> bool {
    score.abs() >= MATE_SCORE
}

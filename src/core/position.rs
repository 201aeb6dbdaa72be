use super::outcome::Outcome;
use shakmaty::{Color, Piece, Square};

/// A mutable game position, backed by some rules engine.
///
/// The search never re-derives the rules of the game: it enumerates moves,
/// plays and takes them back, and asks about terminal states only through
/// this trait.
///
/// ⚠️ `apply` and `undo` form a stack. Every `apply` must be paired with
/// exactly one `undo` before control goes back to whoever owned the position
/// before the `apply`. See [`super::guard::Applied`].
pub trait GamePosition {
    type Move: Clone;

    /// Side to move
    fn turn(&self) -> Color;

    /// Lists all legal moves for the side to move, in the rules engine's
    /// natural order
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays a move in place. The move is assumed to be legal.
    fn apply(&mut self, mv: &Self::Move);

    /// Takes back the last applied move
    fn undo(&mut self);

    /// The side to move is in check and has no legal moves
    fn is_checkmate(&self) -> bool;

    /// The side to move is not in check and has no legal moves
    fn is_stalemate(&self) -> bool;

    /// Piece standing on the given square, if any
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Checkmate or stalemate
    fn is_terminal(&self) -> bool {
        self.is_checkmate() || self.is_stalemate()
    }

    /// The outcome of the position, if the game is over
    fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate() {
            Some(Outcome::Checkmate {
                winner: !self.turn(),
            })
        } else if self.is_stalemate() {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }
}

/// Chebyshev distance between two squares (king steps)
pub fn square_distance(a: Square, b: Square) -> u32 {
    a.distance(b)
}

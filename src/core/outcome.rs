use shakmaty::Color;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move has been mated
    Checkmate { winner: Color },
    /// The side to move has no legal moves and is not in check
    Stalemate,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(*winner),
            Outcome::Stalemate => None,
        }
    }
}

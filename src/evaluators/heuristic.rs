use crate::config::{EvalWeights, MAX_DISTANCE};
use crate::core::evaluator::PositionEvaluator;
use crate::core::position::{square_distance, GamePosition};
use crate::core::value::{Score, DRAW_SCORE, MATE_SCORE};
use shakmaty::{Color, File, Rank, Role, Square};

/// Simple hand-written evaluation, scored for a fixed perspective side.
///
/// Non-terminal positions are the sum of three terms:
/// - material: weight of each piece kind, added for own pieces and
///   subtracted for the opponent's
/// - central control: a bonus per own piece on the central 4x4 squares
/// - king proximity: a bonus per own piece that grows as it gets closer to
///   the opponent king
///
/// Checkmate and stalemate short-circuit the sum.
#[derive(Debug, Clone)]
pub struct HeuristicEvaluator {
    perspective: Color,
    weights: EvalWeights,
}

impl HeuristicEvaluator {
    pub fn new(perspective: Color, weights: EvalWeights) -> Self {
        HeuristicEvaluator {
            perspective,
            weights,
        }
    }

    /// Side whose advantage scores positive
    pub fn perspective(&self) -> Color {
        self.perspective
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    fn proximity_bonus(&self, square: Square, king: Square) -> Score {
        let closeness = MAX_DISTANCE.saturating_sub(square_distance(square, king));
        closeness as Score * self.weights.king_proximity_factor
    }
}

impl Default for HeuristicEvaluator {
    fn default() -> Self {
        HeuristicEvaluator::new(Color::White, EvalWeights::default())
    }
}

/// Square is on the central 4x4 region (files c-f, ranks 3-6)
pub fn is_central(square: Square) -> bool {
    let central_file = (File::C..=File::F).contains(&square.file());
    let central_rank = (Rank::Third..=Rank::Sixth).contains(&square.rank());
    central_file && central_rank
}

impl<P: GamePosition> PositionEvaluator<P> for HeuristicEvaluator {
    fn eval(&self, position: &P) -> Score {
        if position.is_checkmate() {
            // the side to move is the one mated
            return if position.turn() == self.perspective {
                -MATE_SCORE
            } else {
                MATE_SCORE
            };
        }
        if position.is_stalemate() {
            return DRAW_SCORE;
        }

        let mut score = 0.0;
        let mut opponent_king = None;

        // first pass: material and center, and find the opponent king
        for square in Square::ALL {
            let Some(piece) = position.piece_at(square) else {
                continue;
            };

            let material = self.weights.material.value(piece.role);

            if piece.color == self.perspective {
                score += material;
                if is_central(square) {
                    score += self.weights.central_bonus;
                }
            } else {
                score -= material;
                if piece.role == Role::King {
                    opponent_king = Some(square);
                }
            }
        }

        // second pass: distances need the king square
        if let Some(king) = opponent_king {
            for square in Square::ALL {
                match position.piece_at(square) {
                    Some(piece) if piece.color == self.perspective => {
                        score += self.proximity_bonus(square, king);
                    }
                    _ => {}
                }
            }
        }

        score
    }
}

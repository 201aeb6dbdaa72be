#![allow(dead_code)]

use rookbot::config::{EvalWeights, MaterialWeights};
use rookbot::core::position::GamePosition;
use rookbot::engine::format_move;
use rookbot::games::chess::ChessBoard;
use shakmaty::{Color, Move, Piece, Square};

/// K+R vs K, the engine's default game
pub use rookbot::games::chess::ROOK_ENDGAME_FEN as ROOK_ENDGAME;
/// White mates with Ra8
pub const WHITE_MATE_IN_ONE: &str = "4k3/8/4K3/8/8/8/8/R7 w - - 0 1";
/// Mirror of the above, Black mates with Ra1
pub const BLACK_MATE_IN_ONE: &str = "r7/8/8/8/8/4k3/8/4K3 b - - 0 1";
/// Black is mated
pub const BLACK_MATED: &str = "R3k3/8/4K3/8/8/8/8/8 b - - 0 1";
/// Black is stalemated
pub const BLACK_STALEMATED: &str = "k7/8/1Q6/8/8/8/8/7K b - - 0 1";
pub const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
pub const ROOKS_AND_KINGS: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

pub fn board(fen: &str) -> ChessBoard {
    ChessBoard::from_fen(fen).unwrap()
}

pub fn uci(mv: &Option<Move>) -> Option<String> {
    mv.as_ref().map(|mv| format_move(mv).to_string())
}

/// Conventional piece values, to exercise every material weight
pub fn classic_weights() -> EvalWeights {
    EvalWeights {
        material: MaterialWeights {
            pawn: 1.0,
            knight: 3.0,
            bishop: 3.0,
            rook: 5.0,
            queen: 9.0,
            king: 0.0,
        },
        ..Default::default()
    }
}

/// Material only, which makes the evaluation antisymmetric between the sides
pub fn material_weights() -> EvalWeights {
    EvalWeights {
        central_bonus: 0.0,
        king_proximity_factor: 0.0,
        ..classic_weights()
    }
}

/// Board wrapper that checks the apply/undo discipline
pub struct TrackedBoard {
    pub inner: ChessBoard,
    pub applied: usize,
    pub undone: usize,
    pub max_height: usize,
    height: usize,
}

impl TrackedBoard {
    pub fn new(inner: ChessBoard) -> Self {
        TrackedBoard {
            inner,
            applied: 0,
            undone: 0,
            max_height: 0,
            height: 0,
        }
    }
}

impl GamePosition for TrackedBoard {
    type Move = Move;

    fn turn(&self) -> Color {
        self.inner.turn()
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.inner.legal_moves()
    }

    fn apply(&mut self, mv: &Move) {
        self.applied += 1;
        self.height += 1;
        self.max_height = self.max_height.max(self.height);
        self.inner.apply(mv);
    }

    fn undo(&mut self) {
        assert!(self.height > 0, "undo below the search root");
        self.undone += 1;
        self.height -= 1;
        self.inner.undo();
    }

    fn is_checkmate(&self) -> bool {
        self.inner.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.inner.is_stalemate()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.inner.piece_at(square)
    }
}

use crate::core::position::GamePosition;
use crate::error::{Error, Result};
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Move, Piece, Position, Rank, Square};

/// King and rook against king, White to move, no castling rights
pub const ROOK_ENDGAME_FEN: &str = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1";

/// A chess position with take-back support.
///
/// shakmaty positions are copy-make, so the stack keeps one copy per applied
/// move and `undo` simply drops the top one.
#[derive(Debug, Clone)]
pub struct ChessBoard {
    stack: Vec<Chess>,
}

impl ChessBoard {
    /// Creates a board from a shakmaty Chess
    pub fn new(chess: Chess) -> Self {
        ChessBoard { stack: vec![chess] }
    }

    /// Standard starting position
    pub fn initial() -> Self {
        Self::new(Chess::default())
    }

    /// King and rook against a bare king, the engine's default game
    pub fn rook_endgame() -> Self {
        Self::from_fen(ROOK_ENDGAME_FEN).expect("a valid fen")
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let position = fen
            .parse::<Fen>()?
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(Box::new)?;

        Ok(Self::new(position))
    }

    /// Get current chess position
    pub fn current(&self) -> &Chess {
        // the stack always holds the root position
        &self.stack[self.stack.len() - 1]
    }

    /// Number of moves applied on top of the root position
    pub fn ply(&self) -> usize {
        self.stack.len() - 1
    }

    /// Parses a move in UCI notation and plays it if it is legal
    pub fn play_uci(&mut self, text: &str) -> Result<Move> {
        let invalid = |reason: String| Error::InvalidMove {
            input: text.to_owned(),
            reason,
        };

        let uci = text
            .trim()
            .parse::<UciMove>()
            .map_err(|err| invalid(err.to_string()))?;
        let mv = uci
            .to_move(self.current())
            .map_err(|err| invalid(err.to_string()))?;

        self.apply(&mv);
        Ok(mv)
    }

    /// Takes back the last move, refusing to go past the root position
    pub fn takeback(&mut self) -> Result<()> {
        if self.ply() == 0 {
            return Err(Error::NothingToUndo);
        }
        self.undo();
        Ok(())
    }

    /// True if both boards hold the same pieces, side to move and ply
    pub fn same_state(&self, other: &ChessBoard) -> bool {
        self.ply() == other.ply()
            && self.current().board() == other.current().board()
            && self.current().turn() == other.current().turn()
    }

    /// ASCII diagram, rank 8 first, `.` for empty squares
    pub fn render(&self) -> String {
        let board = self.current().board();
        let mut out = String::with_capacity(8 * 20);

        for rank in Rank::ALL.into_iter().rev() {
            out.push(rank.char());
            out.push(' ');
            for file in shakmaty::File::ALL {
                let c = board
                    .piece_at(Square::from_coords(file, rank))
                    .map_or('.', Piece::char);
                out.push(' ');
                out.push(c);
            }
            out.push('\n');
        }
        out.push_str("   a b c d e f g h\n");

        out
    }
}

impl GamePosition for ChessBoard {
    type Move = Move;

    fn turn(&self) -> Color {
        self.current().turn()
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.current().legal_moves().into_iter().collect()
    }

    fn apply(&mut self, mv: &Move) {
        let mut next = self.current().clone();
        next.play_unchecked(mv);
        self.stack.push(next);
    }

    fn undo(&mut self) {
        assert!(self.stack.len() > 1, "undo without a matching apply");
        self.stack.pop();
    }

    fn is_checkmate(&self) -> bool {
        self.current().is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.current().is_stalemate()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.current().board().piece_at(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::Outcome;

    #[test]
    fn apply_undo_restores() {
        let mut board = ChessBoard::rook_endgame();
        let before = board.clone();

        for mv in board.legal_moves() {
            board.apply(&mv);
            assert_eq!(board.ply(), 1);
            assert_eq!(board.turn(), Color::Black);
            board.undo();
            assert!(board.same_state(&before));
        }
    }

    #[test]
    fn rook_endgame_setup() {
        let board = ChessBoard::rook_endgame();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.piece_at(Square::A1), Some(Color::White.rook()));
        assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
        assert_eq!(board.piece_at(Square::E8), Some(Color::Black.king()));
        assert_eq!(board.current().board().occupied().count(), 3);
        // no castling in this setup
        assert!(board
            .legal_moves()
            .iter()
            .all(|mv| !matches!(mv, Move::Castle { .. })));
    }

    #[test]
    fn play_and_takeback() {
        let mut board = ChessBoard::rook_endgame();
        board.play_uci("a1a7").unwrap();
        assert_eq!(board.ply(), 1);
        assert_eq!(board.piece_at(Square::A7), Some(Color::White.rook()));

        // not black's rook to move
        assert!(matches!(
            board.play_uci("a7a8"),
            Err(Error::InvalidMove { .. })
        ));
        assert!(matches!(
            board.play_uci("nonsense"),
            Err(Error::InvalidMove { .. })
        ));

        board.takeback().unwrap();
        assert!(board.same_state(&ChessBoard::rook_endgame()));
        assert!(matches!(board.takeback(), Err(Error::NothingToUndo)));
    }

    #[test]
    fn invalid_fen() {
        assert!(matches!(
            ChessBoard::from_fen("not a fen"),
            Err(Error::Fen(_))
        ));
        // no black king
        assert!(matches!(
            ChessBoard::from_fen("8/8/8/8/8/8/8/R3K3 w - - 0 1"),
            Err(Error::Position(_))
        ));
    }

    #[test]
    fn outcomes() {
        let mate = ChessBoard::from_fen("R3k3/8/4K3/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(
            mate.outcome(),
            Some(Outcome::Checkmate {
                winner: Color::White
            })
        );

        let stalemate = ChessBoard::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1").unwrap();
        assert_eq!(stalemate.outcome(), Some(Outcome::Stalemate));

        assert_eq!(ChessBoard::rook_endgame().outcome(), None);
    }

    #[test]
    fn render_diagram() {
        let diagram = ChessBoard::rook_endgame().render();
        let lines: Vec<_> = diagram.lines().collect();
        assert_eq!(lines[0], "8  . . . . k . . .");
        assert_eq!(lines[7], "1  R . . . K . . .");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}

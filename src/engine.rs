use crate::algos::alphabeta::alphabeta_with_stats;
use crate::algos::stats::SearchStats;
use crate::config::EngineConfig;
use crate::core::agent::Agent;
use crate::core::position::GamePosition;
use crate::core::result::SearchResult;
use crate::evaluators::heuristic::HeuristicEvaluator;
use crate::games::chess::ChessBoard;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Move};
use tracing::debug;

/// Picks moves for whichever side is to move, with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
    /// Counters of the last search
    last_stats: SearchStats,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            config,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Searches the position for the side to move.
    ///
    /// The evaluator is built from the mover's point of view, so the
    /// returned score is positive when the mover stands better.
    #[tracing::instrument(level = "debug", skip_all, fields(depth = self.config.depth, ply = board.ply()))]
    pub fn choose_move(&mut self, board: &mut ChessBoard) -> SearchResult<Move> {
        let evaluator = HeuristicEvaluator::new(board.turn(), self.config.weights);
        let mut stats = SearchStats::default();

        let result = alphabeta_with_stats(board, self.config.depth, true, &evaluator, &mut stats);

        debug!(
            score = result.score,
            best_move = ?result.best_move.as_ref().map(format_move),
            nodes = stats.nodes,
            evaluations = stats.evaluations,
            cutoffs = stats.cutoffs,
            "search finished"
        );

        self.last_stats = stats;
        result
    }
}

impl Agent<ChessBoard> for Engine {
    fn next_action(&mut self, position: &mut ChessBoard) -> Option<Move> {
        self.choose_move(position).best_move
    }
}

/// Formats a move the way drivers print it
pub fn format_move(mv: &Move) -> UciMove {
    mv.to_uci(CastlingMode::Standard)
}

//! Error types for the crate's edges
//!
//! The search and the evaluator are total and never fail. Errors come from
//! parsing user input (FEN, moves) and loading configuration.

use shakmaty::fen::ParseFenError;
use shakmaty::{Chess, PositionError};

/// Errors that can occur outside the decision engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// FEN string could not be parsed
    #[error("Invalid FEN: {0}")]
    Fen(#[from] ParseFenError),

    /// FEN parsed but does not describe a legal position
    #[error("Illegal position: {0}")]
    Position(#[from] Box<PositionError<Chess>>),

    /// Move text is not UCI, or not legal in the current position
    #[error("Invalid move {input:?}: {reason}")]
    InvalidMove { input: String, reason: String },

    /// Nothing left to take back
    #[error("No move to take back")]
    NothingToUndo,

    /// Weights file could not be read
    #[error("Could not read {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Weights file is not valid JSON for `EvalWeights`
    #[error("Invalid weights: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// Requested depth is outside what the driver can search
    #[error("Depth {depth} is out of range ({min}..={max})")]
    DepthOutOfRange { depth: usize, min: usize, max: usize },

    /// Weights could add up to a checkmate score
    #[error("Weights can reach {magnitude}, which collides with the mate score {mate}")]
    UnsafeWeights { magnitude: f64, mate: f64 },
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

//! Engine configuration
//!
//! Evaluation weights are plain data so they can be tuned without touching
//! the evaluator. Every field has a default, a JSON weights file only needs
//! to mention what it overrides:
//!
//! ```json
//! { "material": { "queen": 9.0 }, "central_bonus": 0.25 }
//! ```

use crate::core::value::{MATE_SCORE, MAX_DEPTH, MIN_DEPTH};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use shakmaty::Role;
use std::path::Path;

/// Largest board distance between two squares
pub const MAX_DISTANCE: u32 = 7;

/// Most pieces a single side can have on the board
const MAX_PIECES_PER_SIDE: f64 = 16.0;

/// Material value of each piece kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialWeights {
    pub pawn: f64,
    pub knight: f64,
    pub bishop: f64,
    pub rook: f64,
    pub queen: f64,
    pub king: f64,
}

impl Default for MaterialWeights {
    /// Only rooks are worth anything
    fn default() -> Self {
        MaterialWeights {
            pawn: 0.0,
            knight: 0.0,
            bishop: 0.0,
            rook: 5.0,
            queen: 0.0,
            king: 0.0,
        }
    }
}

impl MaterialWeights {
    pub fn value(&self, role: Role) -> f64 {
        match role {
            Role::Pawn => self.pawn,
            Role::Knight => self.knight,
            Role::Bishop => self.bishop,
            Role::Rook => self.rook,
            Role::Queen => self.queen,
            Role::King => self.king,
        }
    }

    fn values(&self) -> [f64; 6] {
        [
            self.pawn,
            self.knight,
            self.bishop,
            self.rook,
            self.queen,
            self.king,
        ]
    }

    fn max_abs(&self) -> f64 {
        self.values().into_iter().map(f64::abs).fold(0.0, f64::max)
    }
}

/// Weights of the heuristic evaluation terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalWeights {
    pub material: MaterialWeights,
    /// Bonus per own piece standing on the central 4x4 squares
    pub central_bonus: f64,
    /// Bonus per own piece per step closer than `MAX_DISTANCE` to the enemy king
    pub king_proximity_factor: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            material: MaterialWeights::default(),
            central_bonus: 0.5,
            king_proximity_factor: 0.2,
        }
    }
}

impl EvalWeights {
    /// Loads weights from a JSON file, missing fields keep their default
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn is_finite(&self) -> bool {
        self.material.values().iter().all(|v| v.is_finite())
            && self.central_bonus.is_finite()
            && self.king_proximity_factor.is_finite()
    }

    /// Upper bound of the absolute value of any non-terminal evaluation
    pub fn max_magnitude(&self) -> f64 {
        let per_piece = self.material.max_abs()
            + self.central_bonus.abs()
            + self.king_proximity_factor.abs() * MAX_DISTANCE as f64;

        // both sides fully loaded, with every term pulling the same way
        2.0 * MAX_PIECES_PER_SIDE * per_piece
    }
}

/// Everything the engine needs to pick a move
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Search depth, in plies
    pub depth: usize,
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: 3,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Builds a config from the driver's options, loading the weights file
    /// when one is given
    pub fn load(depth: usize, weights: Option<&Path>) -> Result<Self> {
        let weights = match weights {
            Some(path) => EvalWeights::from_file(path)?,
            None => EvalWeights::default(),
        };

        let config = EngineConfig { depth, weights };
        config.validate()?;
        Ok(config)
    }

    /// Rejects depths the recursion is not meant for, and weights large
    /// enough to be confused with a checkmate.
    ///
    /// A depth 0 search never picks a move, so the driver needs at least one ply.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.depth) {
            return Err(Error::DepthOutOfRange {
                depth: self.depth,
                min: MIN_DEPTH,
                max: MAX_DEPTH,
            });
        }

        let magnitude = self.weights.max_magnitude();
        if !self.weights.is_finite() || magnitude >= MATE_SCORE {
            return Err(Error::UnsafeWeights {
                magnitude,
                mate: MATE_SCORE,
            });
        }

        Ok(())
    }
}

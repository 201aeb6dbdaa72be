pub mod analyse;
pub mod play;
pub mod uci;

use clap::Args;
use rookbot::config::EngineConfig;
use std::path::PathBuf;

/// Options shared by every command that runs the engine
#[derive(Args, Debug)]
pub struct EngineArgs {
    /// Search depth, in plies
    #[arg(long, short, default_value_t = 3)]
    pub depth: usize,

    /// JSON file with evaluation weights
    #[arg(long, value_name = "weights.json")]
    pub weights: Option<PathBuf>,
}

impl EngineArgs {
    pub fn config(&self) -> rookbot::Result<EngineConfig> {
        EngineConfig::load(self.depth, self.weights.as_deref())
    }
}

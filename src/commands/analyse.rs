use super::EngineArgs;
use anyhow::Context;
use clap::Args;
use rookbot::core::position::GamePosition;
use rookbot::core::value::is_mate_score;
use rookbot::engine::{format_move, Engine};
use rookbot::games::chess::{ChessBoard, ROOK_ENDGAME_FEN};

#[derive(Args, Debug)]
pub struct AnalyseCommand {
    /// Position to search
    #[arg(long, default_value = ROOK_ENDGAME_FEN)]
    fen: String,

    #[command(flatten)]
    engine: EngineArgs,
}

pub fn analyse(cmd: AnalyseCommand) -> anyhow::Result<()> {
    let config = cmd.engine.config().context("invalid engine options")?;
    let mut board =
        ChessBoard::from_fen(&cmd.fen).with_context(|| format!("cannot load {:?}", cmd.fen))?;

    print!("{}", board.render());

    if let Some(outcome) = board.outcome() {
        println!("game over: {:?}", outcome);
    }

    let mut engine = Engine::new(config);
    let result = engine.choose_move(&mut board);
    let stats = engine.last_stats();

    println!(
        "depth {} nodes {} evals {} cutoffs {} score {}",
        engine.config().depth,
        stats.nodes,
        stats.evaluations,
        stats.cutoffs,
        result.score
    );
    if is_mate_score(result.score) {
        let winner = if result.score > 0.0 {
            board.turn()
        } else {
            !board.turn()
        };
        println!("{:?} mates within {} plies", winner, engine.config().depth);
    }
    match result.best_move {
        Some(mv) => println!("bestmove {}", format_move(&mv)),
        None => println!("bestmove (none)"),
    }

    Ok(())
}

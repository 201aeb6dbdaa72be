use super::EngineArgs;
use anyhow::Context;
use clap::Args;
use rookbot::core::outcome::Outcome;
use rookbot::core::position::GamePosition;
use rookbot::engine::{format_move, Engine};
use rookbot::games::chess::{ChessBoard, ROOK_ENDGAME_FEN};
use shakmaty::Color;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct PlayCommand {
    /// Starting position, the engine plays the side to move
    #[arg(long, default_value = ROOK_ENDGAME_FEN)]
    fen: String,

    #[command(flatten)]
    engine: EngineArgs,
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

pub fn play(cmd: PlayCommand) -> anyhow::Result<()> {
    let config = cmd.engine.config().context("invalid engine options")?;
    let mut board =
        ChessBoard::from_fen(&cmd.fen).with_context(|| format!("cannot load {:?}", cmd.fen))?;
    let mut engine = Engine::new(config);

    let engine_side = board.turn();
    info!(engine = side_name(engine_side), "new game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n{}", board.render());

        if let Some(outcome) = board.outcome() {
            match outcome {
                Outcome::Checkmate { winner } => {
                    println!("Checkmate! {} wins.", side_name(winner))
                }
                Outcome::Stalemate => println!("Stalemate, the game is drawn."),
            }
            info!(?outcome, plies = board.ply(), "game over");
            break;
        }

        if board.turn() == engine_side {
            let result = engine.choose_move(&mut board);
            let Some(mv) = result.best_move else {
                warn!("engine found no move in a live position");
                break;
            };

            board.apply(&mv);
            info!(mv = %format_move(&mv), score = result.score, "engine move");
            println!("{} plays {}", side_name(engine_side), format_move(&mv));
            continue;
        }

        print!("{} to move (uci, undo, quit)> ", side_name(board.turn()));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "undo" => {
                // take back the engine reply and the player's move
                if board.ply() >= 2 {
                    board.takeback()?;
                    board.takeback()?;
                } else {
                    println!("Nothing to undo.");
                }
            }
            text => {
                if let Err(err) = board.play_uci(text) {
                    println!("{err}");
                }
            }
        }
    }

    Ok(())
}

use super::EngineArgs;
use anyhow::Context;
use clap::Args;
use rookbot::config::EngineConfig;
use rookbot::core::position::GamePosition;
use rookbot::core::value::{is_mate_score, Score};
use rookbot::engine::{format_move, Engine};
use rookbot::games::chess::ChessBoard;
use std::io::{self, BufRead};
use tracing::{debug, warn};
use vampirc_uci::{parse_one, UciMessage, UciSearchControl};

#[derive(Args, Debug)]
pub struct UciCommand {
    #[command(flatten)]
    engine: EngineArgs,
}

/// Builds the position described by a `position` command
fn load_position(
    startpos: bool,
    fen: Option<String>,
    moves: &[String],
) -> rookbot::Result<ChessBoard> {
    let mut board = match fen {
        Some(fen) if !startpos => ChessBoard::from_fen(&fen)?,
        _ => ChessBoard::initial(),
    };

    for mv in moves {
        board.play_uci(mv)?;
    }

    Ok(board)
}

/// Config for one `go` command, `go depth N` overrides the default depth
fn go_config(base: &EngineConfig, search_control: Option<UciSearchControl>) -> EngineConfig {
    let mut config = base.clone();

    if let Some(depth) = search_control.and_then(|sc| sc.depth) {
        config.depth = depth as usize;
        if let Err(err) = config.validate() {
            warn!(%err, "ignoring requested depth");
            config.depth = base.depth;
        }
    }

    config
}

/// `score` field of an `info` line.
///
/// The search does not track the ply a mate happens on, so a mate is reported
/// at the furthest distance the search could have seen it.
fn format_score(board: &ChessBoard, score: Score, depth: usize) -> String {
    if !is_mate_score(score) {
        return format!("score cp {}", (score * 100.0).round() as i64);
    }

    let moves = if board.is_checkmate() {
        0
    } else if score > 0.0 {
        depth.div_ceil(2) as i64
    } else {
        -((depth / 2).max(1) as i64)
    };
    format!("score mate {moves}")
}

pub fn uci(cmd: UciCommand) -> anyhow::Result<()> {
    let base_config = cmd.engine.config().context("invalid engine options")?;
    let mut board = ChessBoard::initial();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let msg: UciMessage = parse_one(line.trim());
        debug!(?msg, "uci command");

        match msg {
            UciMessage::IsReady => println!("{}", UciMessage::ReadyOk),
            UciMessage::Quit => break,
            UciMessage::Uci => {
                println!(
                    "{}",
                    UciMessage::Id {
                        name: Some(format!("rookbot {}", env!("CARGO_PKG_VERSION"))),
                        author: None,
                    }
                );
                println!("{}", UciMessage::UciOk);
            }
            UciMessage::UciNewGame => {
                board = ChessBoard::initial();
            }
            UciMessage::Position {
                startpos,
                fen,
                moves,
            } => {
                let moves: Vec<String> = moves.iter().map(|m| m.to_string()).collect();

                match load_position(startpos, fen.map(|f| f.0), &moves) {
                    Ok(loaded) => board = loaded,
                    Err(err) => warn!(%err, "rejected position, keeping the previous one"),
                }
            }
            UciMessage::Go { search_control, .. } => {
                let mut engine = Engine::new(go_config(&base_config, search_control));
                let result = engine.choose_move(&mut board);
                let stats = engine.last_stats();

                let depth = engine.config().depth;
                println!(
                    "info depth {} nodes {} {}",
                    depth,
                    stats.nodes,
                    format_score(&board, result.score, depth)
                );

                match result.best_move {
                    Some(mv) => println!("bestmove {}", format_move(&mv)),
                    None => println!("bestmove 0000"),
                }
            }
            _ => {}
        }
    }

    Ok(())
}

mod common;

use common::*;
use rookbot::config::EvalWeights;
use rookbot::core::evaluator::PositionEvaluator;
use rookbot::core::position::GamePosition;
use rookbot::core::value::MATE_SCORE;
use rookbot::evaluators::heuristic::HeuristicEvaluator;
use rookbot::search;
use shakmaty::Color;

fn white() -> HeuristicEvaluator {
    HeuristicEvaluator::new(Color::White, EvalWeights::default())
}

fn black() -> HeuristicEvaluator {
    HeuristicEvaluator::new(Color::Black, EvalWeights::default())
}

#[test]
fn rook_endgame_favours_white() {
    let mut pos = board(ROOK_ENDGAME);
    let res = search(&mut pos, 3, true, &white());

    assert!(res.best_move.is_some());
    assert!(res.score > 0.0, "score {}", res.score);
    // black has no material to win back
    assert!(res.score >= 5.0);
}

#[test]
fn finds_mate_in_one() {
    for depth in 1..=2 {
        let mut pos = board(WHITE_MATE_IN_ONE);
        let res = search(&mut pos, depth, true, &white());

        assert_eq!(uci(&res.best_move).as_deref(), Some("a1a8"), "depth {depth}");
        assert_eq!(res.score, MATE_SCORE);
    }

    // deeper searches may find other mates, but always a mate
    let mut pos = board(WHITE_MATE_IN_ONE);
    let res = search(&mut pos, 3, true, &white());
    assert_eq!(res.score, MATE_SCORE);
    assert!(res.best_move.is_some());
}

#[test]
fn mate_overrides_positional_terms() {
    // huge positional weights, still far below the mate score
    let weights = EvalWeights {
        central_bonus: 50.0,
        king_proximity_factor: 20.0,
        ..Default::default()
    };
    let evaluator = HeuristicEvaluator::new(Color::White, weights);

    let mut pos = board(WHITE_MATE_IN_ONE);
    let res = search(&mut pos, 2, true, &evaluator);
    assert_eq!(uci(&res.best_move).as_deref(), Some("a1a8"));
}

#[test]
fn depth_zero_is_a_plain_evaluation() {
    for fen in [ROOK_ENDGAME, WHITE_MATE_IN_ONE, KIWIPETE] {
        let mut pos = board(fen);
        let expected = white().eval(&pos);
        let res = search(&mut pos, 0, true, &white());

        assert_eq!(res.score, expected);
        assert_eq!(res.best_move, None);
    }
}

#[test]
fn terminal_positions_are_not_expanded() {
    let mut mated = TrackedBoard::new(board(BLACK_MATED));
    let res = search(&mut mated, 3, false, &white());
    assert_eq!(res.score, MATE_SCORE);
    assert_eq!(res.best_move, None);
    assert_eq!(mated.applied, 0);

    let mut stalemated = TrackedBoard::new(board(BLACK_STALEMATED));
    let res = search(&mut stalemated, 3, false, &white());
    assert_eq!(res.score, 0.0);
    assert_eq!(res.best_move, None);
    assert_eq!(stalemated.applied, 0);
}

#[test]
fn board_is_restored() {
    for (fen, depth) in [(ROOK_ENDGAME, 4), (KIWIPETE, 2), (WHITE_MATE_IN_ONE, 3)] {
        let original = board(fen);
        let mut tracked = TrackedBoard::new(original.clone());

        search(&mut tracked, depth, true, &white());

        assert!(tracked.applied > 0);
        assert_eq!(tracked.applied, tracked.undone);
        assert!(tracked.max_height <= depth);
        assert!(tracked.inner.same_state(&original));
    }
}

#[test]
fn search_is_deterministic() {
    let mut pos = board(ROOK_ENDGAME);
    let first = search(&mut pos, 3, true, &white());
    let second = search(&mut pos, 3, true, &white());
    assert_eq!(first, second);

    let mut pos = board(KIWIPETE);
    let first = search(&mut pos, 2, true, &white());
    let second = search(&mut pos, 2, true, &white());
    assert_eq!(first, second);
}

#[test]
fn perspective_and_maximizing_swap() {
    // black to move and mating: maximize for black, or minimize for white
    let mut pos = board(BLACK_MATE_IN_ONE);
    let as_max = search(&mut pos, 2, true, &black());
    let as_min = search(&mut pos, 2, false, &white());

    assert_eq!(uci(&as_max.best_move).as_deref(), Some("a8a1"));
    assert_eq!(uci(&as_min.best_move).as_deref(), Some("a8a1"));
    assert_eq!(as_max.score, MATE_SCORE);
    assert_eq!(as_min.score, -MATE_SCORE);

    // and the mirrored position picks the mirrored move
    let mut mirrored = board(WHITE_MATE_IN_ONE);
    let res = search(&mut mirrored, 2, true, &white());
    assert_eq!(uci(&res.best_move).as_deref(), Some("a1a8"));
}

#[test]
fn negated_weights_minimized_give_the_same_move() {
    let weights = EvalWeights::default();
    let negated = EvalWeights {
        material: rookbot::config::MaterialWeights {
            pawn: -weights.material.pawn,
            knight: -weights.material.knight,
            bishop: -weights.material.bishop,
            rook: -weights.material.rook,
            queen: -weights.material.queen,
            king: -weights.material.king,
        },
        central_bonus: -weights.central_bonus,
        king_proximity_factor: -weights.king_proximity_factor,
    };

    // no mate reachable within these depths, so only weighted terms matter
    for (fen, depth) in [(ROOK_ENDGAME, 3), ("4k3/8/8/8/3R4/4K3/8/8 w - - 0 1", 2)] {
        let mut pos = board(fen);
        let plain = search(&mut pos, depth, true, &HeuristicEvaluator::new(Color::White, weights));
        let flipped = search(&mut pos, depth, false, &HeuristicEvaluator::new(Color::White, negated));

        assert_eq!(plain.best_move, flipped.best_move);
        assert_eq!(plain.score, -flipped.score);
    }
}

#[test]
fn material_only_is_antisymmetric() {
    for (fen, depth) in [(ROOK_ENDGAME, 3), (KIWIPETE, 2), (ROOKS_AND_KINGS, 2)] {
        let mut pos = board(fen);
        let side = pos.turn();

        let ours = HeuristicEvaluator::new(side, material_weights());
        let theirs = HeuristicEvaluator::new(!side, material_weights());

        let max = search(&mut pos, depth, true, &ours);
        let min = search(&mut pos, depth, false, &theirs);

        assert_eq!(max.best_move, min.best_move, "{fen}");
        assert_eq!(max.score, -min.score, "{fen}");
    }
}

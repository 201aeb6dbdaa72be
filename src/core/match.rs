use super::{agent::Agent, outcome::Outcome, position::GamePosition};

/// The outcome of a two-agent match
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchOutcome {
    WinAgent1,
    WinAgent2,
    Draw,
    /// Ply limit reached before the game ended
    Unfinished,
    /// An agent had no move to offer in a non-terminal position
    Forfeit { agent1: bool },
}

/// Play a match between two agents, starting from `position`.
/// Agent 1 plays the side to move. Moves are applied to `position`, which is
/// left at the final position of the match.
pub fn play_match<'a, P>(
    agent1: &'a mut dyn Agent<P>,
    agent2: &'a mut dyn Agent<P>,
    position: &mut P,
    max_plies: usize,
    mut history: Option<&mut Vec<P::Move>>,
) -> MatchOutcome
where
    P: GamePosition,
{
    let agent1_side = position.turn();
    let mut who_plays = true;
    let mut plies = 0;

    let outcome = loop {
        if let Some(outcome) = position.outcome() {
            break outcome;
        }
        if plies == max_plies {
            return MatchOutcome::Unfinished;
        }

        let agent = if who_plays {
            &mut *agent1
        } else {
            &mut *agent2
        };

        let Some(chosen) = agent.next_action(position) else {
            return MatchOutcome::Forfeit { agent1: who_plays };
        };

        position.apply(&chosen);
        who_plays = !who_plays;
        plies += 1;

        if let Some(ref mut moves) = history {
            moves.push(chosen);
        }
    };

    match outcome {
        Outcome::Stalemate => MatchOutcome::Draw,
        Outcome::Checkmate { winner } if winner == agent1_side => MatchOutcome::WinAgent1,
        Outcome::Checkmate { .. } => MatchOutcome::WinAgent2,
    }
}

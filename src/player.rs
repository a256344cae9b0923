use crate::agent::SearchAgent;
use crate::board::Board;
use crate::moves::Action;
use crate::rack::Rack;
use std::fmt;
use tracing::debug;

/// Callback that asks a human player for the next action.
pub type Prompt<'a> = Box<dyn FnMut(&Board, &Rack) -> Action + 'a>;

/// A player in a game: a human that is asked for each action, or an agent that
/// plays the move with the highest score.
pub enum Player<'a> {
    Human { name: String, prompt: Prompt<'a> },
    Agent { name: String, agent: SearchAgent<'a> },
}

impl<'a> fmt::Debug for Player<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::Human { name, .. } => f.debug_struct("Human").field("name", name).finish(),
            Player::Agent { name, agent } => f
                .debug_struct("Agent")
                .field("name", name)
                .field("agent", agent)
                .finish(),
        }
    }
}

impl<'a> Player<'a> {
    pub fn human<F>(name: &str, prompt: F) -> Player<'a>
    where
        F: FnMut(&Board, &Rack) -> Action + 'a,
    {
        Player::Human {
            name: String::from(name),
            prompt: Box::new(prompt),
        }
    }

    pub fn agent(name: &str, agent: SearchAgent<'a>) -> Player<'a> {
        Player::Agent {
            name: String::from(name),
            agent,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Player::Human { name, .. } | Player::Agent { name, .. } => name,
        }
    }

    /// Return the action of the player for `rack` on `board`.
    /// An agent without a legal move passes.
    pub fn next_action(&mut self, board: &Board, rack: &Rack) -> Action {
        match self {
            Player::Human { prompt, .. } => prompt(board, rack),
            Player::Agent { name, agent } => match agent.best_move(rack.letters(), board) {
                Some((mv, score)) => {
                    debug!(player = %name, %mv, score, "best move");
                    Action::Play(mv)
                }
                None => {
                    debug!(player = %name, rack = %rack, "no legal move");
                    Action::Pass
                }
            },
        }
    }
}

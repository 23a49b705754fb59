use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Status of the entire match.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
    /// The round cap was reached before anyone crossed the threshold.
    Stalemate,
}

/// Cumulative score line for one player, as reported to outer layers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub total_score: u32,
}

/// One player's result for a single finished round.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundScore {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub busted: bool,
}

/// Outcome of one finished round.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    /// Zero-based index of the round within the match.
    pub index: usize,
    pub scores: Vec<RoundScore>,
}

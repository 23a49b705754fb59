use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseStrategyError;
use crate::hand::Hand;

/// Decision capability of a player.
///
/// The round engine only ever talks to this contract; whether the answers
/// come from a strategy table or a human at a prompt is invisible to it.
pub trait Decider {
    /// Whether to draw another card given the current hand.
    fn decide_draw(&mut self, hand: &Hand) -> bool;

    /// Targeting strategy to resolve a drawn freeze card with.
    fn freeze_target(&mut self) -> TargetingStrategy;

    /// Targeting strategy to resolve a drawn draw-3 card with.
    fn draw3_target(&mut self) -> TargetingStrategy;
}

/// When an automatic player keeps drawing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DrawingStrategy {
    /// Draw every turn.
    Always,
    /// Never draw; stop on the first turn.
    Never,
    /// Draw while the in-progress round score is below 25.
    Below25Value,
    /// Draw while holding fewer than three number cards.
    Below3Cards,
}

impl DrawingStrategy {
    /// Applies the strategy to the current hand.
    pub fn wants_draw(self, hand: &Hand) -> bool {
        match self {
            DrawingStrategy::Always => true,
            DrawingStrategy::Never => false,
            DrawingStrategy::Below25Value => hand.score() < 25,
            DrawingStrategy::Below3Cards => hand.numbers().len() < 3,
        }
    }
}

/// How the concrete victim of a freeze or draw-3 card is chosen among the
/// players still in the round.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TargetingStrategy {
    /// Uniformly random eligible player, the drawer included.
    Random,
    /// Uniformly random eligible player other than the drawer.
    RandomOpponent,
    /// Eligible player with the lowest in-progress score.
    LowestScore,
    /// Eligible player with the highest in-progress score.
    HighestScore,
}

impl FromStr for DrawingStrategy {
    type Err = ParseStrategyError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "always" => Ok(DrawingStrategy::Always),
            "never" => Ok(DrawingStrategy::Never),
            "below-25" => Ok(DrawingStrategy::Below25Value),
            "below-3-cards" => Ok(DrawingStrategy::Below3Cards),
            _ => Err(ParseStrategyError(token.to_string())),
        }
    }
}

impl FromStr for TargetingStrategy {
    type Err = ParseStrategyError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "random" => Ok(TargetingStrategy::Random),
            "random-opponent" => Ok(TargetingStrategy::RandomOpponent),
            "lowest-score" => Ok(TargetingStrategy::LowestScore),
            "highest-score" => Ok(TargetingStrategy::HighestScore),
            _ => Err(ParseStrategyError(token.to_string())),
        }
    }
}

use crate::hand::Hand;
use crate::players::AutoDecider;
use crate::strategy::{Decider, DrawingStrategy, TargetingStrategy};

/// Seat index of a player within the match. Stable across rounds.
pub type PlayerId = usize;

/// A participant in the match.
///
/// The per-round flags (`done`, `busted`, `second_chance`) and the hand
/// are reset at the start of every round; `total_score` and identity
/// persist for the life of the match.
pub struct Player {
    pub name: String,
    pub hand: Hand,
    /// Player has stopped drawing this round (voluntarily or frozen).
    pub done: bool,
    /// Player busted this round; their round score is zero.
    pub busted: bool,
    /// One-shot shield against the next bust.
    pub second_chance: bool,
    /// Cumulative score across finished rounds.
    pub total_score: u32,
    decider: Box<dyn Decider>,
}

impl Player {
    pub fn new(name: impl Into<String>, decider: Box<dyn Decider>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            done: false,
            busted: false,
            second_chance: false,
            total_score: 0,
            decider,
        }
    }

    /// Convenience constructor for a strategy-table player.
    pub fn automatic(
        name: impl Into<String>,
        drawing: DrawingStrategy,
        targeting: TargetingStrategy,
    ) -> Self {
        Self::new(name, Box::new(AutoDecider::new(drawing, targeting)))
    }

    /// Clears round-scoped state. `total_score` is deliberately kept.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.done = false;
        self.busted = false;
        self.second_chance = false;
    }

    /// Whether the player may still act this round.
    pub fn is_active(&self) -> bool {
        !self.done && !self.busted
    }

    pub fn decide_draw(&mut self) -> bool {
        self.decider.decide_draw(&self.hand)
    }

    pub fn freeze_target_strategy(&mut self) -> TargetingStrategy {
        self.decider.freeze_target()
    }

    pub fn draw3_target_strategy(&mut self) -> TargetingStrategy {
        self.decider.draw3_target()
    }

    /// Score for the round in progress: zero when busted.
    pub fn round_score(&self) -> u32 {
        if self.busted { 0 } else { self.hand.score() }
    }
}

use serde::{Deserialize, Serialize};

use crate::card::{BonusCard, Card, SpecialCard};

/// A player's hand, partitioned by card kind.
///
/// Number cards keep their insertion order so the bust-cancellation path
/// can discard exactly the card that was drawn last. Special cards are
/// logged for reporting only; their effects are applied by the round the
/// moment they are drawn and are never replayed from the log.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    normal: Vec<u8>,
    bonus: Vec<BonusCard>,
    special_log: Vec<SpecialCard>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a drawn card into the matching partition.
    pub fn receive(&mut self, card: Card) {
        match card {
            Card::Number(value) => self.normal.push(value),
            Card::Bonus(bonus) => self.bonus.push(bonus),
            Card::Special(special) => self.special_log.push(special),
        }
    }

    /// True iff the hand holds two number cards of equal value.
    pub fn is_bust(&self) -> bool {
        self.normal
            .iter()
            .enumerate()
            .any(|(i, value)| self.normal[..i].contains(value))
    }

    /// Removes and returns the most recently received number card.
    ///
    /// Used when a second chance absorbs a bust: the duplicate that just
    /// landed is the last element of the number partition.
    pub fn undo_last_number(&mut self) -> Option<u8> {
        self.normal.pop()
    }

    /// Score of the hand, ignoring bust state (see `Player::round_score`).
    ///
    /// The x2 bonus doubles the number-card sum before any additive bonus
    /// is applied; the additive bonuses are then summed on top.
    pub fn score(&self) -> u32 {
        let mut total: u32 = self.normal.iter().map(|&v| u32::from(v)).sum();
        if self.bonus.contains(&BonusCard::Double) {
            total *= 2;
        }
        let additive: u32 = self
            .bonus
            .iter()
            .filter_map(|bonus| match bonus {
                BonusCard::Plus(value) => Some(u32::from(*value)),
                BonusCard::Double => None,
            })
            .sum();
        total + additive
    }

    pub fn numbers(&self) -> &[u8] {
        &self.normal
    }

    pub fn bonuses(&self) -> &[BonusCard] {
        &self.bonus
    }

    /// Record of special cards received this round, in draw order.
    pub fn special_log(&self) -> &[SpecialCard] {
        &self.special_log
    }

    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.bonus.is_empty() && self.special_log.is_empty()
    }

    pub fn clear(&mut self) {
        self.normal.clear();
        self.bonus.clear();
        self.special_log.clear();
    }
}

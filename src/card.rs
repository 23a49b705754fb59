use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, ParseCardError};

/// Highest face value of a number card.
pub const MAX_NUMBER_VALUE: u8 = 12;
/// Additive bonus values present in the deck, one card each.
pub const PLUS_VALUES: [u8; 5] = [2, 4, 6, 8, 10];
/// Copies of each special card in the full deck.
pub const SPECIAL_COPIES: usize = 3;
/// Number of cards in the full deck (79 numbers, 6 bonuses, 9 specials).
pub const FULL_DECK_SIZE: usize = 94;
/// Sum of number-card face values across a full deck.
pub const NUMBER_SUM: u32 = 650;

/// Score-modifying card, applied once per hand when scoring.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BonusCard {
    /// Doubles the number-card sum (`x2`). Contributes nothing additively.
    Double,
    /// Adds a flat value to the score (`+2`, `+4`, `+6`, `+8`, `+10`).
    Plus(u8),
}

/// Card with an immediate effect, resolved by the round when drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SpecialCard {
    /// Forces a chosen player to stop drawing for the round.
    Freeze,
    /// One-shot shield that cancels the next impending bust.
    SecondChance,
    /// Forces a chosen player to take three immediate draws.
    Draw3,
}

/// Representation of a Flip 7 card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Number card between 0 and 12. Drawing a duplicate value busts.
    Number(u8),
    /// Bonus modifier card.
    Bonus(BonusCard),
    /// Special effect card.
    Special(SpecialCard),
}

/// Builds the full 94-card deck in deterministic order (unshuffled).
///
/// Each number card n appears n times, except 0 and 1 which appear once.
/// Bonus cards appear once each, special cards three times each.
pub fn full_deck() -> Vec<Card> {
    let mut deck = number_deck();
    deck.push(Card::Bonus(BonusCard::Double));
    for value in PLUS_VALUES {
        deck.push(Card::Bonus(BonusCard::Plus(value)));
    }
    for special in [
        SpecialCard::Freeze,
        SpecialCard::SecondChance,
        SpecialCard::Draw3,
    ] {
        deck.extend(std::iter::repeat(Card::Special(special)).take(SPECIAL_COPIES));
    }
    deck
}

/// Builds the 79-card numbers-only deck variant (unshuffled).
pub fn number_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(FULL_DECK_SIZE);
    for value in 0..=MAX_NUMBER_VALUE {
        let copies = match value {
            0 | 1 => 1,
            n => n as usize,
        };
        deck.extend(std::iter::repeat(Card::Number(value)).take(copies));
    }
    deck
}

/// Checks every card against the known vocabulary.
///
/// The `Card` enum admits values a real deck never contains (e.g.
/// `Number(13)` or `Plus(3)`); round construction rejects them here so
/// play itself never has to.
pub fn validate_deck(deck: &[Card]) -> Result<(), GameError> {
    for &card in deck {
        let valid = match card {
            Card::Number(value) => value <= MAX_NUMBER_VALUE,
            Card::Bonus(BonusCard::Plus(value)) => PLUS_VALUES.contains(&value),
            Card::Bonus(BonusCard::Double) | Card::Special(_) => true,
        };
        if !valid {
            return Err(GameError::InvalidCard(card));
        }
    }
    Ok(())
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(value) => write!(f, "{value}"),
            Card::Bonus(BonusCard::Double) => write!(f, "x2"),
            Card::Bonus(BonusCard::Plus(value)) => write!(f, "+{value}"),
            Card::Special(SpecialCard::Freeze) => write!(f, "freeze"),
            Card::Special(SpecialCard::SecondChance) => write!(f, "second_chance"),
            Card::Special(SpecialCard::Draw3) => write!(f, "draw_3"),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "x2" => return Ok(Card::Bonus(BonusCard::Double)),
            "freeze" => return Ok(Card::Special(SpecialCard::Freeze)),
            "second_chance" => return Ok(Card::Special(SpecialCard::SecondChance)),
            "draw_3" => return Ok(Card::Special(SpecialCard::Draw3)),
            _ => {}
        }
        if let Some(rest) = token.strip_prefix('+') {
            return rest
                .parse::<u8>()
                .ok()
                .filter(|v| PLUS_VALUES.contains(v))
                .map(|v| Card::Bonus(BonusCard::Plus(v)))
                .ok_or_else(|| ParseCardError(token.to_string()));
        }
        token
            .parse::<u8>()
            .ok()
            .filter(|&v| v <= MAX_NUMBER_VALUE)
            .map(Card::Number)
            .ok_or_else(|| ParseCardError(token.to_string()))
    }
}

use std::fmt::Write;

use crate::card::Card;
use crate::hand::Hand;
use crate::state::{RoundSummary, Standing};

/// Renders a hand as the three partitions, e.g.
/// `numbers [5 3] bonus [x2 +4] specials [freeze]`.
pub fn format_hand(hand: &Hand) -> String {
    let numbers = hand
        .numbers()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let bonuses = hand
        .bonuses()
        .iter()
        .map(|b| Card::Bonus(*b).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let specials = hand
        .special_log()
        .iter()
        .map(|s| Card::Special(*s).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("numbers [{numbers}] bonus [{bonuses}] specials [{specials}]")
}

pub fn render_round_summary(summary: &RoundSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Round {} results:", summary.index + 1);
    for score in &summary.scores {
        let note = if score.busted { " (busted)" } else { "" };
        let _ = writeln!(out, "  {}: {}{note}", score.name, score.score);
    }
    out
}

pub fn render_standings(standings: &[Standing]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Standings:");
    for standing in standings {
        let _ = writeln!(out, "  {}: {}", standing.name, standing.total_score);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{BonusCard, SpecialCard};

    #[test]
    fn hand_rendering_shows_all_partitions() {
        let mut hand = Hand::new();
        hand.receive(Card::Number(5));
        hand.receive(Card::Number(3));
        hand.receive(Card::Bonus(BonusCard::Double));
        hand.receive(Card::Special(SpecialCard::Freeze));
        assert_eq!(
            format_hand(&hand),
            "numbers [5 3] bonus [x2] specials [freeze]"
        );
    }
}

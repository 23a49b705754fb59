use std::error::Error;

use crate::player::Player;
use crate::players::{AutoDecider, HumanDecider};
use crate::strategy::{DrawingStrategy, TargetingStrategy};

/// Returns a normalized label for a player spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a player instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - auto[:<drawing>[,<targeting>]]
///
/// Drawing tokens: always, never, below-25, below-3-cards.
/// Targeting tokens: random, random-opponent, lowest-score, highest-score.
pub fn create_player_from_spec(spec: &str, index: usize) -> Result<Player, Box<dyn Error>> {
    let spec_lower = spec.to_ascii_lowercase();
    if spec_lower.starts_with("human") {
        let name = spec
            .split_once(':')
            .map(|(_, name)| name.trim().to_string())
            .unwrap_or_else(|| format!("Human {index}"));
        let decider = HumanDecider::new(name.clone());
        return Ok(Player::new(name, Box::new(decider)));
    }
    if spec_lower.starts_with("auto") {
        let mut decider = AutoDecider::default();
        if let Some((_, config)) = spec_lower.split_once(':') {
            let mut parts = config.split(',').map(str::trim);
            if let Some(token) = parts.next().filter(|t| !t.is_empty()) {
                decider.drawing = token.parse::<DrawingStrategy>()?;
            }
            if let Some(token) = parts.next().filter(|t| !t.is_empty()) {
                decider.targeting = token.parse::<TargetingStrategy>()?;
            }
        }
        return Ok(Player::new(format!("Auto {index}"), Box::new(decider)));
    }
    Err(format!("unrecognized player spec: {spec}").into())
}

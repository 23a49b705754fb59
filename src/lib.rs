//! Flip 7 round and match engine for bot experimentation and simulation.

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod player;
pub mod players;
pub mod round;
pub mod state;
pub mod strategy;
pub mod visualize;

pub use crate::card::{Card, BonusCard, SpecialCard, full_deck, number_deck};
pub use crate::error::{GameError, ParseCardError, ParseStrategyError};
pub use crate::game::{DEFAULT_WIN_THRESHOLD, Game, GameConfig};
pub use crate::hand::Hand;
pub use crate::player::{Player, PlayerId};
pub use crate::players::{
    AutoDecider, HumanDecider, create_player_from_spec, label_for_spec,
};
pub use crate::round::{Round, RoundBuilder};
pub use crate::state::{GameStatus, RoundScore, RoundSummary, Standing};
pub use crate::strategy::{Decider, DrawingStrategy, TargetingStrategy};
pub use crate::visualize::{format_hand, render_round_summary, render_standings};

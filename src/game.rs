use std::mem;

use crate::error::GameError;
use crate::player::{Player, PlayerId};
use crate::round::Round;
use crate::state::{GameStatus, RoundScore, RoundSummary, Standing};

/// Cumulative score a player must reach to end the match.
pub const DEFAULT_WIN_THRESHOLD: u32 = 200;

/// Configuration for a match.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub win_threshold: u32,
    /// Base seed; each round derives its own seed from it.
    pub seed: u64,
    /// Safety cap for tables where nobody ever scores (e.g. all players
    /// configured to never draw). `None` plays until the threshold.
    pub max_rounds: Option<usize>,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            seed,
            max_rounds: None,
        }
    }

    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

/// A full match: repeated rounds until a cumulative score crosses the
/// win threshold.
pub struct Game {
    players: Vec<Player>,
    config: GameConfig,
    rounds_played: usize,
    finished: bool,
}

impl Game {
    pub fn new(players: Vec<Player>, config: GameConfig) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "at least one player is required",
            ));
        }
        Ok(Self {
            players,
            config,
            rounds_played: 0,
            finished: false,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Plays one round to completion and folds its scores into the totals.
    ///
    /// The starting seat rotates by round index so no player permanently
    /// keeps the first-move advantage.
    pub fn play_round(&mut self) -> Result<RoundSummary, GameError> {
        let players = mem::take(&mut self.players);
        let first = self.rounds_played % players.len();
        let seed = round_seed(self.config.seed, self.rounds_played);

        let mut round = Round::builder(players)
            .with_seed(seed)
            .starting_with(first)
            .build()?;
        while !round.is_finished() {
            round.advance_turn();
        }

        let mut players = round.into_players();
        let scores = players
            .iter()
            .enumerate()
            .map(|(id, player)| RoundScore {
                id,
                name: player.name.clone(),
                score: player.round_score(),
                busted: player.busted,
            })
            .collect();
        for player in &mut players {
            player.total_score += player.round_score();
        }
        self.players = players;

        let summary = RoundSummary {
            index: self.rounds_played,
            scores,
        };
        self.rounds_played += 1;
        self.update_finished();
        Ok(summary)
    }

    /// Runs rounds until the match is decided.
    pub fn play(&mut self) -> Result<(), GameError> {
        while !self.finished {
            self.play_round()?;
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        if !self.finished {
            return GameStatus::Ongoing;
        }
        match self.winner() {
            Some(winner) => GameStatus::Finished { winner },
            None => GameStatus::Stalemate,
        }
    }

    /// The winning seat: highest total at or over the threshold, ties to
    /// the lowest seat. `None` while the match runs or on a stalemate.
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.total_score >= self.config.win_threshold)
            .min_by_key(|(id, p)| (std::cmp::Reverse(p.total_score), *id))
            .map(|(id, _)| id)
    }

    /// Cumulative score report, the contract consumed by outer layers.
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .enumerate()
            .map(|(id, player)| Standing {
                id,
                name: player.name.clone(),
                total_score: player.total_score,
            })
            .collect()
    }

    fn update_finished(&mut self) {
        let threshold = self.config.win_threshold;
        if self.players.iter().any(|p| p.total_score >= threshold) {
            self.finished = true;
        } else if let Some(cap) = self.config.max_rounds {
            if self.rounds_played >= cap {
                self.finished = true;
            }
        }
    }
}

/// Derives a per-round seed from the match seed.
fn round_seed(base: u64, round_index: usize) -> u64 {
    base ^ ((round_index as u64 + 1).wrapping_mul(0x9E37_79B9))
}

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, SpecialCard, full_deck, validate_deck};
use crate::error::GameError;
use crate::player::{Player, PlayerId};
use crate::strategy::TargetingStrategy;

/// Builder that enables deterministic deck and seed injection for testing.
///
/// An injected deck is used exactly as given (top of the deck is the last
/// element, draws pop from the back); only the default full deck is
/// shuffled.
pub struct RoundBuilder {
    players: Vec<Player>,
    seed: u64,
    deck: Option<Vec<Card>>,
    first_player: PlayerId,
}

impl RoundBuilder {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            seed: rand::random(),
            deck: None,
            first_player: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Seat that acts first this round.
    pub fn starting_with(mut self, seat: PlayerId) -> Self {
        self.first_player = seat;
        self
    }

    pub fn build(self) -> Result<Round, GameError> {
        Round::from_builder(self)
    }
}

/// One deal of Flip 7, driven one turn at a time.
///
/// The round exclusively owns its deck, turn queue, and random source;
/// players are taken for the duration and handed back via
/// [`Round::into_players`].
pub struct Round {
    players: Vec<Player>,
    /// Rotating turn order; front is the next player to act.
    order: VecDeque<PlayerId>,
    deck: Vec<Card>,
    finished: bool,
    rng: StdRng,
    seed: u64,
}

impl Round {
    pub fn builder(players: Vec<Player>) -> RoundBuilder {
        RoundBuilder::new(players)
    }

    fn from_builder(builder: RoundBuilder) -> Result<Self, GameError> {
        let RoundBuilder {
            mut players,
            seed,
            deck,
            first_player,
        } = builder;
        if players.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "at least one player is required",
            ));
        }
        if first_player >= players.len() {
            return Err(GameError::InvalidConfiguration(
                "starting seat is out of range",
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let deck = match deck {
            Some(deck) => {
                validate_deck(&deck)?;
                deck
            }
            None => {
                let mut deck = full_deck();
                deck.shuffle(&mut rng);
                deck
            }
        };

        for player in &mut players {
            player.reset_for_round();
        }
        let mut order: VecDeque<PlayerId> = (0..players.len()).collect();
        order.rotate_left(first_player);

        Ok(Self {
            players,
            order,
            deck,
            finished: false,
            rng,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Remaining draw pile, top of the deck last.
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Hands the players back once the round is over.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    /// Removes and returns the top card of the deck.
    ///
    /// The turn loop checks for exhaustion itself and treats it as round
    /// termination; an `EmptyDeck` error here means the caller skipped the
    /// termination check.
    pub fn draw_card(&mut self) -> Result<Card, GameError> {
        self.deck.pop().ok_or(GameError::EmptyDeck)
    }

    /// Advances the round by one player's turn.
    ///
    /// The acting player is rotated to the back of the queue up front, so
    /// turn order is fixed even when the turn triggers nested draws for
    /// other players. Finished rounds no-op.
    pub fn advance_turn(&mut self) {
        if self.finished {
            return;
        }
        // Queue is never empty: construction requires at least one player.
        let Some(seat) = self.order.pop_front() else {
            return;
        };
        self.order.push_back(seat);

        if !self.players[seat].is_active() {
            // Skipped, not removed: the seat keeps its slot so the
            // termination predicate sees every player each cycle.
            self.update_finished();
            return;
        }

        if !self.players[seat].decide_draw() {
            self.players[seat].done = true;
            self.update_finished();
            return;
        }

        self.execute_draw(seat);
        self.update_finished();
    }

    /// Executes a single draw for `seat`, resolving any effects inline.
    ///
    /// Re-entrant: a drawn draw-3 calls back into this for the target, so
    /// nested specials resolve synchronously instead of being queued.
    /// Recursion depth is bounded by the deck size.
    fn execute_draw(&mut self, seat: PlayerId) {
        let Some(card) = self.deck.pop() else {
            // Exhaustion mid-turn (or mid-recursion) ends the round.
            self.finished = true;
            return;
        };

        self.players[seat].hand.receive(card);
        match card {
            Card::Number(_) => {
                if self.players[seat].hand.is_bust() {
                    if self.players[seat].second_chance {
                        self.players[seat].second_chance = false;
                        self.players[seat].hand.undo_last_number();
                    } else {
                        self.players[seat].busted = true;
                        self.players[seat].done = true;
                    }
                }
            }
            Card::Bonus(_) => {}
            Card::Special(special) => self.apply_special(seat, special),
        }
    }

    fn apply_special(&mut self, seat: PlayerId, special: SpecialCard) {
        match special {
            SpecialCard::SecondChance => {
                // Extra copies while one is already held are no-ops; the
                // hand log still records them.
                self.players[seat].second_chance = true;
            }
            SpecialCard::Freeze => {
                let strategy = self.players[seat].freeze_target_strategy();
                if let Some(target) = self.resolve_target(seat, strategy) {
                    self.players[target].done = true;
                }
            }
            SpecialCard::Draw3 => {
                let strategy = self.players[seat].draw3_target_strategy();
                if let Some(target) = self.resolve_target(seat, strategy) {
                    for _ in 0..3 {
                        if self.finished || !self.players[target].is_active() {
                            break;
                        }
                        self.execute_draw(target);
                    }
                }
            }
        }
    }

    /// Resolves a targeting strategy to a concrete seat among the players
    /// still in the round, or `None` when nobody is eligible.
    ///
    /// Score ties break towards the lowest seat, so non-random strategies
    /// stay deterministic.
    fn resolve_target(&mut self, actor: PlayerId, strategy: TargetingStrategy) -> Option<PlayerId> {
        let eligible: Vec<PlayerId> = (0..self.players.len())
            .filter(|&seat| self.players[seat].is_active())
            .collect();

        match strategy {
            TargetingStrategy::Random => eligible.choose(&mut self.rng).copied(),
            TargetingStrategy::RandomOpponent => {
                let opponents: Vec<PlayerId> =
                    eligible.into_iter().filter(|&seat| seat != actor).collect();
                opponents.choose(&mut self.rng).copied()
            }
            TargetingStrategy::LowestScore => eligible
                .into_iter()
                .min_by_key(|&seat| self.players[seat].round_score()),
            TargetingStrategy::HighestScore => eligible
                .into_iter()
                .min_by_key(|&seat| std::cmp::Reverse(self.players[seat].round_score())),
        }
    }

    fn update_finished(&mut self) {
        if self.deck.is_empty() || self.players.iter().all(|p| !p.is_active()) {
            self.finished = true;
        }
    }
}

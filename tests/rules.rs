use flip7::card::NUMBER_SUM;
use flip7::{
    Card, DrawingStrategy, Player, Round, SpecialCard, TargetingStrategy, full_deck,
};

fn always(name: &str, targeting: TargetingStrategy) -> Player {
    Player::automatic(name, DrawingStrategy::Always, targeting)
}

/// Deck helper: lists cards in draw order (first drawn first), reversing
/// them into the pop-from-the-back representation the round uses.
fn deck_in_draw_order(cards: &[Card]) -> Vec<Card> {
    let mut deck: Vec<Card> = cards.to_vec();
    deck.reverse();
    deck
}

#[test]
fn duplicate_number_busts_and_zeroes_the_round() {
    let players = vec![always("solo", TargetingStrategy::RandomOpponent)];
    let deck = deck_in_draw_order(&[Card::Number(5), Card::Number(5)]);
    let mut round = Round::builder(players).with_deck(deck).build().unwrap();

    round.advance_turn();
    assert!(!round.is_finished());
    assert_eq!(round.players()[0].hand.numbers(), &[5]);

    round.advance_turn();
    assert!(round.is_finished());
    let player = &round.players()[0];
    assert!(player.busted);
    assert!(player.done);
    assert_eq!(player.round_score(), 0);
}

#[test]
fn second_chance_absorbs_one_bust() {
    let players = vec![always("solo", TargetingStrategy::RandomOpponent)];
    let deck = deck_in_draw_order(&[
        Card::Special(SpecialCard::SecondChance),
        Card::Number(5),
        Card::Number(5),
    ]);
    let mut round = Round::builder(players).with_deck(deck).build().unwrap();

    round.advance_turn();
    assert!(round.players()[0].second_chance);

    round.advance_turn();
    round.advance_turn();
    let player = &round.players()[0];
    assert!(!player.busted, "second chance must cancel the bust");
    assert!(!player.second_chance, "the shield is one-shot");
    assert_eq!(player.hand.numbers(), &[5], "the duplicate is discarded");
    assert_eq!(player.round_score(), 5);
    assert_eq!(
        player.hand.special_log(),
        &[SpecialCard::SecondChance],
        "the special stays in the audit log"
    );
}

#[test]
fn extra_second_chance_copies_are_no_ops() {
    let players = vec![always("solo", TargetingStrategy::RandomOpponent)];
    let deck = deck_in_draw_order(&[
        Card::Special(SpecialCard::SecondChance),
        Card::Special(SpecialCard::SecondChance),
        Card::Number(4),
        Card::Number(4),
        Card::Number(6),
        Card::Number(6),
    ]);
    let mut round = Round::builder(players).with_deck(deck).build().unwrap();
    while !round.is_finished() {
        round.advance_turn();
    }
    // Only one bust can be absorbed: the second pair of sixes busts.
    let player = &round.players()[0];
    assert!(player.busted);
    assert_eq!(player.hand.special_log().len(), 2);
}

#[test]
fn freeze_stops_the_highest_scorer() {
    let players = vec![
        always("drawer", TargetingStrategy::HighestScore),
        always("leader", TargetingStrategy::RandomOpponent),
    ];
    let deck = deck_in_draw_order(&[
        Card::Number(5),                       // drawer
        Card::Number(12),                      // leader
        Card::Special(SpecialCard::Freeze),    // drawer freezes the leader
        Card::Number(0),                       // left in the deck
    ]);
    let mut round = Round::builder(players).with_deck(deck).build().unwrap();
    round.advance_turn();
    round.advance_turn();
    round.advance_turn();

    let leader = &round.players()[1];
    assert!(leader.done, "freeze forces done");
    assert!(!leader.busted, "frozen players keep their score");
    assert_eq!(leader.round_score(), 12);
    assert!(!round.is_finished(), "the drawer may still act");
}

#[test]
fn draw3_sends_three_draws_to_the_lowest_scorer() {
    let players = vec![
        always("drawer", TargetingStrategy::LowestScore),
        Player::automatic("low", DrawingStrategy::Below3Cards, TargetingStrategy::Random),
        Player::automatic("high", DrawingStrategy::Below3Cards, TargetingStrategy::Random),
    ];
    let deck = deck_in_draw_order(&[
        Card::Number(11), // drawer
        Card::Number(4),  // low
        Card::Number(12), // high
        Card::Number(0),  // drawer (score stays 11)
        Card::Number(6),  // low -> 10
        Card::Number(8),  // high -> 20
        Card::Special(SpecialCard::Draw3), // drawer: low (10) < drawer (11) < high (20)
        Card::Number(1),  // forced draw 1
        Card::Number(2),  // forced draw 2
        Card::Number(3),  // forced draw 3
    ]);
    let mut round = Round::builder(players).with_deck(deck).build().unwrap();
    for _ in 0..7 {
        round.advance_turn();
    }

    assert_eq!(
        round.players()[1].hand.numbers(),
        &[4, 6, 1, 2, 3],
        "the low scorer takes exactly three inline draws"
    );
    assert_eq!(round.players()[0].hand.numbers(), &[11, 0]);
    assert_eq!(round.players()[2].hand.numbers(), &[12, 8]);
    assert!(round.is_finished(), "the deck is exhausted");
}

#[test]
fn draw3_stops_early_when_the_target_busts() {
    let players = vec![
        always("drawer", TargetingStrategy::RandomOpponent),
        always("victim", TargetingStrategy::RandomOpponent),
    ];
    let deck = deck_in_draw_order(&[
        Card::Special(SpecialCard::Draw3), // drawer targets the only opponent
        Card::Number(7),                   // forced draw 1
        Card::Number(7),                   // forced draw 2: bust
        Card::Number(9),                   // must stay in the deck
        Card::Number(3),
    ]);
    let mut round = Round::builder(players).with_deck(deck).build().unwrap();
    round.advance_turn();

    let victim = &round.players()[1];
    assert!(victim.busted);
    assert_eq!(victim.hand.numbers(), &[7, 7]);
    assert_eq!(round.cards_remaining(), 2, "the third forced draw is skipped");
}

#[test]
fn deck_exhaustion_ends_the_round_mid_effect() {
    let players = vec![
        always("drawer", TargetingStrategy::RandomOpponent),
        always("victim", TargetingStrategy::RandomOpponent),
    ];
    let deck = deck_in_draw_order(&[
        Card::Special(SpecialCard::Draw3),
        Card::Number(7), // only one card left for the three forced draws
    ]);
    let mut round = Round::builder(players).with_deck(deck).build().unwrap();
    round.advance_turn();

    assert!(round.is_finished());
    let victim = &round.players()[1];
    assert!(!victim.busted);
    assert_eq!(victim.round_score(), 7);
}

#[test]
fn declining_a_draw_marks_the_player_done() {
    let players = vec![Player::automatic(
        "timid",
        DrawingStrategy::Never,
        TargetingStrategy::Random,
    )];
    let mut round = Round::builder(players).with_seed(3).build().unwrap();
    round.advance_turn();
    assert!(round.players()[0].done);
    assert!(!round.players()[0].busted);
    assert!(round.is_finished());
}

#[test]
fn finished_round_turns_are_no_ops() {
    let players = vec![always("solo", TargetingStrategy::Random)];
    let deck = deck_in_draw_order(&[Card::Number(5), Card::Number(5)]);
    let mut round = Round::builder(players).with_deck(deck).build().unwrap();
    while !round.is_finished() {
        round.advance_turn();
    }
    let score = round.players()[0].round_score();
    round.advance_turn();
    assert_eq!(round.players()[0].round_score(), score);
}

#[test]
fn same_seed_same_round_outcome() {
    let play = || {
        let players = vec![Player::automatic(
            "solo",
            DrawingStrategy::Below25Value,
            TargetingStrategy::Random,
        )];
        let mut round = Round::builder(players).with_seed(1234).build().unwrap();
        while !round.is_finished() {
            round.advance_turn();
        }
        (
            round.players()[0].round_score(),
            round.players()[0].busted,
            round.cards_remaining(),
        )
    };
    assert_eq!(play(), play());
}

#[test]
fn number_faces_are_conserved_across_draws() {
    let number_sum = |cards: &[Card]| -> u32 {
        cards
            .iter()
            .filter_map(|card| match card {
                Card::Number(value) => Some(u32::from(*value)),
                _ => None,
            })
            .sum()
    };
    let hand_sum = |round: &Round| -> u32 {
        round
            .players()
            .iter()
            .map(|p| p.hand.numbers().iter().map(|&v| u32::from(v)).sum::<u32>())
            .sum()
    };

    assert_eq!(number_sum(&full_deck()), NUMBER_SUM);

    let players = vec![
        always("a", TargetingStrategy::RandomOpponent),
        always("b", TargetingStrategy::RandomOpponent),
    ];
    let mut round = Round::builder(players).with_seed(99).build().unwrap();
    for _ in 0..10 {
        round.advance_turn();
        // No card is ever destroyed before the round resolves second
        // chances; drawn face values move from deck to hands.
        let total = number_sum(round.deck()) + hand_sum(&round);
        let discarded: u32 = NUMBER_SUM - total;
        // Any shortfall can only come from duplicates discarded by a
        // second chance: at most one per second-chance card in the deck,
        // each worth at most 12 points.
        assert!(discarded <= 36);
        if round.is_finished() {
            break;
        }
    }
}

use std::io::{self, Write};

use crate::hand::Hand;
use crate::strategy::{Decider, TargetingStrategy};
use crate::visualize::format_hand;

const TARGETING_OPTIONS: [TargetingStrategy; 4] = [
    TargetingStrategy::Random,
    TargetingStrategy::RandomOpponent,
    TargetingStrategy::LowestScore,
    TargetingStrategy::HighestScore,
];

/// Interactive decider that queries a human via standard input.
///
/// This is the only blocking collaborator in the crate; the round engine
/// just sees `Decider` answers.
pub struct HumanDecider {
    name: String,
}

impl HumanDecider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanDecider {
    fn default() -> Self {
        Self::new("Human")
    }
}

fn ask(prompt: &str) -> Option<String> {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        eprintln!("failed to flush stdout");
    }
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

impl Decider for HumanDecider {
    fn decide_draw(&mut self, hand: &Hand) -> bool {
        loop {
            println!("\n=== {}'s turn ===", self.name);
            println!("Hand: {}", format_hand(hand));
            println!("Current score: {}", hand.score());
            let Some(answer) = ask("Draw a card? [y/n]: ") else {
                eprintln!("stdin closed; standing pat");
                return false;
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                other => println!("Invalid input: '{other}'. Please answer y or n."),
            }
        }
    }

    fn freeze_target(&mut self) -> TargetingStrategy {
        self.pick_targeting("You drew freeze. Who should be frozen?")
    }

    fn draw3_target(&mut self) -> TargetingStrategy {
        self.pick_targeting("You drew draw_3. Who should take the three draws?")
    }
}

impl HumanDecider {
    fn pick_targeting(&mut self, question: &str) -> TargetingStrategy {
        loop {
            println!("\n{question}");
            for (index, strategy) in TARGETING_OPTIONS.iter().enumerate() {
                println!("  [{index}] {strategy:?}");
            }
            let Some(answer) = ask("Selection: ") else {
                eprintln!("stdin closed; targeting a random opponent");
                return TargetingStrategy::RandomOpponent;
            };
            let Ok(choice) = answer.parse::<usize>() else {
                println!("Invalid input: '{answer}'. Please enter a number.");
                continue;
            };
            if let Some(strategy) = TARGETING_OPTIONS.get(choice) {
                return *strategy;
            }
            println!("Index out of range. Please choose a valid option.");
        }
    }
}

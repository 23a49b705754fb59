use crate::hand::Hand;
use crate::strategy::{Decider, DrawingStrategy, TargetingStrategy};

/// Strategy-table decider: every answer is a pure function of the current
/// hand and the configured strategies, with no hidden state.
#[derive(Copy, Clone, Debug)]
pub struct AutoDecider {
    pub drawing: DrawingStrategy,
    pub targeting: TargetingStrategy,
}

impl AutoDecider {
    pub fn new(drawing: DrawingStrategy, targeting: TargetingStrategy) -> Self {
        Self { drawing, targeting }
    }
}

impl Default for AutoDecider {
    fn default() -> Self {
        Self::new(DrawingStrategy::Below25Value, TargetingStrategy::RandomOpponent)
    }
}

impl Decider for AutoDecider {
    fn decide_draw(&mut self, hand: &Hand) -> bool {
        self.drawing.wants_draw(hand)
    }

    fn freeze_target(&mut self) -> TargetingStrategy {
        self.targeting
    }

    fn draw3_target(&mut self) -> TargetingStrategy {
        self.targeting
    }
}

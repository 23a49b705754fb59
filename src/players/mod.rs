pub mod auto;
pub mod human;
pub mod registry;

pub use auto::AutoDecider;
pub use human::HumanDecider;
pub use registry::{create_player_from_spec, label_for_spec};

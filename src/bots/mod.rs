pub mod heuristic;
pub mod human;
pub mod registry;

pub use heuristic::HeuristicBot;
pub use human::HumanBot;

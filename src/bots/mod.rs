pub mod human;

pub use human::HumanBot;

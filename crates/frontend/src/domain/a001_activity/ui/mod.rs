pub mod card;

pub use card::ActivityCard;

//! Game rules that sit above the raw state: win determination.

pub mod outcome;

pub use outcome::Outcome;

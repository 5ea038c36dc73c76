pub mod player;
pub mod verdict;

// Re-export all types
pub use player::*;
pub use verdict::*;

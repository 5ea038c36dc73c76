pub mod comparison;
pub mod continent;
pub mod daily;
pub mod ranking;

// Re-export main components
pub use comparison::*;
pub use continent::*;
pub use daily::*;
pub use ranking::*;

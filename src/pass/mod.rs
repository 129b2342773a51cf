//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use generate::generate;
pub use generate::{Constraints, DEFAULT_LENGTH, DEFAULT_MAX_REPEAT};
pub use generate::{DEFAULT_MIN_CHAR, MIN_LENGTH};

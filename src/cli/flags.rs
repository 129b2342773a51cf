use crate::pass::{Constraints, DEFAULT_LENGTH, DEFAULT_MAX_REPEAT, DEFAULT_MIN_CHAR};

/// Parsed command-line flags, pre-filled with the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub chars: String,
    pub length: usize,
    pub min_upper: usize,
    pub min_lower: usize,
    pub min_digit: usize,
    pub min_special: usize,
    pub max_repeat: usize,
}

impl Default for CliFlags {
    fn default() -> Self {
        Self {
            help: false,
            version: false,
            chars: String::from("AaDS"),
            length: DEFAULT_LENGTH,
            min_upper: DEFAULT_MIN_CHAR,
            min_lower: DEFAULT_MIN_CHAR,
            min_digit: DEFAULT_MIN_CHAR,
            min_special: DEFAULT_MIN_CHAR,
            max_repeat: DEFAULT_MAX_REPEAT,
        }
    }
}

impl CliFlags {
    pub fn constraints(&self) -> Constraints {
        Constraints {
            length: self.length,
            min_upper: self.min_upper,
            min_lower: self.min_lower,
            min_digit: self.min_digit,
            min_special: self.min_special,
            max_repeat: self.max_repeat,
        }
    }
}

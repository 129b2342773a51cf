//! Character classes and alphabet construction.

/// Uppercase reference set.
pub const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase reference set.
pub const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Digit reference set.
pub const DIGIT: &[u8] = b"0123456789";
/// Special-character reference set. Includes a literal space.
pub const SPECIAL: &[u8] = b"`~!@#$%^&*()-_=+\\ |]}[{'\";:/?.>,<";

/// The four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    /// All classes, in the order their reference sets are concatenated.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// The immutable reference set for this class.
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPER,
            CharClass::Lower => LOWER,
            CharClass::Digit => DIGIT,
            CharClass::Special => SPECIAL,
        }
    }

    /// The letter that selects this class in a `-chars` selector string.
    pub fn selector(self) -> char {
        match self {
            CharClass::Upper => 'A',
            CharClass::Lower => 'a',
            CharClass::Digit => 'D',
            CharClass::Special => 'S',
        }
    }

    pub fn contains(self, byte: u8) -> bool {
        self.chars().contains(&byte)
    }
}

/// Resolve a selector string to the classes it names, in fixed class order.
/// Unrecognized selector characters are ignored. An empty selection falls
/// back to all four classes.
pub fn selected_classes(selector: &str) -> Vec<CharClass> {
    let selected: Vec<CharClass> = CharClass::ALL
        .into_iter()
        .filter(|class| selector.contains(class.selector()))
        .collect();

    if selected.is_empty() {
        CharClass::ALL.to_vec()
    } else {
        selected
    }
}

/// Build the alphabet for a selector: the reference sets of every selected
/// class, concatenated in fixed class order. Built once per generation
/// request and never mutated afterward.
pub fn build(selector: &str) -> Vec<u8> {
    selected_classes(selector)
        .into_iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect()
}

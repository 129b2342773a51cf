//! Constrained password generation with a bounded retry budget.

use rand::Rng;
use thiserror::Error;
use zeroize::Zeroize;

use super::charset::CharClass;

/// Ceiling on rejected placements and rejected candidates, combined,
/// per generation call.
pub const MAX_ATTEMPTS: u32 = 10_000;

pub const MIN_LENGTH: usize = 6;
pub const DEFAULT_LENGTH: usize = 16;
pub const DEFAULT_MIN_CHAR: usize = 3;
pub const DEFAULT_MAX_REPEAT: usize = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("failed to generate password matching criteria after {attempts} tries")]
    BudgetExhausted { attempts: u32 },
}

/// Compositional constraints, fixed for the duration of one call.
#[derive(Debug, Clone)]
pub struct Constraints {
    pub length: usize,
    pub min_upper: usize,
    pub min_lower: usize,
    pub min_digit: usize,
    pub min_special: usize,
    pub max_repeat: usize,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            min_upper: DEFAULT_MIN_CHAR,
            min_lower: DEFAULT_MIN_CHAR,
            min_digit: DEFAULT_MIN_CHAR,
            min_special: DEFAULT_MIN_CHAR,
            max_repeat: DEFAULT_MAX_REPEAT,
        }
    }
}

/// Single attempt counter shared by the inner placement loop and the outer
/// candidate loop, so one call never performs more than the ceiling's worth
/// of wasted draws in total.
struct AttemptBudget {
    used: u32,
    ceiling: u32,
}

impl AttemptBudget {
    fn new(ceiling: u32) -> Self {
        Self { used: 0, ceiling }
    }

    fn spend(&mut self) -> Result<(), GenerateError> {
        if self.used >= self.ceiling {
            return Err(GenerateError::BudgetExhausted {
                attempts: self.used,
            });
        }
        self.used += 1;
        Ok(())
    }
}

/// Generate one password of exactly `constraints.length` bytes drawn from
/// `alphabet`, satisfying every class minimum and the repeat limit.
///
/// Retries whole candidates (and individual placements) until the shared
/// budget runs out. Not every constraint combination is satisfiable, so
/// exhaustion is a normal terminal outcome, not a hang.
pub fn generate<R: Rng>(
    alphabet: &[u8],
    constraints: &Constraints,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let mut budget = AttemptBudget::new(MAX_ATTEMPTS);

    loop {
        budget.spend()?;
        let mut candidate = build_candidate(alphabet, constraints, rng, &mut budget)?;

        if is_valid(&candidate, constraints) {
            // Safety: alphabet bytes are all ASCII
            return Ok(unsafe { String::from_utf8_unchecked(candidate) });
        }

        candidate.zeroize();
    }
}

/// Build one candidate left to right. A draw that would push a character
/// past `max_repeat` is rejected: the position is redrawn and one unit of
/// the shared budget is consumed. The burned occurrence count is kept for
/// the rest of the attempt; the full re-check in [`is_valid`] covers it.
fn build_candidate<R: Rng>(
    alphabet: &[u8],
    constraints: &Constraints,
    rng: &mut R,
    budget: &mut AttemptBudget,
) -> Result<Vec<u8>, GenerateError> {
    let mut repeats = vec![0usize; alphabet.len()];
    let mut candidate = Vec::with_capacity(constraints.length);

    while candidate.len() < constraints.length {
        let idx = rng.random_range(0..alphabet.len());
        repeats[idx] += 1;
        if repeats[idx] > constraints.max_repeat {
            if let Err(e) = budget.spend() {
                candidate.zeroize();
                return Err(e);
            }
            continue;
        }
        candidate.push(alphabet[idx]);
    }

    Ok(candidate)
}

/// Validate a completed candidate: exact length, every class minimum met,
/// and an independent whole-candidate re-count of the repeat limit (the
/// incremental counter is not trusted here).
fn is_valid(candidate: &[u8], constraints: &Constraints) -> bool {
    candidate.len() == constraints.length
        && class_count(candidate, CharClass::Upper) >= constraints.min_upper
        && class_count(candidate, CharClass::Lower) >= constraints.min_lower
        && class_count(candidate, CharClass::Digit) >= constraints.min_digit
        && class_count(candidate, CharClass::Special) >= constraints.min_special
        && within_repeat_limit(candidate, constraints.max_repeat)
}

fn class_count(candidate: &[u8], class: CharClass) -> usize {
    candidate.iter().filter(|&&b| class.contains(b)).count()
}

fn within_repeat_limit(candidate: &[u8], max_repeat: usize) -> bool {
    candidate
        .iter()
        .all(|&b| candidate.iter().filter(|&&other| other == b).count() <= max_repeat)
}

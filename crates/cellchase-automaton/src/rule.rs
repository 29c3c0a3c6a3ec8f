//! Life-like birth/survival rules.

use std::error::Error;
use std::fmt;

/// A life-like rule over the 8-connected neighbourhood.
///
/// A dead cell is born when its living-neighbour count is in the birth
/// set; a living cell survives when its count is in the survival set.
/// Each set is a bitmask over counts `0..=8`.
///
/// # Examples
///
/// ```
/// use cellchase_automaton::Rule;
///
/// let rule = Rule::CHASE;
/// assert!(rule.next_state(false, 2));
/// assert!(!rule.next_state(false, 4));
/// assert!(rule.next_state(true, 5));
/// assert!(!rule.next_state(true, 3));
/// assert_eq!(rule.to_string(), "B23/S5678");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

/// Highest neighbour count in an 8-connected neighbourhood.
const MAX_COUNT: u8 = 8;

impl Rule {
    /// The game's rule: dead cells are born on 2 or 3 living neighbours,
    /// living cells survive only with 5 or more.
    pub const CHASE: Rule = Rule {
        birth: (1 << 2) | (1 << 3),
        survival: (1 << 5) | (1 << 6) | (1 << 7) | (1 << 8),
    };

    /// Conway's Game of Life (B3/S23).
    pub const CONWAY: Rule = Rule {
        birth: 1 << 3,
        survival: (1 << 2) | (1 << 3),
    };

    /// Build a rule from explicit birth and survival counts.
    ///
    /// Counts must be in `0..=8`.
    pub fn from_counts(birth: &[u8], survival: &[u8]) -> Result<Self, RuleError> {
        Ok(Self {
            birth: mask(birth)?,
            survival: mask(survival)?,
        })
    }

    /// `true` if a dead cell with `living` neighbours is born.
    pub fn births_on(&self, living: u8) -> bool {
        living <= MAX_COUNT && self.birth & (1 << living) != 0
    }

    /// `true` if a living cell with `living` neighbours survives.
    pub fn survives_on(&self, living: u8) -> bool {
        living <= MAX_COUNT && self.survival & (1 << living) != 0
    }

    /// The next liveness of a cell given its current state and
    /// living-neighbour count.
    pub fn next_state(&self, alive: bool, living: u8) -> bool {
        if alive {
            self.survives_on(living)
        } else {
            self.births_on(living)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::CHASE
    }
}

fn mask(counts: &[u8]) -> Result<u16, RuleError> {
    counts.iter().try_fold(0u16, |acc, &n| {
        if n > MAX_COUNT {
            Err(RuleError::CountOutOfRange { count: n })
        } else {
            Ok(acc | (1 << n))
        }
    })
}

/// Renders in `B<birth>/S<survival>` notation.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in (0..=MAX_COUNT).filter(|&n| self.births_on(n)) {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in (0..=MAX_COUNT).filter(|&n| self.survives_on(n)) {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Errors from building a [`Rule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A neighbour count above 8 was supplied.
    CountOutOfRange {
        /// The offending count.
        count: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOutOfRange { count } => {
                write!(f, "neighbour count {count} outside 0..=8")
            }
        }
    }
}

impl Error for RuleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chase_rule_table() {
        let r = Rule::CHASE;
        for n in 0..=8u8 {
            assert_eq!(r.next_state(false, n), n == 2 || n == 3, "dead, {n}");
            assert_eq!(r.next_state(true, n), n >= 5, "alive, {n}");
        }
    }

    #[test]
    fn from_counts_matches_constant() {
        let r = Rule::from_counts(&[2, 3], &[5, 6, 7, 8]).unwrap();
        assert_eq!(r, Rule::CHASE);
        assert_eq!(Rule::default(), Rule::CHASE);
    }

    #[test]
    fn from_counts_rejects_nine() {
        assert_eq!(
            Rule::from_counts(&[9], &[]),
            Err(RuleError::CountOutOfRange { count: 9 })
        );
    }

    #[test]
    fn display_notation() {
        assert_eq!(Rule::CONWAY.to_string(), "B3/S23");
        assert_eq!(Rule::from_counts(&[], &[]).unwrap().to_string(), "B/S");
    }

    #[test]
    fn counts_above_eight_never_match() {
        let r = Rule::from_counts(&[0, 1, 2, 3, 4, 5, 6, 7, 8], &[8]).unwrap();
        assert!(!r.births_on(9));
        assert!(!r.survives_on(200));
    }
}

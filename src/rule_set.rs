use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of a cell in the next generation, given whether it's alive now and how many of its
    /// neighbours are.
    pub fn next(&self, alive: bool, neighbours: u8) -> bool {
        // there are at most 8 neighbours
        if neighbours > 8 {
            return false;
        }

        let mask = 1 << neighbours;

        if alive {
            self.survivals() & mask == mask
        } else {
            self.births() & mask == mask
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule must start with b or B")]
    MissingBirth,

    #[error("Rule must contain s or S after the births")]
    MissingSurvival,

    #[error("Invalid neighbour count '{got}', expected a digit in 0..=8")]
    InvalidDigit { got: char },
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Parse rules that look like `b3/s23`, `B3/S23` or `b3s23`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let Some(rest) = s.strip_prefix(['b', 'B']) else {
            return Err(RuleError::MissingBirth);
        };

        let Some((b, s)) = rest.split_once(['s', 'S']) else {
            return Err(RuleError::MissingSurvival);
        };

        // the slash between births and survivals is optional
        let b = b.strip_suffix('/').unwrap_or(b);

        Ok(RuleSet::new(digits_to_num(b)?, digits_to_num(s)?))
    }
}

/// Convert the human readable birth/survival digits to a packed bit representation
fn digits_to_num(digits: &str) -> Result<u16, RuleError> {
    let mut n = 0;

    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) if d <= 8 => n |= 1 << d,
            _ => return Err(RuleError::InvalidDigit { got: c }),
        }
    }

    Ok(n)
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8)
                .filter(|n| mask & (1 << n) != 0)
                .map(|n| char::from(b'0' + n as u8))
                .collect()
        };

        write!(
            f,
            "B{}/S{}",
            digits(self.births()),
            digits(self.survivals())
        )
    }
}

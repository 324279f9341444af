use crate::RuleNumError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the 256 rules of [elementary cellular automata](https://en.wikipedia.org/wiki/Elementary_cellular_automaton).
///
/// The next state of a cell depends on itself and its left and right neighbors.
///
/// The 8 possible neighborhoods are listed in [`PATTERNS`](ElementaryRule::PATTERNS),
/// from `111` down to `000`. The `i`-th digit of the 8-digit binary representation of the
/// rule number, counting from the most significant bit, is the next state of the center cell
/// of the `i`-th pattern.
///
/// For example, rule 30 is `00011110` in binary:
///
/// ```text
/// 111 110 101 100 011 010 001 000
///  0   0   0   1   1   1   1   0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct ElementaryRule {
    rule_num: u8,
}

impl ElementaryRule {
    /// The smallest rule number.
    pub const MIN: i64 = 0;

    /// The largest rule number.
    pub const MAX: i64 = 255;

    /// Radius of the neighborhood.
    pub const RADIUS: usize = 1;

    /// Number of digits in the binary representation of the rule number.
    pub const BITS: usize = 8;

    /// The 8 possible neighborhoods, as `(left, center, right)`.
    pub const PATTERNS: [[bool; 3]; 8] = [
        [true, true, true],
        [true, true, false],
        [true, false, true],
        [true, false, false],
        [false, true, true],
        [false, true, false],
        [false, false, true],
        [false, false, false],
    ];

    /// Creates a rule from its number.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule number is not in `[0, 255]`.
    pub const fn new(rule_num: i64) -> Result<Self, RuleNumError> {
        match RuleNumError::check(rule_num, Self::MIN, Self::MAX) {
            Ok(()) => Ok(Self {
                rule_num: rule_num as u8,
            }),
            Err(e) => Err(e),
        }
    }

    /// The rule number.
    pub const fn rule_num(&self) -> u8 {
        self.rule_num
    }

    /// The rule number as an 8-digit binary string.
    pub fn binary(&self) -> String {
        format!("{:08b}", self.rule_num)
    }

    /// The `i`-th digit of the binary representation, counting from the most significant bit.
    const fn bit(&self, i: usize) -> bool {
        (self.rule_num >> (Self::BITS - 1 - i)) & 1 == 1
    }

    /// The next state of the center cell of a 3-cell neighborhood.
    ///
    /// A neighborhood that matches none of the [`PATTERNS`](ElementaryRule::PATTERNS)
    /// evolves to a dead cell.
    pub fn evolve_cell(&self, neighborhood: &[bool]) -> bool {
        Self::PATTERNS
            .iter()
            .position(|pattern| pattern.as_slice() == neighborhood)
            .is_some_and(|i| self.bit(i))
    }

    /// A two-line representation of the rule table.
    ///
    /// The first line shows the 8 possible neighborhoods separated by spaces.
    /// The second line shows the next state of each center cell, aligned with the
    /// center of its neighborhood.
    ///
    /// ```rust
    /// # use ca_rules1d::ElementaryRule;
    /// let rule = ElementaryRule::new(30).unwrap();
    /// assert_eq!(
    ///     rule.rule_table_string('.', '#'),
    ///     "### ##. #.# #.. .## .#. ..# ...\n \
    ///       .   .   .   #   #   #   #   . "
    /// );
    /// ```
    pub fn rule_table_string(&self, false_symbol: char, true_symbol: char) -> String {
        let symbol = |state: bool| if state { true_symbol } else { false_symbol };

        let patterns = Self::PATTERNS
            .iter()
            .map(|pattern| pattern.iter().map(|&state| symbol(state)).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");

        let states = (0..Self::BITS)
            .map(|i| format!(" {} ", symbol(self.bit(i))))
            .collect::<Vec<_>>()
            .join(" ");

        format!("{patterns}\n{states}")
    }
}

impl TryFrom<i64> for ElementaryRule {
    type Error = RuleNumError;

    fn try_from(rule_num: i64) -> Result<Self, Self::Error> {
        Self::new(rule_num)
    }
}

impl From<ElementaryRule> for i64 {
    fn from(rule: ElementaryRule) -> Self {
        rule.rule_num as i64
    }
}

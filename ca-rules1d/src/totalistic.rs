use crate::RuleNumError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the 64 totalistic rules with a neighborhood of radius 2.
///
/// The next state of a cell only depends on the number of living cells among
/// itself and its two neighbors on each side, which is between 0 and 5.
///
/// The 6-digit binary representation of the rule number lists the next state
/// for the counts 5, 4, 3, 2, 1, 0, in this order. So the count `c` corresponds to
/// the digit at position `5 - c`, counting from the most significant bit.
///
/// For example, rule 20 is `010100` in binary:
///
/// ```text
/// 5 4 3 2 1 0
/// 0 1 0 1 0 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct TotalisticRule {
    rule_num: u8,
}

impl TotalisticRule {
    /// The smallest rule number.
    pub const MIN: i64 = 0;

    /// The largest rule number.
    pub const MAX: i64 = 63;

    /// Radius of the neighborhood.
    pub const RADIUS: usize = 2;

    /// Number of digits in the binary representation of the rule number.
    pub const BITS: usize = 6;

    /// The largest possible number of living cells in a neighborhood.
    pub const MAX_COUNT: usize = 2 * Self::RADIUS + 1;

    /// Creates a rule from its number.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule number is not in `[0, 63]`.
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

    /// The rule number as a 6-digit binary string.
    pub fn binary(&self) -> String {
        format!("{:06b}", self.rule_num)
    }

    /// The next state of a cell whose neighborhood has `count` living cells.
    pub const fn next_state(&self, count: usize) -> bool {
        count <= Self::MAX_COUNT && (self.rule_num >> count) & 1 == 1
    }

    /// The next state of the center cell of a 5-cell neighborhood.
    pub fn evolve_cell(&self, neighborhood: &[bool]) -> bool {
        let count = neighborhood.iter().filter(|&&state| state).count();
        self.next_state(count)
    }

    /// A two-line representation of the rule table.
    ///
    /// The first line shows the counts of living cells from 5 down to 0.
    /// The second line shows the corresponding next states.
    ///
    /// ```rust
    /// # use ca_rules1d::TotalisticRule;
    /// let rule = TotalisticRule::new(20).unwrap();
    /// assert_eq!(rule.rule_table_string('.', '#'), "5 4 3 2 1 0\n. # . # . .");
    /// ```
    pub fn rule_table_string(&self, false_symbol: char, true_symbol: char) -> String {
        let counts = (0..=Self::MAX_COUNT)
            .rev()
            .map(|count| count.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let states = (0..=Self::MAX_COUNT)
            .rev()
            .map(|count| {
                if self.next_state(count) {
                    true_symbol.to_string()
                } else {
                    false_symbol.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        format!("{counts}\n{states}")
    }
}

impl TryFrom<i64> for TotalisticRule {
    type Error = RuleNumError;

    fn try_from(rule_num: i64) -> Result<Self, Self::Error> {
        Self::new(rule_num)
    }
}

impl From<TotalisticRule> for i64 {
    fn from(rule: TotalisticRule) -> Self {
        rule.rule_num as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 5-cell neighborhood with `count` living cells.
    fn neighborhood(count: usize) -> Vec<bool> {
        (0..TotalisticRule::MAX_COUNT).map(|i| i < count).collect()
    }

    #[test]
    fn test_range() {
        assert!(TotalisticRule::new(0).is_ok());
        assert!(TotalisticRule::new(63).is_ok());
        assert_eq!(
            TotalisticRule::new(64),
            Err(RuleNumError {
                rule_num: 64,
                min: 0,
                max: 63
            })
        );
        assert_eq!(
            TotalisticRule::new(-5).unwrap_err().to_string(),
            "ruleNum is outside the range [0, 63]."
        );
    }

    #[test]
    fn test_binary() {
        assert_eq!(TotalisticRule::new(0).unwrap().binary(), "000000");
        assert_eq!(TotalisticRule::new(20).unwrap().binary(), "010100");
        assert_eq!(TotalisticRule::new(63).unwrap().binary(), "111111");
    }

    #[test]
    fn test_evolve_cell_all_rules() {
        for rule_num in 0..=63 {
            let rule = TotalisticRule::new(rule_num).unwrap();
            let binary = rule.binary();
            for count in 0..=5 {
                let expected = binary.as_bytes()[5 - count] == b'1';
                assert_eq!(
                    rule.evolve_cell(&neighborhood(count)),
                    expected,
                    "rule {rule_num}, count {count}"
                );
            }
        }
    }

    #[test]
    fn test_evolve_cell_ignores_positions() {
        let rule = TotalisticRule::new(0b000100).unwrap();
        assert!(rule.evolve_cell(&[true, true, false, false, false]));
        assert!(rule.evolve_cell(&[false, true, false, true, false]));
        assert!(rule.evolve_cell(&[true, false, false, false, true]));
        assert!(!rule.evolve_cell(&[true, true, true, false, false]));
    }

    #[test]
    fn test_rule_table_string() {
        let rule = TotalisticRule::new(1).unwrap();
        assert_eq!(rule.rule_table_string('0', '1'), "5 4 3 2 1 0\n0 0 0 0 0 1");

        let rule = TotalisticRule::new(63).unwrap();
        assert_eq!(rule.rule_table_string('.', '#'), "5 4 3 2 1 0\n# # # # # #");
    }
}

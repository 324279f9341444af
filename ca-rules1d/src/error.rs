use thiserror::Error;

/// An error that can occur when creating a rule from a rule number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("ruleNum is outside the range [{min}, {max}].")]
pub struct RuleNumError {
    /// The rule number that was rejected.
    pub rule_num: i64,
    /// The smallest valid rule number.
    pub min: i64,
    /// The largest valid rule number.
    pub max: i64,
}

impl RuleNumError {
    /// Checks whether the rule number lies in `[min, max]`.
    pub(crate) const fn check(rule_num: i64, min: i64, max: i64) -> Result<(), Self> {
        if rule_num < min || rule_num > max {
            Err(Self { rule_num, min, max })
        } else {
            Ok(())
        }
    }
}

/// An error that can occur when looking up a cell outside of a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Cell index {index} is out of range for a generation of {size} cells")]
pub struct IndexError {
    /// The requested index.
    pub index: usize,
    /// The number of cells in the generation.
    pub size: usize,
}

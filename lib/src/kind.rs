use crate::error::ParseKindError;
use ca_rules1d::{ElementaryRule, Rule, RuleNumError, TotalisticRule};
#[cfg(feature = "clap")]
use clap::ValueEnum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{ops::RangeInclusive, str::FromStr};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Type of a cellular automaton.
///
/// The kind determines which family of rules is used, and thus the radius of
/// the neighborhood and the range of valid rule numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AutomatonKind {
    /// Elementary cellular automaton.
    ///
    /// Rule numbers range from 0 to 255.
    #[strum(serialize = "ECA")]
    #[cfg_attr(feature = "clap", value(name = "ECA"))]
    #[cfg_attr(feature = "serde", serde(rename = "ECA"))]
    Elementary,

    /// Totalistic cellular automaton.
    ///
    /// Rule numbers range from 0 to 63.
    #[strum(serialize = "TCA")]
    #[cfg_attr(feature = "clap", value(name = "TCA"))]
    #[cfg_attr(feature = "serde", serde(rename = "TCA"))]
    Totalistic,
}

impl AutomatonKind {
    /// The range of valid rule numbers.
    pub const fn rule_range(self) -> RangeInclusive<i64> {
        match self {
            Self::Elementary => ElementaryRule::MIN..=ElementaryRule::MAX,
            Self::Totalistic => TotalisticRule::MIN..=TotalisticRule::MAX,
        }
    }

    /// Radius of the neighborhood.
    pub const fn radius(self) -> usize {
        match self {
            Self::Elementary => ElementaryRule::RADIUS,
            Self::Totalistic => TotalisticRule::RADIUS,
        }
    }

    /// Creates a rule of this kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule number is out of [`rule_range`](AutomatonKind::rule_range).
    pub fn rule(self, rule_num: i64) -> Result<Rule, RuleNumError> {
        match self {
            Self::Elementary => Rule::elementary(rule_num),
            Self::Totalistic => Rule::totalistic(rule_num),
        }
    }

    /// The kind of a rule.
    pub const fn of(rule: &Rule) -> Self {
        match rule {
            Rule::Elementary(_) => Self::Elementary,
            Rule::Totalistic(_) => Self::Totalistic,
        }
    }
}

/// Parses `ECA` or `TCA`, ignoring case.
impl FromStr for AutomatonKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

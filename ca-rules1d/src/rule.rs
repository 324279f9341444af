use crate::{ElementaryRule, Generation, RuleNumError, TotalisticRule};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Returns the states of the `2 * radius + 1` cells centered at `index`.
///
/// The row wraps around: the left neighbor of the first cell is the last cell,
/// and the right neighbor of the last cell is the first cell.
///
/// ```text
/// index:     0 1 2            radius 1 around 0:  2 0 1
/// states:    # . .                                . # .
/// ```
///
/// # Examples
///
/// ```rust
/// # use ca_rules1d::{neighborhood_by_radius, Generation};
/// let generation = Generation::new(vec![true, false, false]);
/// assert_eq!(
///     neighborhood_by_radius(0, 1, &generation),
///     vec![false, true, false]
/// );
/// ```
pub fn neighborhood_by_radius(index: usize, radius: usize, generation: &Generation) -> Vec<bool> {
    let size = generation.size() as isize;
    let index = index as isize;
    let radius = radius as isize;

    (-radius..=radius)
        .map(|offset| generation[(index + offset).rem_euclid(size) as usize])
        .collect()
}

/// A rule of a one-dimensional, two-state cellular automaton.
///
/// Each variant carries its own validated rule number.
///
/// # Examples
///
/// Rule 90 is the XOR of the left and right neighbors:
///
/// ```rust
/// # use ca_rules1d::{Generation, Rule};
/// let rule = Rule::elementary(90).unwrap();
/// let generation = Generation::from_symbols("0001000", '1');
/// let next = rule.evolve(&generation);
/// assert_eq!(next.render('0', '1'), "0010100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rule {
    /// An elementary rule, with a neighborhood of radius 1.
    Elementary(ElementaryRule),
    /// A totalistic rule, with a neighborhood of radius 2.
    Totalistic(TotalisticRule),
}

impl Rule {
    /// Creates an elementary rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule number is not in `[0, 255]`.
    pub fn elementary(rule_num: i64) -> Result<Self, RuleNumError> {
        ElementaryRule::new(rule_num).map(Self::Elementary)
    }

    /// Creates a totalistic rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule number is not in `[0, 63]`.
    pub fn totalistic(rule_num: i64) -> Result<Self, RuleNumError> {
        TotalisticRule::new(rule_num).map(Self::Totalistic)
    }

    /// The rule number.
    pub const fn rule_num(&self) -> u8 {
        match self {
            Self::Elementary(rule) => rule.rule_num(),
            Self::Totalistic(rule) => rule.rule_num(),
        }
    }

    /// The rule number in binary, most significant bit first, zero-padded
    /// to 8 digits for elementary rules and 6 digits for totalistic rules.
    pub fn binary(&self) -> String {
        match self {
            Self::Elementary(rule) => rule.binary(),
            Self::Totalistic(rule) => rule.binary(),
        }
    }

    /// Radius of the neighborhood.
    pub const fn radius(&self) -> usize {
        match self {
            Self::Elementary(_) => ElementaryRule::RADIUS,
            Self::Totalistic(_) => TotalisticRule::RADIUS,
        }
    }

    /// Returns the states of the cells in the neighborhood of the cell with the given index.
    pub fn get_neighborhood(&self, index: usize, generation: &Generation) -> Vec<bool> {
        neighborhood_by_radius(index, self.radius(), generation)
    }

    /// The next state of the center cell of a neighborhood.
    pub fn evolve_cell(&self, neighborhood: &[bool]) -> bool {
        match self {
            Self::Elementary(rule) => rule.evolve_cell(neighborhood),
            Self::Totalistic(rule) => rule.evolve_cell(neighborhood),
        }
    }

    /// Computes the next generation.
    ///
    /// Every cell of the next generation is computed from the given generation,
    /// which is left untouched.
    pub fn evolve(&self, generation: &Generation) -> Generation {
        (0..generation.size())
            .map(|index| self.evolve_cell(&self.get_neighborhood(index, generation)))
            .collect()
    }

    /// A two-line representation of the rule table, using the given symbols
    /// for dead and living cells.
    ///
    /// See [`ElementaryRule::rule_table_string`] and [`TotalisticRule::rule_table_string`].
    pub fn rule_table_string(&self, false_symbol: char, true_symbol: char) -> String {
        match self {
            Self::Elementary(rule) => rule.rule_table_string(false_symbol, true_symbol),
            Self::Totalistic(rule) => rule.rule_table_string(false_symbol, true_symbol),
        }
    }
}

impl From<ElementaryRule> for Rule {
    fn from(rule: ElementaryRule) -> Self {
        Self::Elementary(rule)
    }
}

impl From<TotalisticRule> for Rule {
    fn from(rule: TotalisticRule) -> Self {
        Self::Totalistic(rule)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elementary(rule) => write!(f, "ECA {}", rule.rule_num()),
            Self::Totalistic(rule) => write!(f, "TCA {}", rule.rule_num()),
        }
    }
}

use crate::IndexError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
};

/// A row of cells at a fixed time.
///
/// The cells are indexed from left to right starting at zero.
/// A generation always has at least one cell, and its size never changes after
/// construction. An empty input collapses to a single dead cell.
///
/// # Examples
///
/// ```rust
/// # use ca_rules1d::Generation;
/// let generation = Generation::from_symbols("..#.", '#');
/// assert_eq!(generation.size(), 4);
/// assert_eq!(generation.get_state(2), Ok(true));
/// assert_eq!(generation.render('0', '1'), "0010");
///
/// let empty = Generation::from_symbols("", '#');
/// assert_eq!(empty.states(), vec![false]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<bool>", into = "Vec<bool>"))]
pub struct Generation {
    /// The cell states. Never empty.
    states: Vec<bool>,
}

impl Generation {
    /// Creates a generation from a list of cell states.
    ///
    /// If the list is empty, the generation has a single dead cell.
    pub fn new(states: impl Into<Vec<bool>>) -> Self {
        let mut states = states.into();
        if states.is_empty() {
            states.push(false);
        }
        Self { states }
    }

    /// Creates a generation with one cell for each character in the string.
    ///
    /// A cell is alive if its character is equal to `true_symbol`, and dead otherwise.
    pub fn from_symbols(states: &str, true_symbol: char) -> Self {
        states.chars().map(|c| c == true_symbol).collect()
    }

    /// Returns the state of the cell with the given index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is not smaller than the [`size`](Generation::size).
    pub fn get_state(&self, index: usize) -> Result<bool, IndexError> {
        self.states.get(index).copied().ok_or(IndexError {
            index,
            size: self.size(),
        })
    }

    /// Returns a copy of all the cell states.
    pub fn states(&self) -> Vec<bool> {
        self.states.clone()
    }

    /// Returns the cell states as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.states
    }

    /// Renders the cells using the given symbols for dead and living cells.
    pub fn render(&self, false_symbol: char, true_symbol: char) -> String {
        self.states
            .iter()
            .map(|&state| if state { true_symbol } else { false_symbol })
            .collect()
    }

    /// Number of cells.
    pub const fn size(&self) -> usize {
        self.states.len()
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.states.iter().filter(|&&state| state).count()
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<bool>> for Generation {
    fn from(states: Vec<bool>) -> Self {
        Self::new(states)
    }
}

impl From<Generation> for Vec<bool> {
    fn from(generation: Generation) -> Self {
        generation.states
    }
}

impl FromIterator<bool> for Generation {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Indexing panics if the index is out of range.
///
/// Use [`get_state`](Generation::get_state) for a checked lookup.
impl Index<usize> for Generation {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.states[index]
    }
}

/// Renders the generation with `0` for dead cells and `1` for living cells.
impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('0', '1'))
    }
}

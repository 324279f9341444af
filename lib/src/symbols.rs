#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The characters used to display dead and living cells.
///
/// The default is `0` for dead cells and `1` for living cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbols {
    /// Symbol of a dead cell.
    pub false_symbol: char,
    /// Symbol of a living cell.
    pub true_symbol: char,
}

impl Symbols {
    /// Create a new pair of symbols.
    #[inline]
    pub const fn new(false_symbol: char, true_symbol: char) -> Self {
        Self {
            false_symbol,
            true_symbol,
        }
    }

    /// The symbol of a cell in the given state.
    #[inline]
    pub const fn symbol(self, state: bool) -> char {
        if state {
            self.true_symbol
        } else {
            self.false_symbol
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new('0', '1')
    }
}

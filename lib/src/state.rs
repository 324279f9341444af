use crate::{error::ParseStateError, Symbols};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// The saved state of an automaton, in a simple line-based text format.
///
/// ```text
/// 90
/// .#
/// ...#...
/// ```
///
/// - The first line is the rule number.
/// - The second line is exactly two characters: the false symbol, then the true symbol.
/// - The third line is the initial generation.
///
/// The type of the automaton is not part of the format.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavedState {
    /// The rule number. It is not checked against any range here.
    pub rule_num: i64,
    /// The display symbols.
    pub symbols: Symbols,
    /// The initial generation, rendered with [`symbols`](SavedState::symbols).
    pub initial: String,
}

impl FromStr for SavedState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();

        let rule_num = lines.next().ok_or(ParseStateError::Empty)?.trim().parse()?;

        let symbols = lines
            .next()
            .ok_or(ParseStateError::InvalidSymbols)?
            .chars()
            .collect::<Vec<_>>();
        let [false_symbol, true_symbol] = symbols[..] else {
            return Err(ParseStateError::InvalidSymbols);
        };

        // A missing third line is an empty generation.
        let initial = lines.next().unwrap_or_default().to_string();

        Ok(Self {
            rule_num,
            symbols: Symbols::new(false_symbol, true_symbol),
            initial,
        })
    }
}

impl Display for SavedState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.rule_num)?;
        writeln!(f, "{}{}", self.symbols.false_symbol, self.symbols.true_symbol)?;
        writeln!(f, "{}", self.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let state: SavedState = "90\n.#\n...#...\n".parse().unwrap();
        assert_eq!(
            state,
            SavedState {
                rule_num: 90,
                symbols: Symbols::new('.', '#'),
                initial: "...#...".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_crlf_and_whitespace() {
        let state: SavedState = " 30 \r\n01\r\n00100\r\n".parse().unwrap();
        assert_eq!(state.rule_num, 30);
        assert_eq!(state.symbols, Symbols::default());
        assert_eq!(state.initial, "00100");
    }

    #[test]
    fn test_parse_missing_generation() {
        let state: SavedState = "12\nab".parse().unwrap();
        assert_eq!(state.initial, "");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<SavedState>(), Err(ParseStateError::Empty));
        assert!(matches!(
            "ninety\n01\n010".parse::<SavedState>(),
            Err(ParseStateError::MalformedRuleNum(_))
        ));
        assert_eq!(
            "90".parse::<SavedState>(),
            Err(ParseStateError::InvalidSymbols)
        );
        assert_eq!(
            "90\n0\n010".parse::<SavedState>(),
            Err(ParseStateError::InvalidSymbols)
        );
        assert_eq!(
            "90\n. #\n...#...\n".parse::<SavedState>(),
            Err(ParseStateError::InvalidSymbols)
        );
        assert_eq!(
            "90\n.#garbage\n...#...\n".parse::<SavedState>(),
            Err(ParseStateError::InvalidSymbols)
        );
    }

    #[test]
    fn test_display() {
        let state = SavedState {
            rule_num: 7,
            symbols: Symbols::new('-', '+'),
            initial: "-+-".to_string(),
        };
        let text = state.to_string();
        assert_eq!(text, "7\n-+\n-+-\n");
        assert_eq!(text.parse(), Ok(state));
    }
}

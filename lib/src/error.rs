use ca_rules1d::RuleNumError;
use std::num::ParseIntError;
use thiserror::Error;

/// An error that can occur when parsing the type of a cellular automaton.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unknown cellular automaton type {0}")]
pub struct ParseKindError(pub String);

/// An error that can occur when checking a configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The rule number is out of range for the type of cellular automaton.
    #[error(transparent)]
    InvalidRule(#[from] RuleNumError),

    /// The type of cellular automaton is not recognized.
    #[error(transparent)]
    UnknownKind(#[from] ParseKindError),

    /// A numeric argument is not an integer.
    #[error("Invalid {field} {value:?}: {source}")]
    MalformedNumber {
        /// Name of the argument.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
        /// The underlying error.
        source: ParseIntError,
    },

    /// A symbol argument is empty.
    #[error("The {0} must not be empty")]
    EmptySymbol(&'static str),

    /// The wrong number of arguments was given.
    #[error("Expected {expected} arguments, found {found}")]
    WrongArgumentCount {
        /// The expected number of arguments.
        expected: usize,
        /// The number of arguments given.
        found: usize,
    },
}

/// An error that can occur when parsing a saved state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseStateError {
    /// The rule number line is missing.
    #[error("The saved state is empty")]
    Empty,

    /// The rule number is not an integer.
    #[error("Invalid rule number: {0}")]
    MalformedRuleNum(#[from] ParseIntError),

    /// The symbols line is missing, or is not exactly two symbols.
    #[error("The second line must be exactly the false symbol followed by the true symbol")]
    InvalidSymbols,
}

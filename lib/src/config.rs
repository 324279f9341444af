use crate::{error::ConfigError, AutomatonKind, Symbols};
use ca_rules1d::Generation;
#[cfg(feature = "clap")]
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The configuration of a run.
///
/// The positional fields follow the order of the command line arguments:
///
/// ```text
/// ca rule-num false-symbol true-symbol initial-generation num-evolutions
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(Args))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Type of the cellular automaton, `ECA` or `TCA` (case-insensitive).
    #[cfg_attr(feature = "clap", arg(value_enum, ignore_case = true))]
    pub kind: AutomatonKind,

    /// The rule number.
    ///
    /// It must be between 0 and 255 for `ECA`, and between 0 and 63 for `TCA`.
    #[cfg_attr(feature = "clap", arg(allow_negative_numbers = true))]
    pub rule_num: i64,

    /// Symbol of a dead cell.
    pub false_symbol: char,

    /// Symbol of a living cell.
    pub true_symbol: char,

    /// The initial generation.
    ///
    /// Each character equal to the true symbol is a living cell;
    /// every other character is a dead cell.
    ///
    /// Ignored if [`random`](Config::random) is set, and may then be omitted.
    #[cfg_attr(
        feature = "clap",
        arg(
            required_unless_present = "random",
            default_value = "",
            allow_negative_numbers = true
        )
    )]
    pub initial: String,

    /// Number of evolution steps.
    ///
    /// A value that is not positive means no evolution.
    #[cfg_attr(feature = "clap", arg(allow_negative_numbers = true))]
    pub steps: isize,

    /// Start from a random generation of the given width instead.
    #[cfg_attr(feature = "clap", arg(short, long, value_name = "WIDTH"))]
    pub random: Option<usize>,

    /// Random seed for the random initial generation.
    ///
    /// Only used if [`random`](Config::random) is set.
    ///
    /// If this is [`None`], then the seed is randomly generated.
    #[cfg_attr(feature = "clap", arg(long))]
    pub seed: Option<u64>,
}

impl Config {
    /// Number of positional arguments in [`from_args`](Config::from_args).
    pub const NUM_ARGS: usize = 6;

    /// Create a new configuration with the default symbols and no evolution.
    #[inline]
    pub fn new(kind: AutomatonKind, rule_num: i64, initial: &str) -> Self {
        let symbols = Symbols::default();
        Self {
            kind,
            rule_num,
            false_symbol: symbols.false_symbol,
            true_symbol: symbols.true_symbol,
            initial: initial.to_string(),
            steps: 0,
            random: None,
            seed: None,
        }
    }

    /// Create a configuration from the six raw command line arguments:
    ///
    /// ```text
    /// ca rule-num false-symbol true-symbol initial-generation num-evolutions
    /// ```
    ///
    /// Only the first character of each symbol argument is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of arguments is wrong, the type is not recognized,
    /// a number is not an integer, or a symbol is empty.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let [kind, rule_num, false_symbol, true_symbol, initial, steps] = args else {
            return Err(ConfigError::WrongArgumentCount {
                expected: Self::NUM_ARGS,
                found: args.len(),
            });
        };

        let kind = kind.as_ref().parse()?;
        let rule_num = parse_number("rule number", rule_num.as_ref())?;
        let steps = parse_number("number of evolutions", steps.as_ref())?;
        let false_symbol = first_char("false symbol", false_symbol.as_ref())?;
        let true_symbol = first_char("true symbol", true_symbol.as_ref())?;

        Ok(Self::new(kind, rule_num, initial.as_ref())
            .with_symbols(Symbols::new(false_symbol, true_symbol))
            .with_steps(steps))
    }

    /// Set the symbols.
    #[inline]
    pub const fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.false_symbol = symbols.false_symbol;
        self.true_symbol = symbols.true_symbol;
        self
    }

    /// Set the number of evolution steps.
    #[inline]
    pub const fn with_steps(mut self, steps: isize) -> Self {
        self.steps = steps;
        self
    }

    /// Start from a random generation of the given width.
    ///
    /// See [`random`](Config::random) for more details.
    #[inline]
    pub const fn with_random(mut self, width: usize) -> Self {
        self.random = Some(width);
        self
    }

    /// Set the random seed for the random initial generation.
    ///
    /// See [`seed`](Config::seed) for more details.
    #[inline]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The display symbols.
    #[inline]
    pub const fn symbols(&self) -> Symbols {
        Symbols::new(self.false_symbol, self.true_symbol)
    }

    /// Check whether the rule number is valid for the type.
    pub fn check(self) -> Result<Self, ConfigError> {
        self.kind.rule(self.rule_num)?;
        Ok(self)
    }

    /// The initial generation.
    ///
    /// If [`random`](Config::random) is set, each cell is alive with probability 50%.
    pub fn initial_generation(&self) -> Generation {
        match self.random {
            Some(width) => {
                let mut rng = match self.seed {
                    Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
                    None => Xoshiro256PlusPlus::from_entropy(),
                };
                (0..width).map(|_| rng.gen::<bool>()).collect()
            }
            None => Generation::from_symbols(&self.initial, self.true_symbol),
        }
    }
}

/// Parse an integer argument.
fn parse_number<T>(field: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::MalformedNumber {
            field,
            value: value.to_string(),
            source,
        })
}

/// The first character of a symbol argument.
fn first_char(field: &'static str, value: &str) -> Result<char, ConfigError> {
    value.chars().next().ok_or(ConfigError::EmptySymbol(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ca_rules1d::RuleNumError;

    #[test]
    fn test_from_args() {
        let config = Config::from_args(&["eca", "90", ".x", "#", "..#..", "3"]).unwrap();
        assert_eq!(config.kind, AutomatonKind::Elementary);
        assert_eq!(config.rule_num, 90);
        assert_eq!(config.symbols(), Symbols::new('.', '#'));
        assert_eq!(config.initial, "..#..");
        assert_eq!(config.steps, 3);
        assert_eq!(config.initial_generation().states(), vec![false, false, true, false, false]);
    }

    #[test]
    fn test_from_args_errors() {
        assert_eq!(
            Config::from_args(&["ECA", "90"]),
            Err(ConfigError::WrongArgumentCount {
                expected: 6,
                found: 2
            })
        );
        assert!(matches!(
            Config::from_args(&["XCA", "90", "0", "1", "010", "1"]),
            Err(ConfigError::UnknownKind(_))
        ));
        assert!(matches!(
            Config::from_args(&["ECA", "ninety", "0", "1", "010", "1"]),
            Err(ConfigError::MalformedNumber { field: "rule number", .. })
        ));
        assert!(matches!(
            Config::from_args(&["ECA", "90", "0", "1", "010", "1.5"]),
            Err(ConfigError::MalformedNumber { field: "number of evolutions", .. })
        ));
        assert_eq!(
            Config::from_args(&["ECA", "90", "", "1", "010", "1"]),
            Err(ConfigError::EmptySymbol("false symbol"))
        );
    }

    #[test]
    fn test_check() {
        let config = Config::new(AutomatonKind::Totalistic, 64, "0110");
        assert_eq!(
            config.check(),
            Err(ConfigError::InvalidRule(RuleNumError {
                rule_num: 64,
                min: 0,
                max: 63
            }))
        );

        let config = Config::new(AutomatonKind::Elementary, 255, "0110");
        assert_eq!(config.clone().check(), Ok(config));
    }

    #[test]
    fn test_random_generation() {
        let config = Config::new(AutomatonKind::Elementary, 30, "ignored")
            .with_random(64)
            .with_seed(42);
        let generation = config.initial_generation();
        assert_eq!(generation.size(), 64);
        assert_eq!(generation, config.initial_generation());

        let other = config.clone().with_seed(43).initial_generation();
        assert_ne!(generation, other);

        let empty = config.with_random(0).initial_generation();
        assert_eq!(empty.states(), vec![false]);
    }
}

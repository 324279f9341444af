use crate::{config::Config, error::ConfigError, AutomatonKind, SavedState, Symbols};
use ca_rules1d::{Generation, Rule, RuleNumError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    io::{self, Write},
};

/// A one-dimensional, two-state cellular automaton.
///
/// The automaton keeps the whole history of its generations, starting from the
/// initial one. The history is never empty, and only grows: the `i`-th generation
/// is always the result of applying the rule to the `(i - 1)`-th generation.
///
/// Growing the history needs a mutable reference, so sharing an automaton between
/// threads requires external synchronization.
///
/// # Example
///
/// ```
/// use ca1d_lib::{Automaton, AutomatonKind, Generation};
///
/// // Rule 90 on a row of 7 cells, with a single living cell in the middle.
/// let initial = Generation::from_symbols("...#...", '#');
/// let mut automaton = Automaton::new(AutomatonKind::Elementary, 90, initial).unwrap();
///
/// assert_eq!(automaton.evolve(2), 2);
/// assert_eq!(automaton.total_steps(), 2);
/// assert_eq!(
///     automaton.render_all(),
///     "0001000\n\
///      0010100\n\
///      0100010"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "SavedAutomaton", into = "SavedAutomaton"))]
pub struct Automaton {
    /// The rule.
    rule: Rule,

    /// The history of generations. Never empty.
    generations: Vec<Generation>,

    /// The symbols used to render the generations.
    symbols: Symbols,
}

impl Automaton {
    /// Create a new automaton from the type, the rule number, and the initial generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule number is out of range for the type.
    pub fn new(
        kind: AutomatonKind,
        rule_num: i64,
        initial: Generation,
    ) -> Result<Self, RuleNumError> {
        let rule = kind.rule(rule_num)?;
        log::debug!("Created automaton with rule {rule}, {} cells", initial.size());
        Ok(Self::from_rule(rule, initial))
    }

    /// Create a new automaton from an already validated rule.
    pub fn from_rule(rule: Rule, initial: Generation) -> Self {
        Self {
            rule,
            generations: vec![initial],
            symbols: Symbols::default(),
        }
    }

    /// Create a new automaton, parsing its type from a string such as `ECA` or `tca`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is not recognized, or the rule number is out of range.
    pub fn create(kind: &str, rule_num: i64, initial: Generation) -> Result<Self, ConfigError> {
        let kind = kind.parse::<AutomatonKind>()?;
        Ok(Self::new(kind, rule_num, initial)?)
    }

    /// Create a new automaton from a configuration, and evolve it by the
    /// configured number of steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule number is out of range for the type.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut automaton = Self::new(config.kind, config.rule_num, config.initial_generation())?
            .with_symbols(config.symbols());
        automaton.evolve(config.steps);
        Ok(automaton)
    }

    /// Create a new automaton from a saved state.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved rule number is out of range for the type.
    pub fn from_state(kind: AutomatonKind, state: &SavedState) -> Result<Self, RuleNumError> {
        let initial = Generation::from_symbols(&state.initial, state.symbols.true_symbol);
        Ok(Self::new(kind, state.rule_num, initial)?.with_symbols(state.symbols))
    }

    /// The saved state of the automaton: its rule number, symbols, and initial generation.
    pub fn state(&self) -> SavedState {
        SavedState {
            rule_num: self.rule_num().into(),
            symbols: self.symbols,
            initial: self.render_generation(&self.generations[0], self.symbols),
        }
    }

    /// Set the symbols used to render the generations.
    #[inline]
    pub const fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Set the symbols used to render the generations.
    #[inline]
    pub fn set_symbols(&mut self, symbols: Symbols) {
        self.symbols = symbols;
    }

    /// The symbols used to render the generations.
    #[inline]
    pub const fn symbols(&self) -> Symbols {
        self.symbols
    }

    /// The type of the automaton.
    #[inline]
    pub const fn kind(&self) -> AutomatonKind {
        AutomatonKind::of(&self.rule)
    }

    /// The rule.
    #[inline]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The rule number.
    #[inline]
    pub const fn rule_num(&self) -> u8 {
        self.rule.rule_num()
    }

    /// All the generations computed so far, starting from the initial one.
    #[inline]
    pub fn generations(&self) -> &[Generation] {
        &self.generations
    }

    /// Number of evolution steps computed so far.
    #[inline]
    pub const fn total_steps(&self) -> usize {
        self.generations.len() - 1
    }

    /// The last generation computed so far.
    #[inline]
    pub fn current_generation(&self) -> &Generation {
        // The history is never empty.
        &self.generations[self.generations.len() - 1]
    }

    /// Evolve the automaton by the given number of steps.
    ///
    /// Returns the number of generations added, which is `0` if `num_steps`
    /// is not positive.
    pub fn evolve(&mut self, num_steps: isize) -> usize {
        if num_steps <= 0 {
            return 0;
        }

        let num_steps = num_steps as usize;
        self.extend_history(num_steps);
        num_steps
    }

    /// Append `num_steps` generations to the history.
    fn extend_history(&mut self, num_steps: usize) {
        self.generations.reserve(num_steps);
        for _ in 0..num_steps {
            let next = self.rule.evolve(self.current_generation());
            log::trace!("Step {}: {next}", self.generations.len());
            self.generations.push(next);
        }
    }

    /// Evolve the automaton until the generation at `step` has been computed.
    ///
    /// Does nothing if it has already been computed.
    pub fn ensure_evolved_to(&mut self, step: usize) {
        let missing = step.saturating_sub(self.total_steps());
        if missing > 0 {
            log::debug!("Extending the history from step {} to step {step}", self.total_steps());
            self.extend_history(missing);
        }
    }

    /// The generation at the given step, if it has already been computed.
    #[inline]
    pub fn get_generation(&self, step: usize) -> Option<&Generation> {
        self.generations.get(step)
    }

    /// The generation at the given step.
    ///
    /// If it has not been computed yet, the automaton is evolved until it is.
    /// This may take a while for a large `step`.
    pub fn generation_at(&mut self, step: usize) -> &Generation {
        self.ensure_evolved_to(step);
        &self.generations[step]
    }

    /// Render a single generation with the given symbols.
    fn render_generation(&self, generation: &Generation, symbols: Symbols) -> String {
        generation.render(symbols.false_symbol, symbols.true_symbol)
    }

    /// Render all the generations, one per line, with the configured symbols.
    ///
    /// There is no trailing newline.
    pub fn render_all(&self) -> String {
        self.render_all_with(self.symbols)
    }

    /// Render all the generations, one per line, with the given symbols.
    ///
    /// There is no trailing newline.
    pub fn render_all_with(&self, symbols: Symbols) -> String {
        self.generations
            .iter()
            .map(|generation| self.render_generation(generation, symbols))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A two-line representation of the rule table, with the configured symbols.
    pub fn rule_table_string(&self) -> String {
        self.rule
            .rule_table_string(self.symbols.false_symbol, self.symbols.true_symbol)
    }

    /// Write all the generations, each followed by a newline.
    pub fn write_evolution(&self, mut writer: impl Write) -> io::Result<()> {
        for generation in &self.generations {
            writeln!(writer, "{}", self.render_generation(generation, self.symbols))?;
        }
        writer.flush()
    }
}

/// The serialized form of an automaton.
///
/// Only the initial generation and the number of steps are stored, and the
/// history is recomputed on load, so it always follows the rule.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SavedAutomaton {
    rule: Rule,
    symbols: Symbols,
    initial: Generation,
    total_steps: usize,
}

#[cfg(feature = "serde")]
impl From<Automaton> for SavedAutomaton {
    fn from(automaton: Automaton) -> Self {
        let total_steps = automaton.total_steps();
        let Automaton {
            rule,
            generations,
            symbols,
        } = automaton;
        Self {
            rule,
            symbols,
            initial: generations.into_iter().next().unwrap_or_default(),
            total_steps,
        }
    }
}

#[cfg(feature = "serde")]
impl From<SavedAutomaton> for Automaton {
    fn from(saved: SavedAutomaton) -> Self {
        let mut automaton = Self::from_rule(saved.rule, saved.initial).with_symbols(saved.symbols);
        automaton.extend_history(saved.total_steps);
        automaton
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_all())
    }
}

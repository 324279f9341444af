//! A library for simulating one-dimensional, two-state cellular automata.
//!
//! Two types of cellular automata are supported:
//!
//! - Elementary cellular automata (`ECA`), with 256 rules.
//! - Totalistic cellular automata (`TCA`) with a neighborhood of radius 2, with 64 rules.
//!
//! The rules and generations themselves live in the [`ca_rules1d`] crate, and are re-exported here.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod automaton;
mod config;
mod error;
mod kind;
mod state;
mod symbols;

pub use automaton::Automaton;
pub use ca_rules1d::{
    neighborhood_by_radius, ElementaryRule, Generation, IndexError, Rule, RuleNumError,
    TotalisticRule,
};
pub use config::Config;
pub use error::{ConfigError, ParseKindError, ParseStateError};
pub use kind::AutomatonKind;
pub use state::SavedState;
pub use symbols::Symbols;

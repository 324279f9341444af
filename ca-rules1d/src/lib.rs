//! A crate for one-dimensional, two-state cellular automata rules.
//!
//! Two families of rules are supported:
//!
//! - [Elementary](ElementaryRule) rules, with a neighborhood of radius 1 and 256 possible rules.
//! - [Totalistic](TotalisticRule) rules, with a neighborhood of radius 2 and 64 possible rules,
//!   where the next state only depends on the number of living cells in the neighborhood.
//!
//! A [`Rule`] maps each row of cells, a [`Generation`], to the next one.

#![warn(clippy::missing_const_for_fn)]
#![warn(missing_docs)]

mod elementary;
mod error;
mod generation;
mod rule;
mod totalistic;

pub use elementary::ElementaryRule;
pub use error::{IndexError, RuleNumError};
pub use generation::Generation;
pub use rule::{neighborhood_by_radius, Rule};
pub use totalistic::TotalisticRule;

//! A Mamdani fuzzy inference engine over discretized universes.
//!
//! Crisp inputs are fuzzified against each input variable's linguistic
//! terms, a fixed rule base combines the degrees with min/max logic into
//! clipped output sets, the sets are aggregated pointwise per output
//! variable, and each aggregate is defuzzified into a crisp score by
//! centroid. Outputs for which no rule fired are reported explicitly
//! rather than defaulting to a number.
//!
//! The engine is configuration-driven: variables and rules are plain
//! values, built either programmatically or from a serde-deserialized
//! [`SystemSpec`], and the resulting [`InferenceEngine`] is immutable
//! and shareable across threads. Each evaluation runs in its own
//! [`Simulation`].
//!
//! ```
//! use mamdani::{
//!     Expr, InferenceEngine, LinguisticVariable, MembershipFunction, Rule, Universe, Variables,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut variables = Variables::new();
//!
//! variables.add(
//!     LinguisticVariable::antecedent("service", Universe::with_step(0.0..=10.0, 0.1)?)
//!         .with_term("poor", MembershipFunction::triangle(0.0, 0.0, 5.0)?)?
//!         .with_term("great", MembershipFunction::triangle(5.0, 10.0, 10.0)?)?,
//! )?;
//! variables.add(
//!     LinguisticVariable::consequent("tip", Universe::with_step(0.0..=25.0, 0.1)?)
//!         .with_term("low", MembershipFunction::triangle(0.0, 5.0, 10.0)?)?
//!         .with_term("high", MembershipFunction::triangle(15.0, 20.0, 25.0)?)?,
//! )?;
//!
//! let engine = InferenceEngine::new(
//!     variables,
//!     vec![
//!         Rule::when(Expr::is("service", "poor")).then("tip", "low"),
//!         Rule::when(Expr::is("service", "great")).then("tip", "high"),
//!     ],
//! )?;
//!
//! let mut sim = engine.simulation();
//!
//! sim.set_input("service", 8.0)?;
//! sim.compute()?;
//!
//! assert!(sim.output("tip")? > 12.5);
//! # Ok(())
//! # }
//! ```

mod config;
mod dsl;
mod error;
mod inference;
mod math;
mod membership;
mod outputs;
mod rules;
mod simulation;
mod universe;
mod variable;

pub use config::{ConclusionSpec, RuleSpec, ShapeSpec, SystemSpec, TermSpec, UniverseSpec, VariableSpec};
pub use dsl::Expr;
pub use error::{ComputeError, ConfigError};
pub use inference::InferenceEngine;
pub use membership::MembershipFunction;
pub use outputs::Outputs;
pub use rules::{Conclusion, Rule};
pub use simulation::Simulation;
pub use universe::Universe;
pub use variable::{LinguisticVariable, Role, VariableKey, Variables};

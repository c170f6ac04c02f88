use thiserror::Error;

/// A defect in the engine's configuration, raised at construction time.
///
/// These are never retried; a rule base that references a term which does
/// not exist is broken data, not a runtime condition.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid universe: {0}")]
    InvalidUniverse(String),
    #[error("invalid membership function: {0}")]
    InvalidMembership(String),
    #[error("duplicate variable `{0}`")]
    DuplicateVariable(String),
    #[error("duplicate term `{term}` on variable `{variable}`")]
    DuplicateTerm { variable: String, term: String },
    #[error("rule {rule} references unknown variable `{variable}`")]
    UnknownVariable { rule: usize, variable: String },
    #[error("rule {rule} references unknown term `{term}` on variable `{variable}`")]
    UnknownTerm {
        rule: usize,
        variable: String,
        term: String,
    },
    #[error("rule {rule} uses output variable `{variable}` in its antecedent")]
    NotAnInput { rule: usize, variable: String },
    #[error("rule {rule} concludes on input variable `{variable}`")]
    NotAnOutput { rule: usize, variable: String },
    #[error("rule {rule} has no conclusions")]
    NoConclusions { rule: usize },
    #[error("rule {rule} contains an empty and/or combinator")]
    EmptyCombinator { rule: usize },
    #[error("rule {rule} has conclusion weight {weight} outside (0, 1]")]
    InvalidWeight { rule: usize, weight: f64 },
}

/// A failure local to a single evaluation.
///
/// The shared engine configuration is read-only and unaffected; one
/// session's failure cannot leak into another's.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ComputeError {
    /// An input variable referenced by the rule base has no bound value.
    /// Recoverable: bind the value and compute again.
    #[error("no value bound for input variable `{0}`")]
    MissingInput(String),
    /// The aggregated set for this output was zero everywhere: no rule
    /// concluded anything about it at nonzero strength. Deliberately
    /// distinct from a crisp 0, which would read as a low score.
    #[error("no rule fired for output variable `{0}`")]
    NoRuleFired(String),
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),
    #[error("no results: compute has not been run")]
    NotComputed,
}

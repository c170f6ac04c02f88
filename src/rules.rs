use crate::dsl::Expr;

/// A single `(variable, term, weight)` conclusion.
#[derive(Clone, Debug, PartialEq)]
pub struct Conclusion {
    pub(crate) variable: String,
    pub(crate) term: String,
    pub(crate) weight: f64,
}

/// An antecedent expression plus the conclusions it implies.
///
/// References are by name and checked against the engine's variable set
/// at construction; validity is not re-checked per evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub(crate) antecedent: Expr,
    pub(crate) conclusions: Vec<Conclusion>,
}

impl Rule {
    pub fn when(antecedent: Expr) -> Self {
        Self {
            antecedent,
            conclusions: Vec::new(),
        }
    }

    /// Conclude `variable[term]` at full weight.
    pub fn then(self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.then_weighted(variable, term, 1.0)
    }

    /// Conclude `variable[term]`, additionally capping the implied set at
    /// `weight`. Weights must lie in `(0, 1]`; the engine rejects the rule
    /// otherwise.
    pub fn then_weighted(
        mut self,
        variable: impl Into<String>,
        term: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.conclusions.push(Conclusion {
            variable: variable.into(),
            term: term.into(),
            weight,
        });

        self
    }
}

use std::collections::HashMap;

use crate::error::ComputeError;

/// Crisp results of one evaluation, one entry per output variable.
///
/// An entry is `None` when the variable's aggregated set was zero
/// everywhere: no rule had anything to say about it. That is "no
/// information", kept distinct from any numeric score.
#[derive(Clone, Debug, PartialEq)]
pub struct Outputs {
    values: HashMap<String, Option<f64>>,
}

impl Outputs {
    pub(crate) fn new(values: HashMap<String, Option<f64>>) -> Self {
        Self { values }
    }

    /// The crisp score for `variable`.
    pub fn crisp(&self, variable: &str) -> Result<f64, ComputeError> {
        match self.values.get(variable) {
            Some(Some(value)) => Ok(*value),
            Some(None) => Err(ComputeError::NoRuleFired(variable.to_owned())),
            None => Err(ComputeError::UnknownVariable(variable.to_owned())),
        }
    }

    /// Whether defuzzification produced a value for `variable`.
    pub fn is_defined(&self, variable: &str) -> bool {
        matches!(self.values.get(variable), Some(Some(_)))
    }

    /// Every output with its score, `None` where no rule fired.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

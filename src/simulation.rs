use slotmap::SecondaryMap;

use crate::error::ComputeError;
use crate::inference::InferenceEngine;
use crate::outputs::Outputs;
use crate::variable::VariableKey;

/// A single evaluation context: crisp inputs bound in, crisp outputs
/// read out.
///
/// Sessions are cheap to create; use one per independent evaluation and
/// never share one across concurrent callers. The borrowed engine itself
/// stays read-only throughout.
pub struct Simulation<'e> {
    engine: &'e InferenceEngine,
    inputs: SecondaryMap<VariableKey, f64>,
    outputs: Option<Outputs>,
}

impl<'e> Simulation<'e> {
    pub(crate) fn new(engine: &'e InferenceEngine) -> Self {
        Self {
            engine,
            inputs: SecondaryMap::new(),
            outputs: None,
        }
    }

    /// Bind a crisp value to an input variable. Rebinding replaces the
    /// previous value and discards any results already computed.
    ///
    /// Values outside the variable's universe are accepted; membership
    /// clamping applies. Callers that want strict range checks can read
    /// the declared bounds from
    /// [`InferenceEngine::variables`](InferenceEngine::variables).
    pub fn set_input(&mut self, variable: &str, value: f64) -> Result<(), ComputeError> {
        let key = self
            .engine
            .input_key(variable)
            .ok_or_else(|| ComputeError::UnknownVariable(variable.to_owned()))?;

        self.inputs.insert(key, value);
        self.outputs = None;

        Ok(())
    }

    /// Run inference over the bound inputs.
    ///
    /// Fails only when a required input is unbound. Outputs for which no
    /// rule fired are still recorded, as explicit "no information"
    /// entries; see [`Self::output`] and [`Outputs`].
    pub fn compute(&mut self) -> Result<(), ComputeError> {
        self.outputs = Some(Outputs::new(self.engine.compute(&self.inputs)?));

        Ok(())
    }

    /// The crisp score computed for `variable`.
    pub fn output(&self, variable: &str) -> Result<f64, ComputeError> {
        match &self.outputs {
            Some(outputs) => outputs.crisp(variable),
            None => Err(ComputeError::NotComputed),
        }
    }

    /// All computed outputs, or `None` before the first compute.
    pub fn outputs(&self) -> Option<&Outputs> {
        self.outputs.as_ref()
    }
}

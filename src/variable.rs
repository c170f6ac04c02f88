use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::error::ConfigError;
use crate::membership::MembershipFunction;
use crate::universe::Universe;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Whether a variable receives crisp inputs or produces crisp outputs.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Antecedent,
    Consequent,
}

/// A named domain plus its linguistic terms.
///
/// Immutable once added to a [`Variables`] set. Term names are unique
/// within a variable; a duplicate is a configuration defect.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    role: Role,
    universe: Universe,
    terms: Vec<(String, MembershipFunction)>,
}

impl LinguisticVariable {
    /// An input variable: bound to a crisp value per evaluation.
    pub fn antecedent(name: impl Into<String>, universe: Universe) -> Self {
        Self::new(name, Role::Antecedent, universe)
    }

    /// An output variable: defuzzified from an aggregated set per evaluation.
    pub fn consequent(name: impl Into<String>, universe: Universe) -> Self {
        Self::new(name, Role::Consequent, universe)
    }

    fn new(name: impl Into<String>, role: Role, universe: Universe) -> Self {
        Self {
            name: name.into(),
            role,
            universe,
            terms: Vec::new(),
        }
    }

    /// Attach a named term.
    pub fn with_term(
        mut self,
        term: impl Into<String>,
        membership: MembershipFunction,
    ) -> Result<Self, ConfigError> {
        let term = term.into();

        if self.terms.iter().any(|(name, _)| *name == term) {
            return Err(ConfigError::DuplicateTerm {
                variable: self.name,
                term,
            });
        }

        self.terms.push((term, membership));

        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Term names in declaration order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(name, _)| name.as_str())
    }

    /// Membership degree of `value` in every term.
    pub fn fuzzify(&self, value: f64) -> Vec<(&str, f64)> {
        self.terms
            .iter()
            .map(|(name, mf)| (name.as_str(), mf.degree(value)))
            .collect()
    }

    /// Like [`Self::fuzzify`] but indexed by term declaration order.
    pub(crate) fn term_degrees(&self, value: f64) -> Vec<f64> {
        self.terms.iter().map(|(_, mf)| mf.degree(value)).collect()
    }

    pub(crate) fn term_index(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|(name, _)| name == term)
    }

    /// Every term's membership sampled over this variable's universe.
    pub(crate) fn term_curves(&self) -> Vec<Vec<f64>> {
        self.terms
            .iter()
            .map(|(_, mf)| mf.evaluate_over(&self.universe))
            .collect()
    }
}

/// The complete variable set of an engine, keyed by unique name.
#[derive(Clone, Debug, Default)]
pub struct Variables {
    pub(crate) slots: SlotMap<VariableKey, LinguisticVariable>,
    by_name: HashMap<String, VariableKey>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, variable: LinguisticVariable) -> Result<VariableKey, ConfigError> {
        if self.by_name.contains_key(variable.name()) {
            return Err(ConfigError::DuplicateVariable(variable.name().to_owned()));
        }

        let name = variable.name().to_owned();
        let key = self.slots.insert(variable);

        self.by_name.insert(name, key);

        Ok(key)
    }

    pub fn get(&self, key: VariableKey) -> &LinguisticVariable {
        &self.slots[key]
    }

    pub fn by_name(&self, name: &str) -> Option<&LinguisticVariable> {
        self.key_of(name).map(|key| &self.slots[key])
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinguisticVariable> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn key_of(&self, name: &str) -> Option<VariableKey> {
        self.by_name.get(name).copied()
    }
}

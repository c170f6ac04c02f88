use std::collections::HashMap;

use log::{debug, trace};
use slotmap::SecondaryMap;

use crate::dsl::Expr;
use crate::error::{ComputeError, ConfigError};
use crate::math::centroid;
use crate::rules::Rule;
use crate::simulation::Simulation;
use crate::variable::{Role, VariableKey, Variables};

/// An antecedent tree with every name resolved to a key and term index,
/// so evaluation is infallible.
#[derive(Debug)]
enum Node {
    Term(VariableKey, usize),
    And(Vec<Node>),
    Or(Vec<Node>),
    Not(Box<Node>),
}

#[derive(Debug)]
struct CompiledConclusion {
    variable: VariableKey,
    term: usize,
    weight: f64,
}

#[derive(Debug)]
struct CompiledRule {
    antecedent: Node,
    conclusions: Vec<CompiledConclusion>,
}

/// A Mamdani inference engine over a fixed variable set and rule base.
///
/// Construction validates every rule reference; afterwards the engine is
/// immutable and can be shared by reference across any number of
/// concurrent evaluations. Each evaluation runs in its own
/// [`Simulation`].
#[derive(Debug)]
pub struct InferenceEngine {
    variables: Variables,
    rules: Vec<CompiledRule>,
    /// Each output term's membership sampled over its variable's universe.
    term_curves: SecondaryMap<VariableKey, Vec<Vec<f64>>>,
    /// Input variables referenced by at least one rule; all of them must
    /// be bound before compute.
    required: Vec<VariableKey>,
}

impl InferenceEngine {
    pub fn new(variables: Variables, rules: Vec<Rule>) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut required = Vec::new();

        for (index, rule) in rules.iter().enumerate() {
            let antecedent = compile(&rule.antecedent, &variables, index, &mut required)?;

            if rule.conclusions.is_empty() {
                return Err(ConfigError::NoConclusions { rule: index });
            }

            let mut conclusions = Vec::with_capacity(rule.conclusions.len());

            for conclusion in &rule.conclusions {
                let key = variables.key_of(&conclusion.variable).ok_or_else(|| {
                    ConfigError::UnknownVariable {
                        rule: index,
                        variable: conclusion.variable.clone(),
                    }
                })?;
                let variable = variables.get(key);

                if variable.role() != Role::Consequent {
                    return Err(ConfigError::NotAnOutput {
                        rule: index,
                        variable: conclusion.variable.clone(),
                    });
                }

                let term = variable.term_index(&conclusion.term).ok_or_else(|| {
                    ConfigError::UnknownTerm {
                        rule: index,
                        variable: conclusion.variable.clone(),
                        term: conclusion.term.clone(),
                    }
                })?;

                if !(conclusion.weight > 0. && conclusion.weight <= 1.) {
                    return Err(ConfigError::InvalidWeight {
                        rule: index,
                        weight: conclusion.weight,
                    });
                }

                conclusions.push(CompiledConclusion {
                    variable: key,
                    term,
                    weight: conclusion.weight,
                });
            }

            compiled.push(CompiledRule {
                antecedent,
                conclusions,
            });
        }

        required.sort_unstable();
        required.dedup();

        // Sample every output term once; compute only clips and folds
        // these arrays.
        let mut term_curves = SecondaryMap::new();

        for (key, variable) in variables.slots.iter() {
            if variable.role() == Role::Consequent {
                term_curves.insert(key, variable.term_curves());
            }
        }

        debug!(
            "compiled {} rules over {} variables",
            compiled.len(),
            variables.len()
        );

        Ok(Self {
            variables,
            rules: compiled,
            term_curves,
            required,
        })
    }

    /// A fresh evaluation session borrowing this engine.
    pub fn simulation(&self) -> Simulation<'_> {
        Simulation::new(self)
    }

    /// The engine's variable set, for introspection (e.g. a caller
    /// validating request values against declared universe bounds).
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub(crate) fn input_key(&self, name: &str) -> Option<VariableKey> {
        let key = self.variables.key_of(name)?;

        (self.variables.get(key).role() == Role::Antecedent).then_some(key)
    }

    pub(crate) fn compute(
        &self,
        inputs: &SecondaryMap<VariableKey, f64>,
    ) -> Result<HashMap<String, Option<f64>>, ComputeError> {
        // Fuzzify each bound input once
        let mut fuzzified = SecondaryMap::new();

        for &key in &self.required {
            let variable = self.variables.get(key);
            let value = inputs
                .get(key)
                .copied()
                .ok_or_else(|| ComputeError::MissingInput(variable.name().to_owned()))?;

            fuzzified.insert(key, variable.term_degrees(value));
        }

        // Fire every rule and fold its clipped conclusions into the
        // per-output aggregate. A zero-strength rule still seeds an
        // all-zero aggregate, which is what distinguishes "concluded
        // nothing" from "never mentioned".
        let mut aggregated: SecondaryMap<VariableKey, Vec<f64>> = SecondaryMap::new();

        for (index, rule) in self.rules.iter().enumerate() {
            let strength = eval(&rule.antecedent, &fuzzified);

            trace!("rule {index} fired at {strength}");

            for conclusion in &rule.conclusions {
                let level = strength.min(conclusion.weight);
                let curve = &self.term_curves[conclusion.variable][conclusion.term];

                if let Some(aggregate) = aggregated.get_mut(conclusion.variable) {
                    for (acc, membership) in aggregate.iter_mut().zip(curve) {
                        *acc = acc.max(membership.min(level));
                    }
                } else {
                    aggregated.insert(
                        conclusion.variable,
                        curve.iter().map(|membership| membership.min(level)).collect(),
                    );
                }
            }
        }

        // Defuzzify. Every output variable gets an entry; `None` marks an
        // aggregate with zero mass.
        let mut values = HashMap::new();

        for variable in self.variables.iter() {
            if variable.role() == Role::Consequent {
                values.insert(variable.name().to_owned(), None);
            }
        }

        for (key, degrees) in &aggregated {
            let variable = self.variables.get(key);
            let crisp = centroid(variable.universe().points(), degrees);

            debug!("{} -> {crisp:?}", variable.name());
            values.insert(variable.name().to_owned(), crisp);
        }

        Ok(values)
    }
}

fn compile(
    expr: &Expr,
    variables: &Variables,
    rule: usize,
    required: &mut Vec<VariableKey>,
) -> Result<Node, ConfigError> {
    match expr {
        Expr::Is { variable, term } => {
            let key = variables
                .key_of(variable)
                .ok_or_else(|| ConfigError::UnknownVariable {
                    rule,
                    variable: variable.clone(),
                })?;
            let resolved = variables.get(key);

            if resolved.role() != Role::Antecedent {
                return Err(ConfigError::NotAnInput {
                    rule,
                    variable: variable.clone(),
                });
            }

            let term = resolved
                .term_index(term)
                .ok_or_else(|| ConfigError::UnknownTerm {
                    rule,
                    variable: variable.clone(),
                    term: term.clone(),
                })?;

            required.push(key);

            Ok(Node::Term(key, term))
        },
        Expr::And(exprs) => {
            if exprs.is_empty() {
                return Err(ConfigError::EmptyCombinator { rule });
            }

            Ok(Node::And(
                exprs
                    .iter()
                    .map(|expr| compile(expr, variables, rule, required))
                    .collect::<Result<_, _>>()?,
            ))
        },
        Expr::Or(exprs) => {
            if exprs.is_empty() {
                return Err(ConfigError::EmptyCombinator { rule });
            }

            Ok(Node::Or(
                exprs
                    .iter()
                    .map(|expr| compile(expr, variables, rule, required))
                    .collect::<Result<_, _>>()?,
            ))
        },
        Expr::Not(expr) => Ok(Node::Not(Box::new(compile(expr, variables, rule, required)?))),
    }
}

fn eval(node: &Node, fuzzified: &SecondaryMap<VariableKey, Vec<f64>>) -> f64 {
    match node {
        Node::Term(variable, term) => fuzzified[*variable][*term],
        Node::And(nodes) => nodes
            .iter()
            .map(|node| eval(node, fuzzified))
            .fold(1., f64::min),
        Node::Or(nodes) => nodes
            .iter()
            .map(|node| eval(node, fuzzified))
            .fold(0., f64::max),
        Node::Not(node) => 1. - eval(node, fuzzified),
    }
}

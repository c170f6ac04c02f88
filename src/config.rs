//! Declarative system descriptions.
//!
//! A whole engine can be described as plain data, deserialized once at
//! startup, and built into an [`InferenceEngine`]. Descriptions are
//! values: a process can hold any number of engines built from different
//! rule sets.

use serde::{Deserialize, Serialize};

use crate::dsl::Expr;
use crate::error::ConfigError;
use crate::inference::InferenceEngine;
use crate::membership::MembershipFunction;
use crate::rules::Rule;
use crate::universe::Universe;
use crate::variable::{LinguisticVariable, Role, Variables};

/// A complete engine description: variables plus the rule base over them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SystemSpec {
    pub variables: Vec<VariableSpec>,
    pub rules: Vec<RuleSpec>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableSpec {
    pub name: String,
    pub role: Role,
    pub universe: UniverseSpec,
    pub terms: Vec<TermSpec>,
}

/// Either evenly sampled bounds or an explicit point list.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UniverseSpec {
    Range { min: f64, max: f64, step: f64 },
    Points(Vec<f64>),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TermSpec {
    pub name: String,
    #[serde(flatten)]
    pub shape: ShapeSpec,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "shape", content = "params")]
pub enum ShapeSpec {
    Triangle([f64; 3]),
    Trapezoid([f64; 4]),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RuleSpec {
    pub antecedent: Expr,
    pub conclusions: Vec<ConclusionSpec>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConclusionSpec {
    pub variable: String,
    pub term: String,
    #[serde(default = "full_weight")]
    pub weight: f64,
}

fn full_weight() -> f64 {
    1.0
}

impl SystemSpec {
    /// Validate the description and build the engine it describes.
    pub fn build(&self) -> Result<InferenceEngine, ConfigError> {
        let mut variables = Variables::new();

        for spec in &self.variables {
            let universe = match &spec.universe {
                UniverseSpec::Range { min, max, step } => Universe::with_step(*min..=*max, *step)?,
                UniverseSpec::Points(points) => Universe::from_points(points.clone())?,
            };
            let mut variable = match spec.role {
                Role::Antecedent => LinguisticVariable::antecedent(&spec.name, universe),
                Role::Consequent => LinguisticVariable::consequent(&spec.name, universe),
            };

            for term in &spec.terms {
                let membership = match term.shape {
                    ShapeSpec::Triangle([a, b, c]) => MembershipFunction::triangle(a, b, c)?,
                    ShapeSpec::Trapezoid([a, b, c, d]) => {
                        MembershipFunction::trapezoid(a, b, c, d)?
                    },
                };

                variable = variable.with_term(&term.name, membership)?;
            }

            variables.add(variable)?;
        }

        let rules = self
            .rules
            .iter()
            .map(|spec| {
                spec.conclusions
                    .iter()
                    .fold(Rule::when(spec.antecedent.clone()), |rule, conclusion| {
                        rule.then_weighted(&conclusion.variable, &conclusion.term, conclusion.weight)
                    })
            })
            .collect();

        InferenceEngine::new(variables, rules)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SYSTEM: &str = r#"{
        "variables": [
            {
                "name": "load",
                "role": "antecedent",
                "universe": {"min": 0.0, "max": 10.0, "step": 0.1},
                "terms": [
                    {"name": "light", "shape": "triangle", "params": [0.0, 0.0, 5.0]},
                    {"name": "heavy", "shape": "triangle", "params": [5.0, 10.0, 10.0]}
                ]
            },
            {
                "name": "risk",
                "role": "consequent",
                "universe": {"min": 0.0, "max": 100.0, "step": 1.0},
                "terms": [
                    {"name": "low", "shape": "triangle", "params": [0.0, 0.0, 50.0]},
                    {"name": "high", "shape": "trapezoid", "params": [50.0, 75.0, 100.0, 100.0]}
                ]
            }
        ],
        "rules": [
            {
                "antecedent": {"is": {"variable": "load", "term": "heavy"}},
                "conclusions": [{"variable": "risk", "term": "high"}]
            },
            {
                "antecedent": {"is": {"variable": "load", "term": "light"}},
                "conclusions": [{"variable": "risk", "term": "low", "weight": 0.8}]
            }
        ]
    }"#;

    #[test]
    fn a_described_system_builds_and_computes() {
        let spec: SystemSpec = serde_json::from_str(SYSTEM).unwrap();
        let engine = spec.build().unwrap();
        let mut sim = engine.simulation();

        sim.set_input("load", 9.0).unwrap();
        sim.compute().unwrap();

        assert!(sim.output("risk").unwrap() > 50.0);
    }

    #[test]
    fn omitted_weights_default_to_full() {
        let spec: SystemSpec = serde_json::from_str(SYSTEM).unwrap();

        assert_eq!(spec.rules[0].conclusions[0].weight, 1.0);
        assert_eq!(spec.rules[1].conclusions[0].weight, 0.8);
    }

    #[test]
    fn spec_round_trips_through_serde() {
        let spec: SystemSpec = serde_json::from_str(SYSTEM).unwrap();
        let json = serde_json::to_string(&spec).unwrap();

        assert_eq!(serde_json::from_str::<SystemSpec>(&json).unwrap(), spec);
    }

    #[test]
    fn described_defects_surface_as_config_errors() {
        let mut spec: SystemSpec = serde_json::from_str(SYSTEM).unwrap();

        spec.rules[0].antecedent = Expr::is("load", "enormous");

        assert_eq!(
            spec.build().unwrap_err(),
            ConfigError::UnknownTerm {
                rule: 0,
                variable: "load".into(),
                term: "enormous".into(),
            }
        );

        let mut spec: SystemSpec = serde_json::from_str(SYSTEM).unwrap();

        spec.variables[0].terms[0].shape = ShapeSpec::Triangle([5.0, 0.0, 10.0]);

        assert!(matches!(
            spec.build().unwrap_err(),
            ConfigError::InvalidMembership(_)
        ));
    }

    #[test]
    fn explicit_point_lists_are_accepted() {
        let json = r#"{
            "variables": [
                {
                    "name": "x",
                    "role": "antecedent",
                    "universe": [0.0, 1.0, 2.5, 7.0, 10.0],
                    "terms": [{"name": "any", "shape": "triangle", "params": [0.0, 5.0, 10.0]}]
                },
                {
                    "name": "y",
                    "role": "consequent",
                    "universe": {"min": 0.0, "max": 1.0, "step": 0.1},
                    "terms": [{"name": "on", "shape": "triangle", "params": [0.0, 0.5, 1.0]}]
                }
            ],
            "rules": [
                {
                    "antecedent": {"is": {"variable": "x", "term": "any"}},
                    "conclusions": [{"variable": "y", "term": "on"}]
                }
            ]
        }"#;
        let spec: SystemSpec = serde_json::from_str(json).unwrap();

        assert!(spec.build().is_ok());
    }
}

use serde::{Deserialize, Serialize};

/// A fuzzy expression over `(variable, term)` memberships.
///
/// Evaluated with the min/max pair: `and` is min, `or` is max, `not` is
/// `1 - x`. `and`/`or` are n-ary; the builder methods flatten repeated
/// combinators into one level.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Membership of the bound value in `variable`'s `term`.
    Is { variable: String, term: String },
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
}

impl Expr {
    pub fn is(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Expr::Is {
            variable: variable.into(),
            term: term.into(),
        }
    }

    pub fn and(self, rhs: Expr) -> Self {
        match self {
            Expr::And(mut exprs) => {
                exprs.push(rhs);
                Expr::And(exprs)
            },
            lhs => Expr::And(vec![lhs, rhs]),
        }
    }

    pub fn or(self, rhs: Expr) -> Self {
        match self {
            Expr::Or(mut exprs) => {
                exprs.push(rhs);
                Expr::Or(exprs)
            },
            lhs => Expr::Or(vec![lhs, rhs]),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn and_flattens_into_one_level() {
        let expr = Expr::is("a", "x").and(Expr::is("b", "y")).and(Expr::is("c", "z"));

        assert_eq!(
            expr,
            Expr::And(vec![
                Expr::is("a", "x"),
                Expr::is("b", "y"),
                Expr::is("c", "z"),
            ])
        );
    }

    #[test]
    fn mixed_combinators_nest() {
        let expr = Expr::is("a", "x").or(Expr::is("b", "y").and(Expr::is("c", "z").not()));

        assert_eq!(
            expr,
            Expr::Or(vec![
                Expr::is("a", "x"),
                Expr::And(vec![
                    Expr::is("b", "y"),
                    Expr::Not(Box::new(Expr::is("c", "z"))),
                ]),
            ])
        );
    }

    #[test]
    fn serde_round_trip() {
        let expr = Expr::is("work_hours", "excessive").and(Expr::is("dei_support", "poor"));
        let json = serde_json::to_string(&expr).unwrap();

        assert_eq!(
            json,
            r#"{"and":[{"is":{"variable":"work_hours","term":"excessive"}},{"is":{"variable":"dei_support","term":"poor"}}]}"#
        );
        assert_eq!(serde_json::from_str::<Expr>(&json).unwrap(), expr);
    }
}

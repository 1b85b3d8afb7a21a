//! Derivation of the multiply/divide relations that stay inside a set of
//! named dimensions.
//!
//! Also compiled by `build.rs`, which turns the edges into typed operators.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::registry::DimensionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Multiply,
    Divide,
}

impl OperatorKind {
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Multiply => "*",
            OperatorKind::Divide => "/",
        }
    }
}

/// `left <operator> right = result`, all four by dimension name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivedOperatorEdge {
    pub left: String,
    pub right: String,
    pub operator: OperatorKind,
    pub result: String,
}

impl fmt::Display for DerivedOperatorEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left,
            self.operator.symbol(),
            self.right,
            self.result
        )
    }
}

/// Evaluates every ordered pair `(a, b)` of named dimensions.
///
/// A multiply edge is recorded when `a * b` is named; only when it is not is
/// `a / b` tried. Left operands follow registration order, right operands
/// are sorted by name.
pub fn derive_operators(registry: &DimensionRegistry) -> Vec<DerivedOperatorEdge> {
    let mut right_operands: Vec<_> = registry.entries().iter().collect();
    right_operands.sort_by(|a, b| a.name.cmp(&b.name));

    let mut edges = Vec::new();
    for left in registry.entries() {
        for right in &right_operands {
            let product = left.dimension * right.dimension;
            let quotient = left.dimension / right.dimension;

            let edge = if let Some(result) = registry.lookup_by_vector(product) {
                Some((OperatorKind::Multiply, result))
            } else {
                registry
                    .lookup_by_vector(quotient)
                    .map(|result| (OperatorKind::Divide, result))
            };

            if let Some((operator, result)) = edge {
                let edge = DerivedOperatorEdge {
                    left: left.name.clone(),
                    right: right.name.clone(),
                    operator,
                    result: result.to_string(),
                };
                tracing::trace!("derived {}", edge);
                edges.push(edge);
            }
        }
    }
    edges
}

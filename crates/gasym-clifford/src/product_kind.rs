//! The closed set of binary products offered by the explorer.

use std::fmt;
use std::str::FromStr;

use crate::algebra::CliffordAlgebra;
use crate::error::CliffordError;
use crate::multivector::Multivector;
use crate::registry::choices;
use crate::{ops, products, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Geometric,
    Inner,
    Outer,
    Regressive,
    Sandwich,
    UnitSandwich,
    LeftContraction,
    RightContraction,
    Commutator,
    Anticommutator,
}

impl ProductKind {
    pub const ALL: [ProductKind; 10] = [
        ProductKind::Geometric,
        ProductKind::Inner,
        ProductKind::Outer,
        ProductKind::Regressive,
        ProductKind::Sandwich,
        ProductKind::UnitSandwich,
        ProductKind::LeftContraction,
        ProductKind::RightContraction,
        ProductKind::Commutator,
        ProductKind::Anticommutator,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ProductKind::Geometric => "gp",
            ProductKind::Inner => "dot",
            ProductKind::Outer => "wedge",
            ProductKind::Regressive => "vee",
            ProductKind::Sandwich => "sandwich",
            ProductKind::UnitSandwich => "unit_sandwich",
            ProductKind::LeftContraction => "left_contraction",
            ProductKind::RightContraction => "right_contraction",
            ProductKind::Commutator => "commutator",
            ProductKind::Anticommutator => "anticommutator",
        }
    }

    /// Human-readable header label.
    pub fn label(self) -> &'static str {
        match self {
            ProductKind::Geometric => "Geometric Product",
            ProductKind::Inner => "Inner Product",
            ProductKind::Outer => "Outer Product",
            ProductKind::Regressive => "Regressive Product",
            ProductKind::Sandwich => "Sandwich Product (A * B * A^{-1})",
            ProductKind::UnitSandwich => "Sandwich product (A * B * A.rev()))",
            ProductKind::LeftContraction => "Left contraction",
            ProductKind::RightContraction => "Right contraction",
            ProductKind::Commutator => "Commutator product",
            ProductKind::Anticommutator => "Anticommutator product",
        }
    }

    /// Apply the product. Only the sandwich can fail, when `a` has no inverse.
    pub fn apply(self, alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Result<Multivector> {
        tracing::debug!("applying {} in Cl({},{},{})", self.name(), alg.p, alg.q, alg.r);
        let result = match self {
            ProductKind::Geometric => products::geometric(alg, a, b),
            ProductKind::Inner => products::inner(alg, a, b),
            ProductKind::Outer => products::outer(alg, a, b),
            ProductKind::Regressive => products::regressive(alg, a, b),
            ProductKind::Sandwich => ops::sandwich(alg, a, b)?,
            ProductKind::UnitSandwich => ops::unit_sandwich(alg, a, b),
            ProductKind::LeftContraction => products::left_contraction(alg, a, b),
            ProductKind::RightContraction => products::right_contraction(alg, a, b),
            ProductKind::Commutator => products::commutator(alg, a, b),
            ProductKind::Anticommutator => products::anticommutator(alg, a, b),
        };
        Ok(result)
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ProductKind {
    type Err = CliffordError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| CliffordError::UnknownProduct {
                got: s.to_string(),
                expected: choices(Self::ALL.iter().map(|k| k.name())),
            })
    }
}

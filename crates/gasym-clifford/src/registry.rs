//! Algebra families and the symbolic multivectors built from them.
//!
//! Each family is a row of a table: its signature and one suffix letter per
//! generator. A blade's unknown is the operand label followed by the letters
//! of its generators, so label `A` on blade e01 of PGA gives `Aox`.

use std::fmt;
use std::str::FromStr;

use gasym_symbolic::{Poly, Symbol};

use crate::algebra::CliffordAlgebra;
use crate::error::CliffordError;
use crate::multivector::Multivector;

/// The supported projective and conformal algebras of dimension 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgebraFamily {
    Pga1,
    Pga2,
    Pga3,
    Cga1,
    Cga2,
    Cga3,
}

struct FamilySpec {
    name: &'static str,
    signature: (usize, usize, usize),
    letters: &'static [char],
}

const FAMILIES: [FamilySpec; 6] = [
    FamilySpec { name: "pga1", signature: (1, 0, 1), letters: &['o', 'x'] },
    FamilySpec { name: "pga2", signature: (2, 0, 1), letters: &['o', 'x', 'y'] },
    FamilySpec { name: "pga3", signature: (3, 0, 1), letters: &['o', 'x', 'y', 'z'] },
    FamilySpec { name: "cga1", signature: (2, 1, 0), letters: &['x', 'p', 'n'] },
    FamilySpec { name: "cga2", signature: (3, 1, 0), letters: &['x', 'y', 'p', 'n'] },
    FamilySpec { name: "cga3", signature: (4, 1, 0), letters: &['x', 'y', 'z', 'p', 'n'] },
];

impl AlgebraFamily {
    pub const ALL: [AlgebraFamily; 6] = [
        AlgebraFamily::Pga1,
        AlgebraFamily::Pga2,
        AlgebraFamily::Pga3,
        AlgebraFamily::Cga1,
        AlgebraFamily::Cga2,
        AlgebraFamily::Cga3,
    ];

    fn spec(self) -> &'static FamilySpec {
        &FAMILIES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// (p, q, r): generators squaring to +1, -1 and 0.
    pub fn signature(self) -> (usize, usize, usize) {
        self.spec().signature
    }

    /// One suffix letter per generator, null generators first.
    pub fn generator_letters(self) -> &'static [char] {
        self.spec().letters
    }

    /// Build the algebra. Not cached; each run constructs its own.
    pub fn algebra(self) -> CliffordAlgebra {
        let (p, q, r) = self.signature();
        CliffordAlgebra::new(p, q, r)
    }

    /// Suffix naming a blade's unknown: `s` for the scalar, otherwise the
    /// letters of its generators in order.
    pub fn blade_suffix(self, blade: usize) -> String {
        if blade == 0 {
            return "s".to_string();
        }
        self.generator_letters()
            .iter()
            .enumerate()
            .filter(|(i, _)| (blade >> i) & 1 == 1)
            .map(|(_, c)| *c)
            .collect()
    }

    /// General even multivector: one unknown per even-grade blade.
    pub fn even(self, alg: &CliffordAlgebra, label: &str) -> Multivector {
        self.labelled(alg, label, 0)
    }

    /// General odd multivector: one unknown per odd-grade blade.
    pub fn odd(self, alg: &CliffordAlgebra, label: &str) -> Multivector {
        self.labelled(alg, label, 1)
    }

    fn labelled(self, alg: &CliffordAlgebra, label: &str, parity: usize) -> Multivector {
        let terms = alg
            .blade_order()
            .iter()
            .filter(|&&b| alg.grade(b) % 2 == parity)
            .map(|&b| {
                let unknown = Symbol::new(format!("{}{}", label, self.blade_suffix(b)));
                (b, Poly::symbol(&unknown))
            })
            .collect::<Vec<_>>();
        Multivector::from_terms(alg, terms)
    }
}

impl fmt::Display for AlgebraFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AlgebraFamily {
    type Err = CliffordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| CliffordError::UnknownAlgebra {
                got: s.to_string(),
                expected: choices(Self::ALL.iter().map(|f| f.name())),
            })
    }
}

/// Which part of a general multivector to use as an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputShape {
    Even,
    Odd,
    Scalar,
    Vec,
    Bivec,
    Trivec,
    Quadvec,
    Pentavec,
}

impl InputShape {
    pub const ALL: [InputShape; 8] = [
        InputShape::Even,
        InputShape::Odd,
        InputShape::Scalar,
        InputShape::Vec,
        InputShape::Bivec,
        InputShape::Trivec,
        InputShape::Quadvec,
        InputShape::Pentavec,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputShape::Even => "even",
            InputShape::Odd => "odd",
            InputShape::Scalar => "scalar",
            InputShape::Vec => "vec",
            InputShape::Bivec => "bivec",
            InputShape::Trivec => "trivec",
            InputShape::Quadvec => "quadvec",
            InputShape::Pentavec => "pentavec",
        }
    }

    /// The single grade of a sliced shape, `None` for even and odd.
    pub fn grade(self) -> Option<usize> {
        match self {
            InputShape::Even | InputShape::Odd => None,
            InputShape::Scalar => Some(0),
            InputShape::Vec => Some(1),
            InputShape::Bivec => Some(2),
            InputShape::Trivec => Some(3),
            InputShape::Quadvec => Some(4),
            InputShape::Pentavec => Some(5),
        }
    }

    /// Build the operand. A slice is the grade projection of the even or
    /// odd multivector of matching parity.
    pub fn build(self, family: AlgebraFamily, alg: &CliffordAlgebra, label: &str) -> Multivector {
        match self.grade() {
            None if self == InputShape::Even => family.even(alg, label),
            None => family.odd(alg, label),
            Some(grade) => {
                if grade > alg.n {
                    tracing::warn!(
                        "{} has no grade-{} blades; '{}' operand is zero",
                        family,
                        grade,
                        self.name()
                    );
                }
                let base = if grade % 2 == 0 {
                    family.even(alg, label)
                } else {
                    family.odd(alg, label)
                };
                base.grade_project(alg, grade)
            }
        }
    }
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for InputShape {
    type Err = CliffordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| CliffordError::UnknownShape {
                got: s.to_string(),
                expected: choices(Self::ALL.iter().map(|shape| shape.name())),
            })
    }
}

pub(crate) fn choices<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

//! Multivector: the fundamental element of a Clifford algebra.
//!
//! A multivector is a linear combination of basis blades:
//! M = a₀·1 + a₁·e₁ + a₂·e₂ + a₃·e₁₂ + ...
//!
//! Here every aᵢ is a polynomial in named unknowns. Results that involve an
//! inverse share a single polynomial denominator across all blades:
//! M = (Σ nᵢ·eᵢ) / d

use std::collections::BTreeMap;

use gasym_symbolic::{Poly, RatFunc, Rational, Symbol, SymbolicError};
use num_traits::One;

use crate::algebra::CliffordAlgebra;
use crate::Result;

/// Grade parity of a multivector's non-zero part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Zero,
    Even,
    Odd,
    Mixed,
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Parity::Zero => "Zero",
            Parity::Even => "Even",
            Parity::Odd => "Odd",
            Parity::Mixed => "Mixed",
        };
        f.write_str(name)
    }
}

/// A multivector in a Clifford algebra.
///
/// Stores one polynomial numerator per basis blade (indexed by bitmask)
/// and a common denominator, which is 1 unless an inverse was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Multivector {
    /// Numerators for each basis blade (length = 2^n).
    pub coeffs: Vec<Poly>,
    /// Shared denominator, never the zero polynomial.
    denom: Poly,
    dim: usize,
}

impl Multivector {
    /// Create a zero multivector for an algebra.
    pub fn zero(alg: &CliffordAlgebra) -> Self {
        Self {
            coeffs: vec![Poly::zero(); alg.dim],
            denom: Poly::one(),
            dim: alg.dim,
        }
    }

    /// Create a scalar multivector.
    pub fn scalar(alg: &CliffordAlgebra, value: Poly) -> Self {
        let mut mv = Self::zero(alg);
        mv.coeffs[0] = value;
        mv
    }

    /// Create a multivector from (blade, coefficient) pairs.
    pub fn from_terms(alg: &CliffordAlgebra, terms: impl IntoIterator<Item = (usize, Poly)>) -> Self {
        let mut mv = Self::zero(alg);
        for (blade, value) in terms {
            mv.coeffs[blade] += &value;
        }
        mv
    }

    /// Create a multivector from all coefficients.
    pub fn from_coeffs(coeffs: Vec<Poly>) -> Self {
        let dim = coeffs.len();
        Self { coeffs, denom: Poly::one(), dim }
    }

    /// Create from numerators over a shared denominator.
    pub fn from_parts(coeffs: Vec<Poly>, denom: Poly) -> Result<Self> {
        if denom.is_zero() {
            return Err(SymbolicError::DivisionByZero("multivector denominator".to_string()).into());
        }
        let dim = coeffs.len();
        Ok(Self { coeffs, denom, dim }.normalised())
    }

    /// Numerators over a product of denominators already known to be non-zero.
    pub(crate) fn over(coeffs: Vec<Poly>, denom: Poly) -> Self {
        let dim = coeffs.len();
        Self { coeffs, denom, dim }.normalised()
    }

    /// Fold a constant denominator into the numerators, cancel a polynomial
    /// one that divides every numerator exactly, or else make it monic.
    fn normalised(mut self) -> Self {
        if self.denom.is_one() {
            return self;
        }
        if let Some(c) = self.denom.as_constant() {
            let inv = c.recip();
            for coeff in self.coeffs.iter_mut() {
                *coeff = coeff.scale(&inv);
            }
            self.denom = Poly::one();
            return self;
        }
        let quotients: Option<Vec<Poly>> = self.coeffs.iter().map(|c| c.exact_div(&self.denom)).collect();
        if let Some(q) = quotients {
            self.coeffs = q;
            self.denom = Poly::one();
            return self;
        }
        // Monic denominator, as for RatFunc.
        let lead = self.denom.leading_term().map(|(_, c)| c.clone());
        if let Some(lc) = lead.filter(|lc| !lc.is_one()) {
            let inv = lc.recip();
            self.denom = self.denom.scale(&inv);
            for coeff in self.coeffs.iter_mut() {
                *coeff = coeff.scale(&inv);
            }
        }
        self
    }

    pub fn coeff(&self, blade: usize) -> &Poly {
        &self.coeffs[blade]
    }

    pub fn denominator(&self) -> &Poly {
        &self.denom
    }

    /// The coefficient of `blade` as a normalised rational function.
    pub fn component(&self, blade: usize) -> Result<RatFunc> {
        Ok(RatFunc::new(self.coeffs[blade].clone(), self.denom.clone())?)
    }

    /// Blades with a non-zero coefficient, in the algebra's display order.
    pub fn nonzero_blades(&self, alg: &CliffordAlgebra) -> Vec<usize> {
        alg.blade_order()
            .iter()
            .copied()
            .filter(|&b| !self.coeffs[b].is_zero())
            .collect()
    }

    /// Distinct grades present, ascending.
    pub fn grades(&self, alg: &CliffordAlgebra) -> Vec<usize> {
        let mut grades: Vec<usize> = self.nonzero_blades(alg).iter().map(|&b| alg.grade(b)).collect();
        grades.dedup();
        grades
    }

    pub fn parity(&self, alg: &CliffordAlgebra) -> Parity {
        let grades = self.grades(alg);
        if grades.is_empty() {
            Parity::Zero
        } else if grades.iter().all(|g| g % 2 == 0) {
            Parity::Even
        } else if grades.iter().all(|g| g % 2 == 1) {
            Parity::Odd
        } else {
            Parity::Mixed
        }
    }

    /// Get the grade-k part of this multivector.
    pub fn grade_project(&self, alg: &CliffordAlgebra, grade: usize) -> Multivector {
        self.grades_project(alg, &[grade])
    }

    /// Keep only the listed grades.
    pub fn grades_project(&self, alg: &CliffordAlgebra, grades: &[usize]) -> Multivector {
        self.map_by_grade(alg, |k, c| if grades.contains(&k) { c.clone() } else { Poly::zero() })
    }

    /// Check if this multivector is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Poly::is_zero)
    }

    /// Reverse: reverses the order of basis vectors in each blade.
    /// For a grade-k blade: rev = (-1)^(k(k-1)/2) * blade
    pub fn reverse(&self, alg: &CliffordAlgebra) -> Multivector {
        self.map_by_grade(alg, |k, c| if (k * k.saturating_sub(1) / 2) % 2 == 0 { c.clone() } else { -c })
    }

    /// Grade involution: negates odd-grade components.
    pub fn involute(&self, alg: &CliffordAlgebra) -> Multivector {
        self.map_by_grade(alg, |k, c| if k % 2 == 0 { c.clone() } else { -c })
    }

    /// Clifford conjugate: reverse followed by grade involution.
    /// For a grade-k blade the sign is (-1)^(k(k+1)/2).
    pub fn conjugate(&self, alg: &CliffordAlgebra) -> Multivector {
        self.reverse(alg).involute(alg)
    }

    fn map_by_grade(&self, alg: &CliffordAlgebra, f: impl Fn(usize, &Poly) -> Poly) -> Multivector {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| if c.is_zero() { Poly::zero() } else { f(alg.grade(i), c) })
            .collect();
        Multivector { coeffs, denom: self.denom.clone(), dim: self.dim }
    }

    /// Multiply by an exact rational.
    pub fn scale(&self, k: &Rational) -> Multivector {
        Multivector {
            coeffs: self.coeffs.iter().map(|c| c.scale(k)).collect(),
            denom: self.denom.clone(),
            dim: self.dim,
        }
    }

    /// Multiply by a scalar polynomial.
    pub fn scale_poly(&self, k: &Poly) -> Multivector {
        Multivector {
            coeffs: self.coeffs.iter().map(|c| c * k).collect(),
            denom: self.denom.clone(),
            dim: self.dim,
        }
        .normalised()
    }

    /// Divide by a scalar polynomial, which must not be zero.
    pub fn div_scalar(&self, k: &Poly) -> Result<Multivector> {
        Self::from_parts(self.coeffs.clone(), &self.denom * k)
    }

    /// Substitute symbols in every numerator and the denominator.
    pub fn subs(&self, map: &BTreeMap<Symbol, Poly>) -> Result<Multivector> {
        Self::from_parts(self.coeffs.iter().map(|c| c.subs(map)).collect(), self.denom.subs(map))
    }

    /// Equality as rational functions: a/d₁ = b/d₂  ⇔  a·d₂ = b·d₁.
    pub fn rational_eq(&self, other: &Multivector) -> bool {
        self.dim == other.dim
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(a, b)| a * &other.denom == b * &self.denom)
    }

    /// Dimension of the algebra.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Bring two multivectors over one denominator.
    fn aligned(&self, rhs: &Multivector) -> (Vec<Poly>, Vec<Poly>, Poly) {
        if self.denom == rhs.denom {
            return (self.coeffs.clone(), rhs.coeffs.clone(), self.denom.clone());
        }
        let a = self.coeffs.iter().map(|c| c * &rhs.denom).collect();
        let b = rhs.coeffs.iter().map(|c| c * &self.denom).collect();
        (a, b, &self.denom * &rhs.denom)
    }
}

// Arithmetic: Add, Sub, Neg
impl std::ops::Add for &Multivector {
    type Output = Multivector;
    fn add(self, rhs: &Multivector) -> Multivector {
        let (a, b, denom) = self.aligned(rhs);
        let coeffs = a.iter().zip(b.iter()).map(|(x, y)| x + y).collect();
        Multivector { coeffs, denom, dim: self.dim }.normalised()
    }
}

impl std::ops::Sub for &Multivector {
    type Output = Multivector;
    fn sub(self, rhs: &Multivector) -> Multivector {
        let (a, b, denom) = self.aligned(rhs);
        let coeffs = a.iter().zip(b.iter()).map(|(x, y)| x - y).collect();
        Multivector { coeffs, denom, dim: self.dim }.normalised()
    }
}

impl std::ops::Neg for &Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.scale(&-Rational::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Poly {
        Poly::symbol(&Symbol::new(name))
    }

    #[test]
    fn test_zero() {
        let alg = CliffordAlgebra::new(3, 0, 0);
        let mv = Multivector::zero(&alg);
        assert!(mv.is_zero());
        assert_eq!(mv.dim(), 8);
        assert_eq!(mv.parity(&alg), Parity::Zero);
    }

    #[test]
    fn test_from_terms() {
        let alg = CliffordAlgebra::new(2, 0, 1);
        let mv = Multivector::from_terms(&alg, [(0b001, sym("x")), (0b110, sym("y"))]);
        assert_eq!(mv.coeff(0b001), &sym("x"));
        assert_eq!(mv.nonzero_blades(&alg), vec![0b001, 0b110]);
        assert_eq!(mv.grades(&alg), vec![1, 2]);
        assert_eq!(mv.parity(&alg), Parity::Mixed);
    }

    #[test]
    fn test_add_sub() {
        let alg = CliffordAlgebra::new(2, 0, 0);
        let a = Multivector::from_terms(&alg, [(0b01, sym("a")), (0b10, Poly::integer(2))]);
        let b = Multivector::from_terms(&alg, [(0b01, sym("b"))]);
        let c = &a + &b;
        assert_eq!(c.coeff(0b01), &(&sym("a") + &sym("b")));
        let d = &c - &b;
        assert!(d.rational_eq(&a));
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn test_reverse_involute_conjugate() {
        let alg = CliffordAlgebra::new(3, 0, 0);
        let mut mv = Multivector::zero(&alg);
        for blade in 0..alg.dim {
            mv.coeffs[blade] = Poly::integer(1);
        }
        // grades 0..3
        let rev: Vec<i64> = [0b000, 0b001, 0b011, 0b111]
            .iter()
            .map(|&b| if mv.reverse(&alg).coeff(b) == &Poly::integer(1) { 1 } else { -1 })
            .collect();
        assert_eq!(rev, vec![1, 1, -1, -1]);

        let inv = mv.involute(&alg);
        assert_eq!(inv.coeff(0b001), &Poly::integer(-1));
        assert_eq!(inv.coeff(0b011), &Poly::integer(1));

        let conj = mv.conjugate(&alg);
        let signs: Vec<&Poly> = [0b000, 0b001, 0b011, 0b111].iter().map(|&b| conj.coeff(b)).collect();
        assert_eq!(
            signs,
            vec![&Poly::integer(1), &Poly::integer(-1), &Poly::integer(-1), &Poly::integer(1)]
        );
    }

    #[test]
    fn test_grade_project() {
        let alg = CliffordAlgebra::new(3, 0, 0);
        let mv = Multivector::from_terms(
            &alg,
            [(0, Poly::integer(1)), (0b001, Poly::integer(2)), (0b011, Poly::integer(3))],
        );
        let g1 = mv.grade_project(&alg, 1);
        assert!(g1.coeff(0).is_zero());
        assert_eq!(g1.coeff(0b001), &Poly::integer(2));
        assert!(g1.coeff(0b011).is_zero());

        let g02 = mv.grades_project(&alg, &[0, 2]);
        assert_eq!(g02.nonzero_blades(&alg), vec![0, 0b011]);
    }

    #[test]
    fn test_denominator_cancels() {
        let alg = CliffordAlgebra::new(2, 0, 0);
        let x = sym("x");
        let mv = Multivector::from_terms(&alg, [(0, &x * &sym("y")), (0b11, x.clone())]);
        let halved = mv.div_scalar(&Poly::integer(2)).unwrap();
        assert!(halved.denominator().is_one());
        assert_eq!(halved.coeff(0b11), &x.scale(&Rational::new(1.into(), 2.into())));

        let by_x = mv.div_scalar(&x).unwrap();
        assert!(by_x.denominator().is_one());
        assert_eq!(by_x.coeff(0), &sym("y"));

        let by_y = mv.div_scalar(&sym("y")).unwrap();
        assert_eq!(by_y.denominator(), &sym("y"));
        assert_eq!(by_y.component(0).unwrap().as_poly(), Some(&x));

        assert!(mv.div_scalar(&Poly::zero()).is_err());
    }
}

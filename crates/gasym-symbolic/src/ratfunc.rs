//! Rational functions: a polynomial numerator over a polynomial denominator.
//!
//! There is no multivariate GCD here. Normalisation only collapses a
//! fraction whose numerator is exactly divisible by its denominator and
//! makes the denominator's leading coefficient 1.

use std::collections::BTreeMap;
use std::fmt;

use num_traits::One;

use crate::error::SymbolicError;
use crate::poly::Poly;
use crate::symbol::Symbol;
use crate::Result;

/// `num / den` with `den ≠ 0`.
#[derive(Debug, Clone)]
pub struct RatFunc {
    num: Poly,
    den: Poly,
}

impl RatFunc {
    /// Build and normalise a fraction. Fails if `den` is the zero polynomial.
    pub fn new(num: Poly, den: Poly) -> Result<Self> {
        if den.is_zero() {
            return Err(SymbolicError::DivisionByZero(format!("({}) / 0", num)));
        }
        Ok(Self::normalised(num, den))
    }

    pub fn from_poly(p: Poly) -> Self {
        Self { num: p, den: Poly::one() }
    }

    pub fn zero() -> Self {
        Self::from_poly(Poly::zero())
    }

    fn normalised(num: Poly, den: Poly) -> Self {
        if num.is_zero() {
            return Self::zero();
        }
        if let Some(q) = num.exact_div(&den) {
            return Self::from_poly(q);
        }
        let lead = den.leading_term().map(|(_, c)| c.clone());
        match lead {
            Some(c) if !c.is_one() => {
                let inv = c.recip();
                Self { num: num.scale(&inv), den: den.scale(&inv) }
            }
            _ => Self { num, den },
        }
    }

    pub fn numer(&self) -> &Poly {
        &self.num
    }

    pub fn denom(&self) -> &Poly {
        &self.den
    }

    /// The polynomial value, if the denominator is 1.
    pub fn as_poly(&self) -> Option<&Poly> {
        if self.den.is_one() {
            Some(&self.num)
        } else {
            None
        }
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn div(&self, other: &RatFunc) -> Result<RatFunc> {
        if other.is_zero() {
            return Err(SymbolicError::DivisionByZero(format!("({}) / ({})", self, other)));
        }
        Ok(Self::normalised(&self.num * &other.den, &self.den * &other.num))
    }

    pub fn div_poly(&self, p: &Poly) -> Result<RatFunc> {
        self.div(&RatFunc::from_poly(p.clone()))
    }

    /// Substitute polynomial values for symbols in both halves.
    pub fn subs(&self, map: &BTreeMap<Symbol, Poly>) -> Result<RatFunc> {
        RatFunc::new(self.num.subs(map), self.den.subs(map))
    }

    /// Evaluate `p` with rational-function values bound to symbols.
    pub fn compose(p: &Poly, map: &BTreeMap<Symbol, RatFunc>) -> RatFunc {
        let mut acc = RatFunc::zero();
        for (m, c) in p.terms() {
            let mut term = RatFunc::from_poly(Poly::constant(c.clone()));
            for (s, k) in m.powers() {
                let factor = match map.get(s) {
                    Some(v) => v.clone(),
                    None => RatFunc::from_poly(Poly::symbol(s)),
                };
                for _ in 0..*k {
                    term = &term * &factor;
                }
            }
            acc = &acc + &term;
        }
        acc
    }
}

impl PartialEq for RatFunc {
    fn eq(&self, other: &Self) -> bool {
        (&self.num * &other.den) == (&other.num * &self.den)
    }
}

impl std::ops::Add for &RatFunc {
    type Output = RatFunc;
    fn add(self, rhs: &RatFunc) -> RatFunc {
        if self.den == rhs.den {
            return RatFunc::normalised(&self.num + &rhs.num, self.den.clone());
        }
        RatFunc::normalised(
            &(&self.num * &rhs.den) + &(&rhs.num * &self.den),
            &self.den * &rhs.den,
        )
    }
}

impl std::ops::Sub for &RatFunc {
    type Output = RatFunc;
    fn sub(self, rhs: &RatFunc) -> RatFunc {
        self + &(-rhs)
    }
}

impl std::ops::Mul for &RatFunc {
    type Output = RatFunc;
    fn mul(self, rhs: &RatFunc) -> RatFunc {
        RatFunc::normalised(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl std::ops::Neg for &RatFunc {
    type Output = RatFunc;
    fn neg(self) -> RatFunc {
        RatFunc { num: -&self.num, den: self.den.clone() }
    }
}

impl From<Poly> for RatFunc {
    fn from(p: Poly) -> Self {
        RatFunc::from_poly(p)
    }
}

impl fmt::Display for RatFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else if self.den.len() == 1 {
            write!(f, "({})/{}", self.num, self.den)
        } else {
            write!(f, "({})/({})", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::symbols;

    #[test]
    fn test_exact_fraction_collapses() {
        let s = symbols("x y");
        let x = Poly::symbol(&s[0]);
        let y = Poly::symbol(&s[1]);
        let r = RatFunc::new(&x * &y, y.clone()).unwrap();
        assert_eq!(r.as_poly(), Some(&x));
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let r = RatFunc::new(Poly::one(), Poly::zero());
        assert!(matches!(r, Err(SymbolicError::DivisionByZero(_))));
    }

    #[test]
    fn test_denominator_made_monic() {
        let s = symbols("x y");
        let x = Poly::symbol(&s[0]);
        let y = Poly::symbol(&s[1]);
        let r = RatFunc::new(x.clone(), &Poly::integer(-2) * &y).unwrap();
        assert_eq!(r.denom(), &y);
        assert_eq!(r.to_string(), "(-1/2*x)/y");
    }

    #[test]
    fn test_add_and_equality() {
        // 1/x + 1/y = (x + y)/(x*y)
        let s = symbols("x y");
        let x = Poly::symbol(&s[0]);
        let y = Poly::symbol(&s[1]);
        let a = RatFunc::new(Poly::one(), x.clone()).unwrap();
        let b = RatFunc::new(Poly::one(), y.clone()).unwrap();
        let sum = &a + &b;
        let expected = RatFunc::new(&x + &y, &x * &y).unwrap();
        assert_eq!(sum, expected);
        assert!((&sum - &expected).is_zero());
    }

    #[test]
    fn test_compose() {
        // p = x*y with x -> 1/y gives 1
        let s = symbols("x y");
        let y = Poly::symbol(&s[1]);
        let p = &Poly::symbol(&s[0]) * &y;
        let mut map = BTreeMap::new();
        map.insert(s[0].clone(), RatFunc::new(Poly::one(), y).unwrap());
        assert_eq!(RatFunc::compose(&p, &map).as_poly(), Some(&Poly::one()));
    }
}

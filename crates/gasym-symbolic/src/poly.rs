//! Multivariate polynomials with exact rational coefficients.
//!
//! A polynomial is a sparse map from monomials to non-zero coefficients:
//! P = Σ cᵢ·mᵢ,  mᵢ = x₁^k₁ · x₂^k₂ · ...
//!
//! Monomials are ordered graded-lexicographically (total degree first,
//! then lexicographically with earlier symbol names more significant).
//! This is a monomial order, so long division by a single polynomial is
//! well defined and `exact_div` is reliable.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::SymbolicError;
use crate::symbol::Symbol;

/// Exact coefficient type.
pub type Rational = BigRational;

/// Build a rational from an integer.
pub fn rational(n: i64) -> Rational {
    BigRational::from_integer(BigInt::from(n))
}

/// A product of symbols raised to positive powers.
///
/// Stored sorted by symbol with no zero exponents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    powers: Vec<(Symbol, u32)>,
}

impl Monomial {
    /// The empty product (constant term).
    pub fn one() -> Self {
        Self { powers: Vec::new() }
    }

    pub fn var(sym: Symbol) -> Self {
        Self { powers: vec![(sym, 1)] }
    }

    pub fn is_one(&self) -> bool {
        self.powers.is_empty()
    }

    /// Total degree.
    pub fn degree(&self) -> u32 {
        self.powers.iter().map(|(_, k)| k).sum()
    }

    /// Exponent of `sym` (0 if absent).
    pub fn exponent(&self, sym: &Symbol) -> u32 {
        self.powers
            .binary_search_by(|(s, _)| s.cmp(sym))
            .map(|i| self.powers[i].1)
            .unwrap_or(0)
    }

    pub fn powers(&self) -> &[(Symbol, u32)] {
        &self.powers
    }

    /// Product of two monomials (exponents add).
    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut powers = Vec::with_capacity(self.powers.len() + other.powers.len());
        let (mut i, mut j) = (0, 0);
        while i < self.powers.len() && j < other.powers.len() {
            let (sa, ka) = &self.powers[i];
            let (sb, kb) = &other.powers[j];
            match sa.cmp(sb) {
                Ordering::Less => {
                    powers.push((sa.clone(), *ka));
                    i += 1;
                }
                Ordering::Greater => {
                    powers.push((sb.clone(), *kb));
                    j += 1;
                }
                Ordering::Equal => {
                    powers.push((sa.clone(), ka + kb));
                    i += 1;
                    j += 1;
                }
            }
        }
        powers.extend_from_slice(&self.powers[i..]);
        powers.extend_from_slice(&other.powers[j..]);
        Monomial { powers }
    }

    /// `self / other` if every exponent of `other` fits inside `self`.
    pub fn checked_div(&self, other: &Monomial) -> Option<Monomial> {
        let mut powers = Vec::with_capacity(self.powers.len());
        let mut j = 0;
        for (s, k) in &self.powers {
            if j < other.powers.len() && other.powers[j].0 < *s {
                // `other` has a symbol that `self` lacks
                return None;
            }
            if j < other.powers.len() && other.powers[j].0 == *s {
                let kd = other.powers[j].1;
                j += 1;
                match k.cmp(&kd) {
                    Ordering::Less => return None,
                    Ordering::Equal => {}
                    Ordering::Greater => powers.push((s.clone(), k - kd)),
                }
            } else {
                powers.push((s.clone(), *k));
            }
        }
        if j < other.powers.len() {
            return None;
        }
        Some(Monomial { powers })
    }

    /// Remove `sym` from the monomial entirely.
    pub fn without(&self, sym: &Symbol) -> Monomial {
        Monomial {
            powers: self.powers.iter().filter(|(s, _)| s != sym).cloned().collect(),
        }
    }

    fn lex_cmp(&self, other: &Monomial) -> Ordering {
        let (mut i, mut j) = (0, 0);
        loop {
            match (self.powers.get(i), other.powers.get(j)) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((sa, ka)), Some((sb, kb))) => match sa.cmp(sb) {
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Equal => {
                        if ka != kb {
                            return ka.cmp(kb);
                        }
                        i += 1;
                        j += 1;
                    }
                },
            }
        }
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree()
            .cmp(&other.degree())
            .then_with(|| self.lex_cmp(other))
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.powers.is_empty() {
            return write!(f, "1");
        }
        for (n, (s, k)) in self.powers.iter().enumerate() {
            if n > 0 {
                write!(f, "*")?;
            }
            if *k == 1 {
                write!(f, "{}", s)?;
            } else {
                write!(f, "{}^{}", s, k)?;
            }
        }
        Ok(())
    }
}

/// A sparse multivariate polynomial over the rationals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Poly {
    terms: BTreeMap<Monomial, Rational>,
}

impl Poly {
    pub fn zero() -> Self {
        Self { terms: BTreeMap::new() }
    }

    pub fn one() -> Self {
        Self::constant(Rational::one())
    }

    pub fn constant(c: Rational) -> Self {
        Self::term(c, Monomial::one())
    }

    pub fn integer(n: i64) -> Self {
        Self::constant(rational(n))
    }

    pub fn symbol(sym: &Symbol) -> Self {
        Self::term(Rational::one(), Monomial::var(sym.clone()))
    }

    /// A single term `c · m`.
    pub fn term(c: Rational, m: Monomial) -> Self {
        let mut p = Self::zero();
        p.add_term(m, c);
        p
    }

    /// Accumulate `c · m`, dropping the entry if it cancels.
    pub fn add_term(&mut self, m: Monomial, c: Rational) {
        if c.is_zero() {
            return;
        }
        match self.terms.get_mut(&m) {
            Some(existing) => {
                *existing += c;
                if existing.is_zero() {
                    self.terms.remove(&m);
                }
            }
            None => {
                self.terms.insert(m, c);
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.as_constant().is_some_and(|c| c.is_one())
    }

    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }

    /// The constant value, if the polynomial has no symbolic terms.
    pub fn as_constant(&self) -> Option<Rational> {
        if self.is_zero() {
            return Some(Rational::zero());
        }
        if self.is_constant() {
            return self.terms.get(&Monomial::one()).cloned();
        }
        None
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in descending monomial order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational)> {
        self.terms.iter().rev()
    }

    /// Greatest term under the graded-lex order.
    pub fn leading_term(&self) -> Option<(&Monomial, &Rational)> {
        self.terms.iter().next_back()
    }

    /// Total degree (0 for the zero polynomial).
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Highest exponent of `sym` in any term.
    pub fn degree_in(&self, sym: &Symbol) -> u32 {
        self.terms.keys().map(|m| m.exponent(sym)).max().unwrap_or(0)
    }

    /// Every symbol appearing in the polynomial, sorted.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut out: Vec<Symbol> = self
            .terms
            .keys()
            .flat_map(|m| m.powers().iter().map(|(s, _)| s.clone()))
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &Rational) -> Poly {
        if c.is_zero() {
            return Poly::zero();
        }
        Poly {
            terms: self.terms.iter().map(|(m, k)| (m.clone(), k * c)).collect(),
        }
    }

    pub fn pow(&self, k: u32) -> Poly {
        let mut result = Poly::one();
        for _ in 0..k {
            result = &result * self;
        }
        result
    }

    /// Substitute symbols simultaneously; unmapped symbols are kept.
    pub fn subs(&self, map: &BTreeMap<Symbol, Poly>) -> Poly {
        let mut result = Poly::zero();
        for (m, c) in &self.terms {
            let mut term = Poly::constant(c.clone());
            let mut kept = Monomial::one();
            for (s, k) in m.powers() {
                match map.get(s) {
                    Some(value) => term = &term * &value.pow(*k),
                    None => {
                        kept = kept.mul(&Monomial {
                            powers: vec![(s.clone(), *k)],
                        })
                    }
                }
            }
            if !kept.is_one() {
                term = &term * &Poly::term(Rational::one(), kept);
            }
            result += &term;
        }
        result
    }

    /// Split a polynomial that is linear in `unknowns` into one coefficient
    /// per unknown plus the part free of them:
    /// P = Σ cₖ·uₖ + rest.
    pub fn linear_split(&self, unknowns: &[Symbol]) -> Result<(Vec<Poly>, Poly), SymbolicError> {
        let mut coeffs = vec![Poly::zero(); unknowns.len()];
        let mut rest = Poly::zero();

        for (m, c) in &self.terms {
            let mut hit = None;
            let mut degree = 0;
            for (k, u) in unknowns.iter().enumerate() {
                let e = m.exponent(u);
                if e > 0 {
                    degree += e;
                    hit = Some(k);
                }
            }
            match (degree, hit) {
                (0, _) => rest.add_term(m.clone(), c.clone()),
                (1, Some(k)) => coeffs[k].add_term(m.without(&unknowns[k]), c.clone()),
                _ => {
                    return Err(SymbolicError::NonLinear(
                        Poly::term(c.clone(), m.clone()).to_string(),
                    ))
                }
            }
        }

        Ok((coeffs, rest))
    }

    /// Exact multivariate division.
    ///
    /// Returns `Some(q)` with `self = q · divisor`, or `None` if the
    /// division leaves a remainder (or the divisor is zero).
    pub fn exact_div(&self, divisor: &Poly) -> Option<Poly> {
        let (lm_d, lc_d) = divisor.leading_term()?;
        let (lm_d, lc_d) = (lm_d.clone(), lc_d.clone());

        let mut rem = self.clone();
        let mut quot = Poly::zero();
        while let Some((lm, lc)) = rem.leading_term() {
            let m = lm.checked_div(&lm_d)?;
            let c = lc / &lc_d;
            let t = Poly::term(c, m);
            rem = &rem - &(&t * divisor);
            quot += &t;
        }
        Some(quot)
    }
}

impl From<&Symbol> for Poly {
    fn from(sym: &Symbol) -> Self {
        Poly::symbol(sym)
    }
}

impl From<i64> for Poly {
    fn from(n: i64) -> Self {
        Poly::integer(n)
    }
}

impl std::ops::AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, rhs: &Poly) {
        for (m, c) in &rhs.terms {
            self.add_term(m.clone(), c.clone());
        }
    }
}

impl std::ops::SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, rhs: &Poly) {
        for (m, c) in &rhs.terms {
            self.add_term(m.clone(), -c.clone());
        }
    }
}

impl std::ops::Add for &Poly {
    type Output = Poly;
    fn add(self, rhs: &Poly) -> Poly {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl std::ops::Sub for &Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl std::ops::Mul for &Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        let mut out = Poly::zero();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &rhs.terms {
                out.add_term(ma.mul(mb), ca * cb);
            }
        }
        out
    }
}

impl std::ops::Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
        }
    }
}

impl std::ops::Add for Poly {
    type Output = Poly;
    fn add(mut self, rhs: Poly) -> Poly {
        self += &rhs;
        self
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;
    fn sub(mut self, rhs: Poly) -> Poly {
        self -= &rhs;
        self
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, rhs: Poly) -> Poly {
        &self * &rhs
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        -&self
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (n, (m, c)) in self.terms().enumerate() {
            let negative = c.is_negative();
            match (n, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            let magnitude = c.abs();
            if m.is_one() {
                write!(f, "{}", magnitude)?;
            } else if magnitude.is_one() {
                write!(f, "{}", m)?;
            } else {
                write!(f, "{}*{}", magnitude, m)?;
            }
        }
        Ok(())
    }
}

//! Higher-level operations on multivectors: inverse, sandwich products, norm.

use gasym_symbolic::RatFunc;

use crate::algebra::CliffordAlgebra;
use crate::error::CliffordError;
use crate::multivector::Multivector;
use crate::products::geometric;
use crate::Result;

pub use crate::products::{dual, undual};

/// Closed-form inverse (Hitzer & Sangwine) for up to five generators.
///
/// With x̄ the Clifford conjugate the numerator is
/// - n ≤ 2: x̄
/// - n = 3: x̄ · rev(x x̄)
/// - n = 4: x̄ · (m − 2⟨m⟩₃,₄), m = x x̄
/// - n = 5: c · (x c − 2⟨x c⟩₁,₄), c = x̄ · rev(x x̄)
///
/// and the denominator is ⟨x · numerator⟩₀.
pub fn inverse(alg: &CliffordAlgebra, x: &Multivector) -> Result<Multivector> {
    if alg.n > 5 {
        return Err(CliffordError::UnsupportedDimension(alg.n));
    }

    // Work on numerators only; the denominator of x comes back as a factor.
    let core = Multivector::from_coeffs(x.coeffs.clone());
    let conj = core.conjugate(alg);

    let numerator = match alg.n {
        0..=2 => conj,
        3 => {
            let m = geometric(alg, &core, &conj);
            geometric(alg, &conj, &m.reverse(alg))
        }
        4 => {
            let m = geometric(alg, &core, &conj);
            let flipped = &m - &m.grades_project(alg, &[3, 4]).scale(&gasym_symbolic::rational(2));
            geometric(alg, &conj, &flipped)
        }
        _ => {
            let m = geometric(alg, &core, &conj);
            let c = geometric(alg, &conj, &m.reverse(alg));
            let xc = geometric(alg, &core, &c);
            let flipped = &xc - &xc.grades_project(alg, &[1, 4]).scale(&gasym_symbolic::rational(2));
            geometric(alg, &c, &flipped)
        }
    };

    let norm = geometric(alg, &core, &numerator).coeff(0).clone();
    if norm.is_zero() {
        return Err(CliffordError::NotInvertible(format!(
            "scalar part of x * adj(x) vanishes in Cl({},{},{})",
            alg.p, alg.q, alg.r
        )));
    }
    tracing::debug!("inverse: n = {}, norm has {} terms", alg.n, norm.len());

    numerator.scale_poly(x.denominator()).div_scalar(&norm)
}

/// Sandwich product: a · b · a⁻¹.
pub fn sandwich(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Result<Multivector> {
    let inv = inverse(alg, a)?;
    Ok(geometric(alg, &geometric(alg, a, b), &inv))
}

/// Sandwich with the reverse: a · b · ã. Equals [`sandwich`] when |a|² = 1.
pub fn unit_sandwich(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    let rev = a.reverse(alg);
    let temp = geometric(alg, a, b);
    geometric(alg, &temp, &rev)
}

/// Squared norm: ⟨a ã⟩₀.
pub fn norm_squared(alg: &CliffordAlgebra, a: &Multivector) -> Result<RatFunc> {
    geometric(alg, a, &a.reverse(alg)).component(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multivector::Parity;
    use crate::registry::AlgebraFamily;
    use gasym_symbolic::{Poly, Symbol};

    fn sym(name: &str) -> Poly {
        Poly::symbol(&Symbol::new(name))
    }

    fn one(alg: &CliffordAlgebra) -> Multivector {
        Multivector::scalar(alg, Poly::one())
    }

    #[test]
    fn test_inverse_vector() {
        // (x e1 + y e2)⁻¹ = (x e1 + y e2) / (x² + y²)
        let alg = CliffordAlgebra::new(2, 0, 0);
        let a = Multivector::from_terms(&alg, [(0b01, sym("x")), (0b10, sym("y"))]);
        let inv = inverse(&alg, &a).unwrap();
        let norm = &(&sym("x") * &sym("x")) + &(&sym("y") * &sym("y"));
        assert_eq!(inv.denominator(), &norm);
        assert_eq!(inv.coeff(0b01), &sym("x"));
        assert!(geometric(&alg, &a, &inv).rational_eq(&one(&alg)));
    }

    #[test]
    fn test_inverse_rotor_3d() {
        let alg = CliffordAlgebra::new(3, 0, 0);
        let r = Multivector::from_terms(
            &alg,
            [(0, sym("s")), (0b011, sym("a")), (0b101, sym("b")), (0b110, sym("c"))],
        );
        let inv = inverse(&alg, &r).unwrap();
        assert!(geometric(&alg, &r, &inv).rational_eq(&one(&alg)));
        assert!(geometric(&alg, &inv, &r).rational_eq(&one(&alg)));
    }

    #[test]
    fn test_inverse_general_4d() {
        let alg = CliffordAlgebra::new(3, 1, 0);
        let x = Multivector::from_terms(
            &alg,
            [(0, sym("s")), (0b0001, sym("a")), (0b0110, sym("b")), (0b1000, Poly::integer(2))],
        );
        let inv = inverse(&alg, &x).unwrap();
        assert!(geometric(&alg, &x, &inv).rational_eq(&one(&alg)));
    }

    #[test]
    fn test_inverse_general_5d() {
        // s + 2 e12 + 3 e45 + e3 + 5 e1234 + 7 e12345 in Cl(4,1)
        let alg = CliffordAlgebra::new(4, 1, 0);
        let x = Multivector::from_terms(
            &alg,
            [
                (0, sym("s")),
                (0b00011, Poly::integer(2)),
                (0b11000, Poly::integer(3)),
                (0b00100, Poly::one()),
                (0b01111, Poly::integer(5)),
                (0b11111, Poly::integer(7)),
            ],
        );
        let inv = inverse(&alg, &x).unwrap();
        assert!(geometric(&alg, &x, &inv).rational_eq(&one(&alg)));
        assert!(geometric(&alg, &inv, &x).rational_eq(&one(&alg)));
    }

    #[test]
    fn test_sandwich_conformal_rotor() {
        // A general even element of CGA1 has a scalar a ã, so a⁻¹ = ã / |a|²
        let family = AlgebraFamily::Cga1;
        let alg = family.algebra();
        let a = family.even(&alg, "A");
        let b = family.odd(&alg, "B");

        let norm = norm_squared(&alg, &a).unwrap();
        let norm = norm.as_poly().unwrap();
        let sw = sandwich(&alg, &a, &b).unwrap();
        assert_eq!(sw.parity(&alg), Parity::Odd);
        assert!(sw.scale_poly(norm).rational_eq(&unit_sandwich(&alg, &a, &b)));
    }

    #[test]
    fn test_inverse_of_quotient() {
        let alg = CliffordAlgebra::new(2, 0, 0);
        let a = Multivector::from_terms(&alg, [(0, sym("s")), (0b11, sym("t"))]);
        let halved = a.div_scalar(&sym("k")).unwrap();
        let inv = inverse(&alg, &halved).unwrap();
        assert!(geometric(&alg, &halved, &inv).rational_eq(&one(&alg)));
    }

    #[test]
    fn test_not_invertible() {
        // e0123 squares to zero in PGA3
        let alg = CliffordAlgebra::new(3, 0, 1);
        let quad = Multivector::from_terms(&alg, [(0b1111, sym("Aoxyz"))]);
        assert!(matches!(inverse(&alg, &quad), Err(CliffordError::NotInvertible(_))));
        assert!(sandwich(&alg, &quad, &one(&alg)).is_err());
    }

    #[test]
    fn test_unsupported_dimension() {
        let alg = CliffordAlgebra::new(6, 0, 0);
        assert!(matches!(
            inverse(&alg, &one(&alg)),
            Err(CliffordError::UnsupportedDimension(6))
        ));
    }

    #[test]
    fn test_sandwich_versus_unit_sandwich() {
        let alg = CliffordAlgebra::new(2, 0, 1);
        let a = Multivector::from_terms(
            &alg,
            [(0, sym("As")), (0b011, sym("Aox")), (0b101, sym("Aoy")), (0b110, sym("Axy"))],
        );
        let b = Multivector::from_terms(&alg, [(0b001, sym("Bo")), (0b010, sym("Bx")), (0b100, sym("By"))]);

        let norm = norm_squared(&alg, &a).unwrap();
        let expected = &(&sym("As") * &sym("As")) + &(&sym("Axy") * &sym("Axy"));
        assert_eq!(norm.as_poly(), Some(&expected));

        let sw = sandwich(&alg, &a, &b).unwrap();
        let unit = unit_sandwich(&alg, &a, &b);
        assert!(sw.scale_poly(&expected).rational_eq(&unit));
        assert!(!sw.rational_eq(&unit));
    }

    #[test]
    fn test_sandwich_normalised_rotor() {
        // 3/5 + 4/5 e12 has unit norm
        let alg = CliffordAlgebra::new(2, 0, 0);
        let r = Multivector::from_terms(&alg, [(0, Poly::integer(3)), (0b11, Poly::integer(4))])
            .scale(&(gasym_symbolic::rational(1) / gasym_symbolic::rational(5)));
        let v = Multivector::from_terms(&alg, [(0b01, sym("x")), (0b10, sym("y"))]);
        assert!(sandwich(&alg, &r, &v).unwrap().rational_eq(&unit_sandwich(&alg, &r, &v)));
    }
}

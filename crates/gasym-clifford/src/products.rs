//! Clifford algebra products: geometric, inner, outer, contractions,
//! regressive and the (anti)commutator.
//!
//! Every grade-filtered product walks the Cayley table once and keeps the
//! terms whose grades satisfy the product's selection rule.

use gasym_symbolic::{rational, Poly, Rational};

use crate::algebra::CliffordAlgebra;
use crate::multivector::Multivector;

/// Walk the Cayley table, keeping terms for which `keep(grade_a, grade_b,
/// result_grade)` holds.
fn filtered(
    alg: &CliffordAlgebra,
    a: &Multivector,
    b: &Multivector,
    keep: impl Fn(usize, usize, usize) -> bool,
) -> Multivector {
    let mut coeffs = vec![Poly::zero(); alg.dim];

    for i in 0..alg.dim {
        if a.coeffs[i].is_zero() {
            continue;
        }
        let grade_a = alg.grade(i);

        for j in 0..alg.dim {
            if b.coeffs[j].is_zero() {
                continue;
            }
            let entry = &alg.cayley[i][j];
            if entry.sign == crate::algebra::Sign::Zero {
                continue;
            }
            if !keep(grade_a, alg.grade(j), alg.grade(entry.blade)) {
                continue;
            }
            let val = entry.sign.apply(&(&a.coeffs[i] * &b.coeffs[j]));
            coeffs[entry.blade] += &val;
        }
    }

    Multivector::over(coeffs, a.denominator() * b.denominator())
}

/// Geometric product: the fundamental product of Clifford algebra.
///
/// For two multivectors A and B:
/// (A * B)_k = Σ_ij cayley[i][j].sign * A_i * B_j  (where cayley[i][j].blade == k)
pub fn geometric(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    filtered(alg, a, b, |_, _, _| true)
}

/// Inner product, symmetric ("fat dot") form.
///
/// <A>_r · <B>_s = <A*B>_{|r-s|}
pub fn inner(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    filtered(alg, a, b, |ga, gb, gr| gr == ga.abs_diff(gb))
}

/// Outer (wedge) product.
///
/// <A>_r ∧ <B>_s = <A*B>_{r+s}
pub fn outer(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    filtered(alg, a, b, |ga, gb, gr| gr == ga + gb)
}

/// Left contraction: <A>_r ⌋ <B>_s = <A*B>_{s-r} when s >= r, else 0.
pub fn left_contraction(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    filtered(alg, a, b, |ga, gb, gr| gb >= ga && gr == gb - ga)
}

/// Right contraction: <A>_r ⌊ <B>_s = <A*B>_{r-s} when r >= s, else 0.
pub fn right_contraction(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    filtered(alg, a, b, |ga, gb, gr| ga >= gb && gr == ga - gb)
}

/// Scalar product: <AB>_0 (grade-0 part of geometric product).
pub fn scalar_product(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    filtered(alg, a, b, |_, _, gr| gr == 0)
}

/// Right complement: e_S ↦ σ e_{S^c} with e_S ∧ σ e_{S^c} = I.
///
/// Uses only the generator order, so it stays usable when the metric is
/// degenerate and I has no inverse.
pub fn dual(alg: &CliffordAlgebra, mv: &Multivector) -> Multivector {
    let mut coeffs = vec![Poly::zero(); alg.dim];
    for (blade, c) in mv.coeffs.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        let complement = alg.pseudoscalar() ^ blade;
        coeffs[complement] = alg.complement_sign(blade).apply(c);
    }
    Multivector::over(coeffs, mv.denominator().clone())
}

/// Left complement, the inverse of [`dual`]: e_T ↦ τ e_{T^c} with
/// τ e_{T^c} ∧ e_T = I.
pub fn undual(alg: &CliffordAlgebra, mv: &Multivector) -> Multivector {
    let mut coeffs = vec![Poly::zero(); alg.dim];
    for (blade, c) in mv.coeffs.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        let complement = alg.pseudoscalar() ^ blade;
        coeffs[complement] = alg.complement_sign(complement).apply(c);
    }
    Multivector::over(coeffs, mv.denominator().clone())
}

/// Regressive (vee) product: A ∨ B = undual(dual(A) ∧ dual(B)).
pub fn regressive(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    undual(alg, &outer(alg, &dual(alg, a), &dual(alg, b)))
}

fn half() -> Rational {
    rational(1) / rational(2)
}

/// Commutator product: (AB - BA) / 2.
pub fn commutator(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    let ab = geometric(alg, a, b);
    let ba = geometric(alg, b, a);
    (&ab - &ba).scale(&half())
}

/// Anticommutator product: (AB + BA) / 2.
pub fn anticommutator(alg: &CliffordAlgebra, a: &Multivector, b: &Multivector) -> Multivector {
    let ab = geometric(alg, a, b);
    let ba = geometric(alg, b, a);
    (&ab + &ba).scale(&half())
}

//! Algebraic properties of the explorer across every algebra family.

use gasym_clifford::products::{anticommutator, commutator, geometric};
use gasym_clifford::{explore, AlgebraFamily, ExplorerConfig, InputShape, Parity, ProductKind};
use gasym_symbolic::rational;

// ============================================================================
// Operand construction
// ============================================================================

#[test]
fn test_parity_shapes_have_expected_parity() {
    for family in AlgebraFamily::ALL {
        let alg = family.algebra();
        assert_eq!(family.even(&alg, "A").parity(&alg), Parity::Even, "{}", family);
        assert_eq!(family.odd(&alg, "A").parity(&alg), Parity::Odd, "{}", family);
        // Together they cover every blade exactly once.
        let total = family.even(&alg, "A").nonzero_blades(&alg).len() + family.odd(&alg, "A").nonzero_blades(&alg).len();
        assert_eq!(total, alg.dim, "{}", family);
    }
}

#[test]
fn test_every_shape_builds() {
    for family in AlgebraFamily::ALL {
        let alg = family.algebra();
        for shape in InputShape::ALL {
            let mv = shape.build(family, &alg, "A");
            if let Some(grade) = shape.grade() {
                assert!(mv.grades(&alg).iter().all(|&g| g == grade), "{} {}", family, shape);
            }
        }
    }
}

// ============================================================================
// Product identities
// ============================================================================

#[test]
fn test_commutator_identities_all_small_families() {
    let families = [AlgebraFamily::Pga1, AlgebraFamily::Pga2, AlgebraFamily::Cga1];
    for family in families {
        let alg = family.algebra();
        let a = family.even(&alg, "A");
        let b = family.odd(&alg, "B");
        let ab = geometric(&alg, &a, &b);
        let ba = geometric(&alg, &b, &a);
        let two = rational(2);
        assert!(commutator(&alg, &a, &b).scale(&two).rational_eq(&(&ab - &ba)), "{}", family);
        assert!(anticommutator(&alg, &a, &b).scale(&two).rational_eq(&(&ab + &ba)), "{}", family);
    }
}

#[test]
fn test_pga2_gp_odd_odd_is_even() {
    let report = explore(
        AlgebraFamily::Pga2,
        ProductKind::Geometric,
        InputShape::Odd,
        InputShape::Odd,
        &ExplorerConfig::default(),
    )
    .unwrap();
    assert_eq!(report.parity, Parity::Even);
    let blades: Vec<&str> = report.terms.iter().map(|t| t.blade.as_str()).collect();
    assert_eq!(blades, vec!["1", "e01", "e02", "e12"]);
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_end_to_end_pga1_gp_even_even() {
    let report = explore(
        AlgebraFamily::Pga1,
        ProductKind::Geometric,
        InputShape::Even,
        InputShape::Even,
        &ExplorerConfig::default(),
    )
    .unwrap();
    let lines: Vec<String> = report.terms.iter().map(|t| t.line()).collect();
    assert_eq!(lines, vec!["(As*Bs)", "(Aox*Bs + As*Box) e01"]);
}

#[test]
fn test_unit_sandwich_cga1_vector_stays_odd() {
    let report = explore(
        AlgebraFamily::Cga1,
        ProductKind::UnitSandwich,
        InputShape::Even,
        InputShape::Vec,
        &ExplorerConfig::default(),
    )
    .unwrap();
    assert_eq!(report.parity, Parity::Odd);
}

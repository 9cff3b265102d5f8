//! Benchmark: symbolic products of general even/odd multivectors per family.

use gasym_clifford::{AlgebraFamily, ProductKind};
use std::time::Instant;

fn bench_product(family: AlgebraFamily, product: ProductKind, iters: usize) -> (f64, usize) {
    let alg = family.algebra();
    let a = family.even(&alg, "A");
    let b = family.odd(&alg, "B");
    let mut terms = 0;
    let start = Instant::now();
    for _ in 0..iters {
        let result = product.apply(&alg, &a, &b).unwrap();
        terms = result.coeffs.iter().map(|c| c.len()).sum();
    }
    (start.elapsed().as_secs_f64() / iters as f64, terms)
}

fn main() {
    println!("=== gasym Product Benchmark ===\n");

    let products = [ProductKind::Geometric, ProductKind::Outer, ProductKind::Regressive, ProductKind::UnitSandwich];

    println!("{:<8} {:<16} {:>12} {:>10}", "Algebra", "Product", "Time (ms)", "Terms");
    println!("{}", "-".repeat(50));

    for family in AlgebraFamily::ALL {
        for product in products {
            let iters = if family == AlgebraFamily::Cga3 { 2 } else { 20 };
            let (secs, terms) = bench_product(family, product, iters);
            println!("{:<8} {:<16} {:>12.3} {:>10}", family, product, secs * 1e3, terms);
        }
    }
}

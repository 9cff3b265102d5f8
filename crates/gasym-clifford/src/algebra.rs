//! Clifford algebra Cl(p,q,r) definition and Cayley table generation.
//!
//! The algebra is defined by its signature (p, q, r) where:
//! - r basis vectors square to 0 (placed first, as e0 in projective algebras)
//! - p basis vectors square to +1
//! - q basis vectors square to -1
//! - Total dimension n = p + q + r
//! - Algebra has 2^n basis blades, each a bitmask of generator indices

use gasym_symbolic::Poly;

/// Sign result from multiplying two basis blades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Pos,
    Neg,
    Zero,
}

impl Sign {
    pub fn as_i64(self) -> i64 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
            Sign::Zero => 0,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
        }
    }

    /// Apply the sign to a polynomial coefficient.
    pub fn apply(self, p: &Poly) -> Poly {
        match self {
            Sign::Pos => p.clone(),
            Sign::Neg => -p,
            Sign::Zero => Poly::zero(),
        }
    }
}

impl std::ops::Mul for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Pos, s) | (s, Sign::Pos) => s,
            (Sign::Neg, Sign::Neg) => Sign::Pos,
        }
    }
}

/// Entry in the Cayley (multiplication) table.
#[derive(Debug, Clone, Copy)]
pub struct CayleyEntry {
    /// Resulting basis blade index.
    pub blade: usize,
    /// Sign of the product.
    pub sign: Sign,
}

/// A Clifford algebra Cl(p,q,r).
///
/// Stores the precomputed Cayley table for the geometric product and the
/// fixed display order of the basis blades.
#[derive(Debug, Clone)]
pub struct CliffordAlgebra {
    /// Number of basis vectors squaring to +1.
    pub p: usize,
    /// Number of basis vectors squaring to -1.
    pub q: usize,
    /// Number of basis vectors squaring to 0.
    pub r: usize,
    /// Total number of basis vectors.
    pub n: usize,
    /// Total number of basis blades (2^n).
    pub dim: usize,
    /// Square of each generator, null generators first.
    pub metric: Vec<Sign>,
    /// Label of generator 0: `e0` when the algebra is degenerate, else `e1`.
    pub first_index: usize,
    /// Cayley table: cayley[i][j] = result of blade_i * blade_j.
    pub cayley: Vec<Vec<CayleyEntry>>,
    /// Grade of each basis blade.
    pub grades: Vec<usize>,
    /// Blades sorted by grade, then by index tuple.
    order: Vec<usize>,
}

impl CliffordAlgebra {
    /// Create a new Clifford algebra Cl(p,q,r) and precompute the Cayley table.
    pub fn new(p: usize, q: usize, r: usize) -> Self {
        let n = p + q + r;
        let dim = 1 << n; // 2^n

        let mut metric = vec![Sign::Zero; r];
        metric.extend(std::iter::repeat(Sign::Pos).take(p));
        metric.extend(std::iter::repeat(Sign::Neg).take(q));

        // Compute grades (popcount of blade index)
        let grades: Vec<usize> = (0..dim).map(|i| (i as u32).count_ones() as usize).collect();

        // Build Cayley table
        let mut cayley = vec![vec![CayleyEntry { blade: 0, sign: Sign::Zero }; dim]; dim];
        for (i, c_row) in cayley.iter_mut().enumerate() {
            for (j, entry) in c_row.iter_mut().enumerate() {
                *entry = Self::multiply_blades(i, j, &metric);
            }
        }

        let mut order: Vec<usize> = (0..dim).collect();
        order.sort_by_key(|&b| (grades[b], Self::indices_of(b, n)));

        tracing::trace!("built Cl({},{},{}) with {} blades", p, q, r, dim);

        Self {
            p,
            q,
            r,
            n,
            dim,
            metric,
            first_index: if r > 0 { 0 } else { 1 },
            cayley,
            grades,
            order,
        }
    }

    /// Multiply two basis blades represented as bitmasks.
    ///
    /// Each bit in the bitmask represents a basis vector.
    /// e.g., for Cl(2,0,1): e0=0b001, e1=0b010, e2=0b100, e01=0b011, etc.
    fn multiply_blades(a: usize, b: usize, metric: &[Sign]) -> CayleyEntry {
        let result_blade = a ^ b; // XOR gives the resulting blade

        let mut sign = if swap_parity(a, b) { Sign::Neg } else { Sign::Pos };

        // Shared bits (a & b) are basis vectors that meet their pair and
        // contract to their square
        let shared = a & b;
        for (i, &square) in metric.iter().enumerate() {
            if (shared >> i) & 1 == 1 {
                sign = sign * square;
            }
        }

        CayleyEntry { blade: result_blade, sign }
    }

    fn indices_of(blade: usize, n: usize) -> Vec<usize> {
        (0..n).filter(|i| (blade >> i) & 1 == 1).collect()
    }

    /// Get the grade of a basis blade.
    pub fn grade(&self, blade: usize) -> usize {
        self.grades[blade]
    }

    /// Get all blade indices of a specific grade, in display order.
    pub fn blades_of_grade(&self, grade: usize) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&i| self.grades[i] == grade)
            .collect()
    }

    /// All blades in display order.
    pub fn blade_order(&self) -> &[usize] {
        &self.order
    }

    /// Generator positions (0-based) making up a blade.
    pub fn blade_indices(&self, blade: usize) -> Vec<usize> {
        Self::indices_of(blade, self.n)
    }

    /// The blade containing every generator.
    pub fn pseudoscalar(&self) -> usize {
        self.dim - 1
    }

    /// Name of a basis blade (for display).
    pub fn blade_name(&self, blade: usize) -> String {
        if blade == 0 {
            return "1".to_string();
        }
        let mut name = String::from("e");
        for i in self.blade_indices(blade) {
            name.push_str(&(i + self.first_index).to_string());
        }
        name
    }

    /// Sign `σ` such that `e_S ∧ (σ e_{S^c}) = I`.
    ///
    /// Depends only on generator order, never on the metric, which keeps
    /// duality usable in degenerate algebras.
    pub fn complement_sign(&self, blade: usize) -> Sign {
        let complement = self.pseudoscalar() ^ blade;
        if swap_parity(blade, complement) {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }
}

/// True if bringing the generators of `a · b` into canonical order takes an
/// odd number of swaps.
fn swap_parity(a: usize, b: usize) -> bool {
    // For each bit in b, count how many bits in a are to its left
    // (these need to be swapped past, each swap flips sign)
    let mut swaps = 0u32;
    let mut rest = a >> 1;
    while rest != 0 {
        swaps += (rest & b).count_ones();
        rest >>= 1;
    }
    swaps % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pga2() {
        // Cl(2,0,1): 2D projective algebra
        // Basis: {1, e0, e1, e2, e01, e02, e12, e012}
        let alg = CliffordAlgebra::new(2, 0, 1);
        assert_eq!(alg.dim, 8);
        assert_eq!(alg.n, 3);
        assert_eq!(alg.first_index, 0);

        // e0 * e0 = 0
        let e0e0 = &alg.cayley[0b001][0b001];
        assert_eq!(e0e0.blade, 0);
        assert_eq!(e0e0.sign, Sign::Zero);

        // e1 * e1 = +1
        let e1e1 = &alg.cayley[0b010][0b010];
        assert_eq!(e1e1.sign, Sign::Pos);

        // e1 * e2 = e12, e2 * e1 = -e12
        let e1e2 = &alg.cayley[0b010][0b100];
        assert_eq!(e1e2.blade, 0b110);
        assert_eq!(e1e2.sign, Sign::Pos);
        let e2e1 = &alg.cayley[0b100][0b010];
        assert_eq!(e2e1.blade, 0b110);
        assert_eq!(e2e1.sign, Sign::Neg);

        // e12 * e12 = -1
        assert_eq!(alg.cayley[0b110][0b110].sign, Sign::Neg);
    }

    #[test]
    fn test_cga1_metric() {
        // Cl(2,1): e1, e2 square to +1 and e3 to -1
        let alg = CliffordAlgebra::new(2, 1, 0);
        assert_eq!(alg.first_index, 1);
        assert_eq!(alg.cayley[0b100][0b100].sign, Sign::Neg);
        assert_eq!(alg.cayley[0b001][0b001].sign, Sign::Pos);
        // e123 * e123: three swaps, then e3^2 = -1
        let e123 = &alg.cayley[0b111][0b111];
        assert_eq!(e123.blade, 0);
        assert_eq!(e123.sign, Sign::Pos);
    }

    #[test]
    fn test_grade_counts_pga3() {
        let alg = CliffordAlgebra::new(3, 0, 1);
        assert_eq!(alg.dim, 16);
        let counts: Vec<usize> = (0..=4).map(|g| alg.blades_of_grade(g).len()).collect();
        assert_eq!(counts, vec![1, 4, 6, 4, 1]);
    }

    #[test]
    fn test_blade_names_and_order() {
        let alg = CliffordAlgebra::new(2, 0, 1);
        let names: Vec<String> = alg.blade_order().iter().map(|&b| alg.blade_name(b)).collect();
        assert_eq!(names, vec!["1", "e0", "e1", "e2", "e01", "e02", "e12", "e012"]);

        let cga = CliffordAlgebra::new(3, 1, 0);
        assert_eq!(cga.blade_name(0b1010), "e24");
    }

    #[test]
    fn test_complement_sign() {
        let alg = CliffordAlgebra::new(2, 0, 1);
        // e0 ∧ e12 = e012, e1 ∧ e02 = -e012, e2 ∧ e01 = e012
        assert_eq!(alg.complement_sign(0b001), Sign::Pos);
        assert_eq!(alg.complement_sign(0b010), Sign::Neg);
        assert_eq!(alg.complement_sign(0b100), Sign::Pos);
        assert_eq!(alg.complement_sign(0), Sign::Pos);
    }

    #[test]
    fn test_sign_arithmetic() {
        assert_eq!(Sign::Pos * Sign::Pos, Sign::Pos);
        assert_eq!(Sign::Pos * Sign::Neg, Sign::Neg);
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(Sign::Zero * Sign::Pos, Sign::Zero);
        assert_eq!(Sign::Neg.as_i64(), -1);
    }
}

//! Closed-form homography from the unit square to four points.
//!
//! The homography `H` maps the canonical corners (0,0) (1,0) (1,1) (0,1)
//! onto the destination quad `E F G H`. Each destination is homogeneous,
//! so every corner carries its own unknown scale `p q r s`:
//!
//! ```text
//! H · uv = [p·E  q·F  r·G  s·H]
//! ```
//!
//! A chain of hand-derived substitutions eliminates the nine coefficients
//! and leaves a system that is linear in `p q r`, with `s` as the overall
//! scale. The substitutions only hold for this canonical source square.

use std::collections::BTreeMap;
use std::fmt;

use crate::matrix::Matrix;
use crate::poly::Poly;
use crate::ratfunc::RatFunc;
use crate::solve::{solution_for, solve_linear};
use crate::symbol::Symbol;
use crate::Result;

fn sym(name: &str) -> Poly {
    Poly::symbol(&Symbol::new(name))
}

fn int(n: i64) -> Poly {
    Poly::integer(n)
}

/// Every intermediate value of the derivation, in the order it is printed.
#[derive(Debug, Clone)]
pub struct Derivation {
    /// The nine unknown coefficients `a..i`.
    pub coefficients: Matrix,
    /// Canonical unit-square corners as homogeneous columns.
    pub canonical: Matrix,
    /// A general source quad `A B C D`. Solving from it directly does not
    /// finish in practical time, so it is only displayed.
    pub source_quad: Matrix,
    /// Destination corners scaled by `p q r s`.
    pub destinations: Matrix,
    /// `H · uv − destinations`.
    pub constraints: Matrix,
    /// `constraints` with `i = p`.
    pub constraints_i_eliminated: Matrix,
    /// `H · uv`.
    pub mapped_canonical: Matrix,
    pub substitutions: Vec<(Symbol, Poly)>,
    /// Entries (0,3), (1,3) and (2,2) of `(H · uv)[subs] − destinations`.
    pub reduced_constraints: Vec<Poly>,
    /// `p q r` in terms of the destinations and `s`.
    pub solution: Vec<(Symbol, RatFunc)>,
    /// `det([E F G])`, the shared denominator of `p q r`.
    pub denominator: Poly,
    /// `solution · denominator / s` for each of `p q r`.
    pub numerators: Vec<(Symbol, RatFunc)>,
    /// `det(H[subs])`.
    pub substituted_det: Poly,
}

/// Run the fixed derivation.
pub fn derive() -> Result<Derivation> {
    let coefficients = Matrix::from_rows(vec![
        vec![sym("a"), sym("b"), sym("c")],
        vec![sym("d"), sym("e"), sym("f")],
        vec![sym("g"), sym("h"), sym("i")],
    ])?;

    let canonical = Matrix::from_rows(vec![
        vec![int(0), int(1), int(1), int(0)],
        vec![int(0), int(0), int(1), int(1)],
        vec![int(1), int(1), int(1), int(1)],
    ])?;

    let source_quad = Matrix::from_rows(vec![
        vec![sym("Ax"), sym("Bx"), sym("Cx"), sym("Dx")],
        vec![sym("Ay"), sym("By"), sym("Cy"), sym("Dy")],
        vec![int(1), int(1), int(1), int(1)],
    ])?;

    let (p, q, r, s) = (sym("p"), sym("q"), sym("r"), sym("s"));
    let destinations = Matrix::from_rows(vec![
        vec![&p * &sym("Ex"), &q * &sym("Fx"), &r * &sym("Gx"), &s * &sym("Hx")],
        vec![&p * &sym("Ey"), &q * &sym("Fy"), &r * &sym("Gy"), &s * &sym("Hy")],
        vec![p.clone(), q.clone(), r.clone(), s.clone()],
    ])?;

    let mapped_canonical = coefficients.mul(&canonical)?;
    let constraints = mapped_canonical.sub(&destinations)?;

    let i_only: BTreeMap<Symbol, Poly> = [(Symbol::new("i"), p.clone())].into_iter().collect();
    let constraints_i_eliminated = constraints.subs(&i_only);

    let substitutions = vec![
        (Symbol::new("i"), p.clone()),
        (Symbol::new("h"), &s - &p),
        (Symbol::new("g"), &q - &p),
        (Symbol::new("c"), &sym("Ex") * &p),
        (Symbol::new("f"), &sym("Ey") * &p),
        (Symbol::new("a"), &(&sym("Fx") * &q) - &(&sym("Ex") * &p)),
        (Symbol::new("d"), &(&sym("Fy") * &q) - &(&sym("Ey") * &p)),
        (Symbol::new("b"), &(&sym("Gx") * &r) - &(&sym("Fx") * &q)),
        (Symbol::new("e"), &(&sym("Gy") * &r) - &(&sym("Fy") * &q)),
    ];
    let subs_map: BTreeMap<Symbol, Poly> = substitutions.iter().cloned().collect();

    let simpler = mapped_canonical.subs(&subs_map).sub(&destinations)?;
    let reduced_constraints = vec![
        simpler.get(0, 3).clone(),
        simpler.get(1, 3).clone(),
        simpler.get(2, 2).clone(),
    ];

    let unknowns = [Symbol::new("p"), Symbol::new("q"), Symbol::new("r")];
    let solution = solve_linear(&reduced_constraints, &unknowns)?;
    tracing::debug!("homography: solved {} scale factors", solution.len());

    let efg = Matrix::from_rows(vec![
        vec![sym("Ex"), sym("Fx"), sym("Gx")],
        vec![sym("Ey"), sym("Fy"), sym("Gy")],
        vec![int(1), int(1), int(1)],
    ])?;
    let denominator = efg.det()?;

    let numerators = solution
        .iter()
        .map(|(var, expr)| {
            let scaled = expr * &RatFunc::from_poly(denominator.clone());
            Ok((var.clone(), scaled.div_poly(&s)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let substituted_det = coefficients.subs(&subs_map).det()?;

    Ok(Derivation {
        coefficients,
        canonical,
        source_quad,
        destinations,
        constraints,
        constraints_i_eliminated,
        mapped_canonical,
        substitutions,
        reduced_constraints,
        solution,
        denominator,
        numerators,
        substituted_det,
    })
}

impl Derivation {
    /// The nine coefficients with the substitutions and the solved scales
    /// plugged in, as functions of the destination points and `s`.
    pub fn solved(&self) -> Result<SolvedHomography> {
        let subs_map: BTreeMap<Symbol, Poly> = self.substitutions.iter().cloned().collect();
        let mut scales = BTreeMap::new();
        for name in ["p", "q", "r"] {
            let var = Symbol::new(name);
            let value = solution_for(&self.solution, &var)?.clone();
            scales.insert(var, value);
        }
        let entries = self
            .coefficients
            .subs(&subs_map)
            .entries()
            .iter()
            .map(|e| RatFunc::compose(e, &scales))
            .collect();
        Ok(SolvedHomography { entries })
    }
}

/// A 3×3 homography whose entries are rational functions.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedHomography {
    entries: Vec<RatFunc>,
}

impl SolvedHomography {
    pub fn get(&self, r: usize, c: usize) -> &RatFunc {
        &self.entries[r * 3 + c]
    }

    /// Specialise to concrete destination corners `E F G H`.
    ///
    /// Fails with `DivisionByZero` when `E F G` are collinear.
    pub fn at_destinations(&self, corners: [(i64, i64); 4]) -> Result<SolvedHomography> {
        let mut map = BTreeMap::new();
        for (label, (x, y)) in ["E", "F", "G", "H"].iter().zip(corners) {
            map.insert(Symbol::new(format!("{label}x")), Poly::integer(x));
            map.insert(Symbol::new(format!("{label}y")), Poly::integer(y));
        }
        let entries = self
            .entries
            .iter()
            .map(|e| e.subs(&map))
            .collect::<Result<Vec<_>>>()?;
        Ok(SolvedHomography { entries })
    }
}

impl fmt::Display for SolvedHomography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3 {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}]", self.get(r, 0), self.get(r, 1), self.get(r, 2))?;
        }
        Ok(())
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Homography H:\n{}\n", self.coefficients)?;
        writeln!(f, "Canonical corners uv:\n{}\n", self.canonical)?;
        writeln!(f, "General source quad (not solved):\n{}\n", self.source_quad)?;
        writeln!(f, "Scaled destinations:\n{}\n", self.destinations)?;
        writeln!(f, "H * uv - destinations:\n{}\n", self.constraints)?;
        writeln!(f, "... with i = p:\n{}\n", self.constraints_i_eliminated)?;
        writeln!(f, "H * uv:\n{}\n", self.mapped_canonical)?;

        writeln!(f, "Substitutions:")?;
        for (var, value) in &self.substitutions {
            writeln!(f, "  {} = {}", var, value)?;
        }

        writeln!(f, "\nReduced constraints:")?;
        for c in &self.reduced_constraints {
            writeln!(f, "  {}", c)?;
        }

        writeln!(f, "\nCommon denominator det(E, F, G):\n  {}", self.denominator)?;
        for (var, numerator) in &self.numerators {
            writeln!(f, "{}:\n  {}", var, numerator)?;
        }

        write!(f, "\ndet(H) after substitution:\n  {}", self.substituted_det)
    }
}

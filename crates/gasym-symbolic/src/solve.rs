//! Closed-form solution of square linear systems with symbolic coefficients.

use crate::error::SymbolicError;
use crate::matrix::Matrix;
use crate::poly::Poly;
use crate::ratfunc::RatFunc;
use crate::symbol::Symbol;
use crate::Result;

/// Solve `equations = 0` for `unknowns` with Cramer's rule.
///
/// Every equation must be linear in the unknowns; other symbols act as
/// parameters. Returns the unknowns in the order given.
pub fn solve_linear(equations: &[Poly], unknowns: &[Symbol]) -> Result<Vec<(Symbol, RatFunc)>> {
    if equations.len() != unknowns.len() {
        return Err(SymbolicError::ShapeMismatch {
            expected: vec![unknowns.len()],
            got: vec![equations.len()],
        });
    }

    let mut rows = Vec::with_capacity(equations.len());
    let mut rhs = Vec::with_capacity(equations.len());
    for eq in equations {
        let (coeffs, rest) = eq.linear_split(unknowns)?;
        rows.push(coeffs);
        rhs.push(-rest);
    }

    let system = Matrix::from_rows(rows)?;
    let det = system.det()?;
    if det.is_zero() {
        return Err(SymbolicError::Singular);
    }
    tracing::debug!("solve_linear: {} unknowns, det has {} terms", unknowns.len(), det.len());

    unknowns
        .iter()
        .enumerate()
        .map(|(k, u)| {
            let numerator = system.column_replaced(k, &rhs)?.det()?;
            Ok((u.clone(), RatFunc::new(numerator, det.clone())?))
        })
        .collect()
}

/// Look up one unknown in a solution list.
pub fn solution_for<'a>(solution: &'a [(Symbol, RatFunc)], sym: &Symbol) -> Result<&'a RatFunc> {
    solution
        .iter()
        .find(|(s, _)| s == sym)
        .map(|(_, v)| v)
        .ok_or_else(|| SymbolicError::MissingSolution(sym.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::symbols;

    #[test]
    fn test_numeric_system() {
        // x + y = 3, x - y = 1  =>  x = 2, y = 1
        let s = symbols("x y");
        let x = Poly::symbol(&s[0]);
        let y = Poly::symbol(&s[1]);
        let eqs = vec![
            &(&x + &y) - &Poly::integer(3),
            &(&x - &y) - &Poly::integer(1),
        ];
        let sol = solve_linear(&eqs, &s).unwrap();
        assert_eq!(solution_for(&sol, &s[0]).unwrap().as_poly(), Some(&Poly::integer(2)));
        assert_eq!(solution_for(&sol, &s[1]).unwrap().as_poly(), Some(&Poly::integer(1)));
    }

    #[test]
    fn test_parametric_system() {
        // k*x = t  =>  x = t/k
        let s = symbols("x k t");
        let v: Vec<Poly> = s.iter().map(Poly::symbol).collect();
        let eqs = vec![&(&v[1] * &v[0]) - &v[2]];
        let sol = solve_linear(&eqs, &s[..1]).unwrap();
        let expected = RatFunc::new(v[2].clone(), v[1].clone()).unwrap();
        assert_eq!(sol[0].1, expected);
    }

    #[test]
    fn test_singular_and_nonlinear() {
        let s = symbols("x y");
        let x = Poly::symbol(&s[0]);
        let y = Poly::symbol(&s[1]);
        let dependent = vec![&x + &y, &(&x + &y) - &Poly::one()];
        assert_eq!(solve_linear(&dependent, &s), Err(SymbolicError::Singular));

        let nonlinear = vec![&x * &y, x.clone()];
        assert!(matches!(solve_linear(&nonlinear, &s), Err(SymbolicError::NonLinear(_))));

        assert!(matches!(
            solve_linear(&[x], &s),
            Err(SymbolicError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            solution_for(&[], &s[0]),
            Err(SymbolicError::MissingSolution(_))
        ));
    }
}

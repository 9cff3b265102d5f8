//! Dense matrices of polynomials.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::SymbolicError;
use crate::poly::Poly;
use crate::symbol::Symbol;
use crate::Result;

/// Row-major matrix with polynomial entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Poly>,
}

impl Matrix {
    /// Create from row-major data. `data.len()` must equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<Poly>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(SymbolicError::ShapeMismatch {
                expected: vec![rows * cols],
                got: vec![data.len()],
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create from a list of rows, all of the same length.
    pub fn from_rows(rows: Vec<Vec<Poly>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(SymbolicError::ShapeMismatch {
                    expected: vec![n_cols],
                    got: vec![row.len()],
                });
            }
            data.extend(row);
        }
        Ok(Self { rows: n_rows, cols: n_cols, data })
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Poly) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { Poly::one() } else { Poly::zero() })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, r: usize, c: usize) -> &Poly {
        &self.data[r * self.cols + c]
    }

    pub fn entries(&self) -> &[Poly] {
        &self.data
    }

    /// Matrix product `self · rhs`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(SymbolicError::ShapeMismatch {
                expected: vec![self.rows, self.cols],
                got: vec![rhs.rows, rhs.cols],
            });
        }
        Ok(Self::from_fn(self.rows, rhs.cols, |r, c| {
            let mut acc = Poly::zero();
            for k in 0..self.cols {
                acc += &(self.get(r, k) * rhs.get(k, c));
            }
            acc
        }))
    }

    /// Entrywise difference.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(SymbolicError::ShapeMismatch {
                expected: vec![self.rows, self.cols],
                got: vec![rhs.rows, rhs.cols],
            });
        }
        let data = self.data.iter().zip(rhs.data.iter()).map(|(a, b)| a - b).collect();
        Ok(Self { rows: self.rows, cols: self.cols, data })
    }

    pub fn scale(&self, k: &Poly) -> Matrix {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|e| e * k).collect(),
        }
    }

    pub fn subs(&self, map: &BTreeMap<Symbol, Poly>) -> Matrix {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|e| e.subs(map)).collect(),
        }
    }

    /// Copy of the matrix with column `col` replaced by `column`.
    pub fn column_replaced(&self, col: usize, column: &[Poly]) -> Result<Matrix> {
        if column.len() != self.rows || col >= self.cols {
            return Err(SymbolicError::ShapeMismatch {
                expected: vec![self.rows],
                got: vec![column.len()],
            });
        }
        let mut out = self.clone();
        for (r, value) in column.iter().enumerate() {
            out.data[r * self.cols + col] = value.clone();
        }
        Ok(out)
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// Fine for the 3×3 and 4×4 systems this crate deals with.
    pub fn det(&self) -> Result<Poly> {
        if self.rows != self.cols {
            return Err(SymbolicError::ShapeMismatch {
                expected: vec![self.rows, self.rows],
                got: vec![self.rows, self.cols],
            });
        }
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> Poly {
        match self.rows {
            0 => Poly::one(),
            1 => self.data[0].clone(),
            2 => &(self.get(0, 0) * self.get(1, 1)) - &(self.get(0, 1) * self.get(1, 0)),
            n => {
                let mut acc = Poly::zero();
                for c in 0..n {
                    let entry = self.get(0, c);
                    if entry.is_zero() {
                        continue;
                    }
                    let minor = self.minor(0, c).det_unchecked();
                    let term = entry * &minor;
                    if c % 2 == 0 {
                        acc += &term;
                    } else {
                        acc -= &term;
                    }
                }
                acc
            }
        }
    }

    fn minor(&self, skip_r: usize, skip_c: usize) -> Matrix {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in (0..self.rows).filter(|&r| r != skip_r) {
            for c in (0..self.cols).filter(|&c| c != skip_c) {
                data.push(self.get(r, c).clone());
            }
        }
        Self { rows: self.rows - 1, cols: self.cols - 1, data }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            let row: Vec<String> = (0..self.cols).map(|c| self.get(r, c).to_string()).collect();
            write!(f, "[{}]", row.join(", "))?;
        }
        Ok(())
    }
}

//! # gasym-symbolic
//!
//! Minimal computer-algebra core for gasym.
//!
//! Provides:
//! - Named symbols and multivariate polynomials over exact rationals
//! - Rational functions with exact-division cancellation
//! - Polynomial matrices, determinants and substitution
//! - A Cramer's-rule solver for linear systems
//! - The closed-form homography derivation

pub mod error;
pub mod symbol;
pub mod poly;
pub mod ratfunc;
pub mod matrix;
pub mod solve;
pub mod homography;

pub use error::SymbolicError;
pub use symbol::{symbols, Symbol};
pub use poly::{rational, Monomial, Poly, Rational};
pub use ratfunc::RatFunc;
pub use matrix::Matrix;

pub type Result<T> = std::result::Result<T, SymbolicError>;

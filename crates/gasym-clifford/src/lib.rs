//! # gasym-clifford
//!
//! Symbolic geometric algebra for gasym.
//!
//! Provides Clifford algebras Cl(p,q,r) with:
//! - Cayley table generation, null generators first
//! - Multivectors with polynomial coefficients over a shared denominator
//! - Geometric, inner, outer, regressive products and contractions
//! - Grade projection, reverse, involute, conjugate, inverse
//! - The projective and conformal family registry and a product explorer

pub mod algebra;
pub mod display;
pub mod error;
pub mod explorer;
pub mod multivector;
pub mod ops;
pub mod product_kind;
pub mod products;
pub mod registry;

pub use algebra::CliffordAlgebra;
pub use display::Layout;
pub use error::CliffordError;
pub use explorer::{explore, survey, ExplorerConfig, OutputFormat, ProductReport};
pub use multivector::{Multivector, Parity};
pub use product_kind::ProductKind;
pub use registry::{AlgebraFamily, InputShape};

pub type Result<T> = std::result::Result<T, CliffordError>;

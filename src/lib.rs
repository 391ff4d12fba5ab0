//! linsys: a small dense linear-algebra kernel.
//!
//! This crate provides a generic column-major table (`Table`), a determinant
//! type with two independent evaluation strategies (`Det`), a matrix type
//! layered on the table with arithmetic, adjoint and inversion (`Matrix`),
//! and an augmented linear-equation solver (`LinearSystem`) offering both a
//! Cramer's-rule and an inverse-matrix strategy.
//!
//! The design favors small, testable modules. Queries and transforms whose
//! preconditions are violated by caller-supplied indices or shapes return
//! `None`; setters with invalid arguments leave the receiver unchanged. The
//! only hard failure is constructing a table with a zero dimension.
pub mod det;
pub mod error;
pub mod linear;
pub mod matrix;
pub mod sequence;
pub mod table;

pub use det::Det;
pub use error::DimensionError;
pub use linear::LinearSystem;
pub use matrix::Matrix;
pub use table::{Scalar, Table};

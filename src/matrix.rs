//! Matrix type layered on the dense table: arithmetic, determinant
//! extraction, adjoint, inversion, elementary row/column operations and
//! row-echelon reduction.
//!
//! Square-ness is required only by the operations that need it; those
//! return `None` instead of failing the whole object when it does not hold.

use std::fmt;

use rayon::prelude::*;

use crate::det::Det;
use crate::error::DimensionError;
use crate::sequence;
use crate::table::{Scalar, Table};

/// Dense matrix with 1-based indices and column-major construction order.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    table: Table<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Build an `rows × cols` matrix from a flat column-major initializer
    /// with the table's zero-pad/truncate rules.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, DimensionError> {
        Ok(Self {
            table: Table::new(rows, cols, data)?,
        })
    }

    fn zeroed(rows: usize, cols: usize) -> Matrix<T> {
        Matrix {
            table: Table::new(rows, cols, Vec::new()).expect("dimensions are nonzero"),
        }
    }

    pub fn rows(&self) -> usize {
        self.table.rows()
    }

    pub fn cols(&self) -> usize {
        self.table.cols()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.table.get(row, col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.table.set(row, col, value);
    }

    pub fn row(&self, row: usize) -> Option<Vec<T>> {
        self.table.row(row)
    }

    pub fn set_row(&mut self, row: usize, values: &[T]) {
        self.table.set_row(row, values);
    }

    pub fn column(&self, col: usize) -> Option<Vec<T>> {
        self.table.column(col)
    }

    pub fn set_column(&mut self, col: usize, values: &[T]) {
        self.table.set_column(col, values);
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.table.swap_rows(i, j);
    }

    pub fn swap_cols(&mut self, i: usize, j: usize) {
        self.table.swap_cols(i, j);
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            table: self.table.transpose(),
        }
    }

    pub fn homotype(&self, other: &Matrix<T>) -> bool {
        self.table.homotype(&other.table)
    }

    pub fn is_square(&self) -> bool {
        self.table.is_square()
    }

    pub fn is_single_row(&self) -> bool {
        self.rows() == 1
    }

    pub fn is_single_column(&self) -> bool {
        self.cols() == 1
    }

    /// Element access for the internal algorithms, which only ever index
    /// inside the matrix dimensions.
    fn at(&self, row: usize, col: usize) -> T {
        self.table.get(row, col).expect("index within dimensions")
    }

    /// True iff the matrix is square with zeros everywhere off the
    /// diagonal.
    pub fn is_diagonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 1..=self.rows() {
            for j in 1..=self.cols() {
                if i != j && self.at(i, j) != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// True iff the matrix is square with ones on the diagonal and zeros
    /// elsewhere.
    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 1..=self.rows() {
            for j in 1..=self.cols() {
                let expected = if i == j { T::one() } else { T::zero() };
                if self.at(i, j) != expected {
                    return false;
                }
            }
        }
        true
    }

    /// True iff the matrix is square and equal to its transpose.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 1..=self.rows() {
            for j in (i + 1)..=self.cols() {
                if self.at(i, j) != self.at(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Element-wise sum; defined only for homotypic matrices.
    pub fn add(&self, rhs: &Matrix<T>) -> Option<Matrix<T>> {
        let mut result = self.clone();
        if !result.add_assign(rhs) {
            return None;
        }
        Some(result)
    }

    /// In-place element-wise sum. Returns `false` (leaving the receiver
    /// unchanged) when the operands are not homotypic.
    pub fn add_assign(&mut self, rhs: &Matrix<T>) -> bool {
        if !self.homotype(rhs) {
            return false;
        }
        for row in 1..=self.rows() {
            let lhs_row = self.row(row).expect("row within dimensions");
            let rhs_row = rhs.row(row).expect("row within dimensions");
            let combined =
                sequence::sum(&lhs_row, &rhs_row).expect("homotypic rows share a width");
            self.set_row(row, &combined);
        }
        true
    }

    /// Scalar multiple; a zero scalar is rejected rather than silently
    /// producing a zero matrix.
    pub fn scale(&self, k: &T) -> Option<Matrix<T>> {
        let mut result = self.clone();
        if !result.scale_assign(k) {
            return None;
        }
        Some(result)
    }

    /// In-place scalar multiple. Returns `false` for a zero scalar.
    pub fn scale_assign(&mut self, k: &T) -> bool {
        if *k == T::zero() {
            return false;
        }
        for row in 1..=self.rows() {
            let line = self.row(row).expect("row within dimensions");
            self.set_row(row, &sequence::scale(&line, k));
        }
        true
    }

    /// Matrix product; defined when `self.cols() == rhs.rows()`. Each
    /// result cell is the dot product of the matching row/column pair.
    pub fn mul(&self, rhs: &Matrix<T>) -> Option<Matrix<T>> {
        if self.cols() != rhs.rows() {
            return None;
        }

        let mut result = Matrix::zeroed(self.rows(), rhs.cols());
        for i in 1..=result.rows() {
            let row = self.row(i).expect("row within dimensions");
            for j in 1..=result.cols() {
                let col = rhs.column(j).expect("column within dimensions");
                let cell = sequence::dot(&row, &col).expect("inner dimensions match");
                result.set(i, j, cell);
            }
        }
        Some(result)
    }

    /// Determinant built from the matrix's rows; `None` for non-square
    /// matrices.
    pub fn det(&self) -> Option<Det<T>> {
        if !self.is_square() {
            return None;
        }
        let mut result = Det::new(self.rows(), Vec::new()).expect("order is nonzero");
        for row in 1..=self.rows() {
            result.set_row(row, &self.row(row).expect("row within dimensions"));
        }
        Some(result)
    }

    /// Classical adjugate: cell `(i, j)` holds the cofactor value of
    /// `(j, i)`. Defined only for square matrices of order at least 2.
    ///
    /// Every cofactor is a full permutation expansion over the same
    /// immutable determinant snapshot, so the cells are evaluated on the
    /// rayon pool and joined before the result is assembled; no partial
    /// adjoint is ever observable.
    pub fn adjoint(&self) -> Option<Matrix<T>>
    where
        T: Send + Sync,
    {
        let n = self.rows();
        if !self.is_square() || n < 2 {
            return None;
        }

        let snapshot = self.det().expect("matrix is square");
        let cells: Vec<(usize, usize)> = (1..=n)
            .flat_map(|i| (1..=n).map(move |j| (i, j)))
            .collect();

        log::debug!("adjoint: dispatching {} cofactor evaluations", cells.len());
        let values: Vec<T> = cells
            .par_iter()
            .map(|&(i, j)| {
                snapshot
                    .cofactor(i, j)
                    .expect("indices within order of at least 2")
                    .general_calculate()
            })
            .collect();

        let mut result = Matrix::zeroed(n, n);
        for ((i, j), value) in cells.into_iter().zip(values) {
            result.set(j, i, value);
        }
        Some(result)
    }

    /// Inverse via `adjoint × (1 / det)`. `None` when the matrix is not
    /// square, the determinant is exactly zero, or the order is 1 (no
    /// adjoint exists).
    pub fn inverse(&self) -> Option<Matrix<T>>
    where
        T: Send + Sync,
    {
        let det = self.det()?;
        let value = det.elimination_calculate();
        if value == T::zero() {
            log::debug!("inverse: determinant is zero, matrix is singular");
            return None;
        }

        let mut result = self.adjoint()?;
        result.scale_assign(&(T::one() / value));
        Some(result)
    }

    /// Multiply a row by `k`; out-of-range rows are a no-op.
    pub fn row_times(&mut self, row: usize, k: &T) {
        if row == 0 || row > self.rows() {
            return;
        }
        let line = self.row(row).expect("row within dimensions");
        self.set_row(row, &sequence::scale(&line, k));
    }

    /// Multiply a column by `k`; out-of-range columns are a no-op.
    pub fn column_times(&mut self, col: usize, k: &T) {
        if col == 0 || col > self.cols() {
            return;
        }
        let line = self.column(col).expect("column within dimensions");
        self.set_column(col, &sequence::scale(&line, k));
    }

    /// Row replacement `dst ← dst + k·src`; out-of-range rows are a no-op.
    pub fn row_add_times_row(&mut self, dst: usize, src: usize, k: &T) {
        if dst == 0 || dst > self.rows() || src == 0 || src > self.rows() {
            return;
        }
        let dst_row = self.row(dst).expect("row within dimensions");
        let src_row = self.row(src).expect("row within dimensions");
        let combined = sequence::sum(&dst_row, &sequence::scale(&src_row, k))
            .expect("rows share the table width");
        self.set_row(dst, &combined);
    }

    /// Column replacement `dst ← dst + k·src`; out-of-range columns are a
    /// no-op.
    pub fn column_add_times_column(&mut self, dst: usize, src: usize, k: &T) {
        if dst == 0 || dst > self.cols() || src == 0 || src > self.cols() {
            return;
        }
        let dst_col = self.column(dst).expect("column within dimensions");
        let src_col = self.column(src).expect("column within dimensions");
        let combined = sequence::sum(&dst_col, &sequence::scale(&src_col, k))
            .expect("columns share the table height");
        self.set_column(dst, &combined);
    }

    /// Reduce in place toward reduced row-echelon form: forward pass with
    /// pivot search/swap, pivot normalization and elimination below, then a
    /// back-substitution pass clearing entries above each pivot. 1-row and
    /// 1-column matrices are left unchanged.
    pub fn elimination(&mut self) {
        if self.is_single_row() || self.is_single_column() {
            return;
        }

        let rows = self.rows();
        let steps = rows.min(self.cols());

        for pivot in 1..=steps {
            if self.at(pivot, pivot) == T::zero() {
                for row in (pivot + 1)..=rows {
                    if self.at(row, pivot) != T::zero() {
                        self.swap_rows(pivot, row);
                        break;
                    }
                }
                if self.at(pivot, pivot) == T::zero() {
                    continue;
                }
            }

            let pivot_value = self.at(pivot, pivot);
            self.row_times(pivot, &(T::one() / pivot_value));

            for row in (pivot + 1)..=rows {
                let factor = self.at(row, pivot);
                if factor != T::zero() {
                    self.row_add_times_row(row, pivot, &-factor);
                }
            }
        }

        // Pivots are 1 after the forward pass, so the entry itself is the
        // elimination factor.
        for pivot in (2..=steps).rev() {
            if self.at(pivot, pivot) == T::zero() {
                continue;
            }
            for row in (1..pivot).rev() {
                let factor = self.at(row, pivot);
                if factor != T::zero() {
                    self.row_add_times_row(row, pivot, &-factor);
                }
            }
        }
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// Canonical 1×1 matrix holding the multiplicative identity.
    fn default() -> Self {
        Self {
            table: Table::default(),
        }
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}

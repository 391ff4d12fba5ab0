//! Dense 2-D numeric table with column-major storage and 1-based indexing.
//!
//! `Table` is the foundation every other type in the crate composes on. It
//! owns all element storage; derived tables (transposes, minors, products)
//! are always independent copies. Invalid indices or mismatched shapes
//! degrade to `None` or a no-op so the table is never left in an invalid
//! state.

use std::fmt;
use std::ops::Neg;

use num_traits::Num;

use crate::error::DimensionError;

/// Element capability set required by the table stack: ring arithmetic with
/// division, equality comparison and a total order, resolved statically per
/// concrete element type.
pub trait Scalar: Num + Neg<Output = Self> + PartialOrd + Clone {}

impl<T> Scalar for T where T: Num + Neg<Output = Self> + PartialOrd + Clone {}

/// Resizable M×N table of elements stored contiguously in column-major
/// order. External indices are 1-based; `rows >= 1` and `cols >= 1` hold at
/// all times.
#[derive(Clone, Debug, PartialEq)]
pub struct Table<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Table<T> {
    /// Build a table from a flat column-major initializer. Missing trailing
    /// entries are zero-filled and excess entries are ignored; the only
    /// failure is a zero dimension.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, DimensionError> {
        if rows == 0 {
            return Err(DimensionError::ZeroRows);
        }
        if cols == 0 {
            return Err(DimensionError::ZeroColumns);
        }

        let mut data = data;
        data.truncate(rows * cols);
        data.resize(rows * cols, T::zero());

        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        (col - 1) * self.rows + (row - 1)
    }

    #[inline]
    fn in_range(&self, row: usize, col: usize) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col)
    }

    /// Element at `(row, col)`, or `None` when either index is outside
    /// `[1, dim]`.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if !self.in_range(row, col) {
            return None;
        }
        Some(self.data[self.offset(row, col)].clone())
    }

    /// Overwrite the element at `(row, col)`; out-of-range indices leave the
    /// table unchanged.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if !self.in_range(row, col) {
            return;
        }
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }

    /// Row `row` as an owned vector, or `None` when the index is invalid.
    pub fn row(&self, row: usize) -> Option<Vec<T>> {
        if row == 0 || row > self.rows {
            return None;
        }
        Some(
            (1..=self.cols)
                .map(|col| self.data[self.offset(row, col)].clone())
                .collect(),
        )
    }

    /// Replace row `row`. A no-op when the index is out of range or the
    /// supplied slice does not match the column count.
    pub fn set_row(&mut self, row: usize, values: &[T]) {
        if row == 0 || row > self.rows || values.len() != self.cols {
            return;
        }
        for (i, value) in values.iter().enumerate() {
            let offset = self.offset(row, i + 1);
            self.data[offset] = value.clone();
        }
    }

    /// Column `col` as an owned vector, or `None` when the index is invalid.
    pub fn column(&self, col: usize) -> Option<Vec<T>> {
        if col == 0 || col > self.cols {
            return None;
        }
        let start = self.offset(1, col);
        Some(self.data[start..start + self.rows].to_vec())
    }

    /// Replace column `col`. A no-op when the index is out of range or the
    /// supplied slice does not match the row count.
    pub fn set_column(&mut self, col: usize, values: &[T]) {
        if col == 0 || col > self.cols || values.len() != self.rows {
            return;
        }
        let start = self.offset(1, col);
        for (i, value) in values.iter().enumerate() {
            self.data[start + i] = value.clone();
        }
    }

    /// Swap two rows; out-of-range indices are a no-op.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == 0 || j == 0 || i > self.rows || j > self.rows {
            return;
        }
        for col in 1..=self.cols {
            let a = self.offset(i, col);
            let b = self.offset(j, col);
            self.data.swap(a, b);
        }
    }

    /// Swap two columns; out-of-range indices are a no-op.
    pub fn swap_cols(&mut self, i: usize, j: usize) {
        if i == 0 || j == 0 || i > self.cols || j > self.cols {
            return;
        }
        for row in 1..=self.rows {
            let a = self.offset(row, i);
            let b = self.offset(row, j);
            self.data.swap(a, b);
        }
    }

    /// Resize the column count, truncating or zero-padding the backing
    /// store; `n == 0` is a no-op.
    pub fn set_cols(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.cols = n;
        self.data.resize(self.rows * n, T::zero());
    }

    /// Resize the row count, truncating or zero-padding whole rows at the
    /// bottom; `m == 0` is a no-op.
    pub fn set_rows(&mut self, m: usize) {
        if m == 0 || m == self.rows {
            return;
        }
        let mut data = Vec::with_capacity(m * self.cols);
        for col in 1..=self.cols {
            for row in 1..=m {
                if row <= self.rows {
                    data.push(self.data[self.offset(row, col)].clone());
                } else {
                    data.push(T::zero());
                }
            }
        }
        self.rows = m;
        self.data = data;
    }

    /// Fresh table with dimensions swapped and `(i, j) -> (j, i)`.
    pub fn transpose(&self) -> Table<T> {
        let mut result = Table {
            data: vec![T::zero(); self.data.len()],
            rows: self.cols,
            cols: self.rows,
        };
        for row in 1..=self.rows {
            for col in 1..=self.cols {
                let offset = result.offset(col, row);
                result.data[offset] = self.data[self.offset(row, col)].clone();
            }
        }
        result
    }

    /// True iff both dimensions match exactly.
    pub fn homotype(&self, other: &Table<T>) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl<T: Scalar> Default for Table<T> {
    /// Canonical 1×1 table holding the multiplicative identity.
    fn default() -> Self {
        Self {
            data: vec![T::one()],
            rows: 1,
            cols: 1,
        }
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Table<T> {
    /// Write-only textual dump: a `matrix <rows> <cols>` header followed by
    /// one space-separated line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix {} {}", self.rows, self.cols)?;
        for row in 1..=self.rows {
            for col in 1..=self.cols {
                write!(f, "{} ", self.data[self.offset(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

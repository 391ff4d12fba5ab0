//! Linear-equation system over an augmented table: `M` equations in
//! `N - 1` unknowns, where columns `1..N-1` hold coefficients and column
//! `N` holds the constants. Two independently verifiable solve strategies
//! are provided: Cramer's rule over determinants and inverse-matrix
//! multiplication. On a well-posed system they agree up to floating-point
//! error.

use crate::det::Det;
use crate::error::DimensionError;
use crate::matrix::Matrix;
use crate::table::{Scalar, Table};

/// Augmented system plus the derived solution vector. The solution is
/// empty until a solve succeeds; singular or indeterminate systems leave it
/// empty.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem<T> {
    data: Table<T>,
    solution: Vec<T>,
}

impl<T: Scalar> LinearSystem<T> {
    /// Build an `M × N` augmented system from a flat column-major
    /// initializer with the table's zero-pad/truncate rules.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, DimensionError> {
        Ok(Self {
            data: Table::new(rows, cols, data)?,
            solution: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.data.rows()
    }

    pub fn cols(&self) -> usize {
        self.data.cols()
    }

    /// Number of unknowns the augmented table describes.
    pub fn unknowns(&self) -> usize {
        self.data.cols() - 1
    }

    /// The computed solution; empty until a solve succeeds.
    pub fn solution(&self) -> &[T] {
        &self.solution
    }

    /// The `i`-th unknown (1-based), or `None` when it has not been
    /// computed or `i` is out of range.
    pub fn x_n(&self, i: usize) -> Option<T> {
        if i == 0 || i > self.solution.len() {
            return None;
        }
        Some(self.solution[i - 1].clone())
    }

    /// Cramer's-rule strategy. A no-op for systems of at most one equation
    /// or without unknowns. Builds an order `N-1` coefficient determinant
    /// from the coefficient columns and, for each unknown, an augmented
    /// determinant with that column replaced by the constants; each unknown
    /// is `det(augmented) / det(coefficients)` via the permutation
    /// expansion. A zero coefficient determinant abandons the solve and
    /// leaves the solution empty.
    pub fn solve_cramer(&mut self) {
        if self.data.rows() <= 1 || self.data.cols() < 2 {
            return;
        }

        self.solution.clear();

        let unknowns = self.unknowns();
        let mut coefficients = Det::new(unknowns, Vec::new()).expect("at least one unknown");
        let mut augmented = coefficients.clone();
        for i in 1..=unknowns {
            let column = self.data.column(i).expect("column within dimensions");
            coefficients.set_column(i, &column);
            augmented.set_column(i, &column);
        }

        let denominator = coefficients.general_calculate();
        if denominator == T::zero() {
            log::debug!("solve_cramer: coefficient determinant is zero, abandoning");
            return;
        }

        let constants = self
            .data
            .column(self.data.cols())
            .expect("constants column exists");
        for i in 1..=unknowns {
            augmented.set_column(i, &constants);
            if i > 1 {
                let restored = self.data.column(i - 1).expect("column within dimensions");
                augmented.set_column(i - 1, &restored);
            }
            self.solution
                .push(augmented.general_calculate() / denominator.clone());
        }
    }

    /// Inverse-matrix strategy. A no-op for systems of at most one
    /// equation or without unknowns. Solves `coefficients⁻¹ × constants`
    /// and takes the single result column; a non-invertible coefficient
    /// matrix abandons the solve and leaves the solution empty.
    pub fn solve_inverse(&mut self)
    where
        T: Send + Sync,
    {
        if self.data.rows() <= 1 || self.data.cols() < 2 {
            return;
        }

        self.solution.clear();

        let rows = self.data.rows();
        let mut coefficients =
            Matrix::new(rows, self.unknowns(), Vec::new()).expect("dimensions are nonzero");
        for i in 1..=self.unknowns() {
            let column = self.data.column(i).expect("column within dimensions");
            coefficients.set_column(i, &column);
        }
        let constants = Matrix::new(
            rows,
            1,
            self.data
                .column(self.data.cols())
                .expect("constants column exists"),
        )
        .expect("dimensions are nonzero");

        let inverse = match coefficients.inverse() {
            Some(inverse) => inverse,
            None => {
                log::debug!("solve_inverse: coefficient matrix is not invertible, abandoning");
                return;
            }
        };
        let product = match inverse.mul(&constants) {
            Some(product) => product,
            None => return,
        };

        self.solution = product.column(1).expect("product has one column");
    }
}

impl<T: Scalar> Default for LinearSystem<T> {
    /// Canonical single-equation system `1·x = 0`.
    fn default() -> Self {
        Self {
            data: Table::new(1, 2, vec![T::one(), T::zero()]).expect("dimensions are nonzero"),
            solution: Vec::new(),
        }
    }
}

//! Determinant over a square table, with two independent evaluation
//! strategies: the definitional Leibniz permutation expansion and forward
//! Gaussian elimination. The expansion path is exponential (`O(N!·N)`) and
//! kept as a correctness reference; elimination is the practical `O(N³)`
//! path. Both must agree up to floating-point rounding.

use std::fmt;

use itertools::Itertools;

use crate::error::DimensionError;
use crate::sequence;
use crate::table::{Scalar, Table};

/// Number of inversions in a permutation: pairs `(a, b)` with `a` before
/// `b` whose values compare as `perm[b] < perm[a]`. Parity decides the term
/// sign in the Leibniz expansion.
fn inversions(perm: &[usize]) -> usize {
    let mut count = 0;
    for later in 1..perm.len() {
        for earlier in 0..later {
            if perm[later] < perm[earlier] {
                count += 1;
            }
        }
    }
    count
}

/// Square table plus the machinery to evaluate its determinant. Identity is
/// the order and the element matrix; no further state is held.
#[derive(Clone, Debug, PartialEq)]
pub struct Det<T> {
    table: Table<T>,
}

impl<T: Scalar> Det<T> {
    /// Build an order-`n` determinant from a flat column-major initializer
    /// with the table's zero-pad/truncate rules.
    pub fn new(order: usize, data: Vec<T>) -> Result<Self, DimensionError> {
        Ok(Self {
            table: Table::new(order, order, data)?,
        })
    }

    pub fn order(&self) -> usize {
        self.table.rows()
    }

    /// Resize the underlying square table to `n × n`; `n == 0` is a no-op.
    pub fn set_order(&mut self, n: usize) {
        self.table.set_rows(n);
        self.table.set_cols(n);
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

    /// Element access for the internal algorithms, which only ever index
    /// inside `[1, order]`.
    fn at(&self, row: usize, col: usize) -> T {
        self.table.get(row, col).expect("index within order")
    }

    /// Determinant of the transposed table. `D.transpose()` evaluates to
    /// the same value as `D`.
    pub fn transpose(&self) -> Det<T> {
        Det {
            table: self.table.transpose(),
        }
    }

    /// The order `N-1` determinant obtained by deleting row `i` and column
    /// `j`. `None` when either index is outside `[1, N]` or when `N == 1`.
    pub fn minor(&self, i: usize, j: usize) -> Option<Det<T>> {
        let n = self.order();
        if i == 0 || j == 0 || i > n || j > n || n == 1 {
            return None;
        }

        let mut result = Det {
            table: Table::new(n - 1, n - 1, Vec::new()).expect("order is at least 1"),
        };
        for row in 1..=n {
            if row == i {
                continue;
            }
            let mut line = self.row(row).expect("row within order");
            line.remove(j - 1);
            let target = if row < i { row } else { row - 1 };
            result.set_row(target, &line);
        }
        Some(result)
    }

    /// `minor(i, j)` carrying the sign `(-1)^{i+j}`: when `i + j` is odd
    /// the first row of the minor is negated, so the returned determinant
    /// evaluates to the signed cofactor value at every order.
    pub fn cofactor(&self, i: usize, j: usize) -> Option<Det<T>> {
        let mut result = self.minor(i, j)?;
        if (i + j) % 2 == 1 {
            let first = result.row(1).expect("minor has at least one row");
            result.set_row(1, &sequence::scale(&first, &-T::one()));
        }
        Some(result)
    }

    /// Evaluate by the full Leibniz expansion: enumerate every permutation
    /// of `{1..N}` in lexicographic order, sign each term by inversion
    /// parity, and accumulate the signed products of the selected elements.
    /// A term short-circuits to zero on its first exactly-zero factor.
    pub fn general_calculate(&self) -> T {
        let n = self.order();
        if n == 1 {
            return self.at(1, 1);
        }

        let mut result = T::zero();
        for perm in (1..=n).permutations(n) {
            let mut term = if inversions(&perm) % 2 == 0 {
                T::one()
            } else {
                -T::one()
            };

            for (row, &col) in perm.iter().enumerate() {
                let element = self.at(row + 1, col);
                if element == T::zero() {
                    term = T::zero();
                    break;
                }
                term = term * element;
            }

            result = result + term;
        }
        result
    }

    /// Destructively reduce the table to upper-triangular form by forward
    /// Gaussian elimination with naive partial pivoting: a zero pivot is
    /// repaired by swapping in the first row below it with a nonzero entry
    /// in the pivot column; if none exists the pivot stays zero (singular
    /// case) and elimination moves on.
    ///
    /// Returns the number of row swaps performed; each swap flips the
    /// determinant's sign.
    pub fn elimination(&mut self) -> usize {
        let n = self.order();
        let mut swaps = 0;
        if n == 1 {
            return swaps;
        }

        for pivot in 1..n {
            if self.at(pivot, pivot) == T::zero() {
                for row in (pivot + 1)..=n {
                    if self.at(row, pivot) != T::zero() {
                        log::trace!("elimination: swapping rows {} and {}", pivot, row);
                        self.swap_rows(pivot, row);
                        swaps += 1;
                        break;
                    }
                }
                if self.at(pivot, pivot) == T::zero() {
                    continue;
                }
            }

            let pivot_row = self.row(pivot).expect("pivot within order");
            let pivot_value = self.at(pivot, pivot);
            for row in (pivot + 1)..=n {
                let factor = -(self.at(row, pivot) / pivot_value.clone());
                let current = self.row(row).expect("row within order");
                let replacement = sequence::sum(&sequence::scale(&pivot_row, &factor), &current)
                    .expect("rows share the table width");
                self.set_row(row, &replacement);
            }
        }
        swaps
    }

    /// Evaluate by elimination on an internal copy and return the product
    /// of the diagonal. The receiver is never mutated.
    pub fn elimination_calculate(&self) -> T {
        let n = self.order();
        if n == 1 {
            return self.at(1, 1);
        }

        let mut reduced = self.clone();
        let swaps = reduced.elimination();

        let mut result = if swaps % 2 == 0 { T::one() } else { -T::one() };
        for i in 1..=n {
            result = result * reduced.at(i, i);
        }
        result
    }
}

impl<T: Scalar> Default for Det<T> {
    /// Order-1 determinant holding the multiplicative identity.
    fn default() -> Self {
        Self {
            table: Table::default(),
        }
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Det<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}

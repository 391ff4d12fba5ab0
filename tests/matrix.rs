//! Integration tests for matrix arithmetic, adjoint/inverse and
//! elimination.

use linsys::Matrix;

fn approx_eq(a: &Matrix<f64>, b: &Matrix<f64>, tolerance: f64) -> bool {
    if !a.homotype(b) {
        return false;
    }
    for i in 1..=a.rows() {
        for j in 1..=a.cols() {
            let x = a.get(i, j).unwrap();
            let y = b.get(i, j).unwrap();
            if (x - y).abs() > tolerance {
                return false;
            }
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Addition and scaling
// ---------------------------------------------------------------------------

#[test]
fn add_homotypic_matrices() {
    let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Matrix::new(2, 2, vec![10.0, 20.0, 30.0, 40.0]).unwrap();
    let sum = a.add(&b).unwrap();
    assert_eq!(sum.get(1, 1), Some(11.0));
    assert_eq!(sum.get(2, 2), Some(44.0));
}

#[test]
fn add_shape_mismatch_is_absent() {
    let a = Matrix::new(2, 2, Vec::<f64>::new()).unwrap();
    let b = Matrix::new(2, 3, Vec::<f64>::new()).unwrap();
    assert!(a.add(&b).is_none());

    let mut c = a.clone();
    assert!(!c.add_assign(&b));
    assert_eq!(c, a);
}

#[test]
fn subtract_back_identity() {
    // (A + B) + (-1)·B == A
    let a = Matrix::new(2, 3, vec![1.0, -2.0, 0.5, 3.0, 4.0, -1.0]).unwrap();
    let b = Matrix::new(2, 3, vec![0.25, 1.0, -3.0, 2.0, 0.0, 5.0]).unwrap();
    let negated = b.scale(&-1.0).unwrap();
    let round_trip = a.add(&b).unwrap().add(&negated).unwrap();
    assert!(approx_eq(&round_trip, &a, 1e-12));
}

#[test]
fn zero_scalar_is_rejected() {
    let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!(a.scale(&0.0).is_none());

    let mut b = a.clone();
    assert!(!b.scale_assign(&0.0));
    assert_eq!(b, a);

    let doubled = a.scale(&2.0).unwrap();
    assert_eq!(doubled.get(2, 1), Some(4.0));
}

// ---------------------------------------------------------------------------
// Multiplication
// ---------------------------------------------------------------------------

#[test]
fn matrix_product_reference_values() {
    // [[1, 2], [3, 4]] × [[5, 6], [7, 8]] == [[19, 22], [43, 50]]
    let a = Matrix::new(2, 2, vec![1.0, 3.0, 2.0, 4.0]).unwrap();
    let b = Matrix::new(2, 2, vec![5.0, 7.0, 6.0, 8.0]).unwrap();
    let product = a.mul(&b).unwrap();
    assert_eq!(product.get(1, 1), Some(19.0));
    assert_eq!(product.get(1, 2), Some(22.0));
    assert_eq!(product.get(2, 1), Some(43.0));
    assert_eq!(product.get(2, 2), Some(50.0));
}

#[test]
fn incompatible_product_is_absent() {
    let a = Matrix::new(2, 3, Vec::<f64>::new()).unwrap();
    let b = Matrix::new(2, 3, Vec::<f64>::new()).unwrap();
    assert!(a.mul(&b).is_none());
}

#[test]
fn rectangular_product_shape() {
    let a = Matrix::new(2, 3, vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
    let b = Matrix::new(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let product = a.mul(&b).unwrap();
    assert_eq!(product.rows(), 2);
    assert_eq!(product.cols(), 1);
}

// ---------------------------------------------------------------------------
// Determinant, adjoint, inverse
// ---------------------------------------------------------------------------

#[test]
fn det_requires_a_square_matrix() {
    let square = Matrix::new(2, 2, vec![3.0, 2.0, -2.0, 1.0]).unwrap();
    assert_eq!(square.det().unwrap().general_calculate(), 7.0);

    let wide = Matrix::new(2, 3, Vec::<f64>::new()).unwrap();
    assert!(wide.det().is_none());
}

#[test]
fn adjoint_of_a_two_by_two() {
    // adj([[1, 2], [3, 4]]) == [[4, -2], [-3, 1]]
    let a = Matrix::new(2, 2, vec![1.0, 3.0, 2.0, 4.0]).unwrap();
    let adjoint = a.adjoint().unwrap();
    assert_eq!(adjoint.get(1, 1), Some(4.0));
    assert_eq!(adjoint.get(1, 2), Some(-2.0));
    assert_eq!(adjoint.get(2, 1), Some(-3.0));
    assert_eq!(adjoint.get(2, 2), Some(1.0));
}

#[test]
fn adjoint_is_absent_for_non_square_and_order_one() {
    assert!(Matrix::new(2, 3, Vec::<f64>::new()).unwrap().adjoint().is_none());
    assert!(Matrix::new(1, 3, Vec::<f64>::new()).unwrap().adjoint().is_none());
    assert!(Matrix::new(1, 1, vec![5.0]).unwrap().adjoint().is_none());
}

#[test]
fn adjoint_satisfies_the_adjugate_identity() {
    // A × adj(A) == det(A) · I
    let a = Matrix::<f64>::new(3, 3, vec![2.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
    let det = a.det().unwrap().general_calculate();
    let product = a.mul(&a.adjoint().unwrap()).unwrap();
    for i in 1..=3 {
        for j in 1..=3 {
            let expected = if i == j { det } else { 0.0 };
            assert!((product.get(i, j).unwrap() - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn inverse_times_original_is_identity() {
    let a = Matrix::<f64>::new(3, 3, vec![2.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
    let inverse = a.inverse().unwrap();
    let product = a.mul(&inverse).unwrap();
    assert!(product.is_square());
    for i in 1..=3 {
        for j in 1..=3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(
                (product.get(i, j).unwrap() - expected).abs() < 1e-9,
                "cell ({}, {})",
                i,
                j
            );
        }
    }
}

#[test]
fn singular_matrix_has_no_inverse() {
    let singular = Matrix::new(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
    assert!(singular.inverse().is_none());

    let wide = Matrix::new(2, 3, Vec::<f64>::new()).unwrap();
    assert!(wide.inverse().is_none());
}

// ---------------------------------------------------------------------------
// Elementary operations
// ---------------------------------------------------------------------------

#[test]
fn row_and_column_scaling() {
    let mut a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    a.row_times(1, &10.0);
    assert_eq!(a.row(1), Some(vec![10.0, 30.0]));
    a.column_times(1, &0.5);
    assert_eq!(a.column(1), Some(vec![5.0, 1.0]));
}

#[test]
fn row_and_column_replacement() {
    let mut a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    a.row_add_times_row(2, 1, &-2.0);
    assert_eq!(a.row(2), Some(vec![0.0, -2.0]));
    a.column_add_times_column(2, 1, &1.0);
    assert_eq!(a.column(2), Some(vec![4.0, -2.0]));
}

#[test]
fn elementary_operations_ignore_bad_indices() {
    let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut b = a.clone();
    b.row_times(0, &2.0);
    b.row_times(3, &2.0);
    b.column_times(3, &2.0);
    b.row_add_times_row(1, 3, &2.0);
    b.column_add_times_column(0, 1, &2.0);
    assert_eq!(b, a);
}

// ---------------------------------------------------------------------------
// Elimination
// ---------------------------------------------------------------------------

#[test]
fn elimination_reduces_to_identity_when_invertible() {
    let mut a = Matrix::new(2, 2, vec![1.0, 3.0, 2.0, 4.0]).unwrap();
    a.elimination();
    assert!(a.is_identity());
}

#[test]
fn elimination_of_a_rectangular_matrix() {
    // [[1, 2, 3], [4, 5, 6]] reduces to [[1, 0, -1], [0, 1, 2]]
    let mut a = Matrix::new(2, 3, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
    a.elimination();
    let expected = Matrix::new(2, 3, vec![1.0, 0.0, 0.0, 1.0, -1.0, 2.0]).unwrap();
    assert!(approx_eq(&a, &expected, 1e-9));
}

#[test]
fn elimination_leaves_degenerate_shapes_unchanged() {
    let mut row = Matrix::new(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
    let before = row.clone();
    row.elimination();
    assert_eq!(row, before);

    let mut column = Matrix::new(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
    let before = column.clone();
    column.elimination();
    assert_eq!(column, before);
}

// ---------------------------------------------------------------------------
// Shape predicates
// ---------------------------------------------------------------------------

#[test]
fn shape_predicates() {
    let identity = Matrix::new(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap();
    assert!(identity.is_identity());
    assert!(identity.is_diagonal());
    assert!(identity.is_symmetric());

    let diagonal = Matrix::new(2, 2, vec![3.0, 0.0, 0.0, -1.0]).unwrap();
    assert!(diagonal.is_diagonal());
    assert!(!diagonal.is_identity());

    let asymmetric = Matrix::new(2, 2, vec![1.0, 3.0, 2.0, 4.0]).unwrap();
    assert!(!asymmetric.is_symmetric());

    let row = Matrix::new(1, 3, Vec::<f64>::new()).unwrap();
    assert!(row.is_single_row());
    assert!(!row.is_single_column());
    assert!(!row.is_diagonal());
}

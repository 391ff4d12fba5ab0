//! Free vector-arithmetic helpers shared by the table, determinant and
//! matrix types. All functions are pure and never take ownership of their
//! inputs; length mismatches yield `None`.

use crate::table::Scalar;

/// Element-wise sum of two sequences.
pub fn sum<T: Scalar>(a: &[T], b: &[T]) -> Option<Vec<T>> {
    if a.len() != b.len() {
        return None;
    }
    Some(
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x.clone() + y.clone())
            .collect(),
    )
}

/// Scalar multiple of a sequence.
pub fn scale<T: Scalar>(a: &[T], k: &T) -> Vec<T> {
    a.iter().map(|x| x.clone() * k.clone()).collect()
}

/// Inner product of two sequences.
pub fn dot<T: Scalar>(a: &[T], b: &[T]) -> Option<T> {
    if a.len() != b.len() {
        return None;
    }
    let mut acc = T::zero();
    for (x, y) in a.iter().zip(b.iter()) {
        acc = acc + x.clone() * y.clone();
    }
    Some(acc)
}

/// Element-wise product of two sequences.
pub fn hadamard<T: Scalar>(a: &[T], b: &[T]) -> Option<Vec<T>> {
    if a.len() != b.len() {
        return None;
    }
    Some(
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x.clone() * y.clone())
            .collect(),
    )
}

/// Element-wise equality of two sequences.
pub fn equal<T: Scalar>(a: &[T], b: &[T]) -> Option<bool> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b.iter()).all(|(x, y)| x == y))
}

/// True iff `a` is an exact scalar multiple of `b`, using the ratio at the
/// first nonzero element of `b`. An all-zero `b` is only a multiple of the
/// all-zero `a`. Empty or mismatched sequences yield `None`.
pub fn proportional<T: Scalar>(a: &[T], b: &[T]) -> Option<bool> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let rate = match b.iter().position(|y| *y != T::zero()) {
        Some(i) => a[i].clone() / b[i].clone(),
        None => return Some(a.iter().all(|x| *x == T::zero())),
    };
    Some(
        a.iter()
            .zip(b.iter())
            .all(|(x, y)| y.clone() * rate.clone() == *x),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_matching_lengths() {
        let result = sum(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_eq!(result, Some(vec![5.0, 7.0, 9.0]));
    }

    #[test]
    fn sum_length_mismatch_is_absent() {
        assert_eq!(sum(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn scale_multiplies_each_element() {
        assert_eq!(scale(&[1.0, -2.0, 3.0], &2.0), vec![2.0, -4.0, 6.0]);
    }

    #[test]
    fn dot_product() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), Some(32.0));
        assert_eq!(dot::<f64>(&[], &[]), Some(0.0));
        assert_eq!(dot(&[1.0], &[1.0, 2.0]), None);
    }

    #[test]
    fn hadamard_product() {
        assert_eq!(
            hadamard(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]),
            Some(vec![4.0, 10.0, 18.0])
        );
    }

    #[test]
    fn equal_compares_elementwise() {
        assert_eq!(equal(&[1.0, 2.0], &[1.0, 2.0]), Some(true));
        assert_eq!(equal(&[1.0, 2.0], &[1.0, 3.0]), Some(false));
        assert_eq!(equal(&[1.0], &[1.0, 2.0]), None);
    }

    #[test]
    fn proportional_detects_scalar_multiples() {
        assert_eq!(proportional(&[2.0, 4.0, 6.0], &[1.0, 2.0, 3.0]), Some(true));
        assert_eq!(
            proportional(&[2.0, 4.0, 7.0], &[1.0, 2.0, 3.0]),
            Some(false)
        );
        assert_eq!(proportional(&[1.0], &[1.0, 2.0]), None);
        assert_eq!(proportional::<f64>(&[], &[]), None);
    }

    #[test]
    fn proportional_skips_a_zero_leading_divisor() {
        // the ratio comes from the first nonzero element of b
        assert_eq!(proportional(&[0i64, 2], &[0i64, 1]), Some(true));
        assert_eq!(proportional(&[1i64, 2], &[0i64, 1]), Some(false));
        assert_eq!(proportional(&[0.0, 3.0], &[0.0, 1.5]), Some(true));
        assert_eq!(proportional(&[1.0, 3.0], &[0.0, 1.5]), Some(false));
    }

    #[test]
    fn proportional_handles_an_all_zero_divisor() {
        assert_eq!(proportional(&[0i64, 0], &[0i64, 0]), Some(true));
        assert_eq!(proportional(&[1i64, 0], &[0i64, 0]), Some(false));
    }
}

#![cfg(test)]
use proptest::prelude::*;
use scaffold_common::Error;
use scaffold_core::math::{add, divide, multiply, power, sqrt, subtract};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

proptest! {
    #[test]
    fn addition_commutes(a in -1e12f64..1e12, b in -1e12f64..1e12) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn subtraction_anticommutes(a in -1e12f64..1e12, b in -1e12f64..1e12) {
        prop_assert_eq!(subtract(a, b), -subtract(b, a));
    }

    #[test]
    fn division_inverts_multiplication(
        a in -1e9f64..1e9,
        b in prop_oneof![-1e6f64..-1e-3, 1e-3f64..1e6],
    ) {
        let quotient = divide(a, b).unwrap();
        prop_assert!(close(multiply(quotient, b), a), "{} / {} * {} != {}", a, b, b, a);
    }

    #[test]
    fn near_zero_divisors_fail(x in any::<f64>(), tiny in -f64::EPSILON / 2.0..f64::EPSILON / 2.0) {
        prop_assert!(matches!(divide(x, tiny), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn square_root_inverts_square(x in 0f64..1e12) {
        let root = sqrt(x).unwrap();
        prop_assert!(close(power(root, 2.0), x));
    }
}

#[test]
fn zero_divisor_fails() {
    assert!(matches!(divide(42.0, 0.0), Err(Error::InvalidArgument(_))));
}

#[test]
fn root_of_squared_root() {
    let root = sqrt(16.0).unwrap();
    let again = sqrt(power(root, 2.0)).unwrap();
    assert!((again - 4.0).abs() < 1e-12);
}

#[test]
fn negative_root_fails() {
    let err = sqrt(-1.0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("negative"));
}

#[test]
fn power_follows_ieee() {
    assert!(power(-8.0, 1.0 / 3.0).is_nan());
    assert_eq!(power(0.0, -1.0), f64::INFINITY);
    assert!((power(2.0, 0.5) - std::f64::consts::SQRT_2).abs() < 1e-15);
}

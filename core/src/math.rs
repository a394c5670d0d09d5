//! Elementary arithmetic over `f64`.
//!
//! Only [`divide`] and [`sqrt`] can fail, both with [`Error::InvalidArgument`].
//! Everything else follows plain IEEE-754 semantics, including infinities and NaN.

use scaffold_common::{Error, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// Any divisor whose magnitude is below [`f64::EPSILON`] counts as zero, so values that
/// are only nonzero through rounding are rejected as well.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b.abs() < f64::EPSILON {
        return Err(Error::invalid_argument("Division by zero is not allowed"));
    }
    Ok(a / b)
}

/// `base` raised to `exponent`, fractional and negative exponents included.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Principal square root. Negative operands are rejected; `-0.0` is not negative.
pub fn sqrt(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(Error::invalid_argument(
            "Square root of negative number is not allowed",
        ));
    }
    Ok(value.sqrt())
}

/// Stateless handle over the free functions of this module.
///
/// Useful where a value is more convenient to pass around than a module path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        add(a, b)
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        subtract(a, b)
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        multiply(a, b)
    }

    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        divide(a, b)
    }

    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        power(base, exponent)
    }

    pub fn sqrt(&self, value: f64) -> Result<f64> {
        sqrt(value)
    }
}

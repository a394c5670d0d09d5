//! Canned walkthroughs of both libraries.
//!
//! The functions here only compute. Rendering and logging are left to the caller, which
//! keeps the reports checkable in tests without any subscriber installed.

use scaffold_common::Result;

use crate::{math, text};

pub const FULL_OPERANDS: (f64, f64) = (10.5, 3.2);
pub const BASIC_OPERANDS: (f64, f64) = (10.0, 3.0);
pub const SAMPLE_TEXT: &str = "  Hello, World!  ";
pub const SAMPLE_CSV: &str = "apple,banana,cherry,date";
pub const SAMPLE_WORDS: [&str; 3] = ["Hello", "beautiful", "world"];

/// One evaluated arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    pub label: &'static str,
    pub expression: String,
    pub value: f64,
}

impl Computation {
    fn new(label: &'static str, expression: String, value: f64) -> Self {
        Self {
            label,
            expression,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextShowcase {
    pub original: String,
    pub trimmed: String,
    pub upper: String,
    pub lower: String,
    pub csv: String,
    pub parts: Vec<String>,
    pub words: Vec<String>,
    pub joined: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub operands: (f64, f64),
    pub arithmetic: Vec<Computation>,
    pub text: TextShowcase,
}

/// The four operations every calculator has.
pub fn basic_arithmetic(a: f64, b: f64) -> Result<Vec<Computation>> {
    Ok(vec![
        Computation::new("Addition", format!("{a} + {b}"), math::add(a, b)),
        Computation::new("Subtraction", format!("{a} - {b}"), math::subtract(a, b)),
        Computation::new("Multiplication", format!("{a} * {b}"), math::multiply(a, b)),
        Computation::new("Division", format!("{a} / {b}"), math::divide(a, b)?),
    ])
}

/// [`basic_arithmetic`] followed by squaring `a` and taking its root.
pub fn full_arithmetic(a: f64, b: f64) -> Result<Vec<Computation>> {
    let exponent = 2.0;
    let mut computations = basic_arithmetic(a, b)?;
    computations.push(Computation::new(
        "Power",
        format!("{a}^{exponent}"),
        math::power(a, exponent),
    ));
    computations.push(Computation::new("Square root", format!("sqrt({a})"), math::sqrt(a)?));
    Ok(computations)
}

pub fn text_showcase() -> TextShowcase {
    let words: Vec<String> = SAMPLE_WORDS.iter().map(|w| w.to_string()).collect();
    let joined = text::join(&words, " ");

    TextShowcase {
        original: SAMPLE_TEXT.to_string(),
        trimmed: text::trim(SAMPLE_TEXT),
        upper: text::to_upper(SAMPLE_TEXT),
        lower: text::to_lower(SAMPLE_TEXT),
        csv: SAMPLE_CSV.to_string(),
        parts: text::split(SAMPLE_CSV, ','),
        words,
        joined,
    }
}

pub fn full_demo() -> Result<DemoReport> {
    let (a, b) = FULL_OPERANDS;
    Ok(DemoReport {
        operands: FULL_OPERANDS,
        arithmetic: full_arithmetic(a, b)?,
        text: text_showcase(),
    })
}

use clap::ValueEnum;
use scaffold_common::config::Config;
use scaffold_core::Calculator;
use tracing::debug;

use crate::terminal::print;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    #[value(alias = "+")]
    Add,
    #[value(alias = "-")]
    Sub,
    #[value(alias = "*", alias = "x")]
    Mul,
    #[value(alias = "/")]
    Div,
    #[value(alias = "^")]
    Pow,
    Sqrt,
}

impl Operation {
    fn is_unary(&self) -> bool {
        matches!(self, Self::Sqrt)
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Sqrt => "sqrt",
        }
    }
}

/// Evaluates `op` over the operands. `b` is ignored by unary operations.
pub fn evaluate(op: Operation, a: f64, b: Option<f64>) -> anyhow::Result<f64> {
    let calc = Calculator::new();

    let value = match (op, b) {
        (Operation::Sqrt, _) => calc.sqrt(a)?,
        (_, None) => anyhow::bail!("'{}' needs a second operand", op.symbol()),
        (Operation::Add, Some(b)) => calc.add(a, b),
        (Operation::Sub, Some(b)) => calc.subtract(a, b),
        (Operation::Mul, Some(b)) => calc.multiply(a, b),
        (Operation::Div, Some(b)) => calc.divide(a, b)?,
        (Operation::Pow, Some(b)) => calc.power(a, b),
    };
    Ok(value)
}

pub fn calc(op: Operation, a: f64, b: Option<f64>, cfg: &Config) -> anyhow::Result<()> {
    debug!("Evaluating {:?} with a={a}, b={b:?}", op);
    let value = evaluate(op, a, b)?;

    let expression = match b {
        Some(b) if !op.is_unary() => format!("{a} {} {b}", op.symbol()),
        _ => format!("{}({a})", op.symbol()),
    };

    match cfg.quiet {
        0 | 1 => {
            print::aligned_line("Expression", expression);
            print::aligned_line("Result", value.to_string());
        }
        _ => print::print(&value.to_string()),
    }
    Ok(())
}

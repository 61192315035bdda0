//! AST evaluator with non-finite detection.

use crate::core::parser::{Ast, BinOp, Parser};
use crate::core::{EvalError, EvalResult};

/// Evaluator for parsed expressions.
///
/// Every intermediate result is checked: division by zero and any value that
/// overflows to infinity or NaN abort the evaluation, so a caller never sees
/// a non-finite number.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an AST node.
    pub fn evaluate(&self, node: &Ast) -> EvalResult<f64> {
        match node {
            Ast::Number(n) => Self::check_finite(*n),
            Ast::Negate(inner) => Ok(-self.evaluate(inner)?),
            Ast::Binary { left, op, right } => {
                let a = self.evaluate(left)?;
                let b = self.evaluate(right)?;
                Self::apply(*op, a, b)
            }
        }
    }

    /// Parses and evaluates a string expression.
    pub fn evaluate_str(&self, input: &str) -> EvalResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }

    /// Applies a binary operator to two operands.
    pub fn apply(op: BinOp, a: f64, b: f64) -> EvalResult<f64> {
        let result = match op {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
        };
        Self::check_finite(result)
    }

    fn check_finite(value: f64) -> EvalResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

//! Core expression editing and evaluation.
//!
//! Everything in this module is pure: no DOM, no timers, no global state.
//! The shell owns an [`editor::Expression`] and calls its operations in
//! response to UI events.

pub mod editor;
pub mod evaluator;
pub mod parser;

pub use editor::{EditOutcome, Expression};

use thiserror::Error;

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors produced while evaluating an expression string.
///
/// None of these reach the widget surface: the editor absorbs them into
/// [`EditOutcome::Rejected`], preserving the forgiving no-op contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Empty expression provided
    #[error("empty expression")]
    Empty,
    /// Invalid expression syntax
    #[error("invalid expression: {0}")]
    Parse(String),
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Result is infinite or NaN
    #[error("non-finite result")]
    NonFinite,
}

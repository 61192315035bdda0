//! Browser-resident arithmetic calculator widget.
//!
//! The widget is split into a pure core and a thin shell:
//!
//! - [`core`] holds the [`Expression`](core::Expression) editing state
//!   machine and a recursive-descent evaluator over `+ - * /` with unary
//!   minus. Invalid input never throws; it degrades to a no-op reported
//!   through [`EditOutcome`](core::EditOutcome).
//! - [`shell`] binds the core to a DOM: keypad layout, keyboard mapping,
//!   theme and clipboard chrome. A mock DOM makes the whole widget testable
//!   off-browser; the `wasm` feature adds the real bindings.
//!
//! # Example
//!
//! ```rust
//! use webcalc::prelude::*;
//!
//! let mut widget = CalculatorWidget::new();
//! for key in ["2", "+", "3", "*", "4", "Enter"] {
//!     widget.handle_key(key);
//! }
//! assert_eq!(widget.display(), "14");
//!
//! // Division by zero is a silent no-op, not an error state
//! widget.handle_key("c");
//! for key in ["5", "/", "0", "Enter"] {
//!     widget.handle_key(key);
//! }
//! assert_eq!(widget.display(), "5/0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod shell;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{Ast, BinOp, Parser, Token, Tokenizer};
    pub use crate::core::{EditOutcome, EvalError, EvalResult, Expression};
    pub use crate::driver::WidgetDriver;
    pub use crate::shell::{
        CalculatorWidget, Clipboard, DomElement, DomEvent, Keypad, KeypadAction, MockClipboard,
        MockDom,
    };

    #[cfg(feature = "wasm")]
    pub use crate::shell::BrowserWidget;
}

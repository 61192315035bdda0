//! UI shell: mock DOM, keypad, clipboard, and the widget wiring them up.
//!
//! Everything here is testable off-browser; the `wasm` feature adds the
//! real browser bindings on top.

#[cfg(feature = "wasm")]
mod browser;
mod clipboard;
mod dom;
mod keypad;
mod widget;

#[cfg(feature = "wasm")]
pub use browser::BrowserWidget;
pub use clipboard::{Clipboard, ClipboardUnavailable, MockClipboard};
pub use dom::{DomElement, DomEvent, MockDom};
pub use keypad::{Keypad, KeypadAction, KeypadButton};
pub use widget::CalculatorWidget;

//! Browser bindings for the widget.
//!
//! Exposes the expression editor and keypad dispatch to JavaScript via
//! wasm-bindgen. The JS glue owns the real DOM, clipboard, and the copy
//! indicator timer; this side owns all calculator state.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::Expression;
use crate::shell::keypad::{Keypad, KeypadAction};

/// The WASM entry point: an expression editor driven by element IDs and
/// keyboard keys.
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserWidget {
    expression: Expression,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserWidget {
    /// Creates a new widget.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            expression: Expression::new(),
            keypad: Keypad::new(),
        }
    }

    /// The text to show in the display element.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn display(&self) -> String {
        self.expression.display_text().to_string()
    }

    /// Handles a click on a keypad button. Returns the new display text if
    /// the element was a keypad button.
    pub fn handle_button(&mut self, element_id: &str) -> Option<String> {
        let action = self.keypad.handle_click(element_id)?;
        self.apply_action(action);
        Some(self.display())
    }

    /// Handles a keyboard key. Returns the new display text if the key is
    /// mapped.
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        let action = Keypad::key_to_action(key)?;
        self.apply_action(action);
        Some(self.display())
    }

    fn apply_action(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal | KeypadAction::Operator(_) => {
                if let Some(ch) = action.to_char() {
                    self.expression.push(ch);
                }
            }
            KeypadAction::Equals => {
                self.expression.evaluate();
            }
            KeypadAction::Clear => {
                self.expression.clear();
            }
            KeypadAction::Backspace => {
                self.expression.backspace();
            }
            KeypadAction::ToggleSign => {
                self.expression.toggle_sign();
            }
            KeypadAction::Percent => {
                self.expression.apply_percent();
            }
        }
    }
}

impl Default for BrowserWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Module initialization, run when the WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"webcalc initialized".into());
}

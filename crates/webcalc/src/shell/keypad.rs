//! Keypad layout and keyboard mapping.
//!
//! The keypad is a 5x4 grid of buttons, each bound to a [`KeypadAction`].
//! The same actions are produced by the keyboard map, so clicks and key
//! presses share one dispatch path in the widget.

use serde::{Deserialize, Serialize};

use super::dom::{DomElement, MockDom};

/// Actions a keypad button or keyboard shortcut can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point
    Decimal,
    /// Insert a binary operator
    Operator(char),
    /// Evaluate the expression
    Equals,
    /// Clear the expression
    Clear,
    /// Delete the last character
    Backspace,
    /// Toggle the sign of the current number
    ToggleSign,
    /// Divide the current number by 100
    Percent,
}

impl KeypadAction {
    /// The character this action inserts, if it inserts one.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// The button label for this action.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "\u{232b}".to_string(),
            Self::ToggleSign => "\u{b1}".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

/// A button definition: its action and its place in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button triggers
    pub action: KeypadAction,
    /// DOM element ID
    pub id: String,
    /// Grid row (0-indexed, top to bottom)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button definition with a derived element ID.
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Clear => "btn-clear".to_string(),
            KeypadAction::Backspace => "btn-backspace".to_string(),
            KeypadAction::ToggleSign => "btn-sign".to_string(),
            KeypadAction::Percent => "btn-percent".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }
}

/// Element-ID name for an operator character.
fn op_name(op: char) -> &'static str {
    match op {
        '+' => "plus",
        '-' => "minus",
        '*' => "times",
        '/' => "divide",
        _ => "op",
    }
}

/// The widget keypad.
///
/// Layout:
/// ```text
/// [ C ] [ \u{b1} ] [ % ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ \u{232b} ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard widget keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C +/- % /
            KeypadButton::new(KeypadAction::Clear, 0, 0),
            KeypadButton::new(KeypadAction::ToggleSign, 0, 1),
            KeypadButton::new(KeypadAction::Percent, 0, 2),
            KeypadButton::new(KeypadAction::Operator('/'), 0, 3),
            // Row 1: 7 8 9 *
            KeypadButton::new(KeypadAction::Digit(7), 1, 0),
            KeypadButton::new(KeypadAction::Digit(8), 1, 1),
            KeypadButton::new(KeypadAction::Digit(9), 1, 2),
            KeypadButton::new(KeypadAction::Operator('*'), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::new(KeypadAction::Digit(4), 2, 0),
            KeypadButton::new(KeypadAction::Digit(5), 2, 1),
            KeypadButton::new(KeypadAction::Digit(6), 2, 2),
            KeypadButton::new(KeypadAction::Operator('-'), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(KeypadAction::Digit(1), 3, 0),
            KeypadButton::new(KeypadAction::Digit(2), 3, 1),
            KeypadButton::new(KeypadAction::Digit(3), 3, 2),
            KeypadButton::new(KeypadAction::Operator('+'), 3, 3),
            // Row 4: 0 . backspace =
            KeypadButton::new(KeypadAction::Digit(0), 4, 0),
            KeypadButton::new(KeypadAction::Decimal, 4, 1),
            KeypadButton::new(KeypadAction::Backspace, 4, 2),
            KeypadButton::new(KeypadAction::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as (rows, cols).
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All button definitions.
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Button at a grid position.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element ID.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Resolves a button click to its action.
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_by_id(element_id).map(|b| b.action)
    }

    /// Maps a keyboard key (as `KeyboardEvent.key` reports it) to an action.
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        match key {
            "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
                let d = key.as_bytes()[0] - b'0';
                Some(KeypadAction::Digit(d))
            }
            "." => Some(KeypadAction::Decimal),
            "+" => Some(KeypadAction::Operator('+')),
            "-" => Some(KeypadAction::Operator('-')),
            "*" => Some(KeypadAction::Operator('*')),
            "/" => Some(KeypadAction::Operator('/')),
            "%" => Some(KeypadAction::Percent),
            "Enter" | "=" => Some(KeypadAction::Equals),
            "Backspace" => Some(KeypadAction::Backspace),
            "c" | "C" => Some(KeypadAction::Clear),
            _ => None,
        }
    }

    /// Creates DOM elements for every button.
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("keypad-btn")
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string())
            })
            .collect()
    }

    /// Registers all keypad buttons in a mock DOM.
    pub fn install(&self, dom: &mut MockDom) {
        for elem in self.create_dom_elements() {
            dom.register_element(elem);
        }
    }
}

//! The calculator widget.
//!
//! [`CalculatorWidget`] wires the expression editor to the mock DOM: button
//! clicks and key presses become editor operations, and every state change
//! is rendered back into the display element. Theme and clipboard chrome
//! live here too, since they are DOM concerns rather than editor ones.

use crate::core::{EditOutcome, Expression};

use super::clipboard::{Clipboard, MockClipboard};
use super::dom::{DomEvent, MockDom};
use super::keypad::{Keypad, KeypadAction};

/// Element ID of the display input.
pub const DISPLAY_ID: &str = "display";
/// Element ID of the theme toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
/// Element ID of the theme icon.
pub const THEME_ICON_ID: &str = "theme-icon";
/// Element ID of the copy button.
pub const COPY_BTN_ID: &str = "copy-btn";
/// Element ID of the copy icon.
pub const COPY_ICON_ID: &str = "copy-icon";

/// Class set on the body for the light theme.
const LIGHT_CLASS: &str = "light";
/// Class set on the copy button while the copied indicator shows.
const COPIED_CLASS: &str = "ok";

/// Browser calculator widget backed by a mock DOM.
#[derive(Debug)]
pub struct CalculatorWidget {
    expression: Expression,
    keypad: Keypad,
    dom: MockDom,
    clipboard: Box<dyn Clipboard>,
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorWidget {
    /// Creates a widget with the standard document and a mock clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clipboard(Box::new(MockClipboard::new()))
    }

    /// Creates a widget with a caller-supplied clipboard.
    #[must_use]
    pub fn with_clipboard(clipboard: Box<dyn Clipboard>) -> Self {
        let mut dom = MockDom::widget();
        let keypad = Keypad::new();
        keypad.install(&mut dom);

        Self {
            expression: Expression::new(),
            keypad,
            dom,
            clipboard,
        }
    }

    /// The expression editor.
    #[must_use]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The keypad layout.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The mock document.
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Mutable access to the mock document.
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// The text currently shown in the display element.
    #[must_use]
    pub fn display(&self) -> &str {
        self.dom.get_element_text(DISPLAY_ID).unwrap_or("0")
    }

    /// Handles a click on any widget element.
    ///
    /// Keypad buttons return the editor outcome; chrome buttons (theme,
    /// copy) and unknown elements return `None`.
    pub fn handle_button(&mut self, element_id: &str) -> Option<EditOutcome> {
        self.dom.dispatch_event(DomEvent::click(element_id));

        if let Some(action) = self.keypad.handle_click(element_id) {
            let outcome = self.apply_action(action);
            self.render();
            return Some(outcome);
        }

        match element_id {
            THEME_TOGGLE_ID => {
                self.toggle_theme();
            }
            COPY_BTN_ID => {
                self.copy_display();
            }
            _ => {}
        }
        None
    }

    /// Handles a keyboard key, mapped through the keypad.
    pub fn handle_key(&mut self, key: &str) -> Option<EditOutcome> {
        self.dom.dispatch_event(DomEvent::key_down(key));

        let action = Keypad::key_to_action(key)?;
        let outcome = self.apply_action(action);
        self.render();
        Some(outcome)
    }

    /// Applies a keypad action to the editor.
    pub fn apply_action(&mut self, action: KeypadAction) -> EditOutcome {
        match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal | KeypadAction::Operator(_) => {
                match action.to_char() {
                    Some(ch) => self.expression.push(ch),
                    None => EditOutcome::Ignored,
                }
            }
            KeypadAction::Equals => self.expression.evaluate(),
            KeypadAction::Clear => self.expression.clear(),
            KeypadAction::Backspace => self.expression.backspace(),
            KeypadAction::ToggleSign => self.expression.toggle_sign(),
            KeypadAction::Percent => self.expression.apply_percent(),
        }
    }

    /// Writes the editor state into the display element.
    pub fn render(&mut self) {
        let text = self.expression.display_text().to_string();
        self.dom.set_element_text(DISPLAY_ID, &text);
    }

    /// Toggles the light theme. Returns true if the light theme is now on.
    pub fn toggle_theme(&mut self) -> bool {
        let light = self.dom.body.toggle_class(LIGHT_CLASS);
        if let Some(icon) = self.dom.get_element_mut(THEME_ICON_ID) {
            if light {
                icon.remove_class("fa-moon");
                icon.add_class("fa-sun");
            } else {
                icon.remove_class("fa-sun");
                icon.add_class("fa-moon");
            }
        }
        light
    }

    /// True if the light theme is active.
    #[must_use]
    pub fn is_light_theme(&self) -> bool {
        self.dom.body.has_class(LIGHT_CLASS)
    }

    /// Copies the display text to the clipboard.
    ///
    /// On success the copy button shows a confirmation indicator until
    /// [`reset_copy_indicator`](Self::reset_copy_indicator) is called (the
    /// browser layer schedules that on a timer). Clipboard failure is a
    /// silent no-op.
    pub fn copy_display(&mut self) -> bool {
        let text = self.display().to_string();
        if self.clipboard.write_text(&text).is_err() {
            return false;
        }

        if let Some(btn) = self.dom.get_element_mut(COPY_BTN_ID) {
            btn.add_class(COPIED_CLASS);
        }
        if let Some(icon) = self.dom.get_element_mut(COPY_ICON_ID) {
            icon.remove_class("fa-copy");
            icon.add_class("fa-check");
        }
        true
    }

    /// Reverts the copy confirmation indicator.
    pub fn reset_copy_indicator(&mut self) {
        if let Some(btn) = self.dom.get_element_mut(COPY_BTN_ID) {
            btn.remove_class(COPIED_CLASS);
        }
        if let Some(icon) = self.dom.get_element_mut(COPY_ICON_ID) {
            icon.remove_class("fa-check");
            icon.add_class("fa-copy");
        }
    }
}

//! Scripted driver for exercising the widget.
//!
//! [`WidgetDriver`] types key sequences and clicks buttons against a
//! [`CalculatorWidget`], and the `verify_*` routines assert the observable
//! behavior contracts. They panic on violation, so a test can run the whole
//! behavior suite with one call to [`run_full_specification`].

use crate::shell::CalculatorWidget;

/// Drives a widget through scripted interactions.
#[derive(Debug, Default)]
pub struct WidgetDriver {
    widget: CalculatorWidget,
}

impl WidgetDriver {
    /// Creates a driver with a fresh widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing widget.
    #[must_use]
    pub fn with_widget(widget: CalculatorWidget) -> Self {
        Self { widget }
    }

    /// The widget under test.
    #[must_use]
    pub fn widget(&self) -> &CalculatorWidget {
        &self.widget
    }

    /// Mutable access to the widget.
    pub fn widget_mut(&mut self) -> &mut CalculatorWidget {
        &mut self.widget
    }

    /// Presses each character of `keys` as a keyboard key.
    pub fn type_keys(&mut self, keys: &str) {
        for ch in keys.chars() {
            self.widget.handle_key(&ch.to_string());
        }
    }

    /// Presses a named key ("Enter", "Backspace", ...).
    pub fn press(&mut self, key: &str) {
        self.widget.handle_key(key);
    }

    /// Clicks an element by ID.
    pub fn click(&mut self, element_id: &str) {
        self.widget.handle_button(element_id);
    }

    /// The display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.widget.display()
    }

    /// Number of events the DOM has recorded.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.widget.dom().event_history().len()
    }
}

/// Digits concatenate and render.
pub fn verify_digit_entry(driver: &mut WidgetDriver) {
    driver.click("btn-clear");
    driver.type_keys("123");
    assert_eq!(driver.display(), "123");
    driver.press("Backspace");
    assert_eq!(driver.display(), "12");
}

/// A newer operator replaces the one before it.
pub fn verify_operator_replacement(driver: &mut WidgetDriver) {
    driver.click("btn-clear");
    driver.type_keys("5+");
    driver.type_keys("*");
    assert_eq!(driver.display(), "5*");
    driver.type_keys("3");
    driver.press("Enter");
    assert_eq!(driver.display(), "15");
}

/// Multiplication binds tighter than addition.
pub fn verify_evaluation(driver: &mut WidgetDriver) {
    driver.click("btn-clear");
    driver.type_keys("2+3*4");
    driver.press("Enter");
    assert_eq!(driver.display(), "14");
}

/// Failed evaluation leaves the expression intact; a trailing operator is
/// forgiven.
pub fn verify_error_recovery(driver: &mut WidgetDriver) {
    driver.click("btn-clear");
    driver.type_keys("5/0");
    driver.press("Enter");
    assert_eq!(driver.display(), "5/0");

    driver.click("btn-clear");
    driver.type_keys("7+");
    driver.press("Enter");
    assert_eq!(driver.display(), "7");
}

/// Sign toggle and percent act on the trailing number.
pub fn verify_sign_and_percent(driver: &mut WidgetDriver) {
    driver.click("btn-clear");
    driver.type_keys("50");
    driver.click("btn-sign");
    assert_eq!(driver.display(), "-50");
    driver.click("btn-sign");
    assert_eq!(driver.display(), "50");
    driver.type_keys("%");
    assert_eq!(driver.display(), "0.5");
}

/// A result chains into the next expression through an operator, and a
/// digit replaces it.
pub fn verify_result_chaining(driver: &mut WidgetDriver) {
    driver.click("btn-clear");
    driver.type_keys("2+3*4");
    driver.press("Enter");
    driver.type_keys("+6");
    driver.press("Enter");
    assert_eq!(driver.display(), "20");

    driver.type_keys("9");
    assert_eq!(driver.display(), "9");
}

/// Runs every verification routine against one driver.
pub fn run_full_specification(driver: &mut WidgetDriver) {
    verify_digit_entry(driver);
    verify_operator_replacement(driver);
    verify_evaluation(driver);
    verify_error_recovery(driver);
    verify_sign_and_percent(driver);
    verify_result_chaining(driver);
}

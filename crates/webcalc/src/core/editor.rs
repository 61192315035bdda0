//! Expression editing state machine.
//!
//! [`Expression`] owns the in-progress expression text and the
//! `just_evaluated` flag, and implements the append/replace/reject rules the
//! keypad relies on. All operations are infallible at the surface: invalid
//! input and failed evaluations degrade to no-ops, reported through
//! [`EditOutcome`] so callers and tests can still tell them apart.

use crate::core::evaluator::Evaluator;

/// Outcome of an editor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The expression changed; the shell should re-render.
    Updated,
    /// The input was refused or evaluation failed; state unchanged.
    Rejected,
    /// There was nothing to act on (empty buffer or segment); state unchanged.
    Ignored,
}

impl EditOutcome {
    /// Returns true if the operation changed the expression.
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Updated)
    }
}

/// The in-progress arithmetic expression.
///
/// The buffer only ever contains `[0-9+\-*/.]`, never starts with an
/// operator other than `-`, and never gains two adjacent operators through
/// appends (the newer operator replaces the older one).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    buffer: String,
    just_evaluated: bool,
}

/// Returns true for the four binary operator characters.
#[must_use]
pub const fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

impl Expression {
    /// Creates an empty expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw buffer contents.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns true if the buffer holds a just-computed result.
    #[must_use]
    pub const fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Returns the text the display surface should show.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.buffer.is_empty() {
            "0"
        } else {
            &self.buffer
        }
    }

    /// Appends a character to the expression.
    ///
    /// Digits and `.` typed right after an evaluation start a fresh
    /// expression; an operator chains onto the previous result. A duplicate
    /// decimal point in the trailing number segment, or a leading `+ * /`,
    /// is rejected. An operator typed directly after another operator
    /// replaces it (last-operator-wins).
    pub fn push(&mut self, ch: char) -> EditOutcome {
        if !(ch.is_ascii_digit() || ch == '.' || is_operator(ch)) {
            return EditOutcome::Rejected;
        }

        if self.just_evaluated && (ch.is_ascii_digit() || ch == '.') {
            self.buffer.clear();
            self.just_evaluated = false;
        }

        if ch == '.' && self.trailing_segment().contains('.') {
            return EditOutcome::Rejected;
        }

        if is_operator(ch) {
            if self.buffer.is_empty() && ch != '-' {
                return EditOutcome::Rejected;
            }
            if self.buffer.ends_with(is_operator) {
                self.buffer.pop();
                self.buffer.push(ch);
                return EditOutcome::Updated;
            }
            self.just_evaluated = false;
        }

        self.buffer.push(ch);
        EditOutcome::Updated
    }

    /// Removes the last character.
    pub fn backspace(&mut self) -> EditOutcome {
        if self.buffer.pop().is_some() {
            EditOutcome::Updated
        } else {
            EditOutcome::Ignored
        }
    }

    /// Resets the expression to empty.
    pub fn clear(&mut self) -> EditOutcome {
        self.buffer.clear();
        self.just_evaluated = false;
        EditOutcome::Updated
    }

    /// Toggles the sign of the trailing number segment.
    pub fn toggle_sign(&mut self) -> EditOutcome {
        let Some(start) = self.signed_segment_start() else {
            return EditOutcome::Ignored;
        };
        if self.buffer.as_bytes()[start] == b'-' {
            self.buffer.remove(start);
        } else {
            self.buffer.insert(start, '-');
        }
        EditOutcome::Updated
    }

    /// Replaces the trailing number segment with its value divided by 100.
    pub fn apply_percent(&mut self) -> EditOutcome {
        let Some(start) = self.signed_segment_start() else {
            return EditOutcome::Ignored;
        };
        let Ok(value) = self.buffer[start..].parse::<f64>() else {
            return EditOutcome::Ignored;
        };
        let replacement = format_number(value / 100.0);
        self.buffer.truncate(start);
        self.buffer.push_str(&replacement);
        EditOutcome::Updated
    }

    /// Evaluates the expression and replaces the buffer with the result.
    ///
    /// A trailing operator is discarded before evaluation. On any failure
    /// (unparseable input, division by zero, non-finite result) the buffer
    /// is left exactly as it was. On success the result is rounded to 12
    /// decimal places to trim binary floating-point noise.
    pub fn evaluate(&mut self) -> EditOutcome {
        if self.buffer.is_empty() {
            return EditOutcome::Ignored;
        }

        let mut candidate = self.buffer.clone();
        if candidate.ends_with(is_operator) {
            candidate.pop();
        }
        let sanitized: String = candidate
            .chars()
            .filter(|&c| c.is_ascii_digit() || matches!(c, '.' | '%') || is_operator(c))
            .collect();

        let Ok(value) = Evaluator::new().evaluate_str(&sanitized) else {
            return EditOutcome::Rejected;
        };

        let rounded = (value * 1e12).round() / 1e12;
        if !rounded.is_finite() {
            return EditOutcome::Rejected;
        }

        self.buffer = format_number(rounded);
        self.just_evaluated = true;
        EditOutcome::Updated
    }

    /// Returns the trailing number segment: the longest suffix of the buffer
    /// forming a single numeric literal (`12.5` in `3+12.5`, empty in `3+`).
    #[must_use]
    pub fn trailing_segment(&self) -> &str {
        let bytes = self.buffer.as_bytes();
        let mut run_start = bytes.len();
        while run_start > 0
            && (bytes[run_start - 1].is_ascii_digit() || bytes[run_start - 1] == b'.')
        {
            run_start -= 1;
        }

        let run = &self.buffer[run_start..];
        for i in 0..run.len() {
            if is_number_literal(&run[i..]) {
                return &run[i..];
            }
        }
        ""
    }

    /// Start index of the trailing segment including a unary `-` directly in
    /// front of it. `None` if the segment is empty.
    fn signed_segment_start(&self) -> Option<usize> {
        let seg_len = self.trailing_segment().len();
        if seg_len == 0 {
            return None;
        }
        let mut start = self.buffer.len() - seg_len;
        if start > 0 && self.buffer.as_bytes()[start - 1] == b'-' {
            // only a unary minus belongs to the segment; a binary minus
            // (preceded by a digit) stays an operator
            let unary = start == 1
                || is_operator(char::from(self.buffer.as_bytes()[start - 2]));
            if unary {
                start -= 1;
            }
        }
        Some(start)
    }
}

/// Returns true if `s` is a single numeric literal (`\d+\.?\d*` or `\.\d+`).
fn is_number_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes {
        [] => false,
        [b'.', rest @ ..] => !rest.is_empty() && rest.iter().all(u8::is_ascii_digit),
        _ => {
            if !bytes[0].is_ascii_digit() {
                return false;
            }
            let mut seen_dot = false;
            for &b in bytes {
                if b == b'.' {
                    if seen_dot {
                        return false;
                    }
                    seen_dot = true;
                } else if !b.is_ascii_digit() {
                    return false;
                }
            }
            true
        }
    }
}

/// Formats a number canonically: integers without a decimal point, decimals
/// with trailing zeros trimmed.
#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        let s = format!("{n:.12}");
        let s = s.trim_end_matches('0').trim_end_matches('.');
        s.to_string()
    }
}

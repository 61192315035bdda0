//! Property-based tests for the expression editor.
//!
//! These check the editing invariants over arbitrary input sequences: the
//! buffer charset, operator placement rules, and the no-op guarantees of
//! rejected operations.

use proptest::prelude::*;
use webcalc::prelude::*;

/// Characters the keypad can produce.
fn keypad_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/',
    ])
}

/// Digits only.
fn digit_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'])
}

/// Binary operator characters.
fn operator_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

/// Builds an expression by pushing each character.
fn build(chars: &[char]) -> Expression {
    let mut expr = Expression::new();
    for &ch in chars {
        expr.push(ch);
    }
    expr
}

fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

proptest! {
    /// The buffer only ever contains keypad characters.
    #[test]
    fn prop_buffer_charset(chars in prop::collection::vec(keypad_char(), 0..30)) {
        let expr = build(&chars);
        for ch in expr.buffer().chars() {
            prop_assert!(ch.is_ascii_digit() || ch == '.' || is_operator(ch));
        }
    }

    /// The buffer never starts with an operator other than '-'.
    #[test]
    fn prop_buffer_never_starts_with_binary_operator(
        chars in prop::collection::vec(keypad_char(), 0..30)
    ) {
        let expr = build(&chars);
        if let Some(first) = expr.buffer().chars().next() {
            prop_assert!(first != '+' && first != '*' && first != '/');
        }
    }

    /// Appends never create two adjacent operators except a binary operator
    /// followed by unary '-' is impossible through push (replacement wins),
    /// so no two adjacent operators at all.
    #[test]
    fn prop_no_adjacent_operators(chars in prop::collection::vec(keypad_char(), 0..30)) {
        let expr = build(&chars);
        let bytes: Vec<char> = expr.buffer().chars().collect();
        for pair in bytes.windows(2) {
            prop_assert!(
                !(is_operator(pair[0]) && is_operator(pair[1])),
                "adjacent operators in {:?}",
                expr.buffer()
            );
        }
    }

    /// Pushing an operator onto an operator-terminated buffer keeps length.
    #[test]
    fn prop_operator_replacement_keeps_length(
        digits in prop::collection::vec(digit_char(), 1..5),
        op1 in operator_char(),
        op2 in operator_char(),
    ) {
        let mut expr = build(&digits);
        expr.push(op1);
        let len = expr.buffer().len();
        expr.push(op2);
        prop_assert_eq!(expr.buffer().len(), len);
        prop_assert!(expr.buffer().ends_with(op2));
    }

    /// A rejected character leaves the buffer untouched.
    #[test]
    fn prop_rejected_push_is_noop(
        chars in prop::collection::vec(keypad_char(), 0..20),
        bad in prop::char::range('a', 'z'),
    ) {
        let mut expr = build(&chars);
        let before = expr.buffer().to_string();
        let outcome = expr.push(bad);
        prop_assert_eq!(outcome, EditOutcome::Rejected);
        prop_assert_eq!(expr.buffer(), before);
    }

    /// A digit push followed by backspace restores the buffer.
    #[test]
    fn prop_push_digit_backspace_restores(
        chars in prop::collection::vec(keypad_char(), 0..20),
        digit in digit_char(),
    ) {
        let mut expr = build(&chars);
        // a digit push after evaluate clears the buffer, so pin the flag down
        prop_assume!(!expr.just_evaluated());
        let before = expr.buffer().to_string();
        if expr.push(digit) == EditOutcome::Updated {
            expr.backspace();
            prop_assert_eq!(expr.buffer(), before);
        }
    }

    /// Toggling the sign twice restores the buffer.
    #[test]
    fn prop_toggle_sign_involution(chars in prop::collection::vec(keypad_char(), 0..20)) {
        let mut expr = build(&chars);
        let before = expr.buffer().to_string();
        if expr.toggle_sign() == EditOutcome::Updated {
            prop_assert_eq!(expr.toggle_sign(), EditOutcome::Updated);
        }
        prop_assert_eq!(expr.buffer(), before);
    }

    /// Percent on a plain digit buffer divides by 100.
    #[test]
    fn prop_percent_divides_by_hundred(digits in prop::collection::vec(digit_char(), 1..6)) {
        let mut expr = build(&digits);
        let value: f64 = expr.buffer().parse().unwrap();
        prop_assert_eq!(expr.apply_percent(), EditOutcome::Updated);
        let result: f64 = expr.buffer().parse().unwrap();
        prop_assert!((result - value / 100.0).abs() < 1e-9);
    }

    /// Evaluate either succeeds (buffer becomes the result) or leaves the
    /// buffer exactly as it was. It never panics.
    #[test]
    fn prop_evaluate_success_or_noop(chars in prop::collection::vec(keypad_char(), 0..25)) {
        let mut expr = build(&chars);
        let before = expr.buffer().to_string();
        match expr.evaluate() {
            EditOutcome::Updated => {
                prop_assert!(expr.just_evaluated());
                prop_assert!(expr.buffer().parse::<f64>().is_ok());
            }
            EditOutcome::Rejected => {
                prop_assert_eq!(expr.buffer(), before);
                prop_assert!(!expr.just_evaluated());
            }
            EditOutcome::Ignored => {
                prop_assert_eq!(expr.buffer(), "");
            }
        }
    }

    /// A successful evaluation is idempotent: evaluating the result again
    /// yields the same display.
    #[test]
    fn prop_evaluate_idempotent(
        a in prop::collection::vec(digit_char(), 1..4),
        op in operator_char(),
        b in prop::collection::vec(digit_char(), 1..4),
    ) {
        let mut chars = a;
        chars.push(op);
        chars.extend(b);
        let mut expr = build(&chars);
        if expr.evaluate() == EditOutcome::Updated {
            let first = expr.buffer().to_string();
            expr.evaluate();
            prop_assert_eq!(expr.buffer(), first);
        }
    }

    /// Clear always empties the buffer, whatever came before.
    #[test]
    fn prop_clear_always_resets(chars in prop::collection::vec(keypad_char(), 0..30)) {
        let mut expr = build(&chars);
        expr.evaluate();
        prop_assert_eq!(expr.clear(), EditOutcome::Updated);
        prop_assert_eq!(expr.buffer(), "");
        prop_assert!(!expr.just_evaluated());
        prop_assert_eq!(expr.display_text(), "0");
    }

    /// The evaluator agrees with f64 arithmetic on single binary operations
    /// (away from division by zero).
    #[test]
    fn prop_evaluator_matches_f64(
        a in 0.0..1000.0f64,
        b in 1.0..1000.0f64,
    ) {
        let eval = Evaluator::new();
        let sum = eval.evaluate_str(&format!("{a}+{b}")).unwrap();
        prop_assert!((sum - (a + b)).abs() < 1e-6);
        let quot = eval.evaluate_str(&format!("{a}/{b}")).unwrap();
        prop_assert!((quot - a / b).abs() < 1e-6);
    }
}

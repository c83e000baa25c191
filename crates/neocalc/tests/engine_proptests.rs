//! Property-based tests for the calculator engine
//!
//! Random key sequences against the invariants every front end relies on.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use neocalc::prelude::*;
use proptest::prelude::*;
use proptest::sample::select;

// ===== Strategy definitions =====

const TOKENS: [&str; 19] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "=", "Enter",
    "Backspace", "Delete",
];

/// Any admitted key token
fn token_strategy() -> impl Strategy<Value = &'static str> {
    select(TOKENS.to_vec())
}

/// Operand-class tokens only
fn operand_token_strategy() -> impl Strategy<Value = &'static str> {
    select(vec!["0", "1", "5", "9", ".", "Backspace"])
}

/// Tokens no listener should react to
fn junk_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{2,10}",
        Just("Escape".to_string()),
        Just("%".to_string()),
        Just("^".to_string()),
        Just(" ".to_string()),
        Just(String::new()),
        Just("10".to_string()),
    ]
}

/// A typed number without leading zeros, up to four digits
fn number_strategy() -> impl Strategy<Value = u32> {
    1u32..10_000u32
}

fn arithmetic_operator_strategy() -> impl Strategy<Value = &'static str> {
    select(vec!["+", "-", "*"])
}

fn type_number(calc: &mut Calculator, n: u32) {
    for c in n.to_string().chars() {
        calc.process_token(&c.to_string());
    }
}

fn feed(calc: &mut Calculator, tokens: &[&str]) {
    for token in tokens {
        calc.process_token(token);
    }
}

// ===== Reset properties =====

proptest! {
    /// Delete returns any reachable state to a fresh engine
    #[test]
    fn prop_delete_resets(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        feed(&mut calc, &tokens);
        prop_assert_eq!(calc.process_token("Delete"), "0");
        prop_assert_eq!(calc.engine(), &Engine::new());
    }

    /// Delete twice is the same as Delete once
    #[test]
    fn prop_delete_idempotent(tokens in prop::collection::vec(token_strategy(), 0..20)) {
        let mut once = Calculator::new();
        feed(&mut once, &tokens);
        once.process_token("Delete");
        let mut twice = once.clone();
        twice.process_token("Delete");
        prop_assert_eq!(once.engine(), twice.engine());
        prop_assert_eq!(once.display(), twice.display());
    }
}

// ===== Input filter properties =====

proptest! {
    /// Unrecognized tokens change nothing
    #[test]
    fn prop_junk_is_ignored(
        tokens in prop::collection::vec(token_strategy(), 0..20),
        junk in junk_token_strategy(),
    ) {
        let mut calc = Calculator::new();
        feed(&mut calc, &tokens);
        let before = calc.clone();
        prop_assert!(matches!(calc.try_process(&junk), Err(Rejection::UnknownKey(_))));
        prop_assert_eq!(calc.engine(), before.engine());
        prop_assert_eq!(calc.display(), before.display());
    }

    /// Rejected keys never touch the display
    #[test]
    fn prop_rejection_keeps_display(tokens in prop::collection::vec(token_strategy(), 1..40)) {
        let mut calc = Calculator::new();
        for token in &tokens {
            let before = calc.display().to_string();
            if calc.try_process(token).is_err() {
                prop_assert_eq!(calc.display(), before.as_str());
            }
        }
    }
}

// ===== State properties =====

proptest! {
    /// Entering an operand and having an operator armed are exclusive
    #[test]
    fn prop_flags_exclusive(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for token in &tokens {
            calc.process_token(token);
            let flags = calc.engine().flags();
            prop_assert!(!(flags.entering_operand && flags.operator_armed));
            if flags.errored {
                prop_assert_eq!(calc.display(), "Syntax Error!!");
            }
        }
    }

    /// A number being typed fits the screen and has at most one point
    #[test]
    fn prop_entry_fits_screen(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for token in &tokens {
            calc.process_token(token);
            if calc.engine().flags().entering_operand {
                prop_assert!(calc.display().chars().count() <= 8);
                prop_assert!(calc.display().matches('.').count() <= 1);
            }
        }
    }

    /// Operand keys alone never leave a number-entry state for anything but Idle
    #[test]
    fn prop_operand_keys_stay_in_first_operand(
        tokens in prop::collection::vec(operand_token_strategy(), 0..30),
    ) {
        let mut calc = Calculator::new();
        feed(&mut calc, &tokens);
        prop_assert!(matches!(
            calc.state(),
            State::Idle | State::EnteringFirstOperand
        ));
        prop_assert!(calc.engine().operand().is_none());
    }
}

// ===== Arithmetic properties =====

proptest! {
    /// a + b = shows the integer sum
    #[test]
    fn prop_addition(a in number_strategy(), b in number_strategy()) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.process_token("+");
        type_number(&mut calc, b);
        let expected = (a + b).to_string();
        prop_assert_eq!(calc.process_token("="), expected.as_str());
    }

    /// a - b = shows the signed difference
    #[test]
    fn prop_subtraction(a in number_strategy(), b in number_strategy()) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.process_token("-");
        type_number(&mut calc, b);
        let expected = (i64::from(a) - i64::from(b)).to_string();
        prop_assert_eq!(calc.process_token("="), expected.as_str());
    }

    /// Products of four-digit numbers fit the screen exactly
    #[test]
    fn prop_multiplication(a in number_strategy(), b in number_strategy()) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.process_token("*");
        type_number(&mut calc, b);
        let expected = (a * b).to_string();
        prop_assert_eq!(calc.process_token("="), expected.as_str());
    }

    /// Any number divided by zero is the fault marker
    #[test]
    fn prop_division_by_zero(a in number_strategy()) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        feed(&mut calc, &["/", "0", "="]);
        prop_assert_eq!(calc.display(), "Syntax Error!!");
        prop_assert_eq!(calc.state(), State::Errored);
    }

    /// Chained operators evaluate strictly left to right
    #[test]
    fn prop_chain_left_to_right(
        a in number_strategy(),
        b in number_strategy(),
        c in 1u32..10u32,
        first in arithmetic_operator_strategy(),
    ) {
        let apply = |x: i64, op: &str, y: i64| match op {
            "+" => x + y,
            "-" => x - y,
            _ => x * y,
        };
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.process_token(first);
        type_number(&mut calc, b);
        calc.process_token("+");
        type_number(&mut calc, c);
        calc.process_token("=");

        let expected = apply(apply(i64::from(a), first, i64::from(b)), "+", i64::from(c));
        let formatted = format_result(expected as f64, &DisplayConfig::default());
        prop_assert_eq!(calc.display(), formatted.as_str());
    }

    /// Results read back as numbers so they can feed the next operation
    #[test]
    fn prop_results_are_numerals(
        a in number_strategy(),
        b in number_strategy(),
        op in select(vec!["+", "-", "*", "/"]),
    ) {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.process_token(op);
        type_number(&mut calc, b);
        calc.process_token("=");
        prop_assert!(!Operand::number(calc.display()).coerce().is_nan());
    }
}

// ===== Formatting properties =====

proptest! {
    /// Large magnitudes render as d.dde+x
    #[test]
    fn prop_large_values_scientific(value in 1.0e8f64..1.0e300f64, negative in any::<bool>()) {
        let value = if negative { -value } else { value };
        let text = format_result(value, &DisplayConfig::default());
        let body = text.strip_prefix('-').unwrap_or(&text);
        let (mantissa, exponent) = body.split_once("e+").unwrap();
        prop_assert_eq!(mantissa.len(), 4);
        prop_assert_eq!(mantissa.as_bytes()[1], b'.');
        prop_assert!(exponent.parse::<u32>().unwrap() >= 8);
    }

    /// Integers within the screen render unchanged
    #[test]
    fn prop_small_integers_plain(value in -9_999_999i64..=99_999_999i64) {
        let text = format_result(value as f64, &DisplayConfig::default());
        prop_assert_eq!(text, value.to_string());
    }
}

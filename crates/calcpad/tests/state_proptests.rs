//! Property-based tests for the calculator state machine
//!
//! Probar: Error prevention - Property tests catch edge cases that humans miss

use calcpad::core::{format_value, CalculatorState, Digit, InputEvent, Operand, Operator};
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any digit (0-9)
fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0usize..10).prop_map(|d| Digit::ALL[d])
}

/// Generate a non-zero digit (1-9)
fn nonzero_digit_strategy() -> impl Strategy<Value = Digit> {
    (1usize..10).prop_map(|d| Digit::ALL[d])
}

/// Generate any operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Generate any input event
fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => digit_strategy().prop_map(InputEvent::Digit),
        1 => Just(InputEvent::Decimal),
        2 => operator_strategy().prop_map(InputEvent::Operator),
        1 => Just(InputEvent::Equals),
        1 => Just(InputEvent::Clear),
        1 => Just(InputEvent::Sign),
        1 => Just(InputEvent::Percent),
    ]
}

/// Generate entry-only events (digits and decimal point)
fn entry_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        5 => digit_strategy().prop_map(InputEvent::Digit),
        1 => Just(InputEvent::Decimal),
    ]
}

fn run(events: &[InputEvent]) -> CalculatorState {
    events
        .iter()
        .fold(CalculatorState::new(), |state, &event| state.next(event))
}

// ===== Entry properties =====

proptest! {
    /// Typed digits (leading digit non-zero) appear literally, up to the length limit
    #[test]
    fn prop_digits_are_literal(
        first in nonzero_digit_strategy(),
        rest in prop::collection::vec(digit_strategy(), 0..48),
    ) {
        let digits: Vec<Digit> = std::iter::once(first).chain(rest).collect();
        let events: Vec<InputEvent> = digits.iter().copied().map(InputEvent::Digit).collect();
        let state = run(&events);

        let typed: String = digits.iter().map(|d| d.as_char()).collect();
        let expected: String = typed.chars().take(Operand::MAX_LEN).collect();
        prop_assert_eq!(state.current().as_str(), expected.as_str());
    }

    /// Entry alone never exceeds the length limit and keeps at most one decimal point
    #[test]
    fn prop_entry_is_bounded(events in prop::collection::vec(entry_strategy(), 0..80)) {
        let state = run(&events);
        let current = state.current().as_str();
        prop_assert!(current.chars().count() <= Operand::MAX_LEN);
        prop_assert!(current.matches('.').count() <= 1);
        prop_assert!(state.current().value().is_finite());
    }
}

// ===== Transition properties =====

proptest! {
    /// Toggling the sign twice restores the display
    #[test]
    fn prop_double_sign_toggle_is_identity(events in prop::collection::vec(event_strategy(), 0..30)) {
        let state = run(&events);
        let twice = state.next(InputEvent::Sign).next(InputEvent::Sign);
        prop_assert_eq!(twice.result(), state.result());
        prop_assert_eq!(twice.expression(), state.expression());
    }

    /// Clear resets from any state
    #[test]
    fn prop_clear_resets(events in prop::collection::vec(event_strategy(), 0..40)) {
        let state = run(&events).next(InputEvent::Clear);
        prop_assert_eq!(state, CalculatorState::new());
    }

    /// The expression is shown exactly while an operation is pending
    #[test]
    fn prop_expression_iff_pending(events in prop::collection::vec(event_strategy(), 0..40)) {
        let state = run(&events);
        prop_assert_eq!(state.expression().is_empty(), state.pending().is_none());
        prop_assert_eq!(state.previous().is_some(), state.operator().is_some());
    }

    /// `next` agrees with in-place `apply`
    #[test]
    fn prop_next_matches_apply(
        events in prop::collection::vec(event_strategy(), 0..30),
        event in event_strategy(),
    ) {
        let state = run(&events);
        let mut applied = state.clone();
        applied.apply(event);
        prop_assert_eq!(state.next(event), applied);
    }

    /// Every reachable state renders a result
    #[test]
    fn prop_result_never_empty(events in prop::collection::vec(event_strategy(), 0..60)) {
        prop_assert!(!run(&events).result().is_empty());
    }
}

// ===== Evaluation properties =====

proptest! {
    /// Chained operations evaluate as a left fold, without precedence
    #[test]
    fn prop_chain_is_left_fold(
        first in nonzero_digit_strategy(),
        steps in prop::collection::vec((operator_strategy(), nonzero_digit_strategy()), 1..8),
    ) {
        let mut events = vec![InputEvent::Digit(first)];
        let mut expected = f64::from(first.value());
        for &(op, d) in &steps {
            events.push(InputEvent::Operator(op));
            events.push(InputEvent::Digit(d));
            expected = op.apply(expected, f64::from(d.value()));
        }
        events.push(InputEvent::Equals);

        let state = run(&events);
        prop_assert_eq!(state.result(), format_value(expected));
        prop_assert!(state.just_evaluated());
    }

    /// Equals without a pending operation changes nothing
    #[test]
    fn prop_equals_without_pending_is_noop(entry in prop::collection::vec(entry_strategy(), 0..10)) {
        let state = run(&entry);
        prop_assert_eq!(state.next(InputEvent::Equals), state);
    }

    /// Formatting never panics and maps exactly the non-finite values to the error text
    #[test]
    fn prop_format_total(value in prop::num::f64::ANY) {
        let text = format_value(value);
        prop_assert_eq!(text == "Error", !value.is_finite());
        prop_assert!(!text.contains("e+"));
    }
}

// ===== Entry after a computed operand =====

/// True when the operand text carries a zero in front of another digit ("07", "-03")
fn has_padded_zero(text: &str) -> bool {
    let mut chars = text.trim_start_matches('-').chars();
    matches!((chars.next(), chars.next()), (Some('0'), Some(c)) if c.is_ascii_digit())
}

proptest! {
    /// Percent computes a value without finishing an evaluation; entry that
    /// follows still replaces a lone zero
    #[test]
    fn prop_entry_after_percent_has_no_padded_zero(
        prefix in prop::collection::vec(event_strategy(), 0..20),
        digits in prop::collection::vec(digit_strategy(), 1..6),
    ) {
        let mut state = run(&prefix).next(InputEvent::Percent);
        for d in digits {
            state = state.next(InputEvent::Digit(d));
            prop_assert!(
                !has_padded_zero(state.current().as_str()),
                "current = {:?}",
                state.current().as_str()
            );
        }
    }

    /// A digit typed after taking a percentage of zero becomes the whole entry,
    /// whatever the sign of the pending operand
    #[test]
    fn prop_digit_after_percent_of_zero_starts_entry(
        prefix in prop::collection::vec(event_strategy(), 0..20),
        op in operator_strategy(),
        d in digit_strategy(),
    ) {
        let state = run(&prefix)
            .next(InputEvent::Operator(op))
            .next(InputEvent::Digit(Digit::ALL[0]))
            .next(InputEvent::Percent)
            .next(InputEvent::Digit(d));
        prop_assert_eq!(state.current().as_str(), d.as_str());
    }
}

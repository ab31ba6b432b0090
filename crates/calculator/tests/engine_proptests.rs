//! Property-based tests for the calculator engine
//!
//! Random key sequences catch the edge cases hand-written tests miss.

#![allow(clippy::unwrap_used)]

use keypad_calculator::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn unary_strategy() -> impl Strategy<Value = UnaryOp> {
    prop::sample::select(UnaryOp::ALL.to_vec())
}

fn binary_strategy() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(BinaryOp::ALL.to_vec())
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => digit_strategy().prop_map(Action::Digit),
        1 => Just(Action::DecimalPoint),
        1 => Just(Action::ToggleSign),
        1 => unary_strategy().prop_map(Action::Unary),
        2 => binary_strategy().prop_map(Action::Binary),
        1 => Just(Action::Equals),
        1 => Just(Action::Clear),
        1 => Just(Action::Reset),
        1 => Just(Action::Push),
        1 => Just(Action::Pop),
        1 => any::<bool>().prop_map(Action::SetInverted),
        1 => Just(Action::ToggleInverted),
    ]
}

/// Builds an engine by pressing actions, ignoring rejected ones
fn engine_after(actions: &[Action]) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    for action in actions {
        let _ = engine.press(*action);
    }
    engine
}

fn type_number(engine: &mut CalculatorEngine, n: u32) {
    for ch in n.to_string().chars() {
        engine.enter_digit_char(ch).unwrap();
    }
}

// ===== Digit entry =====

proptest! {
    #[test]
    fn prop_digits_concatenate(digits in prop::collection::vec(digit_strategy(), 1..15)) {
        let mut engine = CalculatorEngine::new();
        for d in &digits {
            engine.enter_digit(*d).unwrap();
        }
        let typed: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(engine.current_display(), expected);
    }

    #[test]
    fn prop_out_of_range_digit_rejected(d in 10u8..=255u8, actions in prop::collection::vec(action_strategy(), 0..20)) {
        let mut engine = engine_after(&actions);
        let before = engine.snapshot();
        prop_assert!(engine.enter_digit(d).unwrap_err().is_invalid_argument());
        prop_assert_eq!(engine.snapshot(), before);
    }
}

// ===== Binary operations =====

proptest! {
    #[test]
    fn prop_addition(a in 0u32..100_000, b in 0u32..100_000) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, a);
        engine.apply_binary(BinaryOp::Add).unwrap();
        type_number(&mut engine, b);
        engine.resolve_binary().unwrap();
        prop_assert_eq!(engine.current_display(), (a + b).to_string());
    }

    #[test]
    fn prop_chaining_is_left_to_right(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, a);
        engine.apply_binary(BinaryOp::Add).unwrap();
        type_number(&mut engine, b);
        engine.apply_binary(BinaryOp::Multiply).unwrap();
        type_number(&mut engine, c);
        engine.resolve_binary().unwrap();
        prop_assert_eq!(engine.current_display(), ((a + b) * c).to_string());
    }

    #[test]
    fn prop_inverted_binary_equals_direct_inverse(op in binary_strategy(), a in 1u32..500, b in 1u32..20) {
        let mut inverted = CalculatorEngine::new();
        type_number(&mut inverted, a);
        inverted.set_inverted(true);
        inverted.apply_binary(op).unwrap();
        type_number(&mut inverted, b);
        inverted.resolve_binary().unwrap();

        let mut direct = CalculatorEngine::new();
        type_number(&mut direct, a);
        direct.apply_binary(op.inverse()).unwrap();
        type_number(&mut direct, b);
        direct.resolve_binary().unwrap();

        prop_assert_eq!(inverted.current_display(), direct.current_display());
    }

    #[test]
    fn prop_inverted_unary_equals_direct_inverse(op in unary_strategy(), a in 0u32..1000) {
        let mut inverted = CalculatorEngine::new();
        type_number(&mut inverted, a);
        inverted.set_inverted(true);
        inverted.apply_unary(op).unwrap();

        let mut direct = CalculatorEngine::new();
        type_number(&mut direct, a);
        direct.apply_unary(op.inverse()).unwrap();

        prop_assert_eq!(inverted.current_display(), direct.current_display());
    }
}

// ===== Stack, sign, decimal point =====

proptest! {
    #[test]
    fn prop_push_pop_net_zero(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut engine = engine_after(&actions);
        let display = engine.current_display().to_string();
        let depth = engine.stack_len();
        engine.push();
        engine.pop();
        prop_assert_eq!(engine.current_display(), display);
        prop_assert_eq!(engine.stack_len(), depth);
    }

    #[test]
    fn prop_pop_empty_is_noop(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut engine = engine_after(&actions);
        while engine.stack_len() > 0 {
            engine.pop();
        }
        let before = engine.current_display().to_string();
        engine.pop();
        prop_assert_eq!(engine.current_display(), before);
    }

    #[test]
    fn prop_toggle_sign_twice_restores(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut engine = engine_after(&actions);
        let before = engine.current_display().to_string();
        engine.toggle_sign();
        engine.toggle_sign();
        prop_assert_eq!(engine.current_display(), before);
    }

    #[test]
    fn prop_failed_decimal_point_leaves_state(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut engine = engine_after(&actions);
        let before = engine.snapshot();
        if engine.enter_decimal_point().is_err() {
            prop_assert_eq!(engine.snapshot(), before);
        } else {
            prop_assert!(engine.current_display().ends_with('.'));
        }
    }
}

// ===== Whole-session invariants =====

proptest! {
    #[test]
    fn prop_display_always_parses(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut session = Session::new();
        for action in actions {
            prop_assert!(session.press(action).is_ok());
            prop_assert!(parse_number(&session.display()).is_ok(), "display {}", session.display());
        }
    }

    #[test]
    fn prop_pending_fields_move_together(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let engine = engine_after(&actions);
        prop_assert_eq!(engine.pending_operand().is_some(), engine.pending_operator().is_some());
        prop_assert_eq!(engine.is_binary_pending(), engine.pending_operator().is_some());
    }

    #[test]
    fn prop_format_idempotent_on_results(op in unary_strategy(), a in -1000.0f64..1000.0) {
        let once = format_number(op.apply(a));
        let again = format_number(parse_number(&once).unwrap());
        prop_assert_eq!(once, again);
    }

    #[test]
    fn prop_reset_restores_initial(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut engine = engine_after(&actions);
        engine.reset();
        prop_assert_eq!(engine.snapshot(), CalculatorEngine::new().snapshot());
    }
}

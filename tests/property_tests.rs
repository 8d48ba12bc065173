//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify transition and formatting properties
//! hold across many randomly generated action sequences and values.

use calc_engine::core::{Action, AngleMode, CalculatorState, HistoryEntry, HistoryLog};
use calc_engine::eval::{evaluate, ResultFormatter};
use calc_engine::machine::{apply, CalculatorStateMachine};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_token()(variant in 0..12u8, digit in 0..10u8) -> String {
        match variant {
            0..=4 => digit.to_string(),
            5 => "+".to_string(),
            6 => "-".to_string(),
            7 => "×".to_string(),
            8 => "÷".to_string(),
            9 => ".".to_string(),
            10 => "(".to_string(),
            _ => ")".to_string(),
        }
    }
}

prop_compose! {
    fn arbitrary_mode()(radians in any::<bool>()) -> AngleMode {
        if radians { AngleMode::Radians } else { AngleMode::Degrees }
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => arbitrary_token().prop_map(Action::Append),
        1 => Just(Action::Clear),
        1 => Just(Action::Delete),
        2 => Just(Action::Calculate),
        1 => arbitrary_mode().prop_map(Action::SetAngleMode),
        1 => any::<bool>().prop_map(Action::SetScientific),
        1 => (0..12usize).prop_map(Action::RecallHistory),
    ]
}

fn run(actions: &[Action]) -> CalculatorState {
    let mut machine = CalculatorStateMachine::default();
    machine.apply_all(actions.iter().cloned());
    machine.into_state()
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut machine = CalculatorStateMachine::default();
        for action in actions {
            let state = machine.apply(action);
            prop_assert!(state.check_invariants().is_ok(), "{:?}", state);
        }
    }

    #[test]
    fn append_on_zero_replaces(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
        token in arbitrary_token()
    ) {
        let mut actions = actions;
        actions.push(Action::Clear);
        let state = run(&actions);
        prop_assert_eq!(state.display(), "0");

        let state = apply(state, Action::Append(token.clone()), &Default::default());
        prop_assert_eq!(state.display(), token.as_str());
    }

    #[test]
    fn delete_on_single_character_yields_zero(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let state = run(&actions);
        if state.display().chars().count() == 1 {
            let state = apply(state, Action::Delete, &Default::default());
            prop_assert_eq!(state.display(), "0");
        }
    }

    #[test]
    fn append_after_error_recovers(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
        token in arbitrary_token()
    ) {
        let mut actions = actions;
        actions.extend([Action::Clear, Action::append("*"), Action::Calculate]);
        let state = run(&actions);
        prop_assert!(state.is_error());

        let state = apply(state, Action::Append(token.clone()), &Default::default());
        prop_assert!(!state.is_error());
        prop_assert_eq!(state.display(), token.as_str());
    }

    #[test]
    fn clear_preserves_history_and_modes(
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let before = run(&actions);
        let after = apply(before.clone(), Action::Clear, &Default::default());

        prop_assert_eq!(after.display(), "0");
        prop_assert_eq!(after.expression_label(), "");
        prop_assert!(!after.is_error());
        prop_assert_eq!(after.history(), before.history());
        prop_assert_eq!(after.angle_mode(), before.angle_mode());
        prop_assert_eq!(after.is_scientific(), before.is_scientific());
    }

    #[test]
    fn history_never_exceeds_capacity(
        actions in prop::collection::vec(arbitrary_action(), 0..60)
    ) {
        let state = run(&actions);
        prop_assert!(state.history().len() <= 10);
    }

    #[test]
    fn history_keeps_newest_first(count in 1..25usize) {
        let mut log = HistoryLog::default();
        for n in 0..count {
            log.push(HistoryEntry::new(format!("{n}"), format!("{n}")));
        }

        prop_assert_eq!(log.len(), count.min(10));
        let newest = (count - 1).to_string();
        prop_assert_eq!(log.select(0), Some(newest.as_str()));
    }

    #[test]
    fn angle_mode_round_trip_restores_result(
        angle in -720i32..720,
        func in prop::sample::select(vec!["sin", "cos", "tan"])
    ) {
        let mut machine = CalculatorStateMachine::default();
        let expr = format!("{func}({angle})");
        machine.apply_all(expr.chars().map(|c| Action::append(c.to_string())));
        machine.apply(Action::Calculate);
        let original = machine.state().display().to_string();

        machine.apply(Action::SetAngleMode(AngleMode::Radians));
        machine.apply(Action::SetAngleMode(AngleMode::Degrees));
        prop_assert_eq!(machine.state().display(), original.as_str());
    }

    #[test]
    fn integer_sums_format_without_decimal_point(a in -10_000i64..10_000, b in 0i64..10_000) {
        let result = evaluate(&format!("{a}+{b}"), AngleMode::Degrees).unwrap();
        prop_assert_eq!(result, (a + b).to_string());
    }

    #[test]
    fn evaluation_is_deterministic(a in 0u32..1000, mode in arbitrary_mode()) {
        let expr = format!("sin({a})×cos({a})");
        prop_assert_eq!(evaluate(&expr, mode), evaluate(&expr, mode));
    }

    #[test]
    fn formatted_results_have_no_trailing_zeros(value in -1e6f64..1e6) {
        let formatted = ResultFormatter::default().format(value);
        if formatted.contains('.') {
            prop_assert!(!formatted.ends_with('0'), "{}", formatted);
            prop_assert!(!formatted.ends_with('.'), "{}", formatted);
        }
        prop_assert_ne!(formatted.as_str(), "-0");
    }

    #[test]
    fn snapping_is_idempotent(value in -2.0f64..2.0) {
        let formatter = ResultFormatter::default();
        let once = formatter.snap(value);
        prop_assert_eq!(formatter.snap(once), once);
    }
}

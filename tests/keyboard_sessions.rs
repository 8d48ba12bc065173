//! End-to-end sessions driven through the keyboard adapter.

use calc_engine::checkpoint::SessionSnapshot;
use calc_engine::core::{Action, AngleMode, ERROR_LITERAL};
use calc_engine::input::{action_for_key, actions_for_text, Key};
use calc_engine::{CalculatorStateMachine, EngineBuilder};

fn type_text(machine: &mut CalculatorStateMachine, text: &str) {
    machine.apply_all(actions_for_text(text));
}

#[test]
fn typed_arithmetic_session() {
    let mut machine = CalculatorStateMachine::default();
    type_text(&mut machine, "2+2\n");

    let state = machine.state();
    assert_eq!(state.display(), "4");
    assert_eq!(state.expression_label(), "2+2 =");
    assert_eq!(state.history().entries()[0].expression, "2+2");
}

#[test]
fn division_glyphs_survive_into_history() {
    let mut machine = CalculatorStateMachine::default();
    type_text(&mut machine, "7/2*4=");

    let state = machine.state();
    assert_eq!(state.display(), "14");
    assert_eq!(state.history().entries()[0].expression, "7÷2×4");
}

#[test]
fn escape_and_backspace_edit_the_buffer() {
    let mut machine = CalculatorStateMachine::default();
    type_text(&mut machine, "123");
    machine.apply(action_for_key(Key::Backspace).unwrap());
    assert_eq!(machine.state().display(), "12");

    machine.apply(action_for_key(Key::Escape).unwrap());
    assert_eq!(machine.state().display(), "0");
}

#[test]
fn malformed_input_shows_error_until_next_entry() {
    let mut machine = CalculatorStateMachine::default();
    type_text(&mut machine, "2+*=");
    assert!(machine.state().is_error());
    assert_eq!(machine.state().display(), ERROR_LITERAL);

    type_text(&mut machine, "7");
    assert!(!machine.state().is_error());
    assert_eq!(machine.state().display(), "7");
}

#[test]
fn division_by_zero_renders_infinity() {
    let mut machine = CalculatorStateMachine::default();
    type_text(&mut machine, "1/0=");
    assert!(!machine.state().is_error());
    assert_eq!(machine.state().display(), "Infinity");
}

#[test]
fn scientific_session_with_mode_switches() {
    let mut machine = EngineBuilder::new().scientific(true).build().unwrap();
    machine.apply_all([
        Action::append("sin("),
        Action::append("π"),
        Action::append("÷"),
        Action::append("2"),
        Action::append(")"),
    ]);

    machine.apply(Action::SetAngleMode(AngleMode::Radians));
    machine.apply(Action::Calculate);
    assert_eq!(machine.state().display(), "1");

    // sin(pi/2 degrees)
    machine.apply(Action::SetAngleMode(AngleMode::Degrees));
    assert_eq!(machine.state().display(), "0.0274121336");

    machine.apply(Action::SetAngleMode(AngleMode::Radians));
    assert_eq!(machine.state().display(), "1");
}

#[test]
fn eleven_calculations_keep_latest_ten() {
    let mut machine = CalculatorStateMachine::default();
    for n in 1..=11 {
        type_text(&mut machine, &format!("\u{1b}{n}*2="));
    }

    let history = machine.state().history();
    assert_eq!(history.len(), 10);
    assert_eq!(history.entries()[0].expression, "11×2");
    assert_eq!(history.select(0), Some("22"));
}

#[test]
fn recalled_result_can_be_extended() {
    let mut machine = CalculatorStateMachine::default();
    type_text(&mut machine, "6*7=");
    type_text(&mut machine, "\u{1b}");
    machine.apply(Action::RecallHistory(0));
    type_text(&mut machine, "+8=");

    assert_eq!(machine.state().display(), "50");
    assert_eq!(machine.state().history().len(), 2);
}

#[test]
fn snapshot_resumes_mid_entry() {
    let mut machine = CalculatorStateMachine::default();
    type_text(&mut machine, "3^4=");
    type_text(&mut machine, "\u{1b}12+");

    let bytes = SessionSnapshot::capture(&machine).to_bytes().unwrap();
    let mut resumed = SessionSnapshot::from_bytes(&bytes)
        .unwrap()
        .restore()
        .unwrap();

    type_text(&mut resumed, "8=");
    assert_eq!(resumed.state().display(), "20");
    assert_eq!(resumed.state().history().select(1), Some("81"));
}

#[test]
fn juxtaposed_keypad_entries_multiply() {
    let mut machine = EngineBuilder::new().scientific(true).build().unwrap();
    machine.apply_all([Action::append("2"), Action::append("π"), Action::Calculate]);
    assert_eq!(machine.state().display(), "6.2831853072");

    type_text(&mut machine, "\u{1b}2(3+4)=");
    assert_eq!(machine.state().display(), "14");
}

#[test]
fn infinite_result_can_be_extended() {
    let mut machine = CalculatorStateMachine::default();
    type_text(&mut machine, "1/0=");
    type_text(&mut machine, "+1=");
    assert!(!machine.state().is_error());
    assert_eq!(machine.state().display(), "Infinity");
}

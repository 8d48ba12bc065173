//! Keyboard Session
//!
//! This example drives the calculator engine the way a front end would.
//!
//! Key concepts:
//! - Raw key presses become actions through the keymap adapter
//! - The host reads the state after every action
//! - Angle mode changes re-evaluate the last finalized expression
//! - Snapshots let a host persist and resume a session
//!
//! Run with: RUST_LOG=debug cargo run --example keyboard_session

use calc_engine::checkpoint::SessionSnapshot;
use calc_engine::core::{Action, AngleMode, CalculatorState};
use calc_engine::input::{actions_for_text, buttons_for};
use calc_engine::EngineBuilder;
use tracing_subscriber::EnvFilter;

fn render(state: &CalculatorState) {
    println!(
        "  [{:>3}] {:>24} | {}",
        state.angle_mode(),
        state.expression_label(),
        state.display()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keyboard Session Example ===\n");

    let mut machine = EngineBuilder::new().scientific(true).build()?;

    println!("Typing \"12*(3+4)\" then Enter:");
    for action in actions_for_text("12*(3+4)\n") {
        render(machine.apply(action));
    }

    println!("\nScientific keys on offer:");
    let labels: Vec<String> = buttons_for(machine.state())
        .into_iter()
        .map(|b| b.label)
        .collect();
    println!("  {}", labels.join(" "));

    println!("\nEvaluating sin(30) and switching angle modes:");
    machine.apply(Action::Clear);
    machine.apply_all([Action::append("sin("), Action::append("30"), Action::append(")")]);
    render(machine.apply(Action::Calculate));
    render(machine.apply(Action::SetAngleMode(AngleMode::Radians)));
    render(machine.apply(Action::SetAngleMode(AngleMode::Degrees)));

    println!("\nA malformed expression:");
    render(machine.apply_all(actions_for_text("\u{1b}2+*=")));
    render(machine.apply(Action::append("7")));

    println!("\nHistory (newest first):");
    for (i, entry) in machine.state().history().entries().iter().enumerate() {
        println!("  {i}: {} = {}", entry.expression, entry.result);
    }

    let json = SessionSnapshot::capture(&machine).to_json()?;
    let restored = SessionSnapshot::from_json(&json)?.restore()?;
    println!(
        "\nSnapshot restored with {} history entries, display {:?}",
        restored.state().history().len(),
        restored.state().display()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}

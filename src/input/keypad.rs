//! On-screen keypad layout.
//!
//! Lists the buttons a presentation layer renders and the action each one
//! submits. Scientific keys are only offered while scientific mode is on.

use crate::core::{Action, CalculatorState};
use crate::eval::{DIVIDE_GLYPH, MULTIPLY_GLYPH, PI_GLYPH};

/// Visual role of a button, used by hosts for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Special,
    Clear,
    Equal,
}

/// A keypad button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub kind: ButtonKind,
    pub action: Action,
}

impl Button {
    fn new(label: impl Into<String>, kind: ButtonKind, action: Action) -> Self {
        Self {
            label: label.into(),
            kind,
            action,
        }
    }

    fn token(label: impl Into<String>, kind: ButtonKind, token: impl Into<String>) -> Self {
        Self::new(label, kind, Action::Append(token.into()))
    }

    fn digit(d: char) -> Self {
        Self::token(d.to_string(), ButtonKind::Digit, d.to_string())
    }
}

/// The standard grid, row by row.
pub fn standard_buttons() -> Vec<Button> {
    use ButtonKind::*;

    let multiply = MULTIPLY_GLYPH.to_string();
    let divide = DIVIDE_GLYPH.to_string();

    vec![
        Button::new("AC", Clear, Action::Clear),
        Button::new("⌫", Special, Action::Delete),
        Button::token("%", Special, "%"),
        Button::token(divide.clone(), Operator, divide),
        Button::digit('7'),
        Button::digit('8'),
        Button::digit('9'),
        Button::token(multiply.clone(), Operator, multiply),
        Button::digit('4'),
        Button::digit('5'),
        Button::digit('6'),
        Button::token("−", Operator, "-"),
        Button::digit('1'),
        Button::digit('2'),
        Button::digit('3'),
        Button::token("+", Operator, "+"),
        Button::digit('0'),
        Button::token(".", Digit, "."),
        Button::new("=", Equal, Action::Calculate),
    ]
}

/// Function and constant keys shown in scientific mode.
pub fn scientific_buttons() -> Vec<Button> {
    use ButtonKind::Special;

    vec![
        Button::token("sin", Special, "sin("),
        Button::token("cos", Special, "cos("),
        Button::token("tan", Special, "tan("),
        Button::token("log", Special, "log10("),
        Button::token("ln", Special, "log("),
        Button::token("√", Special, "sqrt("),
        Button::token(PI_GLYPH.to_string(), Special, PI_GLYPH.to_string()),
        Button::token("e", Special, "e"),
        Button::token("^", Special, "^"),
        Button::token("!", Special, "!"),
        Button::token("(", Special, "("),
        Button::token(")", Special, ")"),
    ]
}

/// Buttons available in `state`: scientific keys first when enabled.
pub fn buttons_for(state: &CalculatorState) -> Vec<Button> {
    let mut buttons = if state.is_scientific() {
        scientific_buttons()
    } else {
        Vec::new()
    };
    buttons.extend(standard_buttons());
    buttons
}

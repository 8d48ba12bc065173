//! Expression evaluation.
//!
//! Display glyphs are rewritten into the tokens `meval` understands,
//! juxtaposed operands (`2π`, `2(3+4)`) get an explicit `*`, the expression
//! is evaluated with an angle-mode-specific function scope and the raw number
//! goes through [`ResultFormatter`].

use super::error::EvaluationError;
use super::format::ResultFormatter;
use super::trig::{TrigFn, TrigonometryAdapter};
use crate::core::AngleMode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Multiplication sign shown in the display.
pub const MULTIPLY_GLYPH: char = '×';
/// Division sign shown in the display.
pub const DIVIDE_GLYPH: char = '÷';
/// Pi shown in the display.
pub const PI_GLYPH: char = 'π';
/// Typographic minus used on keypad labels.
pub const MINUS_GLYPH: char = '−';

/// Largest integer whose factorial is finite in `f64`.
const MAX_FACTORIAL: f64 = 170.0;

/// Evaluates display expressions into formatted results.
///
/// Evaluation is a pure function of the expression, the angle mode and the
/// formatter settings.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::AngleMode;
/// use calc_engine::eval::ExpressionEvaluator;
///
/// let evaluator = ExpressionEvaluator::default();
/// assert_eq!(evaluator.evaluate("2+2", AngleMode::Degrees).unwrap(), "4");
/// assert_eq!(evaluator.evaluate("sin(90)", AngleMode::Degrees).unwrap(), "1");
/// assert_eq!(evaluator.evaluate("sin(π÷2)", AngleMode::Radians).unwrap(), "1");
/// assert!(evaluator.evaluate("2+*", AngleMode::Degrees).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpressionEvaluator {
    formatter: ResultFormatter,
}

impl ExpressionEvaluator {
    pub fn new(formatter: ResultFormatter) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &ResultFormatter {
        &self.formatter
    }

    /// Evaluate `expr` and format the result for display.
    pub fn evaluate(&self, expr: &str, mode: AngleMode) -> Result<String, EvaluationError> {
        let raw = self.evaluate_raw(expr, mode)?;
        Ok(self.formatter.format(raw))
    }

    /// Evaluate `expr` without formatting.
    ///
    /// Non-finite results are returned as values, not errors.
    pub fn evaluate_raw(&self, expr: &str, mode: AngleMode) -> Result<f64, EvaluationError> {
        let normalized = normalize(expr)?;
        tracing::trace!(expression = expr, normalized = %normalized, mode = %mode, "evaluating");

        let negative_factorial = Arc::new(AtomicBool::new(false));
        let value = meval::eval_str_with_context(
            &normalized,
            scope(mode, Arc::clone(&negative_factorial)),
        )
        .map_err(|e| {
            tracing::debug!(expression = expr, error = %e, "evaluation failed");
            EvaluationError::new(expr, e)
        })?;

        if negative_factorial.load(Ordering::Relaxed) {
            tracing::debug!(expression = expr, "factorial of a negative number");
            return Err(EvaluationError::new(expr, "factorial of a negative number"));
        }
        Ok(value)
    }
}

/// Evaluate with the default formatter.
pub fn evaluate(expr: &str, mode: AngleMode) -> Result<String, EvaluationError> {
    ExpressionEvaluator::default().evaluate(expr, mode)
}

/// Rewrite display glyphs, implicit products and postfix factorials into
/// evaluator syntax.
///
/// ```rust
/// use calc_engine::eval::normalize;
///
/// assert_eq!(normalize("2×π÷4").unwrap(), "2*pi/4");
/// assert_eq!(normalize("2π").unwrap(), "2*pi");
/// assert_eq!(normalize("(2+1)!").unwrap(), "fact((2+1))");
/// ```
pub fn normalize(expr: &str) -> Result<String, EvaluationError> {
    let mut plain = String::with_capacity(expr.len() + 8);
    for c in expr.chars() {
        match c {
            MULTIPLY_GLYPH => plain.push('*'),
            DIVIDE_GLYPH => plain.push('/'),
            MINUS_GLYPH => plain.push('-'),
            PI_GLYPH => plain.push_str("pi"),
            c => plain.push(c),
        }
    }

    let explicit = insert_implicit_products(&plain);
    let mut out = String::with_capacity(explicit.len() + 8);
    for c in explicit.chars() {
        if c == '!' {
            let start = operand_start(&out)
                .ok_or_else(|| EvaluationError::new(expr, "factorial without operand"))?;
            let operand = out.split_off(start);
            out.push_str("fact(");
            out.push_str(&operand);
            out.push(')');
        } else {
            out.push(c);
        }
    }

    Ok(out)
}

/// Insert `*` where a value is directly followed by another operand.
///
/// A value is a number literal or a closing parenthesis. An identifier is
/// never a value here, so `sin(` and `log10(` stay function calls.
fn insert_implicit_products(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len() + 4);
    let mut after_value = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            out.push(c);
            i += 1;
            continue;
        }

        let is_number = c.is_ascii_digit() || c == '.';
        let is_ident = c.is_alphabetic() || c == '_';
        if after_value && (is_number || is_ident || c == '(') {
            out.push('*');
        }

        if is_number {
            let end = number_end(&chars, i);
            out.extend(&chars[i..end]);
            after_value = true;
            i = end;
        } else if is_ident {
            let len = chars[i..]
                .iter()
                .take_while(|c| c.is_alphanumeric() || **c == '_')
                .count();
            out.extend(&chars[i..i + len]);
            after_value = false;
            i += len;
        } else {
            out.push(c);
            after_value = c == ')';
            i += 1;
        }
    }

    out
}

/// End of the number literal starting at `start`, including an exponent
/// such as `e+21` when digits follow it.
fn number_end(chars: &[char], start: usize) -> usize {
    let digit_at = |i: usize| chars.get(i).is_some_and(|c| c.is_ascii_digit());

    let mut end = start;
    while chars.get(end).is_some_and(|c| c.is_ascii_digit() || *c == '.') {
        end += 1;
    }
    if matches!(chars.get(end), Some('e' | 'E')) {
        if digit_at(end + 1) {
            end += 1;
        } else if matches!(chars.get(end + 1), Some('+' | '-')) && digit_at(end + 2) {
            end += 2;
        } else {
            return end;
        }
        while digit_at(end) {
            end += 1;
        }
    }
    end
}

fn is_operand_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

/// Byte offset where the operand preceding a postfix `!` begins.
///
/// The operand is either a parenthesized group (with any function name
/// directly in front of it) or a run of number/identifier characters.
fn operand_start(out: &str) -> Option<usize> {
    let group_start = if out.ends_with(')') {
        let mut depth = 0usize;
        let mut open = None;
        for (i, c) in out.char_indices().rev() {
            match c {
                ')' => depth += 1,
                '(' => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        open = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        open?
    } else {
        out.len()
    };

    let start = out[..group_start]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_operand_char(c))
        .last()
        .map_or(group_start, |(i, _)| i);

    (start < out.len()).then_some(start)
}

/// Function scope for `mode`: the evaluator's built-ins plus angle-aware
/// trigonometry, the real-valued extensions and the non-finite literals the
/// display can show.
///
/// `fact` raises `negative_factorial` instead of failing, since scope
/// functions can only return numbers.
fn scope(mode: AngleMode, negative_factorial: Arc<AtomicBool>) -> meval::Context<'static> {
    let trig = TrigonometryAdapter::new(mode);
    let mut ctx = meval::Context::new();

    for f in TrigFn::ALL {
        ctx.func(f.name(), trig.function(f));
    }
    ctx.func("sqrt", real_sqrt)
        .func("log", real_ln)
        .func("ln", real_ln)
        .func("log10", real_log10)
        .func("fact", move |n| {
            if n < 0.0 {
                negative_factorial.store(true, Ordering::Relaxed);
            }
            factorial(n)
        })
        .var("Infinity", f64::INFINITY)
        .var("NaN", f64::NAN);

    ctx
}

/// Real component of the principal square root.
fn real_sqrt(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x.sqrt()
    }
}

/// Real component of the principal natural logarithm.
fn real_ln(x: f64) -> f64 {
    x.abs().ln()
}

fn real_log10(x: f64) -> f64 {
    x.abs().log10()
}

/// `n!` for integers, `Γ(n + 1)` otherwise. NaN for negative arguments.
fn factorial(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }
    if n.fract() != 0.0 {
        return libm::tgamma(n + 1.0);
    }
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }
    (1..=n as u32).fold(1.0, |acc, k| acc * f64::from(k))
}

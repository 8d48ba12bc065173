//! Expression evaluation pipeline.
//!
//! - `evaluator`: glyph translation, function scope and the call into `meval`
//! - `trig`: angle-mode-aware trigonometric functions
//! - `format`: tolerance snapping, rounding and rendering of results
//! - `error`: the single evaluation error

mod error;
mod evaluator;
mod format;
mod trig;

pub use error::EvaluationError;
pub use evaluator::{
    evaluate, normalize, ExpressionEvaluator, DIVIDE_GLYPH, MINUS_GLYPH, MULTIPLY_GLYPH, PI_GLYPH,
};
pub use format::{ResultFormatter, DEFAULT_PRECISION, DEFAULT_SNAP_TOLERANCE, MAX_PRECISION};
pub use trig::{TrigFn, TrigonometryAdapter};

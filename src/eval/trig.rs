//! Angle-mode-aware trigonometry.
//!
//! In degrees mode `sin`, `cos` and `tan` read their argument as degrees and
//! `asin`, `acos` and `atan` return degrees. In radians mode all six pass
//! straight through to the `f64` functions. No other part of the crate
//! interprets the angle mode.

use crate::core::AngleMode;

/// The trigonometric functions exposed to expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl TrigFn {
    pub const ALL: [TrigFn; 6] = [
        TrigFn::Sin,
        TrigFn::Cos,
        TrigFn::Tan,
        TrigFn::Asin,
        TrigFn::Acos,
        TrigFn::Atan,
    ];

    /// Name the function is bound to in the evaluation scope.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
        }
    }

    fn is_inverse(self) -> bool {
        matches!(self, Self::Asin | Self::Acos | Self::Atan)
    }

    fn apply_radians(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
        }
    }
}

/// Trigonometric functions parameterized by an angle mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrigonometryAdapter {
    mode: AngleMode,
}

impl TrigonometryAdapter {
    pub fn new(mode: AngleMode) -> Self {
        Self { mode }
    }

    /// Evaluate `f` at `x` under this adapter's mode.
    pub fn apply(&self, f: TrigFn, x: f64) -> f64 {
        match self.mode {
            AngleMode::Radians => f.apply_radians(x),
            AngleMode::Degrees if f.is_inverse() => f.apply_radians(x).to_degrees(),
            AngleMode::Degrees => f.apply_radians(x.to_radians()),
        }
    }

    /// Closure for `f`, suitable for binding into an evaluation scope.
    pub fn function(&self, f: TrigFn) -> impl Fn(f64) -> f64 + Send + Sync + 'static {
        let adapter = *self;
        move |x| adapter.apply(f, x)
    }
}

//! Numeric result normalization.
//!
//! Trigonometric identities leave floating-point residue behind (`sin(180°)`
//! evaluates to `1.2246e-16`). Results are snapped to 0 and ±1 within a
//! tolerance, rounded to a fixed number of decimals and rendered without
//! trailing zeros, the way a JavaScript front end prints numbers.

use serde::{Deserialize, Serialize};

/// Decimal places kept by default.
pub const DEFAULT_PRECISION: usize = 10;

/// Largest supported precision; beyond this `f64` digits are noise.
pub const MAX_PRECISION: usize = 15;

/// Distance within which a result snaps to 0, 1 or -1.
pub const DEFAULT_SNAP_TOLERANCE: f64 = 1e-12;

/// Formats raw evaluator output for the display buffer.
///
/// # Example
///
/// ```rust
/// use calc_engine::eval::ResultFormatter;
///
/// let formatter = ResultFormatter::default();
/// assert_eq!(formatter.format(1.2246e-16), "0");
/// assert_eq!(formatter.format(0.1 + 0.2), "0.3");
/// assert_eq!(formatter.format(4.0), "4");
/// assert_eq!(formatter.format(f64::INFINITY), "Infinity");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultFormatter {
    precision: usize,
    tolerance: f64,
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }
}

impl ResultFormatter {
    /// Callers validate the arguments; see `EngineBuilder`.
    pub fn new(precision: usize, tolerance: f64) -> Self {
        Self {
            precision: precision.min(MAX_PRECISION),
            tolerance,
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Snap values within tolerance of 0, 1 or -1 to that exact value.
    pub fn snap(&self, raw: f64) -> f64 {
        if raw.abs() < self.tolerance {
            0.0
        } else if (raw - 1.0).abs() < self.tolerance {
            1.0
        } else if (raw + 1.0).abs() < self.tolerance {
            -1.0
        } else {
            raw
        }
    }

    /// Render a raw result. Non-finite values become `Infinity`,
    /// `-Infinity` or `NaN`.
    ///
    /// Finite values are rounded to `precision` decimals, exact ties away
    /// from zero, then written in the shortest form that reads back to the
    /// rounded value. Magnitudes of `1e21` and above, and non-zero ones
    /// below `1e-6`, use exponent notation (`1e+21`, `1.5e-7`).
    pub fn format(&self, raw: f64) -> String {
        let value = self.snap(raw);

        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            };
        }

        let rounded = if value.abs() >= EXPONENT_ABOVE {
            value
        } else {
            self.round(value)
        };
        shortest(rounded)
    }

    fn round(&self, value: f64) -> f64 {
        let value = if is_decimal_tie(value, self.precision) {
            // The next double away from zero lies past the tie
            f64::from_bits(value.to_bits() + 1)
        } else {
            value
        };
        let fixed = format!("{:.*}", self.precision, value);
        fixed.parse().unwrap_or(value)
    }
}

/// Smallest magnitude printed with an exponent.
const EXPONENT_ABOVE: f64 = 1e21;

/// Whether `value` lies exactly halfway between two multiples of
/// `10^-precision`.
///
/// A finite double `m * 2^e` with odd `m` and `e < 0` has exactly `-e`
/// fractional decimal digits and the last one is always 5.
fn is_decimal_tie(value: f64, precision: usize) -> bool {
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    exponent < 0 && exponent.unsigned_abs() == precision as u64 + 1
}

/// Shortest round-trip rendering, laid out like a JavaScript number.
fn shortest(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i64 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i64;
    let n = exponent + 1;
    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if n - 1 < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{lead}e{sign}{}", (n - 1).abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", (n - 1).abs())
        }
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

//! Conversions in and out of [`PVector`] plus the rounding family.
//!
//! ## Formats
//!
//! - **Text**: `{ x: <x>, y: <y>, z: <z> }`, written by `Display` and read
//!   back by `FromStr`. Components use the shortest round-trip digits;
//!   magnitudes of `1e21` and above or below `1e-6` switch to exponent
//!   notation with an explicit sign (`1e+21`, `1.5e-7`).
//! - **Object**: a JSON object `{"x": .., "y": .., "z": ..}`.
//! - **Array**: `[x, y, z]`; slices of two components get `z = 0`.
//! - **glam**: `DVec2` / `DVec3` in both directions; `z` is dropped going
//!   to `DVec2`.
//!
//! Lenient readers (`from_object`, `from_array`) turn missing or non-numeric
//! components into `0`. The strict readers (`FromStr`, `TryFrom<&[f64]>`)
//! report a [`PVectorError`] instead.

use std::fmt;
use std::str::FromStr;

use config::constants::{VectorConfig, DEFAULT_FIXED_PRECISION, MAX_FIXED_PRECISION};
use glam::{DVec2, DVec3};
use serde_json::{json, Value};
use tracing::debug;

use super::operand::Axis;
use super::vector::{coerce, PVector};
use crate::error::{PVectorError, PVectorResult};

// =============================================================================
// TEXT
// =============================================================================

/// Magnitudes at or above this print in exponent notation.
const EXPONENT_UPPER: f64 = 1e21;
/// Nonzero magnitudes below this print in exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Writes a component the way the text form expects: integral values carry
/// no fraction, infinities are spelled out and negative zero prints as `0`.
fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == f64::INFINITY {
        f.write_str("Infinity")
    } else if value == f64::NEG_INFINITY {
        f.write_str("-Infinity")
    } else if value == 0.0 {
        f.write_str("0")
    } else if value.abs() >= EXPONENT_UPPER || value.abs() < EXPONENT_LOWER {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for PVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ x: ")?;
        write_component(f, self.x)?;
        f.write_str(", y: ")?;
        write_component(f, self.y)?;
        f.write_str(", z: ")?;
        write_component(f, self.z)?;
        f.write_str(" }")
    }
}

impl FromStr for PVector {
    type Err = PVectorError;

    /// Parses the `Display` form. `z` may be omitted.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let v: PVector = "{ x: 4, y: 12, z: -1.5 }".parse().unwrap();
    /// assert_eq!(v, PVector::new(4.0, 12.0, -1.5));
    /// ```
    fn from_str(s: &str) -> PVectorResult<Self> {
        let parse_error = |reason: &str| PVectorError::Parse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let body = s
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| parse_error("expected surrounding braces"))?;

        let mut components = [None; 3];
        for entry in body.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, raw) = entry
                .split_once(':')
                .ok_or_else(|| parse_error("expected `axis: value` pairs"))?;
            let axis = match key.trim() {
                "x" => Axis::X,
                "y" => Axis::Y,
                "z" => Axis::Z,
                _ => return Err(parse_error("unknown axis")),
            };
            let slot = &mut components[axis as usize];
            if slot.is_some() {
                return Err(parse_error("duplicate axis"));
            }
            let raw = raw.trim();
            let value = raw.parse::<f64>().map_err(|_| PVectorError::InvalidComponent {
                axis,
                value: raw.to_string(),
            })?;
            *slot = Some(value);
        }

        match components {
            [Some(x), Some(y), z] => Ok(Self::new(x, y, z.unwrap_or(0.0))),
            _ => Err(parse_error("x and y are required")),
        }
    }
}

// =============================================================================
// OBJECT / ARRAY
// =============================================================================

impl PVector {
    /// Snapshot as a JSON object.
    ///
    /// JSON has no `NaN` or infinity; such components serialize as `null`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let obj = PVector::new(1.0, 2.0, 3.0).to_object();
    /// assert_eq!(obj["y"], 2.0);
    /// ```
    pub fn to_object(&self) -> Value {
        json!({ "x": self.x, "y": self.y, "z": self.z })
    }

    /// Reads a JSON object with `x`, `y` and optionally `z` fields, or a JSON
    /// array of numbers.
    ///
    /// Missing, `null` and non-numeric components become `0`; any other JSON
    /// value yields the zero vector.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// use serde_json::json;
    /// let v = PVector::from_object(&json!({ "x": 30, "y": 34 }));
    /// assert_eq!(v, PVector::new(30.0, 34.0, 0.0));
    /// ```
    pub fn from_object(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                let field = |axis: Axis| {
                    let key = axis.to_string();
                    coerce(map.get(&key).and_then(Value::as_f64), axis)
                };
                Self::new(field(Axis::X), field(Axis::Y), field(Axis::Z))
            }
            Value::Array(items) => {
                let item = |axis: Axis| coerce(items.get(axis as usize).and_then(Value::as_f64), axis);
                Self::new(item(Axis::X), item(Axis::Y), item(Axis::Z))
            }
            other => {
                debug!(?other, "from_object on a non-object value; using zero vector");
                Self::ZERO
            }
        }
    }

    /// Snapshot as `[x, y, z]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Reads up to three leading components; missing ones become `0`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// assert_eq!(PVector::from_array(&[4.0, 12.0]), PVector::new(4.0, 12.0, 0.0));
    /// ```
    pub fn from_array(values: &[f64]) -> Self {
        Self::from_options(
            values.first().copied(),
            values.get(1).copied(),
            values.get(2).copied(),
        )
    }
}

impl TryFrom<&[f64]> for PVector {
    type Error = PVectorError;

    /// Strict slice conversion: exactly two or three components.
    fn try_from(values: &[f64]) -> PVectorResult<Self> {
        match *values {
            [x, y] => Ok(Self::new_2d(x, y)),
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(PVectorError::InvalidLength(values.len())),
        }
    }
}

impl From<[f64; 2]> for PVector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new_2d(x, y)
    }
}

impl From<[f64; 3]> for PVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<PVector> for [f64; 3] {
    fn from(v: PVector) -> Self {
        v.to_array()
    }
}

// =============================================================================
// GLAM
// =============================================================================

impl From<DVec2> for PVector {
    fn from(v: DVec2) -> Self {
        Self::new_2d(v.x, v.y)
    }
}

impl From<DVec3> for PVector {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<PVector> for DVec2 {
    /// Drops `z`.
    fn from(v: PVector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<PVector> for DVec3 {
    fn from(v: PVector) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

// =============================================================================
// ROUNDING
// =============================================================================

impl PVector {
    /// Rounds every axis to the nearest integer, halves away from zero.
    pub fn round(&mut self) -> &mut Self {
        self.map_axes(f64::round)
    }

    /// Rounds every axis toward negative infinity.
    pub fn floor(&mut self) -> &mut Self {
        self.map_axes(f64::floor)
    }

    /// Rounds every axis toward positive infinity.
    pub fn ceil(&mut self) -> &mut Self {
        self.map_axes(f64::ceil)
    }

    /// Rounds every axis to `precision` decimal digits.
    ///
    /// Rounding works on the exact decimal expansion of the stored `f64`, so
    /// `1.115` (stored just below the midpoint) becomes `1.11`. Exact
    /// midpoints such as `2.5` or `0.125` round away from zero. Precision is
    /// capped at [`MAX_FIXED_PRECISION`]; `NaN` and infinities pass through.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new(4.211233, 5.445645, 3.687527);
    /// v.to_fixed(3);
    /// assert_eq!(v.to_array(), [4.211, 5.446, 3.688]);
    /// ```
    pub fn to_fixed(&mut self, precision: u32) -> &mut Self {
        let digits = precision.min(MAX_FIXED_PRECISION) as usize;
        self.map_axes(|value| round_decimal(value, digits))
    }

    /// [`Self::to_fixed`] with [`DEFAULT_FIXED_PRECISION`] digits.
    pub fn to_fixed_default(&mut self) -> &mut Self {
        self.to_fixed(DEFAULT_FIXED_PRECISION)
    }

    /// [`Self::to_fixed`] with the precision taken from `config`.
    pub fn to_fixed_with(&mut self, config: &VectorConfig) -> &mut Self {
        self.to_fixed(config.fixed_precision)
    }

    fn map_axes(&mut self, f: impl Fn(f64) -> f64) -> &mut Self {
        self.x = f(self.x);
        self.y = f(self.y);
        self.z = f(self.z);
        self
    }
}

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Rounds `value` to `digits` fractional decimal digits.
fn round_decimal(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();
    let target = if is_decimal_midpoint(magnitude, digits) {
        // The next double up is past the midpoint and rounds away from zero.
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };
    let rounded = format!("{target:.digits$}")
        .parse::<f64>()
        .unwrap_or(magnitude);
    rounded.copysign(value)
}

/// True when `magnitude` sits exactly halfway between two `digits`-place
/// decimals, i.e. its exact expansion is `d.ddd5` with nothing after.
fn is_decimal_midpoint(magnitude: f64, digits: usize) -> bool {
    let short = format!("{magnitude:.prec$}", prec = digits + 1);
    if !short.ends_with('5') {
        return false;
    }
    let exact = format!("{magnitude:.prec$}", prec = EXACT_DIGITS);
    exact
        .strip_prefix(short.as_str())
        .is_some_and(|rest| rest.bytes().all(|b| b == b'0'))
}

//! JS-compatible numeric stringification.
//!
//! The golden save fixtures were produced by a JavaScript engine, so
//! byte-exact round-tripping requires `Number#toString` formatting: shortest
//! round-trip digits, plain decimal inside `[1e-6, 1e21)`, exponential with
//! an explicit `+` sign outside it.

use crate::error::DecodeError;

/// Formats `x` the way JS `Number#toString` would.
pub fn js_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    let abs = x.abs();
    if abs >= 1e21 || abs < 1e-6 {
        // Rust's {:e} prints "1.5e21" / "1e-7"; JS wants "1.5e+21" / "1e-7".
        let s = format!("{:e}", x);
        match s.find('e') {
            Some(pos) if !s[pos + 1..].starts_with('-') => {
                format!("{}e+{}", &s[..pos], &s[pos + 1..])
            }
            _ => s,
        }
    } else {
        format!("{}", x)
    }
}

/// Parses a number the decoder encountered in segment `context`.
pub fn parse_f64(context: &'static str, s: &str) -> Result<f64, DecodeError> {
    match s {
        "Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        "NaN" => return Ok(f64::NAN),
        _ => {}
    }
    s.parse::<f64>().map_err(|_| DecodeError::InvalidNumber { context, value: s.to_string() })
}

/// Parses a `0`/`1` flag field.
pub fn parse_flag(context: &'static str, s: &str) -> Result<bool, DecodeError> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(DecodeError::InvalidNumber { context, value: s.to_string() }),
    }
}

pub fn flag(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

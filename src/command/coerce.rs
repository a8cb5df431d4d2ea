//! Conversie van ruwe vlagwaarden naar hun gedeclareerde type.

use super::error::ArgumentError;
use super::syntax::FlagSpec;

fn invalid(spec: &FlagSpec, value: &str) -> ArgumentError {
    ArgumentError::InvalidValue {
        flag: spec.name(),
        value: value.to_owned(),
        expected: spec.kind,
    }
}

/// Alleen eindige getallen; `nan` en `inf` worden geweigerd.
pub fn coerce_double(spec: &FlagSpec, value: &str) -> Result<f64, ArgumentError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| invalid(spec, value))
}

pub fn coerce_unsigned(spec: &FlagSpec, value: &str) -> Result<u32, ArgumentError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| invalid(spec, value))
}

pub fn coerce_boolean(spec: &FlagSpec, value: &str) -> Result<bool, ArgumentError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(spec, value)),
    }
}

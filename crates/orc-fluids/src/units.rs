//! Unit-aware numeric input parsing.
//!
//! Design parameters may be written either as plain SI numbers or as text
//! with a unit tag (`"34 C"`, `"100 kW"`, `"80 %"`). Everything here
//! converts to the canonical SI value used by the cycle evaluator.
//!
//! - **Raw text**: user input exactly as entered
//! - **Canonical value**: parsed number in SI base units
//! - **Quantity**: Temperature, TemperatureDifference, Power, Dimensionless

use std::fmt;
use thiserror::Error;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Absolute temperature (canonical: K)
    Temperature,
    /// Temperature difference such as a pinch or superheat (canonical: K)
    TemperatureDifference,
    /// Power (canonical: W)
    Power,
    /// Efficiency or other fraction, may include % (canonical: 0-1)
    Dimensionless,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::TemperatureDifference => write!(f, "Temperature Difference"),
            Self::Power => write!(f, "Power"),
            Self::Dimensionless => write!(f, "Dimensionless"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },

    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// Parse a quantity value from user input text.
///
/// A bare number is taken to already be in the canonical SI unit, except
/// for `Dimensionless` where a trailing `%` divides by 100. Unit tags are
/// matched case-insensitively.
///
/// ```
/// use orc_fluids::{Quantity, parse_quantity};
///
/// assert_eq!(parse_quantity("100 kW", Quantity::Power).unwrap(), 100e3);
/// assert_eq!(parse_quantity("80%", Quantity::Dimensionless).unwrap(), 0.8);
/// ```
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::TemperatureDifference => parse_temperature_difference(trimmed),
        Quantity::Power => parse_power(trimmed),
        Quantity::Dimensionless => parse_fraction(trimmed),
    }
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "degc" | "celsius" => value + 273.15,
        "f" | "°f" | "degf" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "degr" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K",
        });
    }

    Ok(kelvin)
}

/// Parse a temperature difference, return Kelvin.
///
/// A Celsius step equals a Kelvin step; Fahrenheit and Rankine steps are 5/9 K.
fn parse_temperature_difference(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" | "c" | "°c" | "degc" | "delta_c" | "dc" => Ok(value),
        "f" | "°f" | "degf" | "delta_f" | "df" | "r" | "°r" | "degr" => Ok(value * 5.0 / 9.0),
        _ => Err(UnitError::UnknownUnit {
            unit,
            quantity: Quantity::TemperatureDifference,
        }),
    }
}

/// Parse power, return W.
///
/// Prefixes are read case-insensitively, so `mw` is megawatts.
fn parse_power(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "w" | "watt" => Ok(value),
        "kw" => Ok(value * 1e3),
        "mw" => Ok(value * 1e6),
        "hp" => Ok(value * 745.699_872),
        _ => Err(UnitError::UnknownUnit {
            unit,
            quantity: Quantity::Power,
        }),
    }
}

/// Parse a plain fraction or a percentage.
fn parse_fraction(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.as_str() {
        "" => Ok(value),
        "%" => Ok(value / 100.0),
        other => Err(UnitError::UnknownUnit {
            unit: other.to_string(),
            quantity: Quantity::Dimensionless,
        }),
    }
}

/// Split "12.5 kW" into (12.5, "kW").
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Numeric part ends at the first character that cannot belong to a float
    let split_idx = trimmed
        .find(|c: char| {
            !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E'
        })
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    if !value.is_finite() {
        return Err(UnitError::ParseError(format!(
            "Value in '{}' is not finite",
            input
        )));
    }

    Ok((value, unit_part.to_string()))
}

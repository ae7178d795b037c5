//! Serde helpers for monetary decimals.
//!
//! The GraphQL API transports arbitrary-precision amounts as decimal strings,
//! while older clients still send plain JSON numbers. Deserialization accepts
//! both; anything else is an error, never a silent zero or NaN.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use crate::constants::{DECIMAL_PRECISION, DISPLAY_DECIMAL_PRECISION};
use crate::errors::Error;

/// Parses a wire amount into a `Decimal`.
pub fn parse_amount(raw: &str) -> Result<Decimal, Error> {
    Decimal::from_str(raw.trim())
        .map_err(|_| Error::InvalidAmount(format!("not a decimal number: '{}'", raw)))
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number or a decimal string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        Decimal::from_str(value.trim())
            .map_err(|_| E::custom(format!("invalid decimal string '{}'", value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        Decimal::from_f64_retain(value)
            .ok_or_else(|| E::custom(format!("unrepresentable number {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }
}

/// Deserializes a `Decimal` from a JSON number or a decimal string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DecimalVisitor)
}

struct OptionDecimalVisitor;

impl<'de> Visitor<'de> for OptionDecimalVisitor {
    type Value = Option<Decimal>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number, a decimal string, or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor).map(Some)
    }
}

/// Deserializes an optional `Decimal`; absent and `null` both map to `None`.
/// Combine with `#[serde(default)]` on the field.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionDecimalVisitor)
}

/// Serializes a monetary amount rounded to display precision, as a string.
pub fn serialize_amount<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&decimal.round_dp(DISPLAY_DECIMAL_PRECISION).to_string())
}

/// Serializes a rate or percentage at full computation precision, as a string.
pub fn serialize_rate<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&decimal.round_dp(DECIMAL_PRECISION).to_string())
}

/// Serializes an optional amount; `None` stays `null` so absence remains
/// distinguishable from zero on the wire.
pub fn serialize_option_amount<S>(
    value: &Option<Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(decimal) => {
            serializer.serialize_str(&decimal.round_dp(DISPLAY_DECIMAL_PRECISION).to_string())
        }
        None => serializer.serialize_none(),
    }
}

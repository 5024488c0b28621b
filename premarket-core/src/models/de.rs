use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// NSE sends most numbers as JSON numbers, but some rows carry `"-"`,
/// `"1,234.50"` or `null` instead. Numeric strings are parsed; anything
/// else becomes `None` so a single odd cell never rejects the payload.
pub fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(lenient_f64(&value))
}

/// Like [`de_lenient_f64`], but JSON numbers are kept exactly as sent so
/// an integer quantity stays an integer on output.
pub fn de_lenient_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(lenient_number(&value))
}

/// Symbols are strings; numeric codes are accepted as their text form.
pub fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn lenient_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_text(s),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

pub(crate) fn lenient_number(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let cleaned = s.trim().replace(',', "");
            match cleaned.parse::<i64>() {
                Ok(i) => Some(Number::from(i)),
                Err(_) => parse_numeric_text(s).and_then(Number::from_f64),
            }
        }
        _ => None,
    }
}

// "inf" and "NaN" parse as f64 but are text sentinels, not values.
fn parse_numeric_text(s: &str) -> Option<f64> {
    s.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

//! Lenient integer fields: absent, null, negative, or non-numeric values become 0
//! instead of failing the whole payload.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// Namespace for ids derived from legacy numeric or free-form job ids.
const LEGACY_ID_NAMESPACE: Uuid = Uuid::from_u128(0x5d8e_2a61_7c3f_4b9e_a0d4_61f2_c8b7_3e15);

/// Use with `#[serde(default, deserialize_with = "lenient::zero_on_invalid")]`.
pub fn zero_on_invalid<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_u32).unwrap_or(0))
}

/// Patch variant: `None` when the field is absent or null, otherwise the coerced value.
pub fn optional_zero_on_invalid<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(coerce_u32(&v)),
    })
}

/// Accepts a UUID string as-is. Numbers and other strings (legacy ids such as
/// `1` or a millisecond timestamp) map to a stable v5 UUID, so `1` and `"1"`
/// resolve to the same id on every load.
pub fn job_id<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(de::Error::custom(format!(
                "job id must be a string or number, got {other}"
            )))
        }
    };
    if raw.is_empty() {
        return Err(de::Error::custom("job id cannot be empty"));
    }
    Ok(Uuid::parse_str(&raw).unwrap_or_else(|_| Uuid::new_v5(&LEGACY_ID_NAMESPACE, raw.as_bytes())))
}

fn coerce_u32(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|v| v.min(u32::MAX as u64) as u32)
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .map(|f| f.min(u32::MAX as f64) as u32)
            })
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

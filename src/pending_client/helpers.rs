use serde_json::Value;

use crate::types::{PendingCount, PollFailure};

/// Join a base URL and an endpoint path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Accepts integers, integral non-negative floats and numeric strings.
pub fn count_from_value(value: &Value) -> Result<PendingCount, PollFailure> {
    match value {
        Value::Number(number) => {
            if let Some(count) = number.as_u64() {
                return Ok(PendingCount(count));
            }
            match number.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
                    Ok(PendingCount(f as u64))
                }
                _ => Err(PollFailure::Decode(format!(
                    "`pending` is not a non-negative integer: {number}"
                ))),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<u64>()
            .map(PendingCount)
            .map_err(|_| PollFailure::Decode(format!("`pending` is not numeric: {text:?}"))),
        other => Err(PollFailure::Decode(format!(
            "`pending` has unexpected type: {other}"
        ))),
    }
}

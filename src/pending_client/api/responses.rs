use serde_json::Value;

use crate::types::{PendingCount, PollFailure};

use super::super::helpers::count_from_value;

/// Body of `GET /api/pending_count`. Only a JSON object is accepted.
#[derive(Debug)]
pub struct PendingResponse {
    pub pending: Option<Value>,
}

impl PendingResponse {
    pub fn from_value(body: Value) -> Result<Self, PollFailure> {
        match body {
            Value::Object(mut fields) => Ok(Self {
                pending: fields.remove("pending"),
            }),
            other => Err(PollFailure::Decode(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    pub fn into_count(self) -> Result<PendingCount, PollFailure> {
        match self.pending {
            Some(Value::Null) | None => Err(PollFailure::MissingPending),
            Some(value) => count_from_value(&value),
        }
    }
}

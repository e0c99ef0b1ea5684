use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One guestbook record. Wire field names follow the durable record contract
/// (`name`, `message`, `date` with an ISO-8601 timestamp).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    #[serde(rename = "name")]
    pub author: String,
    #[serde(rename = "message")]
    pub body: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: i64,
        author: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Message {
            id,
            author: author.into(),
            body: body.into(),
            created_at,
        }
    }
}

/// Next record id: creation time in ms since epoch, bumped past the current
/// head id so ids stay strictly increasing even within one millisecond.
pub(crate) fn next_id(now_ms: i64, head_id: Option<i64>) -> i64 {
    match head_id {
        Some(head) if now_ms <= head => head + 1,
        _ => now_ms,
    }
}

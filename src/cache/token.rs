/// Bearer token with its absolute expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub expires_at_ms: i64, // UNIX TIMESTAMP, millis
}

impl CachedToken {
    pub fn new(value: String, expires_at_ms: i64) -> Self {
        Self { value, expires_at_ms }
    }

    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at_ms
    }
}

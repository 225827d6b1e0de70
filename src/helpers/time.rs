use chrono::Utc;
use tokio::time::Instant;

use crate::utils::constants::DEFAULT_SAFETY_MARGIN_SECS;

pub fn get_token_safety_margin_seconds(safety_margin_seconds_cms: Option<u64>) -> u64 {
    safety_margin_seconds_cms.unwrap_or(DEFAULT_SAFETY_MARGIN_SECS)
}

/// Expiry (unix millis) of a token issued now with the given lifetime.
/// A lifetime shorter than the margin yields an already expired token;
/// lifetimes past the i64 range saturate.
pub fn expiry_from_ttl_ms(now_ms: i64, expires_in_secs: u64, safety_margin_secs: u64) -> i64 {
    let ttl = i64::try_from(expires_in_secs).unwrap_or(i64::MAX);
    let margin = i64::try_from(safety_margin_secs).unwrap_or(i64::MAX);
    now_ms.saturating_add(ttl.saturating_sub(margin).saturating_mul(1000))
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn get_instant() -> Instant {
    Instant::now()
}

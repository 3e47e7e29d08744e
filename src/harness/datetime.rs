//! Time helpers for scenarios that depend on the block time, e.g., renewals.
use crate::types::{Timestamp, TimestampOutOfRange};
use chrono::{DateTime, Utc};

/// The timestamp `seconds` from now.
pub fn future_timestamp(seconds: i64) -> Result<Timestamp, TimestampOutOfRange> {
    Timestamp::try_from(Utc::now() + chrono::Duration::seconds(seconds))
}

/// Saturates at [`u64::MAX`].
pub fn ms_to_nano(ms: u64) -> u64 { ms.saturating_mul(1_000_000) }

pub fn nano_to_ms(nano: u64) -> u64 { nano / 1_000_000 }

/// Sleep until `datetime`. Returns immediately if it is in the past.
pub async fn wait_until(datetime: DateTime<Utc>) {
    if let Ok(delay) = (datetime - Utc::now()).to_std() {
        tracing::debug!(%datetime, "Waiting.");
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(ms_to_nano(1_500), 1_500_000_000);
        assert_eq!(nano_to_ms(1_500_000_999), 1_500);
        assert_eq!(ms_to_nano(u64::MAX / 1_000), u64::MAX);
    }

    #[test]
    fn future_is_after_now() {
        let now = Timestamp::try_from(Utc::now()).unwrap();
        let future = future_timestamp(60).unwrap();
        assert!(future.seconds() >= now.seconds() + 59);
        assert!(future_timestamp(-60).unwrap() < now);
    }

    #[tokio::test]
    async fn past_does_not_wait() {
        let start = std::time::Instant::now();
        wait_until(Utc::now() - chrono::Duration::seconds(10)).await;
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }
}

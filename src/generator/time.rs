//! Wall-clock helpers

use chrono::Utc;

/// Current wall-clock time in milliseconds since the Unix epoch; negative before 1970
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Clock reading as stored in [`super::SequenceState`]
///
/// Readings before 1970 clamp to 0. Once a later millisecond has been published,
/// a clamped reading looks like a clock regression and the caller spins until the
/// clock catches up; `generate` rejects such readings first whenever the epoch is
/// not itself before 1970.
#[inline(always)]
pub fn state_millis(unix_ms: i64) -> u64 {
    u64::try_from(unix_ms).unwrap_or(0)
}

/// Milliseconds between `epoch_ms` and `now_ms`; negative when the epoch is later
#[inline(always)]
pub fn elapsed_since(now_ms: i64, epoch_ms: i64) -> i64 {
    now_ms.saturating_sub(epoch_ms)
}

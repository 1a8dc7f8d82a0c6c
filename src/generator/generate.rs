//! ID generation logic

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::time::{elapsed_since, state_millis, unix_time_ms};
use super::wait::spin_until_next_ms;
use super::Snowflake;
use crate::config::MAX_TIMESTAMP;
use crate::error::SnowflakeError;

impl Snowflake {
    /// Generate a new Snowflake ID
    ///
    /// Spins on the calling thread while the current millisecond's sequence
    /// space is exhausted. Fails once the elapsed time since the epoch leaves
    /// the 41-bit range; the generator must then be rebuilt with a newer epoch.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(node_id = self.node_id)))]
    pub fn generate(&self) -> Result<u64, SnowflakeError> {
        let now = unix_time_ms();
        // an out-of-range clock never reaches the shared state
        self.checked_elapsed(now)?;

        let (now, sequence) = self.claim_sequence(state_millis(now));
        let elapsed = self.checked_elapsed(i64::try_from(now).unwrap_or(i64::MAX))?;

        Ok(self.assemble_id(elapsed, sequence))
    }

    /// Elapsed milliseconds since the epoch, if they fit the 41-bit field
    pub(crate) fn checked_elapsed(&self, unix_ms: i64) -> Result<u64, SnowflakeError> {
        let elapsed_ms = elapsed_since(unix_ms, self.config.epoch_millis());
        if !(0..=MAX_TIMESTAMP).contains(&elapsed_ms) {
            #[cfg(feature = "tracing")]
            tracing::warn!(elapsed_ms, "timestamp outside 41-bit range");
            return Err(SnowflakeError::TimestampOverflow { elapsed_ms });
        }
        Ok(elapsed_ms as u64)
    }

    /// Resolve a (Unix millisecond, sequence) pair, waiting out exhausted milliseconds
    fn claim_sequence(&self, mut now: u64) -> (u64, u16) {
        let max_seq = self.config.max_sequence_id();
        let mut sequence = self.state.resolve(now, max_seq);

        while sequence >= max_seq {
            now = spin_until_next_ms(now, self.config.spin_yield_every(), || {
                state_millis(unix_time_ms())
            });
            sequence = self.state.resolve(now, max_seq);
        }

        (now, sequence)
    }
}

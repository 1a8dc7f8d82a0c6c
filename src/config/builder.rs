//! SnowflakeConfig builder and ordered configuration options

use chrono::{DateTime, TimeZone, Utc};

use super::{SnowflakeConfig, MAX_LAYOUT_BITS, MAX_TIMESTAMP};
use crate::error::ConfigError;

/// Default configuration values
pub(super) const DEFAULT_NODE_BITS: u8 = 3; // 8 nodes
pub(super) const DEFAULT_SEQUENCE_BITS: u8 = 7; // 128 sequences per millisecond per node
pub(super) const DEFAULT_EPOCH_MS: i64 = 1288834974657; // 2010-11-04 01:42:54.657 UTC
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

// 0001-01-01T00:00:00Z, the "unset" time value
const ZERO_TIME_SECS: i64 = -62_135_596_800;

const MAX_NODE_BITS: u8 = 10;
const MAX_SEQUENCE_BITS: u8 = 12;

pub(super) fn default_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(DEFAULT_EPOCH_MS).unwrap_or_default()
}

/// A single configuration step, applied in caller order by
/// [`SnowflakeConfigBuilder::apply`] and [`crate::Snowflake::build`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnowflakeOption {
    /// Reference instant for elapsed-time computation
    Epoch(DateTime<Utc>),
    /// Width of the node field (1-10)
    NodeBits(u8),
    /// Width of the sequence field (1-12)
    SequenceBits(u8),
    /// Yield the thread every N spins while waiting for the next millisecond
    SpinYieldEvery(u32),
}

/// Builder for SnowflakeConfig
#[derive(Debug, Clone)]
pub struct SnowflakeConfigBuilder {
    pub(super) epoch: DateTime<Utc>,
    pub(super) node_bits: u8,
    pub(super) sequence_bits: u8,
    pub(super) spin_yield_every: u32,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: default_epoch(),
            node_bits: DEFAULT_NODE_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the epoch all timestamps are measured from
    ///
    /// The value is normalized to UTC. Rejected when it is the zero time value,
    /// lies after the current time, or is more than 2^41-1 ms in the past.
    pub fn epoch<Tz: TimeZone>(mut self, epoch: DateTime<Tz>) -> Result<Self, ConfigError> {
        let epoch = epoch.with_timezone(&Utc);
        validate_epoch(epoch, Utc::now())?;
        self.epoch = epoch;
        Ok(self)
    }

    /// Set the number of bits for node ID (1-10)
    pub fn node_bits(mut self, bits: u8) -> Result<Self, ConfigError> {
        if !(1..=MAX_NODE_BITS).contains(&bits) {
            return Err(ConfigError::InvalidNodeBits { bits });
        }
        self.node_bits = bits;
        Ok(self)
    }

    /// Set the number of bits for the per-millisecond sequence (1-12)
    pub fn sequence_bits(mut self, bits: u8) -> Result<Self, ConfigError> {
        if !(1..=MAX_SEQUENCE_BITS).contains(&bits) {
            return Err(ConfigError::InvalidSequenceBits { bits });
        }
        self.sequence_bits = bits;
        Ok(self)
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Apply one option
    pub fn apply(self, option: SnowflakeOption) -> Result<Self, ConfigError> {
        match option {
            SnowflakeOption::Epoch(epoch) => self.epoch(epoch),
            SnowflakeOption::NodeBits(bits) => self.node_bits(bits),
            SnowflakeOption::SequenceBits(bits) => self.sequence_bits(bits),
            SnowflakeOption::SpinYieldEvery(n) => Ok(self.spin_yield_every(n)),
        }
    }

    /// Apply options in order, stopping at the first failure
    pub fn apply_all<I>(self, options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = SnowflakeOption>,
    {
        options
            .into_iter()
            .try_fold(self, |builder, option| builder.apply(option))
    }

    /// Build the final SnowflakeConfig
    ///
    /// Fails when node bits plus sequence bits exceed 12.
    pub fn build(self) -> Result<SnowflakeConfig, ConfigError> {
        if self.node_bits + self.sequence_bits > MAX_LAYOUT_BITS {
            return Err(ConfigError::LayoutTooWide {
                node_bits: self.node_bits,
                sequence_bits: self.sequence_bits,
            });
        }
        Ok(SnowflakeConfig::from_builder(self))
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_epoch(epoch: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), ConfigError> {
    if Some(epoch) == DateTime::from_timestamp(ZERO_TIME_SECS, 0) {
        return Err(ConfigError::ZeroEpoch);
    }
    if epoch > now {
        return Err(ConfigError::EpochInFuture { epoch });
    }
    let elapsed_ms = now.timestamp_millis() - epoch.timestamp_millis();
    if elapsed_ms > MAX_TIMESTAMP {
        return Err(ConfigError::EpochExpired { elapsed_ms });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    #[test]
    fn test_validate_epoch() {
        let now = Utc::now();
        let zero = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(validate_epoch(zero, now), Err(ConfigError::ZeroEpoch));
        assert_eq!(validate_epoch(now, now), Ok(()));
        // 1970-01-01 is a real epoch, still inside the 41-bit lifetime
        assert_eq!(validate_epoch(DateTime::from_timestamp(0, 0).unwrap(), now), Ok(()));

        let ancient = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 1).unwrap();
        assert!(matches!(
            validate_epoch(ancient, now),
            Err(ConfigError::EpochExpired { .. })
        ));

        let future = now + Duration::hours(1);
        assert_eq!(
            validate_epoch(future, now),
            Err(ConfigError::EpochInFuture { epoch: future })
        );

        let edge = now - Duration::milliseconds(MAX_TIMESTAMP);
        assert_eq!(validate_epoch(edge, now), Ok(()));

        let expired = edge - Duration::milliseconds(1);
        assert_eq!(
            validate_epoch(expired, now),
            Err(ConfigError::EpochExpired {
                elapsed_ms: MAX_TIMESTAMP + 1
            })
        );
    }

    #[test]
    fn test_epoch_normalized_to_utc() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2020, 1, 1, 8, 0, 0).unwrap();
        let builder = SnowflakeConfigBuilder::new().epoch(local).unwrap();
        assert_eq!(
            builder.epoch,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_apply_all_stops_at_first_error() {
        let err = SnowflakeConfigBuilder::new()
            .apply_all([
                SnowflakeOption::NodeBits(4),
                SnowflakeOption::SequenceBits(0),
                SnowflakeOption::NodeBits(11),
            ])
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidSequenceBits { bits: 0 });
    }

    #[test]
    fn test_later_option_overrides_earlier() {
        let builder = SnowflakeConfigBuilder::new()
            .apply_all([SnowflakeOption::NodeBits(4), SnowflakeOption::NodeBits(2)])
            .unwrap();
        assert_eq!(builder.node_bits, 2);
    }
}

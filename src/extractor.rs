use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::config::SnowflakeConfig;

/// Fields recovered from a Snowflake ID
///
/// `timestamp` counts milliseconds since the generator's epoch, not since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedId {
    pub sequence: u16,
    pub node: u16,
    pub timestamp: u64,
    epoch: DateTime<Utc>,
}

impl ParsedId {
    /// Absolute time the ID was generated at: epoch + timestamp milliseconds
    ///
    /// Returns `None` only for foreign IDs whose timestamp field lies outside
    /// the range chrono can represent.
    pub fn wall_clock_time(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp).ok()?;
        self.epoch
            .checked_add_signed(Duration::try_milliseconds(millis)?)
    }

    /// Epoch the timestamp field is relative to
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }
}

impl fmt::Display for ParsedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timestamp={} node={} sequence={}",
            self.timestamp, self.node, self.sequence
        )
    }
}

/// Snowflake component extractor
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    config: SnowflakeConfig,
}

impl SnowflakeExtractor {
    /// Create a new extractor for the given layout
    pub fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    /// Extract timestamp component from an ID
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        id >> self.config.timestamp_shift()
    }

    /// Extract node component from an ID
    #[inline(always)]
    pub fn node(&self, id: u64) -> u16 {
        let shift = self.config.node_shift();
        ((id & ((self.config.max_node_id() as u64) << shift)) >> shift) as u16
    }

    /// Extract sequence component from an ID
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u16 {
        (id & self.config.max_sequence_id() as u64) as u16
    }

    /// Decompose an ID into its components: timestamp, node ID, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u16, u16) {
        (self.timestamp(id), self.node(id), self.sequence(id))
    }

    /// Parse an ID into a [`ParsedId`] carrying this layout's epoch
    ///
    /// No check is made that `id` came from a compatible layout.
    pub fn parse(&self, id: u64) -> ParsedId {
        let (timestamp, node, sequence) = self.decompose(id);
        ParsedId {
            sequence,
            node,
            timestamp,
            epoch: self.config.epoch(),
        }
    }
}

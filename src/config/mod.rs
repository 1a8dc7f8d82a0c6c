//! Configuration for the Snowflake generator

mod builder;

use chrono::{DateTime, Utc};

pub use builder::{SnowflakeConfigBuilder, SnowflakeOption};
use builder::{default_epoch, DEFAULT_NODE_BITS, DEFAULT_SEQUENCE_BITS, DEFAULT_SPIN_YIELD_EVERY};

/// Width of the timestamp field
pub const TIMESTAMP_BITS: u8 = 41;

/// Largest elapsed-millisecond value the timestamp field can hold
pub const MAX_TIMESTAMP: i64 = (1i64 << TIMESTAMP_BITS) - 1;

/// Upper bound on node bits plus sequence bits; keeps every id below 2^53
pub const MAX_LAYOUT_BITS: u8 = 12;

/// Frozen bit layout of a Snowflake generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowflakeConfig {
    epoch: DateTime<Utc>,
    epoch_ms: i64,
    node_bits: u8,
    sequence_bits: u8,
    node_shift: u8,
    timestamp_shift: u8,
    node_mask: u16,
    sequence_mask: u16,
    spin_yield_every: u32,
}

impl SnowflakeConfig {
    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u16 {
        ((1u32 << bits) - 1) as u16
    }

    /// Derive shifts and masks without validating the epoch
    pub(crate) fn new(epoch: DateTime<Utc>, node_bits: u8, sequence_bits: u8) -> Self {
        Self {
            epoch,
            epoch_ms: epoch.timestamp_millis(),
            node_bits,
            sequence_bits,
            node_shift: sequence_bits,
            timestamp_shift: sequence_bits + node_bits,
            node_mask: Self::calculate_mask(node_bits),
            sequence_mask: Self::calculate_mask(sequence_bits),
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        let mut cfg = Self::new(b.epoch, b.node_bits, b.sequence_bits);
        cfg.spin_yield_every = b.spin_yield_every;
        cfg
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_ms
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.node_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub const fn max_node_id(&self) -> u16 {
        self.node_mask
    }

    #[inline(always)]
    pub const fn max_sequence_id(&self) -> u16 {
        self.sequence_mask
    }

    #[inline(always)]
    pub const fn node_shift(&self) -> u8 {
        self.node_shift
    }

    #[inline(always)]
    pub const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self::new(default_epoch(), DEFAULT_NODE_BITS, DEFAULT_SEQUENCE_BITS)
    }
}

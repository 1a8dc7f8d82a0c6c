use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors raised while validating a generator layout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Epoch was left at the zero time value
    #[error("Epoch cannot be the zero time value")]
    ZeroEpoch,
    /// Epoch lies after the current wall-clock time
    #[error("Epoch {epoch} is later than the current time")]
    EpochInFuture { epoch: DateTime<Utc> },
    /// Epoch is so old that the 41-bit timestamp field is already exhausted
    #[error("Epoch is {elapsed_ms} milliseconds in the past, exceeding the 41-bit timestamp lifetime (~69 years)")]
    EpochExpired { elapsed_ms: i64 },
    /// Node bits out of the supported range [1, 10]
    #[error("Node bits {bits} must be between 1 and 10")]
    InvalidNodeBits { bits: u8 },
    /// Sequence bits out of the supported range [1, 12]
    #[error("Sequence bits {bits} must be between 1 and 12")]
    InvalidSequenceBits { bits: u8 },
    /// Node and sequence fields together wider than 12 bits
    #[error("Node bits ({node_bits}) plus sequence bits ({sequence_bits}) cannot be greater than 12")]
    LayoutTooWide { node_bits: u8, sequence_bits: u8 },
}

/// Represents errors that can occur during Snowflake operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnowflakeError {
    /// Layout validation failed
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Error when node ID is zero or exceeds the maximum allowed value
    #[error("Node ID {node_id} is invalid. Allowed range is 1 to {max}")]
    InvalidNodeId { node_id: u16, max: u16 },
    /// Elapsed time since the epoch no longer fits in 41 bits
    #[error("Elapsed time {elapsed_ms} ms since epoch is outside the 41-bit timestamp range, please check the epoch")]
    TimestampOverflow { elapsed_ms: i64 },
}

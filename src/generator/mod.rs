//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Packed atomic (millisecond, sequence) state and its resolver
//! - `time` - Wall-clock time utilities
//! - `wait` - Busy-wait for the next millisecond
//! - `generate` - ID generation logic

mod generate;
pub(crate) mod state;
pub(crate) mod time;
mod wait;

use std::sync::Arc;

use crate::config::{SnowflakeConfig, SnowflakeOption};
use crate::error::SnowflakeError;
use crate::extractor::{ParsedId, SnowflakeExtractor};

pub use state::SequenceState;

/// Snowflake ID generator bound to one node ID and one frozen layout
#[derive(Debug, Clone)]
pub struct Snowflake {
    state: Arc<SequenceState>,
    node_prefix: u64,
    node_id: u16,
    config: SnowflakeConfig,
    extract: SnowflakeExtractor,
}

impl Snowflake {
    /// Create with default configuration
    pub fn new(node_id: u16) -> Result<Self, SnowflakeError> {
        Self::with_config(node_id, SnowflakeConfig::default())
    }

    /// Apply `options` in order over the defaults, then validate the layout and node ID
    ///
    /// The first failing option aborts construction with its error.
    pub fn build<I>(node_id: u16, options: I) -> Result<Self, SnowflakeError>
    where
        I: IntoIterator<Item = SnowflakeOption>,
    {
        let config = SnowflakeConfig::builder().apply_all(options)?.build()?;
        Self::with_config(node_id, config)
    }

    /// Create with a prepared configuration, sharing the process-wide sequence state
    pub fn with_config(node_id: u16, config: SnowflakeConfig) -> Result<Self, SnowflakeError> {
        Self::with_state(node_id, config, SequenceState::global())
    }

    /// Create with an explicitly scoped sequence state
    ///
    /// IDs are only guaranteed distinct among generators sharing `state`.
    pub fn with_state(
        node_id: u16,
        config: SnowflakeConfig,
        state: Arc<SequenceState>,
    ) -> Result<Self, SnowflakeError> {
        Self::validate_node_id(node_id, &config)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            node_id,
            epoch = %config.epoch(),
            node_bits = config.node_bits(),
            sequence_bits = config.sequence_bits(),
            "snowflake generator created"
        );

        Ok(Self {
            state,
            node_prefix: (node_id as u64) << config.node_shift(),
            node_id,
            config,
            extract: SnowflakeExtractor::new(config),
        })
    }

    fn validate_node_id(node_id: u16, config: &SnowflakeConfig) -> Result<(), SnowflakeError> {
        let max = config.max_node_id();
        if node_id == 0 || node_id > max {
            return Err(SnowflakeError::InvalidNodeId { node_id, max });
        }
        Ok(())
    }

    #[inline(always)]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    /// Layout frozen at construction
    #[inline(always)]
    pub const fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    #[inline(always)]
    pub const fn extractor(&self) -> &SnowflakeExtractor {
        &self.extract
    }

    /// Decompose an ID produced with this generator's layout
    #[inline]
    pub fn parse(&self, id: u64) -> ParsedId {
        self.extract.parse(id)
    }

    /// Sequence state this generator draws from
    pub fn state(&self) -> &Arc<SequenceState> {
        &self.state
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, elapsed: u64, sequence: u16) -> u64 {
        (elapsed << self.config.timestamp_shift()) | self.node_prefix | (sequence as u64)
    }
}

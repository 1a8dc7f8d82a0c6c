//! # flakegen
//!
//! Lock-free generator for Snowflake-style 64-bit identifiers.
//!
//! Layout of every ID, most significant bit first:
//!
//! ```text
//! [ unused ][ 41-bit ms since epoch ][ node bits ][ sequence bits ]
//! ```
//!
//! Node and sequence widths are configurable (1-10 and 1-12 bits) but together
//! may not exceed 12 bits, so every ID stays below 2^53 and survives a round
//! trip through a JavaScript number.
//!
//! ```no_run
//! use flakegen::{Snowflake, SnowflakeOption};
//!
//! let generator = Snowflake::build(1, [SnowflakeOption::NodeBits(4)])?;
//! let id = generator.generate()?;
//! let parsed = generator.parse(id);
//! assert_eq!(parsed.node, 1);
//! # Ok::<(), flakegen::SnowflakeError>(())
//! ```
//!
//! All generators created through [`Snowflake::new`], [`Snowflake::build`] or
//! [`Snowflake::with_config`] draw sequence numbers from one process-wide
//! [`SequenceState`], so IDs stay distinct across instances even within the
//! same millisecond.

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

pub use config::{
    SnowflakeConfig, SnowflakeConfigBuilder, SnowflakeOption, MAX_LAYOUT_BITS, MAX_TIMESTAMP,
    TIMESTAMP_BITS,
};
pub use error::{ConfigError, SnowflakeError};
pub use extractor::{ParsedId, SnowflakeExtractor};
pub use generator::{SequenceState, Snowflake};

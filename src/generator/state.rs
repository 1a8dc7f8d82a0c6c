//! Process-wide sequence state
//!
//! Packs the last issued Unix millisecond (upper 48 bits) and the last issued
//! sequence (lower 16 bits) into one `AtomicU64`, so both fields move together
//! in a single compare-and-swap.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

static GLOBAL: Lazy<Arc<SequenceState>> = Lazy::new(|| Arc::new(SequenceState::new()));

/// Combined state: upper 48 bits = timestamp, lower 16 bits = sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State(u64);

impl State {
    /// Number of bits used for sequence
    pub const SEQ_BITS: u32 = 16;

    /// Mask to extract sequence from raw value
    pub const SEQ_MASK: u64 = (1 << Self::SEQ_BITS) - 1;

    /// Create new state from timestamp and sequence
    #[inline(always)]
    pub const fn new(timestamp: u64, sequence: u16) -> Self {
        Self((timestamp << Self::SEQ_BITS) | (sequence as u64))
    }

    /// Extract timestamp from state
    #[inline(always)]
    pub const fn timestamp(self) -> u64 {
        self.0 >> Self::SEQ_BITS
    }

    /// Extract sequence from state
    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        (self.0 & Self::SEQ_MASK) as u16
    }

    /// Get raw u64 value for atomic operations
    #[inline(always)]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Create state from raw u64 value
    #[inline(always)]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Last issued (millisecond, sequence) pair shared by every generator holding it
///
/// Generators built through [`crate::Snowflake::new`], [`crate::Snowflake::build`]
/// and [`crate::Snowflake::with_config`] share [`SequenceState::global`], which makes
/// it the single serialization point for all of them. Pass a separate instance to
/// [`crate::Snowflake::with_state`] to scope uniqueness to a smaller group.
#[derive(Debug, Default)]
pub struct SequenceState {
    word: AtomicU64,
}

impl SequenceState {
    pub const fn new() -> Self {
        Self {
            word: AtomicU64::new(0),
        }
    }

    /// The process-wide instance
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Claim a sequence number for Unix millisecond `ms`.
    ///
    /// Returns `max_sequence` when no sequence can be issued for `ms`, either
    /// because the millisecond is exhausted or because a later millisecond was
    /// already claimed. Any other value is unique for `ms` among all callers
    /// sharing this state.
    pub fn resolve(&self, ms: u64, max_sequence: u16) -> u16 {
        loop {
            let current = State::from_raw(self.word.load(Ordering::Acquire));
            let last = current.timestamp();

            if last > ms {
                #[cfg(feature = "tracing")]
                tracing::trace!(last, ms, "clock behind last issued millisecond");
                return max_sequence;
            }

            let mut next = 0;
            if last == ms {
                next = current.sequence().saturating_add(1);
                if next > max_sequence {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(ms, "sequence exhausted");
                    return max_sequence;
                }
            }

            if self.cas(current, State::new(ms, next)) {
                return next;
            }
        }
    }

    /// Snapshot of the last issued (millisecond, sequence) pair
    pub fn last(&self) -> (u64, u16) {
        let current = State::from_raw(self.word.load(Ordering::Acquire));
        (current.timestamp(), current.sequence())
    }

    #[inline(always)]
    fn cas(&self, expected: State, new: State) -> bool {
        self.word
            .compare_exchange_weak(expected.raw(), new.raw(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

//! Busy-wait for the wall clock to leave an exhausted millisecond
//!
//! The wait spins on the calling thread; it never sleeps and has no timeout.

use std::thread;

/// Spin until `get_time` reports a value greater than `from_timestamp`
///
/// Yields the thread every `yield_every` iterations; 0 disables yielding.
#[inline]
pub fn spin_until_next_ms<F>(from_timestamp: u64, yield_every: u32, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    let mut spins: u32 = 0;
    loop {
        let now = get_time();
        if now > from_timestamp {
            return now;
        }

        std::hint::spin_loop();
        spins = spins.wrapping_add(1);

        if yield_every != 0 && spins % yield_every == 0 {
            thread::yield_now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_immediate_advance() {
        assert_eq!(spin_until_next_ms(100, 16, || 200), 200);
    }

    #[test]
    fn test_spins_until_clock_moves() {
        let calls = Cell::new(0u64);
        let next = spin_until_next_ms(100, 4, || {
            calls.set(calls.get() + 1);
            if calls.get() < 50 {
                100
            } else {
                101
            }
        });
        assert_eq!(next, 101);
        assert_eq!(calls.get(), 50);
    }

    #[test]
    fn test_ignores_earlier_readings() {
        let calls = Cell::new(0u64);
        let next = spin_until_next_ms(100, 0, || {
            calls.set(calls.get() + 1);
            match calls.get() {
                1..=10 => 90,
                _ => 102,
            }
        });
        assert_eq!(next, 102);
    }

    #[test]
    fn test_real_clock_progresses() {
        use crate::generator::time::{state_millis, unix_time_ms};

        let from = state_millis(unix_time_ms());
        let next = spin_until_next_ms(from, 16, || state_millis(unix_time_ms()));
        assert!(next > from);
    }
}

//! High-resolution monotonic timing
//!
//! Ticks are nanoseconds since a process-wide anchor `Instant`, so the tick
//! frequency is fixed at 1 GHz regardless of the platform clock source.

use std::sync::OnceLock;
use std::time::Instant;

/// Opaque monotonic counter reading
pub type Ticks = u64;

const TICKS_PER_SECOND: u64 = 1_000_000_000;

static ANCHOR: OnceLock<Instant> = OnceLock::new();

pub fn now() -> Ticks {
    let anchor = *ANCHOR.get_or_init(Instant::now);
    anchor.elapsed().as_nanos() as Ticks
}

/// Ticks per second
pub fn frequency() -> u64 {
    TICKS_PER_SECOND
}

pub fn elapsed_ms(start: Ticks, finish: Ticks) -> f64 {
    elapsed_ms_with_frequency(start, finish, frequency())
}

/// `(finish - start) * 1000 / frequency`. Not clamped: a clock that went
/// backwards yields a negative duration.
pub fn elapsed_ms_with_frequency(start: Ticks, finish: Ticks, frequency: u64) -> f64 {
    (finish as f64 - start as f64) * 1000.0 / frequency as f64
}

/// Start/finish pair captured around one measured scope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    pub start: Ticks,
    pub finish: Ticks,
    pub frequency: u64,
}

impl TimingSample {
    pub fn elapsed_ms(&self) -> f64 {
        elapsed_ms_with_frequency(self.start, self.finish, self.frequency)
    }
}

/// Time `f`, including the drop of everything it owns.
///
/// The finish sample is taken after `f` has returned, so locals created
/// inside the closure are already destroyed. Only the returned value
/// outlives the measured interval.
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, TimingSample) {
    let start = now();
    let output = f();
    let finish = now();
    (output, TimingSample { start, finish, frequency: frequency() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_ms_exact() {
        assert_eq!(elapsed_ms_with_frequency(1_000, 501_000, 1_000_000), 500.0);
        assert_eq!(elapsed_ms_with_frequency(0, 500_000, 1_000_000), 500.0);
    }

    #[test]
    fn test_elapsed_ms_nanosecond_ticks() {
        assert_eq!(frequency(), 1_000_000_000);
        assert_eq!(elapsed_ms(0, 2_500_000), 2.5);
    }

    #[test]
    fn test_elapsed_ms_not_clamped() {
        assert_eq!(elapsed_ms_with_frequency(2_000, 1_000, 1_000), -1000.0);
        assert_eq!(elapsed_ms(7, 7), 0.0);
    }

    #[test]
    fn test_now_is_monotonic() {
        let a = now();
        let b = now();
        assert!(b >= a);
    }

    #[test]
    fn test_measure_covers_closure() {
        let (value, sample) = measure(|| {
            std::thread::sleep(Duration::from_millis(5));
            7
        });
        assert_eq!(value, 7);
        assert_eq!(sample.frequency, frequency());
        assert!(sample.finish >= sample.start);
        assert!(sample.elapsed_ms() >= 5.0, "elapsed {}", sample.elapsed_ms());
    }

    #[test]
    fn test_measure_includes_drop() {
        struct SlowDrop;
        impl Drop for SlowDrop {
            fn drop(&mut self) {
                std::thread::sleep(Duration::from_millis(5));
            }
        }

        let ((), sample) = measure(|| {
            let _guard = SlowDrop;
        });
        assert!(sample.elapsed_ms() >= 5.0, "drop not timed: {}", sample.elapsed_ms());
    }
}

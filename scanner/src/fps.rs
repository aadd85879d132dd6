//! Per-frame rate measurement.

use std::time::{Duration, Instant};

/// Frames per second for a single iteration lasting `elapsed`.
///
/// Rounded to the nearest integer, ties to even. `None` for a zero-length
/// interval, which has no finite rate.
pub fn fps_from_elapsed(elapsed: Duration) -> Option<u32> {
    let seconds = elapsed.as_secs_f64();
    if seconds <= 0.0 {
        return None;
    }
    // Float to int casts saturate, so sub-nanosecond readings cap at u32::MAX.
    Some((1.0 / seconds).round_ties_even() as u32)
}

/// Stopwatch started at the top of an iteration.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    started: Instant,
}

impl FrameTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Rate implied by the time since [`FrameTimer::start`].
    pub fn fps(&self) -> Option<u32> {
        fps_from_elapsed(self.started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_from_elapsed() {
        assert_eq!(fps_from_elapsed(Duration::from_millis(40)), Some(25));
        assert_eq!(fps_from_elapsed(Duration::from_secs(2)), Some(0));
        assert_eq!(fps_from_elapsed(Duration::from_micros(33_333)), Some(30));
    }

    #[test]
    fn test_fps_rounds_ties_to_even() {
        // 1 / 0.4 = 2.5 -> 2
        assert_eq!(fps_from_elapsed(Duration::from_millis(400)), Some(2));
        // 1 / (2/7) = 3.5 -> 4
        assert_eq!(fps_from_elapsed(Duration::from_nanos(285_714_286)), Some(4));
    }

    #[test]
    fn test_zero_interval_has_no_rate() {
        assert_eq!(fps_from_elapsed(Duration::ZERO), None);
    }

    #[test]
    fn test_timer_reports_a_rate() {
        let timer = FrameTimer::start();
        std::thread::sleep(Duration::from_millis(5));
        let fps = timer.fps().unwrap();
        assert!(fps <= 200);
    }
}

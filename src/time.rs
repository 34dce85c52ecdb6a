//! Time sources and frame statistics.
//!
//! The frame loop never reads the system clock directly; it asks a
//! [`Clock`]. [`SystemClock`] is backed by [`Instant`], [`ManualClock`] is
//! advanced by hand so loop behavior can be tested deterministically.
//!
//! # Example
//!
//! ```
//! use interlines::time::{Clock, FrameStats, ManualClock};
//!
//! let clock = ManualClock::new();
//! let mut stats = FrameStats::new(clock.now_ms());
//!
//! for frame in 1..=30 {
//!     clock.set(frame as f64 * 1000.0 / 30.0);
//!     stats.record_frame(clock.now_ms(), 0);
//! }
//! assert_eq!(stats.fps(), 30);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> f64;
}

/// Wall-clock time measured from the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to a frame loop.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Interval over which FPS is measured.
pub const FPS_WINDOW_MS: f64 = 1000.0;

/// Frame counter and FPS measurement.
#[derive(Debug, Clone)]
pub struct FrameStats {
    /// Frames since the last FPS measurement.
    frame_count: u32,
    /// Time of the last FPS measurement.
    last_time_ms: f64,
    /// Last computed FPS.
    fps: u32,
    /// Connections drawn in the most recent frame.
    connections: usize,
    /// Total frames recorded.
    total_frames: u64,
}

impl FrameStats {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frame_count: 0,
            last_time_ms: now_ms,
            fps: 0,
            connections: 0,
            total_frames: 0,
        }
    }

    /// Record one rendered frame.
    ///
    /// Returns the new FPS value when at least [`FPS_WINDOW_MS`] has passed
    /// since the previous measurement, `None` otherwise.
    pub fn record_frame(&mut self, now_ms: f64, connections: usize) -> Option<u32> {
        self.connections = connections;
        self.frame_count += 1;
        self.total_frames += 1;

        let elapsed = now_ms - self.last_time_ms;
        if elapsed < FPS_WINDOW_MS {
            return None;
        }

        self.fps = (self.frame_count as f64 * 1000.0 / elapsed).round() as u32;
        self.frame_count = 0;
        self.last_time_ms = now_ms;
        Some(self.fps)
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[inline]
    pub fn connections(&self) -> usize {
        self.connections
    }

    #[inline]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock::new();
        let before = clock.now_ms();
        thread::sleep(Duration::from_millis(10));
        assert!(clock.now_ms() > before);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(16.0);
        other.advance(4.0);
        assert_eq!(clock.now_ms(), 20.0);
        other.set(5.0);
        assert_eq!(clock.now_ms(), 5.0);
    }

    #[test]
    fn test_sixty_frames_in_one_second() {
        let mut stats = FrameStats::new(0.0);
        let mut published = None;
        for k in 1..=60 {
            let now = k as f64 * 1000.0 / 60.0;
            published = stats.record_frame(now, 12);
            if k < 60 {
                assert_eq!(published, None);
            }
        }
        assert_eq!(published, Some(60));
        assert_eq!(stats.fps(), 60);
        assert_eq!(stats.connections(), 12);
    }

    #[test]
    fn test_fps_rounds() {
        let mut stats = FrameStats::new(0.0);
        for _ in 0..44 {
            stats.record_frame(500.0, 0);
        }
        // 45 frames over 1.5s is 30 fps.
        assert_eq!(stats.record_frame(1500.0, 0), Some(30));

        // 31 frames over 1.1s is 28.18 fps.
        for _ in 0..30 {
            stats.record_frame(1600.0, 0);
        }
        assert_eq!(stats.record_frame(2600.0, 0), Some(28));
    }

    #[test]
    fn test_window_resets_after_measurement() {
        let mut stats = FrameStats::new(0.0);
        assert_eq!(stats.record_frame(1000.0, 3), Some(1));
        assert_eq!(stats.record_frame(1999.0, 4), None);
        assert_eq!(stats.record_frame(2000.0, 5), Some(2));
        assert_eq!(stats.total_frames(), 3);
        assert_eq!(stats.connections(), 5);
    }
}

//! The frame loop: update, render, publish stats.
//!
//! A [`FrameLoop`] owns the [`FieldState`] and a [`Clock`]. Each call to
//! [`FrameLoop::frame`] runs one update step, one render pass and one stats
//! tick. The windowed front end calls it once per redraw; headless hosts can
//! call [`FrameLoop::run`] until the loop is stopped through its
//! [`StopHandle`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::controls::StatsDisplay;
use crate::field::FieldState;
use crate::render::{render_frame, Canvas};
use crate::time::{Clock, FrameStats, SystemClock};

/// Cancels a running frame loop.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Drives a [`FieldState`] one frame at a time.
pub struct FrameLoop<C: Clock = SystemClock> {
    state: FieldState,
    stats: FrameStats,
    clock: C,
    stop: StopHandle,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(state: FieldState, clock: C) -> Self {
        Self::with_stop_handle(state, clock, StopHandle::new())
    }

    /// Create a loop that is cancelled through an existing handle.
    pub fn with_stop_handle(state: FieldState, clock: C, stop: StopHandle) -> Self {
        let stats = FrameStats::new(clock.now_ms());
        Self {
            state,
            stats,
            clock,
            stop,
        }
    }

    #[inline]
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut FieldState {
        &mut self.state
    }

    #[inline]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.stop.is_stopped()
    }

    /// Run one frame and return the number of connections drawn.
    ///
    /// `display`, if present, receives the connection count every frame and
    /// the FPS whenever a new measurement completes.
    pub fn frame<K: Canvas + ?Sized>(
        &mut self,
        canvas: &mut K,
        display: Option<&mut (dyn StatsDisplay + '_)>,
    ) -> usize {
        self.state.update();

        let now = self.clock.now_ms();
        let connections = render_frame(&self.state, canvas, now);
        let fps = self.stats.record_frame(now, connections);

        if let Some(display) = display {
            if let Some(fps) = fps {
                display.show_fps(fps);
            }
            display.show_connections(connections);
        }
        if let Some(fps) = fps {
            log::debug!("{} fps, {} connections", fps, connections);
        }

        connections
    }

    /// Run frames back to back until stopped or `max_frames` have run.
    ///
    /// Returns the number of frames run. Frames are not paced; the caller's
    /// clock decides what time each frame sees.
    pub fn run<K: Canvas + ?Sized>(
        &mut self,
        canvas: &mut K,
        mut display: Option<&mut dyn StatsDisplay>,
        max_frames: Option<u64>,
    ) -> u64 {
        let mut frames = 0;
        while self.is_running() && max_frames.map_or(true, |max| frames < max) {
            self.frame(canvas, display.as_deref_mut());
            frames += 1;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::render::DrawList;
    use crate::time::ManualClock;

    #[derive(Default)]
    struct Slots {
        fps: Vec<u32>,
        connections: Vec<usize>,
    }

    impl StatsDisplay for Slots {
        fn show_fps(&mut self, fps: u32) {
            self.fps.push(fps);
        }

        fn show_connections(&mut self, connections: usize) {
            self.connections.push(connections);
        }
    }

    /// A canvas that stops the loop after a number of clears.
    struct StopAfter {
        remaining: u32,
        stop: StopHandle,
    }

    impl Canvas for StopAfter {
        fn clear(&mut self, _: f32, _: f32) {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.stop.stop();
            }
        }
        fn gradient_line(&mut self, _: glam::Vec2, _: glam::Vec2, _: [crate::render::GradientStop; 3], _: f32) {}
        fn line(&mut self, _: glam::Vec2, _: glam::Vec2, _: crate::color::Rgba, _: f32) {}
        fn fill_circle(&mut self, _: glam::Vec2, _: f32, _: crate::color::Rgba) {}
        fn stroke_circle(&mut self, _: glam::Vec2, _: f32, _: crate::color::Rgba, _: f32) {}
    }

    fn field() -> FieldState {
        FieldState::with_seed(FieldConfig::default(), 800.0, 600.0, 5)
    }

    #[test]
    fn test_frame_publishes_stats() {
        let clock = ManualClock::new();
        let mut frame_loop = FrameLoop::new(field(), clock.clone());
        let mut canvas = DrawList::new();
        let mut slots = Slots::default();

        for k in 1..=60 {
            clock.set(k as f64 * 1000.0 / 60.0);
            frame_loop.frame(&mut canvas, Some(&mut slots));
        }

        assert_eq!(slots.fps, vec![60]);
        assert_eq!(slots.connections.len(), 60);
        assert_eq!(frame_loop.stats().fps(), 60);
        assert_eq!(
            frame_loop.stats().connections(),
            *slots.connections.last().unwrap()
        );
    }

    #[test]
    fn test_frame_without_display() {
        let mut frame_loop = FrameLoop::new(field(), ManualClock::new());
        let mut canvas = DrawList::new();
        frame_loop.frame(&mut canvas, None);
        assert_eq!(frame_loop.stats().total_frames(), 1);
        assert!(!canvas.is_empty());
    }

    #[test]
    fn test_run_respects_max_frames() {
        let mut frame_loop = FrameLoop::new(field(), ManualClock::new());
        let mut canvas = DrawList::new();
        assert_eq!(frame_loop.run(&mut canvas, None, Some(25)), 25);
        assert_eq!(frame_loop.stats().total_frames(), 25);
    }

    #[test]
    fn test_stop_handle_ends_run() {
        let mut frame_loop = FrameLoop::new(field(), ManualClock::new());
        let mut canvas = StopAfter {
            remaining: 7,
            stop: frame_loop.stop_handle(),
        };
        assert_eq!(frame_loop.run(&mut canvas, None, None), 7);
        assert!(!frame_loop.is_running());

        // A stopped loop runs no further frames.
        assert_eq!(frame_loop.run(&mut canvas, None, Some(10)), 0);
    }

    #[test]
    fn test_shared_stop_handle() {
        let stop = StopHandle::new();
        let frame_loop = FrameLoop::with_stop_handle(field(), ManualClock::new(), stop.clone());
        assert!(frame_loop.is_running());
        stop.stop();
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn test_frames_keep_points_in_bounds() {
        let mut state = field();
        state.apply(crate::controls::ControlEvent::AnimationSpeed(25.0));
        let mut frame_loop = FrameLoop::new(state, ManualClock::new());
        let mut canvas = DrawList::new();
        frame_loop.run(&mut canvas, None, Some(200));

        let bounds = frame_loop.state().bounds();
        for p in frame_loop.state().points() {
            assert!(p.position.x >= 0.0 && p.position.x <= bounds.x);
            assert!(p.position.y >= 0.0 && p.position.y <= bounds.y);
        }
    }
}

//! Simulation builder and runner

use winit::event_loop::{ControlFlow, EventLoop};

use crate::color::Rgb;
use crate::config::{ColorScheme, FieldConfig};
use crate::error::SimulationError;
use crate::field::FieldState;
use crate::frame_loop::{FrameLoop, StopHandle};
use crate::time::SystemClock;
use crate::window::{App, WindowSettings};

/// A windowed line field.
///
/// Use method chaining to configure, then call `.run()` to open the window.
///
/// ```ignore
/// use interlines::prelude::*;
///
/// Simulation::new()
///     .with_point_count(120)
///     .with_max_distance(180.0)
///     .run()?;
/// ```
pub struct Simulation {
    config: FieldConfig,
    title: String,
    width: u32,
    height: u32,
    background: Rgb,
    seed: Option<u64>,
    stop: StopHandle,
}

impl Simulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            config: FieldConfig::default(),
            title: "interlines".to_string(),
            width: 1280,
            height: 720,
            background: Rgb::from_u32(0x000000),
            seed: None,
            stop: StopHandle::new(),
        }
    }

    /// Replace the whole field configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_point_count(mut self, count: u32) -> Self {
        self.config.point_count = count;
        self
    }

    /// Maximum distance (pixels) at which two points are connected.
    pub fn with_max_distance(mut self, distance: f32) -> Self {
        self.config.max_distance = distance;
        self
    }

    /// Radius (pixels) within which points are pulled toward the pointer.
    pub fn with_mouse_influence(mut self, radius: f32) -> Self {
        self.config.mouse_influence = radius;
        self
    }

    pub fn with_line_opacity(mut self, opacity: f32) -> Self {
        self.config.line_opacity = opacity;
        self
    }

    pub fn with_point_size(mut self, size: f32) -> Self {
        self.config.point_size = size;
        self
    }

    /// Initial point speed in pixels per frame.
    pub fn with_animation_speed(mut self, speed: f32) -> Self {
        self.config.animation_speed = speed;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.config.line_width = width;
        self
    }

    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.config.colors = colors;
        self
    }

    /// Initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Window title. Stats are appended to it once per second.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Color the canvas is cleared to each frame.
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    /// Seed the point RNG for reproducible layouts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A handle that closes the window when stopped.
    ///
    /// Can be triggered from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Open the window and run until it is closed or stopped.
    pub fn run(self) -> Result<(), SimulationError> {
        let (width, height) = (self.width as f32, self.height as f32);
        let state = match self.seed {
            Some(seed) => FieldState::with_seed(self.config, width, height, seed),
            None => FieldState::new(self.config, width, height),
        };
        let frame_loop = FrameLoop::with_stop_handle(state, SystemClock::new(), self.stop);

        let settings = WindowSettings {
            title: self.title,
            width: self.width,
            height: self.height,
            background: self.background,
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(settings, frame_loop);
        event_loop.run_app(&mut app)?;
        log::info!("Event loop finished");
        app.into_result()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

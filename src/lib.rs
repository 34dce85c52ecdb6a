//! # interlines
//!
//! An animated field of drifting points joined by gradient lines, pulled
//! toward the pointer, with a live control panel.
//!
//! Every frame each point moves by its velocity, bounces off the canvas
//! edges and is drawn toward the pointer if it is close enough. Every pair of
//! points closer than the line distance is then joined by a line whose
//! opacity fades with distance.
//!
//! ## Quick Start
//!
//! ```ignore
//! use interlines::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new()
//!         .with_point_count(120)
//!         .with_colors(ColorScheme::from_u32s(0xff6b6b, 0xff8e53, 0xff6b9d))
//!         .run()
//! }
//! ```
//!
//! ## Without a window
//!
//! The simulation core does not need a GPU. Drive a [`FieldState`] with a
//! [`FrameLoop`] and render into any [`Canvas`]; [`DrawList`] records the
//! draw calls.
//!
//! ```
//! use interlines::prelude::*;
//!
//! let state = FieldState::with_seed(FieldConfig::default(), 800.0, 600.0, 1);
//! let mut frame_loop = FrameLoop::new(state, ManualClock::new());
//! let mut canvas = DrawList::new();
//!
//! assert_eq!(frame_loop.run(&mut canvas, None, Some(10)), 10);
//! assert_eq!(frame_loop.state().points().len(), 80);
//! ```
//!
//! ## Controls
//!
//! | Control | Range | Effect |
//! |---------|-------|--------|
//! | Nodes | 20..=200 | point count, reseeds |
//! | Mouse influence | 50..=300 | pointer attraction radius |
//! | Line distance | 50..=300 | connection threshold |
//! | Line width | 0.5..=5 | connection stroke width |
//! | Speed | 0.1..=3 | rescales every velocity |
//!
//! Connection counting is a plain all-pairs scan, so cost grows with the
//! square of the point count.

pub mod color;
pub mod config;
pub mod controls;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod gpu;
pub mod input;
pub mod point;
pub mod render;
mod simulation;
pub mod time;
#[cfg(feature = "egui")]
pub mod ui;
mod window;

pub use color::{hex_to_rgba, Rgb, Rgba};
pub use config::{ColorScheme, FieldConfig, RANDOM_PALETTES};
pub use controls::{Control, ControlEvent, StatsDisplay};
pub use error::{GpuError, SimulationError};
pub use field::FieldState;
pub use frame_loop::{FrameLoop, StopHandle};
pub use glam::Vec2;
pub use point::Point;
pub use render::{render_frame, Canvas, DrawCommand, DrawList, GradientStop};
pub use simulation::Simulation;
pub use time::{Clock, FrameStats, ManualClock, SystemClock};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use interlines::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{hex_to_rgba, Rgb, Rgba};
    pub use crate::config::{ColorScheme, FieldConfig};
    pub use crate::controls::{ControlEvent, StatsDisplay};
    pub use crate::error::SimulationError;
    pub use crate::field::FieldState;
    pub use crate::frame_loop::{FrameLoop, StopHandle};
    pub use crate::render::{Canvas, DrawList};
    pub use crate::simulation::Simulation;
    pub use crate::time::{Clock, ManualClock, SystemClock};
    pub use crate::Vec2;
    #[cfg(feature = "egui")]
    pub use egui;
}

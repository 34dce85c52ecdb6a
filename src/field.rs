//! Simulation state and the per-frame update step.
//!
//! [`FieldState`] owns everything a frame reads or mutates: the
//! configuration, the point set, the pointer position and the canvas
//! bounds. Nothing here is global; the frame loop and the control bindings
//! both operate on a `&mut FieldState`.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::FieldConfig;
use crate::point::{seed_points, Point};

/// Displacement (pixels) applied to a point sitting right at the pointer.
pub const MOUSE_PULL: f32 = 2.0;

/// The complete mutable state of a line field.
#[derive(Debug, Clone)]
pub struct FieldState {
    config: FieldConfig,
    points: Vec<Point>,
    pointer: Vec2,
    bounds: Vec2,
    panel_collapsed: bool,
    rng: SmallRng,
}

impl FieldState {
    /// Create a field filling a `width` x `height` canvas.
    ///
    /// The pointer starts at the canvas center.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, SmallRng::from_entropy())
    }

    /// Like [`FieldState::new`] but with a deterministic RNG.
    pub fn with_seed(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, width, height, SmallRng::seed_from_u64(seed))
    }

    /// Create a field from an explicit point set instead of seeding one.
    ///
    /// `config.point_count` is set to the number of points given.
    pub fn with_points(mut config: FieldConfig, width: f32, height: f32, points: Vec<Point>) -> Self {
        config.point_count = points.len() as u32;
        let bounds = Vec2::new(width, height);
        Self {
            config,
            points,
            pointer: bounds * 0.5,
            bounds,
            panel_collapsed: false,
            rng: SmallRng::from_entropy(),
        }
    }

    fn with_rng(config: FieldConfig, width: f32, height: f32, rng: SmallRng) -> Self {
        let bounds = Vec2::new(width, height);
        let mut state = Self {
            config,
            points: Vec::new(),
            pointer: bounds * 0.5,
            bounds,
            panel_collapsed: false,
            rng,
        };
        state.reseed();
        state
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Mutable configuration access.
    ///
    /// Changes that need a reseed or a velocity rescale should go through
    /// [`FieldState::apply`] instead.
    #[inline]
    pub fn config_mut(&mut self) -> &mut FieldConfig {
        &mut self.config
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = position;
    }

    pub fn toggle_panel(&mut self) {
        self.panel_collapsed = !self.panel_collapsed;
    }

    /// Discard the point set and build a new one from the current config.
    pub fn reseed(&mut self) {
        self.points = seed_points(
            &mut self.rng,
            self.bounds,
            self.config.point_count,
            self.config.animation_speed,
        );
    }

    /// Change the canvas size and reseed into the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.reseed();
        log::info!(
            "Canvas resized to {}x{}, reseeded {} points",
            width,
            height,
            self.points.len()
        );
    }

    /// Change the point count and reseed.
    pub fn set_point_count(&mut self, count: u32) {
        self.config.point_count = count;
        self.reseed();
    }

    /// Change the animation speed and rescale every existing velocity to it.
    ///
    /// Points keep their positions and headings.
    pub fn set_animation_speed(&mut self, speed: f32) {
        self.config.animation_speed = speed;
        for point in &mut self.points {
            point.rescale_speed(speed);
        }
    }

    /// Restore [`FieldConfig::default`] and reseed.
    pub fn reset_defaults(&mut self) {
        self.config = FieldConfig::default();
        self.reseed();
        log::info!("Restored default configuration");
    }

    /// Roll a random preset and reseed.
    pub fn randomize(&mut self) {
        self.config.randomize(&mut self.rng);
        self.reseed();
        log::info!(
            "Random preset: {} points, distance {}, palette {}/{}/{}",
            self.config.point_count,
            self.config.max_distance,
            self.config.colors.primary,
            self.config.colors.secondary,
            self.config.colors.accent
        );
    }

    /// Advance every point by one frame.
    ///
    /// Each point moves by its velocity, flips the velocity component of any
    /// axis it has left, is clamped back into the canvas, and is then pulled
    /// toward the pointer if it is within the influence radius. The pull is a
    /// one-frame displacement, not a velocity change.
    pub fn update(&mut self) {
        let bounds = self.bounds;
        let pointer = self.pointer;
        let radius = self.config.mouse_influence;

        for point in &mut self.points {
            point.position += point.velocity;

            if point.position.x < 0.0 || point.position.x > bounds.x {
                point.velocity.x = -point.velocity.x;
            }
            if point.position.y < 0.0 || point.position.y > bounds.y {
                point.velocity.y = -point.velocity.y;
            }
            point.position = point.position.clamp(Vec2::ZERO, bounds);

            let delta = pointer - point.position;
            let distance = delta.length();
            if distance < radius {
                let force = (radius - distance) / radius;
                let angle = delta.y.atan2(delta.x);
                point.position += Vec2::from_angle(angle) * force * MOUSE_PULL;
                // The pull can overshoot a pointer sitting near or past an edge.
                point.position = point.position.clamp(Vec2::ZERO, bounds);
            }
        }
    }
}

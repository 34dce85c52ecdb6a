//! The render step.
//!
//! [`render_frame`] paints one frame of a [`FieldState`] onto any [`Canvas`].
//! Draw order is fixed; later draws land on top:
//!
//! 1. clear
//! 2. connection lines between every pair closer than `max_distance`
//! 3. points
//! 4. pointer links, cursor dot and pulsing ring
//!
//! [`DrawList`] is a canvas that records commands instead of painting. The
//! GPU backend tessellates a `DrawList`; tests inspect it directly.

use glam::Vec2;

use crate::color::Rgba;
use crate::field::FieldState;

/// Alpha of point fills.
pub const POINT_ALPHA: f32 = 0.6;
/// Alpha of pointer links for a point right at the pointer.
pub const POINTER_LINK_ALPHA: f32 = 0.5;
/// Radius of the cursor dot.
pub const CURSOR_RADIUS: f32 = 8.0;
/// Alpha of the cursor dot.
pub const CURSOR_ALPHA: f32 = 0.8;
/// Resting radius of the pulsing ring.
pub const RING_RADIUS: f32 = 6.0;
/// How far the ring radius swings either way.
pub const RING_AMPLITUDE: f32 = 3.0;
/// Ring phase advance per millisecond.
pub const RING_RATE: f64 = 0.01;
pub const RING_ALPHA: f32 = 0.6;
pub const RING_WIDTH: f32 = 2.0;

/// A color stop along a line; `offset` runs from 0 at the start to 1 at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// A 2D drawing surface in pixel coordinates.
pub trait Canvas {
    /// Erase everything drawn so far.
    fn clear(&mut self, width: f32, height: f32);

    /// Stroke a line whose color follows a linear gradient from `from` to `to`.
    fn gradient_line(&mut self, from: Vec2, to: Vec2, stops: [GradientStop; 3], width: f32);

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32);
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    GradientLine {
        from: Vec2,
        to: Vec2,
        stops: [GradientStop; 3],
        width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        width: f32,
    },
}

/// A canvas that records commands.
///
/// Clearing drops everything recorded before the clear.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn gradient_line(&mut self, from: Vec2, to: Vec2, stops: [GradientStop; 3], width: f32) {
        self.commands.push(DrawCommand::GradientLine {
            from,
            to,
            stops,
            width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }
}

/// Paint one frame and return the number of connection lines drawn.
///
/// `now_ms` drives the cursor ring pulse.
pub fn render_frame<C: Canvas + ?Sized>(state: &FieldState, canvas: &mut C, now_ms: f64) -> usize {
    let bounds = state.bounds();
    canvas.clear(bounds.x, bounds.y);

    let connections = draw_connections(state, canvas);
    draw_points(state, canvas);
    draw_pointer_overlay(state, canvas, now_ms);

    connections
}

/// Alpha of a connection between two points `distance` apart.
///
/// Falls linearly from `line_opacity` at distance 0 to 0 at `max_distance`.
pub fn connection_alpha(distance: f32, max_distance: f32, line_opacity: f32) -> f32 {
    (max_distance - distance) / max_distance * line_opacity
}

/// Radius of the cursor ring at time `now_ms`.
pub fn ring_radius(now_ms: f64) -> f32 {
    RING_RADIUS + (now_ms * RING_RATE).sin() as f32 * RING_AMPLITUDE
}

// O(n^2) over all pairs. Point counts stay in the hundreds; a spatial grid
// would be needed well before tens of thousands.
fn draw_connections<C: Canvas + ?Sized>(state: &FieldState, canvas: &mut C) -> usize {
    let config = state.config();
    let colors = config.colors;
    let points = state.points();
    let mut count = 0;

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let distance = a.position.distance(b.position);
            if distance >= config.max_distance {
                continue;
            }
            count += 1;

            let alpha = connection_alpha(distance, config.max_distance, config.line_opacity);
            let stops = [
                GradientStop {
                    offset: 0.0,
                    color: colors.primary.with_alpha(alpha),
                },
                GradientStop {
                    offset: 0.5,
                    color: colors.secondary.with_alpha(alpha),
                },
                GradientStop {
                    offset: 1.0,
                    color: colors.accent.with_alpha(alpha),
                },
            ];
            canvas.gradient_line(a.position, b.position, stops, config.line_width);
        }
    }

    count
}

fn draw_points<C: Canvas + ?Sized>(state: &FieldState, canvas: &mut C) {
    let config = state.config();
    let fill = config.colors.primary.with_alpha(POINT_ALPHA);
    for point in state.points() {
        canvas.fill_circle(point.position, config.point_size, fill);
    }
}

fn draw_pointer_overlay<C: Canvas + ?Sized>(state: &FieldState, canvas: &mut C, now_ms: f64) {
    let config = state.config();
    let pointer = state.pointer();
    let radius = config.mouse_influence;

    for point in state.points() {
        let distance = pointer.distance(point.position);
        if distance < radius {
            let alpha = (radius - distance) / radius * POINTER_LINK_ALPHA;
            canvas.line(
                point.position,
                pointer,
                config.colors.primary.with_alpha(alpha),
                config.line_width + 1.0,
            );
        }
    }

    canvas.fill_circle(
        pointer,
        CURSOR_RADIUS,
        config.colors.primary.with_alpha(CURSOR_ALPHA),
    );
    canvas.stroke_circle(
        pointer,
        ring_radius(now_ms),
        config.colors.accent.with_alpha(RING_ALPHA),
        RING_WIDTH,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::field::FieldState;
    use crate::point::Point;

    fn field_with_points(positions: &[Vec2]) -> FieldState {
        let points = positions
            .iter()
            .map(|p| Point::new(*p, Vec2::ZERO))
            .collect();
        let mut state = FieldState::with_points(FieldConfig::default(), 1000.0, 1000.0, points);
        state.set_pointer(Vec2::new(-500.0, -500.0));
        state
    }

    fn gradient_lines(list: &DrawList) -> Vec<&DrawCommand> {
        list.commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::GradientLine { .. }))
            .collect()
    }

    #[test]
    fn test_frame_order() {
        let state = field_with_points(&[Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0)]);
        let mut list = DrawList::new();
        let connections = render_frame(&state, &mut list, 0.0);

        assert_eq!(connections, 1);
        let kinds: Vec<&str> = list
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Clear { .. } => "clear",
                DrawCommand::GradientLine { .. } => "gradient",
                DrawCommand::Line { .. } => "line",
                DrawCommand::FillCircle { .. } => "fill",
                DrawCommand::StrokeCircle { .. } => "stroke",
            })
            .collect();
        assert_eq!(kinds, ["clear", "gradient", "fill", "fill", "fill", "stroke"]);
    }

    #[test]
    fn test_connection_threshold_is_exclusive() {
        let state = field_with_points(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(150.0, 0.0),
            Vec2::new(0.0, 149.0),
        ]);
        let mut list = DrawList::new();
        let connections = render_frame(&state, &mut list, 0.0);

        // (0,0)-(150,0) is exactly max_distance and not drawn.
        // (0,0)-(0,149) is drawn, (150,0)-(0,149) is ~211 and not drawn.
        assert_eq!(connections, 1);
        assert_eq!(gradient_lines(&list).len(), 1);
    }

    #[test]
    fn test_connection_gradient_and_alpha() {
        let state = field_with_points(&[Vec2::new(0.0, 0.0), Vec2::new(75.0, 0.0)]);
        let mut list = DrawList::new();
        render_frame(&state, &mut list, 0.0);

        let DrawCommand::GradientLine { stops, width, .. } = gradient_lines(&list)[0] else {
            panic!("expected a gradient line");
        };
        let colors = state.config().colors;
        assert_eq!(*width, 1.0);
        assert_eq!(stops.map(|s| s.offset), [0.0, 0.5, 1.0]);
        assert_eq!(stops[0].color.rgb, colors.primary);
        assert_eq!(stops[1].color.rgb, colors.secondary);
        assert_eq!(stops[2].color.rgb, colors.accent);
        for stop in stops {
            assert!((stop.color.alpha - 0.15).abs() < 1e-6);
        }
    }

    #[test]
    fn test_connection_alpha_decreases_with_distance() {
        let mut last = f32::INFINITY;
        for d in [0.0, 10.0, 50.0, 100.0, 149.0, 149.99] {
            let alpha = connection_alpha(d, 150.0, 0.3);
            assert!(alpha < last);
            assert!(alpha > 0.0);
            last = alpha;
        }
        assert!(connection_alpha(149.9999, 150.0, 0.3) < 1e-5);
        assert_eq!(connection_alpha(0.0, 150.0, 0.3), 0.3);
    }

    #[test]
    fn test_points_use_primary_at_fixed_alpha() {
        let state = field_with_points(&[Vec2::new(500.0, 500.0)]);
        let mut list = DrawList::new();
        render_frame(&state, &mut list, 0.0);

        let primary = state.config().colors.primary;
        assert!(list.commands().contains(&DrawCommand::FillCircle {
            center: Vec2::new(500.0, 500.0),
            radius: 2.0,
            color: primary.with_alpha(POINT_ALPHA),
        }));
    }

    #[test]
    fn test_pointer_links() {
        let mut state = field_with_points(&[Vec2::new(100.0, 100.0), Vec2::new(400.0, 400.0)]);
        state.set_pointer(Vec2::new(150.0, 100.0));
        let mut list = DrawList::new();
        render_frame(&state, &mut list, 0.0);

        let links: Vec<&DrawCommand> = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .collect();
        assert_eq!(links.len(), 1);
        let DrawCommand::Line { from, to, color, width } = links[0] else {
            unreachable!();
        };
        assert_eq!(*from, Vec2::new(100.0, 100.0));
        assert_eq!(*to, Vec2::new(150.0, 100.0));
        assert!((color.alpha - 0.25).abs() < 1e-6);
        assert_eq!(*width, 2.0);
    }

    #[test]
    fn test_cursor_and_pulsing_ring() {
        let mut state = field_with_points(&[]);
        state.set_pointer(Vec2::new(30.0, 40.0));
        let colors = state.config().colors;

        let mut list = DrawList::new();
        render_frame(&state, &mut list, 0.0);
        assert_eq!(
            list.commands()[1..],
            [
                DrawCommand::FillCircle {
                    center: Vec2::new(30.0, 40.0),
                    radius: 8.0,
                    color: colors.primary.with_alpha(0.8),
                },
                DrawCommand::StrokeCircle {
                    center: Vec2::new(30.0, 40.0),
                    radius: 6.0,
                    color: colors.accent.with_alpha(0.6),
                    width: 2.0,
                },
            ]
        );

        let quarter_period = std::f64::consts::FRAC_PI_2 / RING_RATE;
        assert!((ring_radius(quarter_period) - 9.0).abs() < 1e-4);
        assert!((ring_radius(3.0 * quarter_period) - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_field_draws_only_clear_and_cursor() {
        let state = field_with_points(&[]);
        let mut list = DrawList::new();
        assert_eq!(render_frame(&state, &mut list, 0.0), 0);
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.commands()[0],
            DrawCommand::Clear {
                width: 1000.0,
                height: 1000.0
            }
        );
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let state = field_with_points(&[Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]);
        let mut list = DrawList::new();
        render_frame(&state, &mut list, 0.0);
        let first = list.len();
        render_frame(&state, &mut list, 16.0);
        assert_eq!(list.len(), first);
    }
}

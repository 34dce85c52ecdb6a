//! Simulated points and point-set seeding.

use glam::Vec2;
use rand::Rng;

/// A particle in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec2,
    /// Pixels per frame.
    pub velocity: Vec2,
}

impl Point {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Set the velocity magnitude to `speed`, keeping its direction.
    ///
    /// A zero velocity has angle 0 and becomes `(speed, 0)`.
    pub fn rescale_speed(&mut self, speed: f32) {
        let angle = self.velocity.y.atan2(self.velocity.x);
        self.velocity = Vec2::from_angle(angle) * speed;
    }
}

/// Create `count` points spread uniformly over `bounds`.
///
/// Each velocity component is uniform in `[-speed / 2, speed / 2)`.
pub fn seed_points<R: Rng>(rng: &mut R, bounds: Vec2, count: u32, speed: f32) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
            let velocity = Vec2::new(
                (rng.gen::<f32>() - 0.5) * speed,
                (rng.gen::<f32>() - 0.5) * speed,
            );
            Point::new(position, velocity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_seed_points_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        let bounds = Vec2::new(640.0, 480.0);
        let points = seed_points(&mut rng, bounds, 200, 2.0);

        assert_eq!(points.len(), 200);
        for p in &points {
            assert!(p.position.x >= 0.0 && p.position.x <= bounds.x);
            assert!(p.position.y >= 0.0 && p.position.y <= bounds.y);
            assert!(p.velocity.x.abs() <= 1.0);
            assert!(p.velocity.y.abs() <= 1.0);
        }
    }

    #[test]
    fn test_seed_zero_points() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(seed_points(&mut rng, Vec2::new(100.0, 100.0), 0, 0.5).is_empty());
    }

    #[test]
    fn test_zero_speed_gives_still_points() {
        let mut rng = SmallRng::seed_from_u64(5);
        let points = seed_points(&mut rng, Vec2::new(100.0, 100.0), 10, 0.0);
        assert!(points.iter().all(|p| p.velocity == Vec2::ZERO));
    }

    #[test]
    fn test_rescale_speed_preserves_direction() {
        let mut point = Point::new(Vec2::ZERO, Vec2::new(3.0, 4.0));
        point.rescale_speed(1.0);
        assert!((point.velocity.x - 0.6).abs() < 1e-6);
        assert!((point.velocity.y - 0.8).abs() < 1e-6);

        point.rescale_speed(2.5);
        assert!((point.velocity.length() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_rescale_zero_velocity() {
        let mut point = Point::new(Vec2::ZERO, Vec2::ZERO);
        point.rescale_speed(1.5);
        assert_eq!(point.velocity, Vec2::new(1.5, 0.0));
    }
}

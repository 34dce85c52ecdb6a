//! # Headless Run
//!
//! Steps a field without a window and prints what each simulated second
//! would have shown in the stats slots. Useful for checking how connection
//! counts respond to the point count and line distance.
//!
//! Run with: `cargo run --example headless --release -- 150`

use interlines::prelude::*;

/// Prints stats to stdout instead of a panel.
struct Stdout {
    connections: usize,
}

impl StatsDisplay for Stdout {
    fn show_fps(&mut self, fps: u32) {
        println!("{:>4} fps  {:>6} connections", fps, self.connections);
    }

    fn show_connections(&mut self, connections: usize) {
        self.connections = connections;
    }
}

fn main() {
    env_logger::init();

    let count: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(80);

    let config = FieldConfig {
        point_count: count,
        ..FieldConfig::default()
    };

    println!("=== interlines headless ===");
    println!("Points: {}", count);
    println!("Line distance: {}", config.max_distance);
    println!("Primary: {}", hex_to_rgba(&config.colors.primary.to_hex(), config.line_opacity));
    println!();

    let state = FieldState::with_seed(config, 1280.0, 720.0, 7);
    let clock = ManualClock::new();
    let mut frame_loop = FrameLoop::new(state, clock.clone());
    let mut canvas = DrawList::new();
    let mut stdout = Stdout { connections: 0 };

    // Five seconds at 60 fps
    for frame in 1..=300u32 {
        clock.set(frame as f64 * 1000.0 / 60.0);
        frame_loop.frame(&mut canvas, Some(&mut stdout));
    }

    println!();
    println!("Frames: {}", frame_loop.stats().total_frames());
    println!("Draw commands last frame: {}", canvas.len());
}

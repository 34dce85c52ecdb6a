//! # Neon
//!
//! A denser field on a dark purple background with a hot palette, which
//! closes itself after a minute from a second thread through its stop
//! handle.
//!
//! Run with: `cargo run --example neon --release`

use std::time::Duration;

use interlines::prelude::*;

fn main() -> Result<(), SimulationError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sim = Simulation::new()
        .with_title("interlines neon")
        .with_point_count(140)
        .with_max_distance(120.0)
        .with_mouse_influence(220.0)
        .with_line_opacity(0.5)
        .with_line_width(1.5)
        .with_animation_speed(1.2)
        .with_colors(ColorScheme::from_u32s(0xff2e97, 0xb967ff, 0x05ffa1))
        .with_background(Rgb::from_u32(0x120024));

    let stop = sim.stop_handle();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(60));
        stop.stop();
    });

    sim.run()
}

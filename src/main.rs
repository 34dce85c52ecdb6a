use interlines::Simulation;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut sim = Simulation::new();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<u32>() {
            Ok(count) => sim = sim.with_point_count(count),
            Err(_) => log::warn!("Ignoring point count {:?}: not a whole number", arg),
        }
    }

    if let Err(err) = sim.run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

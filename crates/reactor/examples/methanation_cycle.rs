//! Runs the bundled methanation reactor and prints every phase change.
//!
//! ```sh
//! cargo run -p zeolite-reactor --example methanation_cycle [config.toml]
//! ```
//!
//! Without an argument the bundled `config/methanation.toml` is used, with a
//! smaller bed so that several cycles fit into the run.

use std::{env, error::Error, path::PathBuf};

use uom::si::{
    f64::Mass,
    mass::{gram, kilogram},
    time::second,
};
use zeolite_reactor::{
    Capacity, Reactor, SimulationConfig,
    driver::{self, Event, StopSignal},
};

fn main() -> Result<(), Box<dyn Error>> {
    let (path, bundled) = match env::args_os().nth(1) {
        Some(arg) => (PathBuf::from(arg), false),
        None => (
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/methanation.toml"),
            true,
        ),
    };

    let mut config = SimulationConfig::from_path(&path)?;
    if bundled {
        config.reactor.capacity = Capacity::Mass {
            threshold: Mass::new::<gram>(100.0),
        };
    }

    let mut reactor = Reactor::new(config.reactor)?;
    println!(
        "capacity {:.3} kg, step {} s",
        reactor.capacity().get::<kilogram>(),
        reactor.step_size().get::<second>(),
    );

    let solution = driver::run(
        &mut reactor,
        config.horizon(),
        &StopSignal::new(),
        |event: &Event| {
            let report = &event.report;
            if report.switched {
                println!(
                    "t = {:>8.1} s  {} -> {}  ({:.3} kg adsorbed)",
                    report.clock.get::<second>(),
                    report.phase,
                    report.next_phase(),
                    report.adsorbed_mass.get::<kilogram>(),
                );
            }
            None
        },
    )?;

    let state = solution.state;
    println!(
        "{:?} after {} steps: {} cycles, {:.3} kg methane, {:.3} kg water adsorbed",
        solution.status,
        solution.steps,
        state.completed_cycles,
        state.total_product.get::<kilogram>(),
        state.total_adsorbed.get::<kilogram>(),
    );

    Ok(())
}

use std::path::Path;

use approx::assert_relative_eq;
use uom::si::{
    f64::{Mass, Time},
    mass::gram,
    time::second,
};
use zeolite_reactor::{
    Capacity, Phase, Reactor, ReactorConfig, SimulationConfig, StepReport, Stoichiometry,
    driver::{self, Action, Event, Horizon, Status, StopSignal},
    units::mole_per_second,
};

/// Hydrogen fed at 0.1 mmol/s into a bed that holds 100 g of water.
fn small_bed() -> ReactorConfig {
    ReactorConfig {
        feed_rate: mole_per_second(1e-4),
        stoichiometry: Stoichiometry::SABATIER_HYDROGEN_FEED,
        capacity: Capacity::Mass {
            threshold: Mass::new::<gram>(100.0),
        },
        ..ReactorConfig::methanation()
    }
}

#[test]
fn adsorption_ends_on_the_first_step_reaching_capacity() {
    let mut reactor = Reactor::new(small_bed()).unwrap();
    let mut before_switch = None;

    let solution = driver::run(
        &mut reactor,
        Horizon::Unbounded,
        &StopSignal::new(),
        |event: &Event| {
            if event.report.switched {
                Some(Action::StopEarly)
            } else {
                before_switch = Some(event.report);
                None
            }
        },
    )
    .unwrap();

    // 100 g / (0.5 · 1e-4 mol/s · 0.1 s · 18.01528 g/mol) = 1_110_168.70 steps
    let per_step: f64 = 0.5 * 1e-4 * 0.1 * 18.015_28;
    let expected = (100.0 / per_step).ceil() as u64;
    assert_eq!(expected, 1_110_169);

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, expected);
    assert_eq!(solution.state.phase, Phase::Desorption);
    assert_relative_eq!(
        solution.state.clock.get::<second>(),
        expected as f64 * 0.1,
        max_relative = 1e-9
    );
    assert!(solution.state.adsorbed_mass >= Mass::new::<gram>(100.0));

    let last: StepReport = before_switch.unwrap();
    assert_eq!(last.phase, Phase::Adsorption);
    assert!(last.adsorbed_mass < Mass::new::<gram>(100.0));
}

#[test]
fn reactor_cycles_repeatedly() {
    let config = ReactorConfig {
        feed_rate: mole_per_second(1.0),
        capacity: Capacity::Mass {
            threshold: Mass::new::<gram>(9.0),
        },
        ..ReactorConfig::methanation()
    };
    let mut reactor = Reactor::new(config).unwrap();
    let mut phases = Vec::new();

    let solution = driver::run(
        &mut reactor,
        Horizon::Until(Time::new::<second>(100.0)),
        &StopSignal::new(),
        |event: &Event| {
            if event.report.switched {
                phases.push(event.report.next_phase());
            }
            None
        },
    )
    .unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert!(solution.state.completed_cycles >= 2);
    for pair in phases.windows(2) {
        assert_eq!(pair[1], pair[0].switched());
    }
    assert_eq!(phases.first(), Some(&Phase::Desorption));

    let state = solution.state;
    let retained = state.total_adsorbed - state.total_desorbed;
    assert_relative_eq!(
        retained.get::<gram>(),
        state.adsorbed_mass.get::<gram>(),
        epsilon = 1e-9
    );
}

#[test]
fn run_for_zero_duration_changes_nothing() {
    let mut reactor = Reactor::new(small_bed()).unwrap();
    let before = *reactor.state();

    assert_eq!(reactor.run_for(Time::new::<second>(0.0)).count(), 0);
    assert_eq!(*reactor.state(), before);
}

#[test]
fn clock_advances_by_step_size() {
    let mut reactor = Reactor::new(small_bed()).unwrap();

    let clocks: Vec<f64> = reactor
        .run_for(Time::new::<second>(1.0))
        .map(|report| report.unwrap().clock.get::<second>())
        .collect();

    for (i, clock) in clocks.iter().enumerate() {
        assert_relative_eq!(*clock, 0.1 * (i + 1) as f64, max_relative = 1e-12);
    }
}

#[test]
fn bundled_config_runs_to_its_duration() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/methanation.toml");
    let config = SimulationConfig::from_path(path).unwrap();
    let mut reactor = Reactor::new(config.reactor).unwrap();

    let solution =
        driver::run_unobserved(&mut reactor, config.horizon(), &StopSignal::new()).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert!(solution.state.clock >= Time::new::<second>(100.0));
    assert_eq!(solution.state.phase, Phase::Adsorption);
}

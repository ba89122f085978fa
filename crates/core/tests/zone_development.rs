//! Zone development behavior across a full run
//!
//! Validates the development delay, the one-way transition into a
//! developed zone structure, and how threshold configuration reshapes the
//! classified bands.

use isc_sim_core::core_types::units::{Celsius, Centimeters, Minutes};
use isc_sim_core::core_types::SimulationParameters;
use isc_sim_core::physics::Zone;
use isc_sim_core::simulation::{ProfileEngine, ProfileSnapshot};

fn laboratory_engine() -> ProfileEngine {
    ProfileEngine::new(SimulationParameters::laboratory_core()).expect("preset must validate")
}

fn is_developed(snapshot: &ProfileSnapshot) -> bool {
    snapshot.zones.iter().any(|&z| z != Zone::InitialReservoir)
}

#[test]
fn development_triggers_exactly_at_the_delay_distance() {
    let engine = laboratory_engine();

    // At 0.5 cm/min the front reaches the 30 cm delay distance at t = 60
    let just_before = engine.evaluate(Minutes::new(59.9)).expect("regular run");
    assert!(
        !is_developed(&just_before),
        "front at {} has not covered the delay distance",
        just_before.front_position
    );

    let at_delay = engine.evaluate(Minutes::new(60.0)).expect("regular run");
    assert_eq!(at_delay.front_position, Centimeters::new(30.0));
    assert!(
        is_developed(&at_delay),
        "reaching the delay distance itself counts as developed"
    );
}

#[test]
fn early_run_reads_reservoir_despite_a_formed_thermal_profile() {
    let engine = laboratory_engine();
    let snapshot = engine.evaluate(Minutes::new(40.0)).expect("regular run");

    assert_eq!(snapshot.front_position, Centimeters::new(20.0));
    // The thermal wave already peaks at the front, but 20 cm of travel is
    // short of the 30 cm development distance
    assert!(snapshot.temperatures[20] == 600.0);
    assert!(snapshot.zones.iter().all(|&z| z == Zone::InitialReservoir));
}

#[test]
fn development_is_one_way_over_a_forward_sweep() {
    let engine = laboratory_engine();
    let times: Vec<Minutes> = (0..=50).map(|i| Minutes::new(f64::from(i) * 10.0)).collect();
    let frames = engine.evaluate_frames(&times).expect("regular runs");

    let mut developed = false;
    for (frame, &time) in frames.iter().zip(&times) {
        let now = is_developed(frame);
        assert!(
            now || !developed,
            "zone structure collapsed at {time} after developing earlier"
        );
        developed = now;
    }
    assert!(developed, "a 500 min sweep must develop zones");
}

#[test]
fn burned_band_widens_as_the_front_advances() {
    let engine = laboratory_engine();
    let mut previous = 0_usize;
    for minutes in [100.0, 200.0, 300.0, 400.0] {
        let snapshot = engine.evaluate(Minutes::new(minutes)).expect("regular run");
        let burned = snapshot
            .zones
            .iter()
            .filter(|&&z| z == Zone::BurnedZone)
            .count();
        assert!(
            burned > previous,
            "burned band must widen monotonically, got {burned} samples at {minutes} min"
        );
        previous = burned;
    }
}

#[test]
fn position_rules_dominate_temperature_bands_behind_the_front() {
    let engine = laboratory_engine();
    let snapshot = engine.evaluate(Minutes::new(400.0)).expect("regular run");

    // Halfway up the ramp the matrix has cooled into the oil-bank band,
    // but the front swept it long ago
    let t = snapshot.temperatures[100];
    assert!(t > 80.0 && t <= 200.0, "expected oil-bank range, got {t}");
    assert_eq!(snapshot.zones[100], Zone::BurnedZone);
}

#[test]
fn custom_thresholds_reshape_the_bands() {
    let mut params = SimulationParameters::laboratory_core();
    params.zones.steam_floor = Celsius::new(300.0);
    let engine = ProfileEngine::new(params).expect("parameters are plausible");
    let custom = engine.evaluate(Minutes::new(100.0)).expect("regular run");

    let reference = laboratory_engine()
        .evaluate(Minutes::new(100.0))
        .expect("regular run");

    // Sample 69 reads ~347°C: above a 300°C steam floor but below the
    // laboratory 350°C one, and it sits inside the steam window
    assert_eq!(reference.zones[69], Zone::CondensationZone);
    assert_eq!(custom.zones[69], Zone::SteamZone);
}

#[test]
fn disabling_the_delay_develops_the_ignition_instant() {
    let mut params = SimulationParameters::laboratory_core();
    params.zones.development_delay = Centimeters::new(0.0);
    let engine = ProfileEngine::new(params).expect("parameters are plausible");

    // front == delay == 0 counts as developed; the uniform 60°C profile
    // falls outside every temperature band, so everything is still
    // reservoir by fall-through rather than by the delay
    let snapshot = engine.evaluate(Minutes::new(0.0)).expect("regular run");
    assert!(snapshot.zones.iter().all(|&z| z == Zone::InitialReservoir));

    // One minute in, the front has moved half a centimeter and the inlet
    // sample is already claimed by a position rule
    let snapshot = engine.evaluate(Minutes::new(1.0)).expect("regular run");
    assert_eq!(snapshot.zones[0], Zone::CombustionZone);
}

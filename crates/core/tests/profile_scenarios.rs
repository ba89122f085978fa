//! End-to-end scenarios for the laboratory tube run
//!
//! These tests drive the full engine through the reference run and check
//! the profiles it reports at characteristic times: the ignition instant,
//! a mid-run state with every zone present, and the late stages where the
//! front approaches and leaves the core.

use isc_sim_core::core_types::units::{Celsius, Centimeters, Minutes};
use isc_sim_core::core_types::SimulationParameters;
use isc_sim_core::error::EngineError;
use isc_sim_core::physics::Zone;
use isc_sim_core::simulation::{ProfileEngine, ProfileSnapshot};

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn laboratory_engine() -> ProfileEngine {
    ProfileEngine::new(SimulationParameters::laboratory_core()).expect("preset must validate")
}

/// Collapse a zone profile into the ordered sequence of distinct bands
fn band_sequence(snapshot: &ProfileSnapshot) -> Vec<Zone> {
    let mut sequence = Vec::new();
    for &zone in &snapshot.zones {
        if sequence.last() != Some(&zone) {
            sequence.push(zone);
        }
    }
    sequence
}

#[test]
fn ignition_instant_is_a_uniform_reservoir() {
    let engine = laboratory_engine();
    let snapshot = engine.evaluate(Minutes::new(0.0)).expect("regular run");

    assert_eq!(snapshot.front_position, Centimeters::new(0.0));
    assert_eq!(snapshot.len(), 301);

    for (i, &t) in snapshot.temperatures.iter().enumerate() {
        assert!(t == 60.0, "sample {i} should sit at 60°C, got {t}");
    }
    assert!(snapshot.zones.iter().all(|&z| z == Zone::InitialReservoir));

    // Uniform temperature means uniform viscosity
    let mu = snapshot.viscosities[0];
    assert!(
        (mu.value() - 0.44413066734548384).abs() < 1e-12,
        "reservoir viscosity should be ~0.444 cP, got {mu}"
    );
    assert!(snapshot.viscosities.iter().all(|&v| v == mu));
}

#[test]
fn mid_run_profile_shows_every_band_in_order() {
    let engine = laboratory_engine();
    let snapshot = engine.evaluate(Minutes::new(100.0)).expect("regular run");

    assert_eq!(snapshot.front_position, Centimeters::new(50.0));

    // The peak sits exactly at the front sample
    assert!(snapshot.temperatures[50] == 600.0);
    assert_eq!(snapshot.zones[0], Zone::BurnedZone);
    assert_eq!(snapshot.zones[40], Zone::CombustionZone);
    assert_eq!(snapshot.zones[50], Zone::SteamZone);

    // Downstream of the front the tail decays monotonically
    for pair in snapshot.temperatures[50..].windows(2) {
        assert!(pair[1] < pair[0], "tail must cool with distance");
    }

    assert_eq!(
        band_sequence(&snapshot),
        vec![
            Zone::BurnedZone,
            Zone::CombustionZone,
            Zone::SteamZone,
            Zone::CondensationZone,
            Zone::OilBank,
            Zone::InitialReservoir,
        ]
    );
}

#[test]
fn late_run_profile_keeps_the_band_order() {
    let engine = laboratory_engine();
    let snapshot = engine.evaluate(Minutes::new(400.0)).expect("regular run");

    assert_eq!(snapshot.front_position, Centimeters::new(200.0));
    assert_eq!(snapshot.zones[100], Zone::BurnedZone);
    assert_eq!(snapshot.zones[190], Zone::CombustionZone);
    assert_eq!(snapshot.zones[205], Zone::SteamZone);
    assert_eq!(snapshot.zones[230], Zone::CondensationZone);
    assert_eq!(snapshot.zones[260], Zone::OilBank);
    assert_eq!(snapshot.zones[300], Zone::InitialReservoir);

    assert_eq!(band_sequence(&snapshot).len(), 6);
}

#[test]
fn hottest_sample_carries_the_thinnest_oil() {
    let engine = laboratory_engine();
    let snapshot = engine.evaluate(Minutes::new(100.0)).expect("regular run");

    let thinnest = snapshot
        .viscosities
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
        .expect("non-empty profile");
    assert_eq!(thinnest, 50, "minimum viscosity must sit at the front");

    let mu_front = snapshot.viscosities[50];
    assert!(
        (mu_front.value() - 0.01571551814058741).abs() < 1e-12,
        "front viscosity should be ~0.0157 cP, got {mu_front}"
    );
}

#[test]
fn front_sweeps_past_the_outlet() {
    let engine = laboratory_engine();
    let snapshot = engine.evaluate(Minutes::new(1000.0)).expect("regular run");

    // At 0.5 cm/min the front left the 300 cm core long ago
    assert_eq!(snapshot.front_position, Centimeters::new(500.0));
    assert!(
        snapshot.zones.iter().all(|&z| z == Zone::BurnedZone),
        "every sample trails the front by more than the combustion band"
    );
    // The whole core is on the (receding) ramp
    assert!(snapshot.temperatures[300] < Celsius::new(600.0));
}

#[test]
fn negative_time_extrapolates_without_zone_development() {
    let engine = laboratory_engine();
    let snapshot = engine.evaluate(Minutes::new(-50.0)).expect("regular run");

    assert_eq!(snapshot.front_position, Centimeters::new(-25.0));
    // The tail formula preheats the core even with the front behind the
    // inlet, but no zone structure exists yet
    assert!(snapshot.temperatures[0] > 60.0);
    assert!(snapshot.zones.iter().all(|&z| z == Zone::InitialReservoir));
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let engine = laboratory_engine();
    for minutes in [0.0, 37.5, 100.0, 400.0, 499.0] {
        let first = engine.evaluate(Minutes::new(minutes)).expect("regular run");
        let second = engine.evaluate(Minutes::new(minutes)).expect("regular run");
        assert_eq!(first, second, "evaluation at {minutes} min must be stable");
    }
}

#[test]
fn parallel_frames_match_sequential_evaluation() {
    let engine = laboratory_engine();
    let times: Vec<Minutes> = (0..=50).map(|i| Minutes::new(f64::from(i) * 10.0)).collect();

    let parallel = engine.evaluate_frames(&times).expect("regular runs");
    let sequential: Vec<ProfileSnapshot> = times
        .iter()
        .map(|&t| engine.evaluate(t).expect("regular run"))
        .collect();

    assert_eq!(parallel, sequential);
}

#[test]
fn parallel_frames_match_on_randomized_times() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let engine = laboratory_engine();
    let mut rng = StdRng::seed_from_u64(0x15c0);
    let times: Vec<Minutes> = (0..64)
        .map(|_| Minutes::new(rng.random_range(-100.0..1200.0)))
        .collect();

    let parallel = engine.evaluate_frames(&times).expect("regular runs");
    let sequential: Vec<ProfileSnapshot> = times
        .iter()
        .map(|&t| engine.evaluate(t).expect("regular run"))
        .collect();

    assert_eq!(parallel, sequential);
}

#[test]
fn near_absolute_zero_reservoir_reports_viscosity_overflow() {
    let mut params = SimulationParameters::laboratory_core();
    params.initial_temperature = Celsius::new(-272.15);
    let engine = ProfileEngine::new(params).expect("parameters are plausible");

    // At the ignition instant the whole core sits at 1 K and the Arrhenius
    // exponential overflows
    let err = engine
        .evaluate(Minutes::new(0.0))
        .expect_err("correlation must overflow");
    assert_eq!(
        err,
        EngineError::NonFiniteViscosity {
            temperature: Celsius::new(-272.15)
        }
    );
}

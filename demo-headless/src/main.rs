use clap::Parser;
use isc_sim_core::core_types::units::{Celsius, Centimeters, CentimetersPerMinute, Minutes};
use isc_sim_core::{ProfileEngine, ProfileSnapshot, SimulationParameters, Zone};

/// In-situ combustion profile demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "isc-profile-demo")]
#[command(about = "1-D in-situ combustion recovery profile demo", long_about = None)]
struct Args {
    /// Evaluate a single time in minutes (omit for a sweep)
    #[arg(short, long)]
    time: Option<f64>,

    /// Sweep duration in minutes
    #[arg(short, long, default_value_t = 500.0)]
    duration: f64,

    /// Sweep step in minutes
    #[arg(short, long, default_value_t = 10.0)]
    step: f64,

    /// Core length in cm
    #[arg(long, default_value_t = 300.0)]
    length: f64,

    /// Grid spacing in cm
    #[arg(long, default_value_t = 1.0)]
    spacing: f64,

    /// Initial reservoir temperature in °C
    #[arg(long, default_value_t = 60.0)]
    initial_temp: f64,

    /// Peak front temperature in °C
    #[arg(long, default_value_t = 600.0)]
    peak_temp: f64,

    /// Front velocity in cm/min
    #[arg(short, long, default_value_t = 0.5)]
    velocity: f64,

    /// Exponential tail decay length in cm
    #[arg(long, default_value_t = 30.0)]
    decay_length: f64,

    /// Print every Nth sample in the profile table
    #[arg(long, default_value_t = 10)]
    every: usize,

    /// Emit machine-readable JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Emit per-sample CSV instead of the report
    #[arg(long)]
    csv: bool,
}

/// Label, heatmap color, and strip glyph for each zone code, in code order
const ZONE_STYLES: [(&str, &str, char); 6] = [
    ("Initial Reservoir", "#a6cee3", '.'),
    ("Oil Bank", "#b2df8a", 'o'),
    ("Condensation Zone", "#ffbb78", '~'),
    ("Steam Zone", "#1f78b4", 's'),
    ("Combustion Zone", "#fb9a99", 'x'),
    ("Burned Zone", "#999999", '#'),
];

const STRIP_WIDTH: usize = 60;

fn zone_label(zone: Zone) -> &'static str {
    ZONE_STYLES[zone.index() as usize].0
}

fn zone_glyph(zone: Zone) -> char {
    ZONE_STYLES[zone.index() as usize].2
}

/// True only for real temperatures at or above absolute zero; NaN fails
fn physical_temperature(value: f64) -> bool {
    value >= -273.15
}

/// Query times from 0 to `duration` inclusive at `step` spacing
fn sweep_times(duration: f64, step: f64) -> Option<Vec<Minutes>> {
    if !step.is_finite() || step <= 0.0 || !duration.is_finite() || duration < 0.0 {
        return None;
    }
    let count = (duration / step).floor() as usize + 1;
    Some((0..count).map(|i| Minutes::new(step * i as f64)).collect())
}

fn main() {
    let args = Args::parse();

    if !physical_temperature(args.initial_temp) || !physical_temperature(args.peak_temp) {
        eprintln!("error: temperatures must be at or above absolute zero (-273.15°C)");
        std::process::exit(1);
    }
    if args.every == 0 {
        eprintln!("error: --every must be at least 1");
        std::process::exit(1);
    }

    let mut params = SimulationParameters::laboratory_core();
    params.core_length = Centimeters::new(args.length);
    params.grid_spacing = Centimeters::new(args.spacing);
    params.initial_temperature = Celsius::new(args.initial_temp);
    params.peak_temperature = Celsius::new(args.peak_temp);
    params.front_velocity = CentimetersPerMinute::new(args.velocity);
    params.decay_length = Centimeters::new(args.decay_length);

    let engine = match ProfileEngine::new(params) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match args.time {
        Some(minutes) => run_single(&engine, minutes, &args),
        None => run_sweep(&engine, &args),
    }
}

fn run_single(engine: &ProfileEngine, minutes: f64, args: &Args) {
    let snapshot = match engine.evaluate(Minutes::new(minutes)) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
        );
        return;
    }
    if args.csv {
        print_csv_header(false);
        print_csv_rows(engine, &snapshot, false);
        return;
    }

    println!("=== ISC Profile Demo ===\n");
    print_run_header(engine);

    println!("--- Profile at {} ---", snapshot.time);
    println!("Front position: {}\n", snapshot.front_position);

    println!("{:>10}  {:>10}  {:>10}  zone", "x (cm)", "T (°C)", "mu (cP)");
    let positions = engine.grid().positions();
    for i in (0..snapshot.len()).step_by(args.every) {
        println!(
            "{:>10.2}  {:>10.1}  {:>10.4}  {}",
            positions[i].value(),
            snapshot.temperatures[i].value(),
            snapshot.viscosities[i].value(),
            zone_label(snapshot.zones[i])
        );
    }

    println!("\nZone extents:");
    print_zone_extents(engine, &snapshot);

    println!("\n{}", strip(&snapshot));
    print_strip_legend();
}

fn run_sweep(engine: &ProfileEngine, args: &Args) {
    let times = match sweep_times(args.duration, args.step) {
        Some(times) => times,
        None => {
            eprintln!("error: sweep needs a positive step and a non-negative duration");
            std::process::exit(1);
        }
    };

    let frames = match engine.evaluate_frames(&times) {
        Ok(frames) => frames,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&frames).expect("snapshots serialize")
        );
        return;
    }
    if args.csv {
        print_csv_header(true);
        for frame in &frames {
            print_csv_rows(engine, frame, true);
        }
        return;
    }

    println!("=== ISC Profile Demo ===\n");
    print_run_header(engine);

    println!(
        "--- Zone development, 0 to {:.0} min every {:.0} min ---",
        args.duration, args.step
    );
    for frame in &frames {
        println!(
            "{:>8.1} min  |{}|  front {:>8.2} cm",
            frame.time.value(),
            strip(frame),
            frame.front_position.value()
        );
    }
    println!();
    print_strip_legend();

    // The last frame gets the full band summary
    if let Some(last) = frames.last() {
        println!("\nZone extents at {}:", last.time);
        print_zone_extents(engine, last);
    }
}

fn print_run_header(engine: &ProfileEngine) {
    let params = engine.parameters();
    let grid = engine.grid();
    println!(
        "Core: {} samples over {} at {} spacing",
        grid.len(),
        grid.core_length(),
        grid.step()
    );
    println!(
        "Run: {} -> {} front at {}, tail decay {}",
        params.initial_temperature,
        params.peak_temperature,
        params.front_velocity,
        params.decay_length
    );
    println!(
        "Oil: mu(T) = {} * exp({} / T_K) cP\n",
        params.viscosity.prefactor_cp, params.viscosity.activation_kelvin
    );
}

/// Compress the zone profile into a fixed-width glyph strip
fn strip(snapshot: &ProfileSnapshot) -> String {
    let n = snapshot.len();
    (0..STRIP_WIDTH)
        .map(|col| zone_glyph(snapshot.zones[col * n / STRIP_WIDTH]))
        .collect()
}

fn print_strip_legend() {
    let legend: Vec<String> = ZONE_STYLES
        .iter()
        .map(|(label, color, glyph)| format!("{glyph} {label} {color}"))
        .collect();
    println!("{}", legend.join("  |  "));
}

/// Print contiguous zone bands with their axial extents
fn print_zone_extents(engine: &ProfileEngine, snapshot: &ProfileSnapshot) {
    let positions = engine.grid().positions();
    let mut start = 0;
    for i in 1..=snapshot.len() {
        if i == snapshot.len() || snapshot.zones[i] != snapshot.zones[start] {
            println!(
                "  {:<18} [{:>8.2}, {:>8.2}] cm  ({} samples)",
                zone_label(snapshot.zones[start]),
                positions[start].value(),
                positions[i - 1].value(),
                i - start
            );
            start = i;
        }
    }
}

fn print_csv_header(with_time: bool) {
    if with_time {
        println!("time_min,x_cm,temperature_c,viscosity_cp,zone_code,zone_label");
    } else {
        println!("x_cm,temperature_c,viscosity_cp,zone_code,zone_label");
    }
}

fn print_csv_rows(engine: &ProfileEngine, snapshot: &ProfileSnapshot, with_time: bool) {
    let positions = engine.grid().positions();
    for i in 0..snapshot.len() {
        let zone = snapshot.zones[i];
        if with_time {
            print!("{},", snapshot.time.value());
        }
        println!(
            "{},{},{},{},{}",
            positions[i].value(),
            snapshot.temperatures[i].value(),
            snapshot.viscosities[i].value(),
            zone.index(),
            zone_label(zone)
        );
    }
}

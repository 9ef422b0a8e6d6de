// Journey Telemetry Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/journey-telemetry-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/journey-telemetry-simulator --drift toward-destination --tick-interval-ms 500 --verbose
// ```

use anyhow::{Context, Result};
use clap::Parser;
use journey_telemetry_simulator::publish::JsonLinesPublisher;
use journey_telemetry_simulator::simulation::{
    ArrivalCondition, Increment, Journey, JourneyOutcome, JourneyStatistics, LoggingConfig,
    LoggingGuard, StopSignal,
};
use journey_telemetry_simulator::types::config::CliArgs;
use journey_telemetry_simulator::types::SimulationConfig;
use std::io;
use std::process;
use tracing::{error, info, warn};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Held until exit so buffered file logs are written
    let _logging_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Journey Telemetry Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    match run_simulation(config) {
        Ok(statistics) => {
            eprintln!("{}", statistics.summary());
            info!("Journey Telemetry Simulator completed successfully");
        }
        Err(e) => {
            error!("Simulation failed: {:#}", e);
            process::exit(1);
        }
    }
}

/// Pick the logging setup from the CLI flags
fn init_logging(
    args: &CliArgs,
) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
    let mut logging = LoggingConfig::for_verbosity(args.verbose, args.debug);

    if args.json_logs {
        logging = logging.with_json_format();
    }
    if let Some(directory) = &args.log_dir {
        logging = logging.with_file_logging(directory.clone());
    }

    logging.init()
}

/// Run the journey, publishing JSON lines to stdout
fn run_simulation(config: SimulationConfig) -> Result<JourneyStatistics> {
    let stop = StopSignal::new();
    let handler_stop = stop.clone();
    ctrlc::set_handler(move || handler_stop.trigger())
        .context("Failed to install the interrupt handler")?;

    let stdout = io::stdout();
    let publisher = JsonLinesPublisher::new(stdout.lock());

    let mut journey = Journey::new(config, publisher)
        .context("Failed to initialize the journey")?
        .with_stop_signal(stop);

    let destination = journey.config().destination;
    let outcome = journey.run().context("Journey aborted")?;
    match outcome {
        JourneyOutcome::Arrived { ticks } => info!(
            "Vehicle has reached {} after {} ticks. Simulation ending...",
            destination, ticks
        ),
        JourneyOutcome::Interrupted { ticks } => {
            info!("Interrupted after {} published ticks", ticks)
        }
        JourneyOutcome::TickLimitReached { ticks } => {
            warn!("Stopped after {} ticks without reaching the destination", ticks)
        }
    }

    Ok(journey.statistics().clone())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Journey Telemetry Simulator");
    eprintln!("===========================");
    eprintln!("Correlated vehicle, GPS, traffic, weather and emergency telemetry");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Device ID: {}", config.device_id);
    eprintln!("  Camera ID: {}", config.camera_id);
    eprintln!("  Origin: {}", config.origin);
    eprintln!("  Destination: {}", config.destination);
    eprintln!("  Drift Mode: {} ({} steps)", config.drift_mode, config.drift_steps);
    eprintln!("  Position Jitter: {}", config.position_jitter);
    eprintln!(
        "  Clock Step: {} - {} seconds",
        config.min_clock_step_secs, config.max_clock_step_secs
    );
    eprintln!("  Tick Interval: {} ms", config.tick_interval_ms);
    if let Some(max_ticks) = config.max_ticks {
        eprintln!("  Max Ticks: {}", max_ticks);
    }
    eprintln!("  Random Seed: {}", config.seed);

    eprintln!("\nTopics:");
    eprintln!("  Vehicle: {}", config.topics.vehicle);
    eprintln!("  GPS: {}", config.topics.gps);
    eprintln!("  Traffic: {}", config.topics.traffic);
    eprintln!("  Weather: {}", config.topics.weather);
    eprintln!("  Emergency: {}", config.topics.emergency);

    let increment = Increment::for_route(
        config.drift_mode,
        config.origin,
        config.destination,
        config.drift_steps,
    );
    let arrival = ArrivalCondition::new(config.destination);
    eprintln!("\nEstimated Journey:");
    match arrival.tick_bound(config.origin, increment, config.position_jitter) {
        Some(bound) => eprintln!("  Arrival within {} ticks", bound),
        None => eprintln!("  Arrival not guaranteed; runs until interrupted or the tick limit"),
    }
    eprintln!();
}

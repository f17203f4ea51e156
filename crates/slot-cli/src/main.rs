//! `slotfinder` CLI — classify appointment slots from JSON booking data.
//!
//! ## Usage
//!
//! ```sh
//! # Classify a request (stdin → stdout)
//! echo '{"duration":60,"bookingsByPractitioner":{"t1":[{"start":"10:00","end":"11:00"}]}}' \
//!   | slotfinder classify
//!
//! # Override policy options from the command line
//! slotfinder classify -i request.json --day-start 09:00 --day-end 17:00 --min-gap 45
//!
//! # Group a flat list of store bookings by practitioner and classify each
//! slotfinder best-slots -i bookings.json -o slots.json
//!
//! # Show the free intervals left by one practitioner's bookings
//! echo '[{"start":"10:00","end":"11:00"}]' | slotfinder free
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=slot_engine=trace` or pass `-v` to
//! see per-slot decisions.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use slot_engine::{BestSlotsRequest, Booking, ClassifyRequest, SlotOptions};
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slotfinder",
    version,
    about = "Classify candidate appointment slots as strict, soft, or bad"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify slots for a `{duration, bookingsByPractitioner}` request
    Classify {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Group `{duration, bookings: [{therapistId, start, end}]}` and classify each practitioner
    BestSlots {
        #[command(flatten)]
        io: IoArgs,
    },
    /// List the free intervals left by a JSON array of `{start, end}` bookings
    Free {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

/// Overrides for the bookable day.
#[derive(Args)]
struct WindowArgs {
    /// Start of the bookable day ("HH:MM")
    #[arg(long)]
    day_start: Option<String>,
    /// End of the bookable day ("HH:MM")
    #[arg(long)]
    day_end: Option<String>,
}

impl WindowArgs {
    fn apply(self, options: &mut SlotOptions) {
        if let Some(day_start) = self.day_start {
            options.day_start = day_start;
        }
        if let Some(day_end) = self.day_end {
            options.day_end = day_end;
        }
    }
}

/// Command-line overrides, applied on top of options in the request.
#[derive(Args)]
struct PolicyArgs {
    #[command(flatten)]
    window: WindowArgs,
    /// Minimum remainder, in minutes, considered bookable
    #[arg(long)]
    min_gap: Option<i64>,
    /// Minutes between candidate start times
    #[arg(long)]
    step: Option<i64>,
    /// Comma-separated canonical session lengths in minutes (e.g. "60,90")
    #[arg(long, value_delimiter = ',')]
    session_lengths: Option<Vec<i64>>,
}

impl PolicyArgs {
    fn apply(self, options: &mut SlotOptions) {
        self.window.apply(options);
        if let Some(min_gap) = self.min_gap {
            options.min_gap = min_gap;
        }
        if let Some(step) = self.step {
            options.step = step;
        }
        if let Some(lengths) = self.session_lengths {
            options.session_lengths = lengths;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Classify { io, policy } => {
            let raw = read_input(io.input.as_deref())?;
            let mut request: ClassifyRequest =
                serde_json::from_str(&raw).context("Failed to parse classify request")?;
            policy.apply(&mut request.options);

            info!(
                practitioners = request.bookings_by_practitioner.len(),
                duration = request.duration,
                "classifying"
            );
            let response = slot_engine::classify_practitioners(&request)
                .context("Failed to classify slots")?;
            write_json(io.output.as_deref(), &response)?;
        }
        Commands::BestSlots { io } => {
            let raw = read_input(io.input.as_deref())?;
            let request: BestSlotsRequest =
                serde_json::from_str(&raw).context("Failed to parse best-slots request")?;

            info!(
                bookings = request.bookings.len(),
                duration = request.duration,
                "finding best slots"
            );
            let response =
                slot_engine::find_best_slots(&request).context("Failed to classify slots")?;
            write_json(io.output.as_deref(), &response)?;
        }
        Commands::Free { io, window } => {
            let raw = read_input(io.input.as_deref())?;
            let bookings: Vec<Booking> =
                serde_json::from_str(&raw).context("Failed to parse bookings")?;
            let mut options = SlotOptions::default();
            window.apply(&mut options);

            let free = slot_engine::free_intervals_for(&bookings, &options)
                .context("Failed to compute free intervals")?;
            write_json(io.output.as_deref(), &free)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean JSON. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty).with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tools::{GeneratorConfig, PlaybackOptions, frames_at};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tripgen", version, about = "Enrich trip paths for the viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enrich raw trips and append the decorative orbits (default).
    Build {
        #[arg(long, default_value = formats::DEFAULT_INPUT_PATH)]
        input: PathBuf,
        #[arg(long, default_value = formats::DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },
    /// Print the interpolated frame of every record at a timestamp.
    Frames {
        #[arg(long, default_value = formats::DEFAULT_OUTPUT_PATH)]
        input: PathBuf,
        /// Seconds since playback start.
        #[arg(long)]
        time: f64,
        /// Meters per second.
        #[arg(long, default_value_t = 10.0)]
        speed: f64,
        /// Clamp at the end instead of looping.
        #[arg(long, default_value_t = false)]
        no_loop: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Command::Build {
        input: PathBuf::from(formats::DEFAULT_INPUT_PATH),
        output: PathBuf::from(formats::DEFAULT_OUTPUT_PATH),
    });

    match command {
        Command::Build { input, output } => {
            let summary = tools::run(&input, &output, &GeneratorConfig::default())?;
            eprintln!(
                "wrote {} ({} records from {} trips, blake3={})",
                output.display(),
                summary.records,
                summary.input_trips,
                summary.content_hash
            );
        }
        Command::Frames {
            input,
            time,
            speed,
            no_loop,
        } => {
            if speed.is_nan() || speed <= 0.0 {
                return Err("--speed must be positive".into());
            }
            let records = formats::read_trip_records(&input)?;
            let options = PlaybackOptions {
                speed_mps: speed,
                looped: !no_loop,
            };
            let frames = frames_at(&records, options, time);
            println!("{}", serde_json::to_string_pretty(&frames)?);
        }
    }
    Ok(())
}

#![deny(unsafe_code)]
//! CLI driver binary for the particle-field system.
//!
//! Subcommands:
//! - `run <source>` — construct a source, tick it N times, write a JSON snapshot
//! - `list` — print available sources

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use glam::Vec3;
use particle_field_core::{ParticleSource, Seed};
use particle_field_sources::SourceKind;
use std::path::PathBuf;
use std::process;

/// Frame duration handed to `tick`; the host convention is one tick per
/// rendered frame at a nominal 60 Hz.
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(name = "particle-field", about = "Particle field simulation driver")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Construct a source, run it for N ticks, and write a JSON snapshot.
    Run {
        /// Source name (e.g. "reactor", "ambient").
        source: String,

        /// Number of particles in the pool.
        #[arg(short, long, default_value_t = 150)]
        count: usize,

        /// Number of simulation ticks.
        #[arg(short, long, default_value_t = 600)]
        ticks: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Pointer position as "x,y,z", held constant for the whole run.
        #[arg(short, long, default_value = "0,0,0")]
        pointer: String,

        /// Source parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "snapshot.json")]
        output: PathBuf,
    },
    /// List available sources.
    List,
}

/// Parses a "x,y,z" pointer string into a finite vector.
fn parse_pointer(raw: &str) -> Result<Vec3, CliError> {
    let components: Vec<f32> = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| CliError::Input(format!("invalid --pointer component '{part}': {e}")))
        })
        .collect::<Result<_, _>>()?;
    if components.len() != 3 {
        return Err(CliError::Input(format!(
            "expected --pointer as x,y,z, got {} components",
            components.len()
        )));
    }
    let pointer = Vec3::new(components[0], components[1], components[2]);
    if !pointer.is_finite() {
        return Err(CliError::Input(format!(
            "--pointer must be finite, got {pointer:?}"
        )));
    }
    Ok(pointer)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let sources = SourceKind::list_sources();
            if cli.json {
                let info = serde_json::json!({ "sources": sources });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Sources:");
                for name in sources {
                    println!("  {name}");
                }
            }
        }
        Command::Run {
            source,
            count,
            ticks,
            seed,
            pointer,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let pointer = parse_pointer(&pointer)?;

            let descriptor = Seed {
                source,
                count,
                params,
                seed,
                ticks,
            };
            descriptor.validate()?;

            let mut src = SourceKind::from_name(
                &descriptor.source,
                descriptor.count,
                descriptor.seed,
                &descriptor.params,
            )?;

            (0..descriptor.ticks).try_for_each(|_| src.tick(FRAME_DT, pointer))?;

            particle_field_sources::snapshot::write_json(&src, &output)?;

            if cli.json {
                let mut info = serde_json::to_value(&descriptor)?;
                info["output"] = serde_json::json!(output.display().to_string());
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "ran {} ({} particles, {} ticks, seed {}) -> {}",
                    descriptor.source,
                    descriptor.count,
                    descriptor.ticks,
                    descriptor.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

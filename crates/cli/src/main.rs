#![deny(unsafe_code)]
//! CLI host for the Chladni simulator.
//!
//! Subcommands:
//! - `render`: run the simulation N ticks, write a PNG
//! - `positions`: run N ticks, print filing positions
//! - `list`: print available engines, modes and palettes

mod error;

use chladni_core::{Engine, Palette, Seed};
use chladni_engines::pixel::{field_to_rgba, FigureStyle};
use chladni_engines::EngineKind;
use chladni_membrane::Mode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use error::CliError;
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chladni", about = "Chladni figure simulator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N ticks and write a PNG snapshot.
    Render {
        #[command(flatten)]
        sim: SimArgs,

        /// What to draw.
        #[arg(long, value_enum, default_value_t = Style::Figure)]
        style: Style,

        /// Palette for the density style (filings, monochrome, brass, ocean).
        #[arg(short, long, default_value = "filings")]
        palette: String,

        /// Output file path.
        #[arg(short, long, default_value = "chladni.png")]
        output: PathBuf,
    },
    /// Run the simulation for N ticks and print filing positions.
    Positions {
        #[command(flatten)]
        sim: SimArgs,
    },
    /// List available engines, modes and palettes.
    List,
}

#[derive(Args)]
struct SimArgs {
    /// Engine name.
    #[arg(long, default_value = "chladni")]
    engine: String,

    /// Frequency along x (clamped to 1..=10).
    #[arg(long, allow_negative_numbers = true)]
    freq_x: Option<i64>,

    /// Frequency along y (clamped to 1..=10).
    #[arg(long, allow_negative_numbers = true)]
    freq_y: Option<i64>,

    /// Vibration mode: standard, circular, radial, complex, or an index 0-3.
    #[arg(short, long)]
    mode: Option<String>,

    /// Number of filings (clamped to 100..=2000).
    #[arg(long)]
    particles: Option<usize>,

    /// Number of simulation ticks.
    #[arg(short, long, default_value_t = 300)]
    steps: usize,

    /// PRNG seed for deterministic output.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Image width in pixels.
    #[arg(short = 'W', long, default_value_t = 400)]
    width: usize,

    /// Image height in pixels.
    #[arg(short = 'H', long, default_value_t = 400)]
    height: usize,

    /// Engine parameters as a JSON object; explicit flags take precedence.
    #[arg(long, default_value = "{}")]
    params: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Style {
    /// Gridded membrane with one dot per filing.
    Figure,
    /// Filing density mapped through a palette.
    Density,
}

impl SimArgs {
    /// Builds the run description, layering flags over `--params`.
    fn to_seed(&self) -> Result<Seed, CliError> {
        let parsed: Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        let mut params: Map<String, Value> = match parsed {
            Value::Object(map) => map,
            other => {
                return Err(CliError::Input(format!(
                    "--params must be a JSON object, got {other}"
                )))
            }
        };
        if let Some(fx) = self.freq_x {
            params.insert("freq_x".into(), fx.into());
        }
        if let Some(fy) = self.freq_y {
            params.insert("freq_y".into(), fy.into());
        }
        if let Some(mode) = &self.mode {
            let mode = Mode::from_name(mode)?;
            params.insert("mode".into(), mode.name().to_ascii_lowercase().into());
        }
        if let Some(n) = self.particles {
            params.insert("particles".into(), n.into());
        }
        Ok(Seed::new(&self.engine, self.width, self.height, self.seed)
            .with_params(Value::Object(params))
            .with_steps(self.steps))
    }

    fn build(&self) -> Result<(Seed, EngineKind), CliError> {
        let seed = self.to_seed()?;
        info!(engine = %seed.engine, steps = seed.steps, seed = seed.seed, "running simulation");
        let engine = EngineKind::from_seed(&seed)?;
        Ok((seed, engine))
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            let modes: Vec<&str> = Mode::ALL.iter().map(|m| m.name()).collect();
            let palettes = Palette::list_names();
            if cli.json {
                let info = json!({
                    "engines": engines,
                    "modes": modes,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
                println!("Modes:");
                println!("  {}", modes.join(", "));
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Render {
            sim,
            style,
            palette,
            output,
        } => {
            let palette = Palette::from_name(&palette)?;
            let (seed, engine) = sim.build()?;

            let rgba = match style {
                Style::Figure => engine.draw_figure(&FigureStyle::default())?,
                Style::Density => field_to_rgba(engine.field(), &palette),
            };
            chladni_engines::snapshot::write_png(rgba, seed.width, seed.height, &output)?;

            let caption = engine.caption();
            if cli.json {
                let info = json!({
                    "seed": seed,
                    "caption": caption,
                    "params": engine.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{caption}");
                info!(
                    "rendered {} ({}x{}, {} steps, seed {}) -> {}",
                    seed.engine,
                    seed.width,
                    seed.height,
                    seed.steps,
                    seed.seed,
                    output.display()
                );
            }
        }
        Command::Positions { sim } => {
            let (seed, engine) = sim.build()?;
            let positions = engine.positions();
            if cli.json {
                let points: Vec<[f64; 2]> = positions.iter().map(|&(x, y)| [x, y]).collect();
                let info = json!({
                    "seed": seed,
                    "caption": engine.caption(),
                    "positions": points,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for (x, y) in positions {
                    println!("{x:.6}\t{y:.6}");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            tracing::error!("{e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chladni").chain(args.iter().copied())).unwrap()
    }

    fn sim(args: &[&str]) -> SimArgs {
        match parse(&[&["positions"][..], args].concat()).command {
            Command::Positions { sim } => sim,
            _ => unreachable!("parsed positions subcommand"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_params_json() {
        let seed = sim(&[
            "--params",
            r#"{"freq_x": 9, "mode": "radial", "particles": 500}"#,
            "--freq-x",
            "4",
            "--mode",
            "complex",
        ])
        .to_seed()
        .unwrap();
        assert_eq!(seed.params["freq_x"], 4);
        assert_eq!(seed.params["mode"], "complex");
        assert_eq!(seed.params["particles"], 500);
    }

    #[test]
    fn defaults_describe_classic_run() {
        let seed = sim(&[]).to_seed().unwrap();
        assert_eq!(seed.engine, "chladni");
        assert_eq!((seed.width, seed.height), (400, 400));
        assert_eq!(seed.steps, 300);
        assert_eq!(seed.seed, 42);
        assert_eq!(seed.params, json!({}));
    }

    #[test]
    fn mode_index_flag_accepted() {
        let seed = sim(&["--mode", "1"]).to_seed().unwrap();
        assert_eq!(seed.params["mode"], "circular");
        let seed = sim(&["--mode", "8"]).to_seed().unwrap();
        assert_eq!(seed.params["mode"], "unknown");
    }

    #[test]
    fn bad_mode_is_input_error() {
        let err = sim(&["--mode", "spiral"]).to_seed().unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn non_object_params_is_input_error() {
        let err = sim(&["--params", "[1, 2]"]).to_seed().unwrap_err();
        assert_eq!(err.exit_code(), 12);
        let err = sim(&["--params", "{oops"]).to_seed().unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn negative_frequency_parses_and_clamps() {
        let (_, engine) = sim(&["--freq-y", "-3", "--steps", "1"]).build().unwrap();
        assert_eq!(engine.params()["freq_y"], 1);
    }

    #[test]
    fn unknown_engine_is_engine_error() {
        let err = sim(&["--engine", "ising", "--steps", "0"]).build().unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn render_subcommand_parses_style_and_output() {
        match parse(&["render", "--style", "density", "-o", "out.png", "-W", "64"]).command {
            Command::Render {
                style,
                output,
                sim,
                palette,
            } => {
                assert!(matches!(style, Style::Density));
                assert_eq!(output, PathBuf::from("out.png"));
                assert_eq!(sim.width, 64);
                assert_eq!(palette, "filings");
            }
            _ => panic!("expected render"),
        }
    }
}

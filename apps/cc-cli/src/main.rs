use cc_app::{AppResult, CalcRequest, CalcResponse, DomainPolicy, load_input, render_json, render_text, run};
use cc_coil::{CalculatorInput, CoolingInput};
use cc_core::{Quantity, UnitError, parse_quantity};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "cc-cli")]
#[command(about = "Coil Calculator CLI - magnet coil turns, current density and cooling", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute coil parameters
    Calc(CalcArgs),
    /// Print the form presets as a YAML input document
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Numeric options accept a unit suffix (e.g. "16cm", "270mT", "200kPa").
#[derive(Args, Debug)]
struct CalcArgs {
    /// Input document (.yaml/.yml/.json); form presets when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Required magnetic field [T]
    #[arg(long, value_parser = flux_density_t, allow_negative_numbers = true)]
    field: Option<f64>,
    /// Pole gap [mm]
    #[arg(long, value_parser = length_mm, allow_negative_numbers = true)]
    gap: Option<f64>,
    /// Operating current [A]
    #[arg(long, value_parser = current_a, allow_negative_numbers = true)]
    current: Option<f64>,
    /// Conductor side length [mm]
    #[arg(long, value_parser = length_mm, allow_negative_numbers = true)]
    side: Option<f64>,
    /// Cooling duct diameter [mm]
    #[arg(long, value_parser = length_mm, allow_negative_numbers = true)]
    duct: Option<f64>,
    /// Correction factor from the excitation curve
    #[arg(long, value_parser = dimensionless, allow_negative_numbers = true)]
    correction_factor: Option<f64>,
    #[arg(long)]
    added_turns: Option<u32>,
    /// Number of coils
    #[arg(long)]
    coils: Option<u32>,
    #[arg(long)]
    horizontal_turns: Option<u32>,
    #[arg(long)]
    vertical_turns: Option<u32>,

    /// Include the cooling estimate
    #[arg(long)]
    cooling: bool,
    /// Drop the cooling estimate even if the input document has one
    #[arg(long, conflicts_with_all = [
        "cooling", "power", "large_units", "small_units", "delta_t", "pressure",
    ])]
    no_cooling: bool,
    /// Dissipated power per coil [W]
    #[arg(long, value_parser = power_w, allow_negative_numbers = true)]
    power: Option<f64>,
    #[arg(long)]
    large_units: Option<u32>,
    #[arg(long)]
    small_units: Option<u32>,
    /// Allowed temperature rise [°C]
    #[arg(long, value_parser = temperature_rise_c, allow_negative_numbers = true)]
    delta_t: Option<f64>,
    /// Available water pressure [bar]
    #[arg(long, value_parser = pressure_bar, allow_negative_numbers = true)]
    pressure: Option<f64>,

    /// Reject inputs outside the valid domain instead of printing inf/NaN
    #[arg(long)]
    strict: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn flux_density_t(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::FluxDensity)
}

fn length_mm(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::Length)
}

fn current_a(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::Current)
}

fn dimensionless(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::Dimensionless)
}

fn power_w(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::Power)
}

fn temperature_rise_c(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::TemperatureRise)
}

fn pressure_bar(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::Pressure)
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports can be piped
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Calc(args) => cmd_calc(&args),
        Commands::Template => cmd_template(),
    }
}

fn cmd_calc(args: &CalcArgs) -> AppResult<()> {
    let base = match &args.input {
        Some(path) => load_input(path)?,
        None => CalculatorInput::default(),
    };
    let input = apply_overrides(base, args);

    let request = CalcRequest {
        input,
        policy: if args.strict {
            DomainPolicy::Strict
        } else {
            DomainPolicy::Permissive
        },
    };
    let response = run(&request)?;

    print!("{}", build_report(&response, args.format)?);
    Ok(())
}

fn build_report(response: &CalcResponse, format: OutputFormat) -> AppResult<String> {
    let mut report = String::new();
    match format {
        OutputFormat::Text => {
            report.push_str("Calculation Results\n");
            report.push_str(&render_text(&response.output));
            if !response.non_finite.is_empty() {
                report.push_str(&format!(
                    "\n⚠ Non-finite values (input outside valid domain): {}\n",
                    response.non_finite.join(", ")
                ));
            }
        }
        OutputFormat::Json => {
            report.push_str(&render_json(&response.output)?);
            report.push('\n');
        }
    }
    Ok(report)
}

fn cmd_template() -> AppResult<()> {
    print!("{}", cc_app::default_input_yaml()?);
    Ok(())
}

/// Layer the command-line values over the base input.
fn apply_overrides(mut input: CalculatorInput, args: &CalcArgs) -> CalculatorInput {
    fn set<T: Copy>(target: &mut T, value: Option<T>) {
        if let Some(v) = value {
            *target = v;
        }
    }

    set(&mut input.required_field_t, args.field);
    set(&mut input.pole_gap_mm, args.gap);
    set(&mut input.current_a, args.current);
    set(&mut input.conductor_side_mm, args.side);
    set(&mut input.cooling_duct_diameter_mm, args.duct);
    set(&mut input.correction_factor, args.correction_factor);
    set(&mut input.added_turns, args.added_turns);
    set(&mut input.num_coils, args.coils);
    set(&mut input.horizontal_turns_selected, args.horizontal_turns);
    set(&mut input.vertical_turns_selected, args.vertical_turns);

    if args.no_cooling {
        input.cooling = None;
        return input;
    }

    let wants_cooling = args.cooling
        || args.power.is_some()
        || args.large_units.is_some()
        || args.small_units.is_some()
        || args.delta_t.is_some()
        || args.pressure.is_some();
    if wants_cooling {
        let cooling = input.cooling.get_or_insert_with(CoolingInput::default);
        set(&mut cooling.power_per_coil_w, args.power);
        set(&mut cooling.num_large_units, args.large_units);
        set(&mut cooling.num_small_units, args.small_units);
        set(&mut cooling.allowed_delta_t_c, args.delta_t);
        set(&mut cooling.available_pressure_bar, args.pressure);
    }

    input
}

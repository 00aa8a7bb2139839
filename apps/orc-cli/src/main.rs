use clap::{Args, Parser, Subcommand};
use orc_app::{
    AppError, AppResult, Backend, CycleConfig, InputValue, default_config, load_config, report,
    run_service, save_config,
};
use orc_fluids::WorkingFluid;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "orc-cli")]
#[command(about = "ORC cycle evaluator - design-point analysis of Rankine power cycles", long_about = None)]
struct Cli {
    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the cycle and print the results
    Run(RunArgs),
    /// Write the reference configuration to a YAML file
    InitConfig {
        /// Path of the YAML file to create
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate a configuration file
    Validate {
        /// Path to the config YAML file
        config_path: PathBuf,
    },
    /// List supported working fluids and their critical points
    Fluids {
        /// Property backend to query (coolprop or surrogate)
        #[arg(long, default_value = "coolprop")]
        backend: Backend,
    },
}

/// Values may carry units, e.g. `--source-temp "34 C"` or `--target-power "100 kW"`.
#[derive(Args)]
struct RunArgs {
    /// Config YAML file (reference design point if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Run name shown in the report header
    #[arg(long)]
    name: Option<String>,
    /// Working fluid (e.g. CO2, R245fa, isobutane)
    #[arg(long)]
    fluid: Option<WorkingFluid>,
    /// Property backend (coolprop or surrogate)
    #[arg(long)]
    backend: Option<Backend>,
    /// Heat source temperature
    #[arg(long, value_name = "TEMP")]
    source_temp: Option<String>,
    /// Heat sink temperature
    #[arg(long, value_name = "TEMP")]
    sink_temp: Option<String>,
    /// Evaporator pinch
    #[arg(long, value_name = "DELTA_T")]
    evap_pinch: Option<String>,
    /// Condenser pinch
    #[arg(long, value_name = "DELTA_T")]
    cond_pinch: Option<String>,
    /// Superheat at evaporator exit
    #[arg(long, value_name = "DELTA_T")]
    superheat: Option<String>,
    /// Subcooling at condenser exit
    #[arg(long, value_name = "DELTA_T")]
    subcool: Option<String>,
    /// Turbine isentropic efficiency
    #[arg(long, value_name = "FRACTION")]
    turbine_eff: Option<String>,
    /// Pump isentropic efficiency
    #[arg(long, value_name = "FRACTION")]
    pump_eff: Option<String>,
    /// Generator efficiency
    #[arg(long, value_name = "FRACTION")]
    generator_eff: Option<String>,
    /// Net electrical power target
    #[arg(long, value_name = "POWER")]
    target_power: Option<String>,
    /// Also print the state-point table and extended metrics
    #[arg(long)]
    states: bool,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.command {
        Commands::Run(args) => cmd_run(args),
        Commands::InitConfig { path, force } => cmd_init_config(&path, force),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Fluids { backend } => cmd_fluids(backend),
    }
}

fn cmd_run(args: RunArgs) -> AppResult<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => default_config(),
    };
    apply_overrides(&mut config, &args);

    let response = run_service::run(&config)?;
    print!("{}", report::render(&response, args.states));
    Ok(())
}

/// Replace config fields with any values given on the command line.
fn apply_overrides(config: &mut CycleConfig, args: &RunArgs) {
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if let Some(fluid) = args.fluid {
        config.fluid = fluid;
    }
    if let Some(backend) = args.backend {
        config.backend = backend;
    }

    let fields = [
        (&mut config.source_temperature, &args.source_temp),
        (&mut config.sink_temperature, &args.sink_temp),
        (&mut config.evaporator_pinch, &args.evap_pinch),
        (&mut config.condenser_pinch, &args.cond_pinch),
        (&mut config.superheat, &args.superheat),
        (&mut config.subcool, &args.subcool),
        (&mut config.turbine_efficiency, &args.turbine_eff),
        (&mut config.pump_efficiency, &args.pump_eff),
        (&mut config.generator_efficiency, &args.generator_eff),
        (&mut config.target_power, &args.target_power),
    ];
    for (slot, value) in fields {
        if let Some(text) = value {
            *slot = InputValue::Text(text.clone());
        }
    }
}

fn cmd_init_config(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    save_config(path, &default_config())?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = load_config(config_path)?;
    run_service::build_fluid_model(config.backend, config.fluid)?;
    println!(
        "✓ Config is valid ({}, {} backend)",
        config.fluid, config.backend
    );
    Ok(())
}

fn cmd_fluids(backend: Backend) -> AppResult<()> {
    println!("Working fluids ({} backend):", backend);
    for summary in run_service::list_fluids(backend) {
        match (summary.critical_temperature, summary.critical_pressure) {
            (Some(t_crit), Some(p_crit)) => println!(
                "  {:<11} {:<15} Tc = {:>7.2} K  Pc = {:>8.1} kPa",
                summary.fluid.key(),
                summary.fluid.display_name(),
                t_crit.value,
                p_crit.value / 1e3
            ),
            _ => println!(
                "  {:<11} {:<15} (not available)",
                summary.fluid.key(),
                summary.fluid.display_name()
            ),
        }
    }
    Ok(())
}

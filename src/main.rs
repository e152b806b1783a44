use clap::Parser;
use env_logger::Env;
use log::info;

pub mod config;
pub mod io;
pub mod model;
pub mod physics;

use config::Config;
use physics::Variant;

#[derive(Parser)]
#[command(name = "beta2omega")]
#[command(about = "Collapse a beta-phase 3x3x3 bcc supercell into an omega variant")]
#[command(version)]
struct Cli {
    /// Input POSCAR with direct coordinates (9 header lines, then positions)
    #[arg(default_value = "POSCAR")]
    input: String,

    /// Output file; the input header is copied through verbatim
    #[arg(short, long, default_value = "OUTCAR")]
    output: String,

    /// Omega variant to generate
    #[arg(short = 'V', long, value_enum)]
    variant: Option<Variant>,

    /// Collapse factor (1 = full collapse, 2 = half collapse)
    #[arg(short, long)]
    factor: Option<f64>,

    /// Explicit per-axis shift magnitude, replacing the derived delta
    #[arg(short, long)]
    delta: Option<f64>,

    /// Persist the selected variant and collapse settings as defaults
    #[arg(long)]
    save_defaults: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let (mut config, message) = Config::load();
    info!("{}", message);

    if let Some(variant) = cli.variant {
        config.default_variant = variant;
    }
    if let Some(factor) = cli.factor {
        if factor <= 0.0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Collapse factor must be positive",
            ));
        }
        config.collapse.factor = factor;
    }
    if let Some(delta) = cli.delta {
        config.collapse.delta_override = Some(delta);
    }

    if cli.save_defaults {
        info!("{}", config.save());
    }

    let mut structure = io::load_structure(&cli.input)?;
    physics::beta_to_omega(&mut structure, config.default_variant, &config.collapse);
    io::save_structure(&cli.output, &structure)?;

    info!("Wrote {} atoms to {}", structure.atoms.len(), cli.output);
    Ok(())
}

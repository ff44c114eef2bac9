use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use news2_core::constants::SPO2_SCALE_ENV_VAR;
use news2_core::{
    score_breakdown, spo2_scale_from_env_value, vitals, ClinicalRisk, ConsciousnessLevel,
    DocumentFormat, ScoringConfig, SpO2Scale, VitalSigns,
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "news2")]
#[command(about = "NEWS2 early warning score calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a set of observations given on the command line
    Score {
        /// Respiratory rate (breaths/min)
        #[arg(long, allow_negative_numbers = true)]
        resp_rate: i32,
        /// Oxygen saturation (%)
        #[arg(long, allow_negative_numbers = true)]
        spo2: i32,
        /// Patient is receiving supplemental oxygen
        #[arg(long)]
        on_oxygen: bool,
        /// Systolic blood pressure (mmHg)
        #[arg(long, allow_negative_numbers = true)]
        systolic_bp: i32,
        /// Pulse (beats/min)
        #[arg(long, allow_negative_numbers = true)]
        pulse: i32,
        /// Temperature (°C)
        #[arg(long, allow_negative_numbers = true)]
        temp: f64,
        /// Consciousness level: Alert, Confused, Voice, Pain, Unresponsive or A/C/V/P/U
        #[arg(long, default_value = "alert")]
        consciousness: ConsciousnessLevel,
        #[command(flatten)]
        options: ScoreOptions,
    },
    /// Score observations from a JSON or YAML file
    ScoreFile {
        /// Path to a .json, .yaml or .yml vitals document
        path: PathBuf,
        #[command(flatten)]
        options: ScoreOptions,
    },
    /// List ACVPU consciousness levels
    Levels,
}

#[derive(Args)]
struct ScoreOptions {
    /// SpO2 scale: 1 or 2 (defaults to NEWS2_SPO2_SCALE, otherwise scale 1)
    #[arg(long)]
    scale: Option<SpO2Scale>,
    /// Print each sub-score
    #[arg(long)]
    breakdown: bool,
}

/// Entry point for the `news2` binary.
///
/// Configuration is resolved once here and passed down.
///
/// # Environment Variables
/// - `NEWS2_SPO2_SCALE`: default SpO2 scale when `--scale` is not given (default: scale 1)
/// - `RUST_LOG`: log filter; logs are written to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("news2=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let default_scale = spo2_scale_from_env_value(std::env::var(SPO2_SCALE_ENV_VAR).ok())
        .with_context(|| format!("invalid {SPO2_SCALE_ENV_VAR}"))?;
    let cfg = ScoringConfig::new(default_scale);

    let cli = Cli::parse();
    print!("{}", run(cli, &cfg)?);

    Ok(())
}

fn run(cli: Cli, cfg: &ScoringConfig) -> anyhow::Result<String> {
    match cli.command {
        Some(Commands::Score {
            resp_rate,
            spo2,
            on_oxygen,
            systolic_bp,
            pulse,
            temp,
            consciousness,
            options,
        }) => {
            let vitals = VitalSigns {
                respiratory_rate: resp_rate,
                oxygen_saturation: spo2,
                on_oxygen,
                systolic_bp,
                pulse,
                temperature: temp,
                consciousness,
            };
            render_report(&vitals, cfg.resolve_scale(options.scale), options.breakdown)
        }
        Some(Commands::ScoreFile { path, options }) => {
            let vitals = read_vitals_file(&path)?;
            render_report(&vitals, cfg.resolve_scale(options.scale), options.breakdown)
        }
        Some(Commands::Levels) => {
            let mut out = String::new();
            for level in ConsciousnessLevel::ALL {
                let letter = level.letter().map(String::from).unwrap_or_default();
                writeln!(out, "{} {} {}", level.code(), letter, level.name())?;
            }
            Ok(out)
        }
        None => Ok("Use 'news2 --help' for commands\n".to_string()),
    }
}

fn read_vitals_file(path: &Path) -> anyhow::Result<VitalSigns> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let format = DocumentFormat::from_extension(extension)?;

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vitals file {}", path.display()))?;
    let vitals = vitals::read_document(&text, format)
        .with_context(|| format!("failed to parse vitals file {}", path.display()))?;

    tracing::info!("read {} vitals from {}", format.name(), path.display());
    Ok(vitals)
}

fn render_report(
    vitals: &VitalSigns,
    scale: SpO2Scale,
    show_breakdown: bool,
) -> anyhow::Result<String> {
    let breakdown = score_breakdown(vitals, scale);
    let risk = ClinicalRisk::classify(&breakdown);

    let mut out = String::new();
    writeln!(out, "{vitals}")?;
    if show_breakdown {
        for (label, score) in breakdown.terms() {
            writeln!(out, "  {label}: {score}")?;
        }
    }
    writeln!(out, "NEWS2 ({scale}): {}", breakdown.total())?;
    writeln!(out, "Clinical risk: {risk}")?;
    Ok(out)
}

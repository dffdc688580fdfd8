use anyhow::{Result, bail};
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::{ProjectExporter, ValidationReport};
use infrastructure::config::ExporterConfig;
use infrastructure::{PrgFileWriter, load_project};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override project snapshot path
    #[arg(long)]
    project: Option<String>,

    /// Override output path
    #[arg(long)]
    output: Option<String>,

    /// Validate the project and exit without writing
    #[arg(long)]
    check: bool,

    /// Refuse to write when validation reports defects
    #[arg(long)]
    strict: bool,
}

fn run() -> Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                "info,prg_exporter=debug,application=debug,infrastructure=debug".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🏭 PRG Exporter Starting...");

    let args = Args::parse();

    // 1. Load Configuration
    info!("📂 Config directory: {}", args.config_dir);
    let mut config = ExporterConfig::load(&args.config_dir)?;

    // Override with CLI args if present
    if let Some(project) = args.project {
        config.project_path = project;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if args.strict {
        config.strict = true;
    }

    // 2. Load Project Snapshot
    let project = load_project(&config.project_path)?;
    for message in &project.messages {
        warn!("⚠️ {}", message);
    }

    // 3. Validate
    let report = ValidationReport::collect(&project.devices, &project.tech_objects);
    for message in report.messages() {
        warn!("⚠️ {}", message);
    }
    info!(defects = report.len(), "Validation finished");

    if args.check {
        if report.is_empty() {
            info!("✅ Project is ready for export");
            return Ok(());
        }
        bail!("Validation reported {} defect(s)", report.len());
    }
    if config.strict && !report.is_empty() {
        bail!(
            "Validation reported {} defect(s), nothing written (strict mode)",
            report.len()
        );
    }

    // 4. Render & Write
    let exporter = ProjectExporter::new(config.export.clone());
    let rendered = exporter.render(&project.devices, &project.tech_objects);
    for message in &rendered.diagnostics {
        warn!("⚠️ {}", message);
    }

    PrgFileWriter::new(&config.output_path).write(&rendered.document)?;
    info!(path = %config.output_path, "✅ Export finished");

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ CRITICAL ERROR: {:?}", e);
        std::process::exit(1);
    }
}

//! CardioCare: Cardiac risk assessment engine.
//!
//! Command-line entry point. Reads a patient JSON file, runs the selected
//! assessment, prints the outcome and writes the PDF report.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cardiocare::adapters::{artifacts, InMemoryHistory};
use cardiocare::application::{AssessmentService, HistoryService};
use cardiocare::domain::{risk_factors, AssessmentMode, PatientInput};
use cardiocare::report;

fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    // Log to a file when CARDIOCARE_LOG_FILE is set, otherwise to stdout.
    let (writer, guard) = match std::env::var("CARDIOCARE_LOG_FILE") {
        Ok(log_file) => {
            if let Some(parent) = std::path::Path::new(&log_file).parent() {
                // Best-effort: don't fail startup just because the directory is missing.
                let _ = std::fs::create_dir_all(parent);
            }
            match std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
            {
                Ok(file) => tracing_appender::non_blocking(file),
                Err(_) => tracing_appender::non_blocking(std::io::stdout()),
            }
        }
        Err(_) => tracing_appender::non_blocking(std::io::stdout()),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    Some(guard)
}

fn parse_mode(arg: &str) -> Result<AssessmentMode> {
    match arg {
        "early" | "early-warning" => Ok(AssessmentMode::EarlyWarning),
        "comprehensive" | "heart-disease" => Ok(AssessmentMode::Comprehensive),
        other => Err(anyhow!(
            "Unknown mode '{other}', expected 'early' or 'comprehensive'"
        )),
    }
}

fn main() -> Result<()> {
    let _guard = init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("Usage: cardiocare <early|comprehensive> <patient.json> [output-dir]");
    }
    let mode = parse_mode(&args[1])?;
    let patient_path = PathBuf::from(&args[2]);
    let output_dir = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let model_dir = std::env::var("CARDIOCARE_MODEL_DIR")
        .unwrap_or_else(|_| "exported_models".to_string());

    // Missing or corrupt artifacts are fatal; the error names the file.
    // Loaded once per process, then served from memory.
    let bundle = artifacts::shared(std::path::Path::new(&model_dir))
        .with_context(|| format!("Error loading models from '{model_dir}'"))?;

    let patient: PatientInput = serde_json::from_slice(
        &std::fs::read(&patient_path)
            .with_context(|| format!("Failed to read {}", patient_path.display()))?,
    )
    .context("Failed to parse patient input")?;

    if let Err(errors) = patient.validate() {
        bail!("Invalid patient data: {}", errors.join("; "));
    }

    let history = Arc::new(InMemoryHistory::new());
    let service = AssessmentService::new(bundle, history.clone());

    let result = service.assess(mode, &patient)?;

    println!("Assessment Type: {}", result.mode.report_label());
    println!(
        "Risk Level: {} (probability {})",
        result.risk_label(),
        result.probability_percent()
    );
    println!("Risk Band: {}", result.risk_level().description());
    println!("Recommendations:");
    for recommendation in &result.recommendations {
        println!("  - {recommendation}");
    }

    match mode {
        AssessmentMode::EarlyWarning => {
            let (labels, values): (Vec<&str>, Vec<f64>) =
                risk_factors::EARLY_FACTOR_IMPACTS.into_iter().unzip();
            let chart = report::factor_bar_chart(&labels, &values, "Risk Factor Impact");
            tracing::debug!(spec = %serde_json::to_string(&chart)?, "Factor chart");
        }
        AssessmentMode::Comprehensive => {
            let plan = cardiocare::domain::risk_reduction_plan(&patient);
            println!("Top Improvement Areas:");
            for item in &plan.improvement {
                println!("  - {item}");
            }
            println!("Monitoring:");
            for item in &plan.monitoring {
                println!("  - {item}");
            }

            for (factors, title) in [
                (
                    risk_factors::modifiable_factors(&patient),
                    "Modifiable Risk Factors",
                ),
                (
                    risk_factors::non_modifiable_factors(&patient),
                    "Non-Modifiable Risk Factors",
                ),
            ] {
                let (labels, values): (Vec<&str>, Vec<f64>) = factors.into_iter().unzip();
                let chart = report::factor_bar_chart(&labels, &values, title);
                tracing::debug!(spec = %serde_json::to_string(&chart)?, "Factor chart");
            }
        }
    }

    let gauge_title = match mode {
        AssessmentMode::EarlyWarning => "Cardiac Risk Gauge",
        AssessmentMode::Comprehensive => "Cardiovascular Risk Gauge",
    };
    let gauge = report::risk_gauge(result.probability, gauge_title);
    tracing::debug!(spec = %serde_json::to_string(&gauge)?, "Risk gauge");

    let info = report::patient_summary(mode, &patient);
    let pdf = report::render_report(&info, &result)?;
    let report_path = output_dir.join(report::report_filename(&patient.id));
    std::fs::write(&report_path, pdf)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;
    println!("Report written to {}", report_path.display());

    let summary = HistoryService::new(history).summary()?;
    tracing::info!(
        "Session history: {} assessment(s), average probability {:.1}%",
        summary.count,
        summary.average_probability * 100.0
    );

    Ok(())
}

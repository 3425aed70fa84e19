use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;

use padcheck::config::{Config, OutputFormat};
use padcheck::validation::{validate_document, ValidationResult};

/// Per-file lint report for JSON output
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    file: String,
    diagnostics: &'a [padcheck::Diagnostic],
}

fn main() -> Result<()> {
    env_logger::init();

    // Parse configuration from command line and project config file
    let config = Config::from_args_and_env()?;
    debug!("resolved policy: {:?}", config.policy);

    let mut reports: Vec<(PathBuf, ValidationResult)> = Vec::new();
    for path in &config.files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading source file {}", path.display()))?;
        let result = validate_document(&content, config.policy);
        debug!(
            "{}: {} diagnostic(s)",
            path.display(),
            result.diagnostics.len()
        );
        reports.push((path.clone(), result));
    }

    let total: usize = reports.iter().map(|(_, r)| r.diagnostics.len()).sum();

    match config.format {
        OutputFormat::Text => {
            for (path, result) in &reports {
                for d in &result.diagnostics {
                    println!(
                        "{}:{}:{}: warning: {}",
                        path.display(),
                        d.line,
                        d.col,
                        d.message
                    );
                }
            }
        }
        OutputFormat::Json => {
            let json_reports: Vec<FileReport> = reports
                .iter()
                .map(|(path, result)| FileReport {
                    file: path.display().to_string(),
                    diagnostics: &result.diagnostics,
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json_reports).context("serializing diagnostics")?
            );
        }
    }

    if total > 0 {
        std::process::exit(1);
    }
    Ok(())
}

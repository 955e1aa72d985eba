mod catalog;
mod classifier;
mod config;
mod inference;
mod model;
mod normalizer;
mod pipeline;
mod report;
#[cfg(test)]
mod testing;

use catalog::{output_rows, read_records, write_output};
use classifier::{RuleEngine, RuleSet};
use config::{AppConfig, load_config};
use inference::OllamaBackend;
use pipeline::{Pipeline, PipelineSettings};
use std::env;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let rules = match &config.rules_path {
        Some(path) => match RuleSet::load(path) {
            Ok(rules) => {
                info!("Loaded ruleset from {}", path.display());
                rules
            }
            Err(e) => {
                error!("Ruleset load error: {}", e);
                return;
            }
        },
        None => RuleSet::builtin(),
    };

    let backend = match OllamaBackend::new(
        &config.base_url,
        config.request_timeout(),
        config.preflight_timeout(),
    ) {
        Ok(b) => Arc::new(b),
        Err(e) => {
            error!("Failed to create inference client: {}", e);
            return;
        }
    };

    info!("Reading records from {}", config.input_path.display());
    let records = match read_records(&config.input_path) {
        Ok(r) => r,
        Err(e) => {
            error!("Input error: {}", e);
            return;
        }
    };
    info!("Loaded {} records", records.len());

    let pipeline = Pipeline::new(RuleEngine::new(rules), backend, PipelineSettings::from(&config));
    let output = match pipeline.run(&records).await {
        Ok(o) => o,
        Err(e) => {
            error!("Pipeline aborted: {}", e);
            return;
        }
    };

    let rows = output_rows(&records, &output.resolutions);
    if let Err(e) = write_output(&config.output_path, &rows) {
        error!("Output error: {}", e);
        return;
    }
    info!("Wrote {} rows to {}", rows.len(), config.output_path.display());
    output.summary.log();
}

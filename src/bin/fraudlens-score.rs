//! Developer utility to score one claim without the dashboard.
//!
//! Reads a claim from a JSON file (or uses the dashboard defaults), scores it
//! with the configured model and offers it to the inference log.

use std::path::{Path, PathBuf};

use fraudlens::claim::{ClaimForm, ClaimRecord};
use fraudlens::config::{self, AppConfig};
use fraudlens::inference_log::{InferenceLog, LogTail, log_header};
use fraudlens::logging;
use fraudlens::ml::FraudModel;
use fraudlens::service::FraudService;

fn main() {
    if let Err(err) = logging::init_for_cli() {
        eprintln!("Logging disabled: {err}");
    }
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Default)]
struct CliOptions {
    model_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
    claim_path: Option<PathBuf>,
    tail: Option<usize>,
    no_log: bool,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let config = resolve_config(&options)?;

    if let Some(limit) = options.tail {
        return print_tail(&InferenceLog::new(&config.log_path), limit);
    }

    let record = match &options.claim_path {
        Some(path) => read_claim(path)?,
        None => ClaimForm::default().build().map_err(|err| err.to_string())?,
    };
    let model = FraudModel::load_json(&config.model_path).map_err(|err| err.to_string())?;
    let mut service = FraudService::new(
        Box::new(model),
        InferenceLog::new(&config.log_path),
        config.recent_rows,
    );
    let report = if options.no_log {
        service.score_only(record)
    } else {
        service.score_and_log(record)
    }
    .map_err(|err| err.to_string())?;
    println!("{}", report.verdict_text());
    println!("{}", report.probability_text());
    if let Some(message) = report.logging_text() {
        println!("{message}");
    }
    match report.logging {
        Some(Err(_)) => Err("Prediction was not logged".to_string()),
        _ => Ok(()),
    }
}

fn resolve_config(options: &CliOptions) -> Result<AppConfig, String> {
    let mut config = if options.model_path.is_some() && options.log_path.is_some() {
        AppConfig::default()
    } else {
        config::load_or_default().map_err(|err| err.to_string())?
    };
    if let Some(path) = &options.model_path {
        config.model_path = path.clone();
    }
    if let Some(path) = &options.log_path {
        config.log_path = path.clone();
    }
    Ok(config)
}

fn read_claim(path: &Path) -> Result<ClaimRecord, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read claim {}: {err}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|err| format!("Invalid claim JSON in {}: {err}", path.display()))
}

fn print_tail(log: &InferenceLog, limit: usize) -> Result<(), String> {
    match log.tail(limit).map_err(|err| err.to_string())? {
        LogTail::Missing => println!("No logs found yet."),
        LogTail::Rows(rows) => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer
                .write_record(log_header())
                .map_err(|err| err.to_string())?;
            for row in &rows {
                writer
                    .write_record(row.to_cells())
                    .map_err(|err| err.to_string())?;
            }
            writer.flush().map_err(|err| err.to_string())?;
        }
    }
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--model" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--model requires a value".to_string())?;
                options.model_path = Some(PathBuf::from(value));
            }
            "--log" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--log requires a value".to_string())?;
                options.log_path = Some(PathBuf::from(value));
            }
            "--claim" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--claim requires a value".to_string())?;
                options.claim_path = Some(PathBuf::from(value));
            }
            "--tail" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--tail requires a value".to_string())?;
                options.tail = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("Invalid --tail value: {value}"))?,
                );
            }
            "--no-log" => options.no_log = true,
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(options)
}

fn help_text() -> String {
    [
        "fraudlens-score",
        "",
        "Usage:",
        "  fraudlens-score [--claim <claim.json>] [options]",
        "  fraudlens-score --tail <n> [--log <file.csv>]",
        "",
        "Options:",
        "  --model <model.json>  Model artifact (default: from config.toml).",
        "  --log <file.csv>      Inference log (default: from config.toml).",
        "  --claim <claim.json>  Claim attributes; dashboard defaults when omitted.",
        "  --tail <n>            Print the last n logged rows as CSV and exit.",
        "  --no-log              Score without writing to the inference log.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let options = parse_args(args(&[
            "--model", "m.json", "--log", "l.csv", "--claim", "c.json", "--no-log",
        ]))
        .unwrap();
        assert_eq!(options.model_path, Some(PathBuf::from("m.json")));
        assert_eq!(options.log_path, Some(PathBuf::from("l.csv")));
        assert_eq!(options.claim_path, Some(PathBuf::from("c.json")));
        assert!(options.no_log);
        assert_eq!(options.tail, None);
    }

    #[test]
    fn rejects_bad_tail_and_unknown_flags() {
        assert!(parse_args(args(&["--tail", "ten"])).is_err());
        assert!(parse_args(args(&["--tail"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }
}

//! Library exports for reuse in benchmarks and tests.
/// Per-user application directories.
pub mod app_dirs;
/// Claim attributes and form validation.
pub mod claim;
/// Persistent TOML configuration.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Append-only CSV log of scored claims.
pub mod inference_log;
/// Tracing setup.
pub mod logging;
/// Fraud model loading and inference.
pub mod ml;
/// Scoring service shared by the dashboard and the CLI.
pub mod service;

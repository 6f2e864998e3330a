//! Tracing setup with optional OpenTelemetry file export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → file
//!                ↘ fmt layer → stderr            (when no trace file is configured)
//! ```
//!
//! # Configuration
//!
//! - `trace_level`: `EnvFilter` directive, default `"info"`
//! - `trace_file`: path of the JSON-lines span file
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `exporter`: span exporter writing one JSON object per span
//! - `file_writer`: size-capped span file (10 MB, 3 numbered backups)

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;

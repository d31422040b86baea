//! Structured logging and optional OpenTelemetry span export.
//!
//! Logs are JSON lines on stdout. When an OTLP endpoint is configured, spans
//! (including the per-request spans opened by `TraceLayer`) are exported to it.
//!
//! - Log level is configurable via `LOG_LEVEL` (default: `info`); `RUST_LOG`
//!   takes precedence when set.
//! - Session ids, cookies, and user records must not appear in any log field.

pub mod init;

pub use init::{init_telemetry, shutdown};

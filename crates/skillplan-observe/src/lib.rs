//! Logging and trace export for skillplan binaries.

pub mod tracing_setup;

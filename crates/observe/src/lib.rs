//! Observability glue shared across the workspace: tracing subscriber
//! initialization and a panic hook that routes panics through the logs.

pub mod tracing;

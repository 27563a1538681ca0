//! Observability setup for the NyayGuru client.

pub mod tracing_setup;

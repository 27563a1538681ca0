//! HTTP transport for the remote answering service.

pub mod client;
mod types;

pub use client::HttpApiClient;

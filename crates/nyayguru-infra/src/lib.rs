//! Infrastructure implementations for the NyayGuru client.
//!
//! Implements the `nyayguru-core` API traits over HTTP with reqwest, and
//! loads client configuration from disk and the environment.

pub mod config;
pub mod http;
pub mod token;

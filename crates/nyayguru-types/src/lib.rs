//! Shared domain types for the NyayGuru client.
//!
//! This crate contains the core domain types used across the NyayGuru
//! workspace: chat messages and transcripts, sessions, categories,
//! languages, auth payloads, document analysis results, and the structured
//! API error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod auth;
pub mod chat;
pub mod config;
pub mod document;
pub mod error;
pub mod message;

//! Business logic and API trait definitions for the NyayGuru client.
//!
//! This crate defines the "ports" (remote-service traits) that the
//! infrastructure layer implements, plus the chat session orchestrator
//! that the view layer drives. It depends only on `nyayguru-types` --
//! never on `nyayguru-infra` or any HTTP crate.

pub mod auth;
pub mod chat;
pub mod client;
pub mod retry;

//! Interactive chat session for the terminal.
//!
//! Implements the chat loop: orchestrator-driven sends with a thinking
//! spinner, slash commands for category/language switching, and styled
//! rendering of answers, sources, and suggested questions.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod commands;
pub mod loop_runner;
pub mod renderer;

pub use loop_runner::run_chat_loop;

//! Chat session orchestration.
//!
//! The orchestrator mediates between the view layer and the remote
//! answering service: session bootstrap, category/language selection, the
//! message send/receive cycle, and error-to-transcript translation.

pub mod category;
pub mod orchestrator;
pub mod transcript;

pub use orchestrator::ChatOrchestrator;
pub use transcript::Transcript;

//! Request/response messages between the page, the settings popup, and the analyzer.

pub mod handler;
pub mod types;

#[cfg(test)]
mod tests;

pub use handler::{ANALYSIS_FAILED_ERROR, MessageHandler, UNKNOWN_MESSAGE_ERROR};
pub use types::{AnalysisPayload, Request, Response};

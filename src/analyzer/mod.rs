//! Analysis service: the cache → scorer → cache data flow.

pub mod error;
pub mod service;


pub use error::{AnalyzerError, AnalyzerResult};
pub use service::ClickbaitAnalyzer;

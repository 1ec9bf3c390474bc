//! Per-page session state and hover debouncing.

pub mod debounce;
pub mod page;


pub use debounce::{Debounce, Debouncer};
pub use page::PageSession;

//! Expiring analysis cache.

pub mod analysis;
pub mod clock;
pub mod types;


pub use analysis::AnalysisCache;
#[cfg(any(test, feature = "mock"))]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use types::{CacheEntry, CacheLookup, CacheStats};

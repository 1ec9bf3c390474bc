use std::future::Future;

use super::error::ScoringError;
use super::types::ScoreCard;

/// Pluggable title classifier.
///
/// Call sites depend on this trait, never on a concrete scorer, so the
/// heuristic and a model-backed classifier are interchangeable.
pub trait Scorer: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Scores a title.
    ///
    /// An `Err` means the title could not be analysed, which callers must keep
    /// distinct from a low score.
    fn score(&self, title: &str) -> impl Future<Output = Result<ScoreCard, ScoringError>> + Send;
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockScorer;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::{ScoreCard, Scorer, ScoringError};
    use crate::scoring::HeuristicScorer;

    /// Scorer that delegates to the heuristic, counts calls, and can be told to fail.
    #[derive(Debug, Clone, Default)]
    pub struct MockScorer {
        inner: HeuristicScorer,
        calls: Arc<AtomicUsize>,
        fail: Arc<AtomicBool>,
    }

    impl MockScorer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a scorer whose every call fails with `ComputationFailed`.
        pub fn failing() -> Self {
            let scorer = Self::default();
            scorer.set_failing(true);
            scorer
        }

        pub fn set_failing(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Scorer for MockScorer {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn score(&self, title: &str) -> Result<ScoreCard, ScoringError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(ScoringError::ComputationFailed {
                    reason: "mock classifier configured to fail".to_string(),
                });
            }
            Ok(self.inner.evaluate(title))
        }
    }
}

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::types::{AnalysisPayload, Request, Response};
use crate::analyzer::ClickbaitAnalyzer;
use crate::item::VideoItem;
use crate::scoring::Scorer;
use crate::settings::SettingsPatch;
use crate::storage::KvStore;

pub const UNKNOWN_MESSAGE_ERROR: &str = "Unknown message type";
pub const ANALYSIS_FAILED_ERROR: &str = "Analysis failed";

/// Dispatches [`Request`]s to a shared [`ClickbaitAnalyzer`].
pub struct MessageHandler<S: Scorer, K: KvStore> {
    analyzer: Arc<ClickbaitAnalyzer<S, K>>,
}

impl<S: Scorer, K: KvStore> MessageHandler<S, K> {
    pub fn new(analyzer: Arc<ClickbaitAnalyzer<S, K>>) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &Arc<ClickbaitAnalyzer<S, K>> {
        &self.analyzer
    }

    /// Handles a raw JSON message. Malformed or unknown messages get a failed ack.
    pub async fn handle_json(&self, raw: &str) -> Response {
        match serde_json::from_str::<Request>(raw) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!(error = %e, "Unknown message type");
                Response::failure(UNKNOWN_MESSAGE_ERROR)
            }
        }
    }

    pub async fn handle(&self, request: Request) -> Response {
        debug!(kind = request.kind(), "Received message");

        match request {
            Request::AnalyzeVideo(item) => self.handle_analyze(item).await,
            Request::GetSettings => Response::Settings {
                success: true,
                data: self.analyzer.settings().await,
            },
            Request::UpdateSettings(patch) => self.handle_update_settings(patch).await,
            Request::ClearCache => match self.analyzer.clear_cache().await {
                Ok(_) => Response::ok(),
                Err(e) => {
                    error!(error = %e, "Failed to clear cache");
                    Response::failure("Failed to clear cache")
                }
            },
            Request::GetStats => match self.analyzer.stats().await {
                Ok(stats) => Response::Stats {
                    success: true,
                    data: stats,
                },
                Err(e) => {
                    error!(error = %e, "Failed to load statistics");
                    Response::failure("Failed to load statistics")
                }
            },
        }
    }

    async fn handle_analyze(&self, item: VideoItem) -> Response {
        let data = match self.analyzer.analyze(&item).await {
            Ok(analysis) => AnalysisPayload {
                video_id: item.video_id,
                analysis: Some(analysis),
                error: None,
            },
            Err(e) => {
                error!(video_id = %item.video_id, error = %e, "Failed to analyze video");
                let message = if e.is_computation() {
                    e.to_string()
                } else {
                    ANALYSIS_FAILED_ERROR.to_string()
                };
                AnalysisPayload {
                    video_id: item.video_id,
                    analysis: None,
                    error: Some(message),
                }
            }
        };
        Response::AnalysisResult { data }
    }

    async fn handle_update_settings(&self, patch: SettingsPatch) -> Response {
        match self.analyzer.update_settings(&patch).await {
            Ok(_) => Response::ok(),
            Err(e) => {
                error!(error = %e, "Failed to update settings");
                Response::failure(format!("Failed to update settings: {}", e))
            }
        }
    }
}

impl<S: Scorer, K: KvStore> Clone for MessageHandler<S, K> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

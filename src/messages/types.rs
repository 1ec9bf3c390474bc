use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::item::VideoItem;
use crate::scoring::AnalysisResult;
use crate::settings::{Settings, SettingsPatch};

/// Requests accepted from the page and settings surfaces.
///
/// Wire form: `{ "type": "ANALYZE_VIDEO", "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    AnalyzeVideo(VideoItem),
    GetSettings,
    UpdateSettings(SettingsPatch),
    ClearCache,
    GetStats,
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Request::AnalyzeVideo(_) => "ANALYZE_VIDEO",
            Request::GetSettings => "GET_SETTINGS",
            Request::UpdateSettings(_) => "UPDATE_SETTINGS",
            Request::ClearCache => "CLEAR_CACHE",
            Request::GetStats => "GET_STATS",
        }
    }
}

/// Payload of an `ANALYSIS_RESULT` response.
///
/// Exactly one of `analysis` and `error` is set, so "could not analyse" is
/// never confused with a genuine verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub video_id: String,
    pub analysis: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Response {
    AnalysisResult {
        data: AnalysisPayload,
    },
    Settings {
        success: bool,
        data: Settings,
    },
    Stats {
        success: bool,
        data: CacheStats,
    },
    Ack {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl Response {
    pub fn ok() -> Self {
        Response::Ack {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Response::Ack {
            success: false,
            error: Some(error.into()),
        }
    }

    /// Returns `false` only for failed acks and failed analyses.
    pub fn is_success(&self) -> bool {
        match self {
            Response::AnalysisResult { data } => data.error.is_none(),
            Response::Settings { success, .. }
            | Response::Stats { success, .. }
            | Response::Ack { success, .. } => *success,
        }
    }
}

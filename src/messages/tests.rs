use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::analyzer::ClickbaitAnalyzer;
use crate::item::VideoItem;
use crate::scoring::MockScorer;
use crate::settings::SettingsPatch;
use crate::storage::{FlakyStore, MemoryStore};

fn setup_handler() -> (MockScorer, MemoryStore, MessageHandler<MockScorer, MemoryStore>) {
    let scorer = MockScorer::new();
    let store = MemoryStore::new();
    let analyzer = ClickbaitAnalyzer::new(scorer.clone(), Arc::new(store.clone()));
    (scorer, store, MessageHandler::new(Arc::new(analyzer)))
}

#[test]
fn test_request_wire_format() {
    let request: Request = serde_json::from_value(json!({
        "type": "ANALYZE_VIDEO",
        "data": {"videoId": "v1", "title": "Hello", "channelName": "C"}
    }))
    .expect("should deserialize");
    assert_eq!(
        request,
        Request::AnalyzeVideo(VideoItem::new("v1", "Hello").with_channel("C"))
    );
    assert_eq!(request.kind(), "ANALYZE_VIDEO");

    let request: Request =
        serde_json::from_value(json!({"type": "CLEAR_CACHE"})).expect("should deserialize");
    assert_eq!(request, Request::ClearCache);

    let request: Request = serde_json::from_value(json!({
        "type": "UPDATE_SETTINGS",
        "data": {"threshold": 40}
    }))
    .expect("should deserialize");
    assert_eq!(
        request,
        Request::UpdateSettings(SettingsPatch::default().threshold(40))
    );
}

#[test]
fn test_response_wire_format() {
    let json = serde_json::to_value(Response::ok()).expect("serialize");
    assert_eq!(json, json!({"type": "ACK", "success": true}));

    let json = serde_json::to_value(Response::failure("nope")).expect("serialize");
    assert_eq!(json, json!({"type": "ACK", "success": false, "error": "nope"}));

    let json = serde_json::to_value(Response::AnalysisResult {
        data: AnalysisPayload {
            video_id: "v1".to_string(),
            analysis: None,
            error: Some("boom".to_string()),
        },
    })
    .expect("serialize");
    assert_eq!(
        json,
        json!({
            "type": "ANALYSIS_RESULT",
            "data": {"videoId": "v1", "analysis": null, "error": "boom"}
        })
    );
}

#[tokio::test]
async fn test_analyze_video_message() {
    let (_scorer, _store, handler) = setup_handler();

    let response = handler
        .handle(Request::AnalyzeVideo(VideoItem::new("v1", "NEW VIDEO IS LIVE")))
        .await;

    assert!(response.is_success());
    let Response::AnalysisResult { data } = response else {
        panic!("expected ANALYSIS_RESULT, got {:?}", response);
    };
    assert_eq!(data.video_id, "v1");
    assert_eq!(data.analysis.expect("analysis").score, 30);
    assert!(data.error.is_none());
}

#[tokio::test]
async fn test_analyze_video_failure_reports_error_not_genuine() {
    let scorer = MockScorer::failing();
    let analyzer = ClickbaitAnalyzer::new(scorer, Arc::new(MemoryStore::new()));
    let handler = MessageHandler::new(Arc::new(analyzer));

    let response = handler
        .handle(Request::AnalyzeVideo(VideoItem::new("v1", "t")))
        .await;

    assert!(!response.is_success());
    let Response::AnalysisResult { data } = response else {
        panic!("expected ANALYSIS_RESULT, got {:?}", response);
    };
    assert!(data.analysis.is_none());
    assert!(data.error.expect("error").contains("analysis failed"));
}

#[tokio::test]
async fn test_settings_messages() {
    let (_scorer, _store, handler) = setup_handler();

    let response = handler
        .handle_json(r#"{"type":"UPDATE_SETTINGS","data":{"enabled":false}}"#)
        .await;
    assert_eq!(response, Response::ok());

    let response = handler.handle(Request::GetSettings).await;
    let Response::Settings { success, data } = response else {
        panic!("expected SETTINGS, got {:?}", response);
    };
    assert!(success);
    assert!(!data.enabled);
    assert_eq!(data.threshold, 60);
}

#[tokio::test]
async fn test_invalid_settings_update_fails() {
    let (_scorer, _store, handler) = setup_handler();
    let response = handler
        .handle(Request::UpdateSettings(
            SettingsPatch::default().cache_expiry_hours(-1.0),
        ))
        .await;
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_out_of_range_threshold_is_a_settings_error() {
    let (_scorer, _store, handler) = setup_handler();
    let response = handler
        .handle_json(r#"{"type":"UPDATE_SETTINGS","data":{"threshold":300}}"#)
        .await;

    match response {
        Response::Ack {
            success: false,
            error: Some(error),
        } => {
            assert_ne!(error, UNKNOWN_MESSAGE_ERROR);
            assert!(error.contains("invalid threshold 300"), "{error}");
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[tokio::test]
async fn test_clear_cache_and_stats_messages() {
    let (_scorer, store, handler) = setup_handler();
    handler
        .handle(Request::AnalyzeVideo(VideoItem::new(
            "v1",
            "SHOCKING!!! YOU WON'T BELIEVE THIS TRICK",
        )))
        .await;

    let response = handler.handle(Request::GetStats).await;
    let Response::Stats { data, .. } = response else {
        panic!("expected STATS, got {:?}", response);
    };
    assert_eq!(data.analyzed, 1);
    assert_eq!(data.clickbait, 1);

    assert_eq!(handler.handle(Request::ClearCache).await, Response::ok());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_clear_cache_failure_is_reported() {
    let store = FlakyStore::new(MemoryStore::new());
    let analyzer = ClickbaitAnalyzer::new(MockScorer::new(), Arc::new(store.clone()));
    let handler = MessageHandler::new(Arc::new(analyzer));
    handler
        .handle(Request::AnalyzeVideo(VideoItem::new("v1", "t")))
        .await;

    store.set_fail_reads(true);
    assert!(!handler.handle(Request::ClearCache).await.is_success());
    assert!(!handler.handle(Request::GetStats).await.is_success());
}

#[tokio::test]
async fn test_unknown_and_malformed_messages() {
    let (_scorer, _store, handler) = setup_handler();

    for raw in [r#"{"type":"SELF_DESTRUCT"}"#, "not json", r#"{"data":1}"#] {
        let response = handler.handle_json(raw).await;
        assert_eq!(response, Response::failure(UNKNOWN_MESSAGE_ERROR));
    }
}

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use baitsense::analyzer::ClickbaitAnalyzer;
use baitsense::cache::ManualClock;
use baitsense::item::VideoItem;
use baitsense::scoring::MockScorer;
use baitsense::storage::{FileStore, MemoryStore};
use tempfile::TempDir;

pub const CLICKBAIT_TITLE: &str = "You Won't Believe What Happened Next!!";
pub const GENUINE_TITLE: &str = "Weekly Community Update — March Recap";
pub const SHOUTING_TITLE: &str = "NEW VIDEO IS LIVE";

pub fn clickbait_item() -> VideoItem {
    VideoItem::new("dQw4w9WgXcQ", CLICKBAIT_TITLE).with_channel("Bait Central")
}

pub fn genuine_item() -> VideoItem {
    VideoItem::new("gen-0001", GENUINE_TITLE).with_channel("Community")
}

/// Analyzer over an in-memory store with a manual clock.
pub struct MemoryHarness {
    pub scorer: MockScorer,
    pub store: Arc<MemoryStore>,
    pub clock: ManualClock,
    pub analyzer: ClickbaitAnalyzer<MockScorer, MemoryStore>,
}

impl MemoryHarness {
    pub fn new() -> Self {
        let scorer = MockScorer::new();
        let store = Arc::new(MemoryStore::new());
        let clock = ManualClock::fixed();
        let analyzer = ClickbaitAnalyzer::with_clock(
            scorer.clone(),
            Arc::clone(&store),
            Arc::new(clock.clone()),
        );

        Self {
            scorer,
            store,
            clock,
            analyzer,
        }
    }
}

/// Temp dir holding a JSON store file; the dir is removed on drop.
pub struct FileHarness {
    pub dir: TempDir,
}

impl FileHarness {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join("baitsense.json")
    }

    pub async fn open(&self) -> Arc<FileStore> {
        Arc::new(FileStore::open(self.path()).await.expect("open file store"))
    }
}

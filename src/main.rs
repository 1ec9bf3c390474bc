//! Baitsense CLI entrypoint.
//!
//! Scores titles given as arguments, or one per stdin line, and prints one JSON
//! object per title. Input lines may carry an explicit id as `ID<TAB>TITLE`.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use baitsense::analyzer::ClickbaitAnalyzer;
use baitsense::config::Config;
use baitsense::hashing::hash_title;
use baitsense::item::VideoItem;
use baitsense::scoring::{AnalysisResult, HeuristicScorer};
use baitsense::session::PageSession;
use baitsense::settings::{Settings, SettingsPatch};
use baitsense::storage::FileStore;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Score video titles for clickbait.
///
/// Titles come from the arguments, or one per stdin line when none are given.
/// A title may carry an explicit id as `ID<TAB>TITLE`.
#[derive(Debug, Parser)]
#[command(name = "baitsense", version, long_about = None)]
struct Cli {
    /// Print cached analysis statistics
    #[arg(long)]
    stats: bool,

    /// Remove every cached analysis before scoring
    #[arg(long)]
    clear_cache: bool,

    /// Persist a new warning threshold (0-100)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// Titles to score, each `TITLE` or `ID<TAB>TITLE`
    #[arg(value_name = "TITLE")]
    titles: Vec<String>,
}

impl Cli {
    fn is_command_only(&self) -> bool {
        self.titles.is_empty() && (self.stats || self.clear_cache || self.threshold.is_some())
    }
}

#[derive(Serialize)]
struct Line<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    flagged: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FailedLine<'a> {
    id: &'a str,
    error: String,
}

fn parse_item(line: &str) -> Option<VideoItem> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    match line.split_once('\t') {
        Some((id, title)) if !id.trim().is_empty() => Some(VideoItem::new(id.trim(), title)),
        _ => Some(VideoItem::new(hash_title(line), line)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        storage_path = %config.storage_path.display(),
        session_capacity = config.session_capacity,
        "Baitsense starting"
    );

    let store = FileStore::open(config.storage_path.clone())
        .await
        .with_context(|| format!("failed to open {}", config.storage_path.display()))?;
    let analyzer = ClickbaitAnalyzer::new(HeuristicScorer::new(), Arc::new(store));

    if args.clear_cache {
        let removed = analyzer.clear_cache().await?;
        eprintln!("cleared {removed} cached analyses");
    }

    if let Some(threshold) = args.threshold {
        let patch = SettingsPatch::default().threshold(threshold.into());
        let settings = analyzer.update_settings(&patch).await?;
        eprintln!("threshold set to {}", settings.threshold);
    }

    if args.is_command_only() {
        if args.stats {
            print_stats(&analyzer).await?;
        }
        return Ok(());
    }

    let settings = analyzer.settings().await;
    if !settings.enabled {
        tracing::warn!("Analysis disabled in settings, nothing to do");
        return Ok(());
    }

    let session = PageSession::with_capacity(config.session_capacity);

    if args.titles.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(item) = parse_item(&line) {
                report(&analyzer, &session, &settings, &item).await?;
            }
        }
    } else {
        for raw in &args.titles {
            if let Some(item) = parse_item(raw) {
                report(&analyzer, &session, &settings, &item).await?;
            }
        }
    }

    if args.stats {
        print_stats(&analyzer).await?;
    }

    Ok(())
}

async fn report(
    analyzer: &ClickbaitAnalyzer<HeuristicScorer, FileStore>,
    session: &PageSession,
    settings: &Settings,
    item: &VideoItem,
) -> anyhow::Result<()> {
    session.mark_processed(&item.video_id);

    let output = match session.analyze(analyzer, item).await {
        Ok(result) => serde_json::to_string(&Line {
            flagged: settings.should_flag(result.score),
            result: &result,
        })?,
        Err(e) => {
            tracing::error!(video_id = %item.video_id, error = %e, "Analysis failed");
            serde_json::to_string(&FailedLine {
                id: &item.video_id,
                error: e.to_string(),
            })?
        }
    };

    println!("{output}");
    Ok(())
}

async fn print_stats(
    analyzer: &ClickbaitAnalyzer<HeuristicScorer, FileStore>,
) -> anyhow::Result<()> {
    let stats = analyzer.stats().await?;
    println!("{}", serde_json::to_string(&stats)?);
    Ok(())
}

//! Listing item metadata as supplied by the page scraper.
//!
//! Only `video_id` and `title` feed the scoring pipeline; the remaining fields
//! ride along for presentation.

use serde::{Deserialize, Serialize};
use url::Url;


/// One scraped video entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub video_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
}

impl VideoItem {
    pub fn new(video_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            thumbnail_url: None,
            channel_name: None,
            view_count: None,
            upload_date: None,
        }
    }

    pub fn with_channel(mut self, channel_name: impl Into<String>) -> Self {
        self.channel_name = Some(channel_name.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn with_view_count(mut self, view_count: impl Into<String>) -> Self {
        self.view_count = Some(view_count.into());
        self
    }

    /// Builds an item from a link href, returning `None` if no id can be extracted.
    pub fn from_link(href: &str, title: impl Into<String>) -> Option<Self> {
        extract_video_id(href).map(|id| Self::new(id, title))
    }
}

/// Extracts a video id from the watch, short-link, and embed URL forms.
///
/// - `https://www.youtube.com/watch?v=ID`
/// - `https://youtu.be/ID`
/// - `https://www.youtube.com/embed/ID`
///
/// Anything else, including unparsable input, yields `None`.
pub fn extract_video_id(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;

    if url.path() == "/watch" {
        return url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty());
    }

    if url.host_str() == Some("youtu.be") {
        let id = url.path().trim_start_matches('/');
        return (!id.is_empty()).then(|| id.to_string());
    }

    url.path()
        .strip_prefix("/embed/")
        .and_then(|rest| rest.split('/').next())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

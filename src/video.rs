use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of title a [`Video`] describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    #[default]
    Movie,
    Series,
    Anime,
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VideoKind::Movie => "movie",
            VideoKind::Series => "series",
            VideoKind::Anime => "anime",
        };
        f.write_str(name)
    }
}

/// Description of a video that crawlers fill in with what they find
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub kind: VideoKind,
    pub title: String,
    pub original_title: Option<String>,
    pub year: Option<u16>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    /// Source-specific fields, e.g. an external id or a subtitle page URL
    pub metadata: BTreeMap<String, String>,
}

impl Video {
    pub fn new(kind: VideoKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn movie(title: impl Into<String>) -> Self {
        Self::new(VideoKind::Movie, title)
    }

    pub fn series(title: impl Into<String>) -> Self {
        Self::new(VideoKind::Series, title)
    }

    pub fn anime(title: impl Into<String>) -> Self {
        Self::new(VideoKind::Anime, title)
    }

    /// Set the season and episode numbers
    pub fn episode(mut self, season: u32, episode: u32) -> Self {
        self.season = Some(season);
        self.episode = Some(episode);
        self
    }

    /// Record a metadata field, replacing any previous value
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }
}

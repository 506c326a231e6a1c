use smol_str::SmolStr;

use crate::format::M3uAttributes;

/// A single entry of a playlist: an `#EXTINF` line and the location following it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct M3uRecord {
    /// Duration in seconds, written without decimals
    pub duration: f64,
    pub attributes: M3uAttributes,
    /// Display title, everything after the first comma of `#EXTINF`
    pub title: SmolStr,
    pub url: SmolStr,
}

impl M3uRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_title(mut self, title: impl Into<SmolStr>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<SmolStr>) -> Self {
        self.url = url.into();
        self
    }
}

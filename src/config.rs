use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::*;

/// Which files inside a container count as slides, by extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSelector {
    extensions: Vec<String>,
}

impl SlideSelector {
    /// Parses a comma separated extension list such as `"png, JPG,.jpeg"`.
    /// An empty list falls back to the default selector.
    pub fn parse(list: &str) -> Self {
        let extensions: Vec<String> = list
            .split(',')
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        if extensions.is_empty() {
            Self::default()
        } else {
            Self { extensions }
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|s| s.to_str())
                .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
                .unwrap_or(false)
    }
}

#[cfg(test)]
impl SlideSelector {
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for SlideSelector {
    fn default() -> Self {
        Self::parse(DEFAULT_SLIDES)
    }
}

impl std::fmt::Display for SlideSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extensions.join(","))
    }
}

/// Fully resolved configuration of one carousel widget.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Directory holding the slide images.
    pub container: PathBuf,
    pub slides: SlideSelector,
    /// Auto-advance period.
    pub interval: Duration,
    /// Enables the touch-swipe gesture.
    pub swipe: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container: PathBuf::from(DEFAULT_CONTAINER),
            slides: SlideSelector::default(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            swipe: false,
        }
    }
}

/// Partial settings, every field optional. Missing, empty or zero values
/// take their default when folded into a [`CarouselConfig`].
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub container: Option<PathBuf>,
    pub slides: Option<String>,
    pub interval_ms: Option<u64>,
    pub swipe: bool,
}

impl CarouselConfig {
    pub fn from_settings(settings: Settings) -> Self {
        let defaults = Self::default();

        Self {
            container: settings
                .container
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(defaults.container),
            slides: settings
                .slides
                .as_deref()
                .map(SlideSelector::parse)
                .unwrap_or(defaults.slides),
            interval: settings
                .interval_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.interval),
            swipe: settings.swipe,
        }
    }
}

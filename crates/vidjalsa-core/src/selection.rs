//! Bounded, ordered set of videos chosen on the preview page.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::navigation::LoadingState;
use crate::video::VideoCandidate;

/// Default maximum number of videos that can be selected at once.
pub const DEFAULT_MAX_SELECTED: usize = 5;

/// Selection limits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Maximum number of videos in the selection.
    pub max_selected: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_selected: DEFAULT_MAX_SELECTED,
        }
    }
}

/// Result of toggling a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The candidate was appended to the selection.
    Added,
    /// The candidate was already selected and has been removed.
    Removed,
    /// The selection is full; nothing changed.
    Ignored,
}

/// Videos chosen by the user, in the order they were picked.
///
/// Candidates are unique by link and the set never grows past its capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<VideoCandidate>,
    capacity: usize,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SELECTED)
    }
}

impl SelectionSet {
    /// Create an empty selection holding at most `capacity` videos.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty selection using the configured limit.
    #[must_use]
    pub fn with_config(config: &SelectionConfig) -> Self {
        Self::new(config.max_selected)
    }

    /// Add the candidate if it is absent and there is room, remove it if present.
    pub fn toggle(&mut self, video: &VideoCandidate) -> ToggleOutcome {
        if let Some(pos) = self.items.iter().position(|v| v.link == video.link) {
            self.items.remove(pos);
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            debug!(
                "Selection full ({} videos), ignoring {}",
                self.capacity, video.link
            );
            return ToggleOutcome::Ignored;
        }

        self.items.push(video.clone());
        ToggleOutcome::Added
    }

    /// Whether a candidate with this link is selected.
    #[must_use]
    pub fn contains(&self, link: &str) -> bool {
        self.items.iter().any(|v| v.link == link)
    }

    /// Number of selected videos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another video can still be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Maximum number of videos.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Selected videos in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[VideoCandidate] {
        &self.items
    }

    /// Links of the selected videos in selection order.
    #[must_use]
    pub fn links(&self) -> Vec<String> {
        self.items.iter().map(|v| v.link.clone()).collect()
    }

    /// Build the state handed to the loading page.
    ///
    /// An empty selection is accepted; the page copy is the only place the
    /// one-video minimum is stated.
    #[must_use]
    pub fn submission(&self, topic: &str) -> LoadingState {
        LoadingState {
            video_links: self.links(),
            topic: topic.to_string(),
            video_info: self.items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(n: usize) -> VideoCandidate {
        VideoCandidate {
            link: format!("https://www.youtube.com/watch?v=video{n}"),
            title: format!("Video {n}"),
            thumbnail: format!("https://i.ytimg.com/vi/video{n}/hqdefault.jpg"),
            duration: 120,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = SelectionSet::default();
        assert_eq!(selection.toggle(&video(1)), ToggleOutcome::Added);
        assert!(selection.contains(&video(1).link));
        assert_eq!(selection.toggle(&video(1)), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_ignores_add_when_full() {
        let mut selection = SelectionSet::default();
        for n in 0..5 {
            assert_eq!(selection.toggle(&video(n)), ToggleOutcome::Added);
        }
        let before = selection.clone();

        assert_eq!(selection.toggle(&video(5)), ToggleOutcome::Ignored);
        assert_eq!(selection, before);
        assert_eq!(selection.len(), 5);
    }

    #[test]
    fn test_toggle_removes_when_full() {
        let mut selection = SelectionSet::default();
        for n in 0..5 {
            selection.toggle(&video(n));
        }
        assert_eq!(selection.toggle(&video(2)), ToggleOutcome::Removed);
        assert_eq!(selection.len(), 4);
        assert_eq!(selection.toggle(&video(7)), ToggleOutcome::Added);
    }

    #[test]
    fn test_uniqueness_is_by_link() {
        let mut selection = SelectionSet::default();
        selection.toggle(&video(1));

        let mut retitled = video(1);
        retitled.title = "Another title".to_string();
        assert_eq!(selection.toggle(&retitled), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut selection = SelectionSet::default();
        for _ in 0..500 {
            selection.toggle(&video(rng.usize(0..12)));
            assert!(selection.len() <= 5);
        }
    }

    #[test]
    fn test_links_preserve_selection_order() {
        let mut selection = SelectionSet::default();
        selection.toggle(&video(4));
        selection.toggle(&video(1));
        selection.toggle(&video(6));
        assert_eq!(
            selection.links(),
            vec![video(4).link, video(1).link, video(6).link]
        );
    }

    #[test]
    fn test_custom_capacity() {
        let mut selection = SelectionSet::with_config(&SelectionConfig { max_selected: 2 });
        selection.toggle(&video(1));
        selection.toggle(&video(2));
        assert!(selection.is_full());
        assert_eq!(selection.toggle(&video(3)), ToggleOutcome::Ignored);
    }

    #[test]
    fn test_submission_carries_topic_and_metadata() {
        let mut selection = SelectionSet::default();
        selection.toggle(&video(3));
        selection.toggle(&video(1));

        let state = selection.submission("rust async");
        assert_eq!(state.topic, "rust async");
        assert_eq!(state.video_links, vec![video(3).link, video(1).link]);
        assert_eq!(state.video_info, vec![video(3), video(1)]);
    }

    #[test]
    fn test_empty_submission_is_allowed() {
        let state = SelectionSet::default().submission("topic");
        assert!(state.video_links.is_empty());
        assert!(state.video_info.is_empty());
    }
}

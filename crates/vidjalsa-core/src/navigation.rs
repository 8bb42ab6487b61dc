//! Views of the client and the state carried between them.
//!
//! Each view has a path and a payload. The payload travels with the browser
//! history entry, so its JSON shape (camelCase keys) is the contract between
//! views and must stay stable:
//!
//! - into preview: `{videosInfo, topic}`
//! - preview to loading: `{videoLinks, topic, videoInfo}`
//! - loading to output: `{videosInfo, deploymentUrl}`

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::video::VideoCandidate;

/// Path of the preview view.
pub const PREVIEW_PATH: &str = "/preview";
/// Path of the loading view.
pub const LOADING_PATH: &str = "/loading";
/// Path of the output view.
pub const OUTPUT_PATH: &str = "/output";

/// State needed to open the preview view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState {
    /// Candidates fetched for the topic.
    pub videos_info: Vec<VideoCandidate>,
    /// Topic the user searched for.
    pub topic: String,
}

/// State handed from the preview view to the loading view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoadingState {
    /// Links of the selected videos, in selection order.
    pub video_links: Vec<String>,
    /// Topic the user searched for.
    pub topic: String,
    /// Full metadata of the selected videos.
    pub video_info: Vec<VideoCandidate>,
}

impl LoadingState {
    /// State for the output view once the backend returned a deployment.
    #[must_use]
    pub fn completion(&self, deployment_url: impl Into<String>) -> OutputState {
        OutputState {
            videos_info: self.video_info.clone(),
            deployment_url: deployment_url.into(),
        }
    }
}

/// State handed from the loading view to the output view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputState {
    /// Metadata of the processed videos.
    pub videos_info: Vec<VideoCandidate>,
    /// Where the generated blog was deployed.
    pub deployment_url: String,
}

/// A view together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Candidate preview and selection.
    Preview(PreviewState),
    /// Processing animation.
    Loading(LoadingState),
    /// Generated blog.
    Output(OutputState),
}

impl Route {
    /// Path of the view.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Preview(_) => PREVIEW_PATH,
            Self::Loading(_) => LOADING_PATH,
            Self::Output(_) => OUTPUT_PATH,
        }
    }

    /// Payload as a JSON value, ready to be stored with the history entry.
    pub fn state_json(&self) -> Result<Value> {
        let value = match self {
            Self::Preview(state) => serde_json::to_value(state)?,
            Self::Loading(state) => serde_json::to_value(state)?,
            Self::Output(state) => serde_json::to_value(state)?,
        };
        Ok(value)
    }

    /// Rebuild a route from a location path and its stored payload.
    ///
    /// A `None` or `null` payload means the view was opened directly rather
    /// than navigated to.
    pub fn from_location(path: &str, state: Option<Value>) -> Result<Self> {
        let path = normalize_path(path);
        let known = [PREVIEW_PATH, LOADING_PATH, OUTPUT_PATH];
        if !known.contains(&path) {
            return Err(Error::UnknownRoute(path.to_string()));
        }

        let Some(state) = state.filter(|v| !v.is_null()) else {
            warn!("Opened {path} without navigation state");
            return Err(Error::MissingNavigationState {
                path: path.to_string(),
            });
        };

        match path {
            PREVIEW_PATH => decode(path, state).map(Self::Preview),
            LOADING_PATH => decode(path, state).map(Self::Loading),
            _ => decode(path, state).map(Self::Output),
        }
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn decode<T: DeserializeOwned>(path: &str, state: Value) -> Result<T> {
    serde_json::from_value(state).map_err(|e| {
        warn!("Discarding navigation state for {path}: {e}");
        Error::InvalidNavigationState {
            path: path.to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn video(n: usize) -> VideoCandidate {
        VideoCandidate {
            link: format!("https://www.youtube.com/watch?v={n}"),
            title: format!("Video {n}"),
            thumbnail: format!("https://i.ytimg.com/vi/{n}/hqdefault.jpg"),
            duration: 90,
        }
    }

    #[test]
    fn test_loading_state_json_shape() {
        let state = LoadingState {
            video_links: vec![video(1).link],
            topic: "cooking".to_string(),
            video_info: vec![video(1)],
        };
        let value = serde_json::to_value(&state).expect("Should serialize");

        assert_eq!(value["videoLinks"], json!(["https://www.youtube.com/watch?v=1"]));
        assert_eq!(value["topic"], "cooking");
        assert_eq!(value["videoInfo"][0]["title"], "Video 1");
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(3));
    }

    #[test]
    fn test_output_state_json_shape() {
        let state = OutputState {
            videos_info: vec![video(2)],
            deployment_url: "https://blog.example.com".to_string(),
        };
        let value = serde_json::to_value(&state).expect("Should serialize");

        assert_eq!(value["deploymentUrl"], "https://blog.example.com");
        assert_eq!(value["videosInfo"][0]["duration"], 90);
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(2));
    }

    #[test]
    fn test_completion_carries_video_info() {
        let loading = LoadingState {
            video_links: vec![video(1).link, video(2).link],
            topic: "t".to_string(),
            video_info: vec![video(1), video(2)],
        };
        let output = loading.completion("https://blog.example.com/x");
        assert_eq!(output.videos_info, loading.video_info);
        assert_eq!(output.deployment_url, "https://blog.example.com/x");
    }

    #[test]
    fn test_route_paths() {
        let preview = Route::Preview(PreviewState {
            videos_info: vec![],
            topic: String::new(),
        });
        assert_eq!(preview.path(), "/preview");
    }

    #[test]
    fn test_route_from_location_roundtrip() {
        let route = Route::Loading(LoadingState {
            video_links: vec![video(3).link],
            topic: "travel".to_string(),
            video_info: vec![video(3)],
        });
        let state = route.state_json().expect("Should serialize");
        let parsed = Route::from_location("/loading", Some(state)).expect("Should parse");
        assert_eq!(parsed, route);
    }

    #[test]
    fn test_route_from_location_accepts_trailing_slash() {
        let state = json!({"videosInfo": [], "topic": "music"});
        let route = Route::from_location("/preview/", Some(state)).expect("Should parse");
        assert!(matches!(route, Route::Preview(ref s) if s.topic == "music"));
    }

    #[test]
    fn test_route_from_location_missing_state() {
        let result = Route::from_location("/loading", None);
        assert!(matches!(
            result,
            Err(Error::MissingNavigationState { ref path }) if path == "/loading"
        ));

        let result = Route::from_location("/output", Some(Value::Null));
        assert!(matches!(result, Err(Error::MissingNavigationState { .. })));
    }

    #[test]
    fn test_route_from_location_invalid_state() {
        let result = Route::from_location("/output", Some(json!({"videosInfo": []})));
        assert!(matches!(
            result,
            Err(Error::InvalidNavigationState { ref reason, .. }) if reason.contains("deploymentUrl")
        ));
    }

    #[test]
    fn test_route_from_location_unknown_path() {
        let result = Route::from_location("/", Some(json!({})));
        assert!(matches!(result, Err(Error::UnknownRoute(ref p)) if p == "/"));
    }
}

//! Wire types for the video processing backend.
//!
//! The client makes a single call: `POST /api/v1/process_videos` with the
//! selected links and the topic; the backend answers with the URL of the
//! deployed blog once processing finishes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::navigation::LoadingState;

/// Body of the processing request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessVideosRequest {
    /// Links of the videos to turn into a blog.
    pub urls: Vec<String>,
    /// Topic the blog is about.
    pub topic: String,
}

impl From<&LoadingState> for ProcessVideosRequest {
    fn from(state: &LoadingState) -> Self {
        Self {
            urls: state.video_links.clone(),
            topic: state.topic.clone(),
        }
    }
}

/// Body of a successful processing response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessVideosResponse {
    /// Where the generated blog was deployed.
    pub deployment_url: String,
}

impl ProcessVideosResponse {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Map an HTTP status to success or [`Error::BackendStatus`].
pub const fn check_status(status: u16) -> Result<()> {
    if status >= 200 && status < 300 {
        Ok(())
    } else {
        Err(Error::BackendStatus { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::VideoCandidate;

    #[test]
    fn test_request_json_shape() {
        let request = ProcessVideosRequest {
            urls: vec!["https://www.youtube.com/watch?v=a".to_string()],
            topic: "gardening".to_string(),
        };
        let json = serde_json::to_string(&request).expect("Should serialize");
        assert_eq!(
            json,
            r#"{"urls":["https://www.youtube.com/watch?v=a"],"topic":"gardening"}"#
        );
    }

    #[test]
    fn test_request_from_loading_state() {
        let video = VideoCandidate {
            link: "https://www.youtube.com/watch?v=b".to_string(),
            title: "B".to_string(),
            thumbnail: String::new(),
            duration: 10,
        };
        let state = LoadingState {
            video_links: vec![video.link.clone()],
            topic: "chess".to_string(),
            video_info: vec![video],
        };

        let request = ProcessVideosRequest::from(&state);
        assert_eq!(request.urls, state.video_links);
        assert_eq!(request.topic, "chess");
    }

    #[test]
    fn test_response_parsing() {
        let response =
            ProcessVideosResponse::from_json(r#"{"deployment_url": "https://chess.example.app"}"#)
                .expect("Should parse");
        assert_eq!(response.deployment_url, "https://chess.example.app");
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let response = ProcessVideosResponse::from_json(
            r#"{"deployment_url": "https://x.example.app", "blog_id": 12}"#,
        )
        .expect("Should parse");
        assert_eq!(response.deployment_url, "https://x.example.app");
    }

    #[test]
    fn test_response_missing_url_is_error() {
        let result = ProcessVideosResponse::from_json("{}");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert!(matches!(
            check_status(500),
            Err(Error::BackendStatus { status: 500 })
        ));
        assert!(check_status(302).is_err());
        assert!(check_status(404).is_err());
    }
}

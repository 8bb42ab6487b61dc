//! `VidJalsa` Core Library
//!
//! This crate holds the browser-independent logic of the `VidJalsa` client,
//! the app that turns a handful of `YouTube` videos on a topic into a blog:
//! - Video candidates and their display formatting
//! - Bounded selection of candidates for submission
//! - Carousel centering and scroll targets
//! - Synthetic loading progress while the backend works
//! - The meteor shower simulation behind the loading page
//! - Views, navigation payloads and backend wire types
//! - Application configuration
//!
//! Everything here is plain data and arithmetic, so it runs unchanged in the
//! browser and in native unit tests. The UI crate owns the DOM, canvas and
//! timers and drives these types.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result`], whose error type is [`Error`].
//!
//! ```rust
//! use vidjalsa_core::{Route, Error};
//!
//! let result = Route::from_location("/loading", None);
//! assert!(matches!(result, Err(Error::MissingNavigationState { .. })));
//! ```

pub mod api;
pub mod carousel;
pub mod config;
pub mod error;
pub mod meteor;
pub mod navigation;
pub mod progress;
pub mod selection;
pub mod video;

pub use api::{ProcessVideosRequest, ProcessVideosResponse, check_status};
pub use carousel::{
    CenterState, ItemMetrics, ViewportMetrics, center_index, next_scroll_target,
    previous_scroll_target, scroll_target,
};
pub use config::{ApiConfig, AppConfig, DEFAULT_API_BASE_URL, DEFAULT_PROCESS_VIDEOS_PATH};
pub use error::{Error, Result};
pub use meteor::{
    Bounds, METEOR_ANGLE, Meteor, MeteorConfig, MeteorShower, RandomSource, SPAWN_WINDOW_MS,
    SurfaceSize, TrailSegment, spawn_probability,
};
pub use navigation::{
    LOADING_PATH, LoadingState, OUTPUT_PATH, OutputState, PREVIEW_PATH, PreviewState, Route,
};
pub use progress::{LoadingConfig, LoadingPhase, ProgressTicker, TickOutcome};
pub use selection::{DEFAULT_MAX_SELECTED, SelectionConfig, SelectionSet, ToggleOutcome};
pub use video::{VideoCandidate, decode_html_entities};

//! History-API navigation between views.
//!
//! Each navigation pushes a history entry whose state object is the view's
//! payload, so reloading or going back restores the same view with the same
//! data. `popstate` re-reads the location and swaps the rendered view.

use gloo_events::EventListener;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use vidjalsa_core::{Error, Route};

const ROOT_PATH: &str = "/";

/// What the root component should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurrentView {
    /// A view with its payload.
    Ready(Route),
    /// The site root, which has no view of its own.
    Entry,
    /// A known view opened without a payload.
    MissingState {
        /// Path that was opened.
        path: String,
    },
    /// A known view whose payload could not be decoded.
    InvalidState {
        /// Path that was opened.
        path: String,
        /// Decoding error.
        reason: String,
    },
    /// A path that matches no view.
    NotFound {
        /// Path that was opened.
        path: String,
    },
}

impl CurrentView {
    /// Resolve a location path and its history state.
    pub fn resolve(location_path: &str, state: Option<Value>) -> Self {
        match Route::from_location(location_path, state) {
            Ok(route) => Self::Ready(route),
            Err(Error::UnknownRoute(path)) if path == ROOT_PATH => Self::Entry,
            Err(Error::UnknownRoute(path)) => Self::NotFound { path },
            Err(Error::MissingNavigationState { path }) => Self::MissingState { path },
            Err(Error::InvalidNavigationState { path, reason }) => {
                Self::InvalidState { path, reason }
            }
            Err(e) => {
                warn!("Unexpected error resolving {location_path}: {e}");
                Self::MissingState {
                    path: location_path.to_string(),
                }
            }
        }
    }

    /// Path the view was resolved from.
    pub fn path(&self) -> &str {
        match self {
            Self::Ready(route) => route.path(),
            Self::Entry => ROOT_PATH,
            Self::MissingState { path }
            | Self::InvalidState { path, .. }
            | Self::NotFound { path } => path,
        }
    }
}

/// Handle used by pages to move between views.
#[derive(Clone, Copy)]
pub struct Navigator {
    current: RwSignal<CurrentView>,
}

impl Navigator {
    /// Read the initial location and start following `popstate`.
    ///
    /// The listener lives as long as the calling component.
    pub fn install() -> Self {
        let current = RwSignal::new(read_location());

        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "popstate", move |_| {
                let view = read_location();
                log!("=== POPSTATE: {} ===", view.path());
                current.set(view);
            })
        });
        let listener = StoredValue::new_local(listener);
        on_cleanup(move || {
            listener.update_value(|l| {
                l.take();
            });
        });

        Self { current }
    }

    /// Current view, tracked.
    pub fn current(&self) -> CurrentView {
        self.current.get()
    }

    /// Push a history entry for `route` and render it.
    pub fn navigate(&self, route: Route) {
        log!("=== NAVIGATE: {} ===", route.path());
        if let Err(e) = push_history(&route) {
            error!("Failed to record history entry for {}: {e}", route.path());
        }
        self.current.set(CurrentView::Ready(route));
    }
}

/// Get the navigator provided by the root component.
pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

fn read_location() -> CurrentView {
    let Some(window) = web_sys::window() else {
        return CurrentView::Entry;
    };

    let path = window
        .location()
        .pathname()
        .unwrap_or_else(|_| ROOT_PATH.to_string());
    let state = window
        .history()
        .ok()
        .and_then(|history| history.state().ok())
        .and_then(|js| serde_wasm_bindgen::from_value::<Value>(js).ok());

    CurrentView::resolve(&path, state)
}

fn push_history(route: &Route) -> Result<(), String> {
    let state = route.state_json().map_err(|e| e.to_string())?;
    let js_state = state
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())?;

    let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
    let history = window.history().map_err(|e| format!("{e:?}"))?;
    history
        .push_state_with_url(&js_state, "", Some(route.path()))
        .map_err(|e| format!("{e:?}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vidjalsa_core::PreviewState;

    use super::*;

    #[test]
    fn test_resolve_ready() {
        let view = CurrentView::resolve("/preview", Some(json!({"videosInfo": [], "topic": "art"})));
        assert_eq!(
            view,
            CurrentView::Ready(Route::Preview(PreviewState {
                videos_info: vec![],
                topic: "art".to_string(),
            }))
        );
        assert_eq!(view.path(), "/preview");
    }

    #[test]
    fn test_resolve_missing_state() {
        let view = CurrentView::resolve("/loading", None);
        assert_eq!(
            view,
            CurrentView::MissingState {
                path: "/loading".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_invalid_state() {
        let view = CurrentView::resolve("/output", Some(json!({"deploymentUrl": 3})));
        let CurrentView::InvalidState { path, reason } = view else {
            panic!("Expected invalid state");
        };
        assert_eq!(path, "/output");
        assert!(!reason.is_empty());
    }

    #[test]
    fn test_resolve_preview_with_float_durations() {
        let view = CurrentView::resolve(
            "/preview",
            Some(json!({
                "videosInfo": [{
                    "video_id": "abc",
                    "link": "https://www.youtube.com/watch?v=abc",
                    "title": "Knife skills",
                    "thumbnail": "https://i.ytimg.com/vi/abc/hqdefault.jpg",
                    "duration": 600.0
                }],
                "topic": "cooking"
            })),
        );
        let CurrentView::Ready(Route::Preview(state)) = view else {
            panic!("Expected preview");
        };
        assert_eq!(state.videos_info[0].duration, 600);
    }

    #[test]
    fn test_resolve_root_is_entry() {
        assert_eq!(CurrentView::resolve("/", None), CurrentView::Entry);
        assert_eq!(CurrentView::resolve("", Some(json!({}))), CurrentView::Entry);
        assert_eq!(CurrentView::Entry.path(), "/");
    }

    #[test]
    fn test_resolve_unknown_path() {
        let view = CurrentView::resolve("/settings", Some(json!({})));
        assert_eq!(
            view,
            CurrentView::NotFound {
                path: "/settings".to_string()
            }
        );
    }
}

//! Empty state components for views that cannot be rendered.
//!
//! The preview, loading and output views all depend on the payload carried by
//! the history entry. Opening one directly (bookmark, reload after the entry
//! was lost, hand-typed URL) lands here instead.

use leptos::prelude::*;

/// Icon types for empty states.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EmptyStateIcon {
    /// Video icon (default).
    #[default]
    Video,
    /// Search icon.
    Search,
    /// Error/warning icon.
    Error,
}

const ICON_SIZE: &str = "96";

/// Renders an SVG icon based on the icon type.
#[component]
fn EmptyStateIconSvg(
    /// The type of icon to display.
    icon: EmptyStateIcon,
    /// Width and height of the icon.
    size: &'static str,
) -> impl IntoView {
    match icon {
        EmptyStateIcon::Video => view! {
            <svg viewBox="0 0 24 24" width=size height=size fill="var(--text-secondary)">
                <path d="M17 10.5V7c0-.55-.45-1-1-1H4c-.55 0-1 .45-1 1v10c0 .55.45 1 1 1h12c.55 0 1-.45 1-1v-3.5l4 4v-11l-4 4z"/>
            </svg>
        }.into_any(),
        EmptyStateIcon::Search => view! {
            <svg viewBox="0 0 24 24" width=size height=size fill="var(--text-secondary)">
                <path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/>
            </svg>
        }.into_any(),
        EmptyStateIcon::Error => view! {
            <svg viewBox="0 0 24 24" width=size height=size fill="var(--accent-error)">
                <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z"/>
            </svg>
        }.into_any(),
    }
}

/// Base empty state component.
#[component]
pub fn EmptyState(
    /// The icon to display.
    #[prop(default = EmptyStateIcon::Video)]
    icon: EmptyStateIcon,
    /// The main title/heading.
    title: &'static str,
    /// The descriptive message.
    #[prop(into)]
    message: String,
    /// Optional hint text (displayed in italics).
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <EmptyStateIconSvg icon=icon size=ICON_SIZE />
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-message">{message}</p>
            {hint.map(|h| view! {
                <p class="empty-state-hint">{h}</p>
            })}
        </div>
    }
}

/// Shown when a view is opened without the payload it needs.
#[component]
pub fn MissingStateEmptyState(
    /// Path that was opened.
    path: String,
) -> impl IntoView {
    view! {
        <EmptyState
            icon=EmptyStateIcon::Video
            title="Nothing to show here yet"
            message=missing_state_message(&path)
            hint=START_HINT
        />
    }
}

/// Shown when a view's payload is present but cannot be read.
#[component]
pub fn InvalidStateEmptyState(
    /// Path that was opened.
    path: String,
    /// Why the payload was rejected.
    reason: String,
) -> impl IntoView {
    view! {
        <EmptyState
            icon=EmptyStateIcon::Error
            title="This page could not be restored"
            message=invalid_state_message(&path, &reason)
            hint=START_HINT
        />
    }
}

/// Shown at the site root, which has no view of its own.
#[component]
pub fn EntryEmptyState() -> impl IntoView {
    view! {
        <EmptyState
            icon=EmptyStateIcon::Video
            title="Turn videos into a blog"
            message="Videos found for your topic open here for preview."
            hint=START_HINT
        />
    }
}

/// Shown for paths that match no view.
#[component]
pub fn NotFoundEmptyState(
    /// Path that was opened.
    path: String,
) -> impl IntoView {
    view! {
        <EmptyState
            icon=EmptyStateIcon::Search
            title="Page not found"
            message=format!("There is no page at \"{path}\".")
        />
    }
}

const START_HINT: &str =
    "Run a topic search in VidJalsa to get videos to pick from.";

fn missing_state_message(path: &str) -> String {
    match path.trim_end_matches('/') {
        "/preview" => "There are no videos to preview.".to_string(),
        "/loading" => "No videos were selected, so there is nothing to build.".to_string(),
        "/output" => "No blog has been generated in this session.".to_string(),
        other => format!("\"{other}\" was opened without its data."),
    }
}

fn invalid_state_message(path: &str, reason: &str) -> String {
    format!("The data saved for \"{path}\" is not usable ({reason}).")
}

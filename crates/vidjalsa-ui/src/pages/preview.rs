//! Preview view: a vertical carousel of candidates to pick from.

use leptos::html::Div;
use leptos::prelude::*;
use vidjalsa_core::{
    CenterState, ItemMetrics, PreviewState, Route, SelectionSet, ToggleOutcome, ViewportMetrics,
    next_scroll_target, previous_scroll_target,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDivElement, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::app::use_config;
use crate::components::{PageHeading, VideoCard};
use crate::router::use_navigator;

/// Offsets of the container's children, relative to the container content.
fn item_metrics(container: &HtmlDivElement) -> Vec<ItemMetrics> {
    let container_top = f64::from(container.offset_top());
    let children = container.children();

    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .map(|child| ItemMetrics {
            top: f64::from(child.offset_top()) - container_top,
            height: f64::from(child.offset_height()),
        })
        .collect()
}

fn viewport_metrics(container: &HtmlDivElement) -> ViewportMetrics {
    ViewportMetrics {
        scroll_top: f64::from(container.scroll_top()),
        height: f64::from(container.offset_height()),
    }
}

fn smooth_scroll(container: &HtmlDivElement, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}

/// Class of a scroll affordance.
fn scroll_button_class(visible: bool) -> &'static str {
    if visible {
        "scroll-button visible"
    } else {
        "scroll-button"
    }
}

/// Class of the count + submit panel.
fn selection_info_class(show: bool) -> &'static str {
    if show {
        "selection-info show"
    } else {
        "selection-info"
    }
}

/// Preview page.
#[component]
pub fn PreviewPage(
    /// Candidates and topic handed over by the search page.
    state: PreviewState,
) -> impl IntoView {
    let config = use_config();
    let navigator = use_navigator();

    let PreviewState { videos_info, topic } = state;
    let limits = format!(
        "Pick A Min. Of 1 And A Max. Of {}",
        config.selection.max_selected
    );
    let candidate_count = videos_info.len();
    let topic = StoredValue::new(topic);

    let container_ref = NodeRef::<Div>::new();
    let center = RwSignal::new(CenterState::default());
    let selection = RwSignal::new(SelectionSet::with_config(&config.selection));

    let measure = move || {
        if let Some(container) = container_ref.get_untracked() {
            let next = CenterState::compute(
                &item_metrics(&container),
                viewport_metrics(&container),
                candidate_count,
            );
            if center.get_untracked() != next {
                center.set(next);
            }
        }
    };

    // Initial measurement once the container is mounted
    Effect::new(move || {
        if container_ref.get().is_some() {
            measure();
        }
    });

    let scroll_previous = move |_| {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let items = item_metrics(&container);
        let height = f64::from(container.offset_height());
        if let Some(top) = previous_scroll_target(&items, center.get_untracked().index, height) {
            smooth_scroll(&container, top);
        }
    };

    let scroll_next = move |_| {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let items = item_metrics(&container);
        let height = f64::from(container.offset_height());
        if let Some(top) = next_scroll_target(&items, center.get_untracked().index, height) {
            smooth_scroll(&container, top);
        }
    };

    let submit = move |_| {
        let loading = selection.with_untracked(|s| topic.with_value(|t| s.submission(t)));
        leptos::logging::log!(
            "=== SUBMIT: {} videos for '{}' ===",
            loading.video_links.len(),
            loading.topic
        );
        navigator.navigate(Route::Loading(loading));
    };

    let cards = videos_info
        .into_iter()
        .enumerate()
        .map(|(index, video)| {
            let link = video.link.clone();
            let toggled = video.clone();
            let on_toggle = Callback::new(move |()| {
                let outcome = selection.try_update(|s| s.toggle(&toggled));
                if outcome == Some(ToggleOutcome::Ignored) {
                    leptos::logging::log!("Selection is full, ignoring {}", toggled.link);
                }
            });

            view! {
                <VideoCard
                    video=video
                    centered=Signal::derive(move || center.with(|c| c.is_centered(index)))
                    selected=Signal::derive(move || selection.with(|s| s.contains(&link)))
                    on_toggle=on_toggle
                />
            }
        })
        .collect_view();

    view! {
        <div class="preview-page">
            <div class="fade-container">
                <button
                    class=move || scroll_button_class(!center.with(|c| c.is_first))
                    on:click=scroll_previous
                >
                    "\u{25B2}"
                </button>
                <div class="top-fade"></div>
                <div class="carousel" node_ref=container_ref on:scroll=move |_| measure()>
                    {cards}
                </div>
                <div class="bottom-fade"></div>
                <button
                    class=move || scroll_button_class(!center.with(|c| c.is_last))
                    on:click=scroll_next
                >
                    "\u{25BC}"
                </button>
            </div>
            <div class="preview-side">
                <PageHeading
                    title="Preview Your Videos"
                    subtitle=limits
                />
                <div class=move || selection_info_class(!selection.with(SelectionSet::is_empty))>
                    <span class="video-count">
                        "# Of Videos: " {move || selection.with(SelectionSet::len)}
                    </span>
                    <button
                        type="submit"
                        class="submit-button"
                        aria-label="Submit"
                        on:click=submit
                    >
                        <span class="button-text">"Create"</span>
                        <span class="button-stars">"\u{2728}"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_button_class() {
        assert_eq!(scroll_button_class(true), "scroll-button visible");
        assert_eq!(scroll_button_class(false), "scroll-button");
    }

    #[test]
    fn test_selection_info_class() {
        assert_eq!(selection_info_class(true), "selection-info show");
        assert_eq!(selection_info_class(false), "selection-info");
    }
}

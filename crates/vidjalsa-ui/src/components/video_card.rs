//! One entry of the preview carousel.

use leptos::prelude::*;
use vidjalsa_core::VideoCandidate;

/// Class of the card wrapper.
fn card_class(centered: bool) -> &'static str {
    if centered {
        "video-card centered"
    } else {
        "video-card"
    }
}

/// Class of an element only revealed on the centered card.
fn reveal_class(base: &'static str, centered: bool) -> String {
    if centered {
        format!("{base} visible")
    } else {
        base.to_string()
    }
}

/// Video card component.
///
/// The thumbnail links to the video in a new tab. The checkbox and title are
/// only revealed on the centered card, but the checkbox keeps working on every
/// card.
#[component]
pub fn VideoCard(
    /// The candidate to render.
    video: VideoCandidate,
    /// Whether this card is closest to the carousel's vertical center.
    #[prop(into)]
    centered: Signal<bool>,
    /// Whether this candidate is in the selection.
    #[prop(into)]
    selected: Signal<bool>,
    /// Called when the checkbox is toggled.
    on_toggle: Callback<()>,
) -> impl IntoView {
    let title = video.display_title().into_owned();
    let duration = video.formatted_duration();
    let alt = video.title.clone();

    view! {
        <div class=move || card_class(centered.get())>
            <div class="video-content">
                <div class="video-thumbnail-container">
                    <a
                        href=video.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="video-link"
                    >
                        <img src=video.thumbnail alt=alt class="video-thumbnail" />
                        <div class="video-duration">{duration}</div>
                    </a>
                </div>
                <div class=move || reveal_class("checkbox-container", centered.get())>
                    <input
                        type="checkbox"
                        class="checkbox"
                        prop:checked=move || selected.get()
                        on:change=move |_| on_toggle.run(())
                    />
                </div>
            </div>
            <p class=move || reveal_class("video-title", centered.get())>{title}</p>
        </div>
    }
}

//! Output view: where the generated blog was deployed.

use leptos::prelude::*;
use vidjalsa_core::{OutputState, VideoCandidate};

use crate::components::PageHeading;

/// Output page.
#[component]
pub fn OutputPage(
    /// Deployment handed over by the loading page.
    state: OutputState,
) -> impl IntoView {
    let OutputState {
        videos_info,
        deployment_url,
    } = state;

    let href = deployment_url.clone();
    let sources = videos_info
        .into_iter()
        .map(|video| view! { <SourceVideo video=video /> })
        .collect_view();

    view! {
        <div class="output-page">
            <PageHeading title="Your Blog Is Live" subtitle="Built From These Videos" />
            <a
                class="deployment-link"
                href=href
                target="_blank"
                rel="noopener noreferrer"
            >
                {deployment_url}
            </a>
            <ul class="source-videos">{sources}</ul>
        </div>
    }
}

#[component]
fn SourceVideo(video: VideoCandidate) -> impl IntoView {
    let title = video.display_title().into_owned();
    let alt = title.clone();
    let duration = video.formatted_duration();

    view! {
        <li class="source-video">
            <a href=video.link target="_blank" rel="noopener noreferrer">
                <img src=video.thumbnail alt=alt class="source-thumbnail" />
                <span class="source-title">{title}</span>
                <span class="source-duration">{duration}</span>
            </a>
        </li>
    }
}


//! Main application component.

use leptos::prelude::*;
use vidjalsa_core::{AppConfig, Route};

use crate::api::load_config;
use crate::components::{
    EntryEmptyState, InvalidStateEmptyState, MissingStateEmptyState, NotFoundEmptyState,
};
use crate::pages::{LoadingPage, OutputPage, PreviewPage};
use crate::router::{CurrentView, Navigator};
use crate::theme::generate_css_variables;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    provide_context(load_config());
    let navigator = Navigator::install();
    provide_context(navigator);

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <main class="app">
            {move || render_view(navigator.current())}
        </main>
    }
}

/// Get the configuration provided by [`App`].
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}

fn render_view(view: CurrentView) -> AnyView {
    match view {
        CurrentView::Ready(Route::Preview(state)) => view! { <PreviewPage state=state /> }.into_any(),
        CurrentView::Ready(Route::Loading(state)) => view! { <LoadingPage state=state /> }.into_any(),
        CurrentView::Ready(Route::Output(state)) => view! { <OutputPage state=state /> }.into_any(),
        CurrentView::Entry => view! { <EntryEmptyState /> }.into_any(),
        CurrentView::MissingState { path } => view! { <MissingStateEmptyState path=path /> }.into_any(),
        CurrentView::InvalidState { path, reason } => {
            view! { <InvalidStateEmptyState path=path reason=reason /> }.into_any()
        }
        CurrentView::NotFound { path } => view! { <NotFoundEmptyState path=path /> }.into_any(),
    }
}

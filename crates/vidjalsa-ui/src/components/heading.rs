//! Gradient page headings.

use leptos::prelude::*;

/// Two-line page heading: a display-font title over a larger subtitle.
#[component]
pub fn PageHeading(
    /// First line, set in the title font.
    title: &'static str,
    /// Second line.
    #[prop(into)]
    subtitle: String,
) -> impl IntoView {
    view! {
        <header class="page-heading">
            <h1 class="gradient-text heading-title">{title}</h1>
            <h1 class="gradient-text heading-subtitle">{subtitle}</h1>
        </header>
    }
}

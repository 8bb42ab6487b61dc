//! Horizontal progress bar for the loading view.

use leptos::prelude::*;

/// Clamp a percentage into `[0, 100]`.
fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// CSS width of the filled part.
fn fill_width(percent: f64) -> String {
    format!("{:.3}%", clamp_percent(percent))
}

/// Text drawn inside the fill.
fn label(percent: f64) -> String {
    format!("{:.0}%", clamp_percent(percent).floor())
}

/// Progress bar component.
///
/// The fill animates between updates, so a one-second tick reads as a smooth
/// crawl rather than a step.
#[component]
pub fn ProgressBar(
    /// Completion percentage in `[0, 100]`.
    #[prop(into)]
    completed: Signal<f64>,
) -> impl IntoView {
    view! {
        <div
            class="progress-bar"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", clamp_percent(completed.get()))
        >
            <div class="progress-bar-fill" style:width=move || fill_width(completed.get())>
                <span class="progress-bar-label">{move || label(completed.get())}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width_clamps() {
        assert_eq!(fill_width(-5.0), "0.000%");
        assert_eq!(fill_width(45.5), "45.500%");
        assert_eq!(fill_width(250.0), "100.000%");
        assert_eq!(fill_width(f64::NAN), "0.000%");
    }

    #[test]
    fn test_label_rounds_down() {
        assert_eq!(label(0.0), "0%");
        assert_eq!(label(89.9), "89%");
        assert_eq!(label(100.0), "100%");
    }
}

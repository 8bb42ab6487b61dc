//! Loading view: meteor shower, synthetic progress and the backend call.
//!
//! Progress ramps on a fixed interval until the hold point and waits there for
//! the backend. When the backend answers, progress jumps to 100%, the next
//! tick stops the interval, and after a grace period the page moves on to the
//! output view. If the backend call fails the error is logged and progress
//! stays parked.

use gloo_timers::callback::{Interval, Timeout};
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use vidjalsa_core::{LoadingState, ProcessVideosRequest, ProgressTicker, Route};

use crate::api;
use crate::app::use_config;
use crate::components::{MeteorShower, PageHeading, ProgressBar};
use crate::router::use_navigator;

/// Loading page.
#[component]
pub fn LoadingPage(
    /// Selection handed over by the preview page.
    state: LoadingState,
) -> impl IntoView {
    let config = use_config();
    let navigator = use_navigator();

    let ticker = RwSignal::new(ProgressTicker::new(&config.loading));
    let percent = Memo::new(move |_| ticker.with(ProgressTicker::percent));
    let complete = Memo::new(move |_| ticker.with(ProgressTicker::is_complete));

    // Progress timer
    let interval = StoredValue::new_local(None::<Interval>);
    interval.set_value(Some(Interval::new(
        config.loading.tick_interval_ms,
        move || {
            let outcome = ticker.try_update(ProgressTicker::tick);
            if outcome.is_none_or(|o| o.stops_timer()) {
                interval.update_value(|slot| {
                    slot.take();
                });
            }
        },
    )));

    // Backend call, fired once
    let request = ProcessVideosRequest::from(&state);
    let url = config.process_videos_url();
    spawn_local(async move {
        match api::process_videos(&url, &request).await {
            Ok(response) => {
                let finished = ticker.try_update(|t| t.complete(response.deployment_url));
                if finished.is_none() {
                    log!("Loading page closed before processing finished");
                }
            }
            Err(e) => {
                error!("There was a problem processing the videos: {e}");
            }
        }
    });

    // Hand-off to the output view after the grace period
    let grace_period_ms = config.loading.grace_period_ms;
    let selection = StoredValue::new(state);
    let grace = StoredValue::new_local(None::<Timeout>);
    Effect::new(move || {
        if !complete.get() || grace.with_value(Option::is_some) {
            return;
        }

        grace.set_value(Some(Timeout::new(grace_period_ms, move || {
            let Some(deployment_url) =
                ticker.with_untracked(|t| t.deployment_url().map(str::to_string))
            else {
                return;
            };
            let output = selection.with_value(|s| s.completion(deployment_url));
            navigator.navigate(Route::Output(output));
        })));
    });

    on_cleanup(move || {
        interval.update_value(|slot| {
            slot.take();
        });
        grace.update_value(|slot| {
            slot.take();
        });
    });

    view! {
        <div class="loading-page">
            <MeteorShower rate=percent />
            <div class="loading-container">
                <PageHeading
                    title="Creating Your Blog"
                    subtitle="This Might Take A While..."
                />
                <ProgressBar completed=percent />
            </div>
        </div>
    }
}

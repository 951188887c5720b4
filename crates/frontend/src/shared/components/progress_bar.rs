use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Animated progress bar used by the goals panel.
///
/// The fill starts at zero and grows to the target width shortly after
/// mount, so the CSS width transition plays on page load.
#[component]
pub fn ProgressBar(
    /// Completion in percent; values above 100 are clamped.
    percent: f64,
    /// Switches the fill to the goal-reached color.
    #[prop(optional)]
    reached: bool,
) -> impl IntoView {
    let target = percent.clamp(0.0, 100.0);
    let width = RwSignal::new(0.0_f64);

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(50).await;
            width.set(target);
        });
    });

    view! {
        <div class="progress">
            <div
                class=move || {
                    if reached {
                        "progress__fill progress__fill--reached"
                    } else {
                        "progress__fill"
                    }
                }
                style=move || format!("width: {:.1}%;", width.get())
            ></div>
        </div>
    }
}

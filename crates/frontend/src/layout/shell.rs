use leptos::prelude::*;

/// Two-pane application shell: fixed sidebar on the left, active page in the
/// center.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + Send + Sync + 'static,
    C: Fn() -> AnyView + Send + Sync + 'static,
{
    view! {
        <div class="shell">
            <aside class="shell__left">{left()}</aside>
            <main class="shell__center">{move || center()}</main>
        </div>
    }
}

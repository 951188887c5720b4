use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__title">"Eletromaster"</span>
                <span class="sidebar__subtitle">"Pintura Eletrostática"</span>
            </div>
            <ul class="sidebar__menu">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || {
                                        ctx.current_page.get() == page
                                    }
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {page.title()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

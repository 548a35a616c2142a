use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <nav class="nav-tabs">
            <A href="/" attr:class="nav-tab">"Rate"</A>
            <A href="/results" attr:class="nav-tab">"Results"</A>
        </nav>
    }
}

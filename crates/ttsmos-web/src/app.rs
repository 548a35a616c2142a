use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::nav::NavTabs;
use crate::pages::{rate::RatePage, results::ResultsPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <NavTabs />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=RatePage />
                        <Route path=path!("/results") view=ResultsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

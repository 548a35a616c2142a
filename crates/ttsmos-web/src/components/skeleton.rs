use leptos::prelude::*;

#[component]
pub fn Skeleton(#[prop(into)] class: String) -> impl IntoView {
    view! { <div class=format!("skeleton {}", class)></div> }
}

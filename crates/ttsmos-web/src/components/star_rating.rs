use leptos::prelude::*;
use ttsmos_core::MAX_RATING;

/// Five star buttons; button `i` reports `i`, stars up to the current rating are filled.
#[component]
pub fn StarRating<F>(rating: Signal<u8>, on_rate: F) -> impl IntoView
where
    F: Fn(u8) + Clone + Send + Sync + 'static,
{
    view! {
        <div class="star-rating">
            {(1..=MAX_RATING).map(|i| {
                let on_rate = on_rate.clone();
                view! {
                    <button
                        class="star-btn"
                        aria-label=format!("Rate {} of {}", i, MAX_RATING)
                        on:click=move |_| on_rate(i)
                    >
                        <span class={move || if i <= rating.get() { "star filled" } else { "star" }}>
                            "★"
                        </span>
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

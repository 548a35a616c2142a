use leptos::prelude::*;
use ttsmos_core::{save_language, Language};

use crate::storage::BrowserStore;

#[component]
pub fn LanguageSelect(language: RwSignal<Language>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(lang) = Language::from_code(&event_target_value(&ev)) else {
            return;
        };
        language.set(lang);

        if let Err(e) = save_language(&BrowserStore, lang) {
            leptos::logging::warn!("Failed to save language preference: {}", e);
        }
    };

    view! {
        <div class="language-select">
            <span class="globe">"🌐"</span>
            <select prop:value=move || language.get().code() on:change=on_change>
                {Language::all().iter().map(|l| view! {
                    <option value=l.code()>{l.label()}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}

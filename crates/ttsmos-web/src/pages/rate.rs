use leptos::prelude::*;
use ttsmos_core::{Criterion, Language, RatingCollector, RatingText};

use crate::components::language_select::LanguageSelect;
use crate::components::star_rating::StarRating;
use crate::storage::persisted_language;

#[component]
pub fn RatePage() -> impl IntoView {
    let language = persisted_language(Language::En);
    let collector = RwSignal::new(RatingCollector::default());
    let t = move || RatingText::for_language(language.get());

    let (reference_url, inferenced_text, samples) = collector.with_untracked(|c| {
        (
            c.reference_audio_url.clone(),
            c.inferenced_text.clone(),
            c.samples().to_vec(),
        )
    });

    let sample_rows = samples
        .into_iter()
        .map(|sample| {
            let id = sample.id;
            view! {
                <div class="sample-row">
                    <div class="sample-name">{sample.name}</div>
                    <div class="sample-audio">
                        <audio controls=true>
                            <source src=sample.audio_url type="audio/mpeg" />
                            {move || t().no_audio_support}
                        </audio>
                    </div>
                    {Criterion::all().iter().map(|&criterion| view! {
                        <div class="sample-rating">
                            <StarRating
                                rating=Signal::derive(move || collector.with(|c| c.score(id, criterion)))
                                on_rate=move |v| collector.update(|c| c.update_rating(id, criterion, v))
                            />
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page rate-page">
            <div class="page-header">
                <h1>{move || t().title}</h1>
                <LanguageSelect language=language />
            </div>

            <div class="instructions-panel">
                <h3>{move || t().instructions}</h3>
                <ul>
                    <li>{move || t().step1}</li>
                    <li>{move || t().step2}</li>
                    <li>
                        {move || t().step3}
                        <ul class="criteria">
                            <li>"• "{move || t().natural_desc}</li>
                            <li>"• "{move || t().similarity_desc}</li>
                        </ul>
                    </li>
                </ul>
            </div>

            <div class="top-grid">
                <div class="inferenced-text-panel">
                    <h2>{move || t().inferenced_text}</h2>
                    <p>{inferenced_text}</p>
                </div>
                <div class="reference-panel">
                    <h2>{move || t().reference_voice}</h2>
                    <audio controls=true>
                        <source src=reference_url type="audio/mpeg" />
                        {move || t().no_audio_support}
                    </audio>
                </div>
            </div>

            <div class="sample-header">
                <div>{move || t().audio_sample}</div>
                <div>{move || t().audio}</div>
                <div>
                    {move || t().naturalness}
                    <span class="scale-hint">{move || t().natural_scale}</span>
                </div>
                <div>
                    {move || t().similarity}
                    <span class="scale-hint">{move || t().similarity_scale}</span>
                </div>
            </div>

            <div class="sample-list">{sample_rows}</div>
        </div>
    }
}

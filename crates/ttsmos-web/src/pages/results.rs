use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use ttsmos_core::{
    build_table_view, compute_best_scores, FootnoteConfig, Language, TableState, TableText,
    TableView,
};

use crate::api;
use crate::components::language_select::LanguageSelect;
use crate::components::skeleton::Skeleton;
use crate::storage::persisted_language;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let language = persisted_language(Language::Th);
    let (state, set_state) = signal(TableState::default());
    let footnotes = StoredValue::new(FootnoteConfig::default());
    let t = move || TableText::for_language(language.get());

    // Results that land after the page is gone are dropped
    let mounted = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.store(false, Ordering::Relaxed)
    });

    // Fetch table on mount
    Effect::new(move || {
        let mounted = mounted.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::fetch_ratings_table().await;
            if let Err(e) = &outcome {
                leptos::logging::error!("Error fetching ratings table data: {}", e);
            }
            if !mounted.load(Ordering::Relaxed) {
                return;
            }
            set_state.update(|s| s.resolve(outcome));
        });
    });

    // Only depends on the data, never on the language
    let best_scores = Memo::new(move |_| state.with(|s| s.data().map(compute_best_scores)));

    let table_view = move || {
        let text = t();
        let best = best_scores.get()?;
        state.with(|s| {
            let data = s.data()?;
            Some(footnotes.with_value(|f| build_table_view(data, &best, text, f)))
        })
    };

    let failure = move || {
        state.with(|s| match s {
            TableState::Failed(e) => Some(e.clone()),
            _ => None,
        })
    };

    move || {
        if state.with(TableState::is_loading) {
            return view! {
                <div class="page results-page">
                    <div class="page-header">
                        <h1><Skeleton class="h-8 w-64" /></h1>
                    </div>
                    <div class="table-scroll">
                        <Skeleton class="h-64 w-full" />
                    </div>
                    <span class="sr-only">{move || t().loading}</span>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="page results-page">
                <div class="page-header">
                    <h1>{move || t().title}</h1>
                    <LanguageSelect language=language />
                </div>

                {move || failure().map(|e| view! {
                    <div class="error-panel">
                        <p>{move || t().load_failed}</p>
                        <p class="error-detail">{e}</p>
                    </div>
                })}

                {move || table_view().map(|table| results_table(table, t()))}

                <footer class="page-footer">
                    <p>{move || t().footer}</p>
                </footer>
            </div>
        }
        .into_any()
    }
}

fn results_table(table: TableView, text: &'static TableText) -> impl IntoView {
    let TableView {
        model_header,
        groups,
        columns,
        rows,
        total_ratings,
        notes,
    } = table;

    view! {
        <div class="table-scroll">
            <table class="results-table">
                <thead>
                    <tr>
                        <th rowspan="2" class="model-col">{model_header}</th>
                        {groups.into_iter().map(|g| view! {
                            <th colspan=g.span.to_string() class="group-col">{g.label}</th>
                        }).collect::<Vec<_>>()}
                    </tr>
                    <tr>
                        {columns.into_iter().map(|c| view! {
                            <th class="category-col">{c}</th>
                        }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().enumerate().map(|(i, row)| view! {
                        <tr class={if i % 2 == 0 { "row-even" } else { "row-odd" }}>
                            <td class="model-name">
                                {row.model_name}
                                {row.marker.map(|m| view! { <sup>{m}</sup> })}
                            </td>
                            {row.cells.into_iter().map(|cell| view! {
                                <td class="score-cell">
                                    <span class={if cell.emphasized { "font-bold" } else { "" }}>
                                        {cell.text}
                                    </span>
                                </td>
                            }).collect::<Vec<_>>()}
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>

        <div class="total-ratings">
            <p>{text.ratings}" "{total_ratings}</p>
        </div>

        <div class="notes">
            <p class="notes-title">{text.notes}</p>
            <ol>
                {notes.into_iter().map(|note| view! {
                    <li><sup>{note.marker}</sup>" "{note.text}</li>
                }).collect::<Vec<_>>()}
            </ol>
        </div>
    }
}

use leptos::{component, event_target_value, view, IntoView, ReadSignal, SignalGet, SignalSet, WriteSignal};

use crate::constants::STAGE_FILTER_ALL;
use crate::models::{Stage, StageFilter};

#[component]
#[must_use]
pub fn FilterBar(
    stages: Vec<Stage>,
    stage_filter: ReadSignal<StageFilter>,
    set_stage_filter: WriteSignal<StageFilter>,
    search_text: ReadSignal<String>,
    set_search_text: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <select
                class="stage-select"
                prop:value=move || stage_filter.get().as_selector().to_string()
                on:change=move |ev| set_stage_filter.set(StageFilter::from_selector(&event_target_value(&ev)))
            >
                <option value=STAGE_FILTER_ALL>"All stages"</option>
                {stages.into_iter().map(|stage| {
                    let label = stage.name.clone();
                    view! { <option value=stage.name>{label}</option> }
                }).collect::<Vec<_>>()}
            </select>
            <div class="search-box">
                <i class="fa-solid fa-magnifying-glass"></i>
                <input
                    type="text"
                    placeholder="Search artists..."
                    prop:value=move || search_text.get()
                    on:input=move |ev| set_search_text.set(event_target_value(&ev))
                />
                {move || (!search_text.get().is_empty()).then(|| view! {
                    <button
                        class="clear-search"
                        on:click=move |_| set_search_text.set(String::new())
                        title="Clear search"
                    >
                        "×"
                    </button>
                })}
            </div>
        </div>
    }
}

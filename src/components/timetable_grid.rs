use std::rc::Rc;

use leptos::{
    component, create_memo, use_context, view, IntoView, ReadSignal, RwSignal, SignalGet, SignalUpdate, SignalWith,
};

use crate::config::AppConfig;
use crate::filter::{stages_for_filter, PerformanceFilter};
use crate::layout::{layout_stage, time_slots, timeline_height, BlockLayout};
use crate::models::{stage_css_class, Performance, StageFilter, TimetableData};
use crate::storage::BrowserSelection;

#[component]
fn PerformanceBlock(
    performance: Performance,
    layout: BlockLayout,
    selection: RwSignal<BrowserSelection>,
) -> impl IntoView {
    let selected_id = performance.id.clone();
    let is_selected = create_memo(move |_| selection.with(|s| s.is_selected(&selected_id)));
    let stage_class = stage_css_class(&performance.stage);
    let id = performance.id.clone();
    let title = format!("{} @ {} ({})", performance.artist, performance.stage, performance.time_label());

    view! {
        <div
            class=move || {
                if is_selected.get() {
                    format!("performance-block {stage_class} selected")
                } else {
                    format!("performance-block {stage_class}")
                }
            }
            style=layout.to_style()
            on:click=move |_| selection.update(|s| {
                s.toggle(&id);
            })
            title=title
        >
            <div class="performance-artist">{performance.artist.clone()}</div>
            <div class="performance-time">{performance.time_label()}</div>
            {move || is_selected.get().then(|| view! { <i class="fa-solid fa-star selected-icon"></i> })}
        </div>
    }
}

/// Stage columns for one day with hour ruler and lane-split performance blocks
#[component]
#[must_use]
pub fn TimetableGrid(
    data: Rc<TimetableData>,
    selected_day: ReadSignal<u8>,
    stage_filter: ReadSignal<StageFilter>,
    search_text: ReadSignal<String>,
    selection: RwSignal<BrowserSelection>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default().layout;
    let column_style = format!("height: {}px;", timeline_height(&config));
    let slot_style = format!("height: {}px;", config.pixels_per_hour);

    let columns = move || {
        let filter = PerformanceFilter {
            day: selected_day.get(),
            stage: stage_filter.get(),
            search: search_text.get(),
        };
        let visible = filter.apply(&data.performances);
        if visible.is_empty() {
            return view! {
                <div class="empty-state">
                    <i class="fa-solid fa-music"></i>
                    <p>"No performances match your filters."</p>
                </div>
            }.into_view();
        }

        let placed = layout_stage(&visible, &config);
        let column_style = column_style.clone();
        stages_for_filter(&data.stages, &filter.stage)
            .into_iter()
            .map(|stage| {
                let blocks = placed
                    .iter()
                    .filter(|p| p.performance.stage == stage.name)
                    .map(|p| view! {
                        <PerformanceBlock performance=p.performance.clone() layout=p.layout selection=selection />
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="stage-column">
                        <div
                            class=format!("stage-header {}", stage_css_class(&stage.name))
                            title=format!("{} · capacity {}", stage.location, stage.capacity)
                        >
                            {stage.name.clone()}
                        </div>
                        <div class="stage-body" style=column_style.clone()>
                            {blocks}
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_view()
    };

    view! {
        <div class="timetable-grid">
            <div class="time-ruler">
                <div class="stage-header"></div>
                {time_slots().into_iter().map(|slot| view! {
                    <div class="time-slot" style=slot_style.clone()>{slot}</div>
                }).collect::<Vec<_>>()}
            </div>
            {columns}
        </div>
    }
}

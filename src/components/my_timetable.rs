use std::rc::Rc;

use leptos::{
    component, use_context, view, IntoView, ReadSignal, RwSignal, SignalGet, SignalUpdate, SignalWith, View,
    WriteSignal,
};

use crate::components::toast::{show_toast, Toast};
use crate::config::AppConfig;
use crate::export::{download_text, export_text};
use crate::models::{stage_css_class, venue_marker, TimetableData};
use crate::schedule::{day_plan, DayPlan, PlanEntry};
use crate::storage::BrowserSelection;
use crate::walking::{festival_table, RouteLeg};

fn short_stage_name(stage: &str) -> &str {
    venue_marker(stage).map_or(stage, |marker| marker.short_name())
}

#[component]
fn RouteLegView(leg: RouteLeg) -> impl IntoView {
    if leg.is_same_stage() {
        return view! {
            <div class="route-leg route-same">
                <span class="route-emoji">{leg.difficulty.emoji()}</span>
                <span class="route-label">{leg.difficulty.label()}</span>
            </div>
        }
        .into_view();
    }

    let summary = format!(
        "{} → {}: {} min walk",
        short_stage_name(&leg.from_stage),
        short_stage_name(&leg.to_stage),
        leg.minutes
    );
    view! {
        <div class=format!("route-leg {}", leg.difficulty.css_class())>
            <span class="route-emoji">{leg.difficulty.emoji()}</span>
            <span class="route-label">{summary}</span>
            <span class="route-difficulty">{leg.difficulty.label()}</span>
            {leg.is_long_walk().then(|| view! {
                <span class="long-walk-warning">
                    <i class="fa-solid fa-person-walking"></i>
                    " Long walk, leave early"
                </span>
            })}
            {(!leg.fits_gap()).then(|| view! {
                <span class="tight-gap-warning">
                    {format!("Only {} min between sets", leg.gap_minutes.max(0))}
                </span>
            })}
        </div>
    }
    .into_view()
}

fn conflict_message(entry: &PlanEntry<'_>, data: &TimetableData) -> String {
    let names: Vec<&str> = entry
        .conflicting_ids
        .iter()
        .filter_map(|id| data.performance(id))
        .map(|p| p.artist.as_str())
        .collect();
    format!("Overlaps with {}", names.join(", "))
}

fn plan_entry_view(entry: &PlanEntry<'_>, data: &TimetableData, selection: RwSignal<BrowserSelection>) -> View {
    let performance = entry.performance;
    let id = performance.id.clone();
    let class = if entry.has_conflict() {
        format!("plan-entry {} conflict", stage_css_class(&performance.stage))
    } else {
        format!("plan-entry {}", stage_css_class(&performance.stage))
    };
    let warning = entry.has_conflict().then(|| conflict_message(entry, data));

    view! {
        <div class=class>
            <div class="plan-time">{performance.time_label()}</div>
            <div class="plan-details">
                <div class="plan-artist">{performance.artist.clone()}</div>
                <div class="plan-stage">{performance.stage.clone()}</div>
                {warning.map(|text| view! {
                    <div class="conflict-warning">
                        <i class="fa-solid fa-triangle-exclamation"></i>
                        " " {text}
                    </div>
                })}
            </div>
            <button
                class="remove-button"
                on:click=move |_| selection.update(|s| s.remove(&id))
                title="Remove from My Timetable"
            >
                "×"
            </button>
        </div>
        {entry.leg_to_next.clone().map(|leg| view! { <RouteLegView leg=leg /> })}
    }
    .into_view()
}

fn day_plan_view(plan: &DayPlan<'_>, data: &TimetableData, selection: RwSignal<BrowserSelection>) -> View {
    if plan.is_empty() {
        return view! {
            <div class="empty-state">
                <i class="fa-regular fa-star"></i>
                <p>"Nothing picked for this day yet."</p>
                <p class="empty-hint">"Tap performances in the timetable to add them here."</p>
            </div>
        }
        .into_view();
    }

    let entries = plan
        .entries
        .iter()
        .map(|entry| plan_entry_view(entry, data, selection))
        .collect::<Vec<_>>();
    let total = (plan.total_walking_minutes > 0).then(|| {
        format!(
            "Total walking: {} min across {} moves",
            plan.total_walking_minutes,
            plan.move_count()
        )
    });

    view! {
        <div class="day-plan">
            {entries}
            {total.map(|text| view! {
                <div class="walking-total">
                    <i class="fa-solid fa-shoe-prints"></i>
                    " " {text}
                </div>
            })}
        </div>
    }
    .into_view()
}

/// Personal itinerary for the selected day with conflicts, walks and export
#[component]
#[must_use]
pub fn MyTimetable(
    data: Rc<TimetableData>,
    selected_day: ReadSignal<u8>,
    selection: RwSignal<BrowserSelection>,
    set_toast: WriteSignal<Toast>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let export_data = Rc::clone(&data);
    let on_export = move |_| {
        let text = selection.with(|s| export_text(&export_data, s.ids(), &config.festival_name));
        match download_text(&text, &config.export_file_name) {
            Ok(()) => show_toast(set_toast, "My Timetable exported"),
            Err(e) => {
                leptos::logging::error!("Export failed: {e}");
                show_toast(set_toast, format!("Export failed: {e}"));
            }
        }
    };

    let on_clear = move |_| {
        selection.update(BrowserSelection::clear);
        show_toast(set_toast, "My Timetable cleared");
    };

    let plan = move || {
        let day = selected_day.get();
        selection.with(|s| {
            let plan = day_plan(&data, s.ids(), day, festival_table());
            day_plan_view(&plan, &data, selection)
        })
    };

    view! {
        <div class="my-timetable">
            <div class="my-timetable-actions">
                <button
                    class="export-button"
                    on:click=on_export
                    disabled=move || selection.with(BrowserSelection::is_empty)
                    title="Download as text"
                >
                    <i class="fa-solid fa-file-export"></i>
                    " Export"
                </button>
                <button
                    class="clear-button"
                    on:click=on_clear
                    disabled=move || selection.with(BrowserSelection::is_empty)
                    title="Remove every selected performance"
                >
                    <i class="fa-solid fa-trash"></i>
                    " Clear"
                </button>
            </div>
            {plan}
        </div>
    }
}
